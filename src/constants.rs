//! Application constants for the CarloSphere TUI.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick rate.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Delay before redirecting to the wallet tab after a successful login.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Default lifetime of a toast notification, in ticks.
pub const TOAST_TICKS: u8 = 30;

// ============================================================================
// Backend
// ============================================================================

/// Default backend base URL (overridable via config or `CARLOSPHERE_API_URL`).
pub const DEFAULT_API_URL: &str = "https://carlosphere-backend.onrender.com";

/// Environment variable that overrides the configured backend base URL.
pub const API_URL_ENV: &str = "CARLOSPHERE_API_URL";

// ============================================================================
// Display
// ============================================================================

/// Currency prefix used for all amounts.
pub const CURRENCY_PREFIX: &str = "KES";

/// Placeholder shown in place of the balance when hidden.
pub const MASKED_BALANCE: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the bottom tab bar (in rows).
pub const TAB_BAR_HEIGHT: u16 = 3;
