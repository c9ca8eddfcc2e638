//! State management for the CarloSphere TUI.
//!
//! The state is decomposed by concern:
//!
//! - [`SessionStore`] - the authenticated session and its persistence
//! - [`AuthFlow`] - login/signup form state and local validation
//! - [`WalletCache`] - last-fetched wallet snapshot plus dashboard view state
//! - [`TransferWizard`] - the multi-step send/request money flow
//! - [`NavigationState`] - tab navigation with the auth gate
//! - [`AppConfig`] - persistent configuration with load/save
//!
//! [`App`] composes these and owns the async channel that background tasks
//! report back on.

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::client::SphereClient;
use crate::constants::TOAST_TICKS;
use crate::domain::{ApiError, ChatPreview, Session, WalletSnapshot, demo_chats, filter_chats};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod auth;
pub mod config;
pub mod navigation;
pub mod session;
pub mod wallet;
pub mod wizard;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthFlow, AuthNotice, AuthView, NoticeKind};
pub use config::AppConfig;
pub use navigation::{GateResult, NavigationState, Tab};
pub use session::{FsSessionStorage, MemorySessionStorage, SessionStorage, SessionStore};
pub use wallet::WalletCache;
pub use wizard::{
    PinVerifier, SendMethod, ServiceKind, StaticPinVerifier, TransferWizard, WizardFlow,
    WizardStep,
};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Login request finished.
    LoginCompleted(Result<Session, ApiError>),
    /// Signup request finished.
    SignupCompleted(Result<Session, ApiError>),
    /// The post-login delay elapsed; move to the wallet dashboard.
    RedirectToWallet,
    /// Wallet refresh finished.
    SnapshotFetched(Result<WalletSnapshot, ApiError>),
    /// PIN verification round trip finished for the wizard instance
    /// identified by `generation`. Results from a wizard that has since
    /// been closed or replaced are dropped.
    PinVerified {
        generation: u64,
        result: Result<bool, ApiError>,
    },
    /// Transfer/request/deposit submission finished, carrying the
    /// confirmation text on success.
    SubmitCompleted(Result<String, ApiError>),
}

// ============================================================================
// Modal State
// ============================================================================

/// The single modal slot. At most one modal is ever open, which is what
/// keeps the wizard exclusive with the top-up prompt.
#[derive(Debug)]
pub enum Modal {
    /// Send/request money wizard.
    Wizard(TransferWizard),
    /// Top-up amount prompt.
    TopUp { amount: String },
}

// ============================================================================
// Chat Panel
// ============================================================================

/// Chat list state. Conversations are demo data; only the list, search,
/// and selection are live.
#[derive(Debug)]
pub struct ChatPanel {
    chats: Vec<ChatPreview>,
    pub search: String,
    pub search_focused: bool,
    pub selected: usize,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            chats: demo_chats(),
            search: String::new(),
            search_focused: false,
            selected: 0,
        }
    }
}

impl ChatPanel {
    /// Conversations matching the search text, in list order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&ChatPreview> {
        filter_chats(&self.chats, &self.search)
    }

    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        let count = self.filtered().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

// ============================================================================
// Toast
// ============================================================================

/// Transient confirmation line at the bottom of the screen.
#[derive(Debug)]
pub struct Toast {
    pub text: String,
    /// Remaining ticks before the toast disappears.
    pub ticks: u8,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Holds the decomposed sub-states, the backend client, and the channel
/// that spawned tasks use to report results back to the main loop.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Tab navigation with the auth gate.
    pub nav: NavigationState,

    /// Authenticated session and its persistence.
    pub session: SessionStore,

    /// Login/signup form state.
    pub auth: AuthFlow,

    /// Wallet snapshot cache and dashboard view state.
    pub wallet: WalletCache,

    /// Chat list state.
    pub chat: ChatPanel,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// The single open modal, if any. Changed only through
    /// [`Self::set_modal`] so in-flight verification results can be
    /// matched to the instance that requested them.
    pub modal: Option<Modal>,

    /// Monotonic id of the current modal occupant; bumped on every change
    /// of the modal slot. A verification result carrying an older value
    /// belongs to a wizard that no longer exists.
    pub(crate) wizard_generation: u64,

    /// Transient confirmation line.
    pub toast: Option<Toast>,

    /// Whether the application should exit.
    pub exit: bool,

    /// Path of the most recently exported statement.
    pub last_statement_path: Option<PathBuf>,

    /// Persistent configuration.
    pub config: AppConfig,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // This is intentional fire-and-forget: receivers may be dropped during
    // shutdown, and we don't want to propagate those errors.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Backend Client
    // ========================================================================
    /// CarloSphere API client for background requests.
    pub(crate) client: SphereClient,
}

impl App {
    /// Creates the app state. A persisted session restores straight to the
    /// wallet dashboard.
    #[must_use]
    pub fn new(
        config: AppConfig,
        api_url: &str,
        storage: Box<dyn SessionStorage + Send>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let session = SessionStore::new(storage);
        let mut nav = NavigationState::new();
        if session.is_authenticated() {
            nav.activate(Tab::Wallet, true);
        }
        let mut wallet = WalletCache::new();
        wallet.show_balance = config.show_balance;

        Self {
            nav,
            session,
            auth: AuthFlow::new(),
            wallet,
            chat: ChatPanel::default(),
            modal: None,
            wizard_generation: 0,
            toast: None,
            exit: false,
            last_statement_path: None,
            config,
            message_tx,
            message_rx,
            client: SphereClient::new(api_url),
        }
    }

    /// Returns `true` when a session is established.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The open wizard, if the modal slot holds one.
    #[must_use]
    pub fn wizard(&self) -> Option<&TransferWizard> {
        match &self.modal {
            Some(Modal::Wizard(wizard)) => Some(wizard),
            _ => None,
        }
    }

    pub(crate) fn wizard_mut(&mut self) -> Option<&mut TransferWizard> {
        match &mut self.modal {
            Some(Modal::Wizard(wizard)) => Some(wizard),
            _ => None,
        }
    }

    /// Replaces the modal slot, invalidating any verification still in
    /// flight for the previous occupant.
    pub(crate) fn set_modal(&mut self, modal: Option<Modal>) {
        self.wizard_generation = self.wizard_generation.wrapping_add(1);
        self.modal = modal;
    }

    /// Shows a transient confirmation line.
    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast {
            text: text.into(),
            ticks: TOAST_TICKS,
        });
    }

    /// Advances per-tick state (toast countdown).
    pub fn on_tick(&mut self) {
        if let Some(toast) = &mut self.toast {
            toast.ticks = toast.ticks.saturating_sub(1);
            if toast.ticks == 0 {
                self.toast = None;
            }
        }
    }

    /// Drains and applies all pending background-task messages.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Auth submission, wallet refresh, wizard submission, clipboard, statements
mod app_actions;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
