//! Tab navigation shell.
//!
//! The transition function itself enforces the auth gate: activating a
//! gated tab without a session is rejected here, not by the individual
//! screens, so there is exactly one place that can leak a protected view.

// ============================================================================
// Tabs
// ============================================================================

/// Top-level destinations of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Wallet,
    Chat,
    Works,
    Learn,
    Community,
}

impl Tab {
    /// All tabs, in bar order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Wallet,
        Self::Chat,
        Self::Works,
        Self::Learn,
        Self::Community,
    ];

    /// Short label on the tab bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Wallet => "Wallet",
            Self::Chat => "Chat",
            Self::Works => "Works",
            Self::Learn => "Learn",
            Self::Community => "Community",
        }
    }

    /// Header title shown while the tab is active.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "CarloSphere One",
            Self::Wallet => "CarloWallet",
            Self::Chat => "CarloChat",
            Self::Works => "CarloWorks",
            Self::Learn => "CarloLearn",
            Self::Community => "CarloCommunity",
        }
    }

    /// Whether the tab needs an authenticated session.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Wallet | Self::Chat)
    }
}

// ============================================================================
// Navigation State
// ============================================================================

/// Outcome of a tab activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResult {
    /// The tab is now active.
    Switched,
    /// A gated tab was requested without a session; nothing changed.
    Denied,
}

/// Active-tab state. Every tab change goes through [`Self::activate`].
#[derive(Debug, Default)]
pub struct NavigationState {
    active: Tab,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Tabs shown on the bar. Signed out, only Home is reachable.
    #[must_use]
    pub fn visible_tabs(authenticated: bool) -> &'static [Tab] {
        if authenticated {
            &Tab::ALL
        } else {
            &Tab::ALL[..1]
        }
    }

    /// Attempts to switch to `tab`. Gated tabs are denied without a
    /// session and the active tab stays put.
    pub fn activate(&mut self, tab: Tab, authenticated: bool) -> GateResult {
        if tab.requires_auth() && !authenticated {
            return GateResult::Denied;
        }
        self.active = tab;
        GateResult::Switched
    }

    /// Cycles to the next visible tab.
    pub fn next_tab(&mut self, authenticated: bool) {
        let tabs = Self::visible_tabs(authenticated);
        let idx = tabs.iter().position(|&t| t == self.active).unwrap_or(0);
        self.active = tabs[(idx + 1) % tabs.len()];
    }

    /// Cycles to the previous visible tab.
    pub fn prev_tab(&mut self, authenticated: bool) {
        let tabs = Self::visible_tabs(authenticated);
        let idx = tabs.iter().position(|&t| t == self.active).unwrap_or(0);
        self.active = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    /// Drops back to Home (logout).
    pub fn reset(&mut self) {
        self.active = Tab::Home;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_gated_tab_denied_without_session() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.activate(Tab::Wallet, false), GateResult::Denied);
        assert_eq!(nav.active(), Tab::Home);

        assert_eq!(nav.activate(Tab::Wallet, true), GateResult::Switched);
        assert_eq!(nav.active(), Tab::Wallet);
    }

    #[rstest]
    #[case(Tab::Home, false)]
    #[case(Tab::Wallet, true)]
    #[case(Tab::Chat, true)]
    #[case(Tab::Works, false)]
    #[case(Tab::Learn, false)]
    #[case(Tab::Community, false)]
    fn test_auth_gates(#[case] tab: Tab, #[case] gated: bool) {
        assert_eq!(tab.requires_auth(), gated);
    }

    #[test]
    fn test_ungated_tabs_open_signed_out() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.activate(Tab::Learn, false), GateResult::Switched);
        assert_eq!(nav.active(), Tab::Learn);
    }

    #[test]
    fn test_visible_tabs_depend_on_session() {
        assert_eq!(NavigationState::visible_tabs(false), &[Tab::Home]);
        assert_eq!(NavigationState::visible_tabs(true).len(), 6);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut nav = NavigationState::new();
        nav.prev_tab(true);
        assert_eq!(nav.active(), Tab::Community);
        nav.next_tab(true);
        assert_eq!(nav.active(), Tab::Home);

        // Signed out, cycling stays on Home.
        nav.next_tab(false);
        assert_eq!(nav.active(), Tab::Home);
    }

    #[test]
    fn test_titles_per_tab() {
        assert_eq!(Tab::Wallet.title(), "CarloWallet");
        assert_eq!(Tab::Home.title(), "CarloSphere One");
    }
}
