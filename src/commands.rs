//! Command pattern for key event handling.
//!
//! Key events are first mapped to semantic [`AppCommand`]s based on the
//! current [`InputContext`], then executed against the app state. This
//! keeps keybindings testable in isolation and in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Tab;

// ============================================================================
// Input Context
// ============================================================================

/// The active input context, which determines how key events are
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Login/signup form on the Home tab.
    AuthForm,
    /// Signed-in browsing on a tab without its own input (Home, Works,
    /// Learn, Community).
    Browse,
    /// Wallet dashboard.
    Dashboard,
    /// Wallet transaction search input has focus.
    SearchInput,
    /// Chat list.
    ChatList,
    /// Chat search input has focus.
    ChatSearch,
    /// Wizard options or service-select menu.
    WizardMenu,
    /// Wizard field entry.
    WizardFields,
    /// Wizard PIN step.
    WizardPin,
    /// Top-up amount prompt.
    TopUp,
}

impl InputContext {
    /// Returns `true` if this context routes printable keys into a text
    /// input.
    #[must_use]
    #[allow(dead_code)]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(
            self,
            Self::AuthForm
                | Self::SearchInput
                | Self::ChatSearch
                | Self::WizardFields
                | Self::WizardPin
                | Self::TopUp
        )
    }

    /// Returns `true` if this context belongs to an open modal.
    #[must_use]
    #[allow(dead_code)]
    pub const fn is_modal(&self) -> bool {
        matches!(
            self,
            Self::WizardMenu | Self::WizardFields | Self::WizardPin | Self::TopUp
        )
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute. The "what" of user intent,
/// decoupled from the "how" of key input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Close the open modal or unfocus the active input.
    Dismiss,
    /// Sign out.
    Logout,

    // === Tab Navigation ===
    /// Jump straight to a tab.
    SwitchTab(Tab),
    /// Cycle to the next visible tab.
    NextTab,
    /// Cycle to the previous visible tab.
    PrevTab,

    // === Text & Focus ===
    /// Type a character into the focused input.
    TypeChar(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Submit the active form or confirm the current step.
    Submit,

    // === Auth Form ===
    /// Switch between login and signup.
    SwitchAuthView,
    /// Show or hide password text.
    TogglePasswordVisibility,

    // === Dashboard ===
    /// Open the send-money wizard.
    OpenSend,
    /// Open the request-money wizard.
    OpenRequest,
    /// Open the top-up prompt.
    OpenTopUp,
    /// Refresh the wallet snapshot.
    Refresh,
    /// Toggle balance visibility.
    ToggleBalance,
    /// Cycle the transaction kind filter.
    CycleFilter,
    /// Focus the search input of the active list.
    FocusSearch,
    /// Export the filtered transactions as a statement file.
    ExportStatement,
    /// Open the last exported statement.
    OpenStatement,
    /// Copy the account number to the clipboard.
    CopyAccount,

    // === List Navigation ===
    /// Move selection up.
    MoveUp,
    /// Move selection down.
    MoveDown,

    /// No action for this key in this context.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command. Pure translation with no side
    /// effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        // Ctrl+C quits from every context.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }
        match context {
            InputContext::AuthForm => Self::map_auth_keys(key),
            InputContext::Browse => Self::map_browse_keys(key),
            InputContext::Dashboard => Self::map_dashboard_keys(key),
            InputContext::SearchInput | InputContext::ChatSearch => Self::map_search_keys(key),
            InputContext::ChatList => Self::map_chat_keys(key),
            InputContext::WizardMenu => Self::map_wizard_menu_keys(key),
            InputContext::WizardFields => Self::map_wizard_field_keys(key),
            InputContext::WizardPin | InputContext::TopUp => Self::map_digit_entry_keys(key),
        }
    }

    /// Tab jumps shared by the non-input contexts.
    fn map_tab_digit(c: char) -> Option<AppCommand> {
        let tab = match c {
            '1' => Tab::Home,
            '2' => Tab::Wallet,
            '3' => Tab::Chat,
            '4' => Tab::Works,
            '5' => Tab::Learn,
            '6' => Tab::Community,
            _ => return None,
        };
        Some(AppCommand::SwitchTab(tab))
    }

    fn map_auth_keys(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => AppCommand::SwitchAuthView,
                KeyCode::Char('p') => AppCommand::TogglePasswordVisibility,
                _ => AppCommand::Noop,
            };
        }
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Tab | KeyCode::Down => AppCommand::FocusNext,
            KeyCode::BackTab | KeyCode::Up => AppCommand::FocusPrev,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_browse_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('l') => AppCommand::Logout,
            KeyCode::Tab => AppCommand::NextTab,
            KeyCode::BackTab => AppCommand::PrevTab,
            KeyCode::Char(c) => Self::map_tab_digit(c).unwrap_or(AppCommand::Noop),
            _ => AppCommand::Noop,
        }
    }

    fn map_dashboard_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('s') => AppCommand::OpenSend,
            KeyCode::Char('i') => AppCommand::OpenRequest,
            KeyCode::Char('t') => AppCommand::OpenTopUp,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('v') => AppCommand::ToggleBalance,
            KeyCode::Char('f') => AppCommand::CycleFilter,
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Char('e') => AppCommand::ExportStatement,
            KeyCode::Char('o') => AppCommand::OpenStatement,
            KeyCode::Char('y') => AppCommand::CopyAccount,
            KeyCode::Char('l') => AppCommand::Logout,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Tab => AppCommand::NextTab,
            KeyCode::BackTab => AppCommand::PrevTab,
            KeyCode::Char(c) => Self::map_tab_digit(c).unwrap_or(AppCommand::Noop),
            _ => AppCommand::Noop,
        }
    }

    fn map_search_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::Dismiss,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_chat_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Char('l') => AppCommand::Logout,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Tab => AppCommand::NextTab,
            KeyCode::BackTab => AppCommand::PrevTab,
            KeyCode::Char(c) => Self::map_tab_digit(c).unwrap_or(AppCommand::Noop),
            _ => AppCommand::Noop,
        }
    }

    fn map_wizard_menu_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Char('q') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_wizard_field_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Tab | KeyCode::Down => AppCommand::FocusNext,
            KeyCode::BackTab | KeyCode::Up => AppCommand::FocusPrev,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    /// PIN step and top-up prompt: digits, backspace, confirm, cancel.
    fn map_digit_entry_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for context in [
            InputContext::AuthForm,
            InputContext::Dashboard,
            InputContext::WizardPin,
            InputContext::SearchInput,
        ] {
            assert_eq!(
                KeyMapper::map_key(ctrl(KeyCode::Char('c')), &context),
                AppCommand::Quit,
                "{context:?}"
            );
        }
    }

    #[test]
    fn test_auth_form_routes_printables_to_fields() {
        let cmd = KeyMapper::map_key(key_event(KeyCode::Char('q')), &InputContext::AuthForm);
        assert_eq!(cmd, AppCommand::TypeChar('q'));
    }

    #[test]
    fn test_auth_form_control_chords() {
        assert_eq!(
            KeyMapper::map_key(ctrl(KeyCode::Char('s')), &InputContext::AuthForm),
            AppCommand::SwitchAuthView
        );
        assert_eq!(
            KeyMapper::map_key(ctrl(KeyCode::Char('p')), &InputContext::AuthForm),
            AppCommand::TogglePasswordVisibility
        );
    }

    #[test]
    fn test_dashboard_shortcuts() {
        let cases = [
            (KeyCode::Char('s'), AppCommand::OpenSend),
            (KeyCode::Char('i'), AppCommand::OpenRequest),
            (KeyCode::Char('t'), AppCommand::OpenTopUp),
            (KeyCode::Char('r'), AppCommand::Refresh),
            (KeyCode::Char('v'), AppCommand::ToggleBalance),
            (KeyCode::Char('f'), AppCommand::CycleFilter),
            (KeyCode::Char('/'), AppCommand::FocusSearch),
            (KeyCode::Char('e'), AppCommand::ExportStatement),
            (KeyCode::Char('y'), AppCommand::CopyAccount),
            (KeyCode::Char('q'), AppCommand::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::Dashboard),
                expected
            );
        }
    }

    #[test]
    fn test_digit_jumps_to_tab() {
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('2')), &InputContext::Dashboard),
            AppCommand::SwitchTab(Tab::Wallet)
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('6')), &InputContext::Browse),
            AppCommand::SwitchTab(Tab::Community)
        );
    }

    #[test]
    fn test_search_input_captures_dashboard_shortcuts() {
        let cmd = KeyMapper::map_key(key_event(KeyCode::Char('s')), &InputContext::SearchInput);
        assert_eq!(cmd, AppCommand::TypeChar('s'));
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Esc), &InputContext::SearchInput),
            AppCommand::Dismiss
        );
    }

    #[test]
    fn test_wizard_menu_navigation() {
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Down), &InputContext::WizardMenu),
            AppCommand::MoveDown
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Enter), &InputContext::WizardMenu),
            AppCommand::Submit
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Esc), &InputContext::WizardMenu),
            AppCommand::Dismiss
        );
    }

    #[test]
    fn test_pin_step_accepts_text() {
        assert!(InputContext::WizardPin.accepts_text_input());
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('1')), &InputContext::WizardPin),
            AppCommand::TypeChar('1')
        );
    }

    #[test]
    fn test_modal_contexts_flagged() {
        assert!(InputContext::WizardFields.is_modal());
        assert!(InputContext::TopUp.is_modal());
        assert!(!InputContext::Dashboard.is_modal());
    }
}
