//! Command execution against the app state.
//!
//! The main loop maps each key event to an [`AppCommand`] via
//! [`KeyMapper`] and hands it to [`App::execute`] here. Context resolution
//! lives in [`App::input_context`].

use super::{App, Modal, Tab, WizardStep};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crossterm::event::KeyEvent;

impl App {
    /// Resolves the active input context from the current state.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match &self.modal {
            Some(Modal::Wizard(wizard)) => match wizard.step() {
                WizardStep::Options | WizardStep::ServiceSelect => InputContext::WizardMenu,
                WizardStep::FieldEntry => InputContext::WizardFields,
                WizardStep::Pin => InputContext::WizardPin,
            },
            Some(Modal::TopUp { .. }) => InputContext::TopUp,
            None => match self.nav.active() {
                Tab::Home if !self.is_authenticated() => InputContext::AuthForm,
                Tab::Wallet if self.wallet.search_focused => InputContext::SearchInput,
                Tab::Wallet => InputContext::Dashboard,
                Tab::Chat if self.chat.search_focused => InputContext::ChatSearch,
                Tab::Chat => InputContext::ChatList,
                _ => InputContext::Browse,
            },
        }
    }

    /// Maps and executes one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        let command = KeyMapper::map_key(key, &context);
        self.execute(command);
    }

    /// Executes a command against the current state.
    pub fn execute(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Dismiss => self.dismiss(),
            AppCommand::Logout => self.logout(),

            // ================================================================
            // Tabs
            // ================================================================
            AppCommand::SwitchTab(tab) => self.switch_tab(tab),
            AppCommand::NextTab => self.nav.next_tab(self.is_authenticated()),
            AppCommand::PrevTab => self.nav.prev_tab(self.is_authenticated()),

            // ================================================================
            // Text & Focus
            // ================================================================
            AppCommand::TypeChar(c) => self.type_char(c),
            AppCommand::Backspace => self.backspace(),
            AppCommand::FocusNext => self.focus_next(),
            AppCommand::FocusPrev => self.focus_prev(),
            AppCommand::Submit => self.submit(),

            // ================================================================
            // Auth Form
            // ================================================================
            AppCommand::SwitchAuthView => self.auth.switch_view(),
            AppCommand::TogglePasswordVisibility => self.auth.toggle_show_password(),

            // ================================================================
            // Dashboard
            // ================================================================
            AppCommand::OpenSend => self.open_send_wizard(),
            AppCommand::OpenRequest => self.open_request_wizard(),
            AppCommand::OpenTopUp => self.open_top_up(),
            AppCommand::Refresh => self.refresh_wallet(),
            AppCommand::ToggleBalance => {
                self.wallet.toggle_balance();
                self.config.show_balance = self.wallet.show_balance;
                // Preference only; losing it on a failed write is fine.
                let _ = self.config.save();
            }
            AppCommand::CycleFilter => self.wallet.cycle_filter(),
            AppCommand::FocusSearch => self.focus_search(),
            AppCommand::ExportStatement => self.export_statement(),
            AppCommand::OpenStatement => self.open_last_statement(),
            AppCommand::CopyAccount => self.copy_account_number(),

            // ================================================================
            // Lists
            // ================================================================
            AppCommand::MoveUp => self.move_up(),
            AppCommand::MoveDown => self.move_down(),

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Context-dependent dispatch
    // ========================================================================

    fn dismiss(&mut self) {
        if self.modal.is_some() {
            // Cancelling discards all entered wizard/top-up data.
            self.set_modal(None);
        } else if self.wallet.search_focused {
            self.wallet.search_focused = false;
        } else if self.chat.search_focused {
            self.chat.search_focused = false;
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        match self.nav.activate(tab, self.is_authenticated()) {
            super::GateResult::Switched => {
                if tab == Tab::Wallet && self.wallet.snapshot().is_none() {
                    self.refresh_wallet();
                }
            }
            super::GateResult::Denied => self.show_toast("Sign in to access this tab"),
        }
    }

    fn type_char(&mut self, c: char) {
        match &mut self.modal {
            Some(Modal::Wizard(wizard)) => wizard.type_char(c),
            Some(Modal::TopUp { amount }) => {
                if c.is_ascii_digit() || c == '.' || c == ',' {
                    amount.push(c);
                }
            }
            None => match self.input_context() {
                InputContext::AuthForm => self.auth.type_char(c),
                InputContext::SearchInput => {
                    if !c.is_control() {
                        self.wallet.search.push(c);
                        self.wallet.selected = 0;
                    }
                }
                InputContext::ChatSearch => {
                    if !c.is_control() {
                        self.chat.search.push(c);
                        self.chat.selected = 0;
                    }
                }
                _ => {}
            },
        }
    }

    fn backspace(&mut self) {
        match &mut self.modal {
            Some(Modal::Wizard(wizard)) => wizard.backspace(),
            Some(Modal::TopUp { amount }) => {
                amount.pop();
            }
            None => match self.input_context() {
                InputContext::AuthForm => self.auth.backspace(),
                InputContext::SearchInput => {
                    self.wallet.search.pop();
                    self.wallet.clamp_selection();
                }
                InputContext::ChatSearch => {
                    self.chat.search.pop();
                    self.chat.clamp_selection();
                }
                _ => {}
            },
        }
    }

    fn focus_next(&mut self) {
        if let Some(wizard) = self.wizard_mut() {
            wizard.focus_next();
        } else if self.input_context() == InputContext::AuthForm {
            self.auth.focus_next();
        }
    }

    fn focus_prev(&mut self) {
        if let Some(wizard) = self.wizard_mut() {
            wizard.focus_prev();
        } else if self.input_context() == InputContext::AuthForm {
            self.auth.focus_prev();
        }
    }

    fn submit(&mut self) {
        match self.input_context() {
            InputContext::AuthForm => self.submit_auth(),
            InputContext::WizardMenu => {
                if let Some(wizard) = self.wizard_mut() {
                    wizard.choose();
                }
            }
            InputContext::WizardFields => {
                if let Some(wizard) = self.wizard_mut() {
                    wizard.continue_to_pin();
                }
            }
            InputContext::WizardPin => self.submit_wizard_pin(),
            InputContext::TopUp => self.submit_top_up(),
            _ => {}
        }
    }

    fn focus_search(&mut self) {
        match self.nav.active() {
            Tab::Wallet => self.wallet.search_focused = true,
            Tab::Chat => self.chat.search_focused = true,
            _ => {}
        }
    }

    fn move_up(&mut self) {
        if let Some(wizard) = self.wizard_mut() {
            wizard.menu_up();
            return;
        }
        match self.nav.active() {
            Tab::Wallet => self.wallet.select_prev(),
            Tab::Chat => self.chat.select_prev(),
            _ => {}
        }
    }

    fn move_down(&mut self) {
        if let Some(wizard) = self.wizard_mut() {
            wizard.menu_down();
            return;
        }
        match self.nav.active() {
            Tab::Wallet => self.wallet.select_next(),
            Tab::Chat => self.chat.select_next(),
            _ => {}
        }
    }
}
