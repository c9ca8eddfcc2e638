//! Applies results reported back by background tasks.

use tracing::debug;

use super::{App, AppMessage, Tab};

impl App {
    /// Applies one background-task message to the app state.
    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        debug!(?message, "applying app message");
        match message {
            // ================================================================
            // Auth
            // ================================================================
            AppMessage::LoginCompleted(Ok(session)) => {
                self.auth.submitting = false;
                self.session.establish(session);
                self.auth.notice_success("Login successful! Redirecting...");
                self.schedule_redirect();
            }
            AppMessage::LoginCompleted(Err(err)) => {
                self.auth.submitting = false;
                self.auth.notice_error(&err);
            }
            AppMessage::SignupCompleted(Ok(session)) => {
                self.auth.submitting = false;
                self.session.establish(session);
                self.auth.notice_success("Account created! Redirecting...");
                self.schedule_redirect();
            }
            AppMessage::SignupCompleted(Err(err)) => {
                self.auth.submitting = false;
                self.auth.notice_error(&err);
            }
            AppMessage::RedirectToWallet => {
                // Logout may have raced the redirect timer.
                if self.is_authenticated() {
                    self.auth = super::AuthFlow::new();
                    self.nav.activate(Tab::Wallet, true);
                    self.refresh_wallet();
                }
            }

            // ================================================================
            // Wallet
            // ================================================================
            // Logout may race an in-flight fetch or submission; results for
            // a session that no longer exists are dropped.
            AppMessage::SnapshotFetched(_) | AppMessage::SubmitCompleted(_)
                if !self.is_authenticated() =>
            {
                debug!("dropping wallet result received while signed out");
            }
            AppMessage::SnapshotFetched(Ok(snapshot)) => {
                self.wallet.finish_refresh(Some(snapshot));
            }
            AppMessage::SnapshotFetched(Err(err)) => {
                self.wallet.finish_refresh(None);
                self.show_toast(err.to_string());
            }

            // ================================================================
            // Wizard
            // ================================================================
            AppMessage::PinVerified { generation, result } => {
                // The wizard that asked for this verification may have been
                // cancelled or replaced in the meantime; its result must not
                // be applied to whatever occupies the modal slot now.
                if generation != self.wizard_generation {
                    debug!(generation, "dropping verification result for a closed wizard");
                    return;
                }
                match result {
                    Ok(true) => self.submit_wizard_payload(),
                    Ok(false) => {
                        if let Some(wizard) = self.wizard_mut() {
                            wizard.pin_rejected("Incorrect PIN");
                        }
                    }
                    Err(err) => {
                        if let Some(wizard) = self.wizard_mut() {
                            wizard.pin_rejected(err.to_string());
                        }
                    }
                }
            }
            AppMessage::SubmitCompleted(Ok(confirmation)) => {
                self.wallet.submitting_action = false;
                self.show_toast(confirmation);
                self.refresh_wallet();
            }
            AppMessage::SubmitCompleted(Err(err)) => {
                self.wallet.submitting_action = false;
                self.show_toast(err.to_string());
            }
        }
    }
}
