//! High-level application actions.
//!
//! Auth submission, wallet refresh, wizard submission, top-up, clipboard,
//! and statement export. Network work is spawned onto background tasks
//! that report back through [`AppMessage`]; nothing here blocks the main
//! loop.

use arboard::Clipboard;
use tokio::time::sleep;

use super::{App, AppMessage, AuthView, Modal, PinVerifier, TransferWizard, WizardFlow};
use crate::client::{RemotePinVerifier, SignupRequest};
use crate::constants::REDIRECT_DELAY;
use crate::domain::{statement_dir, write_statement};

impl App {
    // ========================================================================
    // Auth
    // ========================================================================

    /// Submits the active auth form. Local validation failures surface as
    /// an inline notice and never reach the network; at most one request
    /// is outstanding at a time.
    pub(crate) fn submit_auth(&mut self) {
        if self.auth.submitting {
            return;
        }
        if let Err(err) = self.auth.validate() {
            self.auth.notice_error(&err);
            return;
        }

        self.auth.submitting = true;
        self.auth.notice = None;
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        match self.auth.view {
            AuthView::Login => {
                let email = self.auth.email.trim().to_string();
                let password = self.auth.password.clone();
                tokio::spawn(async move {
                    let result = client.login(&email, &password).await;
                    // Receiver may be dropped during shutdown - safe to ignore
                    let _ = message_tx.send(AppMessage::LoginCompleted(result));
                });
            }
            AuthView::Signup => {
                let request = SignupRequest {
                    full_name: self.auth.full_name.trim().to_string(),
                    id_number: self.auth.national_id.trim().to_string(),
                    email: self.auth.email.trim().to_string(),
                    password: self.auth.password.clone(),
                };
                tokio::spawn(async move {
                    let result = client.signup(&request).await;
                    let _ = message_tx.send(AppMessage::SignupCompleted(result));
                });
            }
        }
    }

    /// Schedules the brief post-auth pause before landing on the wallet.
    pub(crate) fn schedule_redirect(&self) {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            sleep(REDIRECT_DELAY).await;
            let _ = message_tx.send(AppMessage::RedirectToWallet);
        });
    }

    /// Logs out: drops the session and all cached wallet data, closes any
    /// modal, and lands back on Home with a fresh login form.
    pub(crate) fn logout(&mut self) {
        self.session.clear();
        self.wallet.reset();
        self.set_modal(None);
        self.auth = super::AuthFlow::new();
        self.nav.reset();
        self.show_toast("Signed out");
    }

    // ========================================================================
    // Wallet
    // ========================================================================

    /// Starts a wallet refresh unless one is already outstanding or there
    /// is no session.
    pub(crate) fn refresh_wallet(&mut self) {
        let Some(token) = self.session.token().map(String::from) else {
            return;
        };
        if !self.wallet.begin_refresh() {
            return;
        }

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_snapshot(&token).await;
            let _ = message_tx.send(AppMessage::SnapshotFetched(result));
        });
    }

    // ========================================================================
    // Wizard & Top-up
    // ========================================================================

    /// Opens the send wizard, replacing any open modal.
    pub(crate) fn open_send_wizard(&mut self) {
        self.set_modal(Some(Modal::Wizard(TransferWizard::open_send())));
    }

    /// Opens the request wizard, replacing any open modal.
    pub(crate) fn open_request_wizard(&mut self) {
        self.set_modal(Some(Modal::Wizard(TransferWizard::open_request())));
    }

    /// Opens the top-up prompt, replacing any open modal.
    pub(crate) fn open_top_up(&mut self) {
        self.set_modal(Some(Modal::TopUp {
            amount: String::new(),
        }));
    }

    /// Kicks off PIN verification for the open wizard against the backend.
    pub(crate) fn submit_wizard_pin(&mut self) {
        let Some(token) = self.session.token().map(String::from) else {
            return;
        };
        let verifier = RemotePinVerifier::new(self.client.clone(), token);
        self.submit_wizard_pin_with(verifier);
    }

    /// PIN verification with an injected verifier. The wizard's own guard
    /// rejects a second round trip while one is outstanding.
    pub(crate) fn submit_wizard_pin_with<V>(&mut self, verifier: V)
    where
        V: PinVerifier + Send + 'static,
    {
        let Some(pin) = self.wizard_mut().and_then(TransferWizard::begin_verify) else {
            return;
        };

        // Tag the round trip with the current wizard instance so a result
        // that outlives it is recognized as stale.
        let generation = self.wizard_generation;
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = verifier.verify(&pin).await;
            let _ = message_tx.send(AppMessage::PinVerified { generation, result });
        });
    }

    /// Consumes the open wizard after a confirmed PIN and submits its
    /// payload. The wizard closes immediately; the outcome arrives later
    /// as [`AppMessage::SubmitCompleted`].
    pub(crate) fn submit_wizard_payload(&mut self) {
        let Some(Modal::Wizard(wizard)) = self.modal.take() else {
            return;
        };
        self.wizard_generation = self.wizard_generation.wrapping_add(1);
        let Some(token) = self.session.token().map(String::from) else {
            return;
        };

        let flow = wizard.flow();
        let payload = wizard.into_payload();
        self.wallet.submitting_action = true;

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match flow {
                WizardFlow::Send => client.transfer(&token, &payload).await,
                WizardFlow::Request => client.request_money(&token, &payload).await,
            };
            let _ = message_tx.send(AppMessage::SubmitCompleted(result));
        });
    }

    /// Submits the top-up prompt.
    pub(crate) fn submit_top_up(&mut self) {
        let Some(Modal::TopUp { amount }) = &self.modal else {
            return;
        };
        let amount = amount.trim().to_string();
        if amount.replace(',', "").parse::<f64>().map_or(true, |a| a <= 0.0) {
            self.show_toast("Enter a valid amount");
            return;
        }
        let Some(token) = self.session.token().map(String::from) else {
            return;
        };

        self.set_modal(None);
        self.wallet.submitting_action = true;
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.deposit(&token, &amount).await;
            let _ = message_tx.send(AppMessage::SubmitCompleted(result));
        });
    }

    // ========================================================================
    // Clipboard & Statements
    // ========================================================================

    /// Copies the full account number to the system clipboard.
    pub(crate) fn copy_account_number(&mut self) {
        let Some(account) = self
            .wallet
            .snapshot()
            .map(|s| s.account_number.clone())
        else {
            return;
        };
        match Clipboard::new().and_then(|mut cb| cb.set_text(account)) {
            Ok(()) => self.show_toast("Account number copied"),
            Err(err) => self.show_toast(format!("Clipboard unavailable: {err}")),
        }
    }

    /// Writes the currently filtered transactions to a statement file in
    /// the downloads directory.
    pub(crate) fn export_statement(&mut self) {
        let rows = self.wallet.filtered();
        match write_statement(&rows, &statement_dir()) {
            Ok(path) => {
                self.show_toast(format!("Statement saved to {}", path.display()));
                self.last_statement_path = Some(path);
            }
            Err(err) => self.show_toast(format!("Statement export failed: {err}")),
        }
    }

    /// Opens the most recently exported statement with the system handler.
    pub(crate) fn open_last_statement(&mut self) {
        let Some(path) = self.last_statement_path.clone() else {
            self.show_toast("No statement exported yet");
            return;
        };
        if let Err(err) = open::that(&path) {
            self.show_toast(format!("Could not open statement: {err}"));
        }
    }
}
