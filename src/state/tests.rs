//! Integration-style tests exercising the app state through commands and
//! background-task messages.

use super::*;
use crate::commands::AppCommand;
use crate::domain::{Transaction, TxnKind, TxnStatus};

// ============================================================================
// Helpers
// ============================================================================

fn test_app() -> App {
    App::new(
        AppConfig::default(),
        "http://localhost:1",
        Box::new(MemorySessionStorage::new()),
    )
}

fn authed_app() -> App {
    let storage = MemorySessionStorage::new();
    storage
        .save(&Session::new("tok", None))
        .expect("memory save");
    App::new(AppConfig::default(), "http://localhost:1", Box::new(storage))
}

fn snapshot() -> WalletSnapshot {
    WalletSnapshot {
        balance: "12500.00".to_string(),
        account_number: "0011224521".to_string(),
        transactions: vec![Transaction {
            date: "2025-06-01".to_string(),
            kind: TxnKind::Credit,
            amount: "5000.00".to_string(),
            status: TxnStatus::Completed,
            counterpart: "Salary".to_string(),
        }],
    }
}

/// Walks an open send wizard to the pin step with valid peer fields.
fn walk_to_pin(app: &mut App) {
    app.execute(AppCommand::Submit); // choose highlighted "peer"
    for c in "0712345678".chars() {
        app.execute(AppCommand::TypeChar(c));
    }
    app.execute(AppCommand::FocusNext);
    for c in "250".chars() {
        app.execute(AppCommand::TypeChar(c));
    }
    app.execute(AppCommand::Submit); // continue to pin
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_login_success_establishes_session_and_schedules_redirect() {
    let mut app = test_app();
    app.handle_message(AppMessage::LoginCompleted(Ok(Session::new("tok", None))));

    assert!(app.is_authenticated());
    assert_eq!(app.session.token(), Some("tok"));
    let notice = app.auth.notice.as_ref().expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[test]
fn test_login_failure_leaves_session_unchanged() {
    let mut app = test_app();
    app.auth.submitting = true;
    app.handle_message(AppMessage::LoginCompleted(Err(
        crate::domain::ApiError::request_failed(401, "Login failed"),
    )));

    assert!(!app.is_authenticated());
    assert!(!app.auth.submitting);
    assert_eq!(app.auth.notice.as_ref().unwrap().text, "Login failed");
}

#[tokio::test]
async fn test_password_mismatch_never_reaches_the_network() {
    let mut app = test_app();
    app.auth.switch_view();
    app.auth.full_name = "Jane".to_string();
    app.auth.national_id = "12345678".to_string();
    app.auth.email = "jane@example.com".to_string();
    app.auth.password = "pw1".to_string();
    app.auth.confirm_password = "pw2".to_string();

    app.submit_auth();

    // No request spawned: the submitting guard was never claimed.
    assert!(!app.auth.submitting);
    assert_eq!(app.auth.notice.as_ref().unwrap().text, "Passwords do not match");
}

#[tokio::test]
async fn test_submit_while_outstanding_is_ignored() {
    let mut app = test_app();
    app.auth.email = "jane@example.com".to_string();
    app.auth.password = "pw".to_string();
    app.auth.submitting = true;

    app.submit_auth();
    assert!(app.auth.notice.is_none());
}

#[tokio::test]
async fn test_redirect_lands_on_wallet() {
    let mut app = test_app();
    app.handle_message(AppMessage::LoginCompleted(Ok(Session::new("tok", None))));
    app.handle_message(AppMessage::RedirectToWallet);

    assert_eq!(app.nav.active(), Tab::Wallet);
    // Form is pristine again for the next signed-out visit.
    assert!(app.auth.email.is_empty());
}

#[test]
fn test_redirect_after_logout_is_dropped() {
    let mut app = test_app();
    app.handle_message(AppMessage::RedirectToWallet);
    assert_eq!(app.nav.active(), Tab::Home);
}

#[test]
fn test_persisted_session_restores_to_wallet() {
    let app = authed_app();
    assert!(app.is_authenticated());
    assert_eq!(app.nav.active(), Tab::Wallet);
}

#[test]
fn test_logout_clears_wallet_and_returns_home() {
    let mut app = authed_app();
    app.wallet.begin_refresh();
    app.wallet.finish_refresh(Some(snapshot()));

    app.execute(AppCommand::Logout);

    assert!(!app.is_authenticated());
    assert!(app.wallet.snapshot().is_none());
    assert_eq!(app.nav.active(), Tab::Home);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_gated_tab_denied_signed_out() {
    let mut app = test_app();
    app.execute(AppCommand::SwitchTab(Tab::Wallet));

    assert_eq!(app.nav.active(), Tab::Home);
    assert!(app.toast.is_some());
}

#[test]
fn test_ungated_tab_switch_signed_out() {
    let mut app = test_app();
    app.execute(AppCommand::SwitchTab(Tab::Learn));
    assert_eq!(app.nav.active(), Tab::Learn);
}

// ============================================================================
// Wallet
// ============================================================================

#[test]
fn test_failed_snapshot_keeps_stale_data_and_toasts() {
    let mut app = authed_app();
    app.wallet.begin_refresh();
    app.wallet.finish_refresh(Some(snapshot()));

    app.wallet.begin_refresh();
    app.handle_message(AppMessage::SnapshotFetched(Err(
        crate::domain::ApiError::connectivity("refused"),
    )));

    assert_eq!(app.wallet.snapshot().unwrap().balance, "12500.00");
    assert_eq!(app.toast.as_ref().unwrap().text, "Error connecting to server");
    assert!(!app.wallet.is_refreshing());
}

#[test]
fn test_snapshot_arriving_after_logout_is_dropped() {
    let mut app = authed_app();
    app.wallet.begin_refresh();

    app.execute(AppCommand::Logout);
    app.handle_message(AppMessage::SnapshotFetched(Ok(snapshot())));

    assert!(app.wallet.snapshot().is_none());
    assert!(!app.wallet.is_refreshing());
}

#[test]
fn test_submit_result_arriving_after_logout_is_dropped() {
    let mut app = authed_app();
    app.wallet.submitting_action = true;

    app.execute(AppCommand::Logout);
    app.handle_message(AppMessage::SubmitCompleted(Ok(
        "Transfer successful".to_string()
    )));

    assert_eq!(app.toast.as_ref().unwrap().text, "Signed out");
    assert!(!app.wallet.is_refreshing());
}

#[tokio::test]
async fn test_submit_confirmation_toasts_and_refreshes() {
    let mut app = authed_app();
    app.wallet.submitting_action = true;

    app.handle_message(AppMessage::SubmitCompleted(Ok(
        "Transfer successful".to_string()
    )));

    assert!(!app.wallet.submitting_action);
    assert_eq!(app.toast.as_ref().unwrap().text, "Transfer successful");
    assert!(app.wallet.is_refreshing());
}

// ============================================================================
// Wizard
// ============================================================================

#[tokio::test]
async fn test_wizard_walk_and_correct_pin_closes_and_submits() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenSend);
    walk_to_pin(&mut app);
    assert_eq!(app.wizard().unwrap().step(), WizardStep::Pin);

    for c in "1234".chars() {
        app.execute(AppCommand::TypeChar(c));
    }
    app.submit_wizard_pin_with(StaticPinVerifier("1234"));

    let message = app.message_rx.recv().await.expect("pin result");
    app.handle_message(message);

    // Wizard closed immediately; the transfer outcome arrives later.
    assert!(app.modal.is_none());
    assert!(app.wallet.submitting_action);
}

#[tokio::test]
async fn test_wrong_pin_keeps_wizard_open_with_fields() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenSend);
    walk_to_pin(&mut app);

    for c in "9999".chars() {
        app.execute(AppCommand::TypeChar(c));
    }
    app.submit_wizard_pin_with(StaticPinVerifier("1234"));

    let message = app.message_rx.recv().await.expect("pin result");
    app.handle_message(message);

    let wizard = app.wizard().expect("wizard still open");
    assert_eq!(wizard.step(), WizardStep::Pin);
    assert_eq!(wizard.fields()[0].value, "0712345678");
    assert_eq!(wizard.error.as_deref(), Some("Incorrect PIN"));
    assert_eq!(wizard.pin_len(), 0);
}

#[tokio::test]
async fn test_verification_result_for_cancelled_wizard_is_dropped() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenSend);
    walk_to_pin(&mut app);
    for c in "1234".chars() {
        app.execute(AppCommand::TypeChar(c));
    }
    app.submit_wizard_pin_with(StaticPinVerifier("1234"));

    // Cancel while the round trip is in flight, then start a fresh wizard.
    app.execute(AppCommand::Dismiss);
    app.execute(AppCommand::OpenSend);

    let message = app.message_rx.recv().await.expect("pin result");
    app.handle_message(message);

    // The stale confirmation must not submit the new, unconfirmed wizard.
    let wizard = app.wizard().expect("new wizard still open");
    assert_eq!(wizard.step(), WizardStep::Options);
    assert!(!app.wallet.submitting_action);
}

#[tokio::test]
async fn test_verification_result_after_close_is_dropped() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenSend);
    walk_to_pin(&mut app);
    for c in "1234".chars() {
        app.execute(AppCommand::TypeChar(c));
    }
    app.submit_wizard_pin_with(StaticPinVerifier("1234"));
    app.execute(AppCommand::Dismiss);

    let message = app.message_rx.recv().await.expect("pin result");
    app.handle_message(message);

    assert!(app.modal.is_none());
    assert!(!app.wallet.submitting_action);
}

#[test]
fn test_cancel_discards_wizard_data() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenSend);
    app.execute(AppCommand::Submit);
    app.execute(AppCommand::TypeChar('0'));

    app.execute(AppCommand::Dismiss);
    assert!(app.modal.is_none());

    app.execute(AppCommand::OpenSend);
    assert_eq!(app.wizard().unwrap().step(), WizardStep::Options);
}

#[test]
fn test_modal_slot_is_exclusive() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenSend);
    app.execute(AppCommand::OpenTopUp);

    assert!(matches!(app.modal, Some(Modal::TopUp { .. })));
}

#[test]
fn test_top_up_rejects_bad_amount() {
    let mut app = authed_app();
    app.execute(AppCommand::OpenTopUp);
    app.execute(AppCommand::TypeChar('x')); // filtered out
    app.execute(AppCommand::Submit);

    assert_eq!(app.toast.as_ref().unwrap().text, "Enter a valid amount");
    assert!(matches!(app.modal, Some(Modal::TopUp { .. })));
}

// ============================================================================
// Input Context & Toasts
// ============================================================================

#[test]
fn test_input_context_tracks_state() {
    let app = test_app();
    assert_eq!(app.input_context(), crate::commands::InputContext::AuthForm);

    let mut app = authed_app();
    assert_eq!(app.input_context(), crate::commands::InputContext::Dashboard);

    app.execute(AppCommand::FocusSearch);
    assert_eq!(app.input_context(), crate::commands::InputContext::SearchInput);
    app.execute(AppCommand::Dismiss);

    app.execute(AppCommand::OpenSend);
    assert_eq!(app.input_context(), crate::commands::InputContext::WizardMenu);
}

#[test]
fn test_toast_expires_after_ticks() {
    let mut app = test_app();
    app.show_toast("Saved");
    for _ in 0..crate::constants::TOAST_TICKS {
        app.on_tick();
    }
    assert!(app.toast.is_none());
}

#[test]
fn test_chat_search_filters_list() {
    let mut app = authed_app();
    app.execute(AppCommand::SwitchTab(Tab::Chat));
    app.execute(AppCommand::FocusSearch);
    for c in "mary".chars() {
        app.execute(AppCommand::TypeChar(c));
    }

    let filtered = app.chat.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Mary Smith");
}
