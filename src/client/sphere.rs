//! Typed client for the CarloSphere backend API.
//!
//! Auth, wallet, and credential-verification endpoints. Every method maps
//! failures into the three-way [`ApiError`] taxonomy: non-2xx responses
//! become `RequestFailed` carrying the server's `error` string when present,
//! anything else (network, timeout, unparseable body) becomes
//! `Connectivity`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::client::http::{HttpClient, HttpConfig};
use crate::domain::{ApiError, Session, Transaction, UserProfile, WalletSnapshot};
use crate::state::wizard::PinVerifier;

// ============================================================================
// Request / Response Bodies
// ============================================================================

/// Canonical signup payload. Field names match what the backend's signup
/// endpoint expects (`full_name` / `id_number`, not the camelCase variants
/// older drafts used).
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub id_number: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct AuthBody {
    token: Option<String>,
    user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BalanceBody {
    balance: String,
    #[serde(alias = "accountNumber")]
    account_number: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PinBody {
    valid: bool,
}

// ============================================================================
// CarloSphere API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct SphereClient {
    http: HttpClient,
}

impl SphereClient {
    /// Create a client for the given backend base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::with_config(HttpConfig::with_base_url(base_url)),
        }
    }

    /// The backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.http.config().base_url
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// `RequestFailed` on a non-2xx response (server error text when
    /// supplied, otherwise "Login failed"), `Connectivity` if the request
    /// or response parse fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        debug!(email, "posting /auth/login");
        let response = self
            .http
            .post("/auth/login", None)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::session_from_response(response, "Login failed").await
    }

    /// Create an account. Local validation (password confirmation, email
    /// syntax) happens in the auth flow before this is ever called.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::login`], with "Signup failed" as the
    /// fallback message.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Session, ApiError> {
        debug!(email = request.email, "posting /auth/signup");
        let response = self
            .http
            .post("/auth/signup", None)
            .json(request)
            .send()
            .await?;

        Self::session_from_response(response, "Signup failed").await
    }

    /// Verify the wallet PIN against the backend's credential store.
    ///
    /// # Errors
    ///
    /// `RequestFailed` / `Connectivity` as for other endpoints. A wrong PIN
    /// is not an error: it returns `Ok(false)`.
    pub async fn verify_pin(&self, token: &str, pin: &str) -> Result<bool, ApiError> {
        let response = self
            .http
            .post("/auth/verify-pin", Some(token))
            .json(&json!({ "pin": pin }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response, "PIN verification failed").await;
            return Err(ApiError::request_failed(status.as_u16(), message));
        }

        let body: PinBody = response
            .json()
            .await
            .map_err(|e| ApiError::connectivity(e.to_string()))?;
        Ok(body.valid)
    }

    // ========================================================================
    // Wallet
    // ========================================================================

    /// Fetch balance and transaction list together.
    ///
    /// Both requests run concurrently and both must succeed; a snapshot is
    /// never assembled from one half, so the balance shown can never
    /// disagree with the transaction list next to it.
    ///
    /// # Errors
    ///
    /// The first failure of either request, in the usual taxonomy.
    pub async fn fetch_snapshot(&self, token: &str) -> Result<WalletSnapshot, ApiError> {
        let (balance, transactions) = tokio::join!(
            self.fetch_balance(token),
            self.fetch_transactions(token)
        );
        let balance = balance?;
        let transactions = transactions?;

        Ok(WalletSnapshot {
            balance: balance.balance,
            account_number: balance.account_number,
            transactions,
        })
    }

    async fn fetch_balance(&self, token: &str) -> Result<BalanceBody, ApiError> {
        let response = self.http.get("/wallet/balance", Some(token)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response, "Could not fetch balance").await;
            return Err(ApiError::request_failed(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::connectivity(e.to_string()))
    }

    async fn fetch_transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        let response = self
            .http
            .get("/wallet/transactions", Some(token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response, "Could not fetch transactions").await;
            return Err(ApiError::request_failed(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::connectivity(e.to_string()))
    }

    /// Submit a send-money transfer assembled by the wizard.
    ///
    /// # Errors
    ///
    /// Usual taxonomy; fallback message "Transfer failed".
    pub async fn transfer(
        &self,
        token: &str,
        payload: &BTreeMap<String, String>,
    ) -> Result<String, ApiError> {
        self.post_wallet_action("/wallet/transfer", token, payload, "Transfer failed", "Transfer sent")
            .await
    }

    /// Submit a request-money payload assembled by the wizard.
    ///
    /// # Errors
    ///
    /// Usual taxonomy; fallback message "Request failed".
    pub async fn request_money(
        &self,
        token: &str,
        payload: &BTreeMap<String, String>,
    ) -> Result<String, ApiError> {
        self.post_wallet_action("/wallet/request", token, payload, "Request failed", "Request sent")
            .await
    }

    /// Top up the wallet by the given amount.
    ///
    /// # Errors
    ///
    /// Usual taxonomy; fallback message "Top up failed".
    pub async fn deposit(&self, token: &str, amount: &str) -> Result<String, ApiError> {
        let mut payload = BTreeMap::new();
        payload.insert("amount".to_string(), amount.to_string());
        self.post_wallet_action("/wallet/deposit", token, &payload, "Top up failed", "Top up complete")
            .await
    }

    async fn post_wallet_action(
        &self,
        path: &str,
        token: &str,
        payload: &BTreeMap<String, String>,
        fallback_error: &str,
        fallback_message: &str,
    ) -> Result<String, ApiError> {
        debug!(path, "posting wallet action");
        let response = self
            .http
            .post(path, Some(token))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response, fallback_error).await;
            return Err(ApiError::request_failed(status.as_u16(), message));
        }

        let body: MessageBody = response
            .json()
            .await
            .map_err(|e| ApiError::connectivity(e.to_string()))?;
        Ok(body.message.unwrap_or_else(|| fallback_message.to_string()))
    }

    // ========================================================================
    // Response Helpers
    // ========================================================================

    async fn session_from_response(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<Session, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response, fallback).await;
            return Err(ApiError::request_failed(status.as_u16(), message));
        }

        let body: AuthBody = response
            .json()
            .await
            .map_err(|e| ApiError::connectivity(e.to_string()))?;
        let token = body
            .token
            .ok_or_else(|| ApiError::connectivity("auth response missing token"))?;

        Ok(Session::new(token, body.user))
    }

    /// Server-supplied `error` string, or the fallback when the error body
    /// is absent or unreadable.
    async fn error_message(response: reqwest::Response, fallback: &str) -> String {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

// ============================================================================
// PIN Verification
// ============================================================================

/// Production PIN verifier: delegates to the backend's credential store.
#[derive(Debug, Clone)]
pub struct RemotePinVerifier {
    client: SphereClient,
    token: String,
}

impl RemotePinVerifier {
    #[must_use]
    pub fn new(client: SphereClient, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }
}

impl PinVerifier for RemotePinVerifier {
    async fn verify(&self, pin: &str) -> Result<bool, ApiError> {
        self.client.verify_pin(&self.token, pin).await
    }
}

// ============================================================================
// Tests
// ============================================================================
