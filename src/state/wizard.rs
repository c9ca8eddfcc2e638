//! Multi-step send/request money wizard.
//!
//! A single optional [`TransferWizard`] instance drives both flows:
//!
//! - send:    closed -> options -> {peer | networks | services} -> pin -> closed
//! - request: closed -> peer -> pin -> closed
//!
//! The services branch further splits into till / paybill / pochi, each with
//! its own field set. Cancelling at any step discards all fields. No
//! transfer payload can be produced without passing the pin step, and the
//! entered PIN never survives submission: it is consumed by verification
//! and is not part of the payload.
//!
//! PIN verification itself is delegated to a [`PinVerifier`] collaborator;
//! the production implementation asks the backend, tests inject a static
//! one.

use std::collections::BTreeMap;

use crate::domain::ApiError;

// ============================================================================
// PIN Verification Seam
// ============================================================================

/// Credential verification collaborator for the pin step.
pub trait PinVerifier {
    /// Checks the PIN. `Ok(false)` is a wrong PIN; `Err` is a failure to
    /// verify at all.
    fn verify(&self, pin: &str) -> impl Future<Output = Result<bool, ApiError>> + Send;
}

/// Verifier accepting exactly one PIN. Test double for the remote verifier.
#[derive(Debug, Clone)]
pub struct StaticPinVerifier(pub &'static str);

impl PinVerifier for StaticPinVerifier {
    async fn verify(&self, pin: &str) -> Result<bool, ApiError> {
        Ok(pin == self.0)
    }
}

// ============================================================================
// Flow / Method / Service
// ============================================================================

/// Which money flow the wizard is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardFlow {
    Send,
    Request,
}

/// Send-method branch chosen on the options step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMethod {
    /// Another CarloSphere user.
    Peer,
    /// A phone number on another mobile network.
    Networks,
    /// A merchant service (till / paybill / pochi).
    Services,
}

impl SendMethod {
    pub const ALL: [Self; 3] = [Self::Peer, Self::Networks, Self::Services];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Networks => "networks",
            Self::Services => "services",
        }
    }

    /// Menu text on the options step.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Peer => "To CarloSphere user",
            Self::Networks => "To other networks",
            Self::Services => "Pay for services",
        }
    }
}

/// Sub-service chosen when the services branch is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Till,
    Paybill,
    Pochi,
}

impl ServiceKind {
    pub const ALL: [Self; 3] = [Self::Till, Self::Paybill, Self::Pochi];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Till => "till",
            Self::Paybill => "paybill",
            Self::Pochi => "pochi",
        }
    }

    /// Menu text on the service-select step.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Till => "Buy goods (till number)",
            Self::Paybill => "Paybill",
            Self::Pochi => "Pochi la Biashara",
        }
    }
}

// ============================================================================
// Steps & Fields
// ============================================================================

/// Current wizard step. "Closed" is represented by the absence of the
/// wizard instance, so it needs no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Choosing the send method.
    Options,
    /// Choosing the sub-service within the services branch.
    ServiceSelect,
    /// Entering the branch's fields.
    FieldEntry,
    /// PIN confirmation.
    Pin,
}

/// One entry field of the active branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Payload key.
    pub key: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Entered text.
    pub value: String,
}

impl FormField {
    fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
        }
    }
}

fn fields_for(method: SendMethod, service: Option<ServiceKind>) -> Vec<FormField> {
    let mut fields = match (method, service) {
        (SendMethod::Peer, _) => vec![FormField::new("to", "Recipient phone or email")],
        (SendMethod::Networks, _) => vec![FormField::new("phone", "Phone number")],
        (SendMethod::Services, Some(ServiceKind::Till)) => {
            vec![FormField::new("till", "Till number")]
        }
        (SendMethod::Services, Some(ServiceKind::Paybill)) => vec![
            FormField::new("paybill", "Paybill number"),
            FormField::new("account", "Account reference"),
        ],
        (SendMethod::Services, Some(ServiceKind::Pochi)) => {
            vec![FormField::new("phone", "Phone number")]
        }
        // Services without a sub-service never reaches field entry.
        (SendMethod::Services, None) => Vec::new(),
    };
    fields.push(FormField::new("amount", "Amount"));
    fields
}

// ============================================================================
// Transfer Wizard
// ============================================================================

/// Maximum PIN length accepted by the pin input.
const MAX_PIN_LEN: usize = 6;

/// The wizard state machine. Held as `Option<TransferWizard>` by the app,
/// which is what makes "no two wizards at once" structural.
#[derive(Debug, PartialEq, Eq)]
pub struct TransferWizard {
    flow: WizardFlow,
    step: WizardStep,
    method: Option<SendMethod>,
    service: Option<ServiceKind>,

    /// Highlighted row on the options / service-select menus.
    pub menu_selected: usize,
    fields: Vec<FormField>,
    /// Focused field index on the field-entry step.
    pub focus: usize,

    pin: String,
    /// Inline error for the current step.
    pub error: Option<String>,
    /// A PIN verification round-trip is outstanding.
    pub verifying: bool,
}

impl TransferWizard {
    /// Opens the send flow at the options step.
    #[must_use]
    pub fn open_send() -> Self {
        Self {
            flow: WizardFlow::Send,
            step: WizardStep::Options,
            method: None,
            service: None,
            menu_selected: 0,
            fields: Vec::new(),
            focus: 0,
            pin: String::new(),
            error: None,
            verifying: false,
        }
    }

    /// Opens the request flow, which goes straight to peer field entry.
    #[must_use]
    pub fn open_request() -> Self {
        Self {
            flow: WizardFlow::Request,
            step: WizardStep::FieldEntry,
            method: Some(SendMethod::Peer),
            service: None,
            menu_selected: 0,
            fields: fields_for(SendMethod::Peer, None),
            focus: 0,
            pin: String::new(),
            error: None,
            verifying: false,
        }
    }

    #[must_use]
    pub const fn flow(&self) -> WizardFlow {
        self.flow
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn method(&self) -> Option<SendMethod> {
        self.method
    }

    #[must_use]
    pub const fn service(&self) -> Option<ServiceKind> {
        self.service
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn pin_len(&self) -> usize {
        self.pin.len()
    }

    // ========================================================================
    // Menu Steps
    // ========================================================================

    /// Rows of the menu on the current step, empty elsewhere.
    #[must_use]
    pub fn menu_len(&self) -> usize {
        match self.step {
            WizardStep::Options => SendMethod::ALL.len(),
            WizardStep::ServiceSelect => ServiceKind::ALL.len(),
            _ => 0,
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        let len = self.menu_len();
        if len > 0 && self.menu_selected + 1 < len {
            self.menu_selected += 1;
        }
    }

    /// Confirms the highlighted menu row.
    pub fn choose(&mut self) {
        match self.step {
            WizardStep::Options => {
                let method = SendMethod::ALL[self.menu_selected.min(SendMethod::ALL.len() - 1)];
                self.select_method(method);
            }
            WizardStep::ServiceSelect => {
                let service = ServiceKind::ALL[self.menu_selected.min(ServiceKind::ALL.len() - 1)];
                self.select_service(service);
            }
            _ => {}
        }
    }

    /// Takes a send-method branch from the options step.
    pub fn select_method(&mut self, method: SendMethod) {
        if self.step != WizardStep::Options {
            return;
        }
        self.method = Some(method);
        self.menu_selected = 0;
        self.error = None;
        match method {
            SendMethod::Services => self.step = WizardStep::ServiceSelect,
            _ => {
                self.fields = fields_for(method, None);
                self.focus = 0;
                self.step = WizardStep::FieldEntry;
            }
        }
    }

    /// Takes a sub-service branch from the service-select step.
    pub fn select_service(&mut self, service: ServiceKind) {
        if self.step != WizardStep::ServiceSelect {
            return;
        }
        self.service = Some(service);
        self.fields = fields_for(SendMethod::Services, Some(service));
        self.focus = 0;
        self.error = None;
        self.step = WizardStep::FieldEntry;
    }

    // ========================================================================
    // Field Entry
    // ========================================================================

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn type_char(&mut self, c: char) {
        match self.step {
            WizardStep::FieldEntry => {
                if !c.is_control()
                    && let Some(field) = self.fields.get_mut(self.focus)
                {
                    field.value.push(c);
                }
            }
            WizardStep::Pin => {
                if c.is_ascii_digit() && self.pin.len() < MAX_PIN_LEN {
                    self.pin.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.step {
            WizardStep::FieldEntry => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.pop();
                }
            }
            WizardStep::Pin => {
                self.pin.pop();
            }
            _ => {}
        }
    }

    /// Moves from field entry to the pin step, carrying the accumulated
    /// fields. Rejected (with an inline error) while any field is empty or
    /// the amount does not parse to a positive number.
    pub fn continue_to_pin(&mut self) {
        if self.step != WizardStep::FieldEntry {
            return;
        }
        if let Some(field) = self.fields.iter().find(|f| f.value.trim().is_empty()) {
            self.error = Some(format!("{} is required", field.label));
            return;
        }
        if !self.amount_is_valid() {
            self.error = Some("Enter a valid amount".to_string());
            return;
        }
        self.error = None;
        self.step = WizardStep::Pin;
    }

    fn amount_is_valid(&self) -> bool {
        self.fields
            .iter()
            .find(|f| f.key == "amount")
            .map(|f| f.value.replace(',', ""))
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .is_some_and(|amount| amount > 0.0)
    }

    // ========================================================================
    // PIN Step
    // ========================================================================

    /// Claims the verification guard and hands out the entered PIN for the
    /// verifier round trip. `None` when not on the pin step, the PIN is
    /// empty, or a verification is already outstanding.
    pub fn begin_verify(&mut self) -> Option<String> {
        if self.step != WizardStep::Pin || self.pin.is_empty() || self.verifying {
            return None;
        }
        self.verifying = true;
        self.error = None;
        Some(self.pin.clone())
    }

    /// Wrong PIN or failed verification: stay on the pin step with all
    /// entered fields retained, surface the error, clear only the PIN
    /// digits for re-entry.
    pub fn pin_rejected(&mut self, message: impl Into<String>) {
        self.verifying = false;
        self.pin.clear();
        self.error = Some(message.into());
    }

    /// Correct PIN: consumes the wizard and produces the submission
    /// payload. The PIN itself is dropped here and is not part of the
    /// payload. Only reachable from the pin step, which is what guarantees
    /// no transfer is ever sent without PIN confirmation.
    #[must_use]
    pub fn into_payload(self) -> BTreeMap<String, String> {
        debug_assert_eq!(self.step, WizardStep::Pin);
        let mut payload = BTreeMap::new();
        if let Some(method) = self.method {
            payload.insert("method".to_string(), method.label().to_string());
        }
        if let Some(service) = self.service {
            payload.insert("service".to_string(), service.label().to_string());
        }
        for field in self.fields {
            payload.insert(field.key.to_string(), field.value);
        }
        payload
    }
}

// ============================================================================
// Tests
// ============================================================================
