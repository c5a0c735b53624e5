//! # Session State
//!
//! State of one widget session: the connected account, the pending transfer form, and
//! where the current transfer stands.
//!
//! ## Transfer Phases
//!
//! ```text
//! Idle ──▶ Broadcasting ──▶ Confirming ──▶ Persisting ──▶ Done
//!               │                │              │
//!               └────────────────┴──────────────┴──▶ Failed(reason)
//! ```
//!
//! `is_loading` covers Confirming and Persisting: from the moment the contract call is
//! pending until the transfer record is saved. A failure always leaves the loading state,
//! so the form can be submitted again.

/// Where the most recent transfer stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TransferPhase {
    #[default]
    Idle,
    /// Waiting on the wallet to broadcast the transfer and the contract call.
    Broadcasting,
    /// Contract call pending, waiting for on-chain confirmation.
    Confirming,
    /// Confirmed, writing the transfer record.
    Persisting,
    Failed(String),
    Done { tx_hash: String },
}

impl TransferPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, TransferPhase::Confirming | TransferPhase::Persisting)
    }

    /// A transfer is in flight and a new one must not start.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            TransferPhase::Broadcasting | TransferPhase::Confirming | TransferPhase::Persisting
        )
    }
}

/// Pending transfer form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub address_to: String,
    pub amount: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    AddressTo,
    Amount,
}

/// Change notifications published to session subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    AccountChanged(String),
    PhaseChanged(TransferPhase),
    FormChanged(FormData),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    current_account: Option<String>,
    phase: TransferPhase,
    form: FormData,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_account(&self) -> Option<&str> {
        self.current_account.as_deref()
    }

    /// Set the current account. Returns `true` when the value changed.
    pub fn set_current_account(&mut self, account: &str) -> bool {
        if self.current_account.as_deref() == Some(account) {
            return false;
        }
        self.current_account = Some(account.to_string());
        true
    }

    pub fn phase(&self) -> &TransferPhase {
        &self.phase
    }

    pub fn set_phase(&mut self, phase: TransferPhase) {
        self.phase = phase;
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::AddressTo => self.form.address_to = value,
            FormField::Amount => self.form.amount = value,
        }
    }

    pub fn clear_form(&mut self) {
        self.form = FormData::default();
    }
}
