//! State of one payment entry, from the first keystroke to the confirmation.

use crate::models::{Country, Currency, Field, ParseError, PaymentDraft};
use crate::utils::iban_format::format_iban;
use crate::utils::input_validation::FieldError;
use crate::validator::{validate, ValidationResult};
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editable,
    /// The draft was accepted and is only shown. Left through `reset`.
    Submitted,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Die Zahlung wurde bereits erfasst")]
    AlreadySubmitted,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug)]
pub struct FormSession {
    draft: PaymentDraft,
    errors: ValidationResult,
    state: SessionState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            draft: PaymentDraft::default(),
            errors: ValidationResult::default(),
            state: SessionState::Editable,
        }
    }

    pub fn draft(&self) -> &PaymentDraft {
        &self.draft
    }

    /// Errors of the last rejected submit, minus those cleared by edits since
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SessionState::Submitted
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Editable => Ok(()),
            SessionState::Submitted => Err(SessionError::AlreadySubmitted),
        }
    }

    /// Overwrites a field with user input and clears that field's error.
    /// The errors of the other fields stay until the next submit.
    ///
    /// The IBAN is stored formatted.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), SessionError> {
        self.ensure_editable()?;

        match field {
            Field::Iban => self.draft.set(field, &format_iban(value))?,
            _ => self.draft.set(field, value)?,
        }
        debug!("Field {} updated", field.name());

        if self.errors.clear_field(field).is_some() {
            debug!("Error of field {} cleared", field.name());
        }
        Ok(())
    }

    /// Changes the country without validating the postal code again
    pub fn set_country(&mut self, country: Country) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.draft.country = country;
        self.errors.clear_field(Field::Country);
        Ok(())
    }

    pub fn set_currency(&mut self, currency: Currency) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.draft.currency = currency;
        self.errors.clear_field(Field::Currency);
        Ok(())
    }

    /// Validates the whole draft. On success the session switches to
    /// `Submitted` and keeps the draft as entered, otherwise the errors are
    /// stored and the draft stays editable.
    pub fn submit(&mut self) -> Result<SessionState, SessionError> {
        self.ensure_editable()?;

        self.errors = validate(&self.draft);
        if self.errors.is_valid() {
            self.state = SessionState::Submitted;
            match serde_json::to_string(&self.draft) {
                Ok(json) => info!("Zahlung erfasst: {json}"),
                Err(error) => info!("Zahlung erfasst (not serializable: {error})"),
            }
        } else {
            warn!("Submit rejected, {} invalid field(s)", self.errors.len());
        }
        Ok(self.state)
    }

    /// Accepted draft, once the session is submitted
    pub fn submitted(&self) -> Option<&PaymentDraft> {
        self.is_submitted().then_some(&self.draft)
    }

    /// Back to an empty draft without errors, from any state
    pub fn reset(&mut self) {
        self.draft = PaymentDraft::default();
        self.errors = ValidationResult::default();
        self.state = SessionState::Editable;
        debug!("Form reset");
    }
}
