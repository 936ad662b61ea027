use std::fmt;
use std::str::FromStr;

use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::consts::{AMOUNT_DISPLAY_SCALE, IBAN_MAX_LENGTH, IBAN_MIN_LENGTH};
use crate::models::{Country, Field};
use crate::utils::error_messages::*;
use crate::utils::iban_format::{compact_iban, format_iban};

// Two letters, two check digits, then the account part
static IBAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]+$").expect("Failed to compile IBAN regex")
});

// Plain decimal notation, no digit separators or exponents
static AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("Failed to compile amount regex")
});

static SWISS_POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}$").expect("Failed to compile Swiss postal code regex")
});

static GERMAN_POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{5}$").expect("Failed to compile German postal code regex")
});

/// Pattern a postal code must match in the given country
pub fn postal_code_pattern(country: Country) -> &'static Regex {
    match country {
        Country::Switzerland => &SWISS_POSTAL_CODE_REGEX,
        Country::Germany => &GERMAN_POSTAL_CODE_REGEX,
    }
}

/// Checks the raw postal code against the rule of `country`.
/// Surrounding whitespace is not tolerated.
pub fn postal_code_validation(postal_code: &str, country: Country) -> bool {
    postal_code_pattern(country).is_match(postal_code)
}

#[derive(Debug, Clone, Copy, Display, Error)]
pub struct InvalidInput;

/// Wrapper type for an IBAN that passed the structural check.
/// The check digits are not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    /// The IBAN without any whitespace
    pub fn compact(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Iban {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let compact = compact_iban(value);
        if iban_validation(&compact) {
            Ok(Iban(compact))
        } else {
            Err(InvalidInput)
        }
    }
}

/// Printed in groups of four
impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_iban(&self.0))
    }
}

fn iban_validation(compact: &str) -> bool {
    (IBAN_MIN_LENGTH..=IBAN_MAX_LENGTH).contains(&compact.len()) && IBAN_REGEX.is_match(compact)
}

/// Wrapper type for an amount strictly greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveAmount(Decimal);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Betrag ist keine Zahl")]
    NotANumber,

    #[error("Betrag ist nicht grösser als 0")]
    NotPositive,

    /// Positive, but too large or too precise to be represented
    #[error("Betrag ist nicht darstellbar")]
    OutOfRange,
}

impl TryFrom<&str> for PositiveAmount {
    type Error = AmountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if !AMOUNT_REGEX.is_match(trimmed) {
            return Err(AmountError::NotANumber);
        }

        let negative = trimmed.starts_with('-');
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let amount = Decimal::from_str(unsigned).map_err(|_| {
            if negative {
                AmountError::NotPositive
            } else {
                AmountError::OutOfRange
            }
        })?;

        if amount > Decimal::ZERO {
            Ok(PositiveAmount(amount))
        } else if amount.is_zero() && !negative && trimmed.contains(|c: char| matches!(c, '1'..='9')) {
            // Digits past the supported precision were rounded away
            Err(AmountError::OutOfRange)
        } else {
            Err(AmountError::NotPositive)
        }
    }
}

impl fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.0.round_dp(AMOUNT_DISPLAY_SCALE);
        rounded.rescale(AMOUNT_DISPLAY_SCALE);
        write!(f, "{rounded}")
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    InvalidValue,
}

/// A rejected field. Renders as the message shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub struct FieldError {
    field: Field,
    kind: ErrorKind,
    // The postal code message names the country's rule
    country: Country,
    detail: Option<&'static str>,
}

impl FieldError {
    pub fn new(field: Field, kind: ErrorKind, country: Country) -> Self {
        Self {
            field,
            kind,
            country,
            detail: None,
        }
    }

    /// Same kind, but the amount could not be represented at all
    pub fn out_of_range(field: Field, country: Country) -> Self {
        Self {
            detail: Some(AMOUNT_OUT_OF_RANGE),
            ..Self::new(field, ErrorKind::InvalidValue, country)
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        if let Some(detail) = self.detail {
            return detail;
        }
        match (self.kind, self.field) {
            (ErrorKind::Required, Field::RecipientName) => RECIPIENT_NAME_REQUIRED,
            (ErrorKind::Required, Field::Street) => STREET_REQUIRED,
            (ErrorKind::Required, Field::City) => CITY_REQUIRED,
            (ErrorKind::Required, Field::PostalCode) => POSTAL_CODE_REQUIRED,
            (ErrorKind::Required, Field::Iban) => IBAN_REQUIRED,
            (ErrorKind::Required, Field::Amount) => AMOUNT_REQUIRED,
            (ErrorKind::Required, _) => FIELD_REQUIRED,
            (ErrorKind::InvalidFormat, Field::PostalCode) => match self.country {
                Country::Switzerland => POSTAL_CODE_SWISS,
                Country::Germany => POSTAL_CODE_GERMAN,
            },
            (ErrorKind::InvalidFormat, Field::Iban) => IBAN_INVALID,
            (ErrorKind::InvalidValue, Field::Amount) => AMOUNT_NOT_POSITIVE,
            _ => VALIDATION_ERROR,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
