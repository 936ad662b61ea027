//! Data model of the payment form

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use thiserror::Error;

/// Country of the recipient address. Only the two domestic profiles exist,
/// any other country name is rejected when parsed.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Display,
)]
pub enum Country {
    #[default]
    #[display("Schweiz")]
    Switzerland,
    #[display("Deutschland")]
    Germany,
}

impl Country {
    /// Exact number of digits of a postal code in this country
    pub fn postal_code_digits(self) -> usize {
        match self {
            Country::Switzerland => 4,
            Country::Germany => 5,
        }
    }

    pub fn postal_code_example(self) -> &'static str {
        match self {
            Country::Switzerland => "8000",
            Country::Germany => "10115",
        }
    }
}

impl FromStr for Country {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "schweiz" | "switzerland" | "ch" => Ok(Country::Switzerland),
            "deutschland" | "germany" | "de" => Ok(Country::Germany),
            _ => Err(ParseError::UnknownCountry(value.to_owned())),
        }
    }
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Display,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    CHF,
    EUR,
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "CHF" => Ok(Currency::CHF),
            "EUR" => Ok(Currency::EUR),
            _ => Err(ParseError::UnknownCurrency(value.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unbekanntes Land: {0}")]
    UnknownCountry(String),

    #[error("Unbekannte Währung: {0}")]
    UnknownCurrency(String),

    #[error("Unbekanntes Feld: {0}")]
    UnknownField(String),
}

/// The fields of the form, in display order.
///
/// `Display` renders the label shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display)]
pub enum Field {
    #[display("Name *")]
    RecipientName,
    #[display("Strasse, Hausnummer *")]
    Street,
    #[display("Postleitzahl *")]
    PostalCode,
    #[display("Ort *")]
    City,
    #[display("Land")]
    Country,
    #[display("IBAN *")]
    Iban,
    #[display("Betrag *")]
    Amount,
    #[display("Währung")]
    Currency,
    #[display("Referenz")]
    Reference,
    #[display("Verwendungszweck")]
    Purpose,
}

impl Field {
    /// Name of the field as used by the form's inputs
    pub fn name(self) -> &'static str {
        match self {
            Field::RecipientName => "recipientName",
            Field::Street => "street",
            Field::PostalCode => "postalCode",
            Field::City => "city",
            Field::Country => "country",
            Field::Iban => "iban",
            Field::Amount => "amount",
            Field::Currency => "currency",
            Field::Reference => "reference",
            Field::Purpose => "purpose",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::RecipientName
                | Field::Street
                | Field::PostalCode
                | Field::City
                | Field::Iban
                | Field::Amount
        )
    }

    /// Free-text fields, as opposed to the two selections (country, currency)
    pub fn is_text(self) -> bool {
        !matches!(self, Field::Country | Field::Currency)
    }

    /// Example value shown in an empty input, depending on the selected country
    pub fn placeholder(self, country: Country) -> Option<&'static str> {
        let placeholder = match (self, country) {
            (Field::RecipientName, _) => "Max Mustermann",
            (Field::Street, Country::Switzerland) => "Musterstrasse 123",
            (Field::Street, Country::Germany) => "Musterstraße 123",
            (Field::PostalCode, country) => country.postal_code_example(),
            (Field::City, Country::Switzerland) => "Zürich",
            (Field::City, Country::Germany) => "Berlin",
            (Field::Iban, Country::Switzerland) => "CH93 0076 2011 6238 5295 7",
            (Field::Iban, Country::Germany) => "DE89 3704 0044 0532 0130 00",
            (Field::Amount, _) => "100.00",
            (Field::Reference, _) => "Rechnungsnummer, Kundennummer, etc.",
            (Field::Purpose, _) => "Beschreibung des Zahlungszwecks...",
            (Field::Country | Field::Currency, _) => return None,
        };
        Some(placeholder)
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        use strum::IntoEnumIterator;

        Field::iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ParseError::UnknownField(name.to_owned()))
    }
}

/// The payment being entered. Every text field holds the raw input.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub recipient_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: Country,
    pub iban: String,
    pub amount: String,
    pub currency: Currency,
    pub reference: String,
    pub purpose: String,
}

impl PaymentDraft {
    /// Current value of a field, as displayed in its input
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::RecipientName => self.recipient_name.clone(),
            Field::Street => self.street.clone(),
            Field::PostalCode => self.postal_code.clone(),
            Field::City => self.city.clone(),
            Field::Country => self.country.to_string(),
            Field::Iban => self.iban.clone(),
            Field::Amount => self.amount.clone(),
            Field::Currency => self.currency.to_string(),
            Field::Reference => self.reference.clone(),
            Field::Purpose => self.purpose.clone(),
        }
    }

    /// Overwrites a field. Country and currency are parsed from `value`.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), ParseError> {
        let value = value.to_owned();
        match field {
            Field::RecipientName => self.recipient_name = value,
            Field::Street => self.street = value,
            Field::PostalCode => self.postal_code = value,
            Field::City => self.city = value,
            Field::Country => self.country = value.parse()?,
            Field::Iban => self.iban = value,
            Field::Amount => self.amount = value,
            Field::Currency => self.currency = value.parse()?,
            Field::Reference => self.reference = value,
            Field::Purpose => self.purpose = value,
        }
        Ok(())
    }
}
