//! Validation of a whole payment draft

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::models::{Field, PaymentDraft};
use crate::utils::input_validation::{
    postal_code_validation, AmountError, ErrorKind, FieldError, Iban, PositiveAmount,
};

/// Errors of a draft, keyed by field. A field without an entry is valid.
///
/// Iterates in the order the fields appear on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Drops the error of a single field, returning it if there was one
    pub fn clear_field(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }
}

/// Checks every field of the draft and collects the failures.
///
/// Reference, purpose and currency are never rejected.
pub fn validate(draft: &PaymentDraft) -> ValidationResult {
    let mut result = ValidationResult::default();
    let error = |field, kind| FieldError::new(field, kind, draft.country);

    for field in Field::iter().filter(|field| field.is_required()) {
        if draft.value(field).trim().is_empty() {
            result.insert(error(field, ErrorKind::Required));
        }
    }

    // The format checks only run on fields that are filled in
    if !result.contains(Field::PostalCode)
        && !postal_code_validation(&draft.postal_code, draft.country)
    {
        result.insert(error(Field::PostalCode, ErrorKind::InvalidFormat));
    }

    if !result.contains(Field::Iban) && Iban::try_from(draft.iban.as_str()).is_err() {
        result.insert(error(Field::Iban, ErrorKind::InvalidFormat));
    }

    if !result.contains(Field::Amount) {
        match PositiveAmount::try_from(draft.amount.as_str()) {
            Ok(_) => {}
            Err(AmountError::OutOfRange) => {
                result.insert(FieldError::out_of_range(Field::Amount, draft.country));
            }
            Err(_) => result.insert(error(Field::Amount, ErrorKind::InvalidValue)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Currency};

    fn valid_draft() -> PaymentDraft {
        PaymentDraft {
            recipient_name: "Max Mustermann".to_owned(),
            street: "Musterstrasse 123".to_owned(),
            city: "Zürich".to_owned(),
            postal_code: "8000".to_owned(),
            country: Country::Switzerland,
            iban: "CH93 0076 2011 6238 5295 7".to_owned(),
            amount: "100.50".to_owned(),
            currency: Currency::CHF,
            reference: String::new(),
            purpose: String::new(),
        }
    }

    fn kind_of(result: &ValidationResult, field: Field) -> Option<ErrorKind> {
        result.get(field).map(FieldError::kind)
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let result = validate(&valid_draft());
        assert!(result.is_valid(), "Unexpected errors: {:?}", result);
    }

    #[test]
    fn test_empty_draft_requires_fields() {
        let result = validate(&PaymentDraft::default());

        let required = vec![
            Field::RecipientName,
            Field::Street,
            Field::City,
            Field::PostalCode,
            Field::Iban,
            Field::Amount,
        ];
        for field in &required {
            assert_eq!(kind_of(&result, *field), Some(ErrorKind::Required),
                       "Field {} should be required", field.name());
        }
        assert_eq!(result.len(), required.len());
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let draft = PaymentDraft {
            recipient_name: "   ".to_owned(),
            street: "\t".to_owned(),
            postal_code: "  ".to_owned(),
            ..valid_draft()
        };
        let result = validate(&draft);
        assert_eq!(kind_of(&result, Field::RecipientName), Some(ErrorKind::Required));
        assert_eq!(kind_of(&result, Field::Street), Some(ErrorKind::Required));
        assert_eq!(kind_of(&result, Field::PostalCode), Some(ErrorKind::Required));
        assert_eq!(kind_of(&result, Field::City), None);
    }

    #[test]
    fn test_postal_code_depends_on_country() {
        let cases = vec![
            ("8000", Country::Switzerland, None),
            ("80000", Country::Switzerland, Some(ErrorKind::InvalidFormat)),
            ("10115", Country::Germany, None),
            ("1011", Country::Germany, Some(ErrorKind::InvalidFormat)),
        ];

        for (postal_code, country, expected) in cases {
            let draft = PaymentDraft {
                postal_code: postal_code.to_owned(),
                country,
                ..valid_draft()
            };
            assert_eq!(kind_of(&validate(&draft), Field::PostalCode), expected,
                       "Postal code {} in {} gave an unexpected result", postal_code, country);
        }
    }

    #[test]
    fn test_postal_code_message_names_country_rule() {
        let draft = PaymentDraft {
            postal_code: "8000".to_owned(),
            country: Country::Germany,
            ..valid_draft()
        };
        let result = validate(&draft);
        assert_eq!(
            result.get(Field::PostalCode).map(ToString::to_string).as_deref(),
            Some("Deutsche PLZ muss 5 Ziffern haben (z.B. 10115)")
        );
    }

    #[test]
    fn test_iban() {
        let cases = vec![
            ("CH93 0076 2011 6238 5295 7", None),
            ("CH9300762011623852957", None),
            ("INVALID", Some(ErrorKind::InvalidFormat)),
            ("", Some(ErrorKind::Required)),
        ];

        for (iban, expected) in cases {
            let draft = PaymentDraft {
                iban: iban.to_owned(),
                ..valid_draft()
            };
            assert_eq!(kind_of(&validate(&draft), Field::Iban), expected,
                       "IBAN '{}' gave an unexpected result", iban);
        }
    }

    #[test]
    fn test_amount() {
        let cases = vec![
            ("100.50", None),
            ("0.01", None),
            ("0", Some(ErrorKind::InvalidValue)),
            ("-5", Some(ErrorKind::InvalidValue)),
            ("abc", Some(ErrorKind::InvalidValue)),
            ("1_000", Some(ErrorKind::InvalidValue)),
            ("100000000000000000000000000000", Some(ErrorKind::InvalidValue)),
            ("", Some(ErrorKind::Required)),
            ("  ", Some(ErrorKind::Required)),
        ];

        for (amount, expected) in cases {
            let draft = PaymentDraft {
                amount: amount.to_owned(),
                ..valid_draft()
            };
            assert_eq!(kind_of(&validate(&draft), Field::Amount), expected,
                       "Amount '{}' gave an unexpected result", amount);
        }
    }

    #[test]
    fn test_amount_messages() {
        let cases = vec![
            ("1_000", "Betrag muss grösser als 0 sein"),
            ("-5", "Betrag muss grösser als 0 sein"),
            ("100000000000000000000000000000", "Betrag liegt ausserhalb des gültigen Bereichs"),
            ("0.00000000000000000000000000001", "Betrag liegt ausserhalb des gültigen Bereichs"),
        ];

        for (amount, expected) in cases {
            let draft = PaymentDraft {
                amount: amount.to_owned(),
                ..valid_draft()
            };
            assert_eq!(
                validate(&draft).get(Field::Amount).map(ToString::to_string).as_deref(),
                Some(expected),
                "Amount '{}' gave an unexpected message", amount
            );
        }
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let draft = PaymentDraft {
            reference: "<script>".to_owned(),
            purpose: String::new(),
            currency: Currency::EUR,
            ..valid_draft()
        };
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn test_errors_iterate_in_form_order() {
        let result = validate(&PaymentDraft::default());
        let fields: Vec<Field> = result.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                Field::RecipientName,
                Field::Street,
                Field::PostalCode,
                Field::City,
                Field::Iban,
                Field::Amount,
            ]
        );
    }

    #[test]
    fn test_clear_field() {
        let mut result = validate(&PaymentDraft::default());
        assert!(result.clear_field(Field::City).is_some());
        assert!(result.clear_field(Field::City).is_none());
        assert!(!result.contains(Field::City));
        assert!(result.contains(Field::Street));
    }
}
