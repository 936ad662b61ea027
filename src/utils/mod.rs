pub mod error_messages;
pub mod iban_format;
pub mod input_validation;
