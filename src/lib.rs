//! Entry form for a domestic bank transfer: typed draft, field validation,
//! IBAN formatting and the editable/submitted session around them.

pub mod consts;
pub mod models;
pub mod session;
pub mod utils;
pub mod validator;

pub use models::{Country, Currency, Field, ParseError, PaymentDraft};
pub use session::{FormSession, SessionError, SessionState};
pub use utils::iban_format::format_iban;
pub use utils::input_validation::{ErrorKind, FieldError};
pub use validator::{validate, ValidationResult};
