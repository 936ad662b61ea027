//! User-facing messages shown next to an invalid field

pub const RECIPIENT_NAME_REQUIRED: &str = "Name ist erforderlich";

pub const STREET_REQUIRED: &str = "Strasse ist erforderlich";

pub const CITY_REQUIRED: &str = "Ort ist erforderlich";

pub const POSTAL_CODE_REQUIRED: &str = "Postleitzahl ist erforderlich";

pub const POSTAL_CODE_SWISS: &str = "Schweizer PLZ muss 4 Ziffern haben (z.B. 8000)";

pub const POSTAL_CODE_GERMAN: &str = "Deutsche PLZ muss 5 Ziffern haben (z.B. 10115)";

pub const IBAN_REQUIRED: &str = "IBAN ist erforderlich";

pub const IBAN_INVALID: &str = "Ungültige IBAN";

pub const AMOUNT_REQUIRED: &str = "Betrag ist erforderlich";

pub const AMOUNT_NOT_POSITIVE: &str = "Betrag muss grösser als 0 sein";

pub const AMOUNT_OUT_OF_RANGE: &str = "Betrag liegt ausserhalb des gültigen Bereichs";

pub const FIELD_REQUIRED: &str = "Feld ist erforderlich";

pub const VALIDATION_ERROR: &str = "Ungültige Eingabe";
