//! Global constants of the application.

use log::LevelFilter;

pub const LOG_FILE: &str = "./zahlung.log"; // The terminal owns stdout, logs go to a file.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Bounds on the compact (whitespace-free) IBAN length
pub const IBAN_MIN_LENGTH: usize = 15;
pub const IBAN_MAX_LENGTH: usize = 34;

/// Number of characters per printed IBAN group
pub const IBAN_GROUP_SIZE: usize = 4;

/// Decimal places shown for amounts on the confirmation view
pub const AMOUNT_DISPLAY_SCALE: u32 = 2;
