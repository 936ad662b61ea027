//! Formatting of the IBAN input, applied on every change of the field

use crate::consts::IBAN_GROUP_SIZE;

/// Removes every whitespace character, leaving the case untouched
pub fn compact_iban(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Uppercases the input, strips all whitespace and groups the rest by four
/// characters separated by a single space.
///
/// Formatting an already formatted IBAN returns it unchanged.
pub fn format_iban(raw: &str) -> String {
    let compact: Vec<char> = compact_iban(&raw.to_uppercase()).chars().collect();

    compact
        .chunks(IBAN_GROUP_SIZE)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iban() {
        let cases = vec![
            ("ch9300762011623852957", "CH93 0076 2011 6238 5295 7"),
            ("CH93 0076 2011 6238 5295 7", "CH93 0076 2011 6238 5295 7"),
            ("  de89 3704\t0044 05320130 00 ", "DE89 3704 0044 0532 0130 00"),
            ("CH93", "CH93"),
            ("CH930", "CH93 0"),
            ("", ""),
            ("   ", ""),
        ];

        for (raw, expected) in cases {
            assert_eq!(format_iban(raw), expected, "Unexpected formatting of '{}'", raw);
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let inputs = vec!["ch9300762011623852957", "de89 3704 0044 0532 0130 00", "x", "INVALID"];

        for raw in inputs {
            let once = format_iban(raw);
            assert_eq!(format_iban(&once), once, "Formatting '{}' twice changed it", raw);
        }
    }

    #[test]
    fn test_no_trailing_space() {
        let formatted = format_iban("CH930076");
        assert_eq!(formatted, "CH93 0076");
        assert!(!formatted.ends_with(' '));
    }

    #[test]
    fn test_compact_keeps_case() {
        assert_eq!(compact_iban("ch93 0076\n2011"), "ch9300762011");
    }
}
