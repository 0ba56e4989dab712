// Field validators. Each takes the raw line typed by the user and either
// returns the parsed value or a `Rejection` whose Display text is the
// message shown to the user.

use thiserror::Error;

pub const MIN_PRODUCTION_YEAR: i32 = 1900;
pub const MAX_PRODUCTION_YEAR: i32 = 2000;

/// Which field a malformed value was entered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    ProductionYear,
    Convertible,
}

/// Why a raw value was not accepted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty input: the user asked to leave the current entry.
    #[error("Info: Received an Empty String. Exiting from getting Input.")]
    Cancelled,

    #[error("{}", invalid_message(.0))]
    Invalid(Field),
}

fn invalid_message(field: &Field) -> &'static str {
    match field {
        Field::Id => "You have entered an invalid car ID. Please Retry with proper input data.",
        _ => "You have entered an invalid data. Please Retry with proper input data.",
    }
}

pub type Validated<T> = Result<T, Rejection>;

/// Car identifier: any integer, surrounding whitespace ignored.
pub fn validate_identifier(raw: &str) -> Validated<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Rejection::Cancelled);
    }
    raw.parse::<i64>().map_err(|_| Rejection::Invalid(Field::Id))
}

/// Production year: digits only, within 1900..=2000.
pub fn validate_year(raw: &str) -> Validated<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Rejection::Cancelled);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::Invalid(Field::ProductionYear));
    }
    match raw.parse::<i32>() {
        Ok(year) if (MIN_PRODUCTION_YEAR..=MAX_PRODUCTION_YEAR).contains(&year) => Ok(year),
        _ => Err(Rejection::Invalid(Field::ProductionYear)),
    }
}

/// Brand or model name: letters, digits and spaces, at least one
/// non-space character. Whitespace-only input is malformed, not a cancel.
pub fn validate_name(raw: &str) -> Validated<String> {
    if raw.is_empty() {
        return Err(Rejection::Cancelled);
    }
    let mut significant = raw.chars().filter(|c| !c.is_whitespace()).peekable();
    if significant.peek().is_none() || !significant.all(char::is_alphanumeric) {
        return Err(Rejection::Invalid(Field::Name));
    }
    Ok(raw.trim().to_string())
}

/// Y/YES/N/NO in any case.
pub fn validate_convertible(raw: &str) -> Validated<bool> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Rejection::Cancelled);
    }
    match raw.to_ascii_uppercase().as_str() {
        "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        _ => Err(Rejection::Invalid(Field::Convertible)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_parses_trimmed_integers() {
        assert_eq!(validate_identifier(" 42 "), Ok(42));
        assert_eq!(validate_identifier("0"), Ok(0));
        assert_eq!(validate_identifier("-3"), Ok(-3));
    }

    #[test]
    fn identifier_empty_is_cancel_not_error() {
        assert_eq!(validate_identifier(""), Err(Rejection::Cancelled));
        assert_eq!(validate_identifier("   "), Err(Rejection::Cancelled));
    }

    #[test]
    fn identifier_rejects_non_numeric() {
        for raw in ["abc", "4 2", "7a", "1.5"] {
            assert_eq!(validate_identifier(raw), Err(Rejection::Invalid(Field::Id)), "{raw}");
        }
    }

    #[test]
    fn year_boundaries() {
        assert_eq!(validate_year("1900"), Ok(1900));
        assert_eq!(validate_year("2000"), Ok(2000));
        assert_eq!(validate_year("1955"), Ok(1955));
        assert!(matches!(validate_year("1899"), Err(Rejection::Invalid(_))));
        assert!(matches!(validate_year("2001"), Err(Rejection::Invalid(_))));
    }

    #[test]
    fn year_accepts_exactly_the_closed_range() {
        for year in 1800..2100 {
            let accepted = validate_year(&year.to_string()).is_ok();
            assert_eq!(accepted, (1900..=2000).contains(&year), "{year}");
        }
    }

    #[test]
    fn year_rejects_signs_and_junk() {
        for raw in ["+1950", "-1950", "19x0", "1950.0", "99999999999999"] {
            assert_eq!(validate_year(raw), Err(Rejection::Invalid(Field::ProductionYear)), "{raw}");
        }
        assert_eq!(validate_year(""), Err(Rejection::Cancelled));
    }

    #[test]
    fn name_accepts_spaced_alphanumerics() {
        assert_eq!(validate_name("Rolls Royce"), Ok("Rolls Royce".to_string()));
        assert_eq!(validate_name("Model T"), Ok("Model T".to_string()));
        assert_eq!(validate_name("  911 "), Ok("911".to_string()));
    }

    #[test]
    fn name_rejects_whitespace_only_and_punctuation() {
        for raw in [" ", "   ", "\t", "Mercedes-Benz", "O'Brien", "Type 57!"] {
            assert_eq!(validate_name(raw), Err(Rejection::Invalid(Field::Name)), "{raw:?}");
        }
    }

    #[test]
    fn name_empty_cancels() {
        assert_eq!(validate_name(""), Err(Rejection::Cancelled));
    }

    #[test]
    fn convertible_is_case_insensitive() {
        for raw in ["y", "Y", "yes", "Yes", "YES"] {
            assert_eq!(validate_convertible(raw), Ok(true), "{raw}");
        }
        for raw in ["n", "N", "no", "No", "NO"] {
            assert_eq!(validate_convertible(raw), Ok(false), "{raw}");
        }
    }

    #[test]
    fn convertible_rejects_everything_else() {
        for raw in ["yep", "true", "0", "ja", "nope"] {
            assert_eq!(validate_convertible(raw), Err(Rejection::Invalid(Field::Convertible)), "{raw}");
        }
        assert_eq!(validate_convertible(""), Err(Rejection::Cancelled));
    }

    #[test]
    fn diagnostics_distinguish_cancel_from_malformed() {
        let cancel = Rejection::Cancelled.to_string();
        let bad = Rejection::Invalid(Field::Name).to_string();
        let bad_id = Rejection::Invalid(Field::Id).to_string();
        assert!(cancel.contains("Empty String"));
        assert!(bad.contains("invalid data"));
        assert!(bad_id.contains("invalid car ID"));
        assert_ne!(cancel, bad);
    }
}
