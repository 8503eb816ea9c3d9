/// Identifier casing
///
/// `normalize` gives the canonical form used to compare names regardless of
/// spelling, `convert_case` applies an output casing, and `detect_case` guesses
/// the casing an existing identifier already uses.

use crate::error::{GqlSpansqlError, Result};

use regex::Regex;
use std::sync::LazyLock;

static SPANNER_COLUMN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]+$").expect("valid regex"));
static LOWER_CAMEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]+$").expect("valid regex"));
static UPPER_CAMEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]+$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Snake,
    LowerCamel,
    UpperCamel,
    /// Leave identifiers exactly as written
    NoConvert,
    Unknown,
}

impl Case {
    /// Map a configuration value to a casing; unrecognised values give `Unknown`
    pub fn from_setting(value: &str) -> Case {
        match value {
            "snake" => Case::Snake,
            "lowercamel" => Case::LowerCamel,
            "uppercamel" => Case::UpperCamel,
            "" => Case::NoConvert,
            _ => Case::Unknown,
        }
    }

    /// Like `from_setting`, but an unrecognised value is a configuration error
    pub fn parse_setting(what: &str, value: &str) -> Result<Case> {
        match Case::from_setting(value) {
            Case::Unknown => Err(GqlSpansqlError::Config(format!(
                "{} case '{}' not found (expected snake, lowercamel, uppercamel or empty)",
                what, value
            ))),
            case => Ok(case),
        }
    }
}

/// Best-effort guess at the casing of an existing identifier
pub fn detect_case(name: &str) -> Case {
    if !SPANNER_COLUMN_PATTERN.is_match(name) {
        return Case::Unknown;
    }
    if name.contains('_') {
        return Case::Snake;
    }
    if LOWER_CAMEL_PATTERN.is_match(name) {
        return Case::LowerCamel;
    }
    if UPPER_CAMEL_PATTERN.is_match(name) {
        return Case::UpperCamel;
    }
    Case::Unknown
}

/// Explicit casing wins; without one, fall back to the casing `sample` uses
pub fn effective_case(configured: Case, sample: Option<&str>) -> Case {
    match (configured, sample) {
        (Case::NoConvert, Some(sample)) => detect_case(sample),
        (configured, _) => configured,
    }
}

/// Canonical form for spelling-insensitive name comparison
pub fn normalize(name: &str) -> String {
    to_snake_case(name)
}

pub fn convert_case(name: &str, case: Case) -> String {
    match case {
        Case::Snake => to_snake_case(name),
        Case::LowerCamel => to_lower_camel_case(name),
        Case::UpperCamel => to_upper_camel_case(name),
        Case::NoConvert | Case::Unknown => name.to_string(),
    }
}

/// Split an identifier into words at separators and case boundaries
///
/// An uppercase run followed by a lowercase letter starts a new word at its
/// last capital, so `HTTPServer` splits as `HTTP`, `Server`. Digit runs are
/// words of their own: `address2Line` splits as `address`, `2`, `Line`.
fn split_words(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&name[s..pos]);
            }
            continue;
        }

        if let Some(s) = start {
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, c)| c);
            let digit_edge = prev.is_ascii_digit() != ch.is_ascii_digit();
            let boundary = digit_edge
                || (ch.is_uppercase()
                    && (prev.is_lowercase()
                        || (prev.is_uppercase() && next.is_some_and(|n| n.is_lowercase()))));
            if boundary {
                words.push(&name[s..pos]);
                start = Some(pos);
            }
        } else {
            start = Some(pos);
        }
    }
    if let Some(s) = start {
        words.push(&name[s..]);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn to_snake_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn to_lower_camel_case(name: &str) -> String {
    let mut out = String::new();
    for (i, word) in split_words(name).into_iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

pub fn to_upper_camel_case(name: &str) -> String {
    split_words(name).into_iter().map(capitalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_case() {
        assert_eq!(detect_case("kebab-case"), Case::Unknown);
        assert_eq!(detect_case("snake_case"), Case::Snake);
        assert_eq!(detect_case("Snake_case"), Case::Snake);
        assert_eq!(detect_case("kebab-mixed-Snake_case"), Case::Unknown);
        assert_eq!(detect_case("lowerCamelCase"), Case::LowerCamel);
        // all-lowercase and single-capital names are taken at face value
        assert_eq!(detect_case("notlowercamelcase"), Case::LowerCamel);
        assert_eq!(detect_case("UpperCamelCase"), Case::UpperCamel);
        assert_eq!(detect_case("Notuppercamelcase"), Case::UpperCamel);
        assert_eq!(detect_case("x"), Case::Unknown);
    }

    #[test]
    fn test_convert_case() {
        assert_eq!(convert_case("snake_case", Case::NoConvert), "snake_case");
        assert_eq!(convert_case("snake_case", Case::Snake), "snake_case");
        assert_eq!(convert_case("snake_case", Case::LowerCamel), "snakeCase");
        assert_eq!(convert_case("snake_case", Case::UpperCamel), "SnakeCase");
        assert_eq!(convert_case("HasNoIdId", Case::LowerCamel), "hasNoIdId");
        assert_eq!(convert_case("HasNoIdId", Case::Snake), "has_no_id_id");
        assert_eq!(convert_case("AItemIds", Case::LowerCamel), "aItemIds");
        assert_eq!(convert_case("whatever-name", Case::Unknown), "whatever-name");
    }

    #[test]
    fn test_normalize_ignores_spelling() {
        assert_eq!(normalize("createdAt"), normalize("created_at"));
        assert_eq!(normalize("CreatedAt"), "created_at");
        assert_eq!(normalize("ID"), normalize("Id"));
        assert_eq!(normalize("id"), normalize("Id"));
        assert_eq!(normalize("userID"), normalize("UserId"));
        assert_eq!(normalize("HTTPServer"), "http_server");
        assert_ne!(normalize("userId"), normalize("Id"));
    }

    #[test]
    fn test_digits_are_separate_words() {
        assert_eq!(convert_case("address2Line", Case::Snake), "address_2_line");
        assert_eq!(to_snake_case("Item10Id"), "item_10_id");
        assert_eq!(to_snake_case("line_2"), "line_2");
        assert_eq!(to_lower_camel_case("address_2_line"), "address2Line");
        assert_eq!(to_upper_camel_case("v2_api"), "V2Api");
        assert_eq!(normalize("item1Id"), normalize("Item1Id"));
    }

    #[test]
    fn test_case_settings() {
        assert_eq!(Case::from_setting("snake"), Case::Snake);
        assert_eq!(Case::from_setting("lowercamel"), Case::LowerCamel);
        assert_eq!(Case::from_setting("uppercamel"), Case::UpperCamel);
        assert_eq!(Case::from_setting(""), Case::NoConvert);
        assert_eq!(Case::from_setting("kebab"), Case::Unknown);
        assert!(Case::parse_setting("table", "invalid").is_err());
        assert_eq!(Case::parse_setting("column", "snake").unwrap(), Case::Snake);
    }

    #[test]
    fn test_effective_case_prefers_configuration() {
        assert_eq!(effective_case(Case::Snake, Some("userId")), Case::Snake);
        assert_eq!(effective_case(Case::NoConvert, Some("user_id")), Case::Snake);
        assert_eq!(effective_case(Case::NoConvert, Some("UserId")), Case::UpperCamel);
        assert_eq!(effective_case(Case::NoConvert, None), Case::NoConvert);
    }
}
