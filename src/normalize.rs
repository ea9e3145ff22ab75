//! Text and number normalization applied to raw provider values.

use serde_json::Value;

/// Title-case a place name: trim, then uppercase the first letter of each
/// word and lowercase the rest. Any non-letter starts a new word, so
/// hyphenated names keep their interior capitals ("Midi-Pyrénées").
///
/// Idempotent, and safe for multi-byte characters.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;

    for ch in input.trim().chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }

    out
}

/// Coerce a loosely-typed scalar to a float.
///
/// Numbers pass through, numeric-looking strings are parsed, and anything
/// else (null, booleans, nested structures, unparseable text) falls back
/// to 0.0 rather than failing.
pub fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_case_mixed_input() {
        assert_eq!(title_case("FOo CITY"), "Foo City");
        assert_eq!(title_case("FOO region"), "Foo Region");
        assert_eq!(title_case("foo country"), "Foo Country");
    }

    #[test]
    fn test_title_case_idempotent() {
        let once = title_case("FOo CITY");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn test_title_case_trims() {
        assert_eq!(title_case("  toulouse "), "Toulouse");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_accents() {
        assert_eq!(title_case("Midi-Pyrénées"), "Midi-Pyrénées");
        assert_eq!(title_case("provence-alpes-côte d'azur"), "Provence-Alpes-Côte D'Azur");
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(coerce_f64(&json!(0.001)), 0.001);
        assert_eq!(coerce_f64(&json!(1)), 1.0);
        assert_eq!(coerce_f64(&json!(-12.5)), -12.5);
    }

    #[test]
    fn test_coerce_numeric_strings() {
        assert_eq!(coerce_f64(&json!("2")), 2.0);
        assert_eq!(coerce_f64(&json!(" 0.1 ")), 0.1);
    }

    #[test]
    fn test_coerce_fallback_to_zero() {
        assert_eq!(coerce_f64(&json!("not a number")), 0.0);
        assert_eq!(coerce_f64(&json!(null)), 0.0);
        assert_eq!(coerce_f64(&json!(true)), 0.0);
        assert_eq!(coerce_f64(&json!(["nested"])), 0.0);
    }
}
