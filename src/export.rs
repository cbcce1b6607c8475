//! Export-safe identifier derivation
//!
//! Maps raw schema identifiers (type names, field names, enum symbols) to
//! names that are legal as exported symbols in the generated language:
//! the output always begins with an uppercase letter or the fixed
//! `Exported_` prefix, and every other code point is either a letter copied
//! from the input or an underscore.
//!
//! The mapping is deterministic but NOT injective: two distinct inputs can
//! export to the same output (purely numeric names all degrade to underscore
//! runs). Collision surfacing is the registry's job, not this function's.

use crate::error::{Result, SchemaError};

/// Prefix emitted when the input does not start with a letter
const FORCED_EXPORT_PREFIX: &str = "Exported_";

/// Derive an export-safe identifier from a raw schema identifier.
///
/// Rules, in order:
/// 1. If the first code point is alphabetic, emit its uppercase mapping and
///    continue from the second code point.
/// 2. Otherwise emit `Exported_`; a leading underscore is absorbed into the
///    prefix, any other leading character is left for the scan to replace.
/// 3. Every remaining code point copies through if alphabetic, otherwise it
///    becomes a single `_`. Digits, punctuation, symbols, and combining
///    marks all land in the underscore branch.
///
/// Empty input is an error: callers must never pass a nameless declaration,
/// and a degenerate output would be worse than failing the symbol outright.
pub fn exported_identifier(identifier: &str) -> Result<String> {
    let first = identifier
        .chars()
        .next()
        .ok_or_else(|| SchemaError::InvalidIdentifier(identifier.to_string()))?;

    let mut out = String::with_capacity(identifier.len() + FORCED_EXPORT_PREFIX.len());

    let rest = if first.is_alphabetic() {
        out.extend(first.to_uppercase());
        &identifier[first.len_utf8()..]
    } else {
        out.push_str(FORCED_EXPORT_PREFIX);
        if first == '_' {
            &identifier[1..]
        } else {
            identifier
        }
    };

    for c in rest.chars() {
        if c.is_alphabetic() {
            out.push(c);
        } else {
            out.push('_');
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_name_is_capitalized() {
        assert_eq!(exported_identifier("name").unwrap(), "Name");
        assert_eq!(exported_identifier("fortune").unwrap(), "Fortune");
    }

    #[test]
    fn test_already_exported_name_is_unchanged() {
        assert_eq!(exported_identifier("Fortune").unwrap(), "Fortune");
    }

    #[test]
    fn test_leading_underscore_is_absorbed_into_prefix() {
        assert_eq!(exported_identifier("_id").unwrap(), "Exported_id");
    }

    #[test]
    fn test_leading_digit_takes_prefix_and_is_replaced() {
        // The digit is not dropped like a leading underscore would be; the
        // scan replaces it along with the other digits.
        assert_eq!(exported_identifier("123abc").unwrap(), "Exported____abc");
        assert_eq!(exported_identifier("1x").unwrap(), "Exported__x");
    }

    #[test]
    fn test_underscore_only_inputs() {
        // First underscore absorbed, second replaced by the scan.
        assert_eq!(exported_identifier("__").unwrap(), "Exported__");
        assert_eq!(exported_identifier("_").unwrap(), "Exported_");
    }

    #[test]
    fn test_purely_numeric_name_degrades_to_underscores() {
        assert_eq!(exported_identifier("42").unwrap(), "Exported___");
        // Two distinct numeric names collide - documented non-guarantee.
        assert_eq!(
            exported_identifier("42").unwrap(),
            exported_identifier("99").unwrap()
        );
    }

    #[test]
    fn test_interior_punctuation_becomes_underscore() {
        assert_eq!(exported_identifier("foo-bar.baz").unwrap(), "Foo_bar_baz");
        assert_eq!(exported_identifier("a1b2").unwrap(), "A_b_");
    }

    #[test]
    fn test_unicode_letters_pass_through() {
        assert_eq!(exported_identifier("ñame").unwrap(), "Ñame");
        // Combining acute accent is a mark, not a letter.
        assert_eq!(exported_identifier("e\u{0301}tat").unwrap(), "E_tat");
    }

    #[test]
    fn test_uppercase_mapping_may_expand() {
        // U+00DF uppercases to "SS" under full Unicode case mapping.
        assert_eq!(exported_identifier("ßeta").unwrap(), "SSeta");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            exported_identifier(""),
            Err(SchemaError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_output_grammar_holds_over_sample_corpus() {
        let samples = [
            "name", "_id", "123abc", "1x", "__", "42", "snake_case_name",
            "kebab-case-name", "UPPER", "miXedCase", "ñandú", "日本語",
            "x", "_", "9", "a.b.c", "with space",
        ];
        for s in samples {
            let out = exported_identifier(s).unwrap();
            let mut chars = out.chars();
            let first = chars.next().unwrap();
            // Uncased scripts uppercase to themselves, so the check is
            // "never lowercase" rather than "always uppercase".
            assert!(
                !first.is_lowercase(),
                "{out:?} from {s:?} does not look exported"
            );
            for c in out.chars() {
                assert!(
                    c.is_alphabetic() || c == '_',
                    "{out:?} from {s:?} contains illegal {c:?}"
                );
            }
        }
    }
}
