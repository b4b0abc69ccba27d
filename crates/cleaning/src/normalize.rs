//! Arabic comparison-key normalization.
//!
//! Normalized text is only ever used as a join key, never displayed.

/// Canonicalize an Arabic name for comparison.
///
/// Folds alef variants to bare alef, final ya to ya, hamza carriers to a
/// lone hamza, collapses whitespace runs to a single space, trims, and
/// lowercases any Latin characters present. Idempotent; empty input yields
/// an empty string.
#[must_use]
pub fn normalize_arabic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        let folded = match c {
            'إ' | 'أ' | 'آ' => 'ا',
            'ى' => 'ي',
            'ئ' | 'ؤ' => 'ء',
            other => other,
        };
        if folded.is_whitespace() {
            // Collapse runs; dropping the flag while `out` is empty trims
            // leading whitespace, never flushing at the end trims trailing.
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in folded.to_lowercase() {
            out.push(lower);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_alef_variants() {
        assert_eq!(normalize_arabic("أحمد"), normalize_arabic("احمد"));
        assert_eq!(normalize_arabic("آمنة"), normalize_arabic("امنة"));
        assert_eq!(normalize_arabic("إبراهيم"), normalize_arabic("ابراهيم"));
    }

    #[test]
    fn folds_ya_and_hamza_variants() {
        assert_eq!(normalize_arabic("مصطفى"), normalize_arabic("مصطفي"));
        assert_eq!(normalize_arabic("رائد"), normalize_arabic("راءد"));
        assert_eq!(normalize_arabic("مؤمن"), normalize_arabic("مءمن"));
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize_arabic("  احمد   علي "), "احمد علي");
        assert_eq!(normalize_arabic("احمد\t\nعلي"), "احمد علي");
    }

    #[test]
    fn lowercases_latin() {
        assert_eq!(normalize_arabic("Ahmed ALI"), "ahmed ali");
    }

    #[test]
    fn empty_input_yields_empty_key() {
        assert_eq!(normalize_arabic(""), "");
        assert_eq!(normalize_arabic("   "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["أحمد  علي", "  مصطفى ", "Mixed أسماء Text"] {
            let once = normalize_arabic(s);
            assert_eq!(normalize_arabic(&once), once);
        }
    }
}
