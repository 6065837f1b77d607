//! Capitalization mirroring for replacement words.

/// One of the three recognized capitalization styles.
///
/// Mixed internal casing is not a style of its own: a word that is not
/// all-uppercase falls through to `Title` or `Lower` based solely on its
/// first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// Every letter uppercase ("COW").
    Upper,
    /// First letter uppercase ("Cow").
    Title,
    /// Everything else ("cow", "cOw").
    Lower,
}

impl CasePattern {
    /// Classifies the capitalization style of a word.
    pub fn of(word: &str) -> Self {
        let mut has_letter = false;
        let all_upper = word.chars().all(|c| {
            if c.is_ascii_alphabetic() {
                has_letter = true;
                c.is_ascii_uppercase()
            } else {
                true
            }
        });
        if has_letter && all_upper {
            CasePattern::Upper
        } else if word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            CasePattern::Title
        } else {
            CasePattern::Lower
        }
    }

    /// Renders a replacement stem in this style.
    pub fn apply(self, stem: &str) -> String {
        match self {
            CasePattern::Upper => stem.to_ascii_uppercase(),
            CasePattern::Title => {
                let mut chars = stem.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                    }
                    None => String::new(),
                }
            }
            CasePattern::Lower => stem.to_ascii_lowercase(),
        }
    }
}

/// Renders `stem` so that its capitalization mirrors `original`.
pub fn mirror_case(original: &str, stem: &str) -> String {
    CasePattern::of(original).apply(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lowercase() {
        assert_eq!(CasePattern::of("cow"), CasePattern::Lower);
    }

    #[test]
    fn test_classify_title() {
        assert_eq!(CasePattern::of("Cow"), CasePattern::Title);
    }

    #[test]
    fn test_classify_upper() {
        assert_eq!(CasePattern::of("COW"), CasePattern::Upper);
        assert_eq!(CasePattern::of("GEESE"), CasePattern::Upper);
    }

    #[test]
    fn test_mixed_casing_falls_through() {
        // Not all-uppercase, so only the first character decides.
        assert_eq!(CasePattern::of("cOw"), CasePattern::Lower);
        assert_eq!(CasePattern::of("CoW"), CasePattern::Title);
        assert_eq!(CasePattern::of("ChIcKeN"), CasePattern::Title);
        assert_eq!(CasePattern::of("pIgS"), CasePattern::Lower);
    }

    #[test]
    fn test_mirror_case() {
        assert_eq!(mirror_case("cow", "piglet"), "piglet");
        assert_eq!(mirror_case("Cow", "piglet"), "Piglet");
        assert_eq!(mirror_case("COW", "piglet"), "PIGLET");
        assert_eq!(mirror_case("COWS", "piglets"), "PIGLETS");
    }

    #[test]
    fn test_apply_normalizes_remainder() {
        assert_eq!(CasePattern::Title.apply("piglets"), "Piglets");
        assert_eq!(CasePattern::Lower.apply("PIGLET"), "piglet");
    }
}
