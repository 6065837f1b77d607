//! Whole-word scanning of input text for lexicon spellings.

use regex::Regex;

use crate::lexicon::{FormMatch, Lexicon, LexiconEntry};

/// One recognized animal word occurrence in the source text.
#[derive(Debug, Clone)]
pub struct Match<'m, 't> {
    /// Byte offset of the first character of the matched word.
    pub start: usize,
    /// Byte offset one past the last character of the matched word.
    pub end: usize,
    /// The matched text with its original casing.
    pub text: &'t str,
    /// The lexicon entry the word belongs to.
    pub entry: &'m LexiconEntry,
    /// Which of the entry's forms the spelling matched.
    pub form: FormMatch,
}

/// Scans text for whole-word, case-insensitive occurrences of any lexicon
/// spelling.
#[derive(Debug)]
pub struct Matcher {
    lexicon: Lexicon,
    pattern: Regex,
}

impl Matcher {
    /// Compiles a matcher over the given lexicon.
    ///
    /// All spellings are combined into a single word-bounded alternation.
    /// Alternates are sorted longest first so that when two spellings could
    /// match at the same position, the longest one wins; the regex engine's
    /// leftmost semantics give the earliest start.
    pub fn new(lexicon: Lexicon) -> Self {
        let mut forms: Vec<&str> = lexicon.forms().collect();
        forms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let pattern = format!(r"(?i)\b(?:{})\b", forms.join("|"));
        let pattern = Regex::new(&pattern).expect("lexicon spellings form a valid pattern");
        Self { lexicon, pattern }
    }

    /// The lexicon this matcher scans for.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// All occurrences in `text`, left to right, non-overlapping.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<Match<'_, 't>> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                let (entry, form) = self
                    .lexicon
                    .lookup(m.as_str())
                    .expect("matched spelling is in the lexicon");
                Match {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str(),
                    entry,
                    form,
                }
            })
            .collect()
    }
}
