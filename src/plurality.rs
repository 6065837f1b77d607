//! Singular/plural resolution for ambiguous lexicon entries.
//!
//! Words like *sheep* spell their singular and plural forms identically, so
//! the replacement ("piglet" vs "piglets") depends on surrounding context.
//! Resolution is an ordered chain of predicate rules over a small window of
//! neighboring words; the first rule that reaches a verdict wins. This is a
//! best-effort heuristic, not a grammar: ties are broken by rule order and
//! the fallback is singular.

use tracing::trace;

use crate::lexicon::Number;

/// Words preceding the span that are inspected by the cue rules.
const BEFORE_WINDOW: usize = 3;

/// Words following the span that are inspected by the cue rules.
const AFTER_WINDOW: usize = 2;

/// Determiners and verbs that mark the following noun as singular.
const SINGULAR_CUES: &[&str] = &[
    "a", "an", "one", "this", "that", "each", "every", "another", "the", "is", "was", "my", "your",
    "his", "her", "its", "our", "their",
];

/// Quantifiers, verbs, and number words that mark the noun as plural.
const PLURAL_CUES: &[&str] = &[
    "many", "several", "few", "some", "these", "those", "are", "were", "multiple", "various",
    "numerous", "all", "both", "most", "other", "two", "three", "four", "five", "six", "seven",
    "eight", "nine", "ten",
];

/// Verb forms that, directly after the noun, imply a plural subject.
const PLURAL_VERBS: &[&str] = &["are", "were", "seem", "seemed", "appear", "appeared"];

/// Conjunctions that pair the noun with another item in a list.
const CONJUNCTIONS: &[&str] = &["and", "or", "both"];

/// The few words immediately before and after a match span, cleaned for
/// comparison against the cue lists. Derived per match, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    before: Vec<String>,
    after: Vec<String>,
}

impl ContextWindow {
    /// Extracts the window around the byte span `start..end` of `text`.
    ///
    /// Words are whitespace-separated tokens with surrounding punctuation
    /// trimmed and ASCII case folded away. The window may cross sentence
    /// boundaries.
    pub fn around(text: &str, start: usize, end: usize) -> Self {
        let before = text[..start]
            .split_whitespace()
            .rev()
            .take(BEFORE_WINDOW)
            .map(clean_word)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let after = text[end..]
            .split_whitespace()
            .take(AFTER_WINDOW)
            .map(clean_word)
            .collect();
        Self { before, after }
    }

    fn last_before(&self) -> Option<&str> {
        self.before.last().map(String::as_str)
    }

    fn first_after(&self) -> Option<&str> {
        self.after.first().map(String::as_str)
    }
}

fn clean_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_ascii_lowercase()
}

/// A named resolution rule. Returns `None` when the rule has no opinion.
type Rule = fn(&ContextWindow) -> Option<Number>;

/// Rules in precedence order. A singular cue in the preceding window always
/// beats a plural cue in the same window, which in turn beats a plural verb
/// after the noun.
const RULES: &[(&str, Rule)] = &[
    ("singular-cue-before", singular_cue_before),
    ("plural-cue-before", plural_cue_before),
    ("plural-verb-after", plural_verb_after),
    ("conjunction-pair", conjunction_pair),
];

/// Decides the number of an ambiguous occurrence from its context window.
///
/// Deterministic: the same window always yields the same verdict.
pub fn resolve(window: &ContextWindow) -> Number {
    for &(name, rule) in RULES {
        if let Some(number) = rule(window) {
            trace!(rule = name, verdict = ?number, "plurality resolved");
            return number;
        }
    }
    trace!(rule = "default", verdict = ?Number::Singular, "plurality resolved");
    Number::Singular
}

fn singular_cue_before(window: &ContextWindow) -> Option<Number> {
    window
        .before
        .iter()
        .any(|w| SINGULAR_CUES.contains(&w.as_str()))
        .then_some(Number::Singular)
}

fn plural_cue_before(window: &ContextWindow) -> Option<Number> {
    window
        .before
        .iter()
        .any(|w| PLURAL_CUES.contains(&w.as_str()))
        .then_some(Number::Plural)
}

fn plural_verb_after(window: &ContextWindow) -> Option<Number> {
    window
        .first_after()
        .is_some_and(|w| PLURAL_VERBS.contains(&w))
        .then_some(Number::Plural)
}

/// An item paired off by a conjunction reads as one thing per side, so a
/// bare "X and Y" pairing resolves singular. "other" before the conjunction
/// overrides to plural, since it implies more than one.
fn conjunction_pair(window: &ContextWindow) -> Option<Number> {
    if window.last_before().is_some_and(|w| CONJUNCTIONS.contains(&w)) {
        return Some(Number::Singular);
    }
    if window.first_after().is_some_and(|w| CONJUNCTIONS.contains(&w)) {
        if window.last_before() == Some("other") {
            return Some(Number::Plural);
        }
        return Some(Number::Singular);
    }
    None
}
