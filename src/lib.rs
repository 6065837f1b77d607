//! Piglet replaces barnyard animal words in text with "piglet" or
//! "piglets", mirroring each matched word's capitalization.
//!
//! The transformation is a pure function with no failure modes: any input
//! string produces an output string, and inputs without animal words pass
//! through unchanged.
//!
//! # Example
//!
//! ```
//! use piglet::transform;
//!
//! assert_eq!(transform("The cow is here"), "The piglet is here");
//! assert_eq!(transform("One sheep and many sheep"), "One piglet and many piglets");
//! ```

mod casing;
mod lexicon;
mod matcher;
mod plurality;

use std::sync::LazyLock;

pub use casing::{CasePattern, mirror_case};
pub use lexicon::{FormMatch, Lexicon, LexiconEntry, Number};
pub use matcher::{Match, Matcher};
pub use plurality::{ContextWindow, resolve};

/// Shared matcher over the fixed barnyard lexicon. The lexicon is closed
/// and immutable, so compiling it once is safe across threads.
static MATCHER: LazyLock<Matcher> = LazyLock::new(|| Matcher::new(Lexicon::barnyard()));

/// Replaces every whole-word occurrence of a barnyard animal in `text`
/// with "piglet" or "piglets", mirroring the original capitalization.
///
/// Matches are processed left to right against the original text, so
/// contextual singular/plural resolution never sees its own output. The
/// input is not mutated and the function is safe to call concurrently.
pub fn transform(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut tail = 0;
    for m in MATCHER.find_matches(text) {
        let number = match m.form {
            FormMatch::Singular => Number::Singular,
            FormMatch::Plural => Number::Plural,
            FormMatch::Either => resolve(&ContextWindow::around(text, m.start, m.end)),
        };
        output.push_str(&text[tail..m.start]);
        output.push_str(&mirror_case(m.text, m.entry.replacement(number)));
        tail = m.end;
    }
    output.push_str(&text[tail..]);
    output
}
