//! The closed vocabulary of barnyard animal words and their replacements.
//!
//! Every entry pairs a singular and a plural spelling with the replacement
//! stems `"piglet"` and `"piglets"`. Entries whose singular and plural
//! spellings coincide (e.g. *sheep*) are ambiguous and need contextual
//! resolution before a replacement can be chosen.

use indexmap::IndexMap;

/// Replacement stem for a singular occurrence.
pub const REPLACEMENT_SINGULAR: &str = "piglet";

/// Replacement stem for a plural occurrence.
pub const REPLACEMENT_PLURAL: &str = "piglets";

/// Grammatical number of one occurrence, after any resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

/// Which lexicon slot a queried spelling matched.
///
/// `Either` is returned for ambiguous entries, where the spelling occupies
/// both slots and only surrounding context can pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMatch {
    Singular,
    Plural,
    Either,
}

/// One animal word pair and its replacement pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Singular spelling, lowercase canonical form.
    pub singular: &'static str,
    /// Plural spelling, lowercase canonical form. Irregular plurals
    /// (goose/geese) are distinct strings, never derived.
    pub plural: &'static str,
    /// Replacement for a singular occurrence.
    pub replacement_singular: &'static str,
    /// Replacement for a plural occurrence.
    pub replacement_plural: &'static str,
}

impl LexiconEntry {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            plural,
            replacement_singular: REPLACEMENT_SINGULAR,
            replacement_plural: REPLACEMENT_PLURAL,
        }
    }

    /// Whether the singular and plural spellings are identical, so that a
    /// match against this entry cannot tell the two forms apart.
    pub fn is_ambiguous(&self) -> bool {
        self.singular == self.plural
    }

    /// The replacement stem for the given number.
    pub fn replacement(&self, number: Number) -> &'static str {
        match number {
            Number::Singular => self.replacement_singular,
            Number::Plural => self.replacement_plural,
        }
    }
}

/// Index slot: which entry a normalized spelling belongs to, and which of
/// its forms the spelling is.
#[derive(Debug, Clone, Copy)]
struct FormSlot {
    entry: usize,
    form: FormMatch,
}

/// Ordered, immutable set of lexicon entries with a case-insensitive index
/// by spelling. Built once at startup; the vocabulary is closed.
#[derive(Debug)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: IndexMap<&'static str, FormSlot>,
}

impl Lexicon {
    /// Builds a lexicon from a list of entries.
    ///
    /// An entry whose two spellings coincide occupies a single index slot
    /// marked [`FormMatch::Either`]; inserting the plural form must not
    /// silently overwrite the singular one.
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        let mut index = IndexMap::with_capacity(entries.len() * 2);
        for (i, entry) in entries.iter().enumerate() {
            let form = if entry.is_ambiguous() {
                FormMatch::Either
            } else {
                FormMatch::Singular
            };
            index.insert(entry.singular, FormSlot { entry: i, form });
            if !entry.is_ambiguous() {
                index.insert(
                    entry.plural,
                    FormSlot {
                        entry: i,
                        form: FormMatch::Plural,
                    },
                );
            }
        }
        Self { entries, index }
    }

    /// The fixed table of common barnyard animals.
    pub fn barnyard() -> Self {
        Self::new(vec![
            LexiconEntry::new("pig", "pigs"),
            LexiconEntry::new("cow", "cows"),
            LexiconEntry::new("chicken", "chickens"),
            LexiconEntry::new("rooster", "roosters"),
            LexiconEntry::new("hen", "hens"),
            LexiconEntry::new("duck", "ducks"),
            LexiconEntry::new("goose", "geese"),
            LexiconEntry::new("sheep", "sheep"),
            LexiconEntry::new("lamb", "lambs"),
            LexiconEntry::new("goat", "goats"),
            LexiconEntry::new("horse", "horses"),
            LexiconEntry::new("donkey", "donkeys"),
            LexiconEntry::new("mule", "mules"),
            LexiconEntry::new("turkey", "turkeys"),
            LexiconEntry::new("rabbit", "rabbits"),
        ])
    }

    /// Looks up a word case-insensitively, returning the entry it belongs
    /// to and which of the entry's forms the spelling matched.
    pub fn lookup(&self, word: &str) -> Option<(&LexiconEntry, FormMatch)> {
        let normalized = word.to_ascii_lowercase();
        let slot = self.index.get(normalized.as_str())?;
        Some((&self.entries[slot.entry], slot.form))
    }

    /// All distinct spellings in the lexicon, in insertion order.
    pub fn forms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.index.keys().copied()
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }
}
