use std::collections::BTreeSet;

use crate::classify::lexicon::TagLexicon;
use crate::lang_id::Identification;

/// Identifications at or below this confidence are ignored.
pub const CONFIDENCE_FLOOR: f32 = 0.8;

/// Accumulates language codes across the sentence pass, then filters them
/// against the allow-list. The filtered set gates the word pass: keyword
/// and salary extraction only run when English was detected.
pub struct LanguageAggregator<'a> {
    lexicon: &'a TagLexicon,
    seen: BTreeSet<String>,
}

impl<'a> LanguageAggregator<'a> {
    pub fn new(lexicon: &'a TagLexicon) -> Self {
        Self {
            lexicon,
            seen: BTreeSet::new(),
        }
    }

    pub fn observe(&mut self, identification: Identification) {
        if identification.confidence > CONFIDENCE_FLOOR {
            self.seen.insert(identification.code);
        }
    }

    /// Uppercased, deduplicated codes restricted to the allow-list.
    pub fn into_filtered(self) -> Vec<String> {
        let Self { lexicon, seen } = self;
        seen.into_iter()
            .filter(|code| lexicon.is_allowed_language(code))
            .map(|code| code.to_uppercase())
            .collect()
    }
}
