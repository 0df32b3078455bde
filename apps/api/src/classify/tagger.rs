use std::collections::{BTreeMap, BTreeSet};

use crate::classify::lexicon::TagLexicon;

/// Accumulates dictionary hits from the word pass, grouped by category.
/// Backing storage is set-based per group, so repeated words (and distinct
/// words mapping to the same key, like `full` and `fulltime`) collapse to
/// one key instance. Ordered structures keep the output deterministic.
pub struct TagClassifier<'a> {
    lexicon: &'a TagLexicon,
    groups: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

impl<'a> TagClassifier<'a> {
    pub fn new(lexicon: &'a TagLexicon) -> Self {
        Self {
            lexicon,
            groups: BTreeMap::new(),
        }
    }

    /// Records the word's canonical tag if the lexicon knows it.
    /// Returns whether the word was a hit.
    pub fn observe(&mut self, word: &str) -> bool {
        match self.lexicon.lookup(word) {
            Some(entry) => {
                self.groups.entry(entry.group).or_default().insert(entry.key);
                true
            }
            None => false,
        }
    }

    /// Materializes the accumulated sets into group → key lists.
    pub fn into_groups(self) -> BTreeMap<String, Vec<String>> {
        self.groups
            .into_iter()
            .map(|(group, keys)| {
                (
                    group.to_string(),
                    keys.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }
}
