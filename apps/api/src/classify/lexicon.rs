//! Tag lexicon: the static word → (group, key) dictionary and the
//! language allow-list. Built once in `main`, shared as `Arc<TagLexicon>`,
//! never mutated afterwards, so unsynchronized concurrent reads are fine.

use std::collections::HashMap;

/// Canonical tag a dictionary word maps to, e.g. `"fulltime"` maps to the
/// `fullTime` key in the `jobType` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub group: &'static str,
    pub key: &'static str,
}

// word, group, key
const TAG_TABLE: &[(&str, &str, &str)] = &[
    ("full", "jobType", "fullTime"),
    ("fulltime", "jobType", "fullTime"),
    ("part", "jobType", "partTime"),
    ("parttime", "jobType", "partTime"),
    ("contract", "jobType", "contract"),
    ("intern", "jobType", "internship"),
    ("internship", "jobType", "internship"),
    ("commission", "jobType", "commission"),
    ("volunteer", "jobType", "volunteer"),
    ("weekend", "workShift", "weekend"),
    ("weekends", "workShift", "weekend"),
    ("evening", "workShift", "eveningShift"),
    ("night", "workShift", "nightShift"),
    ("flexible", "workShift", "flexible"),
    ("health", "benefits", "health"),
    ("dental", "benefits", "dental"),
    ("vision", "benefits", "vision"),
    ("life", "benefits", "life"),
    ("bonus", "benefits", "bonus"),
    ("401k", "benefits", "_401k"),
    ("commuter", "benefits", "commuter"),
    ("discount", "benefits", "employeeDiscounts"),
    ("discounts", "benefits", "employeeDiscounts"),
    ("referral", "benefits", "referral"),
    ("spanish", "languages", "ES"),
    ("communication", "skills", "Communication"),
    ("teamwork", "skills", "Teamwork"),
    ("leadership", "skills", "Leadership"),
    ("adaptability", "skills", "Adaptability"),
    ("site", "workplace", "onSite"),
    ("remote", "workplace", "remote"),
    ("hybrid", "workplace", "hybrid"),
];

/// Bare lowercase codes the detected-language set is filtered against.
const ALLOWED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "zh", "hi", "ar", "pt", "bn", "ru", "ur", "ko", "ja",
];

/// Immutable tag dictionary plus the language allow-list.
#[derive(Debug, Clone)]
pub struct TagLexicon {
    tags: HashMap<&'static str, TagEntry>,
    allowed_languages: &'static [&'static str],
}

impl TagLexicon {
    /// The built-in lexicon. Words are stored lowercase; lookups expect
    /// already-lowercased input (the word pass lowercases for us).
    pub fn builtin() -> Self {
        let tags = TAG_TABLE
            .iter()
            .map(|&(word, group, key)| (word, TagEntry { group, key }))
            .collect();
        Self {
            tags,
            allowed_languages: ALLOWED_LANGUAGES,
        }
    }

    pub fn lookup(&self, word: &str) -> Option<TagEntry> {
        self.tags.get(word).copied()
    }

    /// Exact match against the lowercase allow-list; identifiers hand us
    /// bare lowercase codes.
    pub fn is_allowed_language(&self, code: &str) -> bool {
        self.allowed_languages.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn language_count(&self) -> usize {
        self.allowed_languages.len()
    }
}
