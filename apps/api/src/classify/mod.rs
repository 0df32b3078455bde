// Classification engine: markup-aware scanning, language gating, tag
// grouping, salary extraction, and the HTTP handler on top.
// All identifier calls go through lang_id; no direct model access here.

pub mod classifier;
pub mod handlers;
pub mod language;
pub mod lexicon;
pub mod models;
pub mod salary;
pub mod scanner;
pub mod tagger;
