use std::sync::Arc;

use crate::classify::lexicon::TagLexicon;
use crate::config::Config;
use crate::lang_id::LanguageIdentifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable language identifier. Production wiring is the fastText
    /// sidecar client; tests swap in stubs.
    pub identifier: Arc<dyn LanguageIdentifier>,
    /// Static tag lexicon and language allow-list, built once at startup
    /// and read-only from then on.
    pub lexicon: Arc<TagLexicon>,
}
