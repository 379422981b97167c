//! Dictionary-backed provider that works without a network

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::core::dictionary::DictionaryStore;
use crate::core::language::same_language;
use crate::providers::{ProviderKind, TranslationProvider};

const NAME: &str = "Offline dictionary";

#[derive(Debug, Clone)]
pub struct OfflineProvider {
    store: Arc<DictionaryStore>,
}

impl OfflineProvider {
    pub fn new(store: DictionaryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Load the dictionary file at `path`, or the embedded sample set
    pub fn load(path: Option<&Path>) -> Self {
        Self::new(DictionaryStore::load(path))
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Synchronous form of `translate`
    pub fn translate_now(&self, text: &str, source_language: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        if same_language(source_language, target_language) {
            return text.to_string();
        }

        match self.store.lookup(source_language, target_language, text) {
            Some(translated) => translated.to_string(),
            None => format!("(No match found in the sample dictionary: \"{}\")", text),
        }
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new(DictionaryStore::embedded())
    }
}

#[async_trait]
impl TranslationProvider for OfflineProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Offline
    }

    fn name(&self) -> &'static str {
        NAME
    }

    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> String {
        self.translate_now(text, source_language, target_language)
    }
}
