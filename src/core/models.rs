//! Core data models for translation

use serde::{Deserialize, Serialize};

use crate::core::language::Language;

/// A single translate action coming from a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang: None,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    pub fn with_target_lang(mut self, target_lang: impl Into<String>) -> Self {
        self.target_lang = Some(target_lang.into());
        self
    }
}

/// What the caller shows after a translate action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Translation, validation prompt or diagnostic, shown verbatim
    pub text: String,
    pub provider: String,
}

/// Selection and text state behind a translate screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPanel {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub source_text: String,
    pub translated_text: String,
}

impl TranslationPanel {
    /// Turkish to English with empty texts
    pub fn new() -> Self {
        Self {
            source_language: Some(Language::Turkish.display_name().to_string()),
            target_language: Some(Language::English.display_name().to_string()),
            ..Default::default()
        }
    }

    /// Exchange both language selections and both texts.
    ///
    /// Does nothing unless both languages are selected.
    pub fn swap(&mut self) {
        if self.source_language.is_none() || self.target_language.is_none() {
            return;
        }

        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }
}
