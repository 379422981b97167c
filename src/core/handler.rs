//! Entry point for callers that need a translation

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::models::{TranslationRequest, TranslationResult};
use crate::providers::TranslationProvider;

pub const SELECT_LANGUAGES_PROMPT: &str = "Please select both a source and a target language.";
pub const ENTER_TEXT_PROMPT: &str = "Please enter the text you want to translate.";

/// Validates caller input and forwards it to the selected provider
#[derive(Clone)]
pub struct TranslationRequestHandler {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationRequestHandler {
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TranslationProvider> {
        &self.provider
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        self.provider.supported_languages()
    }

    /// Translate, or return a prompt when the input is incomplete
    pub async fn translate(
        &self,
        text: &str,
        source_language: Option<&str>,
        target_language: Option<&str>,
    ) -> String {
        let source = source_language.filter(|l| !l.trim().is_empty());
        let target = target_language.filter(|l| !l.trim().is_empty());

        let (Some(source), Some(target)) = (source, target) else {
            return SELECT_LANGUAGES_PROMPT.to_string();
        };

        let text = text.trim();
        if text.is_empty() {
            return ENTER_TEXT_PROMPT.to_string();
        }

        debug!(
            "Translating {} chars {} -> {} via {}",
            text.chars().count(),
            source,
            target,
            self.provider.name()
        );
        self.provider.translate(text, source, target).await
    }

    /// Like [`translate`](Self::translate), but gives up when `cancel` fires.
    ///
    /// Returns `None` on cancellation; a partial result is never produced.
    pub async fn translate_with_cancel(
        &self,
        text: &str,
        source_language: Option<&str>,
        target_language: Option<&str>,
        cancel: &CancellationToken,
    ) -> Option<String> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Translation cancelled");
                None
            }
            text = self.translate(text, source_language, target_language) => Some(text),
        }
    }

    /// Run a request object through [`translate`](Self::translate)
    pub async fn handle(&self, request: &TranslationRequest) -> TranslationResult {
        let text = self
            .translate(
                &request.text,
                request.source_lang.as_deref(),
                request.target_lang.as_deref(),
            )
            .await;

        TranslationResult {
            text,
            provider: self.provider.name().to_string(),
        }
    }
}
