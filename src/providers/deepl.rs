//! DeepL API provider

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::codes::LanguageCodeMap;
use crate::core::errors::{Result, TranslationError};
use crate::core::transport::{HttpBody, HttpRequest, HttpTransport};
use crate::providers::{
    describe_failure, prepare, unsupported_pair, Prepared, ProviderKind, TranslationProvider,
};

/// Free-tier endpoint
pub const DEEPL_API_URL: &str = "https://api-free.deepl.com/v2/translate";

const NAME: &str = "DeepL";

/// Form-encoded POST, key passed as the `auth_key` field
#[derive(Clone)]
pub struct DeepLProvider {
    api_key: String,
    api_url: String,
    codes: LanguageCodeMap,
    transport: Arc<dyn HttpTransport>,
}

impl DeepLProvider {
    pub fn new(api_key: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TranslationError::config("DeepL API key must not be blank"));
        }

        Ok(Self {
            api_key,
            api_url: DEEPL_API_URL.to_string(),
            codes: LanguageCodeMap::upper_iso(),
            transport,
        })
    }

    /// Point at another endpoint, e.g. the paid `api.deepl.com` tier
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn request(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let form = vec![
            ("auth_key".to_string(), self.api_key.clone()),
            ("text".to_string(), text.to_string()),
            ("source_lang".to_string(), from.to_string()),
            ("target_lang".to_string(), to.to_string()),
        ];

        let response = self
            .transport
            .send(HttpRequest::post(&self.api_url, HttpBody::Form(form)))
            .await?;
        let json = response.json()?;

        json["translations"]
            .get(0)
            .and_then(|t| t["text"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| TranslationError::invalid_response("no translations[0].text"))
    }
}

#[async_trait]
impl TranslationProvider for DeepLProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::DeepL
    }

    fn name(&self) -> &'static str {
        NAME
    }

    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> String {
        let (from, to) = match prepare(&self.codes, text, source_language, target_language) {
            Prepared::Done(out) => return out,
            Prepared::Unsupported => return unsupported_pair(NAME),
            Prepared::Ready { from, to } => (from, to),
        };

        debug!("DeepL request {} -> {}", from, to);
        match self.request(text, from, to).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("DeepL translation failed: {}", e);
                describe_failure(NAME, &e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::testing::StubTransport;
    use crate::core::transport::HttpMethod;

    fn provider(stub: &Arc<StubTransport>) -> DeepLProvider {
        DeepLProvider::new("secret:fx", stub.clone()).unwrap()
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let stub = Arc::new(StubTransport::replying(200, "{}"));
        assert!(matches!(
            DeepLProvider::new("  ", stub),
            Err(TranslationError::ConfigError { .. })
        ));
    }

    #[tokio::test]
    async fn test_request_shape_and_parse() {
        let stub = Arc::new(StubTransport::replying(
            200,
            r#"{"translations":[{"detected_source_language":"TR","text":"hello"},{"text":"other"}]}"#,
        ));

        let result = provider(&stub).translate("merhaba", "Türkçe", "İngilizce").await;
        assert_eq!(result, "hello");

        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, DEEPL_API_URL);
        assert_eq!(
            request.body,
            Some(HttpBody::Form(vec![
                ("auth_key".to_string(), "secret:fx".to_string()),
                ("text".to_string(), "merhaba".to_string()),
                ("source_lang".to_string(), "TR".to_string()),
                ("target_lang".to_string(), "EN".to_string()),
            ]))
        );
    }

    #[tokio::test]
    async fn test_short_circuits_skip_network() {
        let stub = Arc::new(StubTransport::replying(200, "{}"));
        let deepl = provider(&stub);

        assert_eq!(deepl.translate("", "Türkçe", "Almanca").await, "");
        assert_eq!(deepl.translate("   ", "Türkçe", "Almanca").await, "");
        assert_eq!(deepl.translate("Hallo", "ALMANCA", "almanca").await, "Hallo");
        assert_eq!(
            deepl.translate("Hola", "Spanish", "Almanca").await,
            "(No DeepL language code is defined for the selected languages.)"
        );
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_failures_become_text() {
        let stub = Arc::new(StubTransport::replying(456, "Quota exceeded"));
        let result = provider(&stub).translate("merhaba", "Türkçe", "İngilizce").await;
        assert!(result.starts_with("(DeepL error: 456"));
        assert!(result.ends_with("Quota exceeded)"));

        let stub = Arc::new(StubTransport::replying(200, r#"{"translations":[]}"#));
        let result = provider(&stub).translate("merhaba", "Türkçe", "İngilizce").await;
        assert!(result.starts_with("(DeepL response was not in the expected format"));

        let stub = Arc::new(StubTransport::failing("dns lookup failed"));
        let result = provider(&stub).translate("merhaba", "Türkçe", "İngilizce").await;
        assert!(result.contains("dns lookup failed"));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_custom_api_url() {
        let stub = Arc::new(StubTransport::replying(200, r#"{"translations":[{"text":"x"}]}"#));
        let deepl = provider(&stub).with_api_url("https://api.deepl.com/v2/translate");

        deepl.translate("a", "en", "fr").await;
        assert_eq!(stub.last_request().url, "https://api.deepl.com/v2/translate");
    }
}
