//! Azure AI Translator (v3) provider

use async_trait::async_trait;
use reqwest::Url;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::codes::LanguageCodeMap;
use crate::core::errors::{Result, TranslationError};
use crate::core::transport::{HttpBody, HttpRequest, HttpTransport};
use crate::providers::{
    describe_failure, prepare, unsupported_pair, Prepared, ProviderKind, TranslationProvider,
};

const NAME: &str = "Azure Translator";
const API_VERSION: &str = "3.0";

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// JSON POST authenticated with subscription key and region headers
#[derive(Clone)]
pub struct AzureProvider {
    endpoint: String,
    region: String,
    key: String,
    codes: LanguageCodeMap,
    transport: Arc<dyn HttpTransport>,
}

impl AzureProvider {
    pub fn new(
        endpoint: impl Into<String>,
        region: impl Into<String>,
        key: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let region = region.into();
        let key = key.into();

        if endpoint.trim().is_empty() {
            return Err(TranslationError::config("Azure Translator endpoint must not be blank"));
        }
        if region.trim().is_empty() {
            return Err(TranslationError::config("Azure Translator region must not be blank"));
        }
        if key.trim().is_empty() {
            return Err(TranslationError::config("Azure Translator key must not be blank"));
        }

        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        Url::parse(&endpoint).map_err(|e| {
            TranslationError::config(format!("invalid Azure Translator endpoint {}: {}", endpoint, e))
        })?;

        Ok(Self {
            endpoint,
            region,
            key,
            codes: LanguageCodeMap::lower_iso(),
            transport,
        })
    }

    fn translate_url(&self, from: &str, to: &str) -> Result<String> {
        let url = Url::parse_with_params(
            &format!("{}/translate", self.endpoint),
            &[("api-version", API_VERSION), ("from", from), ("to", to)],
        )
        .map_err(|e| TranslationError::config(e.to_string()))?;

        Ok(url.into())
    }

    async fn request(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let request = HttpRequest::post(
            self.translate_url(from, to)?,
            HttpBody::Json(json!([{ "Text": text }])),
        )
        .with_header(SUBSCRIPTION_KEY_HEADER, &self.key)
        .with_header(SUBSCRIPTION_REGION_HEADER, &self.region);

        let response = self.transport.send(request).await?;
        let json = response.json()?;

        // [{"translations":[{"text":"...","to":"de"}]}]
        json.get(0)
            .and_then(|item| item["translations"].get(0))
            .and_then(|t| t["text"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| TranslationError::invalid_response("no [0].translations[0].text"))
    }
}

#[async_trait]
impl TranslationProvider for AzureProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Azure
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

        debug!("Azure request {} -> {} ({})", from, to, self.region);
        match self.request(text, from, to).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Azure translation failed: {}", e);
                describe_failure(NAME, &e)
            }
        }
    }
}
