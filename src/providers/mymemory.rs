//! MyMemory (translated.net) provider, no credentials needed

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::codes::LanguageCodeMap;
use crate::core::errors::{Result, TranslationError};
use crate::core::transport::{HttpRequest, HttpTransport};
use crate::providers::{
    describe_failure, prepare, unsupported_pair, Prepared, ProviderKind, TranslationProvider,
};

pub const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";

const NAME: &str = "MyMemory";

/// Everything except RFC 3986 unreserved characters is escaped, spaces as `%20`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct MyMemoryProvider {
    api_url: String,
    codes: LanguageCodeMap,
    transport: Arc<dyn HttpTransport>,
}

impl MyMemoryProvider {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api_url: MYMEMORY_API_URL.to_string(),
            codes: LanguageCodeMap::lower_iso(),
            transport,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn request_url(&self, text: &str, from: &str, to: &str) -> String {
        format!(
            "{}?q={}&langpair={}|{}",
            self.api_url,
            utf8_percent_encode(text, QUERY_VALUE),
            from,
            to
        )
    }

    async fn request(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let url = self.request_url(text, from, to);
        let response = self.transport.send(HttpRequest::get(url)).await?;
        let json = response.json()?;

        // null translatedText reads as an empty translation
        match json.get("responseData").and_then(|data| data.get("translatedText")) {
            Some(Value::String(translated)) => Ok(translated.clone()),
            Some(Value::Null) => Ok(String::new()),
            _ => Err(TranslationError::invalid_response(
                "no responseData.translatedText",
            )),
        }
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MyMemory
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

        debug!("MyMemory request {}|{}", from, to);
        match self.request(text, from, to).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("MyMemory translation failed: {}", e);
                describe_failure(NAME, &e)
            }
        }
    }
}
