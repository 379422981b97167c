//! Translation backends
//!
//! Every backend implements [`TranslationProvider`]. `translate` always
//! returns display text: translations, the input itself for identical
//! languages, or a parenthesised diagnostic when nothing could be produced.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::codes::LanguageCodeMap;
use crate::core::errors::TranslationError;
use crate::core::language::{same_language, supported_languages};

pub mod azure;
pub mod deepl;
pub mod mymemory;
pub mod offline;

pub use azure::AzureProvider;
pub use deepl::DeepLProvider;
pub use mymemory::MyMemoryProvider;
pub use offline::OfflineProvider;

/// Backend variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Offline,
    DeepL,
    Azure,
    MyMemory,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Offline => write!(f, "offline"),
            ProviderKind::DeepL => write!(f, "deepl"),
            ProviderKind::Azure => write!(f, "azure"),
            ProviderKind::MyMemory => write!(f, "mymemory"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" | "dictionary" => Ok(ProviderKind::Offline),
            "deepl" => Ok(ProviderKind::DeepL),
            "azure" => Ok(ProviderKind::Azure),
            "mymemory" => Ok(ProviderKind::MyMemory),
            other => Err(TranslationError::config(format!(
                "unknown provider: {}",
                other
            ))),
        }
    }
}

/// Shared translation capability
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Human-readable provider name, used in diagnostics
    fn name(&self) -> &'static str;

    /// Display names offered for selection, identical for all providers
    fn supported_languages(&self) -> Vec<&'static str> {
        supported_languages()
    }

    /// Translate `text`; never fails, see module docs
    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> String;
}

/// Outcome of the checks every online provider runs before touching the network
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Prepared<'a> {
    /// Answer without a request
    Done(String),
    Unsupported,
    Ready { from: &'a str, to: &'a str },
}

pub(crate) fn prepare<'a>(
    codes: &'a LanguageCodeMap,
    text: &str,
    source_language: &str,
    target_language: &str,
) -> Prepared<'a> {
    if text.trim().is_empty() {
        return Prepared::Done(String::new());
    }

    if same_language(source_language, target_language) {
        return Prepared::Done(text.to_string());
    }

    match codes.pair(source_language, target_language) {
        Some((from, to)) => Prepared::Ready { from, to },
        None => Prepared::Unsupported,
    }
}

pub(crate) fn unsupported_pair(provider: &str) -> String {
    format!(
        "(No {} language code is defined for the selected languages.)",
        provider
    )
}

/// Display text for a failed request
pub(crate) fn describe_failure(provider: &str, error: &TranslationError) -> String {
    match error {
        TranslationError::ApiError { status, message } => {
            let status = reqwest::StatusCode::from_u16(*status)
                .map(|s| s.to_string())
                .unwrap_or_else(|_| status.to_string());
            format!("({} error: {} - {})", provider, status, message)
        }
        TranslationError::InvalidResponseError { message } => format!(
            "({} response was not in the expected format: {})",
            provider, message
        ),
        other => format!(
            "(An error occurred during the {} request: {})",
            provider, other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse_and_display() {
        for kind in [
            ProviderKind::Offline,
            ProviderKind::DeepL,
            ProviderKind::Azure,
            ProviderKind::MyMemory,
        ] {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
        assert_eq!("  DeepL ".parse::<ProviderKind>().unwrap(), ProviderKind::DeepL);
        assert!("google".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_prepare_order_of_checks() {
        let codes = LanguageCodeMap::lower_iso();

        assert_eq!(prepare(&codes, "  ", "Klingon", "Türkçe"), Prepared::Done(String::new()));
        assert_eq!(
            prepare(&codes, "Hi", "İngilizce", "ingilizce"),
            Prepared::Done("Hi".to_string())
        );
        assert_eq!(prepare(&codes, "Hi", "Klingon", "Türkçe"), Prepared::Unsupported);
        assert_eq!(
            prepare(&codes, "Hi", "İngilizce", "Almanca"),
            Prepared::Ready { from: "en", to: "de" }
        );
    }

    #[test]
    fn test_describe_failure() {
        let api = TranslationError::ApiError {
            status: 403,
            message: "bad key".to_string(),
        };
        assert_eq!(
            describe_failure("DeepL", &api),
            "(DeepL error: 403 Forbidden - bad key)"
        );

        let network = TranslationError::NetworkError {
            message: "connection refused".to_string(),
        };
        let text = describe_failure("MyMemory", &network);
        assert!(text.starts_with("(An error occurred during the MyMemory request:"));
        assert!(text.contains("connection refused"));
    }
}
