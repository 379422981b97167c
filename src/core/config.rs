//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::core::dictionary::default_dictionary_path;
use crate::providers::deepl::DEEPL_API_URL;
use crate::providers::mymemory::MYMEMORY_API_URL;
use crate::providers::ProviderKind;

/// Which provider to use: a fixed one, or the startup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ProviderChoice {
    #[default]
    Auto,
    Fixed(ProviderKind),
}

impl std::fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderChoice::Auto => write!(f, "auto"),
            ProviderChoice::Fixed(kind) => write!(f, "{}", kind),
        }
    }
}

impl TryFrom<String> for ProviderChoice {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProviderChoice> for String {
    fn from(choice: ProviderChoice) -> Self {
        choice.to_string()
    }
}

impl std::str::FromStr for ProviderChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(ProviderChoice::Auto);
        }
        Ok(ProviderChoice::Fixed(trimmed.parse()?))
    }
}

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub provider: ProviderChoice,
    pub deepl_api_key: String,
    pub deepl_api_url: String,
    pub azure_key: String,
    pub azure_endpoint: String,
    pub azure_region: String,
    pub mymemory_api_url: String,
    pub dictionary_path: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderChoice::Auto,
            deepl_api_key: String::new(),
            deepl_api_url: DEEPL_API_URL.to_string(),
            azure_key: String::new(),
            azure_endpoint: String::new(),
            azure_region: String::new(),
            mymemory_api_url: MYMEMORY_API_URL.to_string(),
            dictionary_path: None,
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let provider = match var("TRANSLATOR_PROVIDER") {
            Some(value) => value.parse()?,
            None => ProviderChoice::Auto,
        };

        let timeout_ms = match var("REQUEST_TIMEOUT_MS") {
            Some(value) => value.trim().parse::<u64>()?,
            None => defaults.timeout_ms,
        };

        Ok(Self {
            provider,
            deepl_api_key: var("DEEPL_API_KEY").unwrap_or_default(),
            deepl_api_url: var("DEEPL_API_URL").unwrap_or(defaults.deepl_api_url),
            azure_key: var("AZURE_TRANSLATOR_KEY").unwrap_or_default(),
            azure_endpoint: var("AZURE_TRANSLATOR_ENDPOINT").unwrap_or_default(),
            azure_region: var("AZURE_TRANSLATOR_REGION").unwrap_or_default(),
            mymemory_api_url: var("MYMEMORY_API_URL").unwrap_or(defaults.mymemory_api_url),
            dictionary_path: var("OFFLINE_DICTIONARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            timeout_ms,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        match self.provider {
            ProviderChoice::Fixed(ProviderKind::DeepL) if self.deepl_api_key.trim().is_empty() => {
                Err(anyhow::anyhow!("DeepL provider requires DEEPL_API_KEY"))
            }
            ProviderChoice::Fixed(ProviderKind::Azure) if !self.has_azure_credentials() => {
                Err(anyhow::anyhow!(
                    "Azure provider requires AZURE_TRANSLATOR_KEY, AZURE_TRANSLATOR_ENDPOINT and AZURE_TRANSLATOR_REGION"
                ))
            }
            _ => Ok(()),
        }
    }

    /// Endpoint, region and key are all non-blank
    pub fn has_azure_credentials(&self) -> bool {
        [&self.azure_endpoint, &self.azure_region, &self.azure_key]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Configured dictionary path, or the one next to the executable
    pub fn resolved_dictionary_path(&self) -> Option<PathBuf> {
        self.dictionary_path.clone().or_else(default_dictionary_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
