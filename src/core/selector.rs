//! Startup provider selection

use std::sync::Arc;
use tracing::info;

use crate::core::config::{ProviderChoice, TranslatorConfig};
use crate::core::errors::Result;
use crate::core::transport::HttpTransport;
use crate::providers::{
    AzureProvider, DeepLProvider, MyMemoryProvider, OfflineProvider, ProviderKind,
    TranslationProvider,
};

/// Pick a provider kind.
///
/// An explicit choice wins. Otherwise Azure when its endpoint, region and
/// key are all set, else MyMemory. DeepL and the offline dictionary are only
/// used when chosen explicitly.
pub fn select_kind(config: &TranslatorConfig) -> ProviderKind {
    match config.provider {
        ProviderChoice::Fixed(kind) => kind,
        ProviderChoice::Auto if config.has_azure_credentials() => ProviderKind::Azure,
        ProviderChoice::Auto => ProviderKind::MyMemory,
    }
}

/// Build the provider chosen by [`select_kind`].
///
/// Fails only when the chosen provider's credentials are unusable.
pub fn build_provider(
    config: &TranslatorConfig,
    transport: Arc<dyn HttpTransport>,
) -> Result<Arc<dyn TranslationProvider>> {
    let kind = select_kind(config);
    info!("Selected translation provider: {}", kind);

    let provider: Arc<dyn TranslationProvider> = match kind {
        ProviderKind::Azure => Arc::new(AzureProvider::new(
            &config.azure_endpoint,
            &config.azure_region,
            &config.azure_key,
            transport,
        )?),
        ProviderKind::DeepL => Arc::new(
            DeepLProvider::new(&config.deepl_api_key, transport)?
                .with_api_url(&config.deepl_api_url),
        ),
        ProviderKind::MyMemory => {
            Arc::new(MyMemoryProvider::new(transport).with_api_url(&config.mymemory_api_url))
        }
        ProviderKind::Offline => Arc::new(OfflineProvider::load(
            config.resolved_dictionary_path().as_deref(),
        )),
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::TranslationError;
    use crate::core::transport::testing::StubTransport;

    fn azure_config() -> TranslatorConfig {
        TranslatorConfig {
            azure_key: "key".to_string(),
            azure_endpoint: "https://api.cognitive.microsofttranslator.com".to_string(),
            azure_region: "westeurope".to_string(),
            ..Default::default()
        }
    }

    fn stub() -> Arc<dyn HttpTransport> {
        Arc::new(StubTransport::replying(200, "{}"))
    }

    #[test]
    fn test_full_azure_credentials_select_azure() {
        let config = azure_config();
        assert_eq!(select_kind(&config), ProviderKind::Azure);
        assert_eq!(build_provider(&config, stub()).unwrap().kind(), ProviderKind::Azure);
    }

    #[test]
    fn test_any_blank_azure_setting_selects_mymemory() {
        let blanks: [fn(&mut TranslatorConfig); 3] = [
            |c| c.azure_key.clear(),
            |c| c.azure_endpoint = "  ".to_string(),
            |c| c.azure_region.clear(),
        ];

        for blank in blanks {
            let mut config = azure_config();
            blank(&mut config);
            assert_eq!(select_kind(&config), ProviderKind::MyMemory);
            assert_eq!(
                build_provider(&config, stub()).unwrap().kind(),
                ProviderKind::MyMemory
            );
        }
    }

    #[test]
    fn test_deepl_key_alone_is_not_auto_selected() {
        let config = TranslatorConfig {
            deepl_api_key: "dk".to_string(),
            ..Default::default()
        };
        assert_eq!(select_kind(&config), ProviderKind::MyMemory);
    }

    #[test]
    fn test_explicit_choice_wins() {
        let config = TranslatorConfig {
            provider: ProviderChoice::Fixed(ProviderKind::Offline),
            ..azure_config()
        };
        assert_eq!(build_provider(&config, stub()).unwrap().kind(), ProviderKind::Offline);

        let config = TranslatorConfig {
            provider: ProviderChoice::Fixed(ProviderKind::DeepL),
            deepl_api_key: "dk".to_string(),
            ..Default::default()
        };
        assert_eq!(build_provider(&config, stub()).unwrap().kind(), ProviderKind::DeepL);
    }

    #[test]
    fn test_explicit_choice_without_credentials_fails() {
        let config = TranslatorConfig {
            provider: ProviderChoice::Fixed(ProviderKind::DeepL),
            ..Default::default()
        };
        assert!(matches!(
            build_provider(&config, stub()),
            Err(TranslationError::ConfigError { .. })
        ));
    }
}
