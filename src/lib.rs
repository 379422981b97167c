//! Multi-language translator
//!
//! Translates short texts between Turkish, English, German and French using
//! an offline phrase dictionary or one of several online providers, all
//! behind the [`TranslationProvider`] trait.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod providers;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    codes::LanguageCodeMap,
    config::{ProviderChoice, TranslatorConfig},
    dictionary::{DictionaryStore, PhraseEntry},
    errors::TranslationError,
    handler::TranslationRequestHandler,
    language::Language,
    models::{TranslationPanel, TranslationRequest, TranslationResult},
    selector::{build_provider, select_kind},
    transport::{HttpTransport, ReqwestTransport},
};

pub use crate::providers::{
    AzureProvider, DeepLProvider, MyMemoryProvider, OfflineProvider, ProviderKind,
    TranslationProvider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
