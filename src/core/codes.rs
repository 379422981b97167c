//! Per-provider language code tables

use std::collections::HashMap;

use crate::core::language::Language;

/// Maps supported languages to the codes a single provider expects
#[derive(Debug, Clone, Default)]
pub struct LanguageCodeMap {
    codes: HashMap<Language, String>,
}

impl LanguageCodeMap {
    /// Build a table from explicit pairs; languages left out are unsupported
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        Self {
            codes: pairs.into_iter().map(|(l, c)| (l, c.into())).collect(),
        }
    }

    /// Upper-case two-letter codes (`TR`, `EN`, ...)
    pub fn upper_iso() -> Self {
        Self::new(
            Language::ALL
                .iter()
                .map(|l| (*l, l.iso_code().to_uppercase())),
        )
    }

    /// Lower-case two-letter codes (`tr`, `en`, ...)
    pub fn lower_iso() -> Self {
        Self::new(Language::ALL.iter().map(|l| (*l, l.iso_code())))
    }

    /// Code for a language name, matched case-insensitively
    pub fn code_for(&self, name: &str) -> Option<&str> {
        let language = Language::from_name(name)?;
        self.codes.get(&language).map(String::as_str)
    }

    /// Codes for both ends of a pair, or `None` if either is unmapped
    pub fn pair(&self, source: &str, target: &str) -> Option<(&str, &str)> {
        Some((self.code_for(source)?, self.code_for(target)?))
    }
}
