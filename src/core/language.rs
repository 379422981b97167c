//! Supported languages and name normalization

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four languages offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Turkish,
    English,
    German,
    French,
}

impl Language {
    /// All languages, in the order selection controls list them
    pub const ALL: [Language; 4] = [
        Language::Turkish,
        Language::English,
        Language::German,
        Language::French,
    ];

    /// Canonical display name
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Turkish => "Türkçe",
            Language::English => "İngilizce",
            Language::German => "Almanca",
            Language::French => "Fransızca",
        }
    }

    /// English name, accepted as an alias when parsing
    pub fn english_name(self) -> &'static str {
        match self {
            Language::Turkish => "Turkish",
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
        }
    }

    /// ISO 639-1 code, accepted as an alias when parsing
    pub fn iso_code(self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
        }
    }

    /// Resolve a user-supplied name (display name, English name or ISO code)
    pub fn from_name(name: &str) -> Option<Self> {
        let folded = normalize(name);
        if folded.is_empty() {
            return None;
        }

        Self::ALL.into_iter().find(|lang| {
            normalize(lang.display_name()) == folded
                || normalize(lang.english_name()) == folded
                || lang.iso_code() == folded
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display names of every supported language, identical for all providers
pub fn supported_languages() -> Vec<&'static str> {
    Language::ALL.iter().map(|l| l.display_name()).collect()
}

/// Trim and lowercase without locale rules.
///
/// `İ` folds to a plain `i`; the full Unicode mapping would append U+0307
/// and `İngilizce` would no longer match `ingilizce`.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '\u{0130}' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Case-insensitive language equality, with aliases resolved
pub fn same_language(a: &str, b: &str) -> bool {
    match (Language::from_name(a), Language::from_name(b)) {
        (Some(x), Some(y)) => x == y,
        _ => normalize(a) == normalize(b),
    }
}
