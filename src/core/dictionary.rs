//! Offline phrase dictionary

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::errors::Result;
use crate::core::language::{normalize, Language};

/// Relative location of the dictionary file next to the executable
pub const DEFAULT_DICTIONARY_FILE: &str = "Data/OfflineDictionary.json";

const KEY_SEPARATOR: char = '|';

/// Built-in phrase pairs, each inserted in both directions
const EMBEDDED_PAIRS: &[(Language, Language, &str, &str)] = &[
    (Language::Turkish, Language::English, "merhaba", "hello"),
    (Language::Turkish, Language::English, "günaydın", "good morning"),
    (Language::Turkish, Language::English, "teşekkür ederim", "thank you"),
    (Language::Turkish, Language::English, "nasılsın", "how are you"),
    (Language::Turkish, Language::German, "teşekkür ederim", "danke"),
    (Language::Turkish, Language::German, "günaydın", "guten morgen"),
    (Language::Turkish, Language::German, "iyi akşamlar", "guten abend"),
    (Language::Turkish, Language::French, "merhaba", "bonjour"),
    (Language::Turkish, Language::French, "teşekkür ederim", "merci"),
    (Language::Turkish, Language::French, "günaydın", "bonjour"),
    (Language::English, Language::German, "hello", "hallo"),
    (Language::English, Language::German, "good morning", "guten morgen"),
    (Language::English, Language::French, "hello", "bonjour"),
    (Language::English, Language::French, "good night", "bonne nuit"),
];

/// A directed translation fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseEntry {
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub target_text: String,
}

impl PhraseEntry {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Where the loaded index came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryOrigin {
    File(PathBuf),
    Embedded,
}

/// Read-only phrase index, built once
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    index: HashMap<String, String>,
    origin: DictionaryOrigin,
}

impl DictionaryStore {
    /// Load from a JSON file, falling back to the embedded dataset.
    ///
    /// Never fails: I/O and parse errors are logged and treated as
    /// "no entries".
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match load_entries(path) {
                Ok(entries) if !entries.is_empty() => {
                    let mut store = Self::from_entries(entries);
                    store.origin = DictionaryOrigin::File(path.to_path_buf());
                    info!(
                        "Loaded {} dictionary entries from {}",
                        store.len(),
                        path.display()
                    );
                    return store;
                }
                Ok(_) => {
                    info!(
                        "No usable entries in {}, using embedded dictionary",
                        path.display()
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to load dictionary {}: {}, using embedded dictionary",
                        path.display(),
                        e
                    );
                }
            }
        }

        Self::embedded()
    }

    /// The built-in sample dictionary
    pub fn embedded() -> Self {
        let mut index = HashMap::new();
        for (from, to, a, b) in EMBEDDED_PAIRS {
            index.insert(
                build_key(from.display_name(), to.display_name(), a),
                b.to_string(),
            );
            index.insert(
                build_key(to.display_name(), from.display_name(), b),
                a.to_string(),
            );
        }

        Self {
            index,
            origin: DictionaryOrigin::Embedded,
        }
    }

    /// Index arbitrary entries; later duplicates overwrite earlier ones
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = PhraseEntry>,
    {
        let index = entries
            .into_iter()
            .map(|e| {
                (
                    build_key(&e.source_language, &e.target_language, &e.source_text),
                    e.target_text,
                )
            })
            .collect();

        Self {
            index,
            origin: DictionaryOrigin::Embedded,
        }
    }

    /// Look up a phrase, ignoring case and surrounding whitespace
    pub fn lookup(&self, source_language: &str, target_language: &str, text: &str) -> Option<&str> {
        self.index
            .get(&build_key(source_language, target_language, text))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn origin(&self) -> &DictionaryOrigin {
        &self.origin
    }
}

/// `Data/OfflineDictionary.json` next to the running executable, or under the
/// working directory when only that one exists (e.g. `cargo run` from the
/// repository root, where the binary lives in `target/debug`).
pub fn default_dictionary_path() -> Option<PathBuf> {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DICTIONARY_FILE)));
    let in_cwd = std::env::current_dir()
        .ok()
        .map(|dir| dir.join(DEFAULT_DICTIONARY_FILE));

    first_existing(beside_exe.into_iter().chain(in_cwd))
}

/// First candidate that exists on disk, else the first candidate
fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    let candidates: Vec<PathBuf> = candidates.into_iter().collect();
    candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
        .cloned()
}

/// Read dictionary records from a JSON array.
///
/// Field names match case-insensitively (`sourceLanguage`, `SourceLanguage`
/// and `source_language` are the same field). Records with a missing, blank
/// or non-string field are skipped.
pub fn load_entries(path: &Path) -> Result<Vec<PhraseEntry>> {
    if !path.exists() {
        debug!("Dictionary file {} does not exist", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut entries = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match parse_record(record) {
            Some(entry) => entries.push(entry),
            None => debug!("Skipping incomplete dictionary record #{}", i),
        }
    }

    Ok(entries)
}

fn parse_record(record: &serde_json::Value) -> Option<PhraseEntry> {
    let fields: HashMap<String, &str> = record
        .as_object()?
        .iter()
        .filter_map(|(k, v)| Some((k.to_lowercase().replace('_', ""), v.as_str()?)))
        .collect();

    let field = |name: &str| -> Option<String> {
        let value = fields.get(name)?;
        (!value.trim().is_empty()).then(|| value.to_string())
    };

    Some(PhraseEntry {
        source_language: field("sourcelanguage")?,
        target_language: field("targetlanguage")?,
        source_text: field("sourcetext")?,
        target_text: field("targettext")?,
    })
}

/// Languages fold to their canonical display name so aliases share keys
fn language_key(name: &str) -> String {
    match Language::from_name(name) {
        Some(lang) => normalize(lang.display_name()),
        None => normalize(name),
    }
}

fn build_key(source_language: &str, target_language: &str, text: &str) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        language_key(source_language),
        language_key(target_language),
        normalize(text),
        sep = KEY_SEPARATOR
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dictionary(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_path_prefers_existing_file() {
        let exe_dir = tempfile::tempdir().unwrap();
        let work_dir = tempfile::tempdir().unwrap();
        let beside_exe = exe_dir.path().join(DEFAULT_DICTIONARY_FILE);
        let in_cwd = work_dir.path().join(DEFAULT_DICTIONARY_FILE);

        // Neither exists: keep the executable-relative location
        assert_eq!(
            first_existing([beside_exe.clone(), in_cwd.clone()]),
            Some(beside_exe.clone())
        );

        std::fs::create_dir_all(in_cwd.parent().unwrap()).unwrap();
        std::fs::write(&in_cwd, "[]").unwrap();
        assert_eq!(
            first_existing([beside_exe.clone(), in_cwd.clone()]),
            Some(in_cwd.clone())
        );

        std::fs::create_dir_all(beside_exe.parent().unwrap()).unwrap();
        std::fs::write(&beside_exe, "[]").unwrap();
        assert_eq!(first_existing([beside_exe.clone(), in_cwd]), Some(beside_exe));
        assert_eq!(first_existing(Vec::new()), None);
    }

    #[test]
    fn test_bundled_sample_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DICTIONARY_FILE);
        let store = DictionaryStore::load(Some(&path));

        assert_eq!(store.origin(), &DictionaryOrigin::File(path));
        assert_eq!(store.lookup("Türkçe", "İngilizce", "merhaba"), Some("hello"));
    }

    #[test]
    fn test_embedded_pairs_are_bidirectional() {
        let store = DictionaryStore::embedded();

        assert_eq!(store.lookup("Türkçe", "İngilizce", "merhaba"), Some("hello"));
        assert_eq!(store.lookup("İngilizce", "Türkçe", "hello"), Some("merhaba"));
        assert_eq!(store.lookup("Almanca", "Türkçe", "guten abend"), Some("iyi akşamlar"));
        assert_eq!(store.lookup("Fransızca", "İngilizce", "bonne nuit"), Some("good night"));
        assert_eq!(store.origin(), &DictionaryOrigin::Embedded);
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let store = DictionaryStore::embedded();

        let loose = store.lookup("Türkçe", "İngilizce", " Merhaba ");
        let strict = store.lookup("türkçe", "ingilizce", "merhaba");

        assert_eq!(loose, strict);
        assert_eq!(loose, Some("hello"));
        assert_eq!(store.lookup("Turkish", "English", "MERHABA"), Some("hello"));
    }

    #[test]
    fn test_file_takes_precedence_over_embedded() {
        let file = write_dictionary(
            r#"[{"sourceLanguage":"Turkish","targetLanguage":"English","sourceText":"elma","targetText":"apple"}]"#,
        );

        let store = DictionaryStore::load(Some(file.path()));

        assert_eq!(store.lookup("Turkish", "English", "elma"), Some("apple"));
        assert_eq!(store.lookup("Türkçe", "İngilizce", "Elma"), Some("apple"));
        assert_eq!(store.lookup("Türkçe", "İngilizce", "merhaba"), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.origin(), &DictionaryOrigin::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::load(Some(&dir.path().join("nope.json")));

        assert_eq!(store.lookup("Türkçe", "İngilizce", "merhaba"), Some("hello"));
        assert_eq!(store.origin(), &DictionaryOrigin::Embedded);
    }

    #[test]
    fn test_empty_or_malformed_file_falls_back() {
        for content in ["", "[]", "{not json", r#"{"sourceText":"a"}"#] {
            let file = write_dictionary(content);
            let store = DictionaryStore::load(Some(file.path()));
            assert_eq!(
                store.lookup("Türkçe", "İngilizce", "merhaba"),
                Some("hello"),
                "content: {content:?}"
            );
        }
    }

    #[test]
    fn test_incomplete_records_are_skipped() {
        let file = write_dictionary(
            r#"[
                {"SourceLanguage":"Türkçe","TargetLanguage":"Almanca","SourceText":"kedi","TargetText":"Katze"},
                {"sourceLanguage":"Türkçe","targetLanguage":"Almanca","sourceText":"köpek"},
                {"sourceLanguage":"Türkçe","targetLanguage":"Almanca","sourceText":"  ","targetText":"leer"},
                {"sourceLanguage":"Türkçe","targetLanguage":"Almanca","sourceText":"ev","targetText":42},
                "not an object"
            ]"#,
        );

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries, vec![PhraseEntry::new("Türkçe", "Almanca", "kedi", "Katze")]);
    }

    #[test]
    fn test_snake_case_field_names() {
        let file = write_dictionary(
            r#"[{"source_language":"en","target_language":"fr","source_text":"cat","target_text":"chat"}]"#,
        );

        let store = DictionaryStore::load(Some(file.path()));
        assert_eq!(store.lookup("İngilizce", "Fransızca", "cat"), Some("chat"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let store = DictionaryStore::from_entries(vec![
            PhraseEntry::new("Türkçe", "İngilizce", "su", "water"),
            PhraseEntry::new("türkçe", "ingilizce", " SU ", "aqua"),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("Türkçe", "İngilizce", "su"), Some("aqua"));
    }

    #[test]
    fn test_no_path_uses_embedded() {
        let store = DictionaryStore::load(None);
        assert!(!store.is_empty());
        assert_eq!(store.lookup("Almanca", "İngilizce", "hallo"), Some("hello"));
    }
}
