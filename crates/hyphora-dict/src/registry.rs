// Locale registry: maps locale identifiers to shared dictionaries.
//
// The registry is built once at startup from a JSON index that lists, per
// dictionary, the file it lives in and the locales it serves. All locales
// of one entry share a single Arc'd dictionary. Lookups normalize '_' to
// '-' so "de_DE" and "de-DE" resolve identically.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::model::HyphenDict;
use crate::DictError;

/// Name of the registry index file inside a dictionary directory.
pub const INDEX_FILE: &str = "dictionaries.json";

/// One entry of the registry index.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    /// Candidate dictionary files; only the first is loaded.
    #[serde(default)]
    pub locations: Vec<String>,

    /// Locales served by this dictionary.
    #[serde(default)]
    pub locales: Vec<String>,
}

/// Read-only locale-to-dictionary mapping.
#[derive(Debug, Default)]
pub struct Registry {
    dicts: HashMap<String, Arc<HyphenDict>>,
}

impl Registry {
    /// Load the registry from a dictionary directory containing
    /// [`INDEX_FILE`] and the dictionary sources it references.
    pub fn load(dir: &Path) -> Result<Self, DictError> {
        let index = fs::read_to_string(dir.join(INDEX_FILE))?;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(&index)?;
        Ok(Self::from_entries(dir, &entries))
    }

    /// Build a registry from already-parsed index entries. Entries with no
    /// location or no locales are skipped; a dictionary that fails to load
    /// is logged and skipped rather than failing the whole registry.
    pub fn from_entries(dir: &Path, entries: &[DictionaryEntry]) -> Self {
        let mut dicts = HashMap::new();
        let mut dict_count = 0usize;
        let mut locale_count = 0usize;

        for entry in entries {
            let Some(location) = entry.locations.first() else {
                continue;
            };
            if entry.locales.is_empty() {
                continue;
            }
            let path = dir.join(location);
            tracing::info!(path = %path.display(), locales = ?entry.locales, "loading dictionary");
            match load_file(&path) {
                Ok(dict) => {
                    let dict = Arc::new(dict);
                    dict_count += 1;
                    for locale in &entry.locales {
                        dicts.insert(normalize_locale(locale), Arc::clone(&dict));
                        locale_count += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping dictionary that failed to load");
                }
            }
        }

        tracing::info!(
            dictionaries = dict_count,
            locales = locale_count,
            "dictionary registry loaded"
        );
        Self { dicts }
    }

    /// Look up the dictionary for a locale ("en-US" or "en_US").
    pub fn get(&self, locale: &str) -> Option<Arc<HyphenDict>> {
        self.dicts.get(&normalize_locale(locale)).cloned()
    }

    /// All registered locale identifiers, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }
}

/// Load and parse a single dictionary source file.
pub fn load_file(path: &Path) -> Result<HyphenDict, DictError> {
    crate::parser::parse(&fs::read_to_string(path)?)
}

fn normalize_locale(locale: &str) -> String {
    locale.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_normalization() {
        assert_eq!(normalize_locale("en_US"), "en-US");
        assert_eq!(normalize_locale("en-US"), "en-US");
        assert_eq!(normalize_locale("fi"), "fi");
    }

    #[test]
    fn index_entry_deserializes() {
        let json = r#"[{"locations": ["hyph-en.dic"], "locales": ["en", "en_US"]}]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].locations, vec!["hyph-en.dic"]);
        assert_eq!(entries[0].locales, vec!["en", "en_US"]);
    }

    #[test]
    fn index_entry_missing_fields_default_empty() {
        let json = r#"[{}]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert!(entries[0].locations.is_empty());
        assert!(entries[0].locales.is_empty());
    }
}
