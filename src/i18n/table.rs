// src/i18n/table.rs
use super::error::TranslationError;
use super::Locale;
use crate::core::error::{AppError, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TRANSLATIONS_FILE: &str = "translations.json";

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
struct Langs;

/// One piece of UI text in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedText {
    pub pt: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(pt: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            pt: pt.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Pt => &self.pt,
            Locale::En => &self.en,
        }
    }
}

/// Immutable key -> localized text mapping. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, LocalizedText>,
}

impl TranslationTable {
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, LocalizedText)>,
        K: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, text)| (key.into(), text))
                .collect(),
        }
    }

    /// Parses `{ "key": { "pt": "...", "en": "..." } }`.
    ///
    /// Entries missing a locale or carrying an empty string are rejected
    /// here, so lookups never see a partial entry.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, LocalizedText> = serde_json::from_str(content)
            .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))?;

        if let Some((key, _)) = entries
            .iter()
            .find(|(_, text)| Locale::ALL.iter().any(|l| text.get(*l).trim().is_empty()))
        {
            return Err(AppError::Translation(TranslationError::LoadError(format!(
                "Empty translation for key '{}'",
                key
            ))));
        }

        Ok(Self { entries })
    }

    pub fn embedded() -> Result<Self> {
        let file = Langs::get(TRANSLATIONS_FILE).ok_or_else(|| {
            AppError::Translation(TranslationError::LoadError(format!(
                "File not found: {}",
                TRANSLATIONS_FILE
            )))
        })?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))?;

        Self::from_json(content)
    }

    /// Text for `(key, locale)`, or `key` itself when the table has no entry.
    pub fn resolve<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.entries
            .get(key)
            .map(|text| text.get(locale))
            .unwrap_or(key)
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedText> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_only() -> TranslationTable {
        TranslationTable::from_entries([("home", LocalizedText::new("Home", "Home"))])
    }

    #[test]
    fn test_resolve_known_key() {
        let table = home_only();
        assert_eq!(table.resolve("home", Locale::Pt), "Home");
        assert_eq!(table.resolve("home", Locale::En), "Home");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let table = home_only();
        assert_eq!(table.resolve("missingKey", Locale::Pt), "missingKey");
        assert_eq!(table.resolve("missingKey", Locale::En), "missingKey");
    }

    #[test]
    fn test_partial_entry_is_rejected() {
        let result = TranslationTable::from_json(r#"{ "home": { "pt": "Início" } }"#);
        assert!(matches!(
            result,
            Err(AppError::Translation(TranslationError::LoadError(_)))
        ));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let result = TranslationTable::from_json(r#"{ "home": { "pt": "", "en": "Home" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_locale_field_is_rejected() {
        let result =
            TranslationTable::from_json(r#"{ "home": { "pt": "a", "en": "b", "de": "c" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_embedded_table_is_complete() {
        let table = TranslationTable::embedded().expect("embedded table loads");
        assert!(!table.is_empty());
        for key in table.keys() {
            let text = table.get(key).expect("listed key exists");
            assert!(!text.pt.is_empty(), "pt missing for {}", key);
            assert!(!text.en.is_empty(), "en missing for {}", key);
        }
        assert_eq!(table.resolve("contactTitle", Locale::En), "Let's Talk?");
        assert_eq!(table.resolve("contactTitle", Locale::Pt), "Vamos Conversar?");
    }
}
