// src/i18n/mod.rs
pub mod error;
pub mod table;

pub use error::TranslationError;
pub use table::{LocalizedText, TranslationTable};

use crate::core::error::{AppError, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LANGUAGE: Locale = Locale::Pt;

/// Display language of the page. Binary by design: toggling flips between
/// the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Pt,
        }
    }

    /// Tooltip of the language button, written in the language it switches to.
    pub fn switch_hint(self) -> &'static str {
        match self {
            Self::Pt => "Switch to English",
            Self::En => "Mudar para Português",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = TranslationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| TranslationError::InvalidLanguage(code.to_string()))
    }
}

/// Table plus active locale, handed by reference to everything that renders
/// text. There is no process-wide "current language".
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    locale: Locale,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable, locale: Locale) -> Self {
        Self { table, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.table.resolve(key, self.locale)
    }
}

/// Free-function form of the lookup: stored text, or the key when absent.
pub fn translate<'a>(table: &'a TranslationTable, key: &'a str, locale: Locale) -> &'a str {
    table.resolve(key, locale)
}

lazy_static! {
    static ref TABLE: std::result::Result<TranslationTable, String> =
        TranslationTable::embedded().map_err(|e| e.to_string());
}

/// The embedded table, loaded on first use. A load failure is returned on
/// every call so startup can report it; lookups themselves never fail.
pub fn init() -> Result<&'static TranslationTable> {
    TABLE
        .as_ref()
        .map_err(|e| AppError::Translation(TranslationError::LoadError(e.clone())))
}

pub fn parse_language(code: &str) -> Result<Locale> {
    code.parse().map_err(AppError::Translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for locale in Locale::ALL {
            assert_ne!(locale.toggled(), locale);
            assert_eq!(locale.toggled().toggled(), locale);
        }
        assert_eq!(Locale::Pt.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Pt);
    }

    #[test]
    fn test_default_is_portuguese() {
        assert_eq!(Locale::default(), Locale::Pt);
        assert_eq!(DEFAULT_LANGUAGE, Locale::Pt);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PT".parse::<Locale>().ok(), Some(Locale::Pt));
        assert_eq!(" en ".parse::<Locale>().ok(), Some(Locale::En));
        assert!(matches!(
            "de".parse::<Locale>(),
            Err(TranslationError::InvalidLanguage(code)) if code == "de"
        ));
    }

    #[test]
    fn test_translator_follows_locale() {
        let table =
            TranslationTable::from_entries([("about", LocalizedText::new("Sobre Mim", "About Me"))]);
        let pt = Translator::new(&table, Locale::Pt);
        let en = Translator::new(&table, pt.locale().toggled());
        assert_eq!(pt.t("about"), "Sobre Mim");
        assert_eq!(en.t("about"), "About Me");
        assert_eq!(en.t("nope"), "nope");
        assert_eq!(translate(&table, "about", Locale::En), "About Me");
    }

    #[test]
    fn test_init_shares_one_table() {
        let first = init().expect("embedded table loads");
        let second = init().expect("embedded table loads");
        assert!(std::ptr::eq(first, second));
        assert!(first.contains("heroTitle"));
    }

    #[test]
    fn test_translator_accepts_short_lived_keys() {
        let table =
            TranslationTable::from_entries([("home", LocalizedText::new("Home", "Home"))]);
        let tr = Translator::new(&table, Locale::En);
        let owned = String::from("home");
        assert_eq!(tr.t(&owned), "Home");
        let missing = format!("{}Key", "missing");
        assert_eq!(tr.t(&missing), "missingKey");
    }

    #[test]
    fn test_switch_hint() {
        assert_eq!(Locale::Pt.switch_hint(), "Switch to English");
        assert_eq!(Locale::En.switch_hint(), "Mudar para Português");
    }
}
