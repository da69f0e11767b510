// =====================================================
// FILE: tests/translation_tests.rs - LOOKUP AND TOGGLE
// =====================================================

use portfolio_term::i18n::{self, LocalizedText};
use portfolio_term::{Locale, TranslationTable, Translator};

fn home_table() -> TranslationTable {
    TranslationTable::from_entries([("home", LocalizedText::new("Home", "Home"))])
}

#[test]
fn test_home_scenario() {
    let table = home_table();
    assert_eq!(Translator::new(&table, Locale::Pt).t("home"), "Home");
    assert_eq!(Translator::new(&table, Locale::En).t("home"), "Home");
    for locale in Locale::ALL {
        assert_eq!(table.resolve("missingKey", locale), "missingKey");
    }
}

#[test]
fn test_stored_strings_are_returned_exactly() {
    let table = i18n::init().expect("embedded table loads");
    assert!(!table.is_empty());

    for key in table.keys() {
        let entry = table.get(key).expect("listed key exists");
        assert_eq!(table.resolve(key, Locale::Pt), entry.pt);
        assert_eq!(table.resolve(key, Locale::En), entry.en);
    }
}

#[test]
fn test_absent_keys_fall_back() {
    let table = i18n::init().expect("embedded table loads");
    for key in ["", "heroTitle2", "Contact", "portfolio.title", "ação"] {
        assert!(!table.contains(key));
        for locale in Locale::ALL {
            assert_eq!(table.resolve(key, locale), key);
        }
    }
}

#[test]
fn test_page_keys_are_present() {
    let table = i18n::init().expect("embedded table loads");
    let keys = [
        "home", "about", "stacks", "portfolio", "contact", "heroTitle", "heroSubtitle",
        "heroDescription", "heroButton", "aboutTitle", "aboutParagraph1", "aboutParagraph2",
        "downloadCV", "getInTouch", "stacksTitle", "portfolioTitle", "project1Title",
        "project1Description", "project2Title", "project2Description", "project3Title",
        "project3Description", "codeButton", "demoButton", "contactTitle", "contactDescription",
        "email", "linkedin", "github", "sendMessage", "footerText",
    ];
    for key in keys {
        assert!(table.contains(key), "missing key {}", key);
    }
    assert_eq!(table.resolve("contactTitle", Locale::En), "Let's Talk?");
    assert_eq!(table.resolve("contactTitle", Locale::Pt), "Vamos Conversar?");
}

#[test]
fn test_toggle_twice_restores_locale() {
    for locale in Locale::ALL {
        assert_eq!(locale.toggled().toggled(), locale);
    }
    assert_eq!(Locale::default(), Locale::Pt);
}

#[test]
fn test_partial_entries_are_rejected() {
    assert!(TranslationTable::from_json(r#"{"home": {"pt": "Início"}}"#).is_err());
    assert!(TranslationTable::from_json(r#"{"home": {"pt": "", "en": "Home"}}"#).is_err());
    assert!(TranslationTable::from_json(r#"{"home": {"pt": "Início", "en": "Home"}}"#).is_ok());
}
