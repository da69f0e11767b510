// =====================================================
// FILE: tests/config_tests.rs - CONFIG FILE HANDLING
// =====================================================

use portfolio_term::core::constants::{CONFIG_DIR, CONFIG_FILE};
use portfolio_term::setup::setup_toml::write_default_config;
use portfolio_term::ui::color::ThemeMode;
use portfolio_term::{Config, Locale};
use std::time::Duration;

#[tokio::test]
async fn test_first_run_config_round() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_default_config(dir.path()).await.expect("written");
    assert_eq!(path, dir.path().join(CONFIG_DIR).join(CONFIG_FILE));

    let config = Config::from_file(&path).await.expect("parses");
    assert_eq!(config.language, Locale::Pt);
    assert_eq!(config.theme_mode, ThemeMode::Auto);
    assert_eq!(config.poll_rate, Duration::from_millis(16));
    assert_eq!(config.assets_dir, dir.path().join(CONFIG_DIR).join("assets"));
    assert_eq!(config.config_path(), Some(path.as_path()));
}

#[tokio::test]
async fn test_edited_config_is_respected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE);
    tokio::fs::write(
        &path,
        "[language]\ndefault = \"en\"\n\n[theme]\nmode = \"dark\"\n\n[general]\npoll_rate = 5000\n",
    )
    .await
    .expect("write");

    let config = Config::from_file(&path).await.expect("parses");
    assert_eq!(config.language, Locale::En);
    assert!(config.initial_dark_mode());
    assert_eq!(config.poll_rate, Duration::from_millis(16));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = Config::from_file(dir.path().join("nope.toml")).await;
    assert!(matches!(result, Err(portfolio_term::AppError::Io(_))));
}

#[tokio::test]
async fn test_broken_config_is_not_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE);
    tokio::fs::write(&path, "[theme]\naccent = \"chartreuse\"\n")
        .await
        .expect("write");

    let result = Config::load_from(&[path.clone()], dir.path()).await;
    match result {
        Err(portfolio_term::AppError::Validation(msg)) => {
            assert!(msg.contains(CONFIG_FILE));
            assert!(msg.contains("chartreuse"));
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
    assert!(!dir.path().join(CONFIG_DIR).exists());

    let unparsable = dir.path().join("broken.toml");
    tokio::fs::write(&unparsable, "[general\npoll_rate = ")
        .await
        .expect("write");
    assert!(Config::load_from(&[unparsable], dir.path()).await.is_err());
    assert!(!dir.path().join(CONFIG_DIR).exists());
}

#[tokio::test]
async fn test_first_existing_candidate_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.toml");
    let present = dir.path().join(CONFIG_FILE);
    tokio::fs::write(&present, "[language]\ndefault = \"fr\"\n")
        .await
        .expect("write");

    let config = Config::load_from(&[missing, present.clone()], dir.path())
        .await
        .expect("loads");
    assert_eq!(config.config_path(), Some(present.as_path()));
    assert_eq!(config.language, Locale::Pt);
    assert!(config
        .startup_messages()
        .iter()
        .any(|(level, text)| *level == log::Level::Warn && text.contains("fr")));
}

#[tokio::test]
async fn test_no_candidate_creates_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_from(&[dir.path().join("missing.toml")], dir.path())
        .await
        .expect("loads");

    let created = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);
    assert!(created.exists());
    assert_eq!(config.config_path(), Some(created.as_path()));
    assert!(config
        .startup_messages()
        .iter()
        .any(|(level, text)| *level == log::Level::Info && text.contains(CONFIG_FILE)));
}
