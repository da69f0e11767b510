// src/core/config.rs
use crate::core::constants::{DEFAULT_POLL_RATE, MAX_POLL_RATE, MIN_POLL_RATE};
use crate::core::prelude::*;
use crate::setup::setup_toml::{get_config_paths, write_default_config};
use crate::ui::color::{AppColor, ThemeMode};
use log::Level;
use serde::{Deserialize, Serialize};

// TOML Configuration Structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    language: LanguageConfig,
    #[serde(default)]
    assets: AssetsConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_poll_rate")]
    poll_rate: u64,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeConfig {
    #[serde(default = "default_theme_mode")]
    mode: String,
    #[serde(default)]
    accent: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguageConfig {
    #[serde(default = "default_language")]
    default: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct AssetsConfig {
    #[serde(default = "default_assets_dir")]
    dir: String,
    #[serde(default = "default_download_dir")]
    download_dir: String,
}

// Default Functions
fn default_poll_rate() -> u64 {
    DEFAULT_POLL_RATE
}
fn default_log_level() -> String {
    "info".into()
}
fn default_theme_mode() -> String {
    "auto".into()
}
fn default_language() -> String {
    crate::i18n::DEFAULT_LANGUAGE.code().into()
}
fn default_assets_dir() -> String {
    "assets".into()
}
fn default_download_dir() -> String {
    ".".into()
}

crate::impl_default!(GeneralConfig, GeneralConfig {
    poll_rate: default_poll_rate(),
    log_level: default_log_level(),
});
crate::impl_default!(ThemeConfig, ThemeConfig {
    mode: default_theme_mode(),
    accent: None,
});
crate::impl_default!(LanguageConfig, LanguageConfig {
    default: default_language(),
});
crate::impl_default!(AssetsConfig, AssetsConfig {
    dir: default_assets_dir(),
    download_dir: default_download_dir(),
});

/// Startup settings. Read once; nothing the user toggles is written back.
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub poll_rate: Duration,
    pub log_level: String,
    pub theme_mode: ThemeMode,
    pub accent: Option<AppColor>,
    pub language: Locale,
    pub assets_dir: PathBuf,
    pub download_dir: PathBuf,
    // Collected while loading, before any logger exists
    startup_messages: Vec<(Level, String)>,
}

impl Config {
    pub async fn load() -> Result<Self> {
        let exe_path = std::env::current_exe().map_err(AppError::Io)?;
        let base_dir = exe_path.parent().ok_or_else(|| {
            AppError::Validation("Executable has no parent directory".to_string())
        })?;
        Self::load_from(&get_config_paths(), base_dir).await
    }

    /// Uses the first existing candidate. A candidate that does not parse is
    /// an error; only when none exists is a default written below `base_dir`.
    pub async fn load_from(candidates: &[PathBuf], base_dir: &Path) -> Result<Self> {
        if let Some(path) = candidates.iter().find(|path| path.exists()) {
            return Self::from_file(path)
                .await
                .map_err(|e| Self::in_file(path, e));
        }

        let path = write_default_config(base_dir).await?;
        let mut config = Self::from_file(&path)
            .await
            .map_err(|e| Self::in_file(&path, e))?;
        config
            .startup_messages
            .push((Level::Info, format!("Created config file {}", path.display())));
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        Self::from_toml_str(&content, Some(path.as_ref().to_path_buf()))
    }

    /// Relative asset directories resolve against the config file's folder.
    pub fn from_toml_str(content: &str, config_path: Option<PathBuf>) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let poll_rate = Self::clamp(
            file.general.poll_rate,
            MIN_POLL_RATE,
            MAX_POLL_RATE,
            DEFAULT_POLL_RATE,
        );
        let mut warnings = Vec::new();
        if poll_rate != file.general.poll_rate {
            warnings.push(format!(
                "poll_rate {} out of range {}-{}, using {}",
                file.general.poll_rate, MIN_POLL_RATE, MAX_POLL_RATE, poll_rate
            ));
        }

        let language: Locale = file.language.default.parse().unwrap_or_else(|e| {
            warnings.push(format!(
                "{}, falling back to {}",
                e,
                crate::i18n::DEFAULT_LANGUAGE
            ));
            crate::i18n::DEFAULT_LANGUAGE
        });

        let theme_mode = ThemeMode::from_name(&file.theme.mode).unwrap_or_else(|| {
            warnings.push(format!("Unknown theme mode '{}', using auto", file.theme.mode));
            ThemeMode::Auto
        });

        let accent = match file.theme.accent.as_deref() {
            Some(name) => Some(AppColor::from_string(name)?),
            None => None,
        };

        let base_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        Ok(Self {
            poll_rate: Duration::from_millis(poll_rate),
            log_level: file.general.log_level,
            theme_mode,
            accent,
            language,
            assets_dir: Self::resolve_dir(base_dir.as_deref(), &file.assets.dir),
            download_dir: Self::resolve_dir(base_dir.as_deref(), &file.assets.download_dir),
            startup_messages: warnings
                .into_iter()
                .map(|message| (Level::Warn, message))
                .collect(),
            config_path,
        })
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn initial_dark_mode(&self) -> bool {
        self.theme_mode.resolve_from_env()
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    // Helper methods
    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn resolve_dir(base: Option<&Path>, dir: &str) -> PathBuf {
        let dir = PathBuf::from(dir);
        match base {
            Some(base) if dir.is_relative() => base.join(dir),
            _ => dir,
        }
    }

    fn in_file(path: &Path, err: AppError) -> AppError {
        match err {
            AppError::Validation(msg) => {
                AppError::Validation(format!("{}: {}", path.display(), msg))
            }
            other => other,
        }
    }

    pub fn startup_messages(&self) -> &[(Level, String)] {
        &self.startup_messages
    }

    /// Logs what loading found. Call once a logger is installed.
    pub fn report_startup_messages(&self) {
        for (level, message) in &self.startup_messages {
            log::log!(*level, "{}", message);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            poll_rate: Duration::from_millis(DEFAULT_POLL_RATE),
            log_level: default_log_level(),
            theme_mode: ThemeMode::Auto,
            accent: None,
            language: crate::i18n::DEFAULT_LANGUAGE,
            assets_dir: PathBuf::from(default_assets_dir()),
            download_dir: PathBuf::from(default_download_dir()),
            startup_messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("", None).expect("empty config parses");
        assert_eq!(config.poll_rate, Duration::from_millis(DEFAULT_POLL_RATE));
        assert_eq!(config.language, Locale::Pt);
        assert_eq!(config.theme_mode, ThemeMode::Auto);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.accent.is_none());
    }

    #[test]
    fn test_poll_rate_is_clamped() {
        let low = Config::from_toml_str("[general]\npoll_rate = 1", None).expect("parses");
        assert_eq!(low.poll_rate, Duration::from_millis(DEFAULT_POLL_RATE));

        let ok = Config::from_toml_str("[general]\npoll_rate = 33", None).expect("parses");
        assert_eq!(ok.poll_rate, Duration::from_millis(33));

        let high = Config::from_toml_str("[general]\npoll_rate = 5000", None).expect("parses");
        assert_eq!(high.poll_rate, Duration::from_millis(DEFAULT_POLL_RATE));
    }

    #[test]
    fn test_language_and_theme() {
        let content = "[language]\ndefault = \"EN\"\n\n[theme]\nmode = \"dark\"\naccent = \"Yellow\"";
        let config = Config::from_toml_str(content, None).expect("parses");
        assert_eq!(config.language, Locale::En);
        assert_eq!(config.theme_mode, ThemeMode::Dark);
        assert!(config.initial_dark_mode());
        assert_eq!(config.accent.map(Color::from), Some(Color::Yellow));
    }

    #[test]
    fn test_invalid_language_falls_back() {
        let config = Config::from_toml_str("[language]\ndefault = \"fr\"", None).expect("parses");
        assert_eq!(config.language, Locale::Pt);

        let messages = config.startup_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, Level::Warn);
        assert!(messages[0].1.contains("fr"));
        assert!(messages[0].1.contains("pt"));
    }

    #[test]
    fn test_adjustments_are_kept_for_later_logging() {
        let content = "[general]\npoll_rate = 5\n\n[theme]\nmode = \"sepia\"";
        let config = Config::from_toml_str(content, None).expect("parses");
        assert_eq!(config.theme_mode, ThemeMode::Auto);

        let texts: Vec<&str> = config
            .startup_messages()
            .iter()
            .map(|(_, text)| text.as_str())
            .collect();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("poll_rate 5"));
        assert!(texts[1].contains("sepia"));

        let clean = Config::from_toml_str("", None).expect("parses");
        assert!(clean.startup_messages().is_empty());
    }

    #[test]
    fn test_invalid_accent_is_an_error() {
        let result = Config::from_toml_str("[theme]\naccent = \"chartreuse\"", None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_relative_dirs_follow_config_file() {
        let path = PathBuf::from("/opt/portfolio/portfolio.toml");
        let content = "[assets]\ndir = \"pdf\"\ndownload_dir = \"/tmp/out\"";
        let config = Config::from_toml_str(content, Some(path)).expect("parses");
        assert_eq!(config.assets_dir, PathBuf::from("/opt/portfolio/pdf"));
        assert_eq!(config.download_dir, PathBuf::from("/tmp/out"));
    }
}
