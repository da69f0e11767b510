// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG ON FIRST RUN
// =====================================================

use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
# Poll-Rate: 16ms = 60 FPS (recommended: 16-33ms, never below 16!)
poll_rate = 16
log_level = "info"

[theme]
# auto = follow the terminal background (COLORFGBG), or "dark" / "light"
mode = "auto"
# accent = "LightCyan"

[language]
# Language shown at startup: "pt" or "en". Toggling with [l] is not saved.
default = "pt"

[assets]
# Folder holding the CV documents, relative to this file
dir = "assets"
# Where [d] saves the CV of the current language
download_dir = "."
"#;

/// Writes the default config below `base_dir` unless one is already there.
pub async fn write_default_config(base_dir: &Path) -> Result<PathBuf> {
    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config directory {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config file {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
            paths.push(base_dir.join("config").join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}
