// =====================================================
// FILE: src/portfolio/links.rs - OUTBOUND TARGETS
// =====================================================

use super::profile::{is_placeholder, Profile};
use crate::core::prelude::*;
use std::process::{Command, Stdio};

/// Hands `target` to the platform opener. Placeholder targets do nothing
/// and report `false`.
pub fn open_target(target: &str) -> Result<bool> {
    if is_placeholder(target) {
        log::debug!("No target to open");
        return Ok(false);
    }

    let mut cmd = opener_command(target).ok_or_else(|| {
        AppError::Validation("No way to open links on this platform".to_string())
    })?;

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(AppError::Io)?;

    log::info!("Opened {}", target);
    Ok(true)
}

fn opener_command(target: &str) -> Option<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        Some(cmd)
    }

    #[cfg(target_os = "linux")]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        Some(cmd)
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", target]);
        Some(cmd)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = target;
        None
    }
}

/// Copies the CV of `locale` from `assets_dir` into `download_dir` under its
/// download name and returns where it landed.
pub async fn download_cv(
    profile: &Profile,
    locale: Locale,
    assets_dir: &Path,
    download_dir: &Path,
) -> Result<PathBuf> {
    let cv = profile.cv_for(locale);
    let source = assets_dir.join(&cv.asset);

    if !tokio::fs::try_exists(&source).await.unwrap_or(false) {
        return Err(AppError::Validation(format!(
            "CV not found: {}",
            source.display()
        )));
    }

    tokio::fs::create_dir_all(download_dir)
        .await
        .map_err(AppError::Io)?;

    let destination = download_dir.join(&cv.download_name);
    tokio::fs::copy(&source, &destination)
        .await
        .map_err(AppError::Io)?;

    log::info!("CV saved to {}", destination.display());
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_not_opened() {
        assert!(matches!(open_target("#"), Ok(false)));
        assert!(matches!(open_target(""), Ok(false)));
    }

    #[tokio::test]
    async fn test_download_cv_uses_locale_names() {
        let profile = Profile::embedded().expect("embedded profile loads");
        let assets = tempfile::tempdir().expect("tempdir");
        let downloads = tempfile::tempdir().expect("tempdir");

        tokio::fs::write(assets.path().join("Breno_Araujo_de_Andrade_EN.pdf"), b"%PDF-en")
            .await
            .expect("write asset");

        let saved = download_cv(&profile, Locale::En, assets.path(), downloads.path())
            .await
            .expect("copied");
        assert_eq!(saved, downloads.path().join("Breno_Araujo_Resume.pdf"));
        assert_eq!(tokio::fs::read(&saved).await.expect("read"), b"%PDF-en");
    }

    #[tokio::test]
    async fn test_missing_cv_is_reported() {
        let profile = Profile::embedded().expect("embedded profile loads");
        let empty = tempfile::tempdir().expect("tempdir");

        let result = download_cv(&profile, Locale::Pt, empty.path(), empty.path()).await;
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("_PT.pdf")));
    }
}
