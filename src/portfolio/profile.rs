// src/portfolio/profile.rs
use crate::core::prelude::*;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

pub const PROFILE_FILE: &str = "profile.toml";

/// Marks a link that goes nowhere.
pub const NO_TARGET: &str = "#";

#[derive(RustEmbed)]
#[folder = "src/portfolio/content/"]
struct Content;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub linkedin_label: String,
    pub github: String,
    pub github_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAsset {
    /// File name inside the configured assets directory.
    pub asset: String,
    /// Name the copy is saved under.
    pub download_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CvAssets {
    pt: CvAsset,
    en: CvAsset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title_key: String,
    pub description_key: String,
    pub image: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default = "no_target")]
    pub code: String,
    #[serde(default = "no_target")]
    pub demo: String,
}

fn no_target() -> String {
    NO_TARGET.into()
}

impl Project {
    pub fn has_demo(&self) -> bool {
        !is_placeholder(&self.demo)
    }

    pub fn has_code(&self) -> bool {
        !is_placeholder(&self.code)
    }
}

pub fn is_placeholder(target: &str) -> bool {
    let target = target.trim();
    target.is_empty() || target == NO_TARGET
}

/// Everything the page shows that is not UI text: stacks, projects,
/// contact targets and CV documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub stacks: Vec<String>,
    pub contact: Contact,
    cv: CvAssets,
    projects: Vec<Project>,
}

impl Profile {
    pub fn from_toml(content: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(content)
            .map_err(|e| AppError::Validation(format!("Profile TOML: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn embedded() -> Result<Self> {
        let file = Content::get(PROFILE_FILE).ok_or_else(|| {
            AppError::Validation(format!("Embedded file not found: {}", PROFILE_FILE))
        })?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| AppError::Validation(format!("{}: {}", PROFILE_FILE, e)))?;
        Self::from_toml(content)
    }

    fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(AppError::Validation(
                "Profile needs at least one project".to_string(),
            ));
        }
        for cv in [&self.cv.pt, &self.cv.en] {
            if cv.asset.trim().is_empty() || cv.download_name.trim().is_empty() {
                return Err(AppError::Validation(
                    "CV entries need an asset and a download name".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn cv_for(&self, locale: Locale) -> &CvAsset {
        match locale {
            Locale::Pt => &self.cv.pt,
            Locale::En => &self.cv.en,
        }
    }
}
