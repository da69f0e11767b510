use crate::core::prelude::*;
use log::Level;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppColor(Color);

impl AppColor {
    pub fn new(color: Color) -> Self {
        Self(color)
    }

    pub fn from_string(color_str: &str) -> Result<Self> {
        let color = match color_str.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" => Color::Gray,
            "darkgray" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "white" => Color::White,
            _ => {
                return Err(AppError::Validation(format!(
                    "Invalid color: {}",
                    color_str
                )))
            }
        };
        Ok(Self(color))
    }

    pub fn from_log_level(level: Level) -> Self {
        let color = match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Blue,
            Level::Trace => Color::DarkGray,
        };
        Self(color)
    }

    pub fn to_name(&self) -> &'static str {
        match self.0 {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::LightRed => "LightRed",
            Color::LightGreen => "LightGreen",
            Color::LightYellow => "LightYellow",
            Color::LightBlue => "LightBlue",
            Color::LightMagenta => "LightMagenta",
            Color::LightCyan => "LightCyan",
            Color::White => "White",
            _ => "Gray",
        }
    }
}

impl fmt::Display for AppColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

impl From<AppColor> for Color {
    fn from(app_color: AppColor) -> Self {
        app_color.0
    }
}

impl From<&AppColor> for Color {
    fn from(app_color: &AppColor) -> Self {
        app_color.0
    }
}

impl Default for AppColor {
    fn default() -> Self {
        Self(Color::Gray)
    }
}

/// How the initial light/dark mode is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Resolves to a dark flag. `colorfgbg` is the terminal's `COLORFGBG`
    /// value, consulted only in auto mode.
    pub fn resolve(self, colorfgbg: Option<&str>) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => colorfgbg.is_some_and(prefers_dark),
        }
    }

    pub fn resolve_from_env(self) -> bool {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        self.resolve(colorfgbg.as_deref())
    }
}

/// `COLORFGBG` looks like `15;0` or `default;default;0`; the last field is
/// the background palette index.
fn prefers_dark(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

/// Colours for one page rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: AppColor,
    pub text: AppColor,
    pub muted: AppColor,
    pub primary: AppColor,
    pub accent: AppColor,
    pub badge_text: AppColor,
    pub badge_bg: AppColor,
    pub border: AppColor,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: AppColor::new(Color::Black),
            text: AppColor::new(Color::White),
            muted: AppColor::new(Color::Gray),
            primary: AppColor::new(Color::LightCyan),
            accent: AppColor::new(Color::LightMagenta),
            badge_text: AppColor::new(Color::Black),
            badge_bg: AppColor::new(Color::Gray),
            border: AppColor::new(Color::DarkGray),
        }
    }

    pub fn light() -> Self {
        Self {
            background: AppColor::new(Color::White),
            text: AppColor::new(Color::Black),
            muted: AppColor::new(Color::DarkGray),
            primary: AppColor::new(Color::Blue),
            accent: AppColor::new(Color::Magenta),
            badge_text: AppColor::new(Color::White),
            badge_bg: AppColor::new(Color::DarkGray),
            border: AppColor::new(Color::Gray),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Palette for `dark_mode` with the configured accent, if any, as
    /// primary colour.
    pub fn themed(dark_mode: bool, accent: Option<AppColor>) -> Self {
        let palette = Self::for_mode(dark_mode);
        match accent {
            Some(primary) => Self { primary, ..palette },
            None => palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_resolution() {
        assert!(ThemeMode::Dark.resolve(None));
        assert!(!ThemeMode::Light.resolve(Some("15;0")));
        assert!(ThemeMode::Auto.resolve(Some("15;0")));
        assert!(ThemeMode::Auto.resolve(Some("default;default;8")));
        assert!(!ThemeMode::Auto.resolve(Some("0;15")));
        assert!(!ThemeMode::Auto.resolve(Some("garbage")));
        assert!(!ThemeMode::Auto.resolve(None));
    }

    #[test]
    fn test_theme_mode_parsing() {
        assert_eq!(ThemeMode::from_name("DARK"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("sepia"), None);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::for_mode(true), Palette::for_mode(false));
        assert_eq!(Color::from(Palette::dark().background), Color::Black);
    }

    #[test]
    fn test_accent_overrides_primary() {
        let accent = AppColor::new(Color::Green);
        assert_eq!(Palette::themed(true, Some(accent)).primary, accent);
        assert_eq!(Palette::themed(false, None), Palette::light());
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(AppColor::from_string("LightBlue").ok().map(Color::from), Some(Color::LightBlue));
        assert!(AppColor::from_string("chartreuse").is_err());
    }
}
