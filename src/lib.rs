#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

// Module definitions
pub mod cli;
pub mod core;
pub mod i18n;
pub mod input;
pub mod output;
pub mod portfolio;
pub mod setup;
pub mod ui;

// Essential re-exports
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use i18n::{Locale, TranslationTable, Translator};
pub use portfolio::{PageState, Profile};
pub use ui::screen::ScreenManager;

use output::page::{render_nav, render_page};
use portfolio::Section;
use ui::color::Palette;

pub async fn run_with_config(config: Config) -> Result<()> {
    let table = i18n::init()?;
    let profile = Profile::embedded()?;
    let mut screen = ScreenManager::new(&config, &profile, table).await?;
    screen.run().await
}

/// The page as uncoloured text: nav bar, then every section.
pub fn render_plain(
    profile: &Profile,
    table: &TranslationTable,
    locale: Locale,
    dark_mode: bool,
    width: u16,
) -> Result<String> {
    let state = PageState::new(profile, locale, dark_mode)?;
    let tr = state.translator(table);
    let palette = Palette::for_mode(dark_mode);

    let nav = render_nav(&state, Section::Home, &tr, &palette, width);
    let page = render_page(profile, &state, &tr, &palette, width);

    let nav_text = output::page::line_text(&nav);
    Ok(format!("{}\n{}\n", nav_text.trim_end(), page.plain_text()))
}
