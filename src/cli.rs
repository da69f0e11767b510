// src/cli.rs
use crate::core::prelude::*;
use crate::i18n::parse_language;
use clap::Parser;

pub const DEFAULT_PLAIN_WIDTH: u16 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "portfolio", version)]
#[command(about = "Bilingual developer portfolio in the terminal")]
pub struct CliArgs {
    /// Print the page as text and exit instead of opening the screen
    #[arg(long, short = 'p', default_value_t = false)]
    pub plain: bool,
    /// Start language: pt or en
    #[arg(long = "lang", short = 'l', value_parser = parse_locale)]
    pub language: Option<Locale>,
    #[arg(long, conflicts_with = "light", default_value_t = false)]
    pub dark: bool,
    #[arg(long, default_value_t = false)]
    pub light: bool,
    /// Line width of the plain output
    #[arg(
        long,
        short = 'w',
        default_value_t = DEFAULT_PLAIN_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: u16,
}

impl CliArgs {
    /// `Some(true)` for `--dark`, `Some(false)` for `--light`.
    pub fn dark_mode(&self) -> Option<bool> {
        match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn parse_locale(value: &str) -> std::result::Result<Locale, String> {
    parse_language(value).map_err(|e| e.to_string())
}
