// src/main.rs
use clap::Parser;
use portfolio_term::cli::CliArgs;
use portfolio_term::core::constants::{APP_TITLE, VERSION};
use portfolio_term::output::logging;
use portfolio_term::ui::{color::ThemeMode, terminal::restore_terminal};
use portfolio_term::{i18n, render_plain, run_with_config, Config, Profile, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut config = Config::load().await?;
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(dark) = args.dark_mode() {
        config.theme_mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
    }

    if args.plain {
        return run_plain(&config, args.width);
    }

    if let Err(e) = logging::init(config.log_level_filter(), Some(logging::log_file_path())) {
        eprintln!("Logger unavailable: {}", e);
    }
    config.report_startup_messages();

    std::panic::set_hook(Box::new(|panic_info| {
        restore_terminal();
        log::error!("Panic: {}", panic_info);
        eprintln!("{}", panic_info);
    }));

    log::info!("{} v{}", APP_TITLE, VERSION);
    run_with_config(config).await
}

fn run_plain(config: &Config, width: u16) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(config.log_level_filter())
        .parse_env("RUST_LOG")
        .init();
    config.report_startup_messages();

    let table = i18n::init()?;
    let profile = Profile::embedded()?;
    log::debug!("Rendering plain page in {}", config.language);

    let text = render_plain(
        &profile,
        table,
        config.language,
        config.initial_dark_mode(),
        width,
    )?;
    print!("{}", text);
    Ok(())
}
