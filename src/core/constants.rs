pub const APP_TITLE: &str = "PORTFOLIO";
pub const DEFAULT_POLL_RATE: u64 = 16;
pub const MIN_POLL_RATE: u64 = 16;
pub const MAX_POLL_RATE: u64 = 1000;
pub const DOUBLE_ESC_THRESHOLD: u64 = 250;
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 12;
pub const MAX_CONTENT_WIDTH: u16 = 96;
pub const MAX_LOG_MESSAGES: usize = 100;
pub const CONFIG_DIR: &str = ".portfolio";
pub const CONFIG_FILE: &str = "portfolio.toml";
pub const LOG_FILE: &str = "portfolio.log";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
