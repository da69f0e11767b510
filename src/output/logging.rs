// src/output/logging.rs
use crate::core::constants::{CONFIG_DIR, LOG_FILE, MAX_LOG_MESSAGES};
use crate::core::prelude::*;
use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Metadata, Record};
use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub enum LoggingError {
    LockError(String),
    SetLoggerError(log::SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::LockError(msg) => write!(f, "{}", msg),
            LoggingError::SetLoggerError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<log::SetLoggerError> for LoggingError {
    fn from(err: log::SetLoggerError) -> Self {
        LoggingError::SetLoggerError(err)
    }
}

impl<T> From<PoisonError<T>> for LoggingError {
    fn from(_: PoisonError<T>) -> Self {
        LoggingError::LockError("Log buffer mutex poisoned".to_string())
    }
}

lazy_static! {
    static ref LOG_MESSAGES: Mutex<Vec<LogMessage>> = Mutex::new(Vec::new());
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogMessage {
    pub fn new(level: Level, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
        }
    }

    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.level, self.message)
    }

    fn file_line(&self) -> String {
        format!(
            "[{}] {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.formatted()
        )
    }
}

/// Buffers records for the status bar and appends them to the debug log.
/// Writing to stdout would tear the alternate screen.
pub struct AppLogger {
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl AppLogger {
    pub fn new(level: LevelFilter, log_file: Option<PathBuf>) -> Self {
        Self { level, log_file }
    }

    pub fn get_messages() -> std::result::Result<Vec<LogMessage>, LoggingError> {
        let mut messages = LOG_MESSAGES.lock().map_err(LoggingError::from)?;
        Ok(messages.drain(..).collect())
    }

    fn add_message(message: LogMessage) -> std::result::Result<(), LoggingError> {
        let mut messages = LOG_MESSAGES.lock().map_err(LoggingError::from)?;
        if messages.len() >= MAX_LOG_MESSAGES {
            messages.remove(0);
        }
        messages.push(message);
        Ok(())
    }

    fn append_to_file(&self, message: &LogMessage) {
        let Some(path) = &self.log_file else {
            return;
        };
        // A failing log file must not take the UI down
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(message.file_line().as_bytes()));
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = LogMessage::new(record.level(), record.args().to_string());
        self.append_to_file(&message);
        let _ = Self::add_message(message);
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter, log_file: Option<PathBuf>) -> std::result::Result<(), LoggingError> {
    let logger = Box::new(AppLogger::new(level, log_file));
    log::set_boxed_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// `.portfolio/portfolio.log` next to the executable, falling back to the
/// working directory.
pub fn log_file_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            let log_dir = base_dir.join(CONFIG_DIR);
            let _ = std::fs::create_dir_all(&log_dir);
            return log_dir.join(LOG_FILE);
        }
    }
    PathBuf::from(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drains_and_stays_bounded() {
        for i in 0..MAX_LOG_MESSAGES + 5 {
            AppLogger::add_message(LogMessage::new(Level::Info, format!("msg {}", i)))
                .expect("buffer lock");
        }
        let drained = AppLogger::get_messages().expect("buffer lock");
        assert_eq!(drained.len(), MAX_LOG_MESSAGES);
        assert_eq!(
            drained.last().map(LogMessage::formatted),
            Some(format!("[INFO] msg {}", MAX_LOG_MESSAGES + 4))
        );
        assert!(AppLogger::get_messages().expect("buffer lock").is_empty());
    }

    #[test]
    fn test_file_line_has_timestamp() {
        let line = LogMessage::new(Level::Warn, "careful".into()).file_line();
        assert!(line.starts_with('['));
        assert!(line.ends_with("[WARN] careful\n"));
    }
}
