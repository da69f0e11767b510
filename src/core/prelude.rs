// src/core/prelude.rs

// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

// Standard library essentials
pub use std::io::{self, Write};
pub use std::path::{Path, PathBuf};
pub use std::time::{Duration, Instant};

// Crossterm basics
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Ratatui basics
pub use ratatui::style::Color;

// i18n essentials
pub use crate::i18n::{Locale, TranslationTable, Translator};
