// =====================================================
// FILE: src/input/keyboard.rs - KEYS TO PAGE ACTIONS
// =====================================================

use crate::core::constants::DOUBLE_ESC_THRESHOLD;
use crate::core::prelude::*;
use crate::portfolio::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleLanguage,
    ToggleTheme,
    NextProject,
    PrevProject,
    SelectProject(usize),
    JumpTo(Section),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    OpenDemo,
    OpenCode,
    OpenGithub,
    SendMessage,
    DownloadCv,
    Quit,
    NoAction,
}

pub struct KeyboardManager {
    double_press_threshold: Duration,
    last_esc_press: Option<Instant>,
}

impl KeyboardManager {
    pub fn new() -> Self {
        Self {
            double_press_threshold: Duration::from_millis(DOUBLE_ESC_THRESHOLD),
            last_esc_press: None,
        }
    }

    pub fn get_action(&mut self, key: &KeyEvent) -> KeyAction {
        if key.code == KeyCode::Esc {
            return self.handle_escape(Instant::now());
        }

        match (key.code, key.modifiers) {
            // ========== QUIT ==========
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,

            // ========== TOGGLES ==========
            (KeyCode::Char('l' | 'L'), _) => KeyAction::ToggleLanguage,
            (KeyCode::Char('t' | 'T'), _) => KeyAction::ToggleTheme,

            // ========== CAROUSEL ==========
            (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
                KeyAction::NextProject
            }
            (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
                KeyAction::PrevProject
            }
            (KeyCode::Char(c @ '1'..='9'), KeyModifiers::ALT) => {
                KeyAction::SelectProject(c as usize - '1' as usize)
            }

            // ========== SECTIONS ==========
            (KeyCode::Char(c), KeyModifiers::NONE) if Section::from_shortcut(c).is_some() => {
                Section::from_shortcut(c).map_or(KeyAction::NoAction, KeyAction::JumpTo)
            }
            // Hero button
            (KeyCode::Enter, _) => KeyAction::JumpTo(Section::About),

            // ========== SCROLLING ==========
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::ScrollUp,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::ScrollDown,
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::PageDown,
            (KeyCode::Home, _) => KeyAction::ScrollTop,
            (KeyCode::End, _) => KeyAction::ScrollBottom,

            // ========== OUTBOUND ==========
            (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::OpenDemo,
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::OpenCode,
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::OpenGithub,
            (KeyCode::Char('m'), KeyModifiers::NONE) => KeyAction::SendMessage,
            (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::DownloadCv,

            _ => KeyAction::NoAction,
        }
    }

    fn handle_escape(&mut self, now: Instant) -> KeyAction {
        if let Some(prev_press) = self.last_esc_press.take() {
            if now.duration_since(prev_press) <= self.double_press_threshold {
                log::info!("Double ESC detected - quit requested");
                return KeyAction::Quit;
            }
        }
        self.last_esc_press = Some(now);
        KeyAction::NoAction
    }
}

impl Default for KeyboardManager {
    fn default() -> Self {
        Self::new()
    }
}
