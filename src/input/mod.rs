pub mod event;
pub mod keyboard;

pub use event::{AppEvent, EventHandler};
pub use keyboard::{KeyAction, KeyboardManager};
