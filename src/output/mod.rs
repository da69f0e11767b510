// src/output/mod.rs
pub mod logging;
pub mod page;
pub mod scroll;

pub use page::{render_nav, render_page, RenderedPage};
pub use scroll::ScrollState;
