// src/ui/mod.rs
pub mod color;
pub mod screen;
pub mod terminal;
