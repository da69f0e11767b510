// src/portfolio/mod.rs
pub mod carousel;
pub mod links;
pub mod profile;
pub mod section;
pub mod state;

pub use carousel::{next_index, prev_index, Carousel};
pub use profile::{Contact, CvAsset, Profile, Project};
pub use section::Section;
pub use state::PageState;
