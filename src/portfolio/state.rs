// src/portfolio/state.rs
use super::carousel::Carousel;
use super::profile::{Profile, Project};
use super::section::Section;
use crate::core::prelude::*;

/// UI state of one session. Lives as long as the screen, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    locale: Locale,
    dark_mode: bool,
    carousel: Carousel,
    section: Section,
}

impl PageState {
    pub fn new(profile: &Profile, locale: Locale, dark_mode: bool) -> Result<Self> {
        Ok(Self {
            locale,
            dark_mode,
            carousel: Carousel::new(profile.projects().len())?,
            section: Section::Home,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn translator<'t>(&self, table: &'t TranslationTable) -> Translator<'t> {
        Translator::new(table, self.locale)
    }

    pub fn toggle_language(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn next_project(&mut self) -> usize {
        self.carousel.next()
    }

    pub fn prev_project(&mut self) -> usize {
        self.carousel.prev()
    }

    pub fn select_project(&mut self, index: usize) -> bool {
        self.carousel.select(index)
    }

    pub fn go_to(&mut self, section: Section) {
        self.section = section;
    }

    pub fn current_project<'p>(&self, profile: &'p Profile) -> Option<&'p Project> {
        profile.project(self.carousel.index())
    }
}
