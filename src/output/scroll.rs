/// Vertical scroll position of the page inside its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: usize,
    window_height: usize,
    content_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_dimensions(&mut self, window_height: usize, content_height: usize) {
        self.window_height = window_height;
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.window_height)
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.window_height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.window_height.saturating_sub(1).max(1));
    }

    /// Puts `line` at the top of the window, as far as the content allows.
    pub fn jump_to(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}
