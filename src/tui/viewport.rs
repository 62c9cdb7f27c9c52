//! Transcript viewport — which slice of the transcript lines is on screen.
//!
//! Scroll position is kept as a distance from the bottom, so a viewport that
//! follows the newest content stays pinned as lines are added.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptViewport {
    scroll_back: usize,
}

impl TranscriptViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin to the newest content.
    pub fn follow(&mut self) {
        self.scroll_back = 0;
    }

    pub fn is_following(&self) -> bool {
        self.scroll_back == 0
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Index of the first visible line for `total` lines shown in `height`
    /// rows. Clamps any over-scroll.
    pub fn offset(&mut self, total: usize, height: usize) -> usize {
        let max = total.saturating_sub(height);
        self.scroll_back = self.scroll_back.min(max);
        max - self.scroll_back
    }
}
