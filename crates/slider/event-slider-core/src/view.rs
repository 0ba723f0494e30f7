//! Rendering hook the controller drives on every index change.

use crate::caption::Caption;

/// Render target for a slider.
///
/// `show_slide` must leave exactly one slide and one dot active.
pub trait SlideView {
    fn show_slide(&mut self, index: usize);
    fn show_caption(&mut self, caption: &Caption);
    /// Replay the "caption just changed" animation.
    fn replay_caption_animation(&mut self);
}

/// In-memory render target mirroring the DOM state a browser view would hold.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub slides_active: Vec<bool>,
    pub dots_active: Vec<bool>,
    pub caption: Option<Caption>,
    pub caption_replays: usize,
}

impl MemoryView {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slides_active: vec![false; slide_count],
            dots_active: vec![false; slide_count],
            caption: None,
            caption_replays: 0,
        }
    }

    pub fn active_slides(&self) -> Vec<usize> {
        active(&self.slides_active)
    }

    pub fn active_dots(&self) -> Vec<usize> {
        active(&self.dots_active)
    }
}

fn active(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

impl SlideView for MemoryView {
    fn show_slide(&mut self, index: usize) {
        self.slides_active.iter_mut().for_each(|s| *s = false);
        self.dots_active.iter_mut().for_each(|d| *d = false);
        if let Some(s) = self.slides_active.get_mut(index) {
            *s = true;
        }
        if let Some(d) = self.dots_active.get_mut(index) {
            *d = true;
        }
    }

    fn show_caption(&mut self, caption: &Caption) {
        self.caption = Some(caption.clone());
    }

    fn replay_caption_animation(&mut self) {
        self.caption_replays += 1;
    }
}
