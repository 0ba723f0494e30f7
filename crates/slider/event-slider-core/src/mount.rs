//! DOM naming contract and mount-time decisions.
//!
//! Adapters look anchors up by these names, report which ones exist, and
//! follow the resulting [`MountPlan`] to fabricate the missing ones.

use serde::{Deserialize, Serialize};

/// Ids and class names the slider reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomNames {
    pub root_id: String,
    pub root_class: String,
    pub slide_class: String,
    pub dots_id: String,
    pub dots_class: String,
    pub caption_title_id: String,
    pub caption_text_id: String,
    pub active_class: String,
    pub dot_class: String,
    pub caption_animate_class: String,
    pub fallback_caption_class: String,
    pub fallback_title_id: String,
    pub fallback_text_id: String,
    pub local_dots_class: String,
}

impl Default for DomNames {
    fn default() -> Self {
        Self {
            root_id: "eventSlider".into(),
            root_class: "event-slider".into(),
            slide_class: "slide".into(),
            dots_id: "sliderDots".into(),
            dots_class: "slider-dots".into(),
            caption_title_id: "captionTitle".into(),
            caption_text_id: "captionText".into(),
            active_class: "active".into(),
            dot_class: "dot".into(),
            caption_animate_class: "caption-animate".into(),
            fallback_caption_class: "event-caption fallback-caption".into(),
            fallback_title_id: "captionTitle_fallback".into(),
            fallback_text_id: "captionText_fallback".into(),
            local_dots_class: "slider-dots slider-dots-local".into(),
        }
    }
}

impl DomNames {
    pub fn root_selector(&self) -> String {
        format!(".{}", self.root_class)
    }

    pub fn slide_selector(&self) -> String {
        format!(".{}", self.slide_class)
    }

    pub fn dots_selector(&self) -> String {
        format!(".{}", self.dots_class)
    }
}

/// Which anchors the host found in the page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Anchors {
    pub slide_count: usize,
    pub has_dots_container: bool,
    pub has_caption_title: bool,
    pub has_caption_text: bool,
}

/// What the host must build before the slider can render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MountPlan {
    pub slide_count: usize,
    /// Insert a local dot container right after the root.
    pub create_dots_container: bool,
    /// Insert a fallback caption box (title + text) right after the root.
    pub create_caption_box: bool,
}

impl MountPlan {
    /// `None` when there is nothing to mount.
    pub fn for_anchors(anchors: Anchors) -> Option<Self> {
        if anchors.slide_count == 0 {
            return None;
        }
        Some(Self {
            slide_count: anchors.slide_count,
            create_dots_container: !anchors.has_dots_container,
            // both caption anchors are replaced even if only one is missing
            create_caption_box: !(anchors.has_caption_title && anchors.has_caption_text),
        })
    }
}

pub fn slide_aria_label(index: usize, count: usize) -> String {
    format!("Slide {} of {}", index + 1, count)
}

pub fn dot_aria_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}
