//! Input messages crossing from host adapters into the controller.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Decode a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Finger moved right-to-left; shows the next slide.
    Left,
    /// Finger moved left-to-right; shows the previous slide.
    Right,
}

/// Everything a host can report to the slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderInput {
    DotClicked(usize),
    Key(Key),
    Swipe(SwipeDirection),
    PointerEnter,
    PointerLeave,
    DotFocus(usize),
    DotBlur(usize),
    VisibilityChanged { hidden: bool },
}
