//! Error types for the slider core.

/// Errors raised while building or configuring a slider.
///
/// None of these reach the page: the browser adapter treats them as a
/// reason to skip mounting and logs them at debug level.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SliderError {
    /// No slide panels were found under the slider root.
    #[error("slider has no slides")]
    NoSlides,

    /// Auto-advance interval must be strictly positive.
    #[error("auto slide interval must be greater than zero")]
    ZeroInterval,

    /// Swipe thresholds must be finite and non-negative.
    #[error("invalid swipe threshold: {name} = {value}")]
    InvalidSwipeThreshold { name: &'static str, value: f64 },

    /// Configuration payload could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl SliderError {
    /// Precondition failures mean "nothing to mount" rather than a broken setup.
    #[inline]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NoSlides)
    }
}

impl From<serde_json::Error> for SliderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
