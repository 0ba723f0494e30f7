//! Slider configuration, fixed at mount time.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;
use crate::mount::DomNames;
use crate::pause::PauseMode;
use crate::Result;

/// Configuration for a single slider instance.
///
/// Every field has a default so hosts can pass a partial JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Milliseconds between auto-advances.
    pub auto_slide_interval_ms: u64,
    /// CSS transition length; the core does not use it, stylesheet hosts do.
    pub transition_ms: u64,
    pub pause_on_hover: bool,
    pub keyboard_control: bool,
    pub touch_swipe: bool,
    /// How overlapping pause sources interact.
    pub pause_mode: PauseMode,
    pub swipe: SwipeConfig,
    /// Element ids and class names used by DOM adapters.
    pub dom: DomNames,
}

/// Thresholds for classifying a touch gesture as a horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Minimum horizontal travel in CSS pixels.
    pub threshold_px: f64,
    /// Maximum vertical travel in CSS pixels.
    pub restraint_px: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 30.0,
            restraint_px: 75.0,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            auto_slide_interval_ms: 3200,
            transition_ms: 700,
            pause_on_hover: true,
            keyboard_control: true,
            touch_swipe: true,
            pause_mode: PauseMode::default(),
            swipe: SwipeConfig::default(),
            dom: DomNames::default(),
        }
    }
}

impl SliderConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: SliderConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.auto_slide_interval_ms == 0 {
            return Err(SliderError::ZeroInterval);
        }
        for (name, value) in [
            ("threshold_px", self.swipe.threshold_px),
            ("restraint_px", self.swipe.restraint_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SliderError::InvalidSwipeThreshold { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SliderConfig::from_json(r#"{ "auto_slide_interval_ms": 5000 }"#).unwrap();
        assert_eq!(cfg.auto_slide_interval_ms, 5000);
        assert_eq!(cfg.transition_ms, 700);
        assert!(cfg.pause_on_hover && cfg.keyboard_control && cfg.touch_swipe);
        assert_eq!(cfg.swipe, SwipeConfig::default());
    }

    #[test]
    fn zero_interval_rejected() {
        let err = SliderConfig::from_json(r#"{ "auto_slide_interval_ms": 0 }"#).unwrap_err();
        assert_eq!(err, SliderError::ZeroInterval);
    }

    #[test]
    fn negative_threshold_rejected() {
        let err = SliderConfig::from_json(r#"{ "swipe": { "threshold_px": -1.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SliderError::InvalidSwipeThreshold {
                name: "threshold_px",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SliderConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));
    }
}
