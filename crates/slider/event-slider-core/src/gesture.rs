//! Touch swipe classification.

use crate::config::SwipeConfig;
use crate::input::SwipeDirection;

/// Turns a touchstart/touchend pair into a swipe, if it was one.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    cfg: SwipeConfig,
    start: (f64, f64),
}

impl SwipeDetector {
    pub fn new(cfg: SwipeConfig) -> Self {
        Self {
            cfg,
            start: (0.0, 0.0),
        }
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.start = (x, y);
    }

    /// A swipe needs enough horizontal travel and little vertical drift.
    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let dx = x - self.start.0;
        let dy = y - self.start.1;
        if dx.abs() >= self.cfg.threshold_px && dy.abs() <= self.cfg.restraint_px {
            Some(if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            None
        }
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}
