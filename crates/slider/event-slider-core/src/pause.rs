//! Pause-source bookkeeping.
//!
//! Two sources can suspend auto-advance: the pointer hovering the slider root
//! and keyboard focus resting on a dot. [`PauseMode`] decides what happens
//! when they overlap.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// A condition that suspends auto-advance while it holds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PauseSource {
    Hover,
    DotFocus,
}

/// Policy for overlapping pause sources.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum PauseMode {
    /// Auto-advance restarts only once every source has cleared.
    #[default]
    Counted,
    /// Every leave restarts the timer and only hover blocks ticks, matching
    /// the behaviour of the page script the slider was lifted from.
    Inherited,
}

#[derive(Debug, Default)]
pub struct PauseTracker {
    mode: PauseMode,
    held: HashSet<PauseSource>,
}

impl PauseTracker {
    pub fn new(mode: PauseMode) -> Self {
        Self {
            mode,
            held: HashSet::new(),
        }
    }

    /// Mark `source` as held. Returns `true` when it was not held before.
    pub fn enter(&mut self, source: PauseSource) -> bool {
        self.held.insert(source)
    }

    /// Release `source`. Returns `true` when the timer should restart.
    pub fn leave(&mut self, source: PauseSource) -> bool {
        self.held.remove(&source);
        match self.mode {
            PauseMode::Counted => self.held.is_empty(),
            PauseMode::Inherited => true,
        }
    }

    /// Drop `source` without deciding about a restart. Returns `true` when it
    /// was held.
    pub fn release(&mut self, source: PauseSource) -> bool {
        self.held.remove(&source)
    }

    /// Whether `reset_auto` may restart the timer right now.
    pub fn allows_restart(&self) -> bool {
        match self.mode {
            PauseMode::Counted => self.held.is_empty(),
            PauseMode::Inherited => true,
        }
    }

    /// Whether a timer tick must be swallowed.
    pub fn blocks_tick(&self) -> bool {
        match self.mode {
            PauseMode::Counted => !self.held.is_empty(),
            PauseMode::Inherited => self.held.contains(&PauseSource::Hover),
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        !self.held.is_empty()
    }

    #[inline]
    pub fn holds(&self, source: PauseSource) -> bool {
        self.held.contains(&source)
    }
}
