//! Semantic notifications emitted by the controller.

use serde::{Deserialize, Serialize};

use crate::pause::PauseSource;

/// What triggered a slide change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ChangeCause {
    Auto,
    Dot,
    Key,
    Swipe,
    Api,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SliderEvent {
    SlideChanged {
        from: usize,
        to: usize,
        cause: ChangeCause,
    },
    AutoStarted,
    AutoStopped,
    Paused {
        source: PauseSource,
    },
    Resumed {
        source: PauseSource,
    },
    VisibilityChanged {
        visible: bool,
    },
}
