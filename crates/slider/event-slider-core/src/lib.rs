//! Event slider core (engine-agnostic).
//!
//! State machine for an auto-advancing carousel: one active slide out of N,
//! a caption list cycled independently of N, manual navigation with timer
//! reset, and pause sources (hover, dot focus). Hosts supply a
//! [`TimerBackend`] and a [`SlideView`]; the `event-slider-wasm` crate does
//! so for the browser, [`SliderRuntime`] does so headlessly.

pub mod caption;
pub mod config;
pub mod error;
pub mod events;
pub mod gesture;
pub mod input;
pub mod mount;
pub mod pause;
pub mod runtime;
pub mod slider;
pub mod timer;
pub mod view;

pub use caption::{Caption, CaptionDeck};
pub use config::{SliderConfig, SwipeConfig};
pub use error::SliderError;
pub use events::{ChangeCause, SliderEvent};
pub use gesture::SwipeDetector;
pub use input::{Key, SliderInput, SwipeDirection};
pub use mount::{Anchors, DomNames, MountPlan};
pub use pause::{PauseMode, PauseSource, PauseTracker};
pub use runtime::SliderRuntime;
pub use slider::Slider;
pub use timer::{TimerBackend, TimerHandle, VirtualTimers};
pub use view::{MemoryView, SlideView};

pub type Result<T> = core::result::Result<T, SliderError>;
