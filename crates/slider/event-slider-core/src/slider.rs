//! Slider controller: current index, auto-advance timer and pause state.
//!
//! All host inputs go through [`Slider::handle`] or the navigation methods;
//! timer ticks come back through [`Slider::on_timer`].

use log::{debug, warn};

use crate::caption::{Caption, CaptionDeck};
use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::Result;
use crate::events::{ChangeCause, SliderEvent};
use crate::input::{Key, SliderInput, SwipeDirection};
use crate::pause::{PauseSource, PauseTracker};
use crate::timer::{TimerBackend, TimerHandle};
use crate::view::SlideView;

#[derive(Debug)]
pub struct Slider<T: TimerBackend, V: SlideView> {
    cfg: SliderConfig,
    captions: CaptionDeck,
    count: usize,
    index: usize,
    timer: Option<TimerHandle>,
    pause: PauseTracker,
    visible: bool,
    timers: T,
    view: V,
    events: Vec<SliderEvent>,
}

impl<T: TimerBackend, V: SlideView> Slider<T, V> {
    /// Build a slider over `slide_count` slides, render slide 0 and start
    /// auto-advance.
    pub fn new(
        cfg: SliderConfig,
        slide_count: usize,
        captions: CaptionDeck,
        timers: T,
        view: V,
    ) -> Result<Self> {
        cfg.validate()?;
        if slide_count == 0 {
            return Err(SliderError::NoSlides);
        }
        if captions.is_empty() {
            warn!("event slider: caption deck is empty, captions will not be written");
        }
        let mut slider = Self {
            pause: PauseTracker::new(cfg.pause_mode),
            cfg,
            captions,
            count: slide_count,
            index: 0,
            timer: None,
            visible: true,
            timers,
            view,
            events: Vec::new(),
        };
        slider.render();
        slider.start_auto();
        debug!("event slider: mounted with {slide_count} slides");
        Ok(slider)
    }

    // --- navigation -------------------------------------------------------

    /// Show slide `index`, wrapping negative and out-of-range values.
    /// Does not touch the timer.
    pub fn go_to(&mut self, index: i64) {
        self.show(index, ChangeCause::Api);
    }

    pub fn next(&mut self) {
        self.show(self.index as i64 + 1, ChangeCause::Api);
    }

    pub fn prev(&mut self) {
        self.show(self.index as i64 - 1, ChangeCause::Api);
    }

    fn show(&mut self, index: i64, cause: ChangeCause) {
        let from = self.index;
        self.index = index.rem_euclid(self.count as i64) as usize;
        self.render();
        self.events.push(SliderEvent::SlideChanged {
            from,
            to: self.index,
            cause,
        });
    }

    fn render(&mut self) {
        self.view.show_slide(self.index);
        if let Some(caption) = self.captions.for_slide(self.index) {
            self.view.show_caption(caption);
            self.view.replay_caption_animation();
        }
    }

    // --- auto-advance -----------------------------------------------------

    /// Replace any running interval with a fresh one.
    pub fn start_auto(&mut self) {
        self.stop_auto();
        let handle = self.timers.start_interval(self.cfg.auto_slide_interval_ms);
        self.timer = Some(handle);
        self.events.push(SliderEvent::AutoStarted);
        debug!("event slider: auto-advance started ({handle:?})");
    }

    pub fn stop_auto(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.timers.cancel(handle);
            self.events.push(SliderEvent::AutoStopped);
            debug!("event slider: auto-advance stopped ({handle:?})");
        }
    }

    /// Restart the countdown after a manual navigation.
    ///
    /// In counted pause mode the timer stays stopped while any pause source
    /// is held.
    pub fn reset_auto(&mut self) {
        self.stop_auto();
        if self.pause.allows_restart() {
            self.start_auto();
        }
    }

    /// Timer callback. Returns `true` when the tick advanced the slider.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            debug!("event slider: ignoring stale tick ({handle:?})");
            return false;
        }
        if !self.visible || self.pause.blocks_tick() {
            return false;
        }
        self.show(self.index as i64 + 1, ChangeCause::Auto);
        true
    }

    // --- pause sources ----------------------------------------------------

    pub fn pause(&mut self, source: PauseSource) {
        if self.pause.enter(source) {
            self.events.push(SliderEvent::Paused { source });
        }
        self.stop_auto();
    }

    pub fn resume(&mut self, source: PauseSource) {
        let was_held = self.pause.holds(source);
        let restart = self.pause.leave(source);
        if was_held {
            self.events.push(SliderEvent::Resumed { source });
        }
        if restart {
            self.start_auto();
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.events.push(SliderEvent::VisibilityChanged { visible });
        }
    }

    // --- host inputs ------------------------------------------------------

    /// Apply one host input, honoring the feature toggles in the config.
    pub fn handle(&mut self, input: SliderInput) {
        match input {
            SliderInput::DotClicked(i) => self.navigate(i as i64, ChangeCause::Dot),
            SliderInput::Key(key) if self.cfg.keyboard_control => {
                let delta = match key {
                    Key::ArrowLeft => -1,
                    Key::ArrowRight => 1,
                    Key::Other => return,
                };
                self.navigate(self.index as i64 + delta, ChangeCause::Key);
            }
            SliderInput::Swipe(dir) if self.cfg.touch_swipe => {
                let delta = match dir {
                    SwipeDirection::Left => 1,
                    SwipeDirection::Right => -1,
                };
                self.navigate(self.index as i64 + delta, ChangeCause::Swipe);
            }
            SliderInput::PointerEnter if self.cfg.pause_on_hover => {
                self.pause(PauseSource::Hover)
            }
            SliderInput::PointerLeave if self.cfg.pause_on_hover => {
                self.resume(PauseSource::Hover)
            }
            SliderInput::DotFocus(_) if self.cfg.pause_on_hover => {
                self.pause(PauseSource::DotFocus)
            }
            SliderInput::DotBlur(_) if self.cfg.pause_on_hover => {
                self.resume(PauseSource::DotFocus)
            }
            SliderInput::VisibilityChanged { hidden } => self.set_visible(!hidden),
            _ => {}
        }
    }

    /// Manual navigation: show `index` and restart the countdown.
    ///
    /// Clicking a dot focuses it before the click lands, and arrow keys are
    /// usually pressed with a dot focused, so the focus hold ends here. Hover
    /// stays held until the pointer leaves.
    fn navigate(&mut self, index: i64, cause: ChangeCause) {
        self.show(index, cause);
        if self.pause.release(PauseSource::DotFocus) {
            self.events.push(SliderEvent::Resumed {
                source: PauseSource::DotFocus,
            });
        }
        self.reset_auto();
    }

    // --- queries ----------------------------------------------------------

    #[inline]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn caption(&self) -> Option<&Caption> {
        self.captions.for_slide(self.index)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// An interval is scheduled.
    #[inline]
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    /// The next tick would actually move the slider.
    pub fn is_advancing(&self) -> bool {
        self.timer.is_some() && self.visible && !self.pause.blocks_tick()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn current_timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn config(&self) -> &SliderConfig {
        &self.cfg
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SliderEvent> {
        std::mem::take(&mut self.events)
    }
}
