//! Cooperative single-threaded driver for headless hosts.
//!
//! Inputs are queued in a mailbox and applied in order; timer ticks are
//! delivered from [`VirtualTimers`] between message batches, so the
//! controller never sees two callbacks at once.

use std::collections::VecDeque;

use crate::caption::CaptionDeck;
use crate::config::SliderConfig;
use crate::input::SliderInput;
use crate::slider::Slider;
use crate::timer::VirtualTimers;
use crate::view::SlideView;
use crate::Result;

#[derive(Debug)]
pub struct SliderRuntime<V: SlideView> {
    slider: Slider<VirtualTimers, V>,
    mailbox: VecDeque<SliderInput>,
}

impl<V: SlideView> SliderRuntime<V> {
    pub fn new(
        cfg: SliderConfig,
        slide_count: usize,
        captions: CaptionDeck,
        view: V,
    ) -> Result<Self> {
        let slider = Slider::new(cfg, slide_count, captions, VirtualTimers::new(), view)?;
        Ok(Self {
            slider,
            mailbox: VecDeque::new(),
        })
    }

    /// Queue an input; it is applied on the next `run_until_idle`/`advance`.
    pub fn post(&mut self, input: SliderInput) {
        self.mailbox.push_back(input);
    }

    /// Apply every queued input in arrival order.
    pub fn run_until_idle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(input) = self.mailbox.pop_front() {
            self.slider.handle(input);
            applied += 1;
        }
        applied
    }

    /// Drain the mailbox, then let `ms` of simulated time pass.
    /// Returns how many ticks advanced the slider.
    pub fn advance(&mut self, ms: u64) -> usize {
        self.run_until_idle();
        let until = self.now_ms().saturating_add(ms);
        let mut advanced = 0;
        while let Some(handle) = self.slider.timers_mut().pop_due(until) {
            if self.slider.on_timer(handle) {
                advanced += 1;
            }
        }
        self.slider.timers_mut().set_now(until);
        advanced
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.slider.timers().now_ms()
    }

    pub fn slider(&self) -> &Slider<VirtualTimers, V> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider<VirtualTimers, V> {
        &mut self.slider
    }
}
