//! `setInterval`-backed timer backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use event_slider::{TimerBackend, TimerHandle};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Receiver for interval ticks, installed once the slider is shared.
pub type TickSink = Rc<RefCell<Option<Box<dyn Fn(TimerHandle)>>>>;

pub struct BrowserTimers {
    window: Window,
    next: u64,
    sink: TickSink,
    live: HashMap<TimerHandle, (i32, Closure<dyn FnMut()>)>,
}

impl BrowserTimers {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next: 0,
            sink: Rc::new(RefCell::new(None)),
            live: HashMap::new(),
        }
    }

    pub fn sink(&self) -> TickSink {
        Rc::clone(&self.sink)
    }
}

impl TimerBackend for BrowserTimers {
    fn start_interval(&mut self, interval_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next);
        self.next = self.next.wrapping_add(1);

        let sink = Rc::clone(&self.sink);
        let tick = Closure::<dyn FnMut()>::new(move || {
            if let Some(deliver) = sink.borrow().as_ref() {
                deliver(handle);
            }
        });
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(id) => {
                self.live.insert(handle, (id, tick));
            }
            Err(err) => warn!("event slider: setInterval failed: {err:?}"),
        }
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some((id, _tick)) = self.live.remove(&handle) {
            self.window.clear_interval_with_handle(id);
        }
    }
}
