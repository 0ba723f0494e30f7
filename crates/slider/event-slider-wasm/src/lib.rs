//! Browser adapter for the event slider.
//!
//! Finds the slider anchors in the page, fabricates the optional ones,
//! renders through class toggling and drives auto-advance with
//! `setInterval`. All state transitions live in `event-slider-core`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use event_slider::{CaptionDeck, MountPlan, Slider, SliderConfig, TimerHandle};
use log::{debug, LevelFilter};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

mod dom;
mod listeners;
mod logger;
mod timers;

pub use dom::DomView;
pub use timers::BrowserTimers;

pub(crate) type SharedSlider = Rc<RefCell<Slider<BrowserTimers, DomView>>>;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_err(context: &str, err: JsValue) -> JsError {
    JsError::new(&format!("{context}: {err:?}"))
}

#[wasm_bindgen(start)]
pub fn on_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Warn);
}

/// Change console verbosity ("off", "error", "warn", "info", "debug", "trace").
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("unknown log level '{level}'")))?;
    logger::init(filter);
    Ok(())
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

#[wasm_bindgen]
pub struct EventSlider {
    inner: SharedSlider,
}

#[wasm_bindgen]
impl EventSlider {
    /// Mount the slider on the current document.
    ///
    /// `config` is a partial `SliderConfig` object, `captions` an array of
    /// `{ title, text }`; pass undefined/null for defaults. Returns undefined
    /// when the page has no slider root or no slides.
    pub fn mount(config: JsValue, captions: JsValue) -> Result<Option<EventSlider>, JsError> {
        let cfg: SliderConfig = if jsvalue_is_undefined_or_null(&config) {
            SliderConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        // before discovery: a rejected config must leave the page untouched
        cfg.validate()
            .map_err(|e| JsError::new(&e.to_string()))?;
        let deck: CaptionDeck = if jsvalue_is_undefined_or_null(&captions) {
            CaptionDeck::builtin()
        } else {
            swb::from_value(captions)
                .map_err(|e| JsError::new(&format!("captions error: {e}")))?
        };

        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let Some(doc) = window.document() else {
            return Ok(None);
        };

        let Some(found) = dom::discover(&doc, &cfg.dom).map_err(|e| js_err("discover", e))?
        else {
            return Ok(None);
        };
        let Some(plan) = MountPlan::for_anchors(found.anchors()) else {
            debug!("event slider: no slides inside root, skipping");
            return Ok(None);
        };

        let prepared =
            dom::prepare(&doc, found, &plan, &cfg.dom).map_err(|e| js_err("prepare", e))?;
        let timers = BrowserTimers::new(window.clone());
        let sink = timers.sink();
        let slider = Slider::new(cfg.clone(), plan.slide_count, deck, timers, prepared.view)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let inner: SharedSlider = Rc::new(RefCell::new(slider));

        let weak: Weak<RefCell<Slider<BrowserTimers, DomView>>> = Rc::downgrade(&inner);
        *sink.borrow_mut() = Some(Box::new(move |handle: TimerHandle| {
            if let Some(s) = weak.upgrade() {
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.on_timer(handle);
                }
            }
        }));

        listeners::wire(&inner, &cfg, &window, &doc, &prepared.root, &prepared.dots)
            .map_err(|e| js_err("listeners", e))?;

        Ok(Some(EventSlider { inner }))
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: i32) {
        self.inner.borrow_mut().go_to(i64::from(index));
    }

    pub fn next(&self) {
        self.inner.borrow_mut().next();
    }

    pub fn prev(&self) {
        self.inner.borrow_mut().prev();
    }

    #[wasm_bindgen(js_name = startAuto)]
    pub fn start_auto(&self) {
        self.inner.borrow_mut().start_auto();
    }

    #[wasm_bindgen(js_name = stopAuto)]
    pub fn stop_auto(&self) {
        self.inner.borrow_mut().stop_auto();
    }

    #[wasm_bindgen(js_name = resetAuto)]
    pub fn reset_auto(&self) {
        self.inner.borrow_mut().reset_auto();
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.inner.borrow().current_index() as u32
    }

    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.inner.borrow().slide_count() as u32
    }

    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.inner.borrow().is_paused()
    }

    #[wasm_bindgen(js_name = isAutoAdvancing)]
    pub fn is_auto_advancing(&self) -> bool {
        self.inner.borrow().is_auto_advancing()
    }

    /// Timer running, no pause source held and the tab visible.
    #[wasm_bindgen(js_name = isAdvancing)]
    pub fn is_advancing(&self) -> bool {
        self.inner.borrow().is_advancing()
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().is_visible()
    }
}

/// Mount with defaults for the lifetime of the page. The page listeners
/// keep the controller alive, so the handle is not returned.
#[wasm_bindgen]
pub fn init_event_slider() -> Result<bool, JsError> {
    Ok(EventSlider::mount(JsValue::UNDEFINED, JsValue::UNDEFINED)?.is_some())
}
