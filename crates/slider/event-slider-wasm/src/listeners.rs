//! Page event wiring. Every listener turns a DOM event into a
//! [`SliderInput`] and hands it to the shared controller.

use std::cell::RefCell;
use std::rc::Rc;

use event_slider::{Key, SliderConfig, SliderInput, SwipeDetector};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, KeyboardEvent, TouchEvent,
    Window,
};

use crate::SharedSlider;

fn dispatch(slider: &SharedSlider, input: SliderInput) {
    match slider.try_borrow_mut() {
        Ok(mut s) => s.handle(input),
        Err(_) => debug!("event slider: busy, dropped {input:?}"),
    }
}

/// Listeners live as long as the page; the closures are leaked on purpose.
fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if passive {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            cb.as_ref().unchecked_ref(),
            &opts,
        )?;
    } else {
        target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    }
    cb.forget();
    Ok(())
}

fn first_touch(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some((f64::from(touch.page_x()), f64::from(touch.page_y())))
}

pub fn wire(
    slider: &SharedSlider,
    cfg: &SliderConfig,
    window: &Window,
    doc: &Document,
    root: &Element,
    dots: &[Element],
) -> Result<(), JsValue> {
    for (i, dot) in dots.iter().enumerate() {
        let s = Rc::clone(slider);
        listen(dot, "click", false, move |_| {
            dispatch(&s, SliderInput::DotClicked(i))
        })?;
    }

    if cfg.touch_swipe {
        let detector = Rc::new(RefCell::new(SwipeDetector::new(cfg.swipe)));
        let d = Rc::clone(&detector);
        listen(root, "touchstart", true, move |e| {
            if let Some((x, y)) = first_touch(&e) {
                d.borrow_mut().touch_start(x, y);
            }
        })?;
        let s = Rc::clone(slider);
        listen(root, "touchend", true, move |e| {
            let swipe = first_touch(&e).and_then(|(x, y)| detector.borrow_mut().touch_end(x, y));
            if let Some(dir) = swipe {
                dispatch(&s, SliderInput::Swipe(dir));
            }
        })?;
    }

    if cfg.keyboard_control {
        let s = Rc::clone(slider);
        listen(window, "keydown", false, move |e| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                match Key::from_dom_key(&key) {
                    Key::Other => {}
                    key => dispatch(&s, SliderInput::Key(key)),
                }
            }
        })?;
    }

    if cfg.pause_on_hover {
        let s = Rc::clone(slider);
        listen(root, "mouseenter", false, move |_| {
            dispatch(&s, SliderInput::PointerEnter)
        })?;
        let s = Rc::clone(slider);
        listen(root, "mouseleave", false, move |_| {
            dispatch(&s, SliderInput::PointerLeave)
        })?;
        for (i, dot) in dots.iter().enumerate() {
            let s = Rc::clone(slider);
            listen(dot, "focus", false, move |_| {
                dispatch(&s, SliderInput::DotFocus(i))
            })?;
            let s = Rc::clone(slider);
            listen(dot, "blur", false, move |_| {
                dispatch(&s, SliderInput::DotBlur(i))
            })?;
        }
    }

    let s = Rc::clone(slider);
    let d = doc.clone();
    listen(doc, "visibilitychange", false, move |_| {
        dispatch(
            &s,
            SliderInput::VisibilityChanged {
                hidden: d.hidden(),
            },
        )
    })?;

    Ok(())
}
