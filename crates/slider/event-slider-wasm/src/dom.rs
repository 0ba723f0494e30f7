//! DOM discovery, fallback construction and the class-toggling view.

use event_slider::mount::{dot_aria_label, slide_aria_label};
use event_slider::{Anchors, Caption, DomNames, MountPlan, SlideView};
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Anchors found in the page before anything is mutated.
pub struct Discovered {
    pub root: Element,
    pub slides: Vec<Element>,
    pub dots_container: Option<Element>,
    pub caption_title: Option<Element>,
    pub caption_text: Option<Element>,
}

impl Discovered {
    pub fn anchors(&self) -> Anchors {
        Anchors {
            slide_count: self.slides.len(),
            has_dots_container: self.dots_container.is_some(),
            has_caption_title: self.caption_title.is_some(),
            has_caption_text: self.caption_text.is_some(),
        }
    }
}

fn by_id_or_selector(
    doc: &Document,
    id: &str,
    selector: &str,
) -> Result<Option<Element>, JsValue> {
    match doc.get_element_by_id(id) {
        Some(el) => Ok(Some(el)),
        None => doc.query_selector(selector),
    }
}

/// Read-only pass over the page. `None` when there is no slider root.
pub fn discover(doc: &Document, names: &DomNames) -> Result<Option<Discovered>, JsValue> {
    let Some(root) = by_id_or_selector(doc, &names.root_id, &names.root_selector())? else {
        debug!("event slider: root not found, skipping");
        return Ok(None);
    };
    let dots_container = by_id_or_selector(doc, &names.dots_id, &names.dots_selector())?;
    if dots_container.is_none() {
        debug!("event slider: dot container not found, a local one will be created");
    }

    let list = root.query_selector_all(&names.slide_selector())?;
    let slides = (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    Ok(Some(Discovered {
        root,
        slides,
        dots_container,
        caption_title: doc.get_element_by_id(&names.caption_title_id),
        caption_text: doc.get_element_by_id(&names.caption_text_id),
    }))
}

/// Elements the slider renders into once the page has been prepared.
pub struct Prepared {
    pub root: Element,
    pub dots: Vec<Element>,
    pub view: DomView,
}

/// Apply `plan`: fabricate missing anchors, label slides and rebuild dots.
pub fn prepare(
    doc: &Document,
    found: Discovered,
    plan: &MountPlan,
    names: &DomNames,
) -> Result<Prepared, JsValue> {
    let Discovered {
        root,
        slides,
        dots_container,
        caption_title,
        caption_text,
    } = found;

    let (title, text) = if plan.create_caption_box {
        let (fallback_title, fallback_text) = fallback_caption_box(doc, &root, names)?;
        (
            caption_title.unwrap_or(fallback_title),
            caption_text.unwrap_or(fallback_text),
        )
    } else {
        match (caption_title, caption_text) {
            (Some(title), Some(text)) => (title, text),
            _ => return Err(JsValue::from_str("caption anchors vanished during mount")),
        }
    };

    let dots_root = match dots_container {
        Some(el) if !plan.create_dots_container => el,
        _ => {
            let el = doc.create_element("div")?;
            el.set_class_name(&names.local_dots_class);
            root.insert_adjacent_element("afterend", &el)?;
            el
        }
    };

    let count = slides.len();
    for (i, slide) in slides.iter().enumerate() {
        slide.set_attribute("role", "group")?;
        slide.set_attribute("aria-roledescription", "slide")?;
        slide.set_attribute("aria-label", &slide_aria_label(i, count))?;
        slide.set_attribute("tabindex", "-1")?;
        slide.class_list().remove_1(&names.active_class)?;
    }

    dots_root.set_inner_html("");
    let mut dots = Vec::with_capacity(count);
    for i in 0..count {
        let btn = doc.create_element("button")?;
        btn.set_class_name(&names.dot_class);
        btn.set_attribute("type", "button")?;
        btn.set_attribute("aria-label", &dot_aria_label(i))?;
        btn.set_attribute("data-index", &i.to_string())?;
        dots_root.append_child(&btn)?;
        dots.push(btn);
    }

    let view = DomView {
        slides,
        dots: dots.clone(),
        title,
        text,
        active_class: names.active_class.clone(),
        animate_class: names.caption_animate_class.clone(),
    };
    Ok(Prepared { root, dots, view })
}

fn fallback_caption_box(
    doc: &Document,
    root: &Element,
    names: &DomNames,
) -> Result<(Element, Element), JsValue> {
    let boxed = doc.create_element("div")?;
    boxed.set_class_name(&names.fallback_caption_class);
    let title = doc.create_element("h2")?;
    title.set_id(&names.fallback_title_id);
    let text = doc.create_element("p")?;
    text.set_id(&names.fallback_text_id);
    boxed.append_child(&title)?;
    boxed.append_child(&text)?;
    root.insert_adjacent_element("afterend", &boxed)?;
    Ok((title, text))
}

fn check(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        warn!("event slider: {what} failed: {err:?}");
    }
}

/// Renders slider state by toggling classes and writing caption text.
pub struct DomView {
    slides: Vec<Element>,
    dots: Vec<Element>,
    title: Element,
    text: Element,
    active_class: String,
    animate_class: String,
}

impl SlideView for DomView {
    fn show_slide(&mut self, index: usize) {
        for el in self.slides.iter().chain(self.dots.iter()) {
            check(el.class_list().remove_1(&self.active_class), "deactivate");
        }
        for el in [self.slides.get(index), self.dots.get(index)]
            .into_iter()
            .flatten()
        {
            check(el.class_list().add_1(&self.active_class), "activate");
        }
    }

    fn show_caption(&mut self, caption: &Caption) {
        self.title.set_text_content(Some(&caption.title));
        self.text.set_text_content(Some(&caption.text));
    }

    fn replay_caption_animation(&mut self) {
        for el in [&self.title, &self.text] {
            check(el.class_list().remove_1(&self.animate_class), "caption reset");
        }
        // reading layout forces a reflow so the animation starts over
        for el in [&self.title, &self.text] {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.offset_width();
            }
        }
        for el in [&self.title, &self.text] {
            check(el.class_list().add_1(&self.animate_class), "caption animate");
        }
    }
}
