use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document is not available"))
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// Locks or restores page scrolling while an overlay is open.
pub fn lock_page_scroll(locked: bool) -> Result<(), JsValue> {
    let overflow = if locked { "hidden" } else { "auto" };
    body()?.style().set_property("overflow", overflow)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("element is not an HtmlElement"))?
        .style()
        .set_property(property, value)
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// Current vertical scroll distance of the page.
pub fn scroll_top() -> Result<f64, JsValue> {
    let window = window()?;
    match window.scroll_y() {
        Ok(offset) => Ok(offset),
        Err(_) => Ok(document()?
            .document_element()
            .map(|root| root.scroll_top() as f64)
            .unwrap_or(0.0)),
    }
}

/// True for links that point at an element on this page.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

/// Smoothly scrolls the element `href` points at to the top of the
/// viewport. Returns false when there is nothing to scroll to.
pub fn smooth_scroll_to_anchor(href: &str) -> Result<bool, JsValue> {
    if !is_in_page_anchor(href) {
        return Ok(false);
    }
    let Some(target) = document()?.query_selector(href)? else {
        return Ok(false);
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

/// Runs `frame` on every animation frame until it returns false. The
/// callback receives the frame timestamp in milliseconds.
pub fn on_every_frame<F>(mut frame: F) -> Result<(), JsValue>
where
    F: FnMut(f64) -> bool + 'static,
{
    let window = window()?;
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_loop = slot.clone();
    let window_loop = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !frame(timestamp) {
            // Can't drop the closure from inside itself; release it next tick.
            let slot = slot_loop.clone();
            Timeout::new(0, move || {
                slot.borrow_mut().take();
            })
            .forget();
            return;
        }
        if let Some(callback) = slot_loop.borrow().as_ref() {
            if let Err(e) = window_loop.request_animation_frame(callback.as_ref().unchecked_ref()) {
                error!("Failed to schedule animation frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Lets a per-frame failure through to the log only the first time.
#[derive(Debug, Default)]
pub struct ReportOnce {
    reported: bool,
}

impl ReportOnce {
    pub fn first(&mut self) -> bool {
        !std::mem::replace(&mut self.reported, true)
    }
}

/// Options for [`watch_intersections`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions<'a> {
    /// Visible fraction that counts as entering the viewport.
    pub threshold: f64,
    pub root_margin: Option<&'a str>,
    /// Stop watching an element after its first entry.
    pub once: bool,
}

/// Calls `on_enter` whenever one of `elements` intersects the viewport.
pub fn watch_intersections<F>(
    elements: &[Element],
    options: WatchOptions<'_>,
    mut on_enter: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let once = options.once;
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            on_enter(&target);
            if once {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for element in elements {
        observer.observe(element);
    }
    // Watchers live as long as the page.
    callback.forget();
    Ok(observer)
}
