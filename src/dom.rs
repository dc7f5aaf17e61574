use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A requestAnimationFrame callback that can reschedule itself.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Viewport size in CSS pixels; (0, 0) if the window does not report one.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

/// Schedule `cb` for the next animation frame. Returns the request id.
pub fn request_frame(cb: &FrameCallback) -> Option<i32> {
    let window = web::window()?;
    let cb = cb.borrow();
    window
        .request_animation_frame(cb.as_ref()?.as_ref().unchecked_ref())
        .ok()
}

/// All elements matching `selector` that are of type `T`.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_mouse_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(web::MouseEvent)>,
    );
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    add_listener(document, "DOMContentLoaded", move || {
        if let Some(f) = f.take() {
            f();
        }
    });
}
