use crate::dom;
use field_core::Field;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas at viewport size and repopulate the field on resize.
///
/// Runs on the main thread between animation frames, so it never overlaps
/// a tick.
pub fn wire_viewport_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<Field>>,
) {
    dom::add_listener(window, "resize", move || {
        let Some(w) = web::window() else {
            return;
        };
        let (width, height) = dom::viewport_size(&w);
        dom::sync_canvas_backing_size(&canvas, width, height);
        let mut field = field.borrow_mut();
        field.on_resize(width, height);
        log::info!(
            "[resize] {}x{} -> {} nodes",
            width,
            height,
            field.nodes().len()
        );
    });
}
