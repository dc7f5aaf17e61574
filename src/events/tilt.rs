use crate::constants::TILT_SELECTOR;
use crate::dom::{self, FrameCallback};
use field_core::{TiltParams, TiltState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

struct TiltCard {
    el: web::HtmlElement,
    state: TiltState,
    /// Outstanding animation frame request, if any.
    pending: Option<i32>,
}

impl TiltCard {
    fn ensure_scheduled(&mut self, animate: &FrameCallback) {
        if self.pending.is_none() {
            self.pending = dom::request_frame(animate);
        }
    }
}

/// Attach hover tilt to every card on the page. Returns the number of cards.
pub fn wire_tilt_cards(document: &web::Document, params: TiltParams) -> usize {
    let cards = dom::query_all::<web::HtmlElement>(document, TILT_SELECTOR);
    for el in &cards {
        wire_card(el.clone(), params.clone());
    }
    cards.len()
}

fn wire_card(el: web::HtmlElement, params: TiltParams) {
    _ = el.style().set_property("will-change", "transform");
    let card = Rc::new(RefCell::new(TiltCard {
        el: el.clone(),
        state: TiltState::new(params),
        pending: None,
    }));

    // Per-card frame loop; only runs while the pose is still moving
    let animate: FrameCallback = Rc::new(RefCell::new(None));
    {
        let card = card.clone();
        let animate_self = animate.clone();
        *animate.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut c = card.borrow_mut();
            c.pending = None;
            let moving = c.state.step();
            _ = c.el.style().set_property("transform", &c.state.transform_css());
            if moving {
                c.ensure_scheduled(&animate_self);
            }
        }) as Box<dyn FnMut()>));
    }

    {
        let card = card.clone();
        let animate = animate.clone();
        dom::add_mouse_listener(&el, "mousemove", move |ev| {
            let mut c = card.borrow_mut();
            let rect = c.el.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            c.state.pointer_move(x, y, rect.width(), rect.height());
            c.ensure_scheduled(&animate);
        });
    }

    dom::add_mouse_listener(&el, "mouseleave", move |_| {
        let mut c = card.borrow_mut();
        c.state.pointer_leave();
        c.ensure_scheduled(&animate);
    });
}
