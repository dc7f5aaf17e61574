use crate::constants::{GLASS_HOST_CLASS, GLASS_SELECTOR};
use crate::dom;
use anyhow::anyhow;
use field_core::glass::{self, GlassIds, GlassOptions, MAP_DATA_URL_PREFIX};
use field_core::PendingFrame;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A live glass surface. Dropping it releases its callbacks; call
/// [`GlassSurface::destroy`] first so no observer or frame still points
/// at them.
pub struct GlassSurface {
    observer: web::ResizeObserver,
    pending: Rc<Cell<PendingFrame>>,
    _on_resize: Closure<dyn FnMut(js_sys::Array, web::ResizeObserver)>,
    _update_map: Rc<Closure<dyn FnMut()>>,
}

impl GlassSurface {
    pub fn destroy(&self) {
        self.observer.disconnect();
        let mut pending = self.pending.get();
        if let Some(id) = pending.dispose() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.pending.set(pending);
    }
}

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

fn unique_suffix() -> String {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let salt = (js_sys::Math::random() * 1e12) as u64;
    format!("{n}-{salt:x}")
}

/// Apply the nav-dock glass preset to every matching element.
pub fn wire_glass_surfaces(document: &web::Document) -> Vec<GlassSurface> {
    let hosts = dom::query_all::<web::HtmlElement>(document, GLASS_SELECTOR);
    for host in &hosts {
        _ = host.class_list().add_1(GLASS_HOST_CLASS);
    }
    hosts
        .iter()
        .filter_map(
            |host| match create_glass_surface(document, host, GlassOptions::nav_dock()) {
                Ok(s) => Some(s),
                Err(e) => {
                    log::warn!("[glass] setup failed: {e:?}");
                    None
                }
            },
        )
        .collect()
}

pub fn create_glass_surface(
    document: &web::Document,
    element: &web::HtmlElement,
    opts: GlassOptions,
) -> anyhow::Result<GlassSurface> {
    let ids = GlassIds::new(&unique_suffix());

    // Move existing children into a content layer above the filter svg
    let content = document.create_element("div").map_err(js_err)?;
    content.set_class_name("glass-surface__content");
    while let Some(child) = element.first_child() {
        content.append_child(&child).map_err(js_err)?;
    }
    element.class_list().add_1("glass-surface").map_err(js_err)?;
    element
        .insert_adjacent_html("beforeend", &glass::filter_svg(&ids, &opts))
        .map_err(js_err)?;
    element.append_child(&content).map_err(js_err)?;

    let map_el = document
        .get_element_by_id(&ids.map)
        .ok_or_else(|| anyhow!("missing #{}", ids.map))?;
    update_map(element, &map_el, &ids, &opts);

    let style = element.style();
    style
        .set_property("--glass-frost", &opts.background_opacity.to_string())
        .map_err(js_err)?;
    style
        .set_property("--glass-saturation", &opts.saturation.to_string())
        .map_err(js_err)?;

    if supports_svg_backdrop(document, &ids) {
        element.class_list().add_1("glass-surface--svg").map_err(js_err)?;
        style
            .set_property("--filter-id", &ids.filter_url())
            .map_err(js_err)?;
    } else {
        element
            .class_list()
            .add_1("glass-surface--fallback")
            .map_err(js_err)?;
    }

    // Regenerate the map a frame after each size change, at most one queued
    let pending = Rc::new(Cell::new(PendingFrame::new()));
    let update: Rc<Closure<dyn FnMut()>> = {
        let element = element.clone();
        let pending = pending.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            let mut p = pending.get();
            p.fired();
            pending.set(p);
            if p.is_disposed() {
                return;
            }
            update_map(&element, &map_el, &ids, &opts);
        }) as Box<dyn FnMut()>))
    };
    let update_for_observer = update.clone();
    let pending_for_observer = pending.clone();
    let on_resize = Closure::wrap(Box::new(move |_: js_sys::Array, _: web::ResizeObserver| {
        let mut p = pending_for_observer.get();
        if !p.needs_request() {
            return;
        }
        let cb: &Closure<dyn FnMut()> = &update_for_observer;
        if let Some(id) = web::window()
            .and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
        {
            p.requested(id);
            pending_for_observer.set(p);
        }
    }) as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
    let observer = web::ResizeObserver::new(on_resize.as_ref().unchecked_ref()).map_err(js_err)?;
    observer.observe(element);

    Ok(GlassSurface {
        observer,
        pending,
        _on_resize: on_resize,
        _update_map: update,
    })
}

fn update_map(
    element: &web::HtmlElement,
    map_el: &web::Element,
    ids: &GlassIds,
    opts: &GlassOptions,
) {
    let rect = element.get_bounding_client_rect();
    let svg = glass::displacement_map_svg(rect.width(), rect.height(), ids, opts);
    let encoded: String = js_sys::encode_uri_component(&svg).into();
    _ = map_el.set_attribute("href", &format!("{MAP_DATA_URL_PREFIX}{encoded}"));
}

fn supports_svg_backdrop(document: &web::Document, ids: &GlassIds) -> bool {
    let ua = web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    if !glass::supports_svg_filters(&ua) {
        return false;
    }
    // Browsers that cannot parse the value leave the property empty
    let Ok(probe) = document.create_element("div") else {
        return false;
    };
    let Ok(probe) = probe.dyn_into::<web::HtmlElement>() else {
        return false;
    };
    let style = probe.style();
    _ = style.set_property("backdrop-filter", &ids.filter_url());
    style
        .get_property_value("backdrop-filter")
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}
