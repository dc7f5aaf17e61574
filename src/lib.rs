#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, FIELD_DATA_PREFIX, LOG_LEVEL_ATTR};
use field_core::{Field, FieldParams, TiltParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod glass;

thread_local! {
    static BACKGROUND: RefCell<Option<Rc<RefCell<frame::FrameContext>>>> = const { RefCell::new(None) };
    static GLASS: RefCell<Vec<glass::GlassSurface>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = field_core::params::log_level(page_log_level().as_deref());
    console_log::init_with_level(level).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The three effects are independent; one failing leaves the others running
    match init_background(&window, &document) {
        Ok(ctx) => {
            frame::start_loop(ctx.clone());
            BACKGROUND.with(|b| *b.borrow_mut() = Some(ctx));
        }
        Err(e) => log::warn!("[background] disabled: {:?}", e),
    }

    let tilt_params = TiltParams::default();
    if let Err(e) = tilt_params.validate() {
        log::warn!("[tilt] disabled: {e}");
    } else {
        let cards = events::wire_tilt_cards(&document, tilt_params);
        log::info!("[tilt] {} cards", cards);
    }

    let doc_for_glass = document.clone();
    dom::on_dom_ready(&document, move || {
        let surfaces = glass::wire_glass_surfaces(&doc_for_glass);
        log::info!("[glass] {} surfaces", surfaces.len());
        GLASS.with(|g| g.borrow_mut().extend(surfaces));
    });

    Ok(())
}

// e.g. <html data-log-level="debug">
fn page_log_level() -> Option<String> {
    web::window()?
        .document()?
        .document_element()?
        .get_attribute(LOG_LEVEL_ATTR)
}

fn init_background(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Rc<RefCell<frame::FrameContext>>> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;

    // e.g. <canvas id="nn-bg" data-field-max-nodes="60">
    let params = FieldParams::with_overrides(|key| {
        canvas.get_attribute(&format!("{FIELD_DATA_PREFIX}{key}"))
    })
    .or_default();

    let (width, height) = dom::viewport_size(window);
    dom::sync_canvas_backing_size(&canvas, width, height);
    let mut field = Field::from_entropy(params);
    field.initialize(width, height);
    log::info!(
        "[background] {}x{} -> {} nodes",
        width,
        height,
        field.nodes().len()
    );

    let field = Rc::new(RefCell::new(field));
    events::wire_viewport_resize(window, canvas, field.clone());
    Ok(Rc::new(RefCell::new(frame::FrameContext::new(field, surface))))
}

/// Stop the background animation after the current frame.
#[wasm_bindgen]
pub fn stop_background() {
    BACKGROUND.with(|b| {
        if let Some(ctx) = b.borrow().as_ref() {
            ctx.borrow().field.borrow_mut().stop();
        }
    });
}

/// Restart a stopped background animation.
#[wasm_bindgen]
pub fn resume_background() {
    BACKGROUND.with(|b| {
        if let Some(ctx) = b.borrow().as_ref() {
            ctx.borrow().field.borrow_mut().resume();
            frame::start_loop(ctx.clone());
        }
    });
}

/// Disconnect every glass surface's resize observer, cancel its queued map
/// update and release it.
#[wasm_bindgen]
pub fn destroy_glass_surfaces() {
    GLASS.with(|g| {
        for surface in g.borrow_mut().drain(..) {
            surface.destroy();
        }
    });
}
