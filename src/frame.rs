use crate::canvas::CanvasSurface;
use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::dom::{self, FrameCallback};
use field_core::Field;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;

pub struct FrameContext {
    pub field: Rc<RefCell<Field>>,
    pub surface: CanvasSurface,
    pub stats: FrameStats,
    /// A requestAnimationFrame chain is currently alive for this context.
    pub loop_active: bool,
}

impl FrameContext {
    pub fn new(field: Rc<RefCell<Field>>, surface: CanvasSurface) -> Self {
        Self {
            field,
            surface,
            stats: FrameStats::new(),
            loop_active: false,
        }
    }

    /// Run one tick. Returns whether the loop should continue.
    pub fn frame(&mut self) -> bool {
        let keep_going = self.field.borrow_mut().tick(&mut self.surface);
        if keep_going {
            self.stats.record(&self.field.borrow());
        }
        keep_going
    }
}

/// Throughput counter, logged at debug level once per interval.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self, field: &Field) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed < FRAME_STATS_INTERVAL_SEC {
            return;
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "[frame] {:.1} fps, {} nodes, {} links, {} ticks",
                self.frames as f32 / elapsed,
                field.nodes().len(),
                field.links().count(),
                field.ticks()
            );
        }
        self.window_start = Instant::now();
        self.frames = 0;
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until its field stops.
/// Does nothing if a loop is already running for this context.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    {
        let mut ctx = frame_ctx.borrow_mut();
        if ctx.loop_active {
            return;
        }
        ctx.loop_active = true;
    }
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_going = frame_ctx_tick.borrow_mut().frame();
        if !keep_going {
            frame_ctx_tick.borrow_mut().loop_active = false;
            log::info!("[frame] loop ended");
            // dropping the closure breaks the Rc cycle with `tick`
            _ = tick_clone.borrow_mut().take();
            return;
        }
        dom::request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    dom::request_frame(&tick);
}
