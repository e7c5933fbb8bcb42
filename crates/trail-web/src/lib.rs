#![cfg(target_arch = "wasm32")]

mod bar;
mod dom;
mod events;
mod frame;
mod paint;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trail_core::{FlickerDriver, TrailConfig, TrailEngine, GlowStyle, INTENSITY_FULL};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

struct Session {
    running: Rc<Cell<bool>>,
    pointer_handles: Option<events::PointerHandles>,
    document: web::Document,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trail-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Tear the effect down: ends the frame-callback chain and removes all
/// pointer listeners so nothing keeps running against a detached surface.
#[wasm_bindgen]
pub fn stop() {
    SESSION.with(|slot| {
        if let Some(session) = slot.borrow_mut().take() {
            session.running.set(false);
            if let Some(handles) = session.pointer_handles {
                handles.detach(&session.document);
            }
            log::info!("trail-web stopped");
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Capability gates: touch-only devices never run the trail at all, and
    // a reduced-motion preference pins every decorative effect at its end
    // state instead of animating.
    let hover = dom::media_query_matches("(hover: hover)");
    let reduced_motion = dom::media_query_matches("(prefers-reduced-motion: reduce)");
    let trail_enabled = hover && !reduced_motion;
    if !hover {
        log::info!("no hover-capable pointer; trail disabled");
    }
    if reduced_motion {
        log::info!("reduced motion preferred; effects pinned to end state");
    }

    let config = TrailConfig::default();
    config.validate()?;

    let bar = bar::NeonBar::locate(&document, config.neon_color);
    if !trail_enabled && (reduced_motion || bar.is_none()) {
        // Nothing will ever animate; light the bar and skip the loop.
        if let Some(bar) = &bar {
            bar.apply(GlowStyle::from_intensity(INTENSITY_FULL));
        }
        return Ok(());
    }

    let flicker = Rc::new(RefCell::new(FlickerDriver::new(
        js_sys::Date::now() as u64,
        reduced_motion,
    )));

    let mut engine = None;
    let mut canvas = None;
    let mut ctx2d = None;
    let mut pointer_handles = None;
    if trail_enabled {
        let canvas_el: web::HtmlCanvasElement = document
            .get_element_by_id("trail-canvas")
            .ok_or_else(|| anyhow::anyhow!("missing #trail-canvas"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
        dom::sync_canvas_backing_size(&canvas_el);
        dom::wire_resize_sync(&canvas_el);

        let ctx = canvas_el
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

        let eng = Rc::new(RefCell::new(TrailEngine::new(config)));
        pointer_handles = Some(events::wire_pointer_handlers(&document, eng.clone()));
        engine = Some(eng);
        canvas = Some(canvas_el);
        ctx2d = Some(ctx);
    }

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas,
        ctx2d,
        flicker,
        bar,
        last_instant: instant::Instant::now(),
    }));
    frame::start_loop(frame_ctx, running.clone());

    SESSION.with(|slot| {
        *slot.borrow_mut() = Some(Session {
            running,
            pointer_handles,
            document,
        });
    });
    Ok(())
}
