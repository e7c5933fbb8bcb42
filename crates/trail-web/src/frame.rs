use crate::bar::NeonBar;
use crate::paint;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trail_core::{FlickerDriver, GlowStyle, TrailEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation tick touches. Engine/canvas are `None` on
/// touch-only devices, where only the flicker bar animates.
pub struct FrameContext {
    pub engine: Option<Rc<RefCell<TrailEngine>>>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub ctx2d: Option<web::CanvasRenderingContext2d>,
    pub flicker: Rc<RefCell<FlickerDriver>>,
    pub bar: Option<NeonBar>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f32() * 1000.0;
        let now_ms = js_sys::Date::now();

        let intensity = self.flicker.borrow_mut().tick(dt_ms);
        if let Some(bar) = &self.bar {
            bar.apply(GlowStyle::from_intensity(intensity));
        }

        if let (Some(engine), Some(canvas), Some(ctx)) =
            (&self.engine, &self.canvas, &self.ctx2d)
        {
            let mut eng = engine.borrow_mut();
            eng.frame(now_ms, dt_ms);
            paint::paint(ctx, canvas, &eng);
        }
    }
}

/// Self-chaining requestAnimationFrame loop. Clearing `running` lets the
/// pending callback return without rescheduling, ending the chain.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
