use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::TrailEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Pointer listener registrations, kept alive for the session. `detach`
/// removes them from the document so teardown leaks no handlers against
/// the global input surface.
pub struct PointerHandles {
    move_closure: PointerClosure,
    enter_closure: PointerClosure,
    leave_closure: PointerClosure,
    down_closure: PointerClosure,
    up_closure: PointerClosure,
}

impl PointerHandles {
    pub fn detach(&self, document: &web::Document) {
        let pairs: [(&str, &PointerClosure); 5] = [
            ("pointermove", &self.move_closure),
            ("pointerenter", &self.enter_closure),
            ("pointerleave", &self.leave_closure),
            ("pointerdown", &self.down_closure),
            ("pointerup", &self.up_closure),
        ];
        for (name, closure) in pairs {
            let _ = document
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Attach the five pointer listeners that feed the engine. Handlers only
/// write the raw-position cell and flags; all per-frame work happens in
/// the animation loop.
pub fn wire_pointer_handlers(
    document: &web::Document,
    engine: Rc<RefCell<TrailEngine>>,
) -> PointerHandles {
    let move_closure = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            engine
                .borrow_mut()
                .pointer_moved(client_pos(&ev), js_sys::Date::now());
        }) as Box<dyn FnMut(_)>)
    };
    let enter_closure = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            engine
                .borrow_mut()
                .pointer_entered(client_pos(&ev), js_sys::Date::now());
        }) as Box<dyn FnMut(_)>)
    };
    let leave_closure = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            engine.borrow_mut().pointer_left();
        }) as Box<dyn FnMut(_)>)
    };
    let down_closure = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            engine.borrow_mut().set_pressed(true);
        }) as Box<dyn FnMut(_)>)
    };
    let up_closure = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            engine.borrow_mut().set_pressed(false);
        }) as Box<dyn FnMut(_)>)
    };

    let handles = PointerHandles {
        move_closure,
        enter_closure,
        leave_closure,
        down_closure,
        up_closure,
    };
    let pairs: [(&str, &PointerClosure); 5] = [
        ("pointermove", &handles.move_closure),
        ("pointerenter", &handles.enter_closure),
        ("pointerleave", &handles.leave_closure),
        ("pointerdown", &handles.down_closure),
        ("pointerup", &handles.up_closure),
    ];
    for (name, closure) in pairs {
        let _ =
            document.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    handles
}
