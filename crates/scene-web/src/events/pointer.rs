use crate::dom;
use crate::frame::PageClock;
use glam::DVec2;
use scene_core::{client_to_surface, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub clock: PageClock,
}

/// Client coordinates of `ev` in the canvas's backing pixels.
#[inline]
pub fn pointer_canvas_px(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
) -> Option<DVec2> {
    let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
    client_to_surface(
        client,
        dom::client_rect(canvas),
        (canvas.width(), canvas.height()),
    )
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev| {
        if let Some(pos) = pointer_canvas_px(&ev, &w2.canvas) {
            w2.tracker.borrow_mut().on_move(pos, w2.clock.now_ms());
        }
    });
}

fn wire_pointerdown(w: &PointerWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev| {
        let now = w2.clock.now_ms();
        let mut tracker = w2.tracker.borrow_mut();
        match pointer_canvas_px(&ev, &w2.canvas) {
            Some(pos) => tracker.on_down(pos, now),
            None => {
                let at = tracker.state().pos();
                tracker.on_down(at, now);
            }
        }
    });
}

fn wire_pointerup(w: &PointerWiring) {
    let tracker = w.tracker.clone();
    listen(&w.canvas, "pointerup", move |_ev| {
        tracker.borrow_mut().on_up();
    });
}

fn wire_pointerleave(w: &PointerWiring) {
    let tracker = w.tracker.clone();
    listen(&w.canvas, "pointerleave", move |_ev| {
        tracker.borrow_mut().on_leave();
    });
}
