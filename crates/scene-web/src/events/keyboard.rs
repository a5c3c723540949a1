use crate::constants::HATCH_INPUT_ID;
use crate::dom;
use scene_core::SharedState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, shared: &Rc<RefCell<SharedState>>) {
    let key = ev.key();
    if shared.borrow_mut().handle_key(&key) {
        log::debug!("[keys] tone_alt={}", shared.borrow().tone_alt);
    }
}

pub fn wire_global_keydown(shared: Rc<RefCell<SharedState>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &shared);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// The range control is optional; without it the hatch keeps its default angle.
pub fn wire_hatch_input(document: &web::Document, shared: Rc<RefCell<SharedState>>) {
    let Some(input) = dom::input_by_id(document, HATCH_INPUT_ID) else {
        log::debug!("#{} not present; hatch angle fixed", HATCH_INPUT_ID);
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = source.value();
        shared.borrow_mut().set_hatch_angle_from_input(&raw);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
