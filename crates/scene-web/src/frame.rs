use crate::painter::CanvasPainter;
use instant::Instant;
use rand::rngs::StdRng;
use scene_core::{FrameInput, PointerTracker, Scene, SharedState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since page start, shared by pointer sampling and scenes.
#[derive(Clone, Copy)]
pub struct PageClock {
    origin: Instant,
}

impl PageClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Everything one canvas needs between frames.
pub struct SurfaceContext {
    pub painter: CanvasPainter,
    /// `None` for canvases with a missing or unknown tag; they tick idle.
    pub scene: Option<Scene<CanvasPainter>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub shared: Rc<RefCell<SharedState>>,
    pub rng: StdRng,
    pub clock: PageClock,
}

impl SurfaceContext {
    pub fn frame(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let input = FrameInput {
            pointer: self.pointer.borrow().state(),
            shared: *self.shared.borrow(),
            time_ms: self.clock.now_ms(),
        };
        scene.draw(&mut self.painter, &input, &mut self.rng);
    }
}

pub fn start_loop(surface: Rc<RefCell<SurfaceContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        surface.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
