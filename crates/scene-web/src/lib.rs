#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{Painter, PointerTracker, Scene, SceneKind, SharedState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod painter;

use frame::{PageClock, SurfaceContext};
use painter::CanvasPainter;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, dpr: f64) {
    dom::sync_canvas_backing_size(canvas, dpr);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, dpr);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

    // Scene time counts from page start, not from when fonts finish loading.
    let clock = PageClock::start();
    spawn_local(async move {
        if let Err(e) = init(clock).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// The SE text raster is rendered once, so wait for web fonts first.
async fn fonts_ready(document: &web::Document) {
    let ready: Result<js_sys::Promise, JsValue> = document.fonts().ready();
    match ready {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("font loading failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("document.fonts unavailable: {:?}", e),
    }
}

async fn init(clock: PageClock) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    fonts_ready(&document).await;

    let shared = Rc::new(RefCell::new(SharedState::default()));
    events::wire_global_keydown(shared.clone());
    events::wire_hatch_input(&document, shared.clone());

    let canvases = dom::scene_canvases(&document);
    log::info!("found {} scene canvas(es)", canvases.len());
    for (index, (canvas, tag)) in canvases.into_iter().enumerate() {
        let tag = tag.as_deref();
        if let Err(e) = init_surface(index, canvas, tag, &window, &shared, clock) {
            log::error!("canvas #{} setup failed: {:?}", index, e);
        }
    }
    Ok(())
}

fn init_surface(
    index: usize,
    canvas: web::HtmlCanvasElement,
    tag: Option<&str>,
    window: &web::Window,
    shared: &Rc<RefCell<SharedState>>,
    clock: PageClock,
) -> anyhow::Result<()> {
    let dpr = window.device_pixel_ratio();
    wire_canvas_resize(&canvas, dpr);

    let painter = CanvasPainter::new(canvas.clone())?;
    let start = PointerTracker::new(painter.center(), clock.now_ms());
    let tracker = Rc::new(RefCell::new(start));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        tracker: tracker.clone(),
        clock,
    });

    let scene = resolve_scene(index, tag, &painter);
    let surface = Rc::new(RefCell::new(SurfaceContext {
        painter,
        scene,
        pointer: tracker,
        shared: shared.clone(),
        rng: StdRng::from_entropy(),
        clock,
    }));
    frame::start_loop(surface);
    Ok(())
}

/// Builds the scene named by a canvas tag. A missing or unknown tag, or a
/// scene that fails to build, yields `None` and the canvas ticks idle.
pub fn resolve_scene(
    index: usize,
    tag: Option<&str>,
    painter: &CanvasPainter,
) -> Option<Scene<CanvasPainter>> {
    let Some(tag) = tag else {
        let attr = constants::SCENE_ATTRIBUTE;
        log::warn!("canvas #{} has no {}; running idle", index, attr);
        return None;
    };
    let kind = match tag.parse::<SceneKind>() {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("canvas #{}: {}; running idle", index, e);
            return None;
        }
    };
    match Scene::new(kind, painter) {
        Ok(scene) => {
            let (w, h) = painter.size();
            log::info!("canvas #{}: scene {} at {}x{}", index, kind, w, h);
            Some(scene)
        }
        Err(e) => {
            log::error!("canvas #{}: {} failed: {}; idle", index, kind, e);
            None
        }
    }
}
