#![cfg(target_arch = "wasm32")]

use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{FrameInput, Painter, PointerState, PointerTracker};
use scene_core::{Scene, SceneKind, SharedState};
use scene_web::dom;
use scene_web::events;
use scene_web::frame::{PageClock, SurfaceContext};
use scene_web::painter::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    dom::window_document().unwrap()
}

fn mounted_canvas(css_w: u32, css_h: u32, tag: Option<&str>) -> web_sys::HtmlCanvasElement {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_class_name("scene-canvas");
    if let Some(tag) = tag {
        canvas.set_attribute("data-scene", tag).unwrap();
    }
    let style = format!("width:{}px;height:{}px;display:block", css_w, css_h);
    canvas.set_attribute("style", &style).unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn alpha_at(canvas: &web_sys::HtmlCanvasElement, x: f64, y: f64) -> u8 {
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().0[3]
}

#[wasm_bindgen_test]
fn backing_size_respects_minimum() {
    let canvas = mounted_canvas(100, 50, Some("mem"));
    dom::sync_canvas_backing_size(&canvas, 1.0);
    assert_eq!((canvas.width(), canvas.height()), (320, 200));
    // second sync with the same box is a no-op
    assert!(!dom::sync_canvas_backing_size(&canvas, 1.0));
    canvas.remove();
}

#[wasm_bindgen_test]
fn every_scene_paints_its_canvas() {
    let mut rng = StdRng::seed_from_u64(1);
    for kind in SceneKind::ALL {
        let canvas = mounted_canvas(400, 300, Some(kind.tag()));
        dom::sync_canvas_backing_size(&canvas, 1.0);
        let mut painter = CanvasPainter::new(canvas.clone()).unwrap();
        let mut scene = Scene::new(kind, &painter).unwrap();
        assert_eq!(alpha_at(&canvas, 2.0, 2.0), 0, "{kind} starts blank");

        let c = painter.center();
        let input = FrameInput {
            pointer: PointerState {
                x: c.x,
                y: c.y,
                down: true,
                speed: 0.5,
            },
            shared: SharedState::default(),
            time_ms: 16.0,
        };
        for _ in 0..3 {
            scene.draw(&mut painter, &input, &mut rng);
        }
        // every scene covers the corner, away from the pointer
        assert!(alpha_at(&canvas, 2.0, 2.0) > 0, "{kind} left it blank");
        canvas.remove();
    }
}

#[wasm_bindgen_test]
fn unknown_or_missing_tags_tick_idle() {
    for tag in [Some("bogus"), None] {
        let canvas = mounted_canvas(320, 200, tag);
        dom::sync_canvas_backing_size(&canvas, 1.0);
        let painter = CanvasPainter::new(canvas.clone()).unwrap();
        let scene = scene_web::resolve_scene(0, tag, &painter);
        assert!(scene.is_none());

        let start = PointerTracker::new(painter.center(), 0.0);
        let mut surface = SurfaceContext {
            painter,
            scene,
            pointer: Rc::new(RefCell::new(start)),
            shared: Rc::new(RefCell::new(SharedState::default())),
            rng: StdRng::seed_from_u64(3),
            clock: PageClock::start(),
        };
        for _ in 0..3 {
            surface.frame();
        }
        assert_eq!(alpha_at(&canvas, 160.0, 100.0), 0, "{tag:?}");
        assert_eq!(alpha_at(&canvas, 2.0, 2.0), 0, "{tag:?}");
        canvas.remove();
    }
}

#[wasm_bindgen_test]
fn discovery_skips_non_canvas_matches() {
    let decoy = document().create_element("div").unwrap();
    decoy.set_class_name("scene-canvas");
    decoy.set_attribute("data-scene", "mem").unwrap();
    document().body().unwrap().append_child(&decoy).unwrap();
    let bogus = mounted_canvas(320, 200, Some("bogus"));
    let untagged = mounted_canvas(320, 200, None);

    let found = dom::scene_canvases(&document());
    let tags: Vec<Option<String>> = found.into_iter().map(|(_, tag)| tag).collect();
    assert_eq!(tags, vec![Some("bogus".to_string()), None]);

    decoy.remove();
    bogus.remove();
    untagged.remove();
}

#[wasm_bindgen_test]
fn hatch_wiring_is_inert_without_the_control() {
    assert!(document().get_element_by_id("hatchAngle").is_none());
    let shared = Rc::new(RefCell::new(SharedState::default()));
    events::wire_hatch_input(&document(), shared.clone());
    // no listener holds on to the state
    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(shared.borrow().hatch_angle_deg, 30.0);
}

#[wasm_bindgen_test]
fn hatch_control_updates_shared_angle() {
    let input = document()
        .create_element("input")
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_id("hatchAngle");
    document().body().unwrap().append_child(&input).unwrap();
    let shared = Rc::new(RefCell::new(SharedState::default()));
    events::wire_hatch_input(&document(), shared.clone());

    for (raw, expected) in [("60", 60.0), ("oops", 60.0), ("-15", -15.0)] {
        input.set_value(raw);
        let ev = web_sys::Event::new("input").unwrap();
        input.dispatch_event(&ev).unwrap();
        assert_eq!(shared.borrow().hatch_angle_deg, expected, "after {raw:?}");
    }
    input.remove();
}
