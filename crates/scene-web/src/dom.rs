use crate::constants::{CANVAS_SELECTOR, SCENE_ATTRIBUTE};
use scene_core::{resize_target, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Fits the canvas backing store to its CSS box. Returns true if it changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, dpr: f64) -> bool {
    let rect = client_rect(canvas);
    let current = (canvas.width(), canvas.height());
    match resize_target(current, rect.width, rect.height, dpr) {
        Some((w, h)) => {
            canvas.set_width(w);
            canvas.set_height(h);
            log::debug!("[dom] canvas backing set to {}x{}", w, h);
            true
        }
        None => false,
    }
}

/// Every element matching the scene selector, paired with its raw scene tag.
/// Matches that are not canvases are skipped.
pub fn scene_canvases(document: &web::Document) -> Vec<(web::HtmlCanvasElement, Option<String>)> {
    let list = match document.query_selector_all(CANVAS_SELECTOR) {
        Ok(l) => l,
        Err(e) => {
            log::error!("canvas query failed: {:?}", e);
            return Vec::new();
        }
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.get(i) else { continue };
        match node.dyn_into::<web::HtmlCanvasElement>() {
            Ok(canvas) => {
                let tag = canvas.get_attribute(SCENE_ATTRIBUTE);
                out.push((canvas, tag));
            }
            Err(_) => log::warn!("{} #{} is not a canvas; skipped", CANVAS_SELECTOR, i),
        }
    }
    out
}

#[inline]
pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}
