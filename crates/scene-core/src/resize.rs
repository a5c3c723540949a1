use crate::constants::{DPR_MAX, DPR_MIN, MIN_BACKING_HEIGHT, MIN_BACKING_WIDTH};

/// Device pixel ratio clamped to the range the scenes are tuned for.
#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Backing pixel size for a surface displayed at `css_width` x `css_height`.
/// `dpr` is clamped first; each side is floored then raised to its minimum.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_dpr(dpr);
    let side = |css: f64, min: u32| {
        let px = (css * dpr).floor();
        if px.is_finite() && px > min as f64 {
            px.min(u32::MAX as f64) as u32
        } else {
            min
        }
    };
    (
        side(css_width, MIN_BACKING_WIDTH),
        side(css_height, MIN_BACKING_HEIGHT),
    )
}

/// New backing size if it differs from `current`; `None` means leave the
/// surface alone (resizing a canvas clears it).
pub fn resize_target(
    current: (u32, u32),
    css_width: f64,
    css_height: f64,
    dpr: f64,
) -> Option<(u32, u32)> {
    let next = backing_size(css_width, css_height, dpr);
    if next == current {
        return None;
    }
    log::debug!("[resize] backing {:?} -> {:?}", current, next);
    Some(next)
}
