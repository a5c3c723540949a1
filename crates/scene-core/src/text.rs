use crate::color::Color;
use crate::constants::MIN_FONT_PX;
use crate::surface::{Font, Painter, TextAnchor};
use glam::DVec2;

/// Shrinks `font` one pixel at a time until `text` fits in `max_width` or the
/// size reaches the floor. The painter's active font follows every step.
pub fn fit_text<P: Painter>(painter: &mut P, text: &str, max_width: f64, font: &mut Font) {
    while painter.measure_text(text) > max_width && font.size_px > MIN_FONT_PX {
        font.size_px -= 1;
        painter.set_font(font);
    }
}

/// Y of the first row of a block of `count` lines centered on `center_y`.
#[inline]
pub fn block_start_y(center_y: f64, count: usize, line_height: f64) -> f64 {
    center_y - (count.saturating_sub(1) as f64 * line_height) / 2.0
}

/// Draws `lines` as a block centered on `center`, fitting each line to
/// `max_width`. A shrunk font carries over to the lines after it.
pub fn layout_lines<P: Painter>(
    painter: &mut P,
    lines: &[&str],
    center: DVec2,
    max_width: f64,
    line_height: f64,
    font: &mut Font,
    color: Color,
) {
    painter.set_font(font);
    let start_y = block_start_y(center.y, lines.len(), line_height);
    for (i, line) in lines.iter().enumerate() {
        fit_text(painter, line, max_width, font);
        let at = DVec2::new(center.x, start_y + i as f64 * line_height);
        painter.fill_text(line, at, color, TextAnchor::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_centered() {
        assert_eq!(block_start_y(100.0, 1, 20.0), 100.0);
        assert_eq!(block_start_y(100.0, 2, 20.0), 90.0);
        assert_eq!(block_start_y(100.0, 3, 20.0), 80.0);
        assert_eq!(block_start_y(100.0, 0, 20.0), 100.0);
    }
}
