//! Per-cell crossfade between two glyphs

use crate::frame::FrameBuffer;
use crate::glyph::{GLYPH_H, Glyph};
use crate::math8::{fade_in8, fade_out8};

/// Render one crossfade frame
///
/// Cells lit in both glyphs stay at full intensity; cells lit only in the
/// source fade out, cells lit only in the destination fade in, and cells
/// lit in neither are not drawn.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn render<const W: usize, const H: usize>(
    fb: &mut FrameBuffer<W, H>,
    from: &Glyph,
    to: &Glyph,
    step: u16,
    total: u16,
    x0: i32,
    y0: i32,
) {
    let width = from.width().max(to.width());
    for y_out in 0..H {
        let y_src = y_out * GLYPH_H / H;
        for x in 0..width {
            let value = match (from.is_on(x, y_src), to.is_on(x, y_src)) {
                (true, true) => 255,
                (true, false) => fade_out8(step, total),
                (false, true) => fade_in8(step, total),
                (false, false) => continue,
            };
            if value == 0 {
                continue;
            }
            fb.set(x0 + x as i32, y0 + y_out as i32, value);
        }
    }
}
