//! Spawn morph: destination cells materialize from the glyph centre
//!
//! No source glyph is consulted; every lit cell of the destination
//! animates out from a single origin with an eased trajectory and a
//! linear fade-in.

use libm::roundf;

use crate::frame::FrameBuffer;
use crate::glyph::{GLYPH_H, Glyph};
use crate::morph::scale_point_row;
use crate::morph::particle::{PointList, collect_points};

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn render<const W: usize, const H: usize>(
    fb: &mut FrameBuffer<W, H>,
    to: &Glyph,
    step: u16,
    total: u16,
    x0: i32,
    y0: i32,
) {
    let mut points = PointList::new();
    collect_points(to, &mut points);

    let t = if total == 0 {
        1.0
    } else {
        (f32::from(step) / f32::from(total)).clamp(0.0, 1.0)
    };

    // Ease-out so cells snap into place.
    let te = 1.0 - (1.0 - t) * (1.0 - t);
    let alpha = (255.0 * t) as u8;

    let origin_x = (to.width() - 1) as f32 * 0.5;
    let origin_y = (GLYPH_H - 1) as f32 * 0.5;

    for point in &points {
        let x = roundf(origin_x + (f32::from(point.x) - origin_x) * te) as i32;
        let y = roundf(origin_y + (f32::from(point.y) - origin_y) * te) as i32;
        fb.set(x0 + x, y0 + scale_point_row(y, H), alpha);
    }
}
