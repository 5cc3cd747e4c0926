//! Particle morph with greedy nearest-neighbour matching
//!
//! Lit cells of the source glyph glide to lit cells of the destination.
//! Matching is a cheap greedy pass, not a minimum-cost assignment; for
//! glyph-sized point sets the difference is invisible and the heuristic's
//! look is part of the animation.

use heapless::Vec;
use libm::roundf;

use crate::frame::FrameBuffer;
use crate::glyph::{GLYPH_H, Glyph, MAX_GLYPH_POINTS};
use crate::math8::{fade_in8, fade_out8};
use crate::morph::scale_point_row;

/// A lit glyph cell in glyph-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

/// Fixed-capacity list of lit cells, rebuilt each morph frame
pub type PointList = Vec<Point, MAX_GLYPH_POINTS>;

/// Destination indices matched to each source point, in source order
pub type MatchList = Vec<u16, MAX_GLYPH_POINTS>;

/// Collect lit cells in row-major scan order
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn collect_points(glyph: &Glyph, out: &mut PointList) {
    out.clear();
    for y in 0..GLYPH_H {
        for x in 0..glyph.width() {
            if glyph.is_on(x, y) {
                let _ = out.push(Point {
                    x: x as i8,
                    y: y as i8,
                });
            }
        }
    }
}

const fn dist2(a: Point, b: Point) -> i32 {
    let dx = a.x as i32 - b.x as i32;
    let dy = a.y as i32 - b.y as i32;
    dx * dx + dy * dy
}

/// Greedy nearest-neighbour matching from source to destination points
///
/// Sources are visited in scan order; each takes the nearest still-unused
/// destination by squared distance. Ties go to the destination that comes
/// first in scan order. `out[i]` is the destination index matched to
/// source `i`; its length is `min(from.len(), to.len())`.
#[allow(clippy::cast_possible_truncation)]
pub fn greedy_match(from: &[Point], to: &[Point], out: &mut MatchList) {
    out.clear();
    let mut used = [false; MAX_GLYPH_POINTS];

    let pairs = from.len().min(to.len());
    for source in from.iter().take(pairs) {
        let mut best_j = 0;
        let mut best_d = i32::MAX;
        for (j, candidate) in to.iter().enumerate() {
            if used[j] {
                continue;
            }
            let d = dist2(*source, *candidate);
            if d < best_d {
                best_d = d;
                best_j = j;
            }
        }
        used[best_j] = true;
        let _ = out.push(best_j as u16);
    }
}

/// Render one particle-morph frame
///
/// Matched pairs draw at full intensity on the interpolated position.
/// Destination points left unmatched fade in; source points left
/// unmatched (always the tail of the scan order) fade out in place.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn render<const W: usize, const H: usize>(
    fb: &mut FrameBuffer<W, H>,
    from_glyph: &Glyph,
    to_glyph: &Glyph,
    step: u16,
    total: u16,
    x0: i32,
    y0: i32,
) {
    let mut from_pts = PointList::new();
    let mut to_pts = PointList::new();
    collect_points(from_glyph, &mut from_pts);
    collect_points(to_glyph, &mut to_pts);

    let mut matches = MatchList::new();
    greedy_match(&from_pts, &to_pts, &mut matches);

    let mut matched = [false; MAX_GLYPH_POINTS];
    for &j in &matches {
        matched[j as usize] = true;
    }

    let t = if total == 0 {
        1.0
    } else {
        f32::from(step) / f32::from(total)
    };

    // Matched particles glide; motion alone carries the morph.
    for (source, &j) in from_pts.iter().zip(matches.iter()) {
        let dest = to_pts[j as usize];
        let x = roundf(f32::from(source.x) + f32::from(dest.x - source.x) * t) as i32;
        let y = roundf(f32::from(source.y) + f32::from(dest.y - source.y) * t) as i32;
        fb.set(x0 + x, y0 + scale_point_row(y, H), 255);
    }

    let fade_in = fade_in8(step, total);
    for (j, dest) in to_pts.iter().enumerate() {
        if matched[j] {
            continue;
        }
        fb.set(
            x0 + i32::from(dest.x),
            y0 + scale_point_row(i32::from(dest.y), H),
            fade_in,
        );
    }

    let fade_out = fade_out8(step, total);
    for source in from_pts.iter().skip(matches.len()) {
        fb.set(
            x0 + i32::from(source.x),
            y0 + scale_point_row(i32::from(source.y), H),
            fade_out,
        );
    }
}
