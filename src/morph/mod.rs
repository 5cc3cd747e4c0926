//! Digit transition algorithms
//!
//! Three morphs write per-cell intensities into the framebuffer given the
//! glyphs involved and a discrete progress step. Positions that are not
//! transitioning bypass all of them through [`draw_static`]. Everything
//! here runs on fixed-capacity buffers; nothing allocates.

mod crossfade;
mod particle;
mod spawn;

pub use particle::{MatchList, Point, PointList, collect_points, greedy_match};

use crate::frame::FrameBuffer;
use crate::glyph::{GLYPH_H, Glyph};

const MORPH_NAME_CROSSFADE: &str = "crossfade";
const MORPH_NAME_PARTICLE: &str = "particle";
const MORPH_NAME_SPAWN: &str = "spawn";

const MORPH_ID_CROSSFADE: u8 = 0;
const MORPH_ID_PARTICLE: u8 = 1;
const MORPH_ID_SPAWN: u8 = 2;

/// Transition algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MorphStyle {
    /// Per-cell linear crossfade between the two glyphs
    Crossfade = MORPH_ID_CROSSFADE,
    /// Lit cells glide from source to destination positions
    Particle = MORPH_ID_PARTICLE,
    /// Destination cells materialize from the glyph centre
    Spawn = MORPH_ID_SPAWN,
}

impl MorphStyle {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MORPH_ID_CROSSFADE => Self::Crossfade,
            MORPH_ID_PARTICLE => Self::Particle,
            MORPH_ID_SPAWN => Self::Spawn,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crossfade => MORPH_NAME_CROSSFADE,
            Self::Particle => MORPH_NAME_PARTICLE,
            Self::Spawn => MORPH_NAME_SPAWN,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MORPH_NAME_CROSSFADE => Some(Self::Crossfade),
            MORPH_NAME_PARTICLE => Some(Self::Particle),
            MORPH_NAME_SPAWN => Some(Self::Spawn),
            _ => None,
        }
    }

    /// Render one transition frame for a digit position
    ///
    /// `step` counts 0..=`total`; the glyph box's top-left corner lands at
    /// `(x0, y0)` in framebuffer coordinates.
    pub fn render<const W: usize, const H: usize>(
        self,
        fb: &mut FrameBuffer<W, H>,
        from: &Glyph,
        to: &Glyph,
        step: u16,
        total: u16,
        x0: i32,
        y0: i32,
    ) {
        match self {
            Self::Crossfade => crossfade::render(fb, from, to, step, total, x0, y0),
            Self::Particle => particle::render(fb, from, to, step, total, x0, y0),
            Self::Spawn => spawn::render(fb, to, step, total, x0, y0),
        }
    }
}

/// Map a glyph-space row to a framebuffer row: `floor(y * H / GLYPH_H)`
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn scale_point_row(y: i32, logical_h: usize) -> i32 {
    y * logical_h as i32 / GLYPH_H as i32
}

/// Draw a glyph without animation at a fixed intensity
///
/// Iterates framebuffer rows and maps each back to a glyph row, so
/// scaling up past the native glyph height duplicates rows instead of
/// leaving gaps.
#[allow(clippy::cast_possible_wrap)]
pub fn draw_static<const W: usize, const H: usize>(
    fb: &mut FrameBuffer<W, H>,
    glyph: &Glyph,
    x0: i32,
    y0: i32,
    intensity: u8,
) {
    for y_out in 0..H {
        let y_src = y_out * GLYPH_H / H;
        for x in 0..glyph.width() {
            if glyph.is_on(x, y_src) {
                fb.set(x0 + x as i32, y0 + y_out as i32, intensity);
            }
        }
    }
}
