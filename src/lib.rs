#![no_std]

pub mod channel;
pub mod color;
pub mod composer;
pub mod engine;
pub mod frame;
pub mod frame_scheduler;
pub mod glyph;
pub mod intent;
pub mod mapper;
pub mod math8;
pub mod morph;

pub use composer::{ClockComposer, ClockFormat, ComposerConfig, MorphState};
pub use engine::{ClockEngine, ClockEngineConfig};
pub use frame::FrameBuffer;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use glyph::{Glyph, GlyphSet};
pub use intent::{
    AppearanceIntent, ClockIntent, IntentChannel, IntentReceiver, IntentSender,
};
pub use mapper::{DisplayGeometry, DisplayMapper, LedAppearance};
pub use morph::MorphStyle;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract drawing surface trait
///
/// Implement this trait to target different physical displays. The engine
/// only needs filled rectangles and a whole-frame presentation step.
///
/// A double-buffered implementation draws into an off-screen buffer and
/// pushes it in [`DrawSurface::present`], which makes the frame update
/// atomic. An implementation drawing straight to the panel keeps the
/// default `present` (a no-op returning `false`); rendering still works
/// but individual rectangles become visible as they land.
pub trait DrawSurface {
    /// Surface width in physical pixels
    fn width(&self) -> u32;

    /// Surface height in physical pixels
    fn height(&self) -> u32;

    /// Fill the whole surface with one color
    fn clear(&mut self, color: Rgb);

    /// Draw a filled rectangle
    ///
    /// Coordinates may lie partially or fully outside the surface; the
    /// implementation is expected to clip.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb);

    /// Present the drawn frame atomically
    ///
    /// Direct-draw surfaces have already pushed their pixels and return
    /// `false` to report the degraded mode.
    fn present(&mut self) -> bool {
        false
    }
}
