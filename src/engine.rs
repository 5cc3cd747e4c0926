//! Clock engine - the main orchestrator
//!
//! Owns the framebuffer, the composer and the mapper, and drains the
//! configuration intent channel once per tick. One instance drives one
//! display; the strict per-frame order is: feed time, tick (clear +
//! compose), render.

use crate::DrawSurface;
use crate::composer::{ClockComposer, ComposerConfig};
use crate::frame::FrameBuffer;
use crate::intent::{AppearanceIntent, ClockIntent, IntentReceiver};
use crate::mapper::{DisplayMapper, LedAppearance};

/// Configuration for the clock engine
#[derive(Debug, Clone, Default)]
pub struct ClockEngineConfig {
    pub composer: ComposerConfig,
    pub appearance: LedAppearance,
    /// Display rows reserved below the matrix for an external status bar
    pub status_bar_h: u32,
}

/// The rendering engine for one emulated LED matrix clock
///
/// `W` and `H` are the logical matrix dimensions.
pub struct ClockEngine<'a, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize> {
    intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
    frame: FrameBuffer<W, H>,
    composer: ClockComposer,
    mapper: DisplayMapper,
}

impl<'a, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
    ClockEngine<'a, W, H, INTENT_CHANNEL_SIZE>
{
    /// Create a new engine; glyphs are built here, once
    pub fn new(intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>, config: &ClockEngineConfig) -> Self {
        Self {
            intents,
            frame: FrameBuffer::new(),
            composer: ClockComposer::new(config.composer.clone()),
            mapper: DisplayMapper::new(config.appearance, config.status_bar_h),
        }
    }

    /// Feed the current wall-clock time
    ///
    /// Safe to call more often than frames render; digit changes are
    /// picked up immediately, transitions start on the next tick.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.composer.set_time(hour, minute, second);
    }

    /// Advance one animation frame
    ///
    /// Drains pending intents, clears the framebuffer and redraws the
    /// clock row through the composer.
    pub fn tick(&mut self) {
        self.process_intents();
        self.frame.clear(0);
        self.composer.tick(&mut self.frame);
    }

    /// Render the current frame to a physical surface
    pub fn render_to<S: DrawSurface>(&mut self, surface: &mut S) {
        self.mapper.render(&self.frame, surface);
    }

    /// Read-only snapshot of the logical framebuffer
    pub const fn framebuffer(&self) -> &FrameBuffer<W, H> {
        &self.frame
    }

    pub const fn composer(&self) -> &ClockComposer {
        &self.composer
    }

    pub const fn mapper(&self) -> &DisplayMapper {
        &self.mapper
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self) {
        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ClockIntent::Appearance(patch) => self.apply_appearance(&patch),
                ClockIntent::MorphStyle(style) => self.composer.set_morph_style(style),
                ClockIntent::Use24h(use_24h) => self.composer.set_use_24h(use_24h),
                ClockIntent::BlinkColons(blink) => self.composer.set_blink_colons(blink),
            }
        }
    }

    fn apply_appearance(&mut self, patch: &AppearanceIntent) {
        let mut appearance = *self.mapper.appearance();
        if let Some(diameter) = patch.diameter {
            appearance.diameter = diameter;
        }
        if let Some(gap) = patch.gap {
            appearance.gap = gap;
        }
        if let Some(color) = patch.color {
            appearance.color = color;
        }
        if let Some(brightness) = patch.brightness {
            appearance.brightness = brightness;
        }
        self.mapper.set_appearance(appearance);
    }
}
