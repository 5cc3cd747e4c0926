//! Clock face composition
//!
//! Tracks the target digit and transition progress for every digit
//! position, lays the glyph row out centred in the logical matrix and
//! draws each position through the selected morph or the static path.

use heapless::Vec;

use crate::frame::FrameBuffer;
use crate::glyph::{COLON_W, DIGIT_W, GlyphSet};
use crate::morph::{self, MorphStyle};

/// Number of digit positions in HH:MM:SS
pub const MAX_POSITIONS: usize = 6;

/// Gap between adjacent glyphs, in logical cells
const DIGIT_GAP: usize = 1;

/// Digits plus colons in the widest format
const MAX_SLOTS: usize = 8;

/// Default transition length in frames
pub const DEFAULT_MORPH_STEPS: u16 = 20;

/// Time-of-day display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    /// Six digits, two colons
    HourMinuteSecond,
    /// Four digits, one colon
    HourMinute,
}

impl ClockFormat {
    const fn digit_count(self) -> usize {
        match self {
            Self::HourMinuteSecond => 6,
            Self::HourMinute => 4,
        }
    }
}

/// Per-position transition state
///
/// Retargeting resets the step counter; the counter then advances once
/// per frame up to the configured total, after which the position is
/// settled and renders through the static path.
#[derive(Debug, Clone, Copy)]
pub struct MorphState {
    current: u8,
    previous: u8,
    step: u16,
}

impl MorphState {
    const fn settled_on(digit: u8, total: u16) -> Self {
        Self {
            current: digit,
            previous: digit,
            step: total,
        }
    }

    /// Digit this position is showing or transitioning towards
    pub const fn current(&self) -> u8 {
        self.current
    }

    /// Digit shown before the last retarget
    pub const fn previous(&self) -> u8 {
        self.previous
    }

    /// Progress step within the running transition
    pub const fn step(&self) -> u16 {
        self.step
    }

    /// Begin a transition towards a new digit
    pub const fn retarget(&mut self, digit: u8) {
        self.previous = self.current;
        self.current = digit;
        self.step = 0;
    }

    /// Advance one frame, saturating at `total`
    pub const fn advance(&mut self, total: u16) {
        if self.step < total {
            self.step += 1;
        }
    }

    /// Whether the transition has finished
    pub const fn settled(&self, total: u16) -> bool {
        self.step >= total
    }
}

/// Configuration for the clock composer
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    pub format: ClockFormat,
    pub use_24h: bool,
    pub morph: MorphStyle,
    pub morph_steps: u16,
    pub blink_colons: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            format: ClockFormat::HourMinuteSecond,
            use_24h: true,
            morph: MorphStyle::Spawn,
            morph_steps: DEFAULT_MORPH_STEPS,
            blink_colons: true,
        }
    }
}

#[derive(Clone, Copy)]
enum SlotKind {
    Digit(usize),
    Colon,
}

#[derive(Clone, Copy)]
struct Slot {
    kind: SlotKind,
    x: usize,
}

/// Lays out and animates the formatted time
pub struct ClockComposer {
    glyphs: GlyphSet,
    config: ComposerConfig,
    positions: [MorphState; MAX_POSITIONS],
    last_time: (u8, u8, u8),
}

impl ClockComposer {
    pub fn new(config: ComposerConfig) -> Self {
        let settled = MorphState::settled_on(0, config.morph_steps);
        Self {
            glyphs: GlyphSet::build(),
            config,
            positions: [settled; MAX_POSITIONS],
            last_time: (0, 0, 0),
        }
    }

    /// Feed the current wall-clock time
    ///
    /// Positions whose digit value changed reset to step 0; positions
    /// already mid-transition keep their progress.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.last_time = (hour, minute, second);
        let digits = self.format_digits(hour, minute, second);
        let count = self.config.format.digit_count();
        for (state, &digit) in self.positions.iter_mut().zip(digits.iter()).take(count) {
            if state.current != digit {
                state.retarget(digit);
            }
        }
    }

    /// Advance every running transition one step and draw the clock row
    pub fn tick<const W: usize, const H: usize>(&mut self, fb: &mut FrameBuffer<W, H>) {
        let total = self.config.morph_steps;
        for state in &mut self.positions {
            state.advance(total);
        }

        let colon_visible = !self.config.blink_colons || self.last_time.2 % 2 == 0;

        let (slots, origin) = self.layout(W);
        for slot in &slots {
            #[allow(clippy::cast_possible_wrap)]
            let x = origin + slot.x as i32;
            match slot.kind {
                SlotKind::Digit(index) => self.draw_position(fb, index, x),
                SlotKind::Colon => {
                    if colon_visible {
                        morph::draw_static(fb, self.glyphs.colon(), x, 0, 255);
                    }
                }
            }
        }
    }

    /// Per-position transition states
    pub const fn positions(&self) -> &[MorphState; MAX_POSITIONS] {
        &self.positions
    }

    pub const fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub const fn set_morph_style(&mut self, style: MorphStyle) {
        self.config.morph = style;
    }

    pub const fn set_blink_colons(&mut self, blink: bool) {
        self.config.blink_colons = blink;
    }

    /// Switch 12/24-hour display and re-derive digits from the last time
    pub fn set_use_24h(&mut self, use_24h: bool) {
        self.config.use_24h = use_24h;
        let (hour, minute, second) = self.last_time;
        self.set_time(hour, minute, second);
    }

    fn draw_position<const W: usize, const H: usize>(
        &self,
        fb: &mut FrameBuffer<W, H>,
        index: usize,
        x: i32,
    ) {
        let total = self.config.morph_steps;
        let state = &self.positions[index];
        let to = self.glyphs.digit(state.current);
        if state.settled(total) {
            morph::draw_static(fb, to, x, 0, 255);
        } else {
            let from = self.glyphs.digit(state.previous);
            self.config
                .morph
                .render(fb, from, to, state.step, total, x, 0);
        }
    }

    fn format_digits(&self, hour: u8, minute: u8, second: u8) -> [u8; MAX_POSITIONS] {
        let hour = if self.config.use_24h {
            hour % 24
        } else {
            match hour % 12 {
                0 => 12,
                h => h,
            }
        };
        [
            hour / 10,
            hour % 10,
            minute / 10,
            minute % 10,
            second / 10,
            second % 10,
        ]
    }

    /// Slot sequence with x offsets plus the centred row origin
    ///
    /// A gap is inserted after every glyph whose successor is a digit, so
    /// colons sit tight against the preceding digit pair. A row wider
    /// than the matrix clamps to origin 0 and overflow cells are dropped
    /// by the framebuffer's bounds check.
    #[allow(clippy::cast_possible_wrap)]
    fn layout(&self, matrix_w: usize) -> (Vec<Slot, MAX_SLOTS>, i32) {
        let kinds: &[SlotKind] = match self.config.format {
            ClockFormat::HourMinuteSecond => &[
                SlotKind::Digit(0),
                SlotKind::Digit(1),
                SlotKind::Colon,
                SlotKind::Digit(2),
                SlotKind::Digit(3),
                SlotKind::Colon,
                SlotKind::Digit(4),
                SlotKind::Digit(5),
            ],
            ClockFormat::HourMinute => &[
                SlotKind::Digit(0),
                SlotKind::Digit(1),
                SlotKind::Colon,
                SlotKind::Digit(2),
                SlotKind::Digit(3),
            ],
        };

        let mut slots: Vec<Slot, MAX_SLOTS> = Vec::new();
        let mut x = 0;
        for (i, &kind) in kinds.iter().enumerate() {
            let _ = slots.push(Slot { kind, x });
            x += match kind {
                SlotKind::Digit(_) => DIGIT_W,
                SlotKind::Colon => COLON_W,
            };
            if matches!(kinds.get(i + 1), Some(SlotKind::Digit(_))) {
                x += DIGIT_GAP;
            }
        }

        let origin = if x <= matrix_w {
            ((matrix_w - x) / 2) as i32
        } else {
            0
        };
        (slots, origin)
    }
}
