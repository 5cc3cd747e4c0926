//! Configuration intents from external collaborators
//!
//! The config/web layer runs outside the render loop and hands changes to
//! the engine through a bounded channel, drained once per tick. Validation
//! happens upstream; the engine only clamps what its geometry invariants
//! require.

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::morph::MorphStyle;

/// Requested change to LED appearance; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct AppearanceIntent {
    /// Maximum LED dot diameter in physical pixels
    pub diameter: Option<u8>,
    /// Requested gap between LEDs in physical pixels
    pub gap: Option<u8>,
    /// Base LED color
    pub color: Option<Rgb>,
    /// Global brightness (0-255)
    pub brightness: Option<u8>,
}

/// Intent to change clock rendering state
#[derive(Debug, Clone, Copy)]
pub enum ClockIntent {
    /// Change the LED appearance (triggers a geometry recompute)
    Appearance(AppearanceIntent),
    /// Switch the digit transition algorithm
    MorphStyle(MorphStyle),
    /// Toggle 24-hour display
    Use24h(bool),
    /// Toggle colon blinking
    BlinkColons(bool),
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, ClockIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, ClockIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<ClockIntent, SIZE>;
