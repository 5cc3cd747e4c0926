//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames
//! and for feeding wall-clock time into the engine.

use embassy_time::{Duration, Instant};

use crate::{ClockEngine, DrawSurface};

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS (~33 ms)
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Ticks the engine, renders to the owned surface and returns timing info
/// so the caller can sleep appropriately. Falling behind by more than two
/// frames resets the schedule instead of bursting to catch up.
pub struct FrameScheduler<'a, S, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
where
    S: DrawSurface,
{
    surface: S,
    engine: ClockEngine<'a, W, H, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, S, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, S, W, H, INTENT_CHANNEL_SIZE>
where
    S: DrawSurface,
{
    /// Create a new frame scheduler at `DEFAULT_FRAME_DURATION`.
    pub fn new(engine: ClockEngine<'a, W, H, INTENT_CHANNEL_SIZE>, surface: S) -> Self {
        Self::with_frame_duration(engine, surface, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: ClockEngine<'a, W, H, INTENT_CHANNEL_SIZE>,
        surface: S,
        frame_duration: Duration,
    ) -> Self {
        Self {
            surface,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: a stall longer than two frames resets the
        // schedule so we do not burn frames catching up.
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        self.engine.tick();
        self.engine.render_to(&mut self.surface);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &ClockEngine<'a, W, H, INTENT_CHANNEL_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub const fn engine_mut(&mut self) -> &mut ClockEngine<'a, W, H, INTENT_CHANNEL_SIZE> {
        &mut self.engine
    }
}
