//! Windowed frames-per-second estimation.

// ── RateSampler ────────────────────────────────────────────────────

/// Fixed-window frame counter producing a periodic fps estimate.
///
/// Counts one frame per render iteration and, each time a three second
/// window elapses, publishes `frames / 3` with integer truncation. This
/// is deliberately not a smoothed average: the estimate moves at most
/// once per window, which keeps the overlay legible during benchmarks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateSampler {
    window_start_ms: u64,
    frames: u32,
    fps: u32,
}

impl RateSampler {
    /// Length of the sampling window in milliseconds.
    pub const WINDOW_MS: u64 = 3_000;

    const WINDOW_SECS: u32 = 3;

    /// Creates a sampler with its window starting at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one rendered frame at `now_ms`.
    ///
    /// Returns `true` when the window rolled over: a fresh estimate was
    /// published (whether or not its value changed) and the diagnostic
    /// overlay should be refreshed.
    pub fn note_frame(&mut self, now_ms: u64) -> bool {
        self.frames = self.frames.saturating_add(1);
        if now_ms.saturating_sub(self.window_start_ms) >= Self::WINDOW_MS {
            self.fps = self.frames / Self::WINDOW_SECS;
            self.frames = 0;
            self.window_start_ms = now_ms;
            return true;
        }
        false
    }

    /// The most recently published estimate. Zero until the first window
    /// completes.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Restarts the window at `now_ms`, dropping the frame count and the
    /// published estimate.
    pub fn reset(&mut self, now_ms: u64) {
        self.window_start_ms = now_ms;
        self.frames = 0;
        self.fps = 0;
    }
}
