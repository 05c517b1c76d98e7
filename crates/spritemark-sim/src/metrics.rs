//! Per-step performance metrics for the simulation.
//!
//! [`StepMetrics`] captures what one [`World::advance`](crate::World::advance)
//! call did and how long its phases took, so benchmark drivers can report
//! simulation cost separately from render cost.

/// Timing and outcome metrics for a single simulation step.
///
/// All durations are in microseconds. The world populates these on every
/// `advance()` call; consumers read them from the returned value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Time spent applying the command batch, in microseconds.
    pub commands_us: u64,
    /// Time spent in the scheduler, in microseconds.
    pub tick_us: u64,
    /// Number of commands applied this step.
    pub commands_applied: u32,
    /// Whether the scheduler gate opened and sprites advanced.
    pub ticked: bool,
    /// Elapsed milliseconds the scheduler saw when it ticked, zero otherwise.
    pub tick_delta_ms: u64,
    /// Whether the fps window rolled over this step.
    pub window_rolled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.commands_us, 0);
        assert_eq!(m.tick_us, 0);
        assert_eq!(m.commands_applied, 0);
        assert!(!m.ticked);
        assert_eq!(m.tick_delta_ms, 0);
        assert!(!m.window_rolled);
    }
}
