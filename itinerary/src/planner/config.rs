//! Planner configuration.

use chrono::Duration;

/// Largest accepted gap, in hours (100 years of 365 days).
pub const MAX_GAP_HOURS: i64 = 24 * 365 * 100;

/// Configuration parameters for trip grouping and stop extraction.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum gap between the end of a trip's last segment and the start
    /// of the next segment for the two to be folded together by elapsed
    /// time alone (hours).
    pub continuity_gap_hours: i64,

    /// Minimum gap between two consecutive segments of a trip for the later
    /// segment's origin to be reported as a stop (hours).
    pub stop_gap_hours: i64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(continuity_gap_hours: i64, stop_gap_hours: i64) -> Self {
        Self {
            continuity_gap_hours,
            stop_gap_hours,
        }
    }

    /// Returns the continuity gap as a Duration.
    pub fn continuity_gap(&self) -> Duration {
        gap_hours(self.continuity_gap_hours)
    }

    /// Returns the stop gap as a Duration.
    pub fn stop_gap(&self) -> Duration {
        gap_hours(self.stop_gap_hours)
    }
}

// Clamped into 0..=MAX_GAP_HOURS so the conversion cannot overflow.
fn gap_hours(hours: i64) -> Duration {
    Duration::hours(hours.clamp(0, MAX_GAP_HOURS))
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            continuity_gap_hours: 24, // 1 day
            stop_gap_hours: 24,       // 1 day
        }
    }
}
