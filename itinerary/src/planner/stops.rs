//! Stop extraction.
//!
//! A trip's stops are the places worth naming in its headline: every hotel,
//! the departure point of any leg that follows a long unexplained gap, and
//! the final arrival unless it is the base.

use chrono::Duration;

use super::config::PlannerConfig;
use crate::domain::{Location, Segment, Trip};

/// Computes the ordered stop list for a trip.
///
/// Stops are reported in segment order and are not deduplicated.
pub fn extract_stops(trip: &Trip, base: &Location, config: &PlannerConfig) -> Vec<Location> {
    let gap = config.stop_gap();
    let segments = trip.segments();
    let mut stops = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        let after_long_gap = i > 0 && long_gap(&segments[i - 1], segment, gap);

        match segment {
            Segment::Hotel(stay) => stops.push(stay.location().clone()),
            Segment::Flight(transit) | Segment::Train(transit) if after_long_gap => {
                stops.push(transit.from().clone());
            }
            Segment::Flight(_) | Segment::Train(_) => {}
        }
    }

    if let Some(arrival) = trip.last().destination()
        && arrival != base
    {
        stops.push(arrival.clone());
    }

    stops
}

/// True if `next` starts strictly more than `gap` after `previous` ends.
fn long_gap(previous: &Segment, next: &Segment, gap: Duration) -> bool {
    match previous.end().checked_add_signed(gap) {
        Some(limit) => limit < next.start(),
        None => false,
    }
}
