//! Data transfer objects for JSON output.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{Location, Segment, Stay, Transit};
use crate::planner::{Plan, PlannedTrip};

/// A whole plan.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    /// Base location
    pub base: Location,

    /// Trips in chronological order
    pub trips: Vec<TripResult>,
}

/// One trip and its stops.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Locations named in the trip headline
    pub stops: Vec<Location>,

    /// Every segment of the trip, in order
    pub segments: Vec<SegmentResult>,
}

/// A segment, tagged by mode.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SegmentResult {
    Hotel(StayResult),
    Flight(TransitResult),
    Train(TransitResult),
}

/// A hotel stay.
#[derive(Debug, Serialize)]
pub struct StayResult {
    pub location: Location,

    /// Check-in date (YYYY-MM-DD)
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD)
    pub check_out: String,

    /// Start instant (RFC 3339, UTC)
    pub start: String,

    /// End instant (RFC 3339, UTC)
    pub end: String,
}

/// A flight or train leg.
#[derive(Debug, Serialize)]
pub struct TransitResult {
    pub from: Location,
    pub to: Location,

    /// Travel date (YYYY-MM-DD)
    pub date: String,

    /// Departure time (HH:MM)
    pub departs: String,

    /// Arrival time (HH:MM)
    pub arrives: String,

    /// Start instant (RFC 3339, UTC)
    pub start: String,

    /// End instant (RFC 3339, UTC)
    pub end: String,
}

// Conversion implementations

impl PlanResult {
    /// Create from a domain Plan.
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            base: plan.base.clone(),
            trips: plan.trips.iter().map(TripResult::from_planned).collect(),
        }
    }
}

impl TripResult {
    /// Create from a planned trip.
    pub fn from_planned(planned: &PlannedTrip) -> Self {
        Self {
            stops: planned.stops.clone(),
            segments: planned
                .trip
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
        }
    }
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        let start = format_instant(segment.start());
        let end = format_instant(segment.end());
        match segment {
            Segment::Hotel(stay) => SegmentResult::Hotel(StayResult::from_stay(stay, start, end)),
            Segment::Flight(transit) => {
                SegmentResult::Flight(TransitResult::from_transit(transit, start, end))
            }
            Segment::Train(transit) => {
                SegmentResult::Train(TransitResult::from_transit(transit, start, end))
            }
        }
    }
}

impl StayResult {
    fn from_stay(stay: &Stay, start: String, end: String) -> Self {
        Self {
            location: stay.location().clone(),
            check_in: stay.check_in().to_string(),
            check_out: stay.check_out().to_string(),
            start,
            end,
        }
    }
}

impl TransitResult {
    fn from_transit(transit: &Transit, start: String, end: String) -> Self {
        Self {
            from: transit.from().clone(),
            to: transit.to().clone(),
            date: transit.date().to_string(),
            departs: transit.departs().format("%H:%M").to_string(),
            arrives: transit.arrives().format("%H:%M").to_string(),
            start,
            end,
        }
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
