//! Trip reconstruction.
//!
//! This module implements the core of the tool: it orders an itinerary's
//! segments in time, partitions them into trips using location and time
//! continuity, and derives the stops worth naming for each trip.
//!
//! All of it is pure and total. Any sorted input yields a valid partition
//! and a (possibly empty) stop list per trip.

mod config;
mod group;
mod sort;
mod stops;

#[cfg(test)]
mod fixtures;

pub use config::{MAX_GAP_HOURS, PlannerConfig};
pub use group::group_trips;
pub use sort::sort_segments;
pub use stops::extract_stops;

use tracing::info;

use crate::domain::{Location, Trip};
use crate::input::Itinerary;

/// A trip together with the stops reported in its headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTrip {
    pub trip: Trip,
    pub stops: Vec<Location>,
}

/// All trips reconstructed from one itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub base: Location,
    /// Trips in chronological order.
    pub trips: Vec<PlannedTrip>,
}

/// Runs the sort, group and stop extraction stages over a parsed itinerary.
pub fn plan(itinerary: Itinerary, config: &PlannerConfig) -> Plan {
    let Itinerary { segments, base } = itinerary;

    let sorted = sort_segments(segments);
    let trips: Vec<PlannedTrip> = group_trips(sorted, &base, config)
        .into_iter()
        .map(|trip| {
            let stops = extract_stops(&trip, &base, config);
            PlannedTrip { trip, stops }
        })
        .collect();

    info!(base = %base, trips = trips.len(), "planned itinerary");
    Plan { base, trips }
}
