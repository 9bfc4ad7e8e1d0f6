//! Trip grouping.
//!
//! Walks a chronologically sorted list of segments and cuts it into trips.
//! Each segment is compared only with the last segment of the trip in
//! progress:
//!
//! 1. A segment departing from the base always starts a new trip.
//! 2. Otherwise it joins the current trip if it is a hotel at the place just
//!    arrived at, leaves from the hotel just stayed at, leaves from where the
//!    previous leg arrived, or starts less than the continuity gap after the
//!    previous segment ended.
//! 3. Anything else starts a new trip.
//!
//! The gap rule in step 2 ignores location entirely: two unrelated legs less
//! than a day apart end up in the same trip. Itineraries with a short layover
//! between unconnected legs are treated as one continuous journey.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use super::config::PlannerConfig;
use crate::domain::{Location, Segment, Trip};

/// Why a segment was cut from the trip before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// The segment departs from the base location.
    BaseDeparture,
    /// No continuity rule matched.
    Discontinuity,
}

/// Which rule kept a segment in the trip in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuity {
    /// Hotel at the location the previous leg arrived at.
    HotelAtArrival,
    /// Leg departing from the hotel just stayed at.
    LeavesHotel,
    /// Leg departing from where the previous leg arrived.
    OnwardTravel,
    /// Starts within the continuity gap of the previous segment's end.
    ShortGap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Continue(Continuity),
    Split(Boundary),
}

/// Partitions sorted segments into trips.
///
/// The concatenation of the returned trips is exactly `segments`, in the
/// same order. An empty input yields no trips.
pub fn group_trips(segments: Vec<Segment>, base: &Location, config: &PlannerConfig) -> Vec<Trip> {
    let total = segments.len();
    let mut acc = TripAccumulator::new(base, config.continuity_gap());

    for segment in segments {
        acc.push(segment);
    }

    let trips = acc.finish();
    debug!(segments = total, trips = trips.len(), "grouped segments into trips");
    trips
}

/// Completed trips plus the trip currently being extended.
struct TripAccumulator<'a> {
    base: &'a Location,
    gap: Duration,
    completed: Vec<Trip>,
    current: Option<Trip>,
}

impl<'a> TripAccumulator<'a> {
    fn new(base: &'a Location, gap: Duration) -> Self {
        Self {
            base,
            gap,
            completed: Vec::new(),
            current: None,
        }
    }

    fn push(&mut self, segment: Segment) {
        let Some(trip) = self.current.as_mut() else {
            trace!(start = %segment.start(), mode = %segment.mode(), "first trip");
            self.current = Some(Trip::starting_with(segment));
            return;
        };

        match decide(trip.last(), &segment, self.base, self.gap) {
            Decision::Continue(rule) => {
                trace!(start = %segment.start(), mode = %segment.mode(), ?rule, "continuing trip");
                trip.push(segment);
            }
            Decision::Split(reason) => {
                debug!(start = %segment.start(), mode = %segment.mode(), ?reason, "starting new trip");
                let done = self.current.replace(Trip::starting_with(segment));
                self.completed.extend(done);
            }
        }
    }

    fn finish(mut self) -> Vec<Trip> {
        self.completed.extend(self.current.take());
        self.completed
    }
}

fn decide(last: &Segment, next: &Segment, base: &Location, gap: Duration) -> Decision {
    if next.origin() == Some(base) {
        return Decision::Split(Boundary::BaseDeparture);
    }

    match continuity(last, next, gap) {
        Some(rule) => Decision::Continue(rule),
        None => Decision::Split(Boundary::Discontinuity),
    }
}

fn continuity(last: &Segment, next: &Segment, gap: Duration) -> Option<Continuity> {
    if let Some(stay) = next.stay_location()
        && last.destination() == Some(stay)
    {
        return Some(Continuity::HotelAtArrival);
    }

    if let Some(stay) = last.stay_location()
        && next.origin() == Some(stay)
    {
        return Some(Continuity::LeavesHotel);
    }

    if let Some(arrival) = last.destination()
        && next.origin() == Some(arrival)
    {
        return Some(Continuity::OnwardTravel);
    }

    if starts_within(last.end(), next.start(), gap) {
        return Some(Continuity::ShortGap);
    }

    None
}

/// True if `start` is strictly earlier than `end + gap`.
fn starts_within(end: DateTime<Utc>, start: DateTime<Utc>, gap: Duration) -> bool {
    match end.checked_add_signed(gap) {
        Some(limit) => limit > start,
        None => true,
    }
}
