//! Plain text rendering.
//!
//! Each trip renders as a headline naming its stops, one line per segment,
//! and a blank separator line.

use crate::domain::{Location, Segment};
use crate::planner::{Plan, PlannedTrip};

/// Prefix of every trip headline.
pub const TRIP_LABEL: &str = "TRIP to ";

/// Renders every trip of a plan. An empty plan renders as an empty string.
pub fn render_text(plan: &Plan) -> String {
    let mut out = String::new();
    for planned in &plan.trips {
        for line in render_trip(planned) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Renders one trip as lines, ending with the blank separator.
pub fn render_trip(planned: &PlannedTrip) -> Vec<String> {
    let mut lines = Vec::with_capacity(planned.trip.len() + 2);
    lines.push(headline(&planned.stops));
    lines.extend(planned.trip.segments().iter().map(segment_line));
    lines.push(String::new());
    lines
}

/// `TRIP to BCN, MAD`
pub fn headline(stops: &[Location]) -> String {
    let names: Vec<&str> = stops.iter().map(Location::as_str).collect();
    format!("{TRIP_LABEL}{}", names.join(", "))
}

/// Describes one segment on a single line.
pub fn segment_line(segment: &Segment) -> String {
    match segment {
        Segment::Hotel(stay) => format!(
            "{} at {} on {} to {}",
            segment.mode(),
            stay.location(),
            stay.check_in(),
            stay.check_out()
        ),
        Segment::Flight(transit) | Segment::Train(transit) => format!(
            "{} from {} to {} at {} {} to {}",
            segment.mode(),
            transit.from(),
            transit.to(),
            transit.date(),
            transit.departs().format("%H:%M"),
            transit.arrives().format("%H:%M")
        ),
    }
}
