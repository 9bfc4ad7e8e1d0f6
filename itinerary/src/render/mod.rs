//! Output rendering for planned trips.

mod dto;
mod text;

pub use dto::{PlanResult, SegmentResult, StayResult, TransitResult, TripResult};
pub use text::{TRIP_LABEL, headline, render_text, render_trip, segment_line};

use crate::planner::Plan;

/// Renders a plan as JSON, pretty-printed if requested.
pub fn render_json(plan: &Plan, pretty: bool) -> Result<String, serde_json::Error> {
    let result = PlanResult::from_plan(plan);
    if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
}
