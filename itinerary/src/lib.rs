//! Itinerary trip reconstruction.
//!
//! Reads a free-text itinerary of hotel stays, flights and trains, and works
//! out which trips the traveler took and where each one went.

pub mod domain;
pub mod error;
pub mod input;
pub mod planner;
pub mod render;

use std::path::Path;

pub use error::Error;
use planner::{Plan, PlannerConfig};

/// Loads, parses and plans an itinerary file (`-` for stdin).
pub fn plan_file(path: &Path, config: &PlannerConfig) -> Result<Plan, Error> {
    let text = input::load(path)?;
    let itinerary = input::parse_itinerary(&text)?;
    Ok(planner::plan(itinerary, config))
}
