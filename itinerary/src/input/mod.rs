//! Itinerary input.
//!
//! Reads raw itinerary text and turns it into validated segments plus the
//! traveler's base location.

mod error;
mod loader;
mod parser;

pub use error::{LoadError, ParseError};
pub use loader::{STDIN_PATH, load, load_from};
pub use parser::{parse_itinerary, parse_segment};

use crate::domain::{Location, Segment};

/// A parsed itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Segments in input order.
    pub segments: Vec<Segment>,
    /// The traveler's home location.
    pub base: Location,
}
