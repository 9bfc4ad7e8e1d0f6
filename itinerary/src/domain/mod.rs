//! Domain types for itinerary trip reconstruction.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod error;
mod location;
mod segment;
mod time;
mod trip;

pub use error::DomainError;
pub use location::{InvalidLocation, Location};
pub use segment::{Mode, Segment, Stay, Transit};
pub use time::{TimeError, at_utc, end_of_day, parse_clock, parse_date};
pub use trip::Trip;
