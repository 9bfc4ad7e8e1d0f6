//! Trip types.
//!
//! A `Trip` is a non-empty run of segments that the grouper decided belong
//! together. Segments keep the order they were appended in.

use super::{DomainError, Segment};

/// A non-empty ordered sequence of segments.
///
/// # Invariants
///
/// - At least one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    segments: Vec<Segment>,
}

impl Trip {
    /// Constructs a trip from segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segments list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary::domain::{Location, Segment, Stay, Trip};
    /// use chrono::NaiveDate;
    ///
    /// let bcn = Location::parse("BCN").unwrap();
    /// let check_in = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
    /// let check_out = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
    ///
    /// let trip = Trip::new(vec![Segment::Hotel(Stay::new(bcn, check_in, check_out))]).unwrap();
    /// assert_eq!(trip.len(), 1);
    ///
    /// assert!(Trip::new(vec![]).is_err());
    /// ```
    pub fn new(segments: Vec<Segment>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyTrip);
        }
        Ok(Trip { segments })
    }

    /// Starts a trip with a single segment.
    pub fn starting_with(segment: Segment) -> Self {
        Trip {
            segments: vec![segment],
        }
    }

    /// Appends a segment to the end of the trip.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes the trip, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Returns the most recently appended segment.
    pub fn last(&self) -> &Segment {
        // Invariant: non-empty
        &self.segments[self.segments.len() - 1]
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }
}
