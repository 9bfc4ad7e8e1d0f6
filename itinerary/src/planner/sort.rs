//! Chronological ordering of segments.

use crate::domain::Segment;

/// Orders segments by start instant, ascending.
///
/// The sort is stable: segments that start at the same instant keep their
/// relative input order.
pub fn sort_segments(mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_by_key(Segment::start);
    segments
}
