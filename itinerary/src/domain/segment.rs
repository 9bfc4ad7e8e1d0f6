//! Segment types.
//!
//! A `Segment` is one travel leg from an itinerary: a hotel stay, a flight,
//! or a train ride. Hotels occupy a single location across calendar dates;
//! flights and trains move between two locations on a single date.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::Location;
use super::time::{at_utc, end_of_day};

/// The kind of travel a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Hotel,
    Flight,
    Train,
}

impl Mode {
    /// Returns the keyword used for this mode in itinerary files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Hotel => "Hotel",
            Mode::Flight => "Flight",
            Mode::Train => "Train",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hotel stay at one location.
///
/// Check-in and check-out are anchored to the last second of their dates,
/// so a stay that checks in on the day of arrival sorts after that day's
/// flights and trains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    location: Location,
    check_in: NaiveDate,
    check_out: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Stay {
    /// Creates a stay between two calendar dates.
    pub fn new(location: Location, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            location,
            check_in,
            check_out,
            start: end_of_day(check_in),
            end: end_of_day(check_out),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }
}

/// A flight or train ride between two locations on one date.
///
/// Both clock times are taken on `date`; an arrival earlier than the
/// departure is kept as-is and yields an end instant before the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transit {
    from: Location,
    to: Location,
    date: NaiveDate,
    departs: NaiveTime,
    arrives: NaiveTime,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Transit {
    /// Creates a transit leg departing and arriving on `date`.
    pub fn new(
        from: Location,
        to: Location,
        date: NaiveDate,
        departs: NaiveTime,
        arrives: NaiveTime,
    ) -> Self {
        Self {
            from,
            to,
            date,
            departs,
            arrives,
            start: at_utc(date, departs),
            end: at_utc(date, arrives),
        }
    }

    pub fn from(&self) -> &Location {
        &self.from
    }

    pub fn to(&self) -> &Location {
        &self.to
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn departs(&self) -> NaiveTime {
        self.departs
    }

    pub fn arrives(&self) -> NaiveTime {
        self.arrives
    }
}

/// One travel leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A hotel stay
    Hotel(Stay),
    /// A flight
    Flight(Transit),
    /// A train ride
    Train(Transit),
}

impl Segment {
    /// Returns the mode discriminant of this segment.
    pub fn mode(&self) -> Mode {
        match self {
            Segment::Hotel(_) => Mode::Hotel,
            Segment::Flight(_) => Mode::Flight,
            Segment::Train(_) => Mode::Train,
        }
    }

    /// Returns the instant this segment starts.
    pub fn start(&self) -> DateTime<Utc> {
        match self {
            Segment::Hotel(stay) => stay.start,
            Segment::Flight(transit) | Segment::Train(transit) => transit.start,
        }
    }

    /// Returns the instant this segment ends.
    pub fn end(&self) -> DateTime<Utc> {
        match self {
            Segment::Hotel(stay) => stay.end,
            Segment::Flight(transit) | Segment::Train(transit) => transit.end,
        }
    }

    /// Returns the departure location, or `None` for a hotel stay.
    pub fn origin(&self) -> Option<&Location> {
        self.as_transit().map(|transit| transit.from())
    }

    /// Returns the arrival location, or `None` for a hotel stay.
    pub fn destination(&self) -> Option<&Location> {
        self.as_transit().map(|transit| transit.to())
    }

    /// Returns the hotel location, or `None` for a flight or train.
    pub fn stay_location(&self) -> Option<&Location> {
        self.as_stay().map(Stay::location)
    }

    /// Returns true if this is a hotel stay.
    pub fn is_hotel(&self) -> bool {
        matches!(self, Segment::Hotel(_))
    }

    /// Returns the stay if this is a hotel segment.
    pub fn as_stay(&self) -> Option<&Stay> {
        match self {
            Segment::Hotel(stay) => Some(stay),
            Segment::Flight(_) | Segment::Train(_) => None,
        }
    }

    /// Returns the transit leg if this is a flight or train segment.
    pub fn as_transit(&self) -> Option<&Transit> {
        match self {
            Segment::Hotel(_) => None,
            Segment::Flight(transit) | Segment::Train(transit) => Some(transit),
        }
    }
}
