//! Location identifiers.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid location token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// An opaque location identifier, such as an airport or city code.
///
/// Locations are only ever compared for equality. Any single non-empty
/// token without whitespace is accepted, so `SVQ`, `BCN` and `Paris` are
/// all valid.
///
/// # Examples
///
/// ```
/// use itinerary::domain::Location;
///
/// let bcn = Location::parse("BCN").unwrap();
/// assert_eq!(bcn.as_str(), "BCN");
///
/// // Empty tokens are rejected
/// assert!(Location::parse("").is_err());
///
/// // Embedded whitespace is rejected
/// assert!(Location::parse("New York").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Parse a location from a single token.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        if s.is_empty() {
            return Err(InvalidLocation {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidLocation {
                reason: "must not contain whitespace",
            });
        }

        Ok(Location(s.to_string()))
    }

    /// Returns the location as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
