//! Itinerary input error types.

use std::path::PathBuf;

use crate::domain::{InvalidLocation, TimeError};

/// Errors that can occur while reading an itinerary.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file (or stdin) could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while parsing itinerary text.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No `BASED:` line anywhere in the input
    #[error("missing BASED: line")]
    MissingBase,

    /// A second `BASED:` line
    #[error("line {line}: duplicate BASED: line")]
    DuplicateBase { line: usize },

    /// A line that is not blank, a header, a base or a segment
    #[error("line {line}: unexpected line \"{content}\"")]
    UnexpectedLine { line: usize, content: String },

    /// Segment mode keyword not recognised
    #[error("line {line}: unknown segment mode \"{mode}\" (expected Hotel, Flight or Train)")]
    UnknownMode { line: usize, mode: String },

    /// Segment has the wrong shape for its mode
    #[error("line {line}: malformed segment: {reason}")]
    MalformedSegment { line: usize, reason: &'static str },

    /// Date token did not parse
    #[error("line {line}: {source}")]
    InvalidDate {
        line: usize,
        #[source]
        source: TimeError,
    },

    /// Time token did not parse
    #[error("line {line}: {source}")]
    InvalidTime {
        line: usize,
        #[source]
        source: TimeError,
    },

    /// Location token did not parse
    #[error("line {line}: {source}")]
    InvalidLocation {
        line: usize,
        #[source]
        source: InvalidLocation,
    },
}
