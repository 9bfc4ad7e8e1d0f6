//! Crate-level error type.

use crate::input::{LoadError, ParseError};

/// Any failure that aborts a run. There are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The itinerary could not be read
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The itinerary text is malformed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON output could not be produced
    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),
}
