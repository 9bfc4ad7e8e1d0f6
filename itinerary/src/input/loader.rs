//! Reading raw itinerary text.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::error::LoadError;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Reads the whole itinerary as UTF-8 text.
///
/// A path of `-` reads from standard input.
pub fn load(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == STDIN_PATH {
        return load_from(std::io::stdin().lock(), path);
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded itinerary");
    Ok(text)
}

/// Reads the whole itinerary from any reader. `label` names the source in
/// errors.
pub fn load_from<R: Read>(mut reader: R, label: &Path) -> Result<String, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Read {
            path: label.to_path_buf(),
            source,
        })?;
    debug!(source = %label.display(), bytes = text.len(), "loaded itinerary");
    Ok(text)
}
