//! Roster loading
//!
//! A roster is a plain text file with one participant name per line.
//! Surrounding whitespace is trimmed and blank lines are skipped, so
//!
//! ```text
//! Alice
//!
//!   Bob
//! Carol
//! ```
//!
//! yields `["Alice", "Bob", "Carol"]`. Duplicate names are not rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be opened
    #[error("cannot open roster {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A line could not be read
    #[error("cannot read roster: {0}")]
    Io(#[from] std::io::Error),
}

/// Load participant names from a file.
///
/// The file handle is released before this returns, on success or error.
pub fn load_names(path: impl AsRef<Path>) -> Result<Vec<String>, RosterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RosterError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let names = parse_names(BufReader::new(file))?;
    log::debug!("loaded {} name(s) from {}", names.len(), path.display());
    Ok(names)
}

/// Parse participant names from any line-oriented reader
pub fn parse_names(reader: impl BufRead) -> Result<Vec<String>, RosterError> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
