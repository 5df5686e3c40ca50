//! Error types for the embed pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during an embed run
///
/// Exactly two kinds exist: the source SVG could not be read, or the
/// destination component file could not be written. There is no validation of
/// the markup itself; malformed SVG passes through silently.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// The source SVG is missing or unreadable
    #[error("Failed to read source SVG '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination path or its directory is not writable
    #[error("Failed to write component file '{}': {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
