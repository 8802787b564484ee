//! Error types shared by the codec and archive layers.
//!
//! Library code returns the typed [`Error`] so callers can match on the
//! failure kind; the binary reports through `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Input path (archive, folder, header file) does not exist.
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    /// The packed entry contains no png signature at all.
    #[error("no png data found in the packed entry")]
    NoResourcesFound,

    /// The bytes before the first png signature would form an empty header.
    #[error("packed entry has an empty header segment")]
    EmptyHeader,

    /// Nothing left to pack once zero-length png files were dropped.
    #[error("no png data to pack")]
    NoImagesFound,

    /// The target entry name is not present in the archive.
    #[error("entry '{0}' does not exist in the archive")]
    EntryMissing(String),

    /// The container is not parseable as a zip archive.
    #[error("invalid zip archive: {0}")]
    InvalidArchive(String),

    /// An entry uses a compression method we cannot decode.
    #[error("unsupported compression method: {0}")]
    UnsupportedCompression(u16),

    /// The rewritten archive does not fit in zip32 fields.
    #[error("archive exceeds the 4 GiB zip32 limit")]
    ArchiveTooLarge,

    /// The final rename over the original archive failed. The staged
    /// temporary file is left on disk so the rebuilt archive is not lost.
    #[error("failed to replace {}: {source}", path.display())]
    ReplaceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
