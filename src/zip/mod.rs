//! Zip archive reading, writing and in-place entry replacement.
//!
//! The module is organized like the format itself:
//!
//! - [`structures`]: the on-disk records (EOCD, ZIP64 records, file headers)
//! - [`parser`]: low-level parsing of those records from a [`ReadAt`] source
//! - [`extractor`]: high-level entry listing and decompression
//! - [`writer`]: in-memory archive building
//! - [`patcher`]: atomic replace-one-entry on a disk archive
//!
//! Reading handles standard zip plus ZIP64 extensions and the STORED and
//! DEFLATE methods; no encryption, no multi-disk archives. Writing is plain
//! zip32, which is all the patched game jars ever need.
//!
//! [`ReadAt`]: crate::io::ReadAt

mod extractor;
mod parser;
mod patcher;
mod structures;
mod writer;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use patcher::replace_entry;
pub use structures::*;
pub use writer::ZipWriter;
