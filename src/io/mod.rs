//! File access primitives: random-access archive sources and the small set
//! of whole-file helpers the pack/unpack operations need.

mod fs;
mod local;
mod memory;

pub use fs::{files_with_extension, make_or_overwrite_dir, read_bytes, write_bytes};
pub use local::LocalFileReader;
pub use memory::MemoryReader;

use crate::error::Result;

/// Random-access reading from an archive source.
pub trait ReadAt {
    /// Fill `buf` with the bytes starting at `offset`.
    ///
    /// Short reads are errors; the zip parser always knows exactly how many
    /// bytes a structure occupies.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()>;

    /// Total size of the source in bytes.
    fn size(&self) -> u64;
}
