//! # pngpacker
//!
//! Extracts the png images packed into a single jar archive entry and packs
//! them back in, byte-identically.
//!
//! Gothic 3 The Beginning ships its images concatenated into one opaque
//! entry (`"i"` by default): a charset header, then every png back to back,
//! with a single `0x00` byte between consecutive parts. There are no length
//! fields; image boundaries are found by scanning for the 8-byte png
//! signature. Unpacking writes the header and the images to a folder;
//! packing merges the folder back and atomically replaces the archive entry,
//! leaving all other entries intact.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> pngpacker::Result<()> {
//!     let out = Path::new("i_output");
//!     let report = pngpacker::unpack_archive(Path::new("game.jar"), "i", out)?;
//!     println!("{} images extracted", report.image_count);
//!
//!     // ...edit the pngs in i_output/, then:
//!     pngpacker::pack_directory(out, Path::new("game.jar"), "i")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod io;
pub mod pack;
pub mod unpack;
pub mod zip;

pub use cli::{Cli, Command};
pub use error::{Error, Result};
pub use pack::{PackReport, pack_directory};
pub use unpack::{UnpackReport, unpack_archive};
