//! The segment codec: locating, splitting and merging packed image data.
//!
//! A packed entry is laid out as
//!
//! ```text
//! [ header bytes ][ 0x00 ][ png 0 ][ 0x00 ][ png 1 ] ... [ png N-1 ]
//! ```
//!
//! with no length fields or checksums; segment boundaries are found purely by
//! scanning for the png signature. The header is an opaque charset blob whose
//! structure this crate never interprets.
//!
//! [`scanner`] finds the signature offsets, [`splitter`] turns offsets plus
//! buffer into a [`SegmentSet`], and [`merger`] is the exact inverse used
//! when packing a folder of files back into an entry.

mod merger;
mod scanner;
mod splitter;

pub use merger::{SEPARATOR, merge_segments};
pub use scanner::{PNG_SIGNATURE, find_signature_offsets};
pub use splitter::{SegmentSet, split_segments};
