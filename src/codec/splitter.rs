//! Splitting a packed buffer into its header and image segments.

use crate::error::{Error, Result};

/// Decoded form of a packed entry: the opaque header followed by the image
/// buffers in their original order. Borrows from the scanned buffer, nothing
/// is copied.
#[derive(Debug, PartialEq, Eq)]
pub struct SegmentSet<'a> {
    /// Charset bytes preceding the first image. Opaque, never interpreted.
    pub header: &'a [u8],
    /// One buffer per embedded image.
    pub segments: Vec<&'a [u8]>,
}

/// Split `data` at the signature `offsets` produced by the scanner.
///
/// Everything before the first offset, minus the trailing separator byte, is
/// the header. Each offset starts one segment; a segment runs up to the
/// separator preceding the next offset, and the last one runs to the end of
/// the buffer.
///
/// An empty offset list fails with [`Error::NoResourcesFound`]. A first
/// offset of 0 or 1 would leave a zero-length header and fails with
/// [`Error::EmptyHeader`] instead of silently producing an empty header file.
pub fn split_segments<'a>(data: &'a [u8], offsets: &[usize]) -> Result<SegmentSet<'a>> {
    let Some(&first) = offsets.first() else {
        return Err(Error::NoResourcesFound);
    };
    if first < 2 {
        return Err(Error::EmptyHeader);
    }

    let header = &data[..first - 1];

    let mut segments = Vec::with_capacity(offsets.len());
    for pair in offsets.windows(2) {
        segments.push(&data[pair[0]..pair[1] - 1]);
    }
    segments.push(&data[offsets[offsets.len() - 1]..]);

    Ok(SegmentSet { header, segments })
}
