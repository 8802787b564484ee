//! Merging a header and image buffers back into the packed layout.

use crate::error::{Error, Result};

/// Byte placed between consecutive segments in the packed layout.
pub const SEPARATOR: u8 = 0x00;

/// Rebuild the packed byte layout from a header and ordered image buffers.
///
/// Output is `header ++ 0x00 ++ seg0 ++ 0x00 ++ … ++ segN-1`, with no
/// separator after the last segment, exactly what [`split_segments`] expects
/// on a later read.
///
/// Zero-length buffers are dropped before merging and contribute neither
/// content nor a separator. The splitter has no such filter, so merge is not
/// a strict structural inverse of split when a source file was empty; that
/// asymmetry is deliberate and inherited from the format.
///
/// Fails with [`Error::NoImagesFound`] when nothing remains after filtering.
///
/// [`split_segments`]: crate::codec::split_segments
pub fn merge_segments<B: AsRef<[u8]>>(header: &[u8], segments: &[B]) -> Result<Vec<u8>> {
    let segments: Vec<&[u8]> = segments
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        return Err(Error::NoImagesFound);
    }

    let total =
        header.len() + segments.len() + segments.iter().map(|s| s.len()).sum::<usize>();
    let mut merged = Vec::with_capacity(total);

    merged.extend_from_slice(header);
    merged.push(SEPARATOR);
    for (i, segment) in segments.iter().enumerate() {
        merged.extend_from_slice(segment);
        if i + 1 < segments.len() {
            merged.push(SEPARATOR);
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{PNG_SIGNATURE, find_signature_offsets, split_segments};

    fn png_segment(tail: u8) -> Vec<u8> {
        let mut seg = PNG_SIGNATURE.to_vec();
        seg.push(tail);
        seg
    }

    #[test]
    fn no_segments_is_rejected() {
        let none: Vec<Vec<u8>> = Vec::new();
        let err = merge_segments(&[0xAB], &none).unwrap_err();
        assert!(matches!(err, Error::NoImagesFound));
    }

    #[test]
    fn only_empty_segments_is_rejected() {
        let empties: Vec<Vec<u8>> = vec![Vec::new(), Vec::new()];
        let err = merge_segments(&[0xAB], &empties).unwrap_err();
        assert!(matches!(err, Error::NoImagesFound));
    }

    #[test]
    fn separator_between_but_not_after_segments() {
        let merged =
            merge_segments(&[0xAB, 0xCD], &[png_segment(0x01), png_segment(0x02)]).unwrap();

        let mut expected = vec![0xAB, 0xCD, 0x00];
        expected.extend_from_slice(&png_segment(0x01));
        expected.push(0x00);
        expected.extend_from_slice(&png_segment(0x02));
        assert_eq!(merged, expected);
        assert_ne!(*merged.last().unwrap(), SEPARATOR);
    }

    #[test]
    fn empty_segments_are_skipped_without_extra_separator() {
        let with_gap = merge_segments(
            &[0xAB],
            &[png_segment(0x01), Vec::new(), png_segment(0x02)],
        )
        .unwrap();
        let without =
            merge_segments(&[0xAB], &[png_segment(0x01), png_segment(0x02)]).unwrap();
        assert_eq!(with_gap, without);
    }

    #[test]
    fn split_of_merge_reproduces_the_inputs() {
        let header = vec![0x10, 0x20, 0x30];
        let segments = vec![png_segment(0x01), png_segment(0x02), png_segment(0x03)];

        let merged = merge_segments(&header, &segments).unwrap();
        let offsets = find_signature_offsets(&merged, &PNG_SIGNATURE);
        let set = split_segments(&merged, &offsets).unwrap();

        assert_eq!(set.header, header.as_slice());
        let roundtripped: Vec<Vec<u8>> =
            set.segments.iter().map(|s| s.to_vec()).collect();
        assert_eq!(roundtripped, segments);
    }
}
