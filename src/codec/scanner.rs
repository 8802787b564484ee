//! Signature scanning over a packed buffer.

/// The first eight bytes of every png file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Find every non-overlapping occurrence of `signature` in `data`.
///
/// Returns absolute offsets in ascending order. The scan keeps a single
/// forward cursor and advances it past each match before searching again, so
/// occurrences that overlap a previous match are not counted twice and the
/// input is never copied.
///
/// Zero matches yields an empty list, not an error; whether that constitutes
/// a failure is the caller's decision.
pub fn find_signature_offsets(data: &[u8], signature: &[u8]) -> Vec<usize> {
    debug_assert!(!signature.is_empty());

    let mut offsets = Vec::new();
    let mut cursor = 0;

    while cursor + signature.len() <= data.len() {
        let Some(idx) = data[cursor..]
            .windows(signature.len())
            .position(|window| window == signature)
        else {
            break;
        };
        offsets.push(cursor + idx);
        cursor += idx + signature.len();
    }

    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_returns_empty_list() {
        let data = [0x00, 0x01, 0x02, 0x03];
        assert!(find_signature_offsets(&data, &PNG_SIGNATURE).is_empty());
        assert!(find_signature_offsets(&[], &PNG_SIGNATURE).is_empty());
    }

    #[test]
    fn finds_every_occurrence_in_order() {
        let mut data = vec![0xAB, 0xCD, 0x00];
        data.extend_from_slice(&PNG_SIGNATURE); // offset 3
        data.extend_from_slice(&[0x01, 0x00]);
        data.extend_from_slice(&PNG_SIGNATURE); // offset 13
        data.push(0x02);

        assert_eq!(find_signature_offsets(&data, &PNG_SIGNATURE), vec![3, 13]);
    }

    #[test]
    fn match_at_start_and_end_of_buffer() {
        let mut data = Vec::new();
        data.extend_from_slice(&PNG_SIGNATURE);
        data.push(0x00);
        data.extend_from_slice(&PNG_SIGNATURE);

        assert_eq!(find_signature_offsets(&data, &PNG_SIGNATURE), vec![0, 9]);
    }

    #[test]
    fn overlapping_occurrences_are_not_double_counted() {
        // "aaa" contains "aa" twice, but the second occurrence overlaps the
        // first match and must be skipped.
        let data = b"aaa";
        assert_eq!(find_signature_offsets(data, b"aa"), vec![0]);

        let data = b"aaaa";
        assert_eq!(find_signature_offsets(data, b"aa"), vec![0, 2]);
    }

    #[test]
    fn input_buffer_is_not_mutated() {
        let mut data = vec![0xFF; 4];
        data.extend_from_slice(&PNG_SIGNATURE);
        let before = data.clone();
        find_signature_offsets(&data, &PNG_SIGNATURE);
        assert_eq!(data, before);
    }
}
