//! Unpack direction: archive entry -> header file + numbered png files.

use std::path::{Path, PathBuf};

use crate::codec::{PNG_SIGNATURE, find_signature_offsets, split_segments};
use crate::error::{Error, Result};
use crate::io::{self, LocalFileReader};
use crate::zip::ZipExtractor;

/// Name of the file holding the opaque header bytes. The charset varies from
/// game version to game version, so it is always written back out verbatim.
pub const HEADER_FILE_NAME: &str = "charset.bin";

/// Extension given to every extracted image file.
pub const IMAGE_EXTENSION: &str = "png";

/// What an unpack produced, for status reporting.
#[derive(Debug)]
pub struct UnpackReport {
    pub image_count: usize,
    pub output_dir: PathBuf,
}

/// Extract the packed entry `entry_name` from the archive at `archive_path`
/// into `output_dir`, which is recreated from scratch.
///
/// The header lands in [`HEADER_FILE_NAME`]; each image lands in a
/// sequentially numbered file, zero-padded one digit wider than the image
/// count so that name order reproduces packing order on a later repack.
pub fn unpack_archive(
    archive_path: &Path,
    entry_name: &str,
    output_dir: &Path,
) -> Result<UnpackReport> {
    let extractor = ZipExtractor::new(LocalFileReader::open(archive_path)?);
    let entries = extractor.list_entries()?;
    let entry = entries
        .iter()
        .find(|e| e.file_name == entry_name)
        .ok_or_else(|| Error::EntryMissing(entry_name.to_string()))?;
    let data = extractor.read_entry(entry)?;

    let offsets = find_signature_offsets(&data, &PNG_SIGNATURE);
    let set = split_segments(&data, &offsets)?;

    io::make_or_overwrite_dir(output_dir)?;
    io::write_bytes(&output_dir.join(HEADER_FILE_NAME), set.header)?;

    let width = set.segments.len().to_string().len() + 1;
    for (i, segment) in set.segments.iter().enumerate() {
        let name = format!("{i:0width$}.{IMAGE_EXTENSION}");
        io::write_bytes(&output_dir.join(name), segment)?;
    }

    Ok(UnpackReport {
        image_count: set.segments.len(),
        output_dir: output_dir.to_path_buf(),
    })
}
