//! Pack direction: header file + png files -> merged blob -> patched archive.

use std::path::{Path, PathBuf};

use crate::codec::merge_segments;
use crate::error::{Error, Result};
use crate::io;
use crate::unpack::{HEADER_FILE_NAME, IMAGE_EXTENSION};
use crate::zip;

/// What a pack produced, for status reporting.
#[derive(Debug)]
pub struct PackReport {
    pub image_count: usize,
    pub archive_path: PathBuf,
}

/// Merge the header and png files found in `input_dir` back into the packed
/// layout and write the result over the archive entry `entry_name`.
///
/// Images are picked up in file-name order, which matches the zero-padded
/// names the unpack direction writes. Zero-length png files are skipped, the
/// merger's policy for them.
pub fn pack_directory(
    input_dir: &Path,
    archive_path: &Path,
    entry_name: &str,
) -> Result<PackReport> {
    if !input_dir.is_dir() {
        return Err(Error::NotFound(input_dir.to_path_buf()));
    }

    let header = io::read_bytes(&input_dir.join(HEADER_FILE_NAME))?;

    let image_paths = io::files_with_extension(input_dir, IMAGE_EXTENSION)?;
    let mut images = Vec::with_capacity(image_paths.len());
    for path in &image_paths {
        images.push(io::read_bytes(path)?);
    }

    let merged = merge_segments(&header, &images)?;
    let image_count = images.iter().filter(|b| !b.is_empty()).count();

    zip::replace_entry(archive_path, entry_name, &merged)?;

    Ok(PackReport {
        image_count,
        archive_path: archive_path.to_path_buf(),
    })
}
