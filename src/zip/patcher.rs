//! Replacing a single entry of a zip archive on disk.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::LocalFileReader;

use super::extractor::ZipExtractor;
use super::writer::ZipWriter;

/// Rewrite the archive at `path` so that the entry named `entry_name` holds
/// `content`, leaving every other entry's name, order and decompressed
/// content unchanged. Entry timestamps are carried over from the source.
///
/// The replacement archive is built fully in memory, staged into a temporary
/// file in the destination's directory and renamed over the original, so the
/// path always points at a complete archive. Any failure before the rename
/// leaves the original untouched. A failure of the rename itself keeps the
/// staged file on disk and surfaces as [`Error::ReplaceFailed`].
pub fn replace_entry(path: &Path, entry_name: &str, content: &[u8]) -> Result<()> {
    // The reader drops at the end of this block, before the rename. An open
    // handle on the path being replaced can break the swap on some
    // platforms.
    let rebuilt = {
        let extractor = ZipExtractor::new(LocalFileReader::open(path)?);
        let entries = extractor.list_entries()?;

        if !entries.iter().any(|e| e.file_name == entry_name) {
            return Err(Error::EntryMissing(entry_name.to_string()));
        }

        let mut writer = ZipWriter::new();
        for entry in &entries {
            let data = if entry.file_name == entry_name {
                content.to_vec()
            } else {
                extractor.read_entry(entry)?
            };
            writer.add_entry(
                &entry.file_name,
                &data,
                entry.last_mod_time,
                entry.last_mod_date,
            )?;
        }
        writer.finish()?
    };

    // Same directory as the destination, so the rename stays on one
    // filesystem.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(&rebuilt)?;
    staged.flush()?;

    match staged.persist(path) {
        Ok(_) => Ok(()),
        Err(err) => {
            let source = err.error;
            // Keep the staged file so the rebuilt archive is not lost.
            let _ = err.file.keep();
            Err(Error::ReplaceFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
