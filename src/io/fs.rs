use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Read a whole file, mapping a missing path to [`Error::NotFound`].
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// Write `data` to `path`, replacing any existing file.
pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    Ok(())
}

/// List the files directly inside `dir` whose extension is `extension`,
/// sorted by name.
///
/// The sort matters: extracted images carry zero-padded numeric names, and
/// name order must reproduce the original packing order.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Create `dir`, replacing whatever was there before.
pub fn make_or_overwrite_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
