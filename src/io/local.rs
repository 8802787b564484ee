use std::fs::File;
use std::path::Path;

use super::ReadAt;
use crate::error::{Error, Result};

/// Archive source backed by a local file.
pub struct LocalFileReader {
    file: File,
    size: u64,
}

impl LocalFileReader {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }
}

impl ReadAt for LocalFileReader {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileExt;
            self.file.read_exact_at(buf, offset)?;
        }

        #[cfg(windows)]
        {
            // Windows has no pread; seek_read moves the file cursor, which is
            // fine since nothing else reads through this handle concurrently.
            use std::os::windows::fs::FileExt;
            let mut pos = 0;
            while pos < buf.len() {
                let n = self.file.seek_read(&mut buf[pos..], offset + pos as u64)?;
                if n == 0 {
                    return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into()));
                }
                pos += n;
            }
        }

        #[cfg(not(any(unix, windows)))]
        {
            use std::io::{Read, Seek, SeekFrom};
            let mut file = &self.file;
            file.seek(SeekFrom::Start(offset))?;
            file.read_exact(buf)?;
        }

        Ok(())
    }

    fn size(&self) -> u64 {
        self.size
    }
}
