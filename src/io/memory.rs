use super::ReadAt;
use crate::error::{Error, Result};

/// Archive source over an in-memory buffer.
///
/// Used by tests to exercise the zip layer without touching disk.
pub struct MemoryReader {
    data: Vec<u8>,
}

impl MemoryReader {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl ReadAt for MemoryReader {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        let start = usize::try_from(offset)
            .map_err(|_| Error::Io(std::io::ErrorKind::UnexpectedEof.into()))?;
        let end = start
            .checked_add(buf.len())
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| Error::Io(std::io::ErrorKind::UnexpectedEof.into()))?;
        buf.copy_from_slice(&self.data[start..end]);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}
