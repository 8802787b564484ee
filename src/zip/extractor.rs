use flate2::read::DeflateDecoder;
use std::io::Read;

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// High-level read access to a zip archive.
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries, in central directory order.
    pub fn list_entries(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_entries()
    }

    /// Read one entry's decompressed content into memory.
    pub fn read_entry(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.data_offset(entry)?;

        let mut compressed = vec![0u8; entry.compressed_size as usize];
        self.parser.reader().read_at(data_offset, &mut compressed)?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(compressed),
            CompressionMethod::Deflate => {
                let mut decoder = DeflateDecoder::new(compressed.as_slice());
                let mut data = Vec::with_capacity(entry.uncompressed_size as usize);
                decoder.read_to_end(&mut data)?;
                Ok(data)
            }
            CompressionMethod::Unknown(value) => Err(Error::UnsupportedCompression(value)),
        }
    }
}
