//! Minimal zip writer covering what the patcher needs: append entries with
//! STORED or DEFLATE content into an in-memory buffer, then emit the central
//! directory and end record. Write side is zip32 only; sizes or offsets past
//! the 32-bit fields fail instead of silently truncating.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

use crate::error::{Error, Result};

use super::structures::{CDFH_SIGNATURE, CompressionMethod, EndOfCentralDirectory, LFH_SIGNATURE};

/// Version needed to extract: 2.0, plain deflate.
const VERSION_NEEDED: u16 = 20;

struct CentralRecord {
    name: String,
    method: CompressionMethod,
    last_mod_time: u16,
    last_mod_date: u16,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    lfh_offset: u32,
}

/// In-memory zip archive builder.
pub struct ZipWriter {
    buf: Vec<u8>,
    central: Vec<CentralRecord>,
}

impl ZipWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            central: Vec::new(),
        }
    }

    /// Append one entry.
    ///
    /// Non-empty payloads are deflated; empty ones (directory entries,
    /// zero-length files) are stored as-is. Sizes and the CRC are known
    /// before the local header is written, so no data descriptor is needed.
    pub fn add_entry(
        &mut self,
        name: &str,
        data: &[u8],
        last_mod_time: u16,
        last_mod_date: u16,
    ) -> Result<()> {
        let lfh_offset = to_u32(self.buf.len())?;
        let uncompressed_size = to_u32(data.len())?;
        let name_len = u16::try_from(name.len()).map_err(|_| Error::ArchiveTooLarge)?;

        let mut crc = Crc::new();
        crc.update(data);

        let (method, compressed) = if data.is_empty() {
            (CompressionMethod::Stored, Vec::new())
        } else {
            let mut encoder =
                DeflateEncoder::new(Vec::with_capacity(data.len()), Compression::default());
            encoder.write_all(data)?;
            (CompressionMethod::Deflate, encoder.finish()?)
        };
        let compressed_size = to_u32(compressed.len())?;

        let buf = &mut self.buf;
        buf.write_all(LFH_SIGNATURE)?;
        buf.write_u16::<LittleEndian>(VERSION_NEEDED)?;
        buf.write_u16::<LittleEndian>(0)?; // general purpose flags
        buf.write_u16::<LittleEndian>(method.as_u16())?;
        buf.write_u16::<LittleEndian>(last_mod_time)?;
        buf.write_u16::<LittleEndian>(last_mod_date)?;
        buf.write_u32::<LittleEndian>(crc.sum())?;
        buf.write_u32::<LittleEndian>(compressed_size)?;
        buf.write_u32::<LittleEndian>(uncompressed_size)?;
        buf.write_u16::<LittleEndian>(name_len)?;
        buf.write_u16::<LittleEndian>(0)?; // extra field length
        buf.write_all(name.as_bytes())?;
        buf.write_all(&compressed)?;

        self.central.push(CentralRecord {
            name: name.to_string(),
            method,
            last_mod_time,
            last_mod_date,
            crc32: crc.sum(),
            compressed_size,
            uncompressed_size,
            lfh_offset,
        });

        Ok(())
    }

    /// Write the central directory and end record, returning the finished
    /// archive bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let cd_offset = to_u32(self.buf.len())?;

        for record in &self.central {
            let buf = &mut self.buf;
            buf.write_all(CDFH_SIGNATURE)?;
            buf.write_u16::<LittleEndian>(VERSION_NEEDED)?; // version made by
            buf.write_u16::<LittleEndian>(VERSION_NEEDED)?;
            buf.write_u16::<LittleEndian>(0)?; // general purpose flags
            buf.write_u16::<LittleEndian>(record.method.as_u16())?;
            buf.write_u16::<LittleEndian>(record.last_mod_time)?;
            buf.write_u16::<LittleEndian>(record.last_mod_date)?;
            buf.write_u32::<LittleEndian>(record.crc32)?;
            buf.write_u32::<LittleEndian>(record.compressed_size)?;
            buf.write_u32::<LittleEndian>(record.uncompressed_size)?;
            buf.write_u16::<LittleEndian>(record.name.len() as u16)?;
            buf.write_u16::<LittleEndian>(0)?; // extra field length
            buf.write_u16::<LittleEndian>(0)?; // comment length
            buf.write_u16::<LittleEndian>(0)?; // disk number start
            buf.write_u16::<LittleEndian>(0)?; // internal attributes
            buf.write_u32::<LittleEndian>(0)?; // external attributes
            buf.write_u32::<LittleEndian>(record.lfh_offset)?;
            buf.write_all(record.name.as_bytes())?;
        }

        let cd_end = to_u32(self.buf.len())?;
        let cd_size = cd_end - cd_offset;
        let entries = u16::try_from(self.central.len()).map_err(|_| Error::ArchiveTooLarge)?;

        let buf = &mut self.buf;
        buf.write_all(EndOfCentralDirectory::SIGNATURE)?;
        buf.write_u16::<LittleEndian>(0)?; // this disk
        buf.write_u16::<LittleEndian>(0)?; // disk with central directory
        buf.write_u16::<LittleEndian>(entries)?;
        buf.write_u16::<LittleEndian>(entries)?;
        buf.write_u32::<LittleEndian>(cd_size)?;
        buf.write_u32::<LittleEndian>(cd_offset)?;
        buf.write_u16::<LittleEndian>(0)?; // comment length

        Ok(self.buf)
    }
}

impl Default for ZipWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::ArchiveTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryReader;
    use crate::zip::ZipExtractor;

    #[test]
    fn written_archive_parses_back_with_same_entries() {
        let mut writer = ZipWriter::new();
        writer.add_entry("a.txt", b"alpha", 0x6000, 0x5A21).unwrap();
        writer.add_entry("dir/", b"", 0x6000, 0x5A21).unwrap();
        writer.add_entry("dir/b.bin", &[0u8; 300], 0, 0).unwrap();
        let archive = writer.finish().unwrap();

        let extractor = ZipExtractor::new(MemoryReader::new(archive));
        let entries = extractor.list_entries().unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "dir/", "dir/b.bin"]);
        assert!(entries[1].is_directory);

        assert_eq!(extractor.read_entry(&entries[0]).unwrap(), b"alpha");
        assert_eq!(extractor.read_entry(&entries[1]).unwrap(), b"");
        assert_eq!(extractor.read_entry(&entries[2]).unwrap(), vec![0u8; 300]);

        assert_eq!(entries[0].compression_method, CompressionMethod::Deflate);
        assert_eq!(entries[1].compression_method, CompressionMethod::Stored);
        assert_eq!(entries[0].last_mod_date, 0x5A21);
    }

    #[test]
    fn empty_archive_has_valid_end_record() {
        let archive = ZipWriter::new().finish().unwrap();
        assert_eq!(archive.len(), EndOfCentralDirectory::SIZE);

        let extractor = ZipExtractor::new(MemoryReader::new(archive));
        assert!(extractor.list_entries().unwrap().is_empty());
    }
}
