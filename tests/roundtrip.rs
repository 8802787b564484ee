//! End-to-end unpack/pack round trip through a real archive on disk.

use std::fs;

use pngpacker::codec::{PNG_SIGNATURE, merge_segments};
use pngpacker::io::LocalFileReader;
use pngpacker::unpack::HEADER_FILE_NAME;
use pngpacker::zip::{ZipExtractor, ZipWriter};
use pngpacker::{Error, pack_directory, unpack_archive};

fn png_segment(tail: u8) -> Vec<u8> {
    let mut seg = PNG_SIGNATURE.to_vec();
    seg.push(tail);
    seg
}

fn write_game_jar(path: &std::path::Path, packed: &[u8]) {
    let mut writer = ZipWriter::new();
    writer.add_entry("a.class", b"class a", 0, 0).unwrap();
    writer.add_entry("i", packed, 0, 0).unwrap();
    fs::write(path, writer.finish().unwrap()).unwrap();
}

#[test]
fn unpack_writes_header_and_zero_padded_images() {
    let dir = tempfile::tempdir().unwrap();
    let jar = dir.path().join("game.jar");
    let out = dir.path().join("i_output");

    let header = vec![0xAB, 0xCD, 0xEF];
    let segments = vec![png_segment(0x01), png_segment(0x02), png_segment(0x03)];
    let packed = merge_segments(&header, &segments).unwrap();
    write_game_jar(&jar, &packed);

    let report = unpack_archive(&jar, "i", &out).unwrap();
    assert_eq!(report.image_count, 3);

    assert_eq!(fs::read(out.join(HEADER_FILE_NAME)).unwrap(), header);
    // Three images pad to two digits.
    assert_eq!(fs::read(out.join("00.png")).unwrap(), segments[0]);
    assert_eq!(fs::read(out.join("01.png")).unwrap(), segments[1]);
    assert_eq!(fs::read(out.join("02.png")).unwrap(), segments[2]);
    assert!(!out.join("03.png").exists());
}

#[test]
fn pack_reproduces_the_original_entry_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let jar = dir.path().join("game.jar");
    let out = dir.path().join("i_output");

    let header = vec![0x10, 0x20];
    let segments: Vec<Vec<u8>> = (1..=12).map(png_segment).collect();
    let packed = merge_segments(&header, &segments).unwrap();
    write_game_jar(&jar, &packed);

    unpack_archive(&jar, "i", &out).unwrap();
    let report = pack_directory(&out, &jar, "i").unwrap();
    assert_eq!(report.image_count, 12);

    let extractor = ZipExtractor::new(LocalFileReader::open(&jar).unwrap());
    let entries = extractor.list_entries().unwrap();
    let entry = entries.iter().find(|e| e.file_name == "i").unwrap();
    assert_eq!(extractor.read_entry(entry).unwrap(), packed);

    // The untouched entry survives the patch.
    let other = entries.iter().find(|e| e.file_name == "a.class").unwrap();
    assert_eq!(extractor.read_entry(other).unwrap(), b"class a");
}

#[test]
fn entry_without_png_data_fails_to_unpack() {
    let dir = tempfile::tempdir().unwrap();
    let jar = dir.path().join("game.jar");
    let out = dir.path().join("i_output");

    write_game_jar(&jar, b"just some text, no images here");

    let err = unpack_archive(&jar, "i", &out).unwrap_err();
    assert!(matches!(err, Error::NoResourcesFound));
    assert!(!out.exists());
}

#[test]
fn missing_entry_name_fails_to_unpack() {
    let dir = tempfile::tempdir().unwrap();
    let jar = dir.path().join("game.jar");

    let packed = merge_segments(&[0xAB], &[png_segment(0x01)]).unwrap();
    write_game_jar(&jar, &packed);

    let err = unpack_archive(&jar, "j", dir.path().join("j_output").as_path()).unwrap_err();
    assert!(matches!(err, Error::EntryMissing(name) if name == "j"));
}

#[test]
fn pack_without_header_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let jar = dir.path().join("game.jar");
    let out = dir.path().join("i_output");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("00.png"), png_segment(0x01)).unwrap();

    let packed = merge_segments(&[0xAB], &[png_segment(0x01)]).unwrap();
    write_game_jar(&jar, &packed);

    let err = pack_directory(&out, &jar, "i").unwrap_err();
    assert!(matches!(err, Error::NotFound(path) if path.ends_with(HEADER_FILE_NAME)));
}

#[test]
fn pack_skips_empty_png_files() {
    let dir = tempfile::tempdir().unwrap();
    let jar = dir.path().join("game.jar");
    let out = dir.path().join("i_output");

    let header = vec![0xAB];
    let segments = vec![png_segment(0x01), png_segment(0x02)];
    let packed = merge_segments(&header, &segments).unwrap();
    write_game_jar(&jar, &packed);

    unpack_archive(&jar, "i", &out).unwrap();
    // An empty file sorts between the two real images and must vanish.
    fs::write(out.join("005.png"), b"").unwrap();

    let report = pack_directory(&out, &jar, "i").unwrap();
    assert_eq!(report.image_count, 2);

    let extractor = ZipExtractor::new(LocalFileReader::open(&jar).unwrap());
    let entries = extractor.list_entries().unwrap();
    let entry = entries.iter().find(|e| e.file_name == "i").unwrap();
    assert_eq!(extractor.read_entry(entry).unwrap(), packed);
}
