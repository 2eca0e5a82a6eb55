//! Integration tests for the decode and dither pipeline

use std::path::PathBuf;

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

use tiffdither::api;
use tiffdither::commands::{build_cli, CommandFactory, TiffDitherCommandFactory};
use tiffdither::utils::logger::Logger;
use tiffdither::utils::write_utils::OutputFormat;
use tiffdither::{DitherMethod, TiffError};

/// Builds a single-strip RGB TIFF (SHORT geometry, LONG strip tags)
fn rgb_tiff<B: ByteOrder>(magic: [u8; 4], width: u16, height: u16, rgb: &[u8]) -> Vec<u8> {
    let entries: u16 = 6;
    let pixel_offset = 8 + 2 + 12 * entries as u32 + 4;

    let mut buffer = Vec::new();
    buffer.extend_from_slice(&magic);
    buffer.write_u32::<B>(8).unwrap();
    buffer.write_u16::<B>(entries).unwrap();

    for (tag, value) in [(256u16, width), (257, height), (277, 3), (259, 1)] {
        buffer.write_u16::<B>(tag).unwrap();
        buffer.write_u16::<B>(3).unwrap(); // SHORT
        buffer.write_u32::<B>(1).unwrap();
        buffer.write_u16::<B>(value).unwrap();
        buffer.write_u16::<B>(0).unwrap();
    }
    for (tag, value) in [(273u16, pixel_offset), (279, rgb.len() as u32)] {
        buffer.write_u16::<B>(tag).unwrap();
        buffer.write_u16::<B>(4).unwrap(); // LONG
        buffer.write_u32::<B>(1).unwrap();
        buffer.write_u32::<B>(value).unwrap();
    }
    buffer.write_u32::<B>(0).unwrap();

    buffer.extend_from_slice(rgb);
    buffer
}

/// Grey RGB triples whose luminance is 100, 150, 200, 50
fn grey_pixels() -> Vec<u8> {
    [100u8, 150, 200, 50].iter().flat_map(|&v| [v, v, v]).collect()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tiffdither-{}-{}", std::process::id(), name))
}

#[test]
fn test_little_endian_end_to_end() {
    let data = rgb_tiff::<LittleEndian>([0x49, 0x49, 0x2A, 0x00], 2, 2, &grey_pixels());
    let image = api::dither_bytes(data, DitherMethod::FloydSteinberg).unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.into_raw(), vec![0, 255, 255, 0]);
}

#[test]
fn test_big_endian_end_to_end() {
    let data = rgb_tiff::<BigEndian>([0x4D, 0x4D, 0x00, 0x2A], 2, 2, &grey_pixels());
    let image = api::dither_bytes(data, DitherMethod::FloydSteinberg).unwrap();

    assert_eq!(image.into_raw(), vec![0, 255, 255, 0]);
}

#[test]
fn test_forward_method() {
    let rgb: Vec<u8> = [100u8, 100, 100].iter().flat_map(|&v| [v, v, v]).collect();
    let data = rgb_tiff::<LittleEndian>([0x49, 0x49, 0x2A, 0x00], 3, 1, &rgb);
    let image = api::dither_bytes(data, DitherMethod::Forward).unwrap();

    assert_eq!(image.into_raw(), vec![0, 255, 0]);
}

#[test]
fn test_not_a_tiff() {
    let result = api::dither_bytes(vec![0, 0, 0, 0], DitherMethod::FloydSteinberg);
    assert!(matches!(result, Err(TiffError::NotATiff(_))));
}

#[test]
fn test_convert_file_writes_raw_bilevel() {
    let input = temp_path("convert-in.tif");
    let output = temp_path("convert-out.raw");
    std::fs::write(&input, rgb_tiff::<LittleEndian>([0x49, 0x49, 0x2A, 0x00], 2, 2, &grey_pixels())).unwrap();

    api::convert_file(&input, &output, DitherMethod::FloydSteinberg, OutputFormat::Raw).unwrap();
    let written = std::fs::read(&output).unwrap();

    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&output).unwrap();
    assert_eq!(written, vec![0, 255, 255, 0]);
}

#[test]
fn test_cli_dither_command_writes_png() {
    let input = temp_path("cli-in.tif");
    let output = temp_path("cli-out.png");
    std::fs::write(&input, rgb_tiff::<BigEndian>([0x4D, 0x4D, 0x00, 0x2A], 2, 2, &grey_pixels())).unwrap();

    let matches = build_cli()
        .try_get_matches_from([
            "tiffdither",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--format",
            "png",
        ])
        .unwrap();

    let logger = Logger::console();
    let command = TiffDitherCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    let decoded = image::open(&output).unwrap().to_luma8();
    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&output).unwrap();
    assert_eq!(decoded.into_raw(), vec![0, 255, 255, 0]);
}

#[test]
fn test_cli_analyze_command_reports_missing_file() {
    let matches = build_cli()
        .try_get_matches_from(["tiffdither", temp_path("does-not-exist.tif").to_str().unwrap()])
        .unwrap();

    let logger = Logger::console();
    let command = TiffDitherCommandFactory::new().create_command(&matches, &logger).unwrap();
    assert!(matches!(command.execute(), Err(TiffError::IoError(_))));
}

#[test]
fn test_cli_rejects_unknown_method() {
    let result = build_cli().try_get_matches_from(["tiffdither", "in.tif", "--method", "ordered"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_analyze_command_writes_report() {
    let input = temp_path("analyze-in.tif");
    let report = temp_path("analyze-report.txt");
    std::fs::write(&input, rgb_tiff::<LittleEndian>([0x49, 0x49, 0x2A, 0x00], 2, 2, &grey_pixels())).unwrap();

    let matches = build_cli()
        .try_get_matches_from(["tiffdither", input.to_str().unwrap(), "--verbose"])
        .unwrap();

    let logger = Logger::new(report.to_str().unwrap()).unwrap();
    let command = TiffDitherCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    let contents = std::fs::read_to_string(&report).unwrap();
    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&report).unwrap();

    assert!(contents.contains("Image width:................2"));
    assert!(contents.contains("Little Endian (II)"));
    assert!(contents.contains("StripOffsets"));
}
