//! PNM I/O regression test
//!
//! Tests read and write of binary PNM formats:
//!   1. PPM (P6) file roundtrip of an opaque raster
//!   2. PAM (P7 `RGB_ALPHA`) memory roundtrip of a raster with alpha
//!   3. PGM (P5) decoding into gray colors
//!   4. Format detection of written files
//!   5. Headers whose geometry exceeds the decode limit are rejected
//!      before any sample data is read
//!
//! # Not supported
//! - ASCII PNM (P1/P2/P3) and PBM (P4)

use hqx_core::color::{WHITE, compose_rgba, gray};
use hqx_core::{Raster, RasterMut};
use hqx_io::{
    ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image, write_image_mem,
};
use hqx_test::{RegParams, fixtures, regout_dir};
use std::fs;

#[test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("create output directory");

    // Test 1: PPM file roundtrip
    let pix1 = fixtures::diagonal_line(11, gray(20), WHITE).unwrap();
    let path1 = format!("{}/pnmio_rgb.pnm", outdir);
    write_image(&pix1, &path1, ImageFormat::Pnm).expect("write PPM");
    let pix2 = read_image(&path1).expect("read PPM");
    rp.compare_rasters(&pix1, &pix2);

    // Test 4: detection of the written file
    let format = detect_format(&path1).expect("detect PPM");
    rp.compare_values(1.0, (format == ImageFormat::Pnm) as u8 as f64, 0.0);

    // Test 2: PAM memory roundtrip with alpha
    let mut pix = RasterMut::new(3, 2).unwrap();
    pix.set_has_alpha(true);
    pix.set_rgba(0, 0, 1, 2, 3, 0).unwrap();
    pix.set_rgba(2, 1, 200, 150, 100, 50).unwrap();
    let pix1: Raster = pix.into();
    let bytes = write_image_mem(&pix1, ImageFormat::Pnm).expect("encode PAM");
    rp.compare_strings(b"P7\n", &bytes[..3]);
    let pix2 = read_image_mem(&bytes).expect("decode PAM");
    rp.compare_rasters(&pix1, &pix2);
    rp.compare_values(1.0, pix2.has_alpha() as u8 as f64, 0.0);

    // Test 3: PGM decoding
    let mut pgm = b"P5\n4 1\n255\n".to_vec();
    pgm.extend_from_slice(&[0, 85, 170, 255]);
    let pix = read_image_mem(&pgm).expect("decode PGM");
    let expected =
        Raster::from_pixels(4, 1, vec![gray(0), gray(85), gray(170), gray(255)]).unwrap();
    rp.compare_rasters(&expected, &pix);

    // Grayscale-alpha PAM
    let mut pam = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 2\nMAXVAL 255\nTUPLTYPE GRAYSCALE_ALPHA\nENDHDR\n"
        .to_vec();
    pam.extend_from_slice(&[60, 7]);
    let pix = read_image_mem(&pam).expect("decode gray-alpha PAM");
    rp.compare_values(
        compose_rgba(60, 60, 60, 7) as f64,
        pix.get_pixel(0, 0).unwrap_or(0) as f64,
        0.0,
    );

    // Test 5: oversized and truncated inputs
    let huge = b"P6 4294967295 4294967295 255\n";
    rp.compare_values(
        1.0,
        matches!(read_image_mem(huge), Err(IoError::InvalidData(_))) as u8 as f64,
        0.0,
    );
    let mut short = b"P6\n3000 3000\n255\n".to_vec();
    short.extend_from_slice(&[1, 2, 3]);
    rp.compare_values(
        1.0,
        matches!(read_image_mem(&short), Err(IoError::DecodeError(_))) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "pnmio regression test failed");
}
