//! PNG I/O regression test
//!
//! Round-trips synthetic rasters through PNG files and memory buffers:
//!   1. Opaque RGB through a file
//!   2. RGBA through memory, alpha flag preserved
//!   3. Re-encoding a decoded image reproduces the same bytes

use hqx_core::color::{BLACK, WHITE, compose_rgb};
use hqx_core::{Raster, RasterMut};
use hqx_io::{ImageFormat, read_image, read_image_mem, write_image, write_image_mem};
use hqx_test::{RegParams, fixtures, regout_dir};
use std::fs;

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("create output directory");

    // Test 1: RGB file roundtrip
    let pix1 = fixtures::checkerboard(17, 9, 3, compose_rgb(250, 10, 90), BLACK).unwrap();
    let path = format!("{}/pngio_rgb.png", outdir);
    write_image(&pix1, &path, ImageFormat::Png).expect("write PNG");
    let pix2 = read_image(&path).expect("read PNG");
    rp.compare_rasters(&pix1, &pix2);
    rp.compare_values(0.0, pix2.has_alpha() as u8 as f64, 0.0);

    // Test 2: RGBA memory roundtrip
    let mut pix = RasterMut::new(4, 4).unwrap();
    pix.set_has_alpha(true);
    for (i, px) in pix.data_mut().iter_mut().enumerate() {
        *px = ((i as u32 * 16) << 24) | 0x00ff_8000;
    }
    let pix1: Raster = pix.into();
    let bytes = write_image_mem(&pix1, ImageFormat::Png).expect("encode PNG");
    let pix2 = read_image_mem(&bytes).expect("decode PNG");
    rp.compare_rasters(&pix1, &pix2);
    rp.compare_values(1.0, pix2.has_alpha() as u8 as f64, 0.0);

    // Test 3: encoding is stable
    let bytes2 = write_image_mem(&pix2, ImageFormat::Png).expect("re-encode PNG");
    rp.compare_strings(&bytes, &bytes2);

    let gray = fixtures::gradient(32, 2).unwrap();
    let bytes = write_image_mem(&gray, ImageFormat::Png).expect("encode gradient");
    let back = read_image_mem(&bytes).expect("decode gradient");
    rp.compare_rasters(&gray, &back);
    rp.compare_values(WHITE as f64, back.get_pixel(31, 1).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "pngio regression test failed");
}
