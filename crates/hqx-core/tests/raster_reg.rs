//! Raster container regression test
//!
//! Tests creation, shared ownership and pixel access:
//!   1. Geometry and default fill
//!   2. Clones share pixels; freezing a `RasterMut` keeps its edits
//!   3. Channel helpers agree with pixel accessors

use hqx_core::color::{self, BLACK, WHITE};
use hqx_core::{Error, Raster, RasterMut};
use hqx_test::RegParams;

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // Test 1: geometry
    let r = Raster::new(7, 3).unwrap();
    rp.compare_values(7.0, r.width() as f64, 0.0);
    rp.compare_values(3.0, r.height() as f64, 0.0);
    rp.compare_values(21.0, r.data().len() as f64, 0.0);
    rp.compare_values(0.0, r.data().iter().filter(|&&c| c != BLACK).count() as f64, 0.0);
    rp.compare_values(
        1.0,
        matches!(Raster::new(0, 0), Err(Error::InvalidDimension { .. })) as u8 as f64,
        0.0,
    );

    // Test 2: sharing and freezing
    let shared = r.clone();
    rp.compare_values(1.0, std::ptr::eq(r.data(), shared.data()) as u8 as f64, 0.0);
    let mut m = RasterMut::new(7, 3).unwrap();
    m.data_mut().copy_from_slice(r.data());
    m.row_data_mut(1).copy_from_slice(&[WHITE; 7]);
    m.set_pixel(6, 2, 0x1234_5678).unwrap();
    let changed: Raster = m.into();
    rp.compare_values(BLACK as f64, r.get_pixel(6, 2).unwrap_or(0) as f64, 0.0);
    rp.compare_values(WHITE as f64, changed.get_pixel(3, 1).unwrap_or(0) as f64, 0.0);
    rp.compare_values(0x1234_5678 as f64, changed.get_pixel(6, 2).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, changed.sizes_equal(&r) as u8 as f64, 0.0);

    // Test 3: channels
    let mut m = RasterMut::new(2, 1).unwrap();
    m.set_rgba(1, 0, 10, 20, 30, 40).unwrap();
    let px = m.get_pixel(1, 0).unwrap_or(0);
    rp.compare_values(10.0, color::red(px) as f64, 0.0);
    rp.compare_values(20.0, color::green(px) as f64, 0.0);
    rp.compare_values(30.0, color::blue(px) as f64, 0.0);
    rp.compare_values(40.0, color::alpha(px) as f64, 0.0);
    rp.compare_values(0x280a_141e as f64, px as f64, 0.0);

    assert!(rp.cleanup(), "raster regression test failed");
}
