//! Magnification regression test
//!
//! Runs the full scanner over synthetic rasters:
//!   1. Uniform gray stays uniform (3×, variant A, default thresholds)
//!   2. An isolated white pixel keeps its cross and softens its corners
//!   3. Output size is N·width × N·height at every scale
//!   4. The scanner matches a pixel-by-pixel reference scan
//!   5. Wrap-around changes the border blocks, edge replication does not
//!   6. Output channels stay within the source channel range
//!   7. Undersized buffers are rejected before anything is written

use hqx_core::Raster;
use hqx_core::color::{self, BLACK, WHITE, compose_rgb, gray};
use hqx_filter::{
    Classifier, FilterError, HqxOptions, Pattern, ScaleFactor, Thresholds, Window, hq3x_a, hq3x_b,
    hqx, hqx_into, output_len,
};
use hqx_io::ImageFormat;
use hqx_test::{RegParams, fixtures};

const SCALES: [ScaleFactor; 3] = [ScaleFactor::X2, ScaleFactor::X3, ScaleFactor::X4];

/// Straightforward single-threaded scan through the public building blocks.
fn reference_scan(src: &Raster, opts: &HqxOptions) -> Vec<u32> {
    let (w, h) = (src.width(), src.height());
    let n = opts.scale.factor() as usize;
    let table = opts.scale.table();
    let stride = w as usize * n;
    let mut out = vec![0u32; stride * h as usize * n];
    for row in 0..h {
        for col in 0..w {
            let window = Window::sample(src.data(), w, h, row, col, opts.wrap);
            let pattern = Pattern::encode(&window, &opts.thresholds, opts.classifier);
            let block = table.apply(pattern, &window, opts.classifier, &opts.thresholds);
            for r in 0..n {
                let start = (row as usize * n + r) * stride + col as usize * n;
                out[start..start + n].copy_from_slice(block.row(r));
            }
        }
    }
    out
}

fn sources() -> Vec<Raster> {
    let red = compose_rgb(220, 40, 40);
    let blue = compose_rgb(30, 60, 200);
    vec![
        fixtures::checkerboard(7, 5, 1, BLACK, WHITE).unwrap(),
        fixtures::checkerboard(9, 6, 2, red, blue).unwrap(),
        fixtures::diagonal_line(8, BLACK, WHITE).unwrap(),
        fixtures::isolated_pixel(5, 5, gray(30), WHITE).unwrap(),
        fixtures::gradient(16, 3).unwrap(),
    ]
}

#[test]
fn scale_reg_uniform() {
    let mut rp = RegParams::new("scale_uniform");

    // 2×2 uniform gray at 3× is a 6×6 uniform gray
    let src = [gray(128); 4];
    let mut dst = [0u32; 36];
    let written = hq3x_a(&src, 2, 2, &mut dst).unwrap();
    rp.compare_values(36.0, written as f64, 0.0);
    rp.compare_values(0.0, dst.iter().filter(|&&c| c != gray(128)).count() as f64, 0.0);

    // Every window of a uniform source encodes to pattern 0
    let w = Window::sample(&src, 2, 2, 1, 0, Default::default());
    let p = Pattern::encode(&w, &Thresholds::default(), Classifier::A);
    rp.compare_values(0.0, p.bits() as f64, 0.0);

    let src = fixtures::solid(5, 4, 0x8012_3456).unwrap();
    for scale in SCALES {
        let opts = HqxOptions::with_scale(scale).wrap(true, true);
        let out = hqx(&src, &opts).unwrap();
        let other = out.data().iter().filter(|&&c| c != 0x8012_3456).count();
        rp.compare_values(0.0, other as f64, 0.0);
    }

    assert!(rp.cleanup(), "scale_uniform regression test failed");
}

#[test]
fn scale_reg_isolated_pixel() {
    let mut rp = RegParams::new("scale_isolated");

    let src = fixtures::isolated_pixel(3, 3, BLACK, WHITE).unwrap();
    let corner = color::compose_rgba(127, 127, 127, 255);

    // 3×: white cross, corners (2·white + black + black) / 4
    let out = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X3)).unwrap();
    let expected = [
        [corner, WHITE, corner],
        [WHITE, WHITE, WHITE],
        [corner, WHITE, corner],
    ];
    for (r, row) in expected.iter().enumerate() {
        for (c, &want) in row.iter().enumerate() {
            let got = out.get_pixel(3 + c as u32, 3 + r as u32).unwrap_or(0);
            rp.compare_values(want as f64, got as f64, 0.0);
        }
    }
    rp.display_raster(&out, ImageFormat::Png).unwrap();

    // 4×: same shape with a 2-wide cross
    let out = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X4)).unwrap();
    for (x, y, want) in [(4, 4, corner), (5, 4, WHITE), (7, 7, corner), (5, 5, WHITE)] {
        rp.compare_values(want as f64, out.get_pixel(x, y).unwrap_or(0) as f64, 0.0);
    }

    // 2×: every sub-pixel is (14·white + black + black) / 16
    let out = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X2)).unwrap();
    let soft = color::compose_rgba(223, 223, 223, 255);
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        rp.compare_values(soft as f64, out.get_pixel(x, y).unwrap_or(0) as f64, 0.0);
    }

    // The black surround stays black away from the pixel
    rp.compare_values(BLACK as f64, out.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "scale_isolated regression test failed");
}

#[test]
fn scale_reg_diagonal() {
    let mut rp = RegParams::new("scale_diagonal");

    // A one-pixel diagonal is anti-aliased at 2×
    let src = fixtures::diagonal_line(4, BLACK, WHITE).unwrap();
    let out = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X2)).unwrap();
    let expected: [[u8; 8]; 4] = [
        [0xff, 0xff, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0xff, 0xbf, 0xbf, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x3f, 0xbf, 0xff, 0x7f, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x7f, 0xff, 0x7f, 0x00, 0x00, 0x00],
    ];
    for (y, row) in expected.iter().enumerate() {
        let got: Vec<u8> = out.row_data(y as u32).iter().map(|&c| color::blue(c)).collect();
        rp.compare_strings(row, &got);
    }
    rp.display_raster(&out, ImageFormat::Png).unwrap();

    assert!(rp.cleanup(), "scale_diagonal regression test failed");
}

#[test]
fn scale_reg_dimensions() {
    let mut rp = RegParams::new("scale_dimensions");

    for (w, h) in [(1, 1), (1, 7), (7, 1), (13, 4)] {
        let src = fixtures::gradient(w, h).unwrap();
        for scale in SCALES {
            let n = scale.factor();
            let out = hqx(&src, &HqxOptions::with_scale(scale)).unwrap();
            rp.compare_values((w * n) as f64, out.width() as f64, 0.0);
            rp.compare_values((h * n) as f64, out.height() as f64, 0.0);
            rp.compare_values(
                output_len(w, h, scale).unwrap_or(0) as f64,
                out.data().len() as f64,
                0.0,
            );
        }
    }

    assert!(rp.cleanup(), "scale_dimensions regression test failed");
}

#[test]
fn scale_reg_matches_reference() {
    let mut rp = RegParams::new("scale_reference");

    for src in sources() {
        for scale in SCALES {
            for classifier in [Classifier::A, Classifier::B] {
                for (wx, wy) in [(false, false), (true, true), (true, false)] {
                    let opts = HqxOptions::with_scale(scale)
                        .classifier(classifier)
                        .wrap(wx, wy);
                    let out = hqx(&src, &opts).unwrap();
                    let expected = Raster::from_pixels(
                        out.width(),
                        out.height(),
                        reference_scan(&src, &opts),
                    )
                    .unwrap();
                    rp.compare_rasters(&expected, &out);

                    // Repeat runs are identical
                    let again = hqx(&src, &opts).unwrap();
                    rp.compare_rasters(&out, &again);
                }
            }
        }
    }

    assert!(rp.cleanup(), "scale_reference regression test failed");
}

#[test]
fn scale_reg_wrap() {
    let mut rp = RegParams::new("scale_wrap");

    // White pixels that touch (0, 0) only across the left and top edges
    let mut src = vec![BLACK; 16];
    src[3] = WHITE;
    src[12] = WHITE;
    let src = Raster::from_pixels(4, 4, src).unwrap();

    let clamp = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X3)).unwrap();
    let wrap = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X3).wrap(true, true)).unwrap();

    // Clamped: the corner block only sees black
    for (x, y) in [(0, 0), (1, 0), (0, 1), (2, 2)] {
        rp.compare_values(BLACK as f64, clamp.get_pixel(x, y).unwrap_or(0) as f64, 0.0);
    }
    // Wrapped: the corner block picks up the far edges
    let expected = [
        (0, 0, gray(0xdf)),
        (1, 0, gray(0x1f)),
        (2, 0, BLACK),
        (0, 1, gray(0x1f)),
        (1, 1, BLACK),
    ];
    for (x, y, want) in expected {
        rp.compare_values(want as f64, wrap.get_pixel(x, y).unwrap_or(0) as f64, 0.0);
    }

    // Wrapping one axis alone is not enough here
    for (wx, wy) in [(true, false), (false, true)] {
        let one = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X3).wrap(wx, wy)).unwrap();
        rp.compare_values(BLACK as f64, one.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
    }

    assert!(rp.cleanup(), "scale_wrap regression test failed");
}

#[test]
fn scale_reg_variants() {
    let mut rp = RegParams::new("scale_variants");

    let a = compose_rgb(200, 0, 0);
    let b = compose_rgb(200, 0, 16);
    let src: Vec<u32> = (0..16).map(|i| if (i + i / 4) % 2 == 0 { a } else { b }).collect();
    let mut out_a = vec![0u32; 144];
    let mut out_b = vec![0u32; 144];
    hq3x_a(&src, 4, 4, &mut out_a).unwrap();
    hq3x_b(&src, 4, 4, &mut out_b).unwrap();
    rp.compare_values(0.0, (out_a == out_b) as u8 as f64, 0.0);

    // Zero thresholds see every step of a gentle checkerboard
    let src = fixtures::checkerboard(4, 4, 1, gray(100), gray(110)).unwrap();
    let loose = hqx(&src, &HqxOptions::with_scale(ScaleFactor::X2)).unwrap();
    let strict = hqx(
        &src,
        &HqxOptions::with_scale(ScaleFactor::X2).thresholds(Thresholds::exact()),
    )
    .unwrap();
    rp.compare_values(0.0, (loose.data() == strict.data()) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "scale_variants regression test failed");
}

#[test]
fn scale_reg_channel_range() {
    let mut rp = RegParams::new("scale_range");

    for src in sources() {
        let channel_range = |shift: u32| {
            let values = src.data().iter().map(|&c| (c >> shift) & 0xff);
            (values.clone().min().unwrap_or(0), values.max().unwrap_or(0))
        };
        for scale in SCALES {
            let out = hqx(&src, &HqxOptions::with_scale(scale)).unwrap();
            let mut outside = 0;
            for shift in [24, 16, 8, 0] {
                let (lo, hi) = channel_range(shift);
                outside += out
                    .data()
                    .iter()
                    .map(|&c| (c >> shift) & 0xff)
                    .filter(|&v| v < lo || v > hi)
                    .count();
            }
            rp.compare_values(0.0, outside as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "scale_range regression test failed");
}

#[test]
fn scale_reg_buffers() {
    let mut rp = RegParams::new("scale_buffers");

    let src = [WHITE; 6];
    let opts = HqxOptions::with_scale(ScaleFactor::X4);

    let mut dst = vec![7u32; 95];
    let err = hqx_into(&src, 3, 2, &mut dst, &opts);
    rp.compare_values(
        1.0,
        matches!(err, Err(FilterError::OutputTooSmall { needed: 96, actual: 95 })) as u8 as f64,
        0.0,
    );
    rp.compare_values(0.0, dst.iter().filter(|&&c| c != 7).count() as f64, 0.0);

    let err = hqx_into(&src[..5], 3, 2, &mut vec![0; 96], &opts);
    rp.compare_values(
        1.0,
        matches!(err, Err(FilterError::SourceTooSmall { needed: 6, actual: 5 })) as u8 as f64,
        0.0,
    );

    let err = hqx_into(&src, 3, 0, &mut vec![0; 96], &opts);
    rp.compare_values(
        1.0,
        matches!(err, Err(FilterError::InvalidDimension { .. })) as u8 as f64,
        0.0,
    );

    // A larger buffer is filled up to the result length only
    let mut dst = vec![7u32; 100];
    let written = hqx_into(&src, 3, 2, &mut dst, &opts).unwrap();
    rp.compare_values(96.0, written as f64, 0.0);
    rp.compare_values(0.0, dst[..96].iter().filter(|&&c| c != WHITE).count() as f64, 0.0);
    rp.compare_values(4.0, dst[96..].iter().filter(|&&c| c == 7).count() as f64, 0.0);

    let err = ScaleFactor::from_factor(5);
    rp.compare_values(
        1.0,
        matches!(err, Err(FilterError::InvalidScaleFactor(5))) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "scale_buffers regression test failed");
}
