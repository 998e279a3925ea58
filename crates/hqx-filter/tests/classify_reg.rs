//! Color classification regression test
//!
//! Checks the color-distance test and the pattern encoder over a small
//! palette:
//!   1. Symmetry of both classifier variants
//!   2. Bitwise-equal colors never differ, even with zero thresholds
//!   3. Each threshold gates only its own component
//!   4. Pattern bits follow neighbor order 0,1,2,3,5,6,7,8

use hqx_core::color::{BLACK, WHITE, compose_rgb, compose_rgba, gray};
use hqx_filter::pattern::NEIGHBORS;
use hqx_filter::{Classifier, Pattern, Thresholds, Window};
use hqx_test::RegParams;

fn palette() -> Vec<u32> {
    vec![
        BLACK,
        WHITE,
        gray(100),
        gray(110),
        gray(160),
        compose_rgb(200, 0, 0),
        compose_rgb(200, 0, 16),
        compose_rgb(0, 180, 40),
        compose_rgb(12, 34, 250),
        compose_rgba(255, 255, 255, 0),
        compose_rgba(90, 60, 30, 128),
    ]
}

#[test]
fn classify_reg_symmetry() {
    let mut rp = RegParams::new("classify_symmetry");

    let colors = palette();
    let thresholds = [Thresholds::default(), Thresholds::exact()];
    for classifier in [Classifier::A, Classifier::B] {
        let mut asymmetric = 0;
        for t in &thresholds {
            for &c1 in &colors {
                for &c2 in &colors {
                    if classifier.is_different(c1, c2, t) != classifier.is_different(c2, c1, t) {
                        asymmetric += 1;
                    }
                }
            }
        }
        rp.compare_values(0.0, asymmetric as f64, 0.0);
    }

    assert!(rp.cleanup(), "classify_symmetry regression test failed");
}

#[test]
fn classify_reg_equality() {
    let mut rp = RegParams::new("classify_equality");

    let t = Thresholds::exact();
    for &c in &palette() {
        rp.compare_values(0.0, Classifier::A.is_different(c, c, &t) as u8 as f64, 0.0);
        rp.compare_values(0.0, Classifier::B.is_different(c, c, &t) as u8 as f64, 0.0);
    }

    // Any change is visible with zero thresholds
    rp.compare_values(
        1.0,
        Classifier::A.is_different(gray(100), gray(101), &t) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "classify_equality regression test failed");
}

#[test]
fn classify_reg_thresholds() {
    let mut rp = RegParams::new("classify_thresholds");

    // Gray 100 -> 160 moves only Y (by 60 under A)
    let (c1, c2) = (gray(100), gray(160));
    let p1 = Classifier::A.to_ayuv(c1);
    let p2 = Classifier::A.to_ayuv(c2);
    rp.compare_values(60.0, ((p2 >> 16) & 0xff) as f64 - ((p1 >> 16) & 0xff) as f64, 0.0);

    let y_only = Thresholds::new(59, 255, 255, 255);
    rp.compare_values(1.0, Classifier::A.is_different(c1, c2, &y_only) as u8 as f64, 0.0);
    let y_wide = Thresholds::new(60, 0, 0, 0);
    rp.compare_values(0.0, Classifier::A.is_different(c1, c2, &y_wide) as u8 as f64, 0.0);

    // Alpha alone
    let (o, t) = (compose_rgba(50, 50, 50, 255), compose_rgba(50, 50, 50, 0));
    let a_wide = Thresholds::new(0, 0, 0, 255);
    rp.compare_values(0.0, Classifier::B.is_different(o, t, &a_wide) as u8 as f64, 0.0);
    rp.compare_values(
        1.0,
        Classifier::B.is_different(o, t, &Thresholds::default()) as u8 as f64,
        0.0,
    );

    // The variants weigh chroma differently
    let (r1, r2) = (compose_rgb(200, 0, 0), compose_rgb(200, 0, 16));
    let d = Thresholds::default();
    rp.compare_values(1.0, Classifier::A.is_different(r1, r2, &d) as u8 as f64, 0.0);
    rp.compare_values(0.0, Classifier::B.is_different(r1, r2, &d) as u8 as f64, 0.0);
    rp.compare_values(
        0.0,
        (Classifier::from_mode('B') == Classifier::from_mode('A')) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "classify_thresholds regression test failed");
}

#[test]
fn classify_reg_pattern_bits() {
    let mut rp = RegParams::new("classify_pattern");

    let t = Thresholds::default();
    for mask in [0u8, 1, 0x18, 0x5a, 0xa5, 0x80, 0xff] {
        let mut colors = [gray(40); 9];
        for (k, &idx) in NEIGHBORS.iter().enumerate() {
            if mask & (1 << k) != 0 {
                colors[idx] = gray(220);
            }
        }
        let window = Window::from_colors(colors);
        for classifier in [Classifier::A, Classifier::B] {
            let p = Pattern::encode(&window, &t, classifier);
            rp.compare_values(mask as f64, p.bits() as f64, 0.0);
        }
    }

    // A changed center flips every bit
    let mut colors = [gray(40); 9];
    colors[4] = gray(220);
    let p = Pattern::encode(&Window::from_colors(colors), &t, Classifier::A);
    rp.compare_values(255.0, p.bits() as f64, 0.0);
    rp.compare_values(1.0, (p == Pattern::ISOLATED) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "classify_pattern regression test failed");
}
