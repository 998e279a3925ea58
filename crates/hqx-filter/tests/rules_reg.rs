//! Rule table regression test
//!
//! Walks all 256 pattern codes of every table:
//!   1. Each rule has exactly N×N operations
//!   2. Every blend's weights sum to its power-of-two denominator
//!   3. A uniform window maps to a uniform block
//!   4. Corner tests are evaluated between orthogonal neighbors only
//!   5. Every block of every table, with corner tests forced both ways and
//!      with one corner pair differing at a time, matches a pinned digest
//!   6. Selected conditional rules produce the documented blends

use hqx_core::color::{alpha, compose_rgba};
use hqx_filter::{
    Blend, Classifier, HQ2X, HQ3X, HQ4X, Op, Pattern, RuleTable, Thresholds, Window, mix,
};
use hqx_test::RegParams;

const TABLES: [&RuleTable; 3] = [&HQ2X, &HQ3X, &HQ4X];

fn blends(op: &Op) -> Vec<Blend> {
    match *op {
        Op::Mix(b) => vec![b],
        Op::Edge(_, split, join) => vec![split, join],
    }
}

#[test]
fn rules_reg_totality() {
    let mut rp = RegParams::new("rules_totality");

    for table in TABLES {
        let n = table.scale();
        rp.compare_values(157.0, table.rule_count() as f64, 0.0);
        let mut short = 0;
        for code in 0..=255u8 {
            if table.rule(Pattern::from_bits(code)).len() != n * n {
                short += 1;
            }
        }
        rp.compare_values(0.0, short as f64, 0.0);
    }

    assert!(rp.cleanup(), "rules_totality regression test failed");
}

#[test]
fn rules_reg_weights() {
    let mut rp = RegParams::new("rules_weights");

    for table in TABLES {
        let mut bad = 0;
        for code in 0..=255u8 {
            for op in table.rule(Pattern::from_bits(code)) {
                for b in blends(op) {
                    let sum: u32 = b.taps().iter().map(|&(_, w)| w as u32).sum();
                    let in_window = b.taps().iter().all(|&(i, _)| i < 9);
                    let len_ok = (1..=3).contains(&b.taps().len());
                    if sum != b.denominator() || !in_window || !len_ok {
                        bad += 1;
                    }
                }
            }
        }
        rp.compare_values(0.0, bad as f64, 0.0);
    }

    assert!(rp.cleanup(), "rules_weights regression test failed");
}

#[test]
fn rules_reg_uniform_fixed_point() {
    let mut rp = RegParams::new("rules_uniform");

    let thresholds = [Thresholds::default(), Thresholds::exact()];
    for color in [0u32, 0xff00_0000, 0xffff_ffff, 0x8040_c020, 0x0102_0304] {
        let window = Window::uniform(color);
        for table in TABLES {
            let mut changed = 0;
            for code in 0..=255u8 {
                for t in &thresholds {
                    for classifier in [Classifier::A, Classifier::B] {
                        let block = table.apply(Pattern::from_bits(code), &window, classifier, t);
                        changed += block.colors().iter().filter(|&&c| c != color).count();
                    }
                }
            }
            rp.compare_values(0.0, changed as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "rules_uniform regression test failed");
}

#[test]
fn rules_reg_corner_pairs() {
    let mut rp = RegParams::new("rules_corners");

    let orthogonal = [1usize, 3, 5, 7];
    for table in TABLES {
        let mut edges = 0;
        let mut bad = 0;
        for code in 0..=255u8 {
            for op in table.rule(Pattern::from_bits(code)) {
                if let Op::Edge(corner, _, _) = op {
                    edges += 1;
                    let (a, b) = corner.pair();
                    if !orthogonal.contains(&a) || !orthogonal.contains(&b) || a == b {
                        bad += 1;
                    }
                }
            }
        }
        rp.compare_values(0.0, bad as f64, 0.0);
        // Every table has conditional rules
        rp.compare_values(1.0, (edges > 0) as u8 as f64, 0.0);
    }

    // Flat patterns never need a corner test
    let flat = HQ3X.rule(Pattern::FLAT);
    rp.compare_values(
        0.0,
        flat.iter().filter(|op| matches!(op, Op::Edge(..))).count() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "rules_corners regression test failed");
}

/// Nine colors whose channels all differ pairwise, so any change of tap
/// index or weight changes the mix.
const SAMPLE: [u32; 9] = [
    0xff10_2030,
    0xf748_8820,
    0xef90_14c0,
    0xe724_f064,
    0xdf84_807c,
    0xd7e0_3810,
    0xcf30_54f0,
    0xc7c4_c828,
    0xbf64_04a4,
];

/// No component difference can exceed these.
const NEVER_DIFFERENT: Thresholds = Thresholds::new(255, 255, 255, 255);

/// Only luma decides.
const LUMA_ONLY: Thresholds = Thresholds::new(Thresholds::DEFAULT_Y, 255, 255, 255);

/// Gray levels for window positions 1, 3, 5 and 7 such that, under
/// `LUMA_ONLY`, exactly one corner pair differs: top-left, top-right,
/// bottom-right, bottom-left.
const RING_LUMA: [[u8; 4]; 4] = [
    [100, 0, 80, 40],
    [0, 40, 100, 80],
    [40, 80, 0, 100],
    [80, 100, 40, 0],
];

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn ring_window(corner: usize) -> Window {
    let mut colors = SAMPLE;
    for (slot, y) in [1, 3, 5, 7].into_iter().zip(RING_LUMA[corner]) {
        colors[slot] = compose_rgba(y, y, y, alpha(SAMPLE[slot]));
    }
    Window::from_colors(colors)
}

/// FNV-1a over all blocks of a table, in code order.
fn table_digest(table: &RuleTable) -> String {
    let sample = Window::from_colors(SAMPLE);
    let mut cases = vec![(sample, Thresholds::exact()), (sample, NEVER_DIFFERENT)];
    cases.extend((0..4).map(|corner| (ring_window(corner), LUMA_ONLY)));

    let mut hash = FNV_OFFSET;
    for code in 0..=255u8 {
        for (window, thresholds) in &cases {
            let block = table.apply(Pattern::from_bits(code), window, Classifier::A, thresholds);
            hash = block
                .colors()
                .iter()
                .flat_map(|c| c.to_le_bytes())
                .fold(hash, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        }
    }
    format!("{hash:016x}")
}

#[test]
fn rules_reg_digest() {
    let mut rp = RegParams::new("rules_digest");

    // Corner pairs of the ring windows behave as intended
    for corner in 0..4 {
        let w = ring_window(corner);
        for (other, (a, b)) in [(3, 1), (1, 5), (5, 7), (7, 3)].into_iter().enumerate() {
            let different = Classifier::A.is_different(w[a], w[b], &LUMA_ONLY);
            rp.compare_values((other == corner) as u8 as f64, different as u8 as f64, 0.0);
        }
    }

    rp.compare_strings(b"96f557369d7b323d", table_digest(&HQ2X).as_bytes());
    rp.compare_strings(b"ac9b966f454332b1", table_digest(&HQ3X).as_bytes());
    rp.compare_strings(b"87815ac904495445", table_digest(&HQ4X).as_bytes());

    assert!(rp.cleanup(), "rules_digest regression test failed");
}

type Taps = &'static [(usize, u32)];

const C: Taps = &[(4, 1)];

/// Compare one block against per-slot `(window index, weight)` mixes.
fn check_block(
    rp: &mut RegParams,
    table: &RuleTable,
    code: u8,
    window: &Window,
    thresholds: &Thresholds,
    expected: &[Taps],
) {
    let block = table.apply(Pattern::from_bits(code), window, Classifier::A, thresholds);
    rp.compare_values(expected.len() as f64, block.colors().len() as f64, 0.0);
    let wrong = block
        .colors()
        .iter()
        .zip(expected)
        .filter(|&(&got, taps)| {
            let colors: Vec<u32> = taps.iter().map(|&(i, _)| window[i]).collect();
            let weights: Vec<u32> = taps.iter().map(|&(_, w)| w).collect();
            mix(&colors, &weights, weights.iter().sum()).ok() != Some(got)
        })
        .count();
    rp.compare_values(0.0, wrong as f64, 0.0);
}

#[test]
fn rules_reg_conditional_bodies() {
    let mut rp = RegParams::new("rules_conditional");

    let w = Window::from_colors(SAMPLE);
    let split = Thresholds::exact();
    let top_left_only = ring_window(0);

    // 3x, codes 18 and 50: top-right corner re-tests 1 against 5
    #[rustfmt::skip]
    let hq3x_18_split: [Taps; 9] = [
        &[(4, 3), (0, 1)], C, &[(4, 3), (2, 1)],
        &[(4, 3), (3, 1)], C, C,
        &[(4, 2), (7, 1), (3, 1)], &[(4, 3), (7, 1)], &[(4, 3), (8, 1)],
    ];
    #[rustfmt::skip]
    let hq3x_18_join: [Taps; 9] = [
        &[(4, 3), (0, 1)], &[(4, 7), (1, 1)], &[(4, 2), (1, 7), (5, 7)],
        &[(4, 3), (3, 1)], C, &[(4, 7), (5, 1)],
        &[(4, 2), (7, 1), (3, 1)], &[(4, 3), (7, 1)], &[(4, 3), (8, 1)],
    ];
    for code in [18, 50] {
        check_block(&mut rp, &HQ3X, code, &w, &split, &hq3x_18_split);
        check_block(&mut rp, &HQ3X, code, &w, &NEVER_DIFFERENT, &hq3x_18_join);
    }

    // 3x, codes 10 and 138: top-left corner re-tests 3 against 1
    #[rustfmt::skip]
    let hq3x_10_split: [Taps; 9] = [
        &[(4, 3), (0, 1)], C, &[(4, 3), (2, 1)],
        C, C, &[(4, 3), (5, 1)],
        &[(4, 3), (6, 1)], &[(4, 3), (7, 1)], &[(4, 2), (5, 1), (7, 1)],
    ];
    #[rustfmt::skip]
    let hq3x_10_join: [Taps; 9] = [
        &[(4, 2), (3, 7), (1, 7)], &[(4, 7), (1, 1)], &[(4, 3), (2, 1)],
        &[(4, 7), (3, 1)], C, &[(4, 3), (5, 1)],
        &[(4, 3), (6, 1)], &[(4, 3), (7, 1)], &[(4, 2), (5, 1), (7, 1)],
    ];
    for code in [10, 138] {
        check_block(&mut rp, &HQ3X, code, &w, &split, &hq3x_10_split);
        check_block(&mut rp, &HQ3X, code, &w, &NEVER_DIFFERENT, &hq3x_10_join);
    }

    // 3x, code 255: all corners independent
    check_block(&mut rp, &HQ3X, 255, &w, &split, &[C; 9]);
    #[rustfmt::skip]
    let hq3x_255_join: [Taps; 9] = [
        &[(4, 2), (3, 1), (1, 1)], C, &[(4, 2), (1, 1), (5, 1)],
        C, C, C,
        &[(4, 2), (7, 1), (3, 1)], C, &[(4, 2), (5, 1), (7, 1)],
    ];
    check_block(&mut rp, &HQ3X, 255, &w, &NEVER_DIFFERENT, &hq3x_255_join);
    let mut hq3x_255_top_left = hq3x_255_join;
    hq3x_255_top_left[0] = C;
    check_block(&mut rp, &HQ3X, 255, &top_left_only, &LUMA_ONLY, &hq3x_255_top_left);

    // 2x
    #[rustfmt::skip]
    let hq2x_10_split: [Taps; 4] = [
        &[(4, 3), (0, 1)], &[(4, 2), (2, 1), (5, 1)],
        &[(4, 2), (6, 1), (7, 1)], &[(4, 2), (5, 1), (7, 1)],
    ];
    let mut hq2x_10_join = hq2x_10_split;
    hq2x_10_join[0] = &[(4, 2), (3, 1), (1, 1)];
    check_block(&mut rp, &HQ2X, 10, &w, &split, &hq2x_10_split);
    check_block(&mut rp, &HQ2X, 10, &w, &NEVER_DIFFERENT, &hq2x_10_join);
    #[rustfmt::skip]
    let hq2x_255_top_left: [Taps; 4] = [
        C, &[(4, 14), (1, 1), (5, 1)],
        &[(4, 14), (7, 1), (3, 1)], &[(4, 14), (5, 1), (7, 1)],
    ];
    check_block(&mut rp, &HQ2X, 255, &top_left_only, &LUMA_ONLY, &hq2x_255_top_left);

    // 4x, code 10: the top-left corner switches a 2x2 quadrant
    #[rustfmt::skip]
    let hq4x_10_split: [Taps; 16] = [
        &[(4, 5), (0, 3)], &[(4, 3), (0, 1)], &[(4, 3), (2, 1)], &[(4, 5), (2, 3)],
        &[(4, 3), (0, 1)], &[(4, 7), (0, 1)], &[(4, 7), (2, 1)], &[(4, 5), (5, 2), (2, 1)],
        &[(4, 3), (6, 1)], &[(4, 7), (6, 1)], &[(4, 6), (5, 1), (7, 1)], &[(4, 5), (5, 2), (7, 1)],
        &[(4, 5), (6, 3)], &[(4, 5), (7, 2), (6, 1)], &[(4, 5), (7, 2), (5, 1)], &[(4, 2), (7, 1), (5, 1)],
    ];
    let mut hq4x_10_join = hq4x_10_split;
    hq4x_10_join[0] = &[(1, 1), (3, 1)];
    hq4x_10_join[1] = &[(1, 1), (4, 1)];
    hq4x_10_join[4] = &[(3, 1), (4, 1)];
    hq4x_10_join[5] = C;
    check_block(&mut rp, &HQ4X, 10, &w, &split, &hq4x_10_split);
    check_block(&mut rp, &HQ4X, 10, &w, &NEVER_DIFFERENT, &hq4x_10_join);

    assert!(rp.cleanup(), "rules_conditional regression test failed");
}
