//! Neighborhood sampling regression test
//!
//! Samples every pixel of a non-square raster whose colors encode their
//! own coordinates, and checks each window position against the
//! expected neighbor under wrap-around and edge replication.

use hqx_filter::{ColumnNeighbors, RowNeighbors, Window, Wrap};
use hqx_test::RegParams;

const W: u32 = 5;
const H: u32 = 3;

fn expected_coord(pos: i64, len: u32, wrap: bool) -> u32 {
    let len = len as i64;
    if wrap {
        pos.rem_euclid(len) as u32
    } else {
        pos.clamp(0, len - 1) as u32
    }
}

#[test]
fn window_reg_all_pixels() {
    let mut rp = RegParams::new("window_all");

    let src: Vec<u32> = (0..W * H).collect();
    for wrap in [Wrap::NONE, Wrap::BOTH, Wrap::new(true, false), Wrap::new(false, true)] {
        let mut wrong = 0;
        for row in 0..H {
            for col in 0..W {
                let window = Window::sample(&src, W, H, row, col, wrap);
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        let y = expected_coord(row as i64 + dy, H, wrap.y);
                        let x = expected_coord(col as i64 + dx, W, wrap.x);
                        let idx = ((dy + 1) * 3 + dx + 1) as usize;
                        if window[idx] != y * W + x {
                            wrong += 1;
                        }
                    }
                }
                if window.center() != row * W + col {
                    wrong += 1;
                }
            }
        }
        rp.compare_values(0.0, wrong as f64, 0.0);
    }

    assert!(rp.cleanup(), "window_all regression test failed");
}

#[test]
fn window_reg_neighbor_offsets() {
    let mut rp = RegParams::new("window_offsets");

    let rows = RowNeighbors::new(0, W, H, true);
    rp.compare_values(((H - 1) * W) as f64, rows.above as f64, 0.0);
    rp.compare_values(W as f64, rows.below as f64, 0.0);
    let rows = RowNeighbors::new(H - 1, W, H, false);
    rp.compare_values(rows.center as f64, rows.below as f64, 0.0);

    let cols = ColumnNeighbors::new(W - 1, W, true);
    rp.compare_values(0.0, cols.right as f64, 0.0);
    let cols = ColumnNeighbors::new(0, W, false);
    rp.compare_values(0.0, cols.left as f64, 0.0);

    assert!(rp.cleanup(), "window_offsets regression test failed");
}
