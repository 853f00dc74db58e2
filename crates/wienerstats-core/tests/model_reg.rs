//! Data model regression test
//!
//! Tap numbering, halo addressing and output storage as seen by a
//! statistics kernel.

use wienerstats_core::{
    BitDepth, Patch, Pixel, Rect, WIENER_WIN2, WienerStats, WienerWindow, is_symmetric,
};
use wienerstats_test::{MAX_DATA_BLOCK, RegParams, StatsFixture};

#[test]
fn window_model_reg() {
    let mut rp = RegParams::new("window_model");

    for window in WienerWindow::ALL {
        let win = window.size();
        // Column-major numbering visits every tap exactly once
        let mut seen = vec![false; window.taps()];
        for c in 0..win {
            for r in 0..win {
                seen[window.tap_index(r, c)] = true;
            }
        }
        rp.check(&format!("win {win} tap cover"), seen.iter().all(|&s| s));
        rp.compare_usize(win * win - 1, window.tap_index(win - 1, win - 1));
        rp.compare_usize(window.size(), 2 * window.half() + 1);
        rp.check(
            &format!("win {win} try_from"),
            WienerWindow::try_from(win) == Ok(window),
        );
    }
    rp.compare_usize(WIENER_WIN2, WienerWindow::Luma.taps());

    // 10-bit statistics are scaled down by 4, 12-bit by 16
    for (depth, divisor) in BitDepth::ALL.into_iter().zip([1, 4, 16]) {
        rp.compare_i64(divisor, depth.divisor());
        rp.check(&format!("{depth} u16"), depth.check_storage::<u16>().is_ok());
    }

    assert!(rp.cleanup(), "window_model regression test failed");
}

#[test]
fn patch_halo_reg() {
    let mut rp = RegParams::new("patch_halo");

    let mut fx = StatsFixture::<u16>::new(WienerWindow::Luma);
    for (i, v) in fx.dgd_buf_mut().iter_mut().enumerate() {
        *v = (i % 4096) as u16;
    }
    let dgd = fx.dgd().unwrap();
    let half = WienerWindow::Luma.half();

    // Unit pixel (0, 0) sits `half` rows and columns into the buffer
    rp.compare_usize(half * MAX_DATA_BLOCK + half, dgd.index(0, 0));
    // Its top-left tap is the first buffer sample
    rp.compare_usize(0, dgd.index(0, 0) - (half * dgd.stride() + half));
    let row = dgd.row(5, 2, 4).unwrap();
    let start = dgd.index(5, 2);
    rp.check("row view", row == &fx.dgd_buf()[start..start + 4]);
    rp.check("get", dgd.get(1, 1) == Some((dgd.index(1, 1) % 4096) as u16));

    let narrow = StatsFixture::<u8>::new(WienerWindow::Chroma)
        .with_dgd_stride(100)
        .unwrap();
    let dgd = narrow.dgd().unwrap();
    rp.compare_usize(100, dgd.stride());
    rp.compare_usize(2 * MAX_DATA_BLOCK + 2, dgd.origin());
    rp.check("u8 byte view", u8::as_bytes(narrow.dgd_buf()).is_some());

    rp.check(
        "origin past end",
        Patch::with_offset(narrow.src_buf(), 1, narrow.src_buf().len()).is_err(),
    );

    assert!(rp.cleanup(), "patch_halo regression test failed");
}

#[test]
fn stats_storage_reg() {
    let mut rp = RegParams::new("stats_storage");

    let mut stats = WienerStats::new(WienerWindow::Luma);
    rp.compare_usize(49, stats.m().len());
    rp.compare_usize(2401, stats.h().len());

    {
        let (m, h) = stats.prepare(WienerWindow::Chroma);
        for (t, v) in m.iter_mut().enumerate() {
            *v = t as i64;
        }
        for t1 in 0..25 {
            for t2 in 0..25 {
                h[t1 * 25 + t2] = (t1 * t2) as i64;
            }
        }
    }
    rp.compare_i64(24, stats.m()[24]);
    rp.compare_i64(12, stats.h_at(3, 4));
    rp.check("symmetric", stats.is_symmetric());
    rp.check("free fn", is_symmetric(stats.h(), 25));

    let rect = Rect::from_origin(16, 16, 16, 16).unwrap();
    rp.compare_usize(256, rect.area());

    assert!(rp.cleanup(), "stats_storage regression test failed");
}
