//! Raw accumulator sums and finalization
//!
//! The specialized and SIMD paths both accumulate uncentered sums over the
//! sampled rows and re-center them once at the end:
//!
//! ```text
//! M[t]      = (Mraw[t]      + avg^2 * n - avg * (sumX     + sumY[t]))  / div
//! H[t1, t2] = (Hraw[t1, t2] + avg^2 * n - avg * (sumY[t1] + sumY[t2])) / div
//! ```
//!
//! which equals the centered sum of `(D - avg) * (X - avg)` exactly, because
//! the row weights add up to the rectangle height.

use wienerstats_core::{BitDepth, WIENER_WIN2};

/// Weighted uncentered sums for one rectangle
///
/// Sized for the luma window; smaller windows use a prefix of every array.
pub(crate) struct RawSums {
    pub sum_x: i64,
    pub sum_y: [i64; WIENER_WIN2],
    pub m: [i64; WIENER_WIN2],
    pub h: [[i64; WIENER_WIN2]; WIENER_WIN2],
}

impl RawSums {
    pub fn new() -> Self {
        Self {
            sum_x: 0,
            sum_y: [0; WIENER_WIN2],
            m: [0; WIENER_WIN2],
            h: [[0; WIENER_WIN2]; WIENER_WIN2],
        }
    }

    /// Re-center and normalize into the caller's M and H.
    ///
    /// `m` and `h` must hold at least `win2` and `win2 * win2` entries.
    pub fn finalize(
        &self,
        win2: usize,
        avg: i64,
        pixel_count: i64,
        depth: BitDepth,
        m: &mut [i64],
        h: &mut [i64],
    ) {
        let div = depth.divisor();
        let avg_sq_sum = avg * avg * pixel_count;

        for t in 0..win2 {
            m[t] = (self.m[t] + avg_sq_sum - avg * (self.sum_x + self.sum_y[t])) / div;
        }
        for t1 in 0..win2 {
            let row = &mut h[t1 * win2..(t1 + 1) * win2];
            for (t2, out) in row.iter_mut().enumerate() {
                *out = (self.h[t1][t2] + avg_sq_sum - avg * (self.sum_y[t1] + self.sum_y[t2]))
                    / div;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_recenters() {
        // One pixel, one tap: D = 5, X = 3, avg = 4
        let mut raw = RawSums::new();
        raw.sum_x = 3;
        raw.sum_y[0] = 5;
        raw.m[0] = 15;
        raw.h[0][0] = 25;
        let mut m = [0i64; 1];
        let mut h = [0i64; 1];
        raw.finalize(1, 4, 1, BitDepth::Eight, &mut m, &mut h);
        assert_eq!(m[0], (5 - 4) * (3 - 4));
        assert_eq!(h[0], 1);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let mut raw = RawSums::new();
        raw.m[0] = -7;
        let mut m = [0i64; 1];
        let mut h = [0i64; 1];
        raw.finalize(1, 0, 1, BitDepth::Ten, &mut m, &mut h);
        assert_eq!(m[0], -1);
        raw.m[0] = -17;
        raw.finalize(1, 0, 1, BitDepth::Twelve, &mut m, &mut h);
        assert_eq!(m[0], -1);
    }
}
