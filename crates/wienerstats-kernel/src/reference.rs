//! Reference statistics path
//!
//! Direct accumulation of centered products for any odd window up to 7x7:
//!
//! ```text
//! M[t]      += w * (D[t]  - avg) * (X      - avg)
//! H[t1, t2] += w * (D[t1] - avg) * (D[t2] - avg)      t1 <= t2
//! ```
//!
//! The lower triangle of H is mirrored from the upper one and every entry
//! is divided by the bit-depth divisor at the end. Slow but easy to check;
//! the other paths must agree with it on every input.

use crate::average::average_unchecked;
use crate::downsample::RowSampler;
use crate::validate::tap_base;
use wienerstats_core::{BitDepth, Patch, Pixel, Rect, WIENER_WIN2};

/// Centered statistics for a validated `win x win` geometry.
///
/// `win` is odd and at most 7; `m` and `h` hold at least `win^2` and
/// `win^4` entries.
#[allow(clippy::too_many_arguments)]
pub(crate) fn compute<P: Pixel>(
    win: usize,
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    depth: BitDepth,
    downsample: bool,
    m: &mut [i64],
    h: &mut [i64],
) {
    let win2 = win * win;
    let half = win / 2;
    let avg = Into::<i64>::into(average_unchecked(dgd, rect));
    let d_data = dgd.data();
    let d_stride = dgd.stride();
    let s_data = src.data();

    let m = &mut m[..win2];
    let h = &mut h[..win2 * win2];
    m.fill(0);
    h.fill(0);

    let mut d = [0i64; WIENER_WIN2];
    for (i, weight) in RowSampler::for_rect(rect, downsample) {
        let base = tap_base(dgd, rect, half, i);
        let x_row = &s_data[src.index(rect.h_start(), i)..][..rect.width()];

        for (j, &x) in x_row.iter().enumerate() {
            let x = Into::<i64>::into(x) - avg;
            for c in 0..win {
                for r in 0..win {
                    let sample = Into::<i64>::into(d_data[base + j + r * d_stride + c]);
                    d[c * win + r] = sample - avg;
                }
            }

            for t1 in 0..win2 {
                let wd = weight * d[t1];
                m[t1] += wd * x;
                for t2 in t1..win2 {
                    h[t1 * win2 + t2] += wd * d[t2];
                }
            }
        }
    }

    for t1 in 1..win2 {
        for t2 in 0..t1 {
            h[t1 * win2 + t2] = h[t2 * win2 + t1];
        }
    }

    let div = depth.divisor();
    if div > 1 {
        m.iter_mut().for_each(|v| *v /= div);
        h.iter_mut().for_each(|v| *v /= div);
    }
}
