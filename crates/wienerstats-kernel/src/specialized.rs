//! Specialized statistics path
//!
//! Unrolled raw-sum accumulation for the two window sizes in use. Pixels are
//! processed two at a time; per-row partial sums are staged in the sample
//! type's row accumulator, widened to `i64`, weighted by the row sampler and
//! folded into [`RawSums`]. The full H is accumulated, which is symmetric
//! by construction.

use crate::accum::RawSums;
use crate::downsample::RowSampler;
use crate::validate::tap_base;
use wienerstats_core::{Patch, Pixel, Rect, WIENER_WIN2, WienerWindow};

/// Per-row partial sums in the staging accumulator
struct RowSums<A> {
    x: A,
    y: [A; WIENER_WIN2],
    m: [A; WIENER_WIN2],
    h: [[A; WIENER_WIN2]; WIENER_WIN2],
}

impl<A: Copy + Default + Into<i64>> RowSums<A> {
    fn new() -> Self {
        Self {
            x: A::default(),
            y: [A::default(); WIENER_WIN2],
            m: [A::default(); WIENER_WIN2],
            h: [[A::default(); WIENER_WIN2]; WIENER_WIN2],
        }
    }

    fn fold_into(&self, win2: usize, weight: i64, raw: &mut RawSums) {
        raw.sum_x += Into::<i64>::into(self.x) * weight;
        for t1 in 0..win2 {
            raw.sum_y[t1] += Into::<i64>::into(self.y[t1]) * weight;
            raw.m[t1] += Into::<i64>::into(self.m[t1]) * weight;
            let (src, dst) = (&self.h[t1], &mut raw.h[t1]);
            for t2 in 0..win2 {
                dst[t2] += Into::<i64>::into(src[t2]) * weight;
            }
        }
    }
}

#[inline(always)]
fn level<P: Pixel>(p: P) -> i32 {
    Into::<i32>::into(p)
}

/// Copy the `WIN x WIN` taps starting at `pos` into `out`, column-major.
#[inline(always)]
fn gather<P: Pixel, const WIN: usize>(data: &[P], pos: usize, stride: usize, out: &mut [P]) {
    for c in 0..WIN {
        for r in 0..WIN {
            out[c * WIN + r] = data[pos + r * stride + c];
        }
    }
}

fn accumulate_win<P: Pixel, const WIN: usize>(
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    downsample: bool,
    raw: &mut RawSums,
) {
    let win2 = WIN * WIN;
    let half = WIN / 2;
    let d_data = dgd.data();
    let d_stride = dgd.stride();
    let s_data = src.data();
    let width = rect.width();
    // h_start is even, so the paired span is the even part of the width
    let paired = width & !1;

    let mut d1 = [P::default(); WIENER_WIN2];
    let mut d2 = [P::default(); WIENER_WIN2];

    for (i, weight) in RowSampler::for_rect(rect, downsample) {
        let mut row = RowSums::<P::RowAccum>::new();
        let base = tap_base(dgd, rect, half, i);
        let x_row = &s_data[src.index(rect.h_start(), i)..][..width];

        let mut j = 0;
        while j < paired {
            let (x1, x2) = (x_row[j], x_row[j + 1]);
            row.x += P::RowAccum::from(level(x1) + level(x2));
            gather::<P, WIN>(d_data, base + j, d_stride, &mut d1);
            gather::<P, WIN>(d_data, base + j + 1, d_stride, &mut d2);

            for t1 in 0..win2 {
                let (a1, a2) = (d1[t1], d2[t1]);
                row.y[t1] += P::RowAccum::from(level(a1) + level(a2));
                row.m[t1] += P::product(a1, x1) + P::product(a2, x2);
                let h_row = &mut row.h[t1];
                for t2 in 0..win2 {
                    h_row[t2] += P::product(a1, d1[t2]) + P::product(a2, d2[t2]);
                }
            }
            j += 2;
        }

        if paired < width {
            let x1 = x_row[paired];
            row.x += P::RowAccum::from(level(x1));
            gather::<P, WIN>(d_data, base + paired, d_stride, &mut d1);

            for t1 in 0..win2 {
                let a1 = d1[t1];
                row.y[t1] += P::RowAccum::from(level(a1));
                row.m[t1] += P::product(a1, x1);
                let h_row = &mut row.h[t1];
                for t2 in 0..win2 {
                    h_row[t2] += P::product(a1, d1[t2]);
                }
            }
        }

        row.fold_into(win2, weight, raw);
    }
}

/// Accumulate raw sums for `window` over a validated geometry.
pub(crate) fn accumulate<P: Pixel>(
    window: WienerWindow,
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    downsample: bool,
    raw: &mut RawSums,
) {
    match window {
        WienerWindow::Chroma => accumulate_win::<P, 5>(dgd, src, rect, downsample, raw),
        WienerWindow::Luma => accumulate_win::<P, 7>(dgd, src, rect, downsample, raw),
    }
}
