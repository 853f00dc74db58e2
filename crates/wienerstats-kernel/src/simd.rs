//! AVX2 statistics path for 8-bit samples
//!
//! For a fixed row, the degraded samples under tap `t` across the unit are
//! one contiguous run of `width` bytes. The row's partial sums are then
//! plain byte sums and byte dot products over those runs:
//!
//! - `sumY[t]   = sum(run[t])`
//! - `M[t]      = dot(run[t], src_row)`
//! - `H[t1, t2] = dot(run[t1], run[t2])`
//!
//! Dot products widen 16 bytes at a time to `i16` and use `madd` into eight
//! `i32` lanes. A row dot product is bounded by `width * 255^2`, which the
//! width limit keeps inside `i32`. The upper triangle of H is computed and
//! mirrored.

use core::arch::x86_64::*;

use archmage::{SimdToken, X64V3Token, arcane};
use safe_unaligned_simd::x86_64 as simd_mem;

use crate::accum::RawSums;
use crate::downsample::RowSampler;
use crate::validate::tap_base;
use wienerstats_core::{Patch, Rect, WIENER_WIN2, WienerWindow};

/// Runtime AVX2 token, if the CPU supports x86-64-v3.
#[inline]
pub(crate) fn token() -> Option<X64V3Token> {
    X64V3Token::summon()
}

/// Dot product of two byte runs of equal length.
#[arcane]
fn dot_u8(_token: X64V3Token, a: &[u8], b: &[u8]) -> i32 {
    let (a_chunks, a_tail) = a.as_chunks::<16>();
    let (b_chunks, b_tail) = b.as_chunks::<16>();

    let mut acc = _mm256_setzero_si256();
    for (ca, cb) in a_chunks.iter().zip(b_chunks) {
        let va = _mm256_cvtepu8_epi16(simd_mem::_mm_loadu_si128(ca));
        let vb = _mm256_cvtepu8_epi16(simd_mem::_mm_loadu_si128(cb));
        acc = _mm256_add_epi32(acc, _mm256_madd_epi16(va, vb));
    }

    let lo = _mm256_castsi256_si128(acc);
    let hi = _mm256_extracti128_si256::<1>(acc);
    let s = _mm_add_epi32(lo, hi);
    let s = _mm_add_epi32(s, _mm_shuffle_epi32::<0b01_00_11_10>(s));
    let s = _mm_add_epi32(s, _mm_shuffle_epi32::<0b10_11_00_01>(s));
    let mut total = _mm_cvtsi128_si32(s);

    for (&x, &y) in a_tail.iter().zip(b_tail) {
        total += i32::from(x) * i32::from(y);
    }
    total
}

/// Sum of a byte run.
#[arcane]
fn sum_u8(_token: X64V3Token, a: &[u8]) -> i64 {
    let (chunks, tail) = a.as_chunks::<16>();

    let zero = _mm_setzero_si128();
    let mut acc = _mm_setzero_si128();
    for c in chunks {
        acc = _mm_add_epi64(acc, _mm_sad_epu8(simd_mem::_mm_loadu_si128(c), zero));
    }
    let mut total = _mm_cvtsi128_si64(acc) + _mm_extract_epi64::<1>(acc);

    for &x in tail {
        total += i64::from(x);
    }
    total
}

/// Accumulate raw sums for `window` over a validated 8-bit geometry.
pub(crate) fn accumulate(
    token: X64V3Token,
    window: WienerWindow,
    dgd: &Patch<'_, u8>,
    src: &Patch<'_, u8>,
    rect: &Rect,
    downsample: bool,
    raw: &mut RawSums,
) {
    let win = window.size();
    let win2 = window.taps();
    let half = window.half();
    let d_data = dgd.data();
    let d_stride = dgd.stride();
    let width = rect.width();

    let mut runs: [&[u8]; WIENER_WIN2] = [&[]; WIENER_WIN2];
    for (i, weight) in RowSampler::for_rect(rect, downsample) {
        let base = tap_base(dgd, rect, half, i);
        for c in 0..win {
            for r in 0..win {
                let start = base + r * d_stride + c;
                runs[c * win + r] = &d_data[start..start + width];
            }
        }
        let x_row = &src.data()[src.index(rect.h_start(), i)..][..width];

        raw.sum_x += sum_u8(token, x_row) * weight;
        for t1 in 0..win2 {
            raw.sum_y[t1] += sum_u8(token, runs[t1]) * weight;
            raw.m[t1] += i64::from(dot_u8(token, runs[t1], x_row)) * weight;
            for t2 in t1..win2 {
                let v = i64::from(dot_u8(token, runs[t1], runs[t2])) * weight;
                raw.h[t1][t2] += v;
                if t2 != t1 {
                    raw.h[t2][t1] += v;
                }
            }
        }
    }
}
