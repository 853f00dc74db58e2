//! Sample types
//!
//! Restoration statistics run over two sample representations: 8-bit
//! samples stored in `u8`, and 8/10/12-bit samples stored in `u16`. The
//! accumulation algorithm is the same for both; what differs is how wide a
//! per-row partial sum may grow before it has to be folded into the `i64`
//! running totals.

use std::fmt::Debug;
use std::ops::{Add, AddAssign};

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A stored pixel sample.
///
/// Implemented for `u8` and `u16` only.
pub trait Pixel:
    Copy + Default + Debug + PartialEq + Send + Sync + Into<i32> + Into<i64> + Into<u64> + 'static
    + private::Sealed
{
    /// Accumulator for per-row partial sums.
    ///
    /// `i32` for `u8` samples, `i64` for `u16` samples. Partial sums are
    /// always widened to `i64` before they are weighted and folded.
    type RowAccum: Copy
        + Default
        + Debug
        + Add<Output = Self::RowAccum>
        + AddAssign
        + From<i32>
        + Into<i64>;

    /// Storage width in bits.
    const BITS: u32;

    /// Widest row (in samples) whose partial sums fit `RowAccum`.
    ///
    /// A row partial sum of sample products is bounded by
    /// `width * max_sample^2`.
    const MAX_STAGED_ROW_WIDTH: usize;

    /// Product of two samples in the row accumulator.
    fn product(a: Self, b: Self) -> Self::RowAccum;

    /// Truncating conversion from a wider integer.
    fn truncate_from(value: u64) -> Self;

    /// Byte view of a sample slice, available for 8-bit storage only.
    fn as_bytes(data: &[Self]) -> Option<&[u8]>;
}

impl Pixel for u8 {
    type RowAccum = i32;

    const BITS: u32 = 8;

    const MAX_STAGED_ROW_WIDTH: usize = (i32::MAX as usize) / (255 * 255);

    #[inline(always)]
    fn product(a: Self, b: Self) -> i32 {
        i32::from(a) * i32::from(b)
    }

    #[inline(always)]
    fn truncate_from(value: u64) -> Self {
        value as u8
    }

    #[inline(always)]
    fn as_bytes(data: &[Self]) -> Option<&[u8]> {
        Some(data)
    }
}

impl Pixel for u16 {
    type RowAccum = i64;

    const BITS: u32 = 16;

    const MAX_STAGED_ROW_WIDTH: usize = usize::MAX;

    #[inline(always)]
    fn product(a: Self, b: Self) -> i64 {
        i64::from(a) * i64::from(b)
    }

    #[inline(always)]
    fn truncate_from(value: u64) -> Self {
        value as u16
    }

    #[inline(always)]
    fn as_bytes(_data: &[Self]) -> Option<&[u8]> {
        None
    }
}
