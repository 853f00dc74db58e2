//! Row sampling policy
//!
//! With downsampling, only every `WIENER_STATS_DOWNSAMPLE_FACTOR`-th row of
//! the unit is scanned and its partial sums stand in for the skipped rows.
//! The last scanned row is weighted by the number of rows actually left, so
//! the weights always add up to the rectangle height.

use wienerstats_core::Rect;

/// Row step used when downsampling is enabled
pub const WIENER_STATS_DOWNSAMPLE_FACTOR: usize = 4;

/// Iterator over `(row, weight)` pairs of the scanned rows
#[derive(Debug, Clone)]
pub struct RowSampler {
    next: usize,
    end: usize,
    step: usize,
}

impl RowSampler {
    /// Sample rows `v_start..v_end`.
    pub fn new(v_start: usize, v_end: usize, downsample: bool) -> Self {
        let step = if downsample {
            WIENER_STATS_DOWNSAMPLE_FACTOR
        } else {
            1
        };
        Self {
            next: v_start,
            end: v_end,
            step,
        }
    }

    /// Sample the rows of `rect`.
    pub fn for_rect(rect: &Rect, downsample: bool) -> Self {
        Self::new(rect.v_start(), rect.v_end(), downsample)
    }
}

impl Iterator for RowSampler {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.next;
        let weight = self.step.min(self.end - row);
        self.next += self.step;
        Some((row, weight as i64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next).div_ceil(self.step);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RowSampler {}
