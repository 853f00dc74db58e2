//! Statistics buffer fixtures
//!
//! A [`StatsFixture`] owns a square degraded buffer and a square source
//! buffer of the same side. The degraded patch is addressed at a linear
//! offset of `halfwin * side + halfwin`, so every rectangle inside
//! `MAX_WIENER_BLOCK x MAX_WIENER_BLOCK` has its full tap halo in bounds
//! while the degraded stride stays at most the side.

use crate::error::{TestError, TestResult};
use crate::rng::SimpleRng;
use wienerstats_core::{BitDepth, Patch, Pixel, WIENER_WIN, WienerWindow};

/// Largest restoration unit side exercised by the regression tests
pub const MAX_WIENER_BLOCK: usize = 384;

/// Buffer side: a maximal unit plus the luma halo
pub const MAX_DATA_BLOCK: usize = MAX_WIENER_BLOCK + WIENER_WIN;

/// Degraded and source sample buffers for one statistics call
#[derive(Debug, Clone)]
pub struct StatsFixture<P: Pixel> {
    window: WienerWindow,
    size: usize,
    dgd_stride: usize,
    src_stride: usize,
    dgd: Vec<P>,
    src: Vec<P>,
}

impl<P: Pixel> StatsFixture<P> {
    /// Create a zeroed `MAX_DATA_BLOCK`-sided fixture for `window`.
    pub fn new(window: WienerWindow) -> Self {
        let size = MAX_DATA_BLOCK;
        Self {
            window,
            size,
            dgd_stride: size,
            src_stride: size,
            dgd: vec![P::default(); size * size],
            src: vec![P::default(); size * size],
        }
    }

    /// Create a zeroed fixture with buffers of `size x size` samples.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::FixtureTooSmall`] if `size` does not exceed the
    /// window side.
    pub fn with_size(window: WienerWindow, size: usize) -> TestResult<Self> {
        if size <= window.size() {
            return Err(TestError::FixtureTooSmall {
                size,
                win: window.size(),
            });
        }
        Ok(Self {
            window,
            size,
            dgd_stride: size,
            src_stride: size,
            dgd: vec![P::default(); size * size],
            src: vec![P::default(); size * size],
        })
    }

    /// Use `stride` as the degraded row pitch.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::StrideTooWide`] if `stride` exceeds the side.
    pub fn with_dgd_stride(mut self, stride: usize) -> TestResult<Self> {
        if stride > self.size {
            return Err(TestError::StrideTooWide {
                stride,
                size: self.size,
            });
        }
        self.dgd_stride = stride;
        Ok(self)
    }

    /// Window the halo is sized for.
    pub fn window(&self) -> WienerWindow {
        self.window
    }

    /// Buffer side in samples.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Degraded row pitch.
    pub fn dgd_stride(&self) -> usize {
        self.dgd_stride
    }

    /// Source row pitch.
    pub fn src_stride(&self) -> usize {
        self.src_stride
    }

    /// Linear index of the degraded patch origin.
    pub fn dgd_offset(&self) -> usize {
        let half = self.window.half();
        half * self.size + half
    }

    /// Whole degraded buffer.
    pub fn dgd_buf(&self) -> &[P] {
        &self.dgd
    }

    /// Whole source buffer.
    pub fn src_buf(&self) -> &[P] {
        &self.src
    }

    /// Whole degraded buffer, mutable.
    pub fn dgd_buf_mut(&mut self) -> &mut [P] {
        &mut self.dgd
    }

    /// Whole source buffer, mutable.
    pub fn src_buf_mut(&mut self) -> &mut [P] {
        &mut self.src
    }

    /// Degraded patch, origin past the halo.
    pub fn dgd(&self) -> TestResult<Patch<'_, P>> {
        Ok(Patch::with_offset(
            &self.dgd,
            self.dgd_stride,
            self.dgd_offset(),
        )?)
    }

    /// Source patch, origin at the first sample.
    pub fn src(&self) -> TestResult<Patch<'_, P>> {
        Ok(Patch::new(&self.src, self.src_stride)?)
    }

    /// Fill both buffers from `rng`, alternating degraded and source draws.
    pub fn fill_random(&mut self, rng: &mut SimpleRng, depth: BitDepth) {
        for (d, s) in self.dgd.iter_mut().zip(self.src.iter_mut()) {
            *d = sample(rng.next_sample(depth.bits()));
            *s = sample(rng.next_sample(depth.bits()));
        }
    }

    /// Fill both buffers with `0, max, 0, max, ...` by linear index.
    pub fn fill_alternating(&mut self, depth: BitDepth) {
        let max = depth.max_value();
        for (i, (d, s)) in self.dgd.iter_mut().zip(self.src.iter_mut()).enumerate() {
            let v = if i & 1 == 1 { max } else { 0 };
            *d = sample(v);
            *s = sample(v);
        }
    }

    /// Fill every degraded sample with `dgd_value` and every source sample
    /// with `src_value`.
    pub fn fill_constant(&mut self, dgd_value: u32, src_value: u32) {
        self.dgd.fill(sample(dgd_value));
        self.src.fill(sample(src_value));
    }

    /// Degraded samples at the maximum, source samples at zero, and the
    /// first `zeroed` degraded samples cleared.
    pub fn fill_overflow(&mut self, depth: BitDepth, zeroed: usize) {
        self.fill_constant(depth.max_value(), 0);
        let end = zeroed.min(self.dgd.len());
        self.dgd[..end].fill(P::default());
    }

    /// Fill both buffers so that every row is identical: one random row
    /// per buffer, repeated at the buffer side.
    pub fn fill_columns(&mut self, rng: &mut SimpleRng, depth: BitDepth) {
        let size = self.size;
        let dgd_row: Vec<P> = (0..size)
            .map(|_| sample(rng.next_sample(depth.bits())))
            .collect();
        let src_row: Vec<P> = (0..size)
            .map(|_| sample(rng.next_sample(depth.bits())))
            .collect();
        for row in self.dgd.chunks_exact_mut(size) {
            row.copy_from_slice(&dgd_row);
        }
        for row in self.src.chunks_exact_mut(size) {
            row.copy_from_slice(&src_row);
        }
    }
}

fn sample<P: Pixel>(value: u32) -> P {
    P::truncate_from(u64::from(value))
}
