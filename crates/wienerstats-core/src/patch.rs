//! Borrowed sample patches
//!
//! A [`Patch`] is a strided view into a caller-owned sample buffer. The
//! sample at unit coordinates `(x, y)` lives at `origin + y * stride + x`.
//!
//! The degraded patch of a statistics call is addressed with a halo: the
//! tap window of a pixel reaches `win / 2` samples above, below, left and
//! right of it, so its origin must leave room for that many rows and
//! columns before the first sample of the rectangle. The source patch needs
//! no halo.
//!
//! Stride and logical width are independent. A stride narrower than the
//! halo-extended row is allowed; taps then read into the neighbouring row,
//! which is still in bounds as long as the whole addressed range is inside
//! the buffer.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Strided view into a sample buffer
#[derive(Debug, Clone, Copy)]
pub struct Patch<'a, P: Pixel> {
    data: &'a [P],
    stride: usize,
    origin: usize,
}

impl<'a, P: Pixel> Patch<'a, P> {
    /// Create a patch whose unit origin is the first buffer sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStride`] if `stride` is zero.
    pub fn new(data: &'a [P], stride: usize) -> Result<Self> {
        Self::with_offset(data, stride, 0)
    }

    /// Create a patch whose unit origin is buffer sample `(x, y)`.
    ///
    /// This is the usual way to address a degraded patch with a halo:
    /// `Patch::with_origin(buf, stride, halfwin, halfwin)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStride`] if `stride` is zero, or
    /// [`Error::OriginOutOfBounds`] if `(x, y)` is outside the buffer.
    pub fn with_origin(data: &'a [P], stride: usize, x: usize, y: usize) -> Result<Self> {
        Self::with_offset(data, stride, y * stride + x)
    }

    /// Create a patch whose unit origin is the linear buffer index `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStride`] if `stride` is zero, or
    /// [`Error::OriginOutOfBounds`] if `origin >= data.len()`.
    pub fn with_offset(data: &'a [P], stride: usize, origin: usize) -> Result<Self> {
        if stride == 0 {
            return Err(Error::InvalidStride(stride));
        }
        if origin >= data.len() {
            return Err(Error::OriginOutOfBounds {
                origin,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            stride,
            origin,
        })
    }

    /// Underlying buffer.
    #[inline]
    pub fn data(&self) -> &'a [P] {
        self.data
    }

    /// Row pitch in samples.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Linear buffer index of unit coordinate `(0, 0)`.
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Linear buffer index of unit coordinate `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        self.origin + y * self.stride + x
    }

    /// Sample at unit coordinate `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        self.data.get(self.index(x, y)).copied()
    }

    /// `len` consecutive samples starting at unit coordinate `(x, y)`.
    #[inline]
    pub fn row(&self, x: usize, y: usize, len: usize) -> Option<&'a [P]> {
        let start = self.index(x, y);
        self.data.get(start..start + len)
    }
}
