//! Restoration unit rectangle
//!
//! A half-open rectangle `[h_start, h_end) x [v_start, v_end)` in unit
//! coordinates. Only non-empty rectangles can be constructed.

use crate::error::{Error, Result};

/// Half-open processing rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    h_start: usize,
    h_end: usize,
    v_start: usize,
    v_end: usize,
}

impl Rect {
    /// Create a rectangle from its column and row ranges.
    ///
    /// # Arguments
    ///
    /// * `h_start`, `h_end` - Column range (end exclusive)
    /// * `v_start`, `v_end` - Row range (end exclusive)
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRect`] if either range is empty.
    pub fn new(h_start: usize, h_end: usize, v_start: usize, v_end: usize) -> Result<Self> {
        if h_end <= h_start || v_end <= v_start {
            return Err(Error::EmptyRect {
                h_start,
                h_end,
                v_start,
                v_end,
            });
        }
        Ok(Self {
            h_start,
            h_end,
            v_start,
            v_end,
        })
    }

    /// Create a rectangle from an origin and a size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRect`] if `width` or `height` is zero.
    pub fn from_origin(x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        Self::new(x, x + width, y, y + height)
    }

    /// First column.
    #[inline]
    pub fn h_start(&self) -> usize {
        self.h_start
    }

    /// One past the last column.
    #[inline]
    pub fn h_end(&self) -> usize {
        self.h_end
    }

    /// First row.
    #[inline]
    pub fn v_start(&self) -> usize {
        self.v_start
    }

    /// One past the last row.
    #[inline]
    pub fn v_end(&self) -> usize {
        self.v_end
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.h_end - self.h_start
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.v_end - self.v_start
    }

    /// Number of pixels, `width * height`.
    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = Rect::new(16, 48, 8, 40).unwrap();
        assert_eq!(r.width(), 32);
        assert_eq!(r.height(), 32);
        assert_eq!(r.area(), 1024);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Rect::new(4, 4, 0, 10).is_err());
        assert!(Rect::new(0, 10, 7, 3).is_err());
        assert!(Rect::from_origin(0, 0, 0, 5).is_err());
    }

    #[test]
    fn test_from_origin() {
        let r = Rect::from_origin(16, 16, 16, 16).unwrap();
        assert_eq!(r, Rect::new(16, 32, 16, 32).unwrap());
    }
}
