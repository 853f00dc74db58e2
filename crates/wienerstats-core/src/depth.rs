//! Pixel bit depth
//!
//! Restoration statistics are produced for 8, 10 and 12-bit content. For
//! depths above 8 the final statistics are divided by 4 (10-bit) or 16
//! (12-bit), i.e. `2^(depth - 8)`.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Supported sample bit depths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8 bits per sample
    #[default]
    Eight,
    /// 10 bits per sample
    Ten,
    /// 12 bits per sample
    Twelve,
}

impl BitDepth {
    /// All supported depths, in increasing order.
    pub const ALL: [BitDepth; 3] = [BitDepth::Eight, BitDepth::Ten, BitDepth::Twelve];

    /// Number of bits per sample.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Ten => 10,
            BitDepth::Twelve => 12,
        }
    }

    /// Largest sample value, `2^bits - 1`.
    #[inline]
    pub const fn max_value(self) -> u32 {
        (1 << self.bits()) - 1
    }

    /// Normalization divisor applied to M and H.
    ///
    /// 1 for 8-bit, 4 for 10-bit, 16 for 12-bit.
    #[inline]
    pub const fn divisor(self) -> i64 {
        1 << (self.bits() - 8)
    }

    /// Check that samples of type `P` can carry this depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for `u8` storage with a depth
    /// above 8.
    pub fn check_storage<P: Pixel>(self) -> Result<()> {
        if self.bits() > P::BITS {
            return Err(Error::UnsupportedDepth {
                bits: P::BITS,
                depth: self.bits(),
            });
        }
        Ok(())
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            10 => Ok(BitDepth::Ten),
            12 => Ok(BitDepth::Twelve),
            _ => Err(Error::InvalidBitDepth(bits)),
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(BitDepth::try_from(8).unwrap(), BitDepth::Eight);
        assert_eq!(BitDepth::try_from(10).unwrap(), BitDepth::Ten);
        assert_eq!(BitDepth::try_from(12).unwrap(), BitDepth::Twelve);
        assert_eq!(BitDepth::try_from(9), Err(Error::InvalidBitDepth(9)));
        assert_eq!(BitDepth::try_from(16), Err(Error::InvalidBitDepth(16)));
    }

    #[test]
    fn test_divisor() {
        assert_eq!(BitDepth::Eight.divisor(), 1);
        assert_eq!(BitDepth::Ten.divisor(), 4);
        assert_eq!(BitDepth::Twelve.divisor(), 16);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(BitDepth::Eight.max_value(), 255);
        assert_eq!(BitDepth::Ten.max_value(), 1023);
        assert_eq!(BitDepth::Twelve.max_value(), 4095);
    }

    #[test]
    fn test_check_storage() {
        assert!(BitDepth::Eight.check_storage::<u8>().is_ok());
        assert_eq!(
            BitDepth::Ten.check_storage::<u8>(),
            Err(Error::UnsupportedDepth { bits: 8, depth: 10 })
        );
        for depth in BitDepth::ALL {
            assert!(depth.check_storage::<u16>().is_ok());
        }
    }
}
