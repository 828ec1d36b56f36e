//! Capability traits for edge weights and node indices.

use num_traits::{AsPrimitive, Float, NumCast, PrimInt, ToPrimitive};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Real-valued edge weight (`f32`, `f64`).
pub trait Weight: Float + Debug + Display + Send + Sync + 'static {
    /// Converts a position distance into the weight domain.
    fn from_distance(distance: usize) -> Self {
        <Self as NumCast>::from(distance).unwrap_or_else(Self::infinity)
    }
}

impl<T> Weight for T where T: Float + Debug + Display + Send + Sync + 'static {}

/// Integral node index (`u32`, `i64`, `usize`, ...).
///
/// Stored indices are converted to `usize` positions for slice access. Values are range-checked
/// when a graph or permutation enters the crate, so [`Index::position`] is only called on
/// values known to be non-negative and in bounds.
pub trait Index:
    PrimInt + AsPrimitive<usize> + Hash + Debug + Display + Send + Sync + 'static
{
    /// Checked conversion; `None` for negative values or values past `usize::MAX`.
    fn to_position(self) -> Option<usize> {
        ToPrimitive::to_usize(&self)
    }

    fn position(self) -> usize {
        self.as_()
    }

    fn from_position(position: usize) -> Option<Self> {
        <Self as NumCast>::from(position)
    }
}

impl<T> Index for T where
    T: PrimInt + AsPrimitive<usize> + Hash + Debug + Display + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_have_no_position() {
        assert_eq!((-1i32).to_position(), None);
        assert_eq!(7i32.to_position(), Some(7));
    }

    #[test]
    fn from_position_rejects_overflow() {
        assert_eq!(u8::from_position(255), Some(255u8));
        assert_eq!(u8::from_position(256), None);
    }

    #[test]
    fn distances_convert_exactly() {
        assert_eq!(f64::from_distance(3), 3.0);
        assert_eq!(f32::from_distance(0), 0.0);
    }
}
