//! Vector element counts.

use crate::{Leaf, ScalableQuantity, Scale};

/// Leaf marker for [`ElementCount`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Elements {}

impl Leaf for Elements {
    type Scalar = u32;
    const NAME: &'static str = "ElementCount";
}

/// Number of elements in a vector, fixed or scaled by `vscale`.
///
/// - `ElementCount::fixed(1)`: a scalar
/// - `ElementCount::fixed(2)`: a two-element vector
/// - `ElementCount::scalable(4)`: `vscale x 4` elements
pub type ElementCount = ScalableQuantity<Elements>;

impl ScalableQuantity<Elements> {
    #[inline]
    pub const fn fixed(min: u32) -> Self {
        Self::with_scale(min, Scale::FIXED)
    }

    #[inline]
    pub const fn scalable(min: u32) -> Self {
        Self::with_scale(min, Scale::V)
    }

    /// Exactly one element.
    #[inline]
    pub fn is_scalar(self) -> bool {
        !self.is_scalable() && self.known_min_value() == 1
    }

    /// More than one element, or any non-zero `vscale`-scaled count.
    #[inline]
    pub fn is_vector(self) -> bool {
        (self.is_scalable_v() && self.known_min_value() != 0) || self.known_min_value() > 1
    }
}

#[cfg(test)]
mod tests;
