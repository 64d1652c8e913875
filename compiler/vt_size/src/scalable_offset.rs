//! Signed byte offsets along a single scale axis.

use crate::{Leaf, ScalableQuantity, Scale};

/// Leaf marker for [`ScalableOffset`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OffsetBytes {}

impl Leaf for OffsetBytes {
    type Scalar = i64;
    const NAME: &'static str = "ScalableOffset";
}

/// A signed byte offset tied to at most one scale class.
///
/// This is the only leaf with a signed scalar, so it is the one that
/// supports unary negation. Offsets spanning several scale classes at once
/// are a [`StackOffset`](crate::StackOffset).
pub type ScalableOffset = ScalableQuantity<OffsetBytes>;

impl ScalableQuantity<OffsetBytes> {
    #[inline]
    pub const fn fixed(bytes: i64) -> Self {
        Self::with_scale(bytes, Scale::FIXED)
    }

    #[inline]
    pub const fn scalable(bytes: i64) -> Self {
        Self::with_scale(bytes, Scale::V)
    }
}

#[cfg(test)]
mod tests;
