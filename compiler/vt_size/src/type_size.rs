//! Type sizes in bits.
//!
//! A `TypeSize` is exact for fixed-size types and the known minimum for
//! scalable ones.

use std::ops::Mul;

use crate::{report_invalid_size_request, Leaf, ScalableQuantity, Scale};

/// Leaf marker for [`TypeSize`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Bits {}

impl Leaf for Bits {
    type Scalar = u64;
    const NAME: &'static str = "TypeSize";
}

/// Size of a type in bits, fixed or scaled by a runtime factor.
pub type TypeSize = ScalableQuantity<Bits>;

impl ScalableQuantity<Bits> {
    #[inline]
    pub const fn fixed(exact: u64) -> Self {
        Self::with_scale(exact, Scale::FIXED)
    }

    #[inline]
    pub const fn scalable(minimum: u64) -> Self {
        Self::with_scale(minimum, Scale::V)
    }

    /// Legacy narrowing to a plain integer.
    ///
    /// Scalable sizes go to the diagnostic sink. Code that works for both
    /// kinds should read [`known_min_value`](Self::known_min_value); code
    /// that only handles fixed sizes should bail out on scalable sizes and
    /// call [`fixed_value`](Self::fixed_value).
    #[deprecated(note = "use `known_min_value()` or `fixed_value()`")]
    pub fn to_u64_lossy(self) -> u64 {
        if self.is_scalable() {
            report_invalid_size_request(
                "cannot implicitly convert a scalable size to a fixed-width size",
            );
        }
        self.known_min_value()
    }
}

impl Mul<TypeSize> for u64 {
    type Output = TypeSize;

    fn mul(self, rhs: TypeSize) -> TypeSize {
        rhs * self
    }
}

/// Round the magnitude of `size` up to the next multiple of `align`
/// (mod 2^64), keeping the scale. `align` must be non-zero.
pub fn align_to(size: TypeSize, align: u64) -> TypeSize {
    assert!(align != 0, "align must be non-zero");
    let min = size.known_min_value();
    TypeSize::with_scale(
        min.wrapping_add(align - 1) / align * align,
        size.scale(),
    )
}
