//! Fixed-or-scalable quantity algebra.
//!
//! `ScalableQuantity<L>` pairs a magnitude with a [`Scale`]. The leaf marker
//! `L` fixes the scalar type and keeps element counts, bit sizes and byte
//! offsets from mixing. All leaves share one implementation of the algebra
//! below; leaf-specific vocabulary lives in the leaf modules.
//!
//! # Ordering
//!
//! Quantities are deliberately not `PartialOrd`. The runtime factor is only
//! known to be at least 1, so `vscale x 2` may be bigger or smaller than a
//! fixed `4`. The `is_known_*` predicates answer `true` only when the ordering
//! holds for every legal runtime factor. `!is_known_lt(a, b)` does not imply
//! `is_known_ge(a, b)`.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::{report_invalid_size_request, Scale};

/// Scalar types a quantity magnitude can be stored in.
pub trait Scalar:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Smallest power of two strictly greater than `self`, or zero when
    /// none is representable.
    fn next_power_of_2(self) -> Self;
}

macro_rules! impl_unsigned_scalar {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn next_power_of_2(self) -> Self {
                self.checked_add(1)
                    .and_then(<$ty>::checked_next_power_of_two)
                    .unwrap_or(0)
            }
        }
    )*};
}

impl_unsigned_scalar!(u32, u64);

impl Scalar for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn next_power_of_2(self) -> Self {
        let above = u64::try_from(self).map_or(1, |v| (v + 1).next_power_of_two());
        i64::try_from(above).unwrap_or(i64::MAX)
    }
}

/// Leaf marker of a [`ScalableQuantity`].
pub trait Leaf: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Storage type of the magnitude.
    type Scalar: Scalar;

    /// Name used by `Debug`.
    const NAME: &'static str;
}

/// A magnitude, optionally multiplied by a runtime scale factor.
///
/// Zero is compatible with every scale. Adding or subtracting two non-zero
/// quantities of different scales is a contract violation and panics.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "L::Scalar: serde::Serialize",
        deserialize = "L::Scalar: serde::Deserialize<'de>"
    ))
)]
pub struct ScalableQuantity<L: Leaf> {
    min: L::Scalar,
    scale: Scale,
    #[cfg_attr(feature = "serde", serde(skip))]
    leaf: PhantomData<L>,
}

impl<L: Leaf> ScalableQuantity<L> {
    /// Create a quantity with an explicit scale class.
    #[inline]
    pub const fn with_scale(min: L::Scalar, scale: Scale) -> Self {
        Self {
            min,
            scale,
            leaf: PhantomData,
        }
    }

    /// Create a fixed quantity, or a `vscale`-scaled one when `scalable`.
    #[inline]
    pub const fn get(min: L::Scalar, scalable: bool) -> Self {
        let scale = if scalable { Scale::V } else { Scale::FIXED };
        Self::with_scale(min, scale)
    }

    /// The known minimum magnitude (the value at a runtime factor of 1).
    #[inline]
    pub fn known_min_value(self) -> L::Scalar {
        self.min
    }

    #[inline]
    pub fn scale(self) -> Scale {
        self.scale
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.min == L::Scalar::ZERO
    }

    #[inline]
    pub fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Whether the quantity is multiplied by any runtime factor.
    #[inline]
    pub fn is_scalable(self) -> bool {
        self.scale.is_scalable()
    }

    #[inline]
    pub fn is_scalable_v(self) -> bool {
        self.scale.contains(Scale::V)
    }

    #[inline]
    pub fn is_scalable_m(self) -> bool {
        self.scale.contains(Scale::M)
    }

    #[inline]
    pub fn is_scalable_n(self) -> bool {
        self.scale.contains(Scale::N)
    }

    #[inline]
    pub fn is_scalable_mn(self) -> bool {
        self.is_scalable_m() && self.is_scalable_n()
    }

    /// Add `rhs` to the magnitude, keeping the scale.
    #[inline]
    pub fn with_increment(self, rhs: L::Scalar) -> Self {
        Self::with_scale(self.min + rhs, self.scale)
    }

    /// `true` means the total is even for every runtime factor. `false` does
    /// not mean it is odd.
    #[inline]
    pub fn is_known_even(self) -> bool {
        self.min % (L::Scalar::ONE + L::Scalar::ONE) == L::Scalar::ZERO
    }

    /// Whether the total is a multiple of `rhs` for every runtime factor.
    #[inline]
    pub fn is_known_multiple_of(self, rhs: L::Scalar) -> bool {
        self.min % rhs == L::Scalar::ZERO
    }

    /// The magnitude of a quantity known not to be scaled.
    ///
    /// Asking a non-zero scalable quantity for a fixed value goes to the
    /// diagnostic sink, which does not return.
    pub fn fixed_value(self) -> L::Scalar {
        if self.is_scalable() && self.is_nonzero() {
            report_invalid_size_request(
                "request for a fixed value on a scalable quantity",
            );
        }
        self.min
    }

    /// `lhs < rhs` for every runtime factor.
    pub fn is_known_lt(lhs: Self, rhs: Self) -> bool {
        if !lhs.is_scalable() || rhs.scale == lhs.scale {
            return lhs.min < rhs.min;
        }
        false
    }

    /// `lhs > rhs` for every runtime factor.
    ///
    /// Unlike the other three predicates this one compares magnitudes
    /// whenever `lhs` is scalable.
    pub fn is_known_gt(lhs: Self, rhs: Self) -> bool {
        if lhs.is_scalable() || rhs.scale == lhs.scale {
            return lhs.min > rhs.min;
        }
        false
    }

    /// `lhs <= rhs` for every runtime factor.
    pub fn is_known_le(lhs: Self, rhs: Self) -> bool {
        if !lhs.is_scalable() || rhs.scale == lhs.scale {
            return lhs.min <= rhs.min;
        }
        false
    }

    /// `lhs >= rhs` for every runtime factor.
    pub fn is_known_ge(lhs: Self, rhs: Self) -> bool {
        if !lhs.is_scalable() || rhs.scale == lhs.scale {
            return lhs.min >= rhs.min;
        }
        false
    }

    /// Divide the coefficient only. `(vscale x 8) / 2` is `vscale x 4`, the
    /// runtime factor is untouched. Pair with [`Self::is_known_multiple_of`]
    /// for a lossless divide.
    #[inline]
    pub fn divide_coefficient_by(self, rhs: L::Scalar) -> Self {
        Self::with_scale(self.min / rhs, self.scale)
    }

    #[inline]
    pub fn multiply_coefficient_by(self, rhs: L::Scalar) -> Self {
        Self::with_scale(self.min * rhs, self.scale)
    }

    #[inline]
    pub fn coefficient_next_power_of_2(self) -> Self {
        Self::with_scale(self.min.next_power_of_2(), self.scale)
    }

    /// Whether some `x` exists with `rhs.multiply_coefficient_by(x) == self`.
    pub fn has_known_scalar_factor(self, rhs: Self) -> bool {
        self.scale == rhs.scale
            && rhs.min != L::Scalar::ZERO
            && self.min % rhs.min == L::Scalar::ZERO
    }

    /// The `x` with `rhs.multiply_coefficient_by(x) == self`.
    pub fn known_scalar_factor(self, rhs: Self) -> L::Scalar {
        assert!(
            self.has_known_scalar_factor(rhs),
            "expected {rhs} to be a known factor of {self}"
        );
        self.min / rhs.min
    }

    #[inline]
    fn assert_compatible(self, rhs: Self) {
        assert!(
            self.is_zero() || rhs.is_zero() || self.scale == rhs.scale,
            "incompatible scale classes: {self} and {rhs}"
        );
    }
}

impl<L: Leaf> Default for ScalableQuantity<L> {
    fn default() -> Self {
        Self::with_scale(L::Scalar::ZERO, Scale::FIXED)
    }
}

impl<L: Leaf> AddAssign for ScalableQuantity<L> {
    fn add_assign(&mut self, rhs: Self) {
        self.assert_compatible(rhs);
        self.min += rhs.min;
        if rhs.is_nonzero() {
            self.scale = rhs.scale;
        }
    }
}

impl<L: Leaf> SubAssign for ScalableQuantity<L> {
    fn sub_assign(&mut self, rhs: Self) {
        self.assert_compatible(rhs);
        self.min -= rhs.min;
        if rhs.is_nonzero() {
            self.scale = rhs.scale;
        }
    }
}

impl<L: Leaf> Add for ScalableQuantity<L> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<L: Leaf> Sub for ScalableQuantity<L> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<L: Leaf> MulAssign<L::Scalar> for ScalableQuantity<L> {
    fn mul_assign(&mut self, rhs: L::Scalar) {
        self.min *= rhs;
    }
}

impl<L: Leaf> Mul<L::Scalar> for ScalableQuantity<L> {
    type Output = Self;

    fn mul(mut self, rhs: L::Scalar) -> Self {
        self *= rhs;
        self
    }
}

impl<L: Leaf> Neg for ScalableQuantity<L>
where
    L::Scalar: Neg<Output = L::Scalar>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::with_scale(-self.min, self.scale)
    }
}

impl<L: Leaf> fmt::Display for ScalableQuantity<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.scale.prefix() {
            write!(f, "{prefix} x ")?;
        }
        write!(f, "{}", self.min)
    }
}

impl<L: Leaf> fmt::Debug for ScalableQuantity<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", L::NAME)
    }
}
