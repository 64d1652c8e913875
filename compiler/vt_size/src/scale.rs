//! Runtime scale classes.
//!
//! A scalable quantity is multiplied by an unknown, always non-zero runtime
//! factor. Which factor is named by its `Scale`:
//! - `V`: the vector length multiplier (`vscale`)
//! - `M`, `N`: the two independent matrix dimension multipliers
//! - `MN`: the product of `M` and `N`
//!
//! `MN` is the bitwise union of `M` and `N`, so an `MN` quantity answers
//! "yes" to both the M and the N query.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Scale class of a fixed-or-scalable quantity.
    ///
    /// The empty set is a fixed (non-scalable) quantity.
    #[derive(Copy, Clone, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Scale: u8 {
        /// Scaled by `vscale`.
        const V = 1 << 0;
        /// Scaled by `mscale`.
        const M = 1 << 1;
        /// Scaled by `nscale`.
        const N = 1 << 2;
        /// Scaled by both `mscale` and `nscale`.
        const MN = Self::M.bits() | Self::N.bits();
    }
}

impl Scale {
    /// Not scaled at all.
    pub const FIXED: Self = Self::empty();

    /// Returns `true` unless this is [`Scale::FIXED`].
    #[inline]
    pub const fn is_scalable(self) -> bool {
        !self.is_empty()
    }

    /// Prefix used when printing a quantity of this class, e.g. `"vscale"`.
    ///
    /// `MN` is checked first: it also carries the `M` and `N` bits.
    pub const fn prefix(self) -> Option<&'static str> {
        if self.contains(Self::MN) {
            Some("mnscale")
        } else if self.contains(Self::V) {
            Some("vscale")
        } else if self.contains(Self::M) {
            Some("mscale")
        } else if self.contains(Self::N) {
            Some("nscale")
        } else {
            None
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::FIXED
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix() {
            Some(prefix) => write!(f, "Scale({prefix})"),
            None => write!(f, "Scale(fixed)"),
        }
    }
}

#[cfg(test)]
mod tests;
