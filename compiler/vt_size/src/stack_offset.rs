//! Stack offsets with independent fixed and scalable components.
//!
//! Frame layout must account for several runtime scale classes at once (a
//! slot may sit after both vector spills and matrix spills), so a
//! `StackOffset` keeps one accumulator per class instead of a single
//! [`ScalableQuantity`](crate::ScalableQuantity). The components are never
//! normalized into each other.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{ScalableOffset, Scale};

/// A byte offset: `fixed + vscale*v + mscale*m + nscale*n + mnscale*mn`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackOffset {
    fixed: i64,
    scalable_v: i64,
    scalable_m: i64,
    scalable_n: i64,
    scalable_mn: i64,
}

impl StackOffset {
    /// Build an offset from all five components.
    pub const fn get(
        fixed: i64,
        scalable_v: i64,
        scalable_m: i64,
        scalable_n: i64,
        scalable_mn: i64,
    ) -> Self {
        Self {
            fixed,
            scalable_v,
            scalable_m,
            scalable_n,
            scalable_mn,
        }
    }

    pub const fn fixed(bytes: i64) -> Self {
        Self::get(bytes, 0, 0, 0, 0)
    }

    /// Same as [`StackOffset::scalable_v`].
    pub const fn scalable(bytes: i64) -> Self {
        Self::scalable_v(bytes)
    }

    pub const fn scalable_v(bytes: i64) -> Self {
        Self::get(0, bytes, 0, 0, 0)
    }

    pub const fn scalable_m(bytes: i64) -> Self {
        Self::get(0, 0, bytes, 0, 0)
    }

    pub const fn scalable_n(bytes: i64) -> Self {
        Self::get(0, 0, 0, bytes, 0)
    }

    pub const fn scalable_mn(bytes: i64) -> Self {
        Self::get(0, 0, 0, 0, bytes)
    }

    #[inline]
    pub const fn fixed_bytes(self) -> i64 {
        self.fixed
    }

    /// The `vscale` component.
    #[inline]
    pub const fn scalable_bytes(self) -> i64 {
        self.scalable_v
    }

    #[inline]
    pub const fn scalable_v_bytes(self) -> i64 {
        self.scalable_v
    }

    #[inline]
    pub const fn scalable_m_bytes(self) -> i64 {
        self.scalable_m
    }

    #[inline]
    pub const fn scalable_n_bytes(self) -> i64 {
        self.scalable_n
    }

    #[inline]
    pub const fn scalable_mn_bytes(self) -> i64 {
        self.scalable_mn
    }

    /// The component for one scale class as a [`ScalableOffset`].
    ///
    /// Only the five named classes have a component; other flag
    /// combinations panic.
    pub fn component(self, scale: Scale) -> ScalableOffset {
        let bytes = if scale == Scale::FIXED {
            self.fixed
        } else if scale == Scale::V {
            self.scalable_v
        } else if scale == Scale::M {
            self.scalable_m
        } else if scale == Scale::N {
            self.scalable_n
        } else if scale == Scale::MN {
            self.scalable_mn
        } else {
            panic!("no stack offset component for {scale:?}");
        };
        ScalableOffset::with_scale(bytes, scale)
    }

    /// Whether any component is non-zero.
    #[inline]
    pub const fn is_nonzero(self) -> bool {
        self.fixed != 0
            || self.scalable_v != 0
            || self.scalable_m != 0
            || self.scalable_n != 0
            || self.scalable_mn != 0
    }
}

impl From<ScalableOffset> for StackOffset {
    fn from(offset: ScalableOffset) -> Self {
        let bytes = offset.known_min_value();
        let scale = offset.scale();
        if offset.is_zero() {
            Self::default()
        } else if scale == Scale::FIXED {
            Self::fixed(bytes)
        } else if scale == Scale::V {
            Self::scalable_v(bytes)
        } else if scale == Scale::M {
            Self::scalable_m(bytes)
        } else if scale == Scale::N {
            Self::scalable_n(bytes)
        } else if scale == Scale::MN {
            Self::scalable_mn(bytes)
        } else {
            panic!("no stack offset component for {scale:?}");
        }
    }
}

impl Add for StackOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::get(
            self.fixed + rhs.fixed,
            self.scalable_v + rhs.scalable_v,
            self.scalable_m + rhs.scalable_m,
            self.scalable_n + rhs.scalable_n,
            self.scalable_mn + rhs.scalable_mn,
        )
    }
}

impl Sub for StackOffset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl AddAssign for StackOffset {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for StackOffset {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for StackOffset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::get(
            -self.fixed,
            -self.scalable_v,
            -self.scalable_m,
            -self.scalable_n,
            -self.scalable_mn,
        )
    }
}

impl fmt::Display for StackOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (None, self.fixed),
            (Scale::V.prefix(), self.scalable_v),
            (Scale::M.prefix(), self.scalable_m),
            (Scale::N.prefix(), self.scalable_n),
            (Scale::MN.prefix(), self.scalable_mn),
        ];
        let mut first = true;
        for (prefix, bytes) in parts {
            if bytes == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match prefix {
                Some(prefix) => write!(f, "{prefix} x {bytes}")?,
                None => write!(f, "{bytes}")?,
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
