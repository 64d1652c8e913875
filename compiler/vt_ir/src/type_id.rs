//! Structural type handle.
//!
//! A `TypeId` is a 32-bit index into a [`TypeContext`](crate::TypeContext).
//! Interning makes type equality an index comparison. Frequently used types
//! are pre-interned at fixed indices so they can be named without a lookup.

use std::fmt;

/// A 32-bit index into the type context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Pre-interned types (indices 0-23) ===

    /// `void`.
    pub const VOID: Self = Self(0);
    /// `label`.
    pub const LABEL: Self = Self(1);
    /// `metadata`.
    pub const METADATA: Self = Self(2);
    /// `token`.
    pub const TOKEN: Self = Self(3);
    /// `x86_mmx`.
    pub const X86_MMX: Self = Self(4);
    /// `x86_amx`.
    pub const X86_AMX: Self = Self(5);
    /// `bf8` (8-bit brain float).
    pub const BF8: Self = Self(6);
    /// `hf8` (8-bit half float).
    pub const HF8: Self = Self(7);
    /// `half`.
    pub const HALF: Self = Self(8);
    /// `bfloat`.
    pub const BFLOAT: Self = Self(9);
    /// `float`.
    pub const FLOAT: Self = Self(10);
    /// `double`.
    pub const DOUBLE: Self = Self(11);
    /// `x86_fp80`.
    pub const X86_FP80: Self = Self(12);
    /// `fp128`.
    pub const FP128: Self = Self(13);
    /// `ppc_fp128`.
    pub const PPC_FP128: Self = Self(14);
    /// `i1`.
    pub const I1: Self = Self(15);
    /// `i8`.
    pub const I8: Self = Self(16);
    /// `i16`.
    pub const I16: Self = Self(17);
    /// `i32`.
    pub const I32: Self = Self(18);
    /// `i64`.
    pub const I64: Self = Self(19);
    /// `i128`.
    pub const I128: Self = Self(20);
    /// `ptr` in address space 0.
    pub const PTR: Self = Self(21);
    /// WebAssembly `externref`.
    pub const WASM_EXTERNREF: Self = Self(22);
    /// WebAssembly `funcref`.
    pub const WASM_FUNCREF: Self = Self(23);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 24;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the pre-interned types.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

const _: () = assert!(std::mem::size_of::<TypeId>() == 4);

#[cfg(test)]
mod tests;
