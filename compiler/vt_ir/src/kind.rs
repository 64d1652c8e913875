//! Structural type kinds.
//!
//! `TypeKind` is the interned payload behind a [`TypeId`]. Child types are
//! referenced by id, so every kind is flat and cheap to hash.

use smallvec::SmallVec;

use crate::TypeId;

/// Widest integer type the context accepts.
pub const MAX_INT_BITS: u32 = 1 << 23;

/// Floating-point formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FloatKind {
    /// 8-bit brain float (E5M2).
    Bf8,
    /// 8-bit half float (E4M3).
    Hf8,
    /// IEEE binary16.
    Half,
    /// 16-bit brain float.
    BFloat,
    /// IEEE binary32.
    Float,
    /// IEEE binary64.
    Double,
    /// x87 80-bit extended precision.
    X86Fp80,
    /// IEEE binary128.
    Fp128,
    /// PowerPC double-double.
    PpcFp128,
}

impl FloatKind {
    /// Width of the format in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bf8 | Self::Hf8 => 8,
            Self::Half | Self::BFloat => 16,
            Self::Float => 32,
            Self::Double => 64,
            Self::X86Fp80 => 80,
            Self::Fp128 | Self::PpcFp128 => 128,
        }
    }

    /// Textual name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bf8 => "bf8",
            Self::Hf8 => "hf8",
            Self::Half => "half",
            Self::BFloat => "bfloat",
            Self::Float => "float",
            Self::Double => "double",
            Self::X86Fp80 => "x86_fp80",
            Self::Fp128 => "fp128",
            Self::PpcFp128 => "ppc_fp128",
        }
    }

    pub(crate) const fn type_id(self) -> TypeId {
        match self {
            Self::Bf8 => TypeId::BF8,
            Self::Hf8 => TypeId::HF8,
            Self::Half => TypeId::HALF,
            Self::BFloat => TypeId::BFLOAT,
            Self::Float => TypeId::FLOAT,
            Self::Double => TypeId::DOUBLE,
            Self::X86Fp80 => TypeId::X86_FP80,
            Self::Fp128 => TypeId::FP128,
            Self::PpcFp128 => TypeId::PPC_FP128,
        }
    }
}

/// The shape of a structural type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Void,
    Label,
    Metadata,
    Token,
    X86Mmx,
    X86Amx,
    Float(FloatKind),
    Integer {
        bits: u32,
    },
    Pointer {
        address_space: u32,
    },
    /// `<count x element>`.
    FixedVector {
        element: TypeId,
        count: u32,
    },
    /// `<vscale x count x element>`.
    ScalableVector {
        element: TypeId,
        count: u32,
    },
    /// `rows x cols` matrix. When `scalable`, rows are scaled by `mscale`
    /// and columns by `nscale`.
    Matrix {
        element: TypeId,
        rows: u32,
        cols: u32,
        scalable: bool,
    },
    Array {
        element: TypeId,
        len: u64,
    },
    Struct {
        fields: SmallVec<[TypeId; 4]>,
        packed: bool,
    },
    /// Target extension type, e.g. `target("aarch64.svcount")`.
    TargetExt {
        name: Box<str>,
    },
    WasmExternref,
    WasmFuncref,
}

impl TypeKind {
    /// Kinds pre-interned at the fixed [`TypeId`] constants, in index order.
    pub(crate) fn primitives() -> [TypeKind; TypeId::PRIMITIVE_COUNT as usize] {
        [
            TypeKind::Void,
            TypeKind::Label,
            TypeKind::Metadata,
            TypeKind::Token,
            TypeKind::X86Mmx,
            TypeKind::X86Amx,
            TypeKind::Float(FloatKind::Bf8),
            TypeKind::Float(FloatKind::Hf8),
            TypeKind::Float(FloatKind::Half),
            TypeKind::Float(FloatKind::BFloat),
            TypeKind::Float(FloatKind::Float),
            TypeKind::Float(FloatKind::Double),
            TypeKind::Float(FloatKind::X86Fp80),
            TypeKind::Float(FloatKind::Fp128),
            TypeKind::Float(FloatKind::PpcFp128),
            TypeKind::Integer { bits: 1 },
            TypeKind::Integer { bits: 8 },
            TypeKind::Integer { bits: 16 },
            TypeKind::Integer { bits: 32 },
            TypeKind::Integer { bits: 64 },
            TypeKind::Integer { bits: 128 },
            TypeKind::Pointer { address_space: 0 },
            TypeKind::WasmExternref,
            TypeKind::WasmFuncref,
        ]
    }

    /// Whether a value of this kind can be a vector element.
    pub const fn is_valid_vector_element(&self) -> bool {
        matches!(
            self,
            Self::Integer { .. } | Self::Float(_) | Self::Pointer { .. }
        )
    }

    /// Whether a value of this kind can be a matrix element.
    pub const fn is_valid_matrix_element(&self) -> bool {
        matches!(self, Self::Integer { .. } | Self::Float(_))
    }

    /// Whether a value of this kind can be an aggregate member.
    pub const fn is_valid_aggregate_element(&self) -> bool {
        !matches!(
            self,
            Self::Void | Self::Label | Self::Metadata | Self::Token
        )
    }
}

#[cfg(test)]
mod tests;
