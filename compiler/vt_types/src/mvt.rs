//! Machine value types.
//!
//! [`Mvt`] is the closed catalogue of value types a code generator can name
//! without consulting the structural type graph. The catalogue is one
//! declarative table: each row gives the variant, its short name and its
//! shape. Every other query (sizes, element types, lookups by shape) is
//! derived from the shape, so adding a row is the only change needed to
//! grow the catalogue.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use vt_ir::FloatKind;
use vt_size::{align_to, ElementCount, Scale, TypeSize};

use crate::Evt;

/// What a catalogue entry denotes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Shape {
    /// The invalid sentinel.
    Invalid,
    /// Machine or placeholder type with a fixed register footprint.
    Opaque { bits: u64, scalable: bool },
    Integer(u32),
    Float(FloatKind),
    /// Vector of `count` elements, `vscale`-scaled when `scalable`.
    Vector { elem: Mvt, count: u32, scalable: bool },
    /// `rows x cols` matrix; rows scale by `mscale` and cols by `nscale`.
    Matrix {
        elem: Mvt,
        rows: u32,
        cols: u32,
        scalable: bool,
    },
    Metadata,
    /// Pointer of target-dependent width.
    Pointer,
}

const fn opaque(bits: u64) -> Shape {
    Shape::Opaque {
        bits,
        scalable: false,
    }
}

const fn scalable_opaque(bits: u64) -> Shape {
    Shape::Opaque {
        bits,
        scalable: true,
    }
}

const fn int(bits: u32) -> Shape {
    Shape::Integer(bits)
}

const fn fp(kind: FloatKind) -> Shape {
    Shape::Float(kind)
}

const fn vector(elem: Mvt, count: u32) -> Shape {
    Shape::Vector {
        elem,
        count,
        scalable: false,
    }
}

const fn scalable_vector(elem: Mvt, count: u32) -> Shape {
    Shape::Vector {
        elem,
        count,
        scalable: true,
    }
}

// Matrix rows are always 1 in the catalogue.
const fn matrix(elem: Mvt, cols: u32) -> Shape {
    Shape::Matrix {
        elem,
        rows: 1,
        cols,
        scalable: false,
    }
}

const fn scalable_matrix(elem: Mvt, cols: u32) -> Shape {
    Shape::Matrix {
        elem,
        rows: 1,
        cols,
        scalable: true,
    }
}

/// Generate [`Mvt`] with its name and shape tables from one list of rows.
macro_rules! value_types {
    ($( $(#[$meta:meta])* $variant:ident = $name:literal => $shape:expr, )*) => {
        /// A simple (catalogued) value type.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        pub enum Mvt {
            $( $(#[$meta])* $variant, )*
        }

        impl Mvt {
            /// Every catalogue entry, in discriminant order.
            pub const ALL: &'static [Mvt] = &[$(Mvt::$variant),*];

            /// Short name, e.g. `"v4i32"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Mvt::$variant => $name, )*
                }
            }

            pub(crate) const fn shape(self) -> Shape {
                #[allow(clippy::enum_glob_use)]
                use Mvt::*;
                match self {
                    $( Mvt::$variant => $shape, )*
                }
            }
        }
    };
}

value_types! {
    // === Placeholders and scalars ===
    /// Sentinel for "no value type".
    Invalid = "invalid" => Shape::Invalid,
    /// Chain or other non-value operand.
    Other = "ch" => opaque(0),
    I1 = "i1" => int(1),
    I2 = "i2" => int(2),
    I4 = "i4" => int(4),
    I8 = "i8" => int(8),
    I16 = "i16" => int(16),
    I32 = "i32" => int(32),
    I64 = "i64" => int(64),
    I128 = "i128" => int(128),
    Bf8 = "bf8" => fp(FloatKind::Bf8),
    Hf8 = "hf8" => fp(FloatKind::Hf8),
    F16 = "f16" => fp(FloatKind::Half),
    Bf16 = "bf16" => fp(FloatKind::BFloat),
    F32 = "f32" => fp(FloatKind::Float),
    F64 = "f64" => fp(FloatKind::Double),
    F80 = "f80" => fp(FloatKind::X86Fp80),
    F128 = "f128" => fp(FloatKind::Fp128),
    Ppcf128 = "ppcf128" => fp(FloatKind::PpcFp128),

    // === Fixed-length vectors ===
    V1I1 = "v1i1" => vector(I1, 1),
    V2I1 = "v2i1" => vector(I1, 2),
    V4I1 = "v4i1" => vector(I1, 4),
    V8I1 = "v8i1" => vector(I1, 8),
    V16I1 = "v16i1" => vector(I1, 16),
    V32I1 = "v32i1" => vector(I1, 32),
    V64I1 = "v64i1" => vector(I1, 64),
    V128I1 = "v128i1" => vector(I1, 128),
    V256I1 = "v256i1" => vector(I1, 256),
    V512I1 = "v512i1" => vector(I1, 512),
    V1024I1 = "v1024i1" => vector(I1, 1024),
    V2048I1 = "v2048i1" => vector(I1, 2048),
    V128I2 = "v128i2" => vector(I2, 128),
    V256I2 = "v256i2" => vector(I2, 256),
    V64I4 = "v64i4" => vector(I4, 64),
    V128I4 = "v128i4" => vector(I4, 128),
    V1I8 = "v1i8" => vector(I8, 1),
    V2I8 = "v2i8" => vector(I8, 2),
    V4I8 = "v4i8" => vector(I8, 4),
    V8I8 = "v8i8" => vector(I8, 8),
    V16I8 = "v16i8" => vector(I8, 16),
    V32I8 = "v32i8" => vector(I8, 32),
    V64I8 = "v64i8" => vector(I8, 64),
    V128I8 = "v128i8" => vector(I8, 128),
    V256I8 = "v256i8" => vector(I8, 256),
    V512I8 = "v512i8" => vector(I8, 512),
    V1024I8 = "v1024i8" => vector(I8, 1024),
    V1I16 = "v1i16" => vector(I16, 1),
    V2I16 = "v2i16" => vector(I16, 2),
    V3I16 = "v3i16" => vector(I16, 3),
    V4I16 = "v4i16" => vector(I16, 4),
    V8I16 = "v8i16" => vector(I16, 8),
    V16I16 = "v16i16" => vector(I16, 16),
    V32I16 = "v32i16" => vector(I16, 32),
    V64I16 = "v64i16" => vector(I16, 64),
    V128I16 = "v128i16" => vector(I16, 128),
    V256I16 = "v256i16" => vector(I16, 256),
    V512I16 = "v512i16" => vector(I16, 512),
    V1I32 = "v1i32" => vector(I32, 1),
    V2I32 = "v2i32" => vector(I32, 2),
    V3I32 = "v3i32" => vector(I32, 3),
    V4I32 = "v4i32" => vector(I32, 4),
    V5I32 = "v5i32" => vector(I32, 5),
    V6I32 = "v6i32" => vector(I32, 6),
    V7I32 = "v7i32" => vector(I32, 7),
    V8I32 = "v8i32" => vector(I32, 8),
    V9I32 = "v9i32" => vector(I32, 9),
    V10I32 = "v10i32" => vector(I32, 10),
    V11I32 = "v11i32" => vector(I32, 11),
    V12I32 = "v12i32" => vector(I32, 12),
    V16I32 = "v16i32" => vector(I32, 16),
    V32I32 = "v32i32" => vector(I32, 32),
    V64I32 = "v64i32" => vector(I32, 64),
    V128I32 = "v128i32" => vector(I32, 128),
    V256I32 = "v256i32" => vector(I32, 256),
    V512I32 = "v512i32" => vector(I32, 512),
    V1024I32 = "v1024i32" => vector(I32, 1024),
    V2048I32 = "v2048i32" => vector(I32, 2048),
    V1I64 = "v1i64" => vector(I64, 1),
    V2I64 = "v2i64" => vector(I64, 2),
    V3I64 = "v3i64" => vector(I64, 3),
    V4I64 = "v4i64" => vector(I64, 4),
    V8I64 = "v8i64" => vector(I64, 8),
    V16I64 = "v16i64" => vector(I64, 16),
    V32I64 = "v32i64" => vector(I64, 32),
    V64I64 = "v64i64" => vector(I64, 64),
    V128I64 = "v128i64" => vector(I64, 128),
    V256I64 = "v256i64" => vector(I64, 256),
    V1I128 = "v1i128" => vector(I128, 1),
    V1F16 = "v1f16" => vector(F16, 1),
    V2F16 = "v2f16" => vector(F16, 2),
    V3F16 = "v3f16" => vector(F16, 3),
    V4F16 = "v4f16" => vector(F16, 4),
    V8F16 = "v8f16" => vector(F16, 8),
    V16F16 = "v16f16" => vector(F16, 16),
    V32F16 = "v32f16" => vector(F16, 32),
    V64F16 = "v64f16" => vector(F16, 64),
    V128F16 = "v128f16" => vector(F16, 128),
    V256F16 = "v256f16" => vector(F16, 256),
    V512F16 = "v512f16" => vector(F16, 512),
    V2Bf16 = "v2bf16" => vector(Bf16, 2),
    V3Bf16 = "v3bf16" => vector(Bf16, 3),
    V4Bf16 = "v4bf16" => vector(Bf16, 4),
    V8Bf16 = "v8bf16" => vector(Bf16, 8),
    V16Bf16 = "v16bf16" => vector(Bf16, 16),
    V32Bf16 = "v32bf16" => vector(Bf16, 32),
    V64Bf16 = "v64bf16" => vector(Bf16, 64),
    V128Bf16 = "v128bf16" => vector(Bf16, 128),
    V1F32 = "v1f32" => vector(F32, 1),
    V2F32 = "v2f32" => vector(F32, 2),
    V3F32 = "v3f32" => vector(F32, 3),
    V4F32 = "v4f32" => vector(F32, 4),
    V5F32 = "v5f32" => vector(F32, 5),
    V6F32 = "v6f32" => vector(F32, 6),
    V7F32 = "v7f32" => vector(F32, 7),
    V8F32 = "v8f32" => vector(F32, 8),
    V9F32 = "v9f32" => vector(F32, 9),
    V10F32 = "v10f32" => vector(F32, 10),
    V11F32 = "v11f32" => vector(F32, 11),
    V12F32 = "v12f32" => vector(F32, 12),
    V16F32 = "v16f32" => vector(F32, 16),
    V32F32 = "v32f32" => vector(F32, 32),
    V64F32 = "v64f32" => vector(F32, 64),
    V128F32 = "v128f32" => vector(F32, 128),
    V256F32 = "v256f32" => vector(F32, 256),
    V512F32 = "v512f32" => vector(F32, 512),
    V1024F32 = "v1024f32" => vector(F32, 1024),
    V2048F32 = "v2048f32" => vector(F32, 2048),
    V1F64 = "v1f64" => vector(F64, 1),
    V2F64 = "v2f64" => vector(F64, 2),
    V3F64 = "v3f64" => vector(F64, 3),
    V4F64 = "v4f64" => vector(F64, 4),
    V8F64 = "v8f64" => vector(F64, 8),
    V16F64 = "v16f64" => vector(F64, 16),
    V32F64 = "v32f64" => vector(F64, 32),
    V64F64 = "v64f64" => vector(F64, 64),
    V128F64 = "v128f64" => vector(F64, 128),
    V256F64 = "v256f64" => vector(F64, 256),

    // === Scalable vectors ===
    Nxv1I1 = "nxv1i1" => scalable_vector(I1, 1),
    Nxv2I1 = "nxv2i1" => scalable_vector(I1, 2),
    Nxv4I1 = "nxv4i1" => scalable_vector(I1, 4),
    Nxv8I1 = "nxv8i1" => scalable_vector(I1, 8),
    Nxv16I1 = "nxv16i1" => scalable_vector(I1, 16),
    Nxv32I1 = "nxv32i1" => scalable_vector(I1, 32),
    Nxv64I1 = "nxv64i1" => scalable_vector(I1, 64),
    Nxv1I8 = "nxv1i8" => scalable_vector(I8, 1),
    Nxv2I8 = "nxv2i8" => scalable_vector(I8, 2),
    Nxv4I8 = "nxv4i8" => scalable_vector(I8, 4),
    Nxv8I8 = "nxv8i8" => scalable_vector(I8, 8),
    Nxv16I8 = "nxv16i8" => scalable_vector(I8, 16),
    Nxv32I8 = "nxv32i8" => scalable_vector(I8, 32),
    Nxv64I8 = "nxv64i8" => scalable_vector(I8, 64),
    Nxv1I16 = "nxv1i16" => scalable_vector(I16, 1),
    Nxv2I16 = "nxv2i16" => scalable_vector(I16, 2),
    Nxv4I16 = "nxv4i16" => scalable_vector(I16, 4),
    Nxv8I16 = "nxv8i16" => scalable_vector(I16, 8),
    Nxv16I16 = "nxv16i16" => scalable_vector(I16, 16),
    Nxv32I16 = "nxv32i16" => scalable_vector(I16, 32),
    Nxv1I32 = "nxv1i32" => scalable_vector(I32, 1),
    Nxv2I32 = "nxv2i32" => scalable_vector(I32, 2),
    Nxv4I32 = "nxv4i32" => scalable_vector(I32, 4),
    Nxv8I32 = "nxv8i32" => scalable_vector(I32, 8),
    Nxv16I32 = "nxv16i32" => scalable_vector(I32, 16),
    Nxv32I32 = "nxv32i32" => scalable_vector(I32, 32),
    Nxv1I64 = "nxv1i64" => scalable_vector(I64, 1),
    Nxv2I64 = "nxv2i64" => scalable_vector(I64, 2),
    Nxv4I64 = "nxv4i64" => scalable_vector(I64, 4),
    Nxv8I64 = "nxv8i64" => scalable_vector(I64, 8),
    Nxv16I64 = "nxv16i64" => scalable_vector(I64, 16),
    Nxv32I64 = "nxv32i64" => scalable_vector(I64, 32),
    Nxv1F16 = "nxv1f16" => scalable_vector(F16, 1),
    Nxv2F16 = "nxv2f16" => scalable_vector(F16, 2),
    Nxv4F16 = "nxv4f16" => scalable_vector(F16, 4),
    Nxv8F16 = "nxv8f16" => scalable_vector(F16, 8),
    Nxv16F16 = "nxv16f16" => scalable_vector(F16, 16),
    Nxv32F16 = "nxv32f16" => scalable_vector(F16, 32),
    Nxv1Bf16 = "nxv1bf16" => scalable_vector(Bf16, 1),
    Nxv2Bf16 = "nxv2bf16" => scalable_vector(Bf16, 2),
    Nxv4Bf16 = "nxv4bf16" => scalable_vector(Bf16, 4),
    Nxv8Bf16 = "nxv8bf16" => scalable_vector(Bf16, 8),
    Nxv16Bf16 = "nxv16bf16" => scalable_vector(Bf16, 16),
    Nxv32Bf16 = "nxv32bf16" => scalable_vector(Bf16, 32),
    Nxv1F32 = "nxv1f32" => scalable_vector(F32, 1),
    Nxv2F32 = "nxv2f32" => scalable_vector(F32, 2),
    Nxv4F32 = "nxv4f32" => scalable_vector(F32, 4),
    Nxv8F32 = "nxv8f32" => scalable_vector(F32, 8),
    Nxv16F32 = "nxv16f32" => scalable_vector(F32, 16),
    Nxv1F64 = "nxv1f64" => scalable_vector(F64, 1),
    Nxv2F64 = "nxv2f64" => scalable_vector(F64, 2),
    Nxv4F64 = "nxv4f64" => scalable_vector(F64, 4),
    Nxv8F64 = "nxv8f64" => scalable_vector(F64, 8),
    Nxv1Bf8 = "nxv1bf8" => scalable_vector(Bf8, 1),
    Nxv2Bf8 = "nxv2bf8" => scalable_vector(Bf8, 2),
    Nxv4Bf8 = "nxv4bf8" => scalable_vector(Bf8, 4),
    Nxv8Bf8 = "nxv8bf8" => scalable_vector(Bf8, 8),
    Nxv16Bf8 = "nxv16bf8" => scalable_vector(Bf8, 16),
    Nxv32Bf8 = "nxv32bf8" => scalable_vector(Bf8, 32),
    Nxv64Bf8 = "nxv64bf8" => scalable_vector(Bf8, 64),
    Nxv1Hf8 = "nxv1hf8" => scalable_vector(Hf8, 1),
    Nxv2Hf8 = "nxv2hf8" => scalable_vector(Hf8, 2),
    Nxv4Hf8 = "nxv4hf8" => scalable_vector(Hf8, 4),
    Nxv8Hf8 = "nxv8hf8" => scalable_vector(Hf8, 8),
    Nxv16Hf8 = "nxv16hf8" => scalable_vector(Hf8, 16),
    Nxv32Hf8 = "nxv32hf8" => scalable_vector(Hf8, 32),
    Nxv64Hf8 = "nxv64hf8" => scalable_vector(Hf8, 64),

    // === Fixed matrices ===
    M1x1xI8 = "m1x1xi8" => matrix(I8, 1),
    M1x2xI8 = "m1x2xi8" => matrix(I8, 2),
    M1x4xI8 = "m1x4xi8" => matrix(I8, 4),
    M1x8xI8 = "m1x8xi8" => matrix(I8, 8),
    M1x16xI8 = "m1x16xi8" => matrix(I8, 16),
    M1x32xI8 = "m1x32xi8" => matrix(I8, 32),
    M1x64xI8 = "m1x64xi8" => matrix(I8, 64),
    M1x1xI16 = "m1x1xi16" => matrix(I16, 1),
    M1x2xI16 = "m1x2xi16" => matrix(I16, 2),
    M1x4xI16 = "m1x4xi16" => matrix(I16, 4),
    M1x8xI16 = "m1x8xi16" => matrix(I16, 8),
    M1x16xI16 = "m1x16xi16" => matrix(I16, 16),
    M1x32xI16 = "m1x32xi16" => matrix(I16, 32),
    M1x1xI32 = "m1x1xi32" => matrix(I32, 1),
    M1x2xI32 = "m1x2xi32" => matrix(I32, 2),
    M1x4xI32 = "m1x4xi32" => matrix(I32, 4),
    M1x8xI32 = "m1x8xi32" => matrix(I32, 8),
    M1x16xI32 = "m1x16xi32" => matrix(I32, 16),
    M1x1xI64 = "m1x1xi64" => matrix(I64, 1),
    M1x2xI64 = "m1x2xi64" => matrix(I64, 2),
    M1x4xI64 = "m1x4xi64" => matrix(I64, 4),
    M1x8xI64 = "m1x8xi64" => matrix(I64, 8),
    M1x1xBf8 = "m1x1xbf8" => matrix(Bf8, 1),
    M1x2xBf8 = "m1x2xbf8" => matrix(Bf8, 2),
    M1x4xBf8 = "m1x4xbf8" => matrix(Bf8, 4),
    M1x8xBf8 = "m1x8xbf8" => matrix(Bf8, 8),
    M1x16xBf8 = "m1x16xbf8" => matrix(Bf8, 16),
    M1x32xBf8 = "m1x32xbf8" => matrix(Bf8, 32),
    M1x64xBf8 = "m1x64xbf8" => matrix(Bf8, 64),
    M1x1xHf8 = "m1x1xhf8" => matrix(Hf8, 1),
    M1x2xHf8 = "m1x2xhf8" => matrix(Hf8, 2),
    M1x4xHf8 = "m1x4xhf8" => matrix(Hf8, 4),
    M1x8xHf8 = "m1x8xhf8" => matrix(Hf8, 8),
    M1x16xHf8 = "m1x16xhf8" => matrix(Hf8, 16),
    M1x32xHf8 = "m1x32xhf8" => matrix(Hf8, 32),
    M1x64xHf8 = "m1x64xhf8" => matrix(Hf8, 64),
    M1x1xBf16 = "m1x1xbf16" => matrix(Bf16, 1),
    M1x2xBf16 = "m1x2xbf16" => matrix(Bf16, 2),
    M1x4xBf16 = "m1x4xbf16" => matrix(Bf16, 4),
    M1x8xBf16 = "m1x8xbf16" => matrix(Bf16, 8),
    M1x16xBf16 = "m1x16xbf16" => matrix(Bf16, 16),
    M1x32xBf16 = "m1x32xbf16" => matrix(Bf16, 32),
    M1x1xF16 = "m1x1xf16" => matrix(F16, 1),
    M1x2xF16 = "m1x2xf16" => matrix(F16, 2),
    M1x4xF16 = "m1x4xf16" => matrix(F16, 4),
    M1x8xF16 = "m1x8xf16" => matrix(F16, 8),
    M1x16xF16 = "m1x16xf16" => matrix(F16, 16),
    M1x32xF16 = "m1x32xf16" => matrix(F16, 32),
    M1x1xF32 = "m1x1xf32" => matrix(F32, 1),
    M1x2xF32 = "m1x2xf32" => matrix(F32, 2),
    M1x4xF32 = "m1x4xf32" => matrix(F32, 4),
    M1x8xF32 = "m1x8xf32" => matrix(F32, 8),
    M1x16xF32 = "m1x16xf32" => matrix(F32, 16),
    M1x1xF64 = "m1x1xf64" => matrix(F64, 1),
    M1x2xF64 = "m1x2xf64" => matrix(F64, 2),
    M1x4xF64 = "m1x4xf64" => matrix(F64, 4),
    M1x8xF64 = "m1x8xf64" => matrix(F64, 8),

    // === Scalable matrices ===
    Mx1xnx1xI8 = "mx1xnx1xi8" => scalable_matrix(I8, 1),
    Mx1xnx2xI8 = "mx1xnx2xi8" => scalable_matrix(I8, 2),
    Mx1xnx4xI8 = "mx1xnx4xi8" => scalable_matrix(I8, 4),
    Mx1xnx8xI8 = "mx1xnx8xi8" => scalable_matrix(I8, 8),
    Mx1xnx16xI8 = "mx1xnx16xi8" => scalable_matrix(I8, 16),
    Mx1xnx32xI8 = "mx1xnx32xi8" => scalable_matrix(I8, 32),
    Mx1xnx64xI8 = "mx1xnx64xi8" => scalable_matrix(I8, 64),
    Mx1xnx1xI16 = "mx1xnx1xi16" => scalable_matrix(I16, 1),
    Mx1xnx2xI16 = "mx1xnx2xi16" => scalable_matrix(I16, 2),
    Mx1xnx4xI16 = "mx1xnx4xi16" => scalable_matrix(I16, 4),
    Mx1xnx8xI16 = "mx1xnx8xi16" => scalable_matrix(I16, 8),
    Mx1xnx16xI16 = "mx1xnx16xi16" => scalable_matrix(I16, 16),
    Mx1xnx32xI16 = "mx1xnx32xi16" => scalable_matrix(I16, 32),
    Mx1xnx1xI32 = "mx1xnx1xi32" => scalable_matrix(I32, 1),
    Mx1xnx2xI32 = "mx1xnx2xi32" => scalable_matrix(I32, 2),
    Mx1xnx4xI32 = "mx1xnx4xi32" => scalable_matrix(I32, 4),
    Mx1xnx8xI32 = "mx1xnx8xi32" => scalable_matrix(I32, 8),
    Mx1xnx16xI32 = "mx1xnx16xi32" => scalable_matrix(I32, 16),
    Mx1xnx1xI64 = "mx1xnx1xi64" => scalable_matrix(I64, 1),
    Mx1xnx2xI64 = "mx1xnx2xi64" => scalable_matrix(I64, 2),
    Mx1xnx4xI64 = "mx1xnx4xi64" => scalable_matrix(I64, 4),
    Mx1xnx8xI64 = "mx1xnx8xi64" => scalable_matrix(I64, 8),
    Mx1xnx1xBf8 = "mx1xnx1xbf8" => scalable_matrix(Bf8, 1),
    Mx1xnx2xBf8 = "mx1xnx2xbf8" => scalable_matrix(Bf8, 2),
    Mx1xnx4xBf8 = "mx1xnx4xbf8" => scalable_matrix(Bf8, 4),
    Mx1xnx8xBf8 = "mx1xnx8xbf8" => scalable_matrix(Bf8, 8),
    Mx1xnx16xBf8 = "mx1xnx16xbf8" => scalable_matrix(Bf8, 16),
    Mx1xnx32xBf8 = "mx1xnx32xbf8" => scalable_matrix(Bf8, 32),
    Mx1xnx64xBf8 = "mx1xnx64xbf8" => scalable_matrix(Bf8, 64),
    Mx1xnx1xHf8 = "mx1xnx1xhf8" => scalable_matrix(Hf8, 1),
    Mx1xnx2xHf8 = "mx1xnx2xhf8" => scalable_matrix(Hf8, 2),
    Mx1xnx4xHf8 = "mx1xnx4xhf8" => scalable_matrix(Hf8, 4),
    Mx1xnx8xHf8 = "mx1xnx8xhf8" => scalable_matrix(Hf8, 8),
    Mx1xnx16xHf8 = "mx1xnx16xhf8" => scalable_matrix(Hf8, 16),
    Mx1xnx32xHf8 = "mx1xnx32xhf8" => scalable_matrix(Hf8, 32),
    Mx1xnx64xHf8 = "mx1xnx64xhf8" => scalable_matrix(Hf8, 64),
    Mx1xnx1xBf16 = "mx1xnx1xbf16" => scalable_matrix(Bf16, 1),
    Mx1xnx2xBf16 = "mx1xnx2xbf16" => scalable_matrix(Bf16, 2),
    Mx1xnx4xBf16 = "mx1xnx4xbf16" => scalable_matrix(Bf16, 4),
    Mx1xnx8xBf16 = "mx1xnx8xbf16" => scalable_matrix(Bf16, 8),
    Mx1xnx16xBf16 = "mx1xnx16xbf16" => scalable_matrix(Bf16, 16),
    Mx1xnx32xBf16 = "mx1xnx32xbf16" => scalable_matrix(Bf16, 32),
    Mx1xnx1xF16 = "mx1xnx1xf16" => scalable_matrix(F16, 1),
    Mx1xnx2xF16 = "mx1xnx2xf16" => scalable_matrix(F16, 2),
    Mx1xnx4xF16 = "mx1xnx4xf16" => scalable_matrix(F16, 4),
    Mx1xnx8xF16 = "mx1xnx8xf16" => scalable_matrix(F16, 8),
    Mx1xnx16xF16 = "mx1xnx16xf16" => scalable_matrix(F16, 16),
    Mx1xnx32xF16 = "mx1xnx32xf16" => scalable_matrix(F16, 32),
    Mx1xnx1xF32 = "mx1xnx1xf32" => scalable_matrix(F32, 1),
    Mx1xnx2xF32 = "mx1xnx2xf32" => scalable_matrix(F32, 2),
    Mx1xnx4xF32 = "mx1xnx4xf32" => scalable_matrix(F32, 4),
    Mx1xnx8xF32 = "mx1xnx8xf32" => scalable_matrix(F32, 8),
    Mx1xnx16xF32 = "mx1xnx16xf32" => scalable_matrix(F32, 16),
    Mx1xnx1xF64 = "mx1xnx1xf64" => scalable_matrix(F64, 1),
    Mx1xnx2xF64 = "mx1xnx2xf64" => scalable_matrix(F64, 2),
    Mx1xnx4xF64 = "mx1xnx4xf64" => scalable_matrix(F64, 4),
    Mx1xnx8xF64 = "mx1xnx8xf64" => scalable_matrix(F64, 8),

    // === Opaque machine types ===
    /// 64-bit MMX register.
    X86Mmx = "x86mmx" => opaque(64),
    /// AMX tile register.
    X86Amx = "x86amx" => opaque(8192),
    /// Eight consecutive 64-bit registers (LS64).
    I64x8 = "i64x8" => opaque(512),
    /// Glue operand between scheduling nodes.
    Glue = "glue" => opaque(0),
    /// No value.
    IsVoid = "isVoid" => opaque(0),
    /// Value whose type is not known at this level.
    Untyped = "Untyped" => opaque(8),
    /// WebAssembly `funcref`.
    Funcref = "funcref" => opaque(0),
    /// WebAssembly `externref`.
    Externref = "externref" => opaque(0),
    /// SVE predicate-as-counter.
    Aarch64Svcount = "aarch64svcount" => scalable_opaque(16),
    /// SPIR-V builtin target extension type.
    Spirvbuiltin = "spirvbuiltin" => opaque(0),
    /// Metadata operand. Has no size.
    Metadata = "Metadata" => Shape::Metadata,
    /// Pointer of target-dependent width. Has no size.
    IPtr = "iPTR" => Shape::Pointer,
}

/// Catalogue entries keyed by value-carrying shape.
fn shape_index() -> &'static FxHashMap<Shape, Mvt> {
    static INDEX: OnceLock<FxHashMap<Shape, Mvt>> = OnceLock::new();
    INDEX.get_or_init(|| {
        Mvt::ALL
            .iter()
            .filter(|vt| {
                matches!(
                    vt.shape(),
                    Shape::Integer(_)
                        | Shape::Float(_)
                        | Shape::Vector { .. }
                        | Shape::Matrix { .. }
                )
            })
            .map(|&vt| (vt.shape(), vt))
            .collect()
    })
}

fn lookup(shape: Shape) -> Mvt {
    shape_index().get(&shape).copied().unwrap_or(Mvt::Invalid)
}

/// `is_<N>_bit_vector` predicates.
macro_rules! bit_vector_predicates {
    ($($name:ident => $bits:literal),* $(,)?) => {$(
        #[doc = concat!("A fixed-size vector of exactly ", stringify!($bits), " bits.")]
        pub fn $name(self) -> bool {
            self.is_vector() && self.size_in_bits() == TypeSize::fixed($bits)
        }
    )*};
}

pub(crate) use bit_vector_predicates;

impl Mvt {
    // === Factories ===

    /// The integer type of exactly `bits` bits, or [`Mvt::Invalid`].
    pub fn integer_vt(bits: u32) -> Mvt {
        lookup(Shape::Integer(bits))
    }

    /// The IEEE-style floating-point type of `bits` bits.
    ///
    /// # Panics
    /// Panics for widths with no floating-point type.
    pub fn floating_point_vt(bits: u32) -> Mvt {
        match bits {
            16 => Mvt::F16,
            32 => Mvt::F32,
            64 => Mvt::F64,
            80 => Mvt::F80,
            128 => Mvt::F128,
            _ => panic!("no floating-point value type of {bits} bits"),
        }
    }

    pub(crate) fn float_vt(kind: FloatKind) -> Mvt {
        lookup(Shape::Float(kind))
    }

    /// The vector of `count` `elem`s, or [`Mvt::Invalid`].
    pub fn vector_vt(elem: Mvt, count: ElementCount) -> Mvt {
        if count.is_scalable() && count.scale() != Scale::V {
            return Mvt::Invalid;
        }
        lookup(Shape::Vector {
            elem,
            count: count.known_min_value(),
            scalable: count.is_scalable(),
        })
    }

    /// The `rows x cols` matrix of `elem`, or [`Mvt::Invalid`].
    pub fn matrix_vt(elem: Mvt, rows: u32, cols: u32, scalable: bool) -> Mvt {
        lookup(Shape::Matrix {
            elem,
            rows,
            cols,
            scalable,
        })
    }

    // === Catalogue iteration ===

    pub fn all() -> impl Iterator<Item = Mvt> {
        Self::ALL.iter().copied()
    }

    pub fn integer_value_types() -> impl Iterator<Item = Mvt> {
        Self::all().filter(|vt| vt.is_scalar_integer())
    }

    pub fn fp_value_types() -> impl Iterator<Item = Mvt> {
        Self::all().filter(|vt| matches!(vt.shape(), Shape::Float(_)))
    }

    pub fn fixed_vector_value_types() -> impl Iterator<Item = Mvt> {
        Self::all().filter(|vt| vt.is_fixed_length_vector())
    }

    pub fn scalable_vector_value_types() -> impl Iterator<Item = Mvt> {
        Self::all().filter(|vt| vt.is_scalable_vector())
    }

    pub fn matrix_value_types() -> impl Iterator<Item = Mvt> {
        Self::all().filter(|vt| vt.is_matrix())
    }

    // === Classification ===

    pub const fn is_valid(self) -> bool {
        !matches!(self, Mvt::Invalid)
    }

    pub const fn is_scalar_integer(self) -> bool {
        matches!(self.shape(), Shape::Integer(_))
    }

    /// An integer or a vector or matrix of integers.
    pub const fn is_integer(self) -> bool {
        match self.shape() {
            Shape::Integer(_) => true,
            Shape::Vector { elem, .. } | Shape::Matrix { elem, .. } => elem.is_scalar_integer(),
            _ => false,
        }
    }

    /// A float or a vector or matrix of floats.
    pub const fn is_floating_point(self) -> bool {
        match self.shape() {
            Shape::Float(_) => true,
            Shape::Vector { elem, .. } | Shape::Matrix { elem, .. } => {
                matches!(elem.shape(), Shape::Float(_))
            }
            _ => false,
        }
    }

    pub const fn is_vector(self) -> bool {
        matches!(self.shape(), Shape::Vector { .. })
    }

    pub const fn is_fixed_length_vector(self) -> bool {
        matches!(self.shape(), Shape::Vector { scalable: false, .. })
    }

    pub const fn is_scalable_vector(self) -> bool {
        matches!(self.shape(), Shape::Vector { scalable: true, .. })
    }

    pub const fn is_matrix(self) -> bool {
        matches!(self.shape(), Shape::Matrix { .. })
    }

    pub const fn is_scalable_matrix(self) -> bool {
        matches!(self.shape(), Shape::Matrix { scalable: true, .. })
    }

    /// An opaque target type whose size scales with `vscale`.
    pub const fn is_scalable_target_ext_vt(self) -> bool {
        matches!(self, Mvt::Aarch64Svcount)
    }

    /// Any type whose size depends on a runtime factor.
    pub const fn is_scalable_vt(self) -> bool {
        self.is_scalable_vector() || self.is_scalable_matrix() || self.is_scalable_target_ext_vt()
    }

    bit_vector_predicates! {
        is_16_bit_vector => 16,
        is_32_bit_vector => 32,
        is_64_bit_vector => 64,
        is_128_bit_vector => 128,
        is_256_bit_vector => 256,
        is_512_bit_vector => 512,
        is_1024_bit_vector => 1024,
        is_2048_bit_vector => 2048,
    }

    // === Sizes ===

    /// Register footprint in bits.
    ///
    /// # Panics
    /// Panics for [`Mvt::Invalid`], [`Mvt::Metadata`] and [`Mvt::IPtr`],
    /// which have no size of their own.
    pub fn size_in_bits(self) -> TypeSize {
        match self.shape() {
            Shape::Invalid => panic!("the invalid value type has no size"),
            Shape::Opaque { bits, scalable } => TypeSize::get(bits, scalable),
            Shape::Integer(bits) => TypeSize::fixed(u64::from(bits)),
            Shape::Float(kind) => TypeSize::fixed(u64::from(kind.bits())),
            Shape::Vector {
                elem,
                count,
                scalable,
            } => TypeSize::get(elem.fixed_size_in_bits() * u64::from(count), scalable),
            Shape::Matrix {
                elem,
                rows,
                cols,
                scalable,
            } => {
                let scale = if scalable { Scale::MN } else { Scale::FIXED };
                TypeSize::with_scale(
                    elem.fixed_size_in_bits() * u64::from(rows) * u64::from(cols),
                    scale,
                )
            }
            Shape::Metadata => panic!("metadata has no size"),
            Shape::Pointer => panic!("iPTR size is target-dependent; ask the target"),
        }
    }

    pub fn fixed_size_in_bits(self) -> u64 {
        self.size_in_bits().fixed_value()
    }

    pub fn scalar_size_in_bits(self) -> u64 {
        self.scalar_type().fixed_size_in_bits()
    }

    /// Bytes overwritten by a store, e.g. 1 for `i1` and 10 for `f80`.
    pub fn store_size(self) -> TypeSize {
        align_to(self.size_in_bits(), 8).divide_coefficient_by(8)
    }

    pub fn store_size_in_bits(self) -> TypeSize {
        self.store_size() * 8
    }

    /// Size is a whole number of bytes.
    pub fn is_byte_sized(self) -> bool {
        self.size_in_bits().is_known_multiple_of(8)
    }

    // === Structure ===

    /// The element type of a vector or matrix, otherwise `self`.
    pub const fn scalar_type(self) -> Mvt {
        match self.shape() {
            Shape::Vector { elem, .. } | Shape::Matrix { elem, .. } => elem,
            _ => self,
        }
    }

    pub fn vector_element_type(self) -> Mvt {
        match self.shape() {
            Shape::Vector { elem, .. } => elem,
            _ => panic!("`{self}` is not a vector type"),
        }
    }

    pub fn vector_element_count(self) -> ElementCount {
        match self.shape() {
            Shape::Vector {
                count, scalable, ..
            } => ElementCount::get(count, scalable),
            _ => panic!("`{self}` is not a vector type"),
        }
    }

    /// Known element count of a fixed vector.
    ///
    /// Reading a scalable vector's count here is a caller bug; it is logged
    /// and the minimum is returned.
    pub fn vector_num_elements(self) -> u32 {
        if self.is_scalable_vector() {
            tracing::warn!(
                vt = %self,
                "fixed element count requested on a scalable vector; result is only the minimum"
            );
        }
        self.vector_min_num_elements()
    }

    pub fn vector_min_num_elements(self) -> u32 {
        self.vector_element_count().known_min_value()
    }

    pub fn matrix_element_type(self) -> Mvt {
        match self.shape() {
            Shape::Matrix { elem, .. } => elem,
            _ => panic!("`{self}` is not a matrix type"),
        }
    }

    /// Row count of a matrix (before `mscale`).
    pub fn matrix_num_elements(self) -> u32 {
        match self.shape() {
            Shape::Matrix { rows, .. } => rows,
            _ => panic!("`{self}` is not a matrix type"),
        }
    }

    /// Column count of a matrix (before `nscale`).
    pub fn matrix_num_elements2(self) -> u32 {
        match self.shape() {
            Shape::Matrix { cols, .. } => cols,
            _ => panic!("`{self}` is not a matrix type"),
        }
    }

    // === Transforms ===

    /// Same shape with integer elements of the same width.
    ///
    /// # Panics
    /// Panics if the result is not in the catalogue.
    pub fn change_vector_element_type_to_integer(self) -> Mvt {
        let elem = Mvt::integer_vt(self.vector_element_type().fixed_size_in_bits_u32());
        self.change_vector_element_type(elem)
    }

    pub fn change_vector_element_type(self, elem: Mvt) -> Mvt {
        let vt = Mvt::vector_vt(elem, self.vector_element_count());
        assert!(
            vt.is_valid(),
            "`{self}` with `{elem}` elements is not a simple value type"
        );
        vt
    }

    /// The integer type of the same size, element-wise for vectors.
    pub fn change_type_to_integer(self) -> Mvt {
        if self.is_vector() {
            return self.change_vector_element_type_to_integer();
        }
        Mvt::integer_vt(self.fixed_size_in_bits_u32())
    }

    /// Half as many elements of the same type.
    pub fn half_num_vector_elements_vt(self) -> Mvt {
        let count = self.vector_element_count();
        assert!(count.is_known_even(), "`{self}` has an odd element count");
        Mvt::vector_vt(self.vector_element_type(), count.divide_coefficient_by(2))
    }

    fn fixed_size_in_bits_u32(self) -> u32 {
        u32::try_from(self.fixed_size_in_bits())
            .unwrap_or_else(|_| panic!("`{self}` is wider than any integer value type"))
    }

    // === Size comparisons ===

    pub fn bits_eq(self, vt: Mvt) -> bool {
        Evt::Simple(self).bits_eq(Evt::Simple(vt))
    }

    pub fn bits_gt(self, vt: Mvt) -> bool {
        Evt::Simple(self).bits_gt(Evt::Simple(vt))
    }

    pub fn bits_ge(self, vt: Mvt) -> bool {
        Evt::Simple(self).bits_ge(Evt::Simple(vt))
    }

    pub fn bits_lt(self, vt: Mvt) -> bool {
        Evt::Simple(self).bits_lt(Evt::Simple(vt))
    }

    pub fn bits_le(self, vt: Mvt) -> bool {
        Evt::Simple(self).bits_le(Evt::Simple(vt))
    }
}

impl Default for Mvt {
    fn default() -> Self {
        Mvt::Invalid
    }
}

impl fmt::Display for Mvt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Mvt>() == 2);

#[cfg(test)]
mod tests;
