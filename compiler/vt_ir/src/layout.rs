//! Data layout: pointer widths and the size/alignment rules for structural
//! types.
//!
//! Sizes follow the usual three levels. The *type size* is the number of
//! value bits, the *store size* rounds that up to whole bytes, and the
//! *alloc size* rounds the store size up to the ABI alignment.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use vt_size::{align_to, Scale, TypeSize};

use crate::{TypeKind, TypeRef};

/// Target layout parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLayout {
    default_pointer_bits: u32,
    pointer_bits: FxHashMap<u32, u32>,
    max_natural_align: u64,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            default_pointer_bits: 64,
            pointer_bits: FxHashMap::default(),
            max_natural_align: 16,
        }
    }
}

impl DataLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer width for every address space without an explicit override.
    #[must_use]
    pub fn with_pointer_size(mut self, bits: u32) -> Self {
        assert!(bits > 0, "pointer width must be non-zero");
        self.default_pointer_bits = bits;
        self
    }

    /// Pointer width for one address space.
    #[must_use]
    pub fn with_address_space_pointer_size(mut self, address_space: u32, bits: u32) -> Self {
        assert!(bits > 0, "pointer width must be non-zero");
        self.pointer_bits.insert(address_space, bits);
        self
    }

    /// Largest ABI alignment, in bytes, a scalar or vector is given.
    #[must_use]
    pub fn with_max_natural_align(mut self, bytes: u64) -> Self {
        assert!(
            bytes.is_power_of_two(),
            "alignment must be a power of two, got {bytes}"
        );
        self.max_natural_align = bytes;
        self
    }

    pub fn pointer_size_in_bits(&self, address_space: u32) -> u32 {
        self.pointer_bits
            .get(&address_space)
            .copied()
            .unwrap_or(self.default_pointer_bits)
    }

    pub fn max_natural_align(&self) -> u64 {
        self.max_natural_align
    }

    /// Number of value bits of a sized type.
    ///
    /// # Panics
    /// Panics if `ty` is not sized.
    pub fn type_size_in_bits(&self, ty: TypeRef<'_>) -> TypeSize {
        match ty.kind() {
            TypeKind::Integer { bits } => TypeSize::fixed(u64::from(bits)),
            TypeKind::Float(kind) => TypeSize::fixed(u64::from(kind.bits())),
            TypeKind::Pointer { address_space } => {
                TypeSize::fixed(u64::from(self.pointer_size_in_bits(address_space)))
            }
            TypeKind::X86Mmx => TypeSize::fixed(64),
            TypeKind::X86Amx => TypeSize::fixed(8192),
            TypeKind::FixedVector { count, .. } | TypeKind::ScalableVector { count, .. } => {
                let elem = self.type_size_in_bits(ty.element_type()).fixed_value();
                TypeSize::get(elem * u64::from(count), ty.is_scalable_vector())
            }
            TypeKind::Matrix {
                rows,
                cols,
                scalable,
                ..
            } => {
                let elem = self.type_size_in_bits(ty.element_type()).fixed_value();
                let scale = if scalable { Scale::MN } else { Scale::FIXED };
                TypeSize::with_scale(elem * u64::from(rows) * u64::from(cols), scale)
            }
            TypeKind::Array { len, .. } => self.type_alloc_size_in_bits(ty.element_type()) * len,
            TypeKind::Struct { .. } => self.struct_layout(ty).size_in_bits,
            TypeKind::Void
            | TypeKind::Label
            | TypeKind::Metadata
            | TypeKind::Token
            | TypeKind::TargetExt { .. }
            | TypeKind::WasmExternref
            | TypeKind::WasmFuncref => panic!("type `{ty}` has no layout size"),
        }
    }

    /// Type size rounded up to whole bytes, in bits.
    pub fn type_store_size_in_bits(&self, ty: TypeRef<'_>) -> TypeSize {
        align_to(self.type_size_in_bits(ty), 8)
    }

    /// Store size rounded up to the ABI alignment, in bits.
    pub fn type_alloc_size_in_bits(&self, ty: TypeRef<'_>) -> TypeSize {
        align_to(self.type_store_size_in_bits(ty), self.abi_alignment(ty) * 8)
    }

    /// ABI alignment in bytes.
    pub fn abi_alignment(&self, ty: TypeRef<'_>) -> u64 {
        match ty.kind() {
            TypeKind::Matrix { .. } | TypeKind::Array { .. } => {
                self.abi_alignment(ty.element_type())
            }
            TypeKind::Struct { .. } => self.struct_layout(ty).alignment,
            _ => {
                let store_bytes = self.type_store_size_in_bits(ty).known_min_value() / 8;
                store_bytes
                    .next_power_of_two()
                    .min(self.max_natural_align)
            }
        }
    }

    /// Field offsets, size and alignment of a struct.
    ///
    /// # Panics
    /// Panics if `ty` is not a struct or holds a scalable field.
    pub fn struct_layout(&self, ty: TypeRef<'_>) -> StructLayout {
        let TypeKind::Struct { packed, .. } = ty.kind() else {
            panic!("`{ty}` is not a struct type");
        };

        let mut offset_bits = 0u64;
        let mut alignment = 1u64;
        let mut offsets = SmallVec::new();
        for field in ty.struct_fields() {
            let field_align = if packed { 1 } else { self.abi_alignment(field) };
            alignment = alignment.max(field_align);
            offset_bits = align_to(TypeSize::fixed(offset_bits), field_align * 8).fixed_value();
            offsets.push(offset_bits / 8);
            offset_bits += self.type_alloc_size_in_bits(field).fixed_value();
        }

        StructLayout {
            size_in_bits: align_to(TypeSize::fixed(offset_bits), alignment * 8),
            alignment,
            offsets,
        }
    }
}

/// Computed layout of a struct type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructLayout {
    /// Total size including tail padding.
    pub size_in_bits: TypeSize,
    /// ABI alignment in bytes.
    pub alignment: u64,
    /// Byte offset of each field.
    pub offsets: SmallVec<[u64; 4]>,
}

#[cfg(test)]
mod tests;
