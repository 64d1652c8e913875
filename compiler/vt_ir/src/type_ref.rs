//! Borrowed handle to an interned type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use smallvec::SmallVec;
use vt_size::{ElementCount, Scale, TypeSize};

use crate::{FloatKind, TypeContext, TypeId, TypeKind};

/// A [`TypeId`] paired with the context that owns it.
///
/// The handle is never null and cannot outlive its context. Two handles are
/// equal when they name the same id in the same context.
#[derive(Copy, Clone)]
pub struct TypeRef<'ctx> {
    ctx: &'ctx TypeContext,
    id: TypeId,
}

impl<'ctx> TypeRef<'ctx> {
    #[inline]
    pub(crate) fn new(ctx: &'ctx TypeContext, id: TypeId) -> Self {
        Self { ctx, id }
    }

    #[inline]
    pub fn id(self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn context(self) -> &'ctx TypeContext {
        self.ctx
    }

    pub fn kind(self) -> TypeKind {
        self.ctx.kind(self.id)
    }

    // === Kind queries ===

    pub fn is_void(self) -> bool {
        self.id == TypeId::VOID
    }

    pub fn is_metadata(self) -> bool {
        self.id == TypeId::METADATA
    }

    pub fn is_integer(self) -> bool {
        matches!(self.kind(), TypeKind::Integer { .. })
    }

    /// Whether this is exactly `iN`.
    pub fn is_integer_of(self, bits: u32) -> bool {
        self.kind() == TypeKind::Integer { bits }
    }

    /// Width of an integer type.
    ///
    /// # Panics
    /// Panics if this is not an integer type.
    pub fn integer_bit_width(self) -> u32 {
        match self.kind() {
            TypeKind::Integer { bits } => bits,
            _ => panic!("`{self}` is not an integer type"),
        }
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self.kind(), TypeKind::Float(_))
    }

    pub fn float_kind(self) -> Option<FloatKind> {
        match self.kind() {
            TypeKind::Float(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_pointer(self) -> bool {
        matches!(self.kind(), TypeKind::Pointer { .. })
    }

    /// Address space of a pointer, or of the pointer elements of a vector.
    pub fn address_space(self) -> Option<u32> {
        match self.scalar_type().kind() {
            TypeKind::Pointer { address_space } => Some(address_space),
            _ => None,
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self.kind(),
            TypeKind::FixedVector { .. } | TypeKind::ScalableVector { .. }
        )
    }

    pub fn is_fixed_vector(self) -> bool {
        matches!(self.kind(), TypeKind::FixedVector { .. })
    }

    pub fn is_scalable_vector(self) -> bool {
        matches!(self.kind(), TypeKind::ScalableVector { .. })
    }

    pub fn is_matrix(self) -> bool {
        matches!(self.kind(), TypeKind::Matrix { .. })
    }

    pub fn is_scalable_matrix(self) -> bool {
        matches!(self.kind(), TypeKind::Matrix { scalable: true, .. })
    }

    pub fn is_array(self) -> bool {
        matches!(self.kind(), TypeKind::Array { .. })
    }

    pub fn is_struct(self) -> bool {
        matches!(self.kind(), TypeKind::Struct { .. })
    }

    pub fn is_aggregate(self) -> bool {
        self.is_array() || self.is_struct()
    }

    pub fn is_target_ext(self) -> bool {
        matches!(self.kind(), TypeKind::TargetExt { .. })
    }

    pub fn target_ext_name(self) -> Option<String> {
        match self.kind() {
            TypeKind::TargetExt { name } => Some(name.into_string()),
            _ => None,
        }
    }

    // === Structure ===

    /// Element type of a vector, matrix or array.
    ///
    /// # Panics
    /// Panics for any other kind.
    pub fn element_type(self) -> TypeRef<'ctx> {
        match self.kind() {
            TypeKind::FixedVector { element, .. }
            | TypeKind::ScalableVector { element, .. }
            | TypeKind::Matrix { element, .. }
            | TypeKind::Array { element, .. } => Self::new(self.ctx, element),
            _ => panic!("`{self}` has no element type"),
        }
    }

    /// The element type of a vector or matrix, otherwise `self`.
    pub fn scalar_type(self) -> TypeRef<'ctx> {
        if self.is_vector() || self.is_matrix() {
            self.element_type()
        } else {
            self
        }
    }

    /// Element count of a vector, or `rows x cols` of a matrix.
    ///
    /// A scalable matrix count is scaled by both matrix factors.
    ///
    /// # Panics
    /// Panics for any other kind.
    pub fn element_count(self) -> ElementCount {
        match self.kind() {
            TypeKind::FixedVector { count, .. } => ElementCount::fixed(count),
            TypeKind::ScalableVector { count, .. } => ElementCount::scalable(count),
            TypeKind::Matrix {
                rows,
                cols,
                scalable,
                ..
            } => ElementCount::with_scale(rows * cols, matrix_scale(scalable, Scale::MN)),
            _ => panic!("`{self}` has no element count"),
        }
    }

    /// Row count of a matrix, `mscale`-scaled when scalable.
    pub fn matrix_rows(self) -> ElementCount {
        match self.kind() {
            TypeKind::Matrix { rows, scalable, .. } => {
                ElementCount::with_scale(rows, matrix_scale(scalable, Scale::M))
            }
            _ => panic!("`{self}` is not a matrix type"),
        }
    }

    /// Column count of a matrix, `nscale`-scaled when scalable.
    pub fn matrix_cols(self) -> ElementCount {
        match self.kind() {
            TypeKind::Matrix { cols, scalable, .. } => {
                ElementCount::with_scale(cols, matrix_scale(scalable, Scale::N))
            }
            _ => panic!("`{self}` is not a matrix type"),
        }
    }

    pub fn struct_fields(self) -> SmallVec<[TypeRef<'ctx>; 4]> {
        match self.kind() {
            TypeKind::Struct { fields, .. } => {
                fields.into_iter().map(|id| Self::new(self.ctx, id)).collect()
            }
            _ => panic!("`{self}` is not a struct type"),
        }
    }

    // === Layout ===

    /// Whether the type has a layout size.
    pub fn is_sized(self) -> bool {
        match self.kind() {
            TypeKind::Void
            | TypeKind::Label
            | TypeKind::Metadata
            | TypeKind::Token
            | TypeKind::TargetExt { .. }
            | TypeKind::WasmExternref
            | TypeKind::WasmFuncref => false,
            TypeKind::Array { element, .. } => Self::new(self.ctx, element).is_sized(),
            TypeKind::Struct { fields, .. } => fields
                .into_iter()
                .all(|id| Self::new(self.ctx, id).is_sized()),
            _ => true,
        }
    }

    /// Size in bits under the context's data layout.
    pub fn size_in_bits(self) -> TypeSize {
        self.ctx.layout().type_size_in_bits(self)
    }

    /// Size in bits of the scalar type.
    pub fn scalar_size_in_bits(self) -> u64 {
        self.scalar_type().size_in_bits().fixed_value()
    }
}

#[inline]
fn matrix_scale(scalable: bool, scale: Scale) -> Scale {
    if scalable {
        scale
    } else {
        Scale::FIXED
    }
}

impl PartialEq for TypeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ctx, other.ctx) && self.id == other.id
    }
}

impl Eq for TypeRef<'_> {}

impl Hash for TypeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elem = |id| Self::new(self.ctx, id);
        match self.kind() {
            TypeKind::Void => f.write_str("void"),
            TypeKind::Label => f.write_str("label"),
            TypeKind::Metadata => f.write_str("metadata"),
            TypeKind::Token => f.write_str("token"),
            TypeKind::X86Mmx => f.write_str("x86_mmx"),
            TypeKind::X86Amx => f.write_str("x86_amx"),
            TypeKind::Float(kind) => f.write_str(kind.name()),
            TypeKind::Integer { bits } => write!(f, "i{bits}"),
            TypeKind::Pointer { address_space: 0 } => f.write_str("ptr"),
            TypeKind::Pointer { address_space } => write!(f, "ptr addrspace({address_space})"),
            TypeKind::FixedVector { element, count } => {
                write!(f, "<{count} x {}>", elem(element))
            }
            TypeKind::ScalableVector { element, count } => {
                write!(f, "<vscale x {count} x {}>", elem(element))
            }
            TypeKind::Matrix {
                element,
                rows,
                cols,
                scalable: false,
            } => write!(f, "matrix({rows} x {cols} x {})", elem(element)),
            TypeKind::Matrix {
                element,
                rows,
                cols,
                scalable: true,
            } => write!(
                f,
                "matrix(mscale x {rows} x nscale x {cols} x {})",
                elem(element)
            ),
            TypeKind::Array { element, len } => write!(f, "[{len} x {}]", elem(element)),
            TypeKind::Struct { fields, packed } => {
                if packed {
                    f.write_str("<")?;
                }
                f.write_str("{")?;
                for (i, &field) in fields.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}{}", elem(field))?;
                }
                f.write_str(if fields.is_empty() { "}" } else { " }" })?;
                if packed {
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeKind::TargetExt { name } => write!(f, "target(\"{name}\")"),
            TypeKind::WasmExternref => f.write_str("externref"),
            TypeKind::WasmFuncref => f.write_str("funcref"),
        }
    }
}

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({}: {self})", self.id.raw())
    }
}

#[cfg(test)]
mod tests;
