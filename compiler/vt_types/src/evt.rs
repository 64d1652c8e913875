//! Extended value types.
//!
//! An [`Evt`] is either a catalogued [`Mvt`] or a handle to the structural
//! type it stands for. Every query checks which, and answers from the
//! catalogue tables or from the structural type respectively. The extended
//! form is what lets code generation talk about `i17` or `<3 x i7>` without
//! growing the catalogue.

use std::fmt;

use vt_ir::{TypeContext, TypeKind, TypeRef};
use vt_size::{align_to, ElementCount, TypeSize};

use crate::mvt::{bit_vector_predicates, Shape};
use crate::Mvt;

/// `is_extended_<N>_bit_vector` predicates.
macro_rules! extended_bit_vector_predicates {
    ($($name:ident => $bits:literal),* $(,)?) => {$(
        #[doc = concat!("An extended fixed-size vector of exactly ", stringify!($bits), " bits.")]
        pub fn $name(self) -> bool {
            self.is_extended_vector() && self.extended_size_in_bits() == TypeSize::fixed($bits)
        }
    )*};
}

/// A value type: simple, or extended with the structural type it denotes.
///
/// The extended handle borrows the owning [`TypeContext`], so an `Evt` can
/// never outlive the types it refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Evt<'ctx> {
    Simple(Mvt),
    Extended(TypeRef<'ctx>),
}

impl From<Mvt> for Evt<'_> {
    fn from(vt: Mvt) -> Self {
        Evt::Simple(vt)
    }
}

impl<'ctx> Evt<'ctx> {
    #[inline]
    pub fn is_simple(self) -> bool {
        matches!(self, Evt::Simple(_))
    }

    #[inline]
    pub fn is_extended(self) -> bool {
        matches!(self, Evt::Extended(_))
    }

    /// The catalogued type.
    ///
    /// # Panics
    /// Panics on an extended type.
    pub fn simple_vt(self) -> Mvt {
        match self {
            Evt::Simple(vt) => vt,
            Evt::Extended(ty) => panic!("`{ty}` is an extended type"),
        }
    }

    fn extended(ty: TypeRef<'ctx>) -> Self {
        tracing::debug!(ty = %ty, "no simple value type, using extended form");
        Evt::Extended(ty)
    }

    fn extended_type(self) -> TypeRef<'ctx> {
        match self {
            Evt::Extended(ty) => ty,
            Evt::Simple(vt) => panic!("`{vt}` is not an extended type"),
        }
    }

    // === Factories ===

    /// The integer type of `bits` bits, extended when not catalogued.
    pub fn integer_vt(ctx: &'ctx TypeContext, bits: u32) -> Self {
        match Mvt::integer_vt(bits) {
            Mvt::Invalid => Self::extended(ctx.int(bits)),
            vt => Evt::Simple(vt),
        }
    }

    pub fn floating_point_vt(bits: u32) -> Self {
        Evt::Simple(Mvt::floating_point_vt(bits))
    }

    /// The vector of `count` `elem`s, extended when not catalogued.
    pub fn vector_vt(ctx: &'ctx TypeContext, elem: Evt<'ctx>, count: ElementCount) -> Self {
        if let Evt::Simple(elem) = elem {
            let vt = Mvt::vector_vt(elem, count);
            if vt.is_valid() {
                return Evt::Simple(vt);
            }
        }
        Self::extended(ctx.vector(elem.type_for_evt(ctx), count))
    }

    /// The `rows x cols` matrix of `elem`, extended when not catalogued.
    pub fn matrix_vt(
        ctx: &'ctx TypeContext,
        elem: Evt<'ctx>,
        rows: u32,
        cols: u32,
        scalable: bool,
    ) -> Self {
        if let Evt::Simple(elem) = elem {
            let vt = Mvt::matrix_vt(elem, rows, cols, scalable);
            if vt.is_valid() {
                return Evt::Simple(vt);
            }
        }
        Self::extended(ctx.matrix(elem.type_for_evt(ctx), rows, cols, scalable))
    }

    // === Conversion to and from structural types ===

    /// Classify `ty`, keeping it as an extended type when the catalogue has
    /// no exact integer, vector or matrix match.
    ///
    /// Everything else goes through [`Mvt::get_vt`], including the handling
    /// of unrecognised types.
    pub fn get_evt(ty: TypeRef<'ctx>, handle_unknown: bool) -> Self {
        match ty.kind() {
            TypeKind::Integer { bits } => match Mvt::integer_vt(bits) {
                Mvt::Invalid => Self::extended(ty),
                vt => Evt::Simple(vt),
            },
            TypeKind::FixedVector { .. } | TypeKind::ScalableVector { .. } => {
                match Self::get_evt(ty.element_type(), false) {
                    Evt::Simple(elem) => match Mvt::vector_vt(elem, ty.element_count()) {
                        Mvt::Invalid => Self::extended(ty),
                        vt => Evt::Simple(vt),
                    },
                    Evt::Extended(_) => Self::extended(ty),
                }
            }
            TypeKind::Matrix {
                rows,
                cols,
                scalable,
                ..
            } => match Self::get_evt(ty.element_type(), false) {
                Evt::Simple(elem) => match Mvt::matrix_vt(elem, rows, cols, scalable) {
                    Mvt::Invalid => Self::extended(ty),
                    vt => Evt::Simple(vt),
                },
                Evt::Extended(_) => Self::extended(ty),
            },
            _ => Evt::Simple(Mvt::get_vt(ty, handle_unknown)),
        }
    }

    /// The structural type this value type denotes.
    ///
    /// Integers are unsigned, pointers are in address space 0 and
    /// [`Mvt::I64x8`] is the plain 512-bit integer.
    ///
    /// # Panics
    /// Panics for placeholder types with no structural counterpart:
    /// [`Mvt::Invalid`], [`Mvt::Other`], [`Mvt::Glue`], [`Mvt::Untyped`]
    /// and [`Mvt::Spirvbuiltin`].
    pub fn type_for_evt(self, ctx: &'ctx TypeContext) -> TypeRef<'ctx> {
        match self {
            Evt::Simple(vt) => canonical_type(vt, ctx),
            Evt::Extended(ty) => ty,
        }
    }

    // === Names ===

    /// Short name: `i17`, `v3i7`, `nxv4f32`, `m1x4xi8`, `mx1xnx8xf16`, or
    /// the catalogue name of an opaque type.
    ///
    /// # Panics
    /// Panics on [`Mvt::Invalid`].
    pub fn evt_string(self) -> String {
        match self {
            Evt::Simple(Mvt::Invalid) => panic!("the invalid value type has no name"),
            Evt::Simple(vt) => vt.name().to_owned(),
            Evt::Extended(ty) => {
                if ty.is_matrix() {
                    let elem = self.matrix_element_type().evt_string();
                    let (rows, cols) = (self.matrix_num_elements(), self.matrix_num_elements2());
                    if ty.is_scalable_matrix() {
                        format!("mx{rows}xnx{cols}x{elem}")
                    } else {
                        format!("m{rows}x{cols}x{elem}")
                    }
                } else if ty.is_vector() {
                    let prefix = if ty.is_scalable_vector() { "nxv" } else { "v" };
                    let count = ty.element_count().known_min_value();
                    format!("{prefix}{count}{}", self.vector_element_type().evt_string())
                } else if ty.is_integer() {
                    format!("i{}", ty.integer_bit_width())
                } else if ty.is_floating_point() {
                    format!("f{}", ty.size_in_bits().fixed_value())
                } else {
                    panic!("`{ty}` is not a valid extended value type")
                }
            }
        }
    }

    // === Classification ===

    pub fn is_integer(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_integer(),
            Evt::Extended(_) => self.is_extended_integer(),
        }
    }

    pub fn is_scalar_integer(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_scalar_integer(),
            Evt::Extended(_) => self.is_extended_scalar_integer(),
        }
    }

    pub fn is_floating_point(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_floating_point(),
            Evt::Extended(_) => self.is_extended_floating_point(),
        }
    }

    pub fn is_vector(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_vector(),
            Evt::Extended(_) => self.is_extended_vector(),
        }
    }

    pub fn is_fixed_length_vector(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_fixed_length_vector(),
            Evt::Extended(_) => self.is_extended_fixed_length_vector(),
        }
    }

    pub fn is_scalable_vector(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_scalable_vector(),
            Evt::Extended(_) => self.is_extended_scalable_vector(),
        }
    }

    pub fn is_matrix(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_matrix(),
            Evt::Extended(_) => self.is_extended_matrix(),
        }
    }

    pub fn is_scalable_matrix(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_scalable_matrix(),
            Evt::Extended(_) => self.is_extended_scalable_matrix(),
        }
    }

    /// Only simple types can be opaque target types.
    pub fn is_scalable_target_ext_vt(self) -> bool {
        matches!(self, Evt::Simple(vt) if vt.is_scalable_target_ext_vt())
    }

    pub fn is_scalable_vt(self) -> bool {
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

    pub fn is_byte_sized(self) -> bool {
        self.size_in_bits().is_known_multiple_of(8)
    }

    /// A fixed size that is a power of two of at least 8 bits.
    pub fn is_round(self) -> bool {
        let size = self.size_in_bits();
        if size.is_scalable() {
            return false;
        }
        let bits = size.fixed_value();
        bits >= 8 && bits.is_power_of_two()
    }

    /// A vector whose (minimum) element count is a power of two.
    pub fn is_pow2_vector_type(self) -> bool {
        self.vector_min_num_elements().is_power_of_two()
    }

    // === Sizes ===

    pub fn size_in_bits(self) -> TypeSize {
        match self {
            Evt::Simple(vt) => vt.size_in_bits(),
            Evt::Extended(_) => self.extended_size_in_bits(),
        }
    }

    pub fn fixed_size_in_bits(self) -> u64 {
        self.size_in_bits().fixed_value()
    }

    pub fn scalar_size_in_bits(self) -> u64 {
        self.scalar_type().size_in_bits().fixed_value()
    }

    pub fn store_size(self) -> TypeSize {
        align_to(self.size_in_bits(), 8).divide_coefficient_by(8)
    }

    pub fn store_size_in_bits(self) -> TypeSize {
        self.store_size() * 8
    }

    // === Structure ===

    pub fn scalar_type(self) -> Self {
        if self.is_vector() {
            self.vector_element_type()
        } else if self.is_matrix() {
            self.matrix_element_type()
        } else {
            self
        }
    }

    pub fn vector_element_type(self) -> Self {
        match self {
            Evt::Simple(vt) => Evt::Simple(vt.vector_element_type()),
            Evt::Extended(_) => self.extended_vector_element_type(),
        }
    }

    pub fn vector_element_count(self) -> ElementCount {
        match self {
            Evt::Simple(vt) => vt.vector_element_count(),
            Evt::Extended(_) => self.extended_vector_element_count(),
        }
    }

    pub fn vector_num_elements(self) -> u32 {
        match self {
            Evt::Simple(vt) => vt.vector_num_elements(),
            Evt::Extended(_) => self.extended_vector_num_elements(),
        }
    }

    pub fn vector_min_num_elements(self) -> u32 {
        self.vector_element_count().known_min_value()
    }

    pub fn matrix_element_type(self) -> Self {
        match self {
            Evt::Simple(vt) => Evt::Simple(vt.matrix_element_type()),
            Evt::Extended(_) => self.extended_matrix_element_type(),
        }
    }

    pub fn matrix_num_elements(self) -> u32 {
        match self {
            Evt::Simple(vt) => vt.matrix_num_elements(),
            Evt::Extended(ty) => ty.matrix_rows().known_min_value(),
        }
    }

    pub fn matrix_num_elements2(self) -> u32 {
        match self {
            Evt::Simple(vt) => vt.matrix_num_elements2(),
            Evt::Extended(ty) => ty.matrix_cols().known_min_value(),
        }
    }

    // === Size comparisons ===

    pub fn bits_eq(self, vt: Self) -> bool {
        self == vt || self.size_in_bits() == vt.size_in_bits()
    }

    /// Known to be wider than `vt`.
    ///
    /// # Panics
    /// Panics when one side is a scalable vector and the other is not.
    pub fn bits_gt(self, vt: Self) -> bool {
        if self == vt {
            return false;
        }
        self.assert_comparable(vt);
        TypeSize::is_known_gt(self.size_in_bits(), vt.size_in_bits())
    }

    pub fn bits_ge(self, vt: Self) -> bool {
        if self == vt {
            return true;
        }
        self.assert_comparable(vt);
        TypeSize::is_known_ge(self.size_in_bits(), vt.size_in_bits())
    }

    pub fn bits_lt(self, vt: Self) -> bool {
        if self == vt {
            return false;
        }
        self.assert_comparable(vt);
        TypeSize::is_known_lt(self.size_in_bits(), vt.size_in_bits())
    }

    pub fn bits_le(self, vt: Self) -> bool {
        if self == vt {
            return true;
        }
        self.assert_comparable(vt);
        TypeSize::is_known_le(self.size_in_bits(), vt.size_in_bits())
    }

    fn assert_comparable(self, vt: Self) {
        assert_eq!(
            self.is_scalable_vector(),
            vt.is_scalable_vector(),
            "comparison between scalable and fixed types: {self} and {vt}"
        );
    }

    // === Transforms ===

    /// The integer type of the same size, element-wise for vectors.
    pub fn change_type_to_integer(self, ctx: &'ctx TypeContext) -> Self {
        if self.is_vector() {
            return self.change_vector_element_type_to_integer(ctx);
        }
        Self::integer_vt(ctx, bit_width(self.fixed_size_in_bits()))
    }

    pub fn change_vector_element_type_to_integer(self, ctx: &'ctx TypeContext) -> Self {
        let elem = Self::integer_vt(ctx, bit_width(self.scalar_size_in_bits()));
        Self::vector_vt(ctx, elem, self.vector_element_count())
    }

    pub fn change_vector_element_type(self, ctx: &'ctx TypeContext, elem: Self) -> Self {
        Self::vector_vt(ctx, elem, self.vector_element_count())
    }

    /// Replace the element type of a vector, or the whole type otherwise.
    pub fn change_element_type(self, ctx: &'ctx TypeContext, elem: Self) -> Self {
        if self.is_vector() {
            self.change_vector_element_type(ctx, elem)
        } else {
            elem
        }
    }

    /// Round a scalar integer up to a power-of-two width of at least 8.
    pub fn round_integer_type(self, ctx: &'ctx TypeContext) -> Self {
        assert!(
            self.is_integer() && !self.is_vector(),
            "`{self}` is not a scalar integer"
        );
        let bits = bit_width(self.fixed_size_in_bits());
        if bits <= 8 {
            return Evt::Simple(Mvt::I8);
        }
        Self::integer_vt(ctx, bits.next_power_of_two())
    }

    /// The smallest catalogued integer at least half as wide, or an
    /// extended integer of half the width rounded up.
    pub fn half_sized_integer_vt(self, ctx: &'ctx TypeContext) -> Self {
        assert!(
            self.is_integer() && !self.is_vector(),
            "`{self}` is not a scalar integer"
        );
        let bits = self.fixed_size_in_bits();
        Mvt::integer_value_types()
            .find(|vt| vt.fixed_size_in_bits() * 2 >= bits)
            .map_or_else(
                || Self::integer_vt(ctx, bit_width(bits.div_ceil(2))),
                Evt::Simple,
            )
    }

    /// Half as many elements of the same type.
    pub fn half_num_vector_elements_vt(self, ctx: &'ctx TypeContext) -> Self {
        let count = self.vector_element_count();
        assert!(count.is_known_even(), "`{self}` has an odd element count");
        Self::vector_vt(
            ctx,
            self.vector_element_type(),
            count.divide_coefficient_by(2),
        )
    }

    /// Widen a vector to the next power-of-two element count.
    pub fn pow2_vector_type(self, ctx: &'ctx TypeContext) -> Self {
        if self.is_pow2_vector_type() {
            return self;
        }
        let count = self.vector_min_num_elements().next_power_of_two();
        Self::vector_vt(
            ctx,
            self.vector_element_type(),
            ElementCount::get(count, self.is_scalable_vector()),
        )
    }

    // === Extended-only queries ===

    pub fn is_extended_integer(self) -> bool {
        self.extended_type().scalar_type().is_integer()
    }

    pub fn is_extended_scalar_integer(self) -> bool {
        self.extended_type().is_integer()
    }

    pub fn is_extended_floating_point(self) -> bool {
        self.extended_type().scalar_type().is_floating_point()
    }

    pub fn is_extended_vector(self) -> bool {
        self.extended_type().is_vector()
    }

    pub fn is_extended_fixed_length_vector(self) -> bool {
        self.extended_type().is_fixed_vector()
    }

    pub fn is_extended_scalable_vector(self) -> bool {
        self.extended_type().is_scalable_vector()
    }

    pub fn is_extended_matrix(self) -> bool {
        self.extended_type().is_matrix()
    }

    pub fn is_extended_scalable_matrix(self) -> bool {
        self.extended_type().is_scalable_matrix()
    }

    extended_bit_vector_predicates! {
        is_extended_16_bit_vector => 16,
        is_extended_32_bit_vector => 32,
        is_extended_64_bit_vector => 64,
        is_extended_128_bit_vector => 128,
        is_extended_256_bit_vector => 256,
        is_extended_512_bit_vector => 512,
        is_extended_1024_bit_vector => 1024,
        is_extended_2048_bit_vector => 2048,
    }

    /// Size of an extended integer, vector or matrix.
    ///
    /// # Panics
    /// Panics on a simple type, or an extended type of any other kind.
    pub fn extended_size_in_bits(self) -> TypeSize {
        let ty = self.extended_type();
        if ty.is_integer() {
            return TypeSize::fixed(u64::from(ty.integer_bit_width()));
        }
        if ty.is_vector() || ty.is_matrix() {
            return ty.size_in_bits();
        }
        panic!("unrecognized extended type `{ty}`")
    }

    pub fn extended_vector_element_type(self) -> Self {
        let ty = self.extended_type();
        assert!(ty.is_vector(), "`{ty}` is not a vector type");
        Self::get_evt(ty.element_type(), false)
    }

    pub fn extended_matrix_element_type(self) -> Self {
        let ty = self.extended_type();
        assert!(ty.is_matrix(), "`{ty}` is not a matrix type");
        Self::get_evt(ty.element_type(), false)
    }

    pub fn extended_vector_element_count(self) -> ElementCount {
        let ty = self.extended_type();
        assert!(ty.is_vector(), "`{ty}` is not a vector type");
        ty.element_count()
    }

    /// Known element count of an extended fixed vector.
    ///
    /// A scalable vector is logged and its minimum returned.
    pub fn extended_vector_num_elements(self) -> u32 {
        let count = self.extended_vector_element_count();
        if count.is_scalable() {
            tracing::warn!(
                vt = %self,
                "fixed element count requested on a scalable vector; result is only the minimum"
            );
        }
        count.known_min_value()
    }
}

fn bit_width(bits: u64) -> u32 {
    u32::try_from(bits).unwrap_or_else(|_| panic!("{bits} bits is wider than any integer type"))
}

/// Canonical structural type of a catalogue entry.
fn canonical_type(vt: Mvt, ctx: &TypeContext) -> TypeRef<'_> {
    match vt.shape() {
        Shape::Integer(bits) => ctx.int(bits),
        Shape::Float(kind) => ctx.float(kind),
        Shape::Vector {
            elem,
            count,
            scalable,
        } => ctx.vector(canonical_type(elem, ctx), ElementCount::get(count, scalable)),
        Shape::Matrix {
            elem,
            rows,
            cols,
            scalable,
        } => ctx.matrix(canonical_type(elem, ctx), rows, cols, scalable),
        Shape::Metadata => ctx.metadata(),
        Shape::Pointer => ctx.pointer(0),
        Shape::Invalid | Shape::Opaque { .. } => match vt {
            Mvt::IsVoid => ctx.void(),
            Mvt::X86Mmx => ctx.x86_mmx(),
            Mvt::X86Amx => ctx.x86_amx(),
            Mvt::I64x8 => ctx.int(512),
            Mvt::Aarch64Svcount => ctx.target_ext("aarch64.svcount"),
            Mvt::Funcref => ctx.wasm_funcref(),
            Mvt::Externref => ctx.wasm_externref(),
            _ => panic!("value type `{vt}` has no structural type"),
        },
    }
}

impl fmt::Display for Evt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evt::Simple(vt) => fmt::Display::fmt(vt, f),
            Evt::Extended(_) => f.write_str(&self.evt_string()),
        }
    }
}

#[cfg(test)]
mod tests;
