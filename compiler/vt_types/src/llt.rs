//! Low-level types.
//!
//! An [`Llt`] describes only the shape of a value in registers: how many
//! bits, whether it is a pointer (and in which address space), and how many
//! lanes. Integer and floating-point values of the same width share an
//! `Llt`. A one-lane fixed vector is the same as its element.

use std::fmt;

use vt_ir::{TypeKind, TypeRef};
use vt_size::{align_to, ElementCount, Scale, TypeSize};

use crate::Mvt;

/// Which of the mutually exclusive forms an [`Llt`] has.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LltKind {
    Invalid,
    Scalar,
    Pointer,
    Vector,
    Matrix,
}

/// Lane type of a vector or matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Element {
    Scalar { size_in_bits: u64 },
    Pointer { address_space: u32, size_in_bits: u64 },
}

impl Element {
    fn from_llt(ty: Llt) -> Self {
        match ty.repr {
            Repr::Scalar { size_in_bits } => Element::Scalar { size_in_bits },
            Repr::Pointer {
                address_space,
                size_in_bits,
            } => Element::Pointer {
                address_space,
                size_in_bits,
            },
            _ => panic!("`{ty}` cannot be a vector or matrix element"),
        }
    }

    const fn size_in_bits(self) -> u64 {
        match self {
            Element::Scalar { size_in_bits } | Element::Pointer { size_in_bits, .. } => {
                size_in_bits
            }
        }
    }

    const fn to_llt(self) -> Llt {
        match self {
            Element::Scalar { size_in_bits } => Llt::scalar(size_in_bits),
            Element::Pointer {
                address_space,
                size_in_bits,
            } => Llt::pointer(address_space, size_in_bits),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Repr {
    Invalid,
    Scalar {
        size_in_bits: u64,
    },
    Pointer {
        address_space: u32,
        size_in_bits: u64,
    },
    /// `count` is fixed or `vscale`-scaled and never a single fixed lane.
    Vector {
        count: ElementCount,
        element: Element,
    },
    /// `rows x cols`; when `scalable`, rows scale by `mscale` and cols by
    /// `nscale`.
    Matrix {
        rows: u32,
        cols: u32,
        scalable: bool,
        element: Element,
    },
}

/// A low-level (register) type.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Llt {
    repr: Repr,
}

impl Default for Llt {
    fn default() -> Self {
        Llt::invalid()
    }
}

impl Llt {
    // === Constructors ===

    pub const fn invalid() -> Self {
        Llt {
            repr: Repr::Invalid,
        }
    }

    /// A scalar of `size_in_bits` bits with no pointer semantics.
    pub const fn scalar(size_in_bits: u64) -> Self {
        Llt {
            repr: Repr::Scalar { size_in_bits },
        }
    }

    pub const fn pointer(address_space: u32, size_in_bits: u64) -> Self {
        Llt {
            repr: Repr::Pointer {
                address_space,
                size_in_bits,
            },
        }
    }

    /// A vector of `count` lanes of `element`.
    ///
    /// # Panics
    /// Panics if `count` is zero or a single fixed lane, if it is scaled by
    /// anything but `vscale`, or if `element` is not a scalar or pointer.
    pub fn vector(count: ElementCount, element: Llt) -> Self {
        assert!(
            count.is_nonzero() && !count.is_scalar(),
            "invalid number of vector elements: {count}"
        );
        assert!(
            !count.is_scalable() || count.scale() == Scale::V,
            "vector element counts are fixed or vscale-scaled, got {count}"
        );
        Llt {
            repr: Repr::Vector {
                count,
                element: Element::from_llt(element),
            },
        }
    }

    pub fn vector_of_scalar(count: ElementCount, scalar_size_in_bits: u64) -> Self {
        Llt::vector(count, Llt::scalar(scalar_size_in_bits))
    }

    pub fn fixed_vector(count: u32, element: Llt) -> Self {
        Llt::vector(ElementCount::fixed(count), element)
    }

    pub fn scalable_vector(min_count: u32, element: Llt) -> Self {
        Llt::vector(ElementCount::scalable(min_count), element)
    }

    /// `element` itself for a single fixed lane, a vector otherwise.
    pub fn scalar_or_vector(count: ElementCount, element: Llt) -> Self {
        if count.is_scalar() {
            // Validate like a lane would be.
            return Element::from_llt(element).to_llt();
        }
        Llt::vector(count, element)
    }

    /// A `rows x cols` matrix of `element`.
    ///
    /// Scalable matrices take `mscale`-scaled rows and `nscale`-scaled
    /// columns; fixed ones take two fixed counts.
    pub fn matrix(rows: ElementCount, cols: ElementCount, element: Llt) -> Self {
        assert!(
            rows.is_nonzero() && cols.is_nonzero(),
            "matrix dimensions must be non-zero, got {rows} by {cols}"
        );
        let scalable = rows.is_scalable();
        let expected = (scale_if(scalable, Scale::M), scale_if(scalable, Scale::N));
        assert!(
            (rows.scale(), cols.scale()) == expected,
            "matrix rows scale by mscale and columns by nscale, got {rows} by {cols}"
        );
        assert!(
            matches!(Element::from_llt(element), Element::Scalar { .. }),
            "matrix elements must be scalars, got `{element}`"
        );
        Llt {
            repr: Repr::Matrix {
                rows: rows.known_min_value(),
                cols: cols.known_min_value(),
                scalable,
                element: Element::from_llt(element),
            },
        }
    }

    // === Conversions ===

    /// The register shape of a catalogued value type.
    ///
    /// Placeholders ([`Mvt::Invalid`], [`Mvt::Other`], [`Mvt::Glue`],
    /// [`Mvt::IsVoid`]), types with no size of their own ([`Mvt::Metadata`],
    /// [`Mvt::IPtr`]) and scalable opaque target types give an invalid
    /// `Llt`.
    pub fn from_mvt(vt: Mvt) -> Self {
        if vt.is_matrix() {
            let element = Llt::scalar(vt.matrix_element_type().fixed_size_in_bits());
            let (rows, cols) = (vt.matrix_num_elements(), vt.matrix_num_elements2());
            if !vt.is_scalable_matrix() && rows == 1 && cols == 1 {
                return element;
            }
            return Llt::matrix(
                matrix_dim(rows, vt.is_scalable_matrix(), Scale::M),
                matrix_dim(cols, vt.is_scalable_matrix(), Scale::N),
                element,
            );
        }
        if vt.is_vector() {
            let element = Llt::scalar(vt.vector_element_type().fixed_size_in_bits());
            return Llt::scalar_or_vector(vt.vector_element_count(), element);
        }
        match vt {
            Mvt::Invalid | Mvt::Other | Mvt::Glue | Mvt::IsVoid | Mvt::Metadata | Mvt::IPtr => {
                Llt::invalid()
            }
            _ if vt.is_scalable_target_ext_vt() => Llt::invalid(),
            _ => Llt::scalar(vt.fixed_size_in_bits()),
        }
    }

    /// The register shape of a structural type.
    ///
    /// Pointers keep their address space and take their width from the data
    /// layout. Other sized types become scalars of their layout size.
    /// Unsized types are invalid.
    pub fn from_type(ty: TypeRef<'_>) -> Self {
        match ty.kind() {
            TypeKind::FixedVector { .. } | TypeKind::ScalableVector { .. } => {
                Llt::scalar_or_vector(ty.element_count(), Llt::from_type(ty.element_type()))
            }
            TypeKind::Matrix {
                rows,
                cols,
                scalable,
                ..
            } => {
                let element = Llt::from_type(ty.element_type());
                if !scalable && rows == 1 && cols == 1 {
                    return element;
                }
                Llt::matrix(ty.matrix_rows(), ty.matrix_cols(), element)
            }
            TypeKind::Pointer { address_space } => Llt::pointer(
                address_space,
                u64::from(ty.context().layout().pointer_size_in_bits(address_space)),
            ),
            _ if ty.is_sized() => Llt::scalar(ty.size_in_bits().fixed_value()),
            _ => Llt::invalid(),
        }
    }

    /// The integer value type (or integer vector or matrix type) of the same
    /// shape, [`Mvt::Invalid`] when not catalogued.
    pub fn to_mvt(self) -> Mvt {
        let int = |bits: u64| u32::try_from(bits).map_or(Mvt::Invalid, Mvt::integer_vt);
        match self.repr {
            Repr::Invalid => Mvt::Invalid,
            Repr::Scalar { size_in_bits } | Repr::Pointer { size_in_bits, .. } => {
                int(size_in_bits)
            }
            Repr::Vector { count, element } => Mvt::vector_vt(int(element.size_in_bits()), count),
            Repr::Matrix {
                rows,
                cols,
                scalable,
                element,
            } => Mvt::matrix_vt(int(element.size_in_bits()), rows, cols, scalable),
        }
    }

    // === Classification ===

    pub const fn kind(self) -> LltKind {
        match self.repr {
            Repr::Invalid => LltKind::Invalid,
            Repr::Scalar { .. } => LltKind::Scalar,
            Repr::Pointer { .. } => LltKind::Pointer,
            Repr::Vector { .. } => LltKind::Vector,
            Repr::Matrix { .. } => LltKind::Matrix,
        }
    }

    pub const fn is_valid(self) -> bool {
        !matches!(self.repr, Repr::Invalid)
    }

    pub const fn is_scalar(self) -> bool {
        matches!(self.repr, Repr::Scalar { .. })
    }

    pub const fn is_pointer(self) -> bool {
        matches!(self.repr, Repr::Pointer { .. })
    }

    pub const fn is_vector(self) -> bool {
        matches!(self.repr, Repr::Vector { .. })
    }

    pub const fn is_matrix(self) -> bool {
        matches!(self.repr, Repr::Matrix { .. })
    }

    pub const fn is_pointer_vector(self) -> bool {
        matches!(
            self.repr,
            Repr::Vector {
                element: Element::Pointer { .. },
                ..
            }
        )
    }

    pub fn is_scalable(self) -> bool {
        match self.repr {
            Repr::Vector { count, .. } => count.is_scalable(),
            Repr::Matrix { scalable, .. } => scalable,
            _ => false,
        }
    }

    pub fn is_fixed_vector(self) -> bool {
        self.is_vector() && !self.is_scalable()
    }

    pub fn is_scalable_vector(self) -> bool {
        self.is_vector() && self.is_scalable()
    }

    // === Queries ===

    /// Lanes of a vector, or `rows x cols` of a matrix (`mnscale`-scaled
    /// when scalable).
    pub fn element_count(self) -> ElementCount {
        match self.repr {
            Repr::Vector { count, .. } => count,
            Repr::Matrix {
                rows,
                cols,
                scalable,
                ..
            } => ElementCount::with_scale(rows * cols, scale_if(scalable, Scale::MN)),
            _ => panic!("`{self}` has no element count"),
        }
    }

    /// Lane count of a fixed vector. Scalable vectors go to the diagnostic
    /// sink.
    pub fn num_elements(self) -> u32 {
        self.element_count().fixed_value()
    }

    pub fn matrix_rows(self) -> ElementCount {
        match self.repr {
            Repr::Matrix { rows, scalable, .. } => {
                ElementCount::with_scale(rows, scale_if(scalable, Scale::M))
            }
            _ => panic!("`{self}` is not a matrix"),
        }
    }

    pub fn matrix_cols(self) -> ElementCount {
        match self.repr {
            Repr::Matrix { cols, scalable, .. } => {
                ElementCount::with_scale(cols, scale_if(scalable, Scale::N))
            }
            _ => panic!("`{self}` is not a matrix"),
        }
    }

    /// Total size in bits.
    ///
    /// # Panics
    /// Panics on an invalid `Llt`.
    pub fn size_in_bits(self) -> TypeSize {
        match self.repr {
            Repr::Invalid => panic!("invalid low-level type has no size"),
            Repr::Scalar { size_in_bits } | Repr::Pointer { size_in_bits, .. } => {
                TypeSize::fixed(size_in_bits)
            }
            Repr::Vector { count, element } => TypeSize::with_scale(
                u64::from(count.known_min_value()) * element.size_in_bits(),
                count.scale(),
            ),
            Repr::Matrix { element, .. } => {
                let count = self.element_count();
                TypeSize::with_scale(
                    u64::from(count.known_min_value()) * element.size_in_bits(),
                    count.scale(),
                )
            }
        }
    }

    /// Total size in bytes, rounded up.
    pub fn size_in_bytes(self) -> TypeSize {
        align_to(self.size_in_bits(), 8).divide_coefficient_by(8)
    }

    pub fn scalar_size_in_bits(self) -> u64 {
        match self.repr {
            Repr::Invalid => panic!("invalid low-level type has no size"),
            Repr::Scalar { size_in_bits } | Repr::Pointer { size_in_bits, .. } => size_in_bits,
            Repr::Vector { element, .. } | Repr::Matrix { element, .. } => element.size_in_bits(),
        }
    }

    pub fn is_byte_sized(self) -> bool {
        self.size_in_bits().is_known_multiple_of(8)
    }

    /// Lane type of a vector or matrix, otherwise `self`.
    pub fn scalar_type(self) -> Llt {
        match self.repr {
            Repr::Vector { element, .. } | Repr::Matrix { element, .. } => element.to_llt(),
            _ => self,
        }
    }

    /// Lane type of a vector or matrix.
    pub fn element_type(self) -> Llt {
        assert!(
            self.is_vector() || self.is_matrix(),
            "`{self}` has no element type"
        );
        self.scalar_type()
    }

    /// Address space of a pointer or pointer vector.
    pub fn address_space(self) -> u32 {
        match self.scalar_type().repr {
            Repr::Pointer { address_space, .. } => address_space,
            _ => panic!("`{self}` is not a pointer or pointer vector"),
        }
    }

    // === Transforms ===

    /// Same lane count with `element` lanes; `element` itself for scalars
    /// and pointers.
    pub fn change_element_type(self, element: Llt) -> Llt {
        match self.repr {
            Repr::Vector { count, .. } => Llt::vector(count, element),
            Repr::Matrix { .. } => Llt::matrix(self.matrix_rows(), self.matrix_cols(), element),
            _ => element,
        }
    }

    /// Same lane count with scalar lanes of `size_in_bits` bits.
    ///
    /// # Panics
    /// Panics for pointers and pointer vectors.
    pub fn change_element_size(self, size_in_bits: u64) -> Llt {
        assert!(
            !self.scalar_type().is_pointer(),
            "cannot change the element size of `{self}`"
        );
        self.change_element_type(Llt::scalar(size_in_bits))
    }

    /// `count` lanes of this type's scalar type.
    pub fn change_element_count(self, count: ElementCount) -> Llt {
        Llt::scalar_or_vector(count, self.scalar_type())
    }

    /// Split into `factor` pieces: fewer lanes for vectors, fewer bits for
    /// scalars.
    pub fn divide(self, factor: u32) -> Llt {
        assert!(factor != 1, "dividing by one is a no-op");
        if self.is_vector() {
            let count = self.element_count();
            assert!(
                count.is_known_multiple_of(factor),
                "{count} elements do not divide by {factor}"
            );
            return Llt::scalar_or_vector(count.divide_coefficient_by(factor), self.scalar_type());
        }
        let bits = self.scalar_size_in_bits();
        assert!(
            bits != 0 && bits % u64::from(factor) == 0,
            "cannot divide `{self}` by {factor}"
        );
        Llt::scalar(bits / u64::from(factor))
    }

    /// `factor` times as many lanes; a scalar becomes a `factor`-lane
    /// vector.
    pub fn multiply_elements(self, factor: u32) -> Llt {
        if self.is_vector() {
            return Llt::scalar_or_vector(
                self.element_count().multiply_coefficient_by(factor),
                self.scalar_type(),
            );
        }
        Llt::scalar_or_vector(ElementCount::fixed(factor), self)
    }
}

#[inline]
fn scale_if(scalable: bool, scale: Scale) -> Scale {
    if scalable {
        scale
    } else {
        Scale::FIXED
    }
}

#[inline]
fn matrix_dim(n: u32, scalable: bool, scale: Scale) -> ElementCount {
    ElementCount::with_scale(n, scale_if(scalable, scale))
}

impl fmt::Display for Llt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Vector { element, .. } | Repr::Matrix { element, .. } => {
                write!(f, "<{} x {}>", self.element_count(), element.to_llt())
            }
            Repr::Pointer { address_space, .. } => write!(f, "p{address_space}"),
            Repr::Scalar { size_in_bits } => write!(f, "s{size_in_bits}"),
            Repr::Invalid => f.write_str("LLT_invalid"),
        }
    }
}

impl fmt::Debug for Llt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Llt({self})")
    }
}
