//! Classification of structural types into the closed catalogue.

use thiserror::Error;
use vt_ir::{TypeKind, TypeRef};

use crate::Mvt;

/// A structural type with no catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("no simple value type for integer width {bits}")]
    UnsupportedInteger { bits: u32 },

    #[error("no simple value type for vector `{ty}`")]
    UnsupportedVector { ty: String },

    #[error("no simple value type for matrix `{ty}`")]
    UnsupportedMatrix { ty: String },

    #[error("unknown target extension type `{name}`")]
    UnknownTargetExt { name: String },

    #[error("unknown type `{ty}`")]
    UnknownType { ty: String },
}

impl Mvt {
    /// Classify `ty` into the catalogue.
    ///
    /// Pointers in every address space become [`Mvt::IPtr`]. Vector and
    /// matrix elements must themselves classify.
    pub fn try_get_vt(ty: TypeRef<'_>) -> Result<Mvt, ClassifyError> {
        match ty.kind() {
            TypeKind::Void => Ok(Mvt::IsVoid),
            TypeKind::Metadata => Ok(Mvt::Metadata),
            TypeKind::X86Mmx => Ok(Mvt::X86Mmx),
            TypeKind::X86Amx => Ok(Mvt::X86Amx),
            TypeKind::WasmExternref => Ok(Mvt::Externref),
            TypeKind::WasmFuncref => Ok(Mvt::Funcref),
            TypeKind::Pointer { .. } => Ok(Mvt::IPtr),
            TypeKind::Float(kind) => Ok(Mvt::float_vt(kind)),
            TypeKind::Integer { bits } => match Mvt::integer_vt(bits) {
                Mvt::Invalid => Err(ClassifyError::UnsupportedInteger { bits }),
                vt => Ok(vt),
            },
            TypeKind::TargetExt { name } => {
                if &*name == "aarch64.svcount" {
                    Ok(Mvt::Aarch64Svcount)
                } else if name.starts_with("spirv.") {
                    Ok(Mvt::Spirvbuiltin)
                } else {
                    Err(ClassifyError::UnknownTargetExt {
                        name: name.into_string(),
                    })
                }
            }
            TypeKind::FixedVector { .. } | TypeKind::ScalableVector { .. } => {
                let elem = Mvt::try_get_vt(ty.element_type())?;
                match Mvt::vector_vt(elem, ty.element_count()) {
                    Mvt::Invalid => Err(ClassifyError::UnsupportedVector { ty: ty.to_string() }),
                    vt => Ok(vt),
                }
            }
            TypeKind::Matrix {
                rows,
                cols,
                scalable,
                ..
            } => {
                let elem = Mvt::try_get_vt(ty.element_type())?;
                match Mvt::matrix_vt(elem, rows, cols, scalable) {
                    Mvt::Invalid => Err(ClassifyError::UnsupportedMatrix { ty: ty.to_string() }),
                    vt => Ok(vt),
                }
            }
            TypeKind::Label
            | TypeKind::Token
            | TypeKind::Array { .. }
            | TypeKind::Struct { .. } => Err(ClassifyError::UnknownType { ty: ty.to_string() }),
        }
    }

    /// Classify `ty`, mapping unrecognised types to [`Mvt::Other`] when
    /// `handle_unknown` is set.
    ///
    /// # Panics
    /// Panics on an unrecognised type when `handle_unknown` is not set.
    pub fn get_vt(ty: TypeRef<'_>, handle_unknown: bool) -> Mvt {
        match Mvt::try_get_vt(ty) {
            Ok(vt) => vt,
            Err(_) if handle_unknown => Mvt::Other,
            Err(err) => panic!("{err}"),
        }
    }
}
