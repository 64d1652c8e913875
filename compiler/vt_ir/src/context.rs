//! Interning type context.
//!
//! Every structural type lives in a [`TypeContext`] and is named by a
//! [`TypeId`]. Interning goes through `&self`, so a shared context can be
//! handed to many readers and still grow. Primitive types are pre-interned at
//! the fixed ids declared on [`TypeId`].

use std::ptr;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use vt_size::ElementCount;

use crate::kind::MAX_INT_BITS;
use crate::{DataLayout, FloatKind, TypeError, TypeId, TypeKind, TypeRef};

/// Interned storage, guarded as one unit.
struct Storage {
    /// Kind to id, for deduplication.
    map: FxHashMap<TypeKind, TypeId>,
    /// Kinds indexed by `TypeId`.
    kinds: Vec<TypeKind>,
}

impl Storage {
    fn with_primitives() -> Self {
        let primitives = TypeKind::primitives();
        let mut map = FxHashMap::default();
        let mut kinds = Vec::with_capacity(128);
        for (idx, kind) in primitives.into_iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "primitive count is fixed and small"
            )]
            let id = TypeId::from_raw(idx as u32);
            map.insert(kind.clone(), id);
            kinds.push(kind);
        }
        Self { map, kinds }
    }
}

/// Owner of all structural types and the layout used to size them.
pub struct TypeContext {
    storage: RwLock<Storage>,
    layout: DataLayout,
}

impl TypeContext {
    /// Create a context with the default [`DataLayout`].
    pub fn new() -> Self {
        Self::with_layout(DataLayout::default())
    }

    pub fn with_layout(layout: DataLayout) -> Self {
        Self {
            storage: RwLock::new(Storage::with_primitives()),
            layout,
        }
    }

    #[inline]
    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Number of interned types, primitives included.
    pub fn len(&self) -> usize {
        self.storage.read().kinds.len()
    }

    /// Always `false`: primitives are interned on construction.
    pub fn is_empty(&self) -> bool {
        self.storage.read().kinds.is_empty()
    }

    /// Handle for an id previously returned by this context.
    ///
    /// # Panics
    /// Panics if `id` was not interned here.
    pub fn get(&self, id: TypeId) -> TypeRef<'_> {
        assert!(
            id.index() < self.len(),
            "{id:?} does not belong to this type context"
        );
        TypeRef::new(self, id)
    }

    /// The kind behind `id`.
    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.storage.read().kinds[id.index()].clone()
    }

    /// Intern `kind`, returning the existing id if it is already known.
    ///
    /// The kind is not validated; use the typed factories for that.
    pub fn try_intern(&self, kind: TypeKind) -> Result<TypeId, TypeError> {
        {
            let guard = self.storage.read();
            if let Some(&id) = guard.map.get(&kind) {
                return Ok(id);
            }
        }

        let mut guard = self.storage.write();

        // Double-check after acquiring the write lock.
        if let Some(&id) = guard.map.get(&kind) {
            return Ok(id);
        }

        let raw = u32::try_from(guard.kinds.len()).map_err(|_| TypeError::Overflow)?;
        let id = TypeId::from_raw(raw);
        tracing::debug!(id = raw, kind = ?kind, "interned structural type");
        guard.kinds.push(kind.clone());
        guard.map.insert(kind, id);
        Ok(id)
    }

    fn intern(&self, kind: TypeKind) -> TypeRef<'_> {
        unwrap_type(self.try_intern(kind).map(|id| TypeRef::new(self, id)))
    }

    fn check_owned(&self, ty: TypeRef<'_>) {
        assert!(
            ptr::eq(ty.context(), self),
            "type `{ty}` belongs to a different type context"
        );
    }

    // === Primitives ===

    pub fn void(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::VOID)
    }

    pub fn label(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::LABEL)
    }

    pub fn metadata(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::METADATA)
    }

    pub fn token(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::TOKEN)
    }

    pub fn x86_mmx(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::X86_MMX)
    }

    pub fn x86_amx(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::X86_AMX)
    }

    pub fn wasm_externref(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::WASM_EXTERNREF)
    }

    pub fn wasm_funcref(&self) -> TypeRef<'_> {
        TypeRef::new(self, TypeId::WASM_FUNCREF)
    }

    pub fn float(&self, kind: FloatKind) -> TypeRef<'_> {
        TypeRef::new(self, kind.type_id())
    }

    // === Integers and pointers ===

    /// `iN`. Fails for widths outside `1..=MAX_INT_BITS`.
    pub fn try_int(&self, bits: u32) -> Result<TypeRef<'_>, TypeError> {
        if bits == 0 || bits > MAX_INT_BITS {
            return Err(TypeError::InvalidIntegerWidth { bits });
        }
        let id = self.try_intern(TypeKind::Integer { bits })?;
        Ok(TypeRef::new(self, id))
    }

    pub fn int(&self, bits: u32) -> TypeRef<'_> {
        unwrap_type(self.try_int(bits))
    }

    /// Opaque pointer in `address_space`.
    pub fn pointer(&self, address_space: u32) -> TypeRef<'_> {
        if address_space == 0 {
            return TypeRef::new(self, TypeId::PTR);
        }
        self.intern(TypeKind::Pointer { address_space })
    }

    // === Vectors and matrices ===

    /// `<count x element>`, or `<vscale x count x element>` when `count` is
    /// scalable.
    ///
    /// # Panics
    /// Panics if `count` is scaled by anything other than `vscale`.
    pub fn try_vector<'a>(
        &'a self,
        element: TypeRef<'a>,
        count: ElementCount,
    ) -> Result<TypeRef<'a>, TypeError> {
        assert!(
            !count.is_scalable() || count.scale() == vt_size::Scale::V,
            "vector element counts are fixed or vscale-scaled, got {count}"
        );
        self.check_owned(element);
        if count.is_zero() {
            return Err(TypeError::EmptyVector);
        }
        if !element.kind().is_valid_vector_element() {
            return Err(TypeError::InvalidElementType {
                element: element.to_string(),
                container: "vector",
            });
        }
        let element = element.id();
        let kind = if count.is_scalable() {
            TypeKind::ScalableVector {
                element,
                count: count.known_min_value(),
            }
        } else {
            TypeKind::FixedVector {
                element,
                count: count.known_min_value(),
            }
        };
        let id = self.try_intern(kind)?;
        Ok(TypeRef::new(self, id))
    }

    pub fn vector<'a>(&'a self, element: TypeRef<'a>, count: ElementCount) -> TypeRef<'a> {
        unwrap_type(self.try_vector(element, count))
    }

    pub fn fixed_vector<'a>(&'a self, element: TypeRef<'a>, count: u32) -> TypeRef<'a> {
        self.vector(element, ElementCount::fixed(count))
    }

    pub fn scalable_vector<'a>(&'a self, element: TypeRef<'a>, count: u32) -> TypeRef<'a> {
        self.vector(element, ElementCount::scalable(count))
    }

    /// `rows x cols` matrix of integer or floating-point elements.
    pub fn try_matrix<'a>(
        &'a self,
        element: TypeRef<'a>,
        rows: u32,
        cols: u32,
        scalable: bool,
    ) -> Result<TypeRef<'a>, TypeError> {
        self.check_owned(element);
        if rows == 0 || cols == 0 {
            return Err(TypeError::EmptyMatrix);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(TypeError::MatrixTooLarge { rows, cols });
        }
        if !element.kind().is_valid_matrix_element() {
            return Err(TypeError::InvalidElementType {
                element: element.to_string(),
                container: "matrix",
            });
        }
        let id = self.try_intern(TypeKind::Matrix {
            element: element.id(),
            rows,
            cols,
            scalable,
        })?;
        Ok(TypeRef::new(self, id))
    }

    pub fn matrix<'a>(
        &'a self,
        element: TypeRef<'a>,
        rows: u32,
        cols: u32,
        scalable: bool,
    ) -> TypeRef<'a> {
        unwrap_type(self.try_matrix(element, rows, cols, scalable))
    }

    // === Aggregates ===

    /// `[len x element]`.
    pub fn try_array<'a>(
        &'a self,
        element: TypeRef<'a>,
        len: u64,
    ) -> Result<TypeRef<'a>, TypeError> {
        self.check_owned(element);
        if !element.kind().is_valid_aggregate_element() {
            return Err(TypeError::InvalidElementType {
                element: element.to_string(),
                container: "array",
            });
        }
        let id = self.try_intern(TypeKind::Array {
            element: element.id(),
            len,
        })?;
        Ok(TypeRef::new(self, id))
    }

    pub fn array<'a>(&'a self, element: TypeRef<'a>, len: u64) -> TypeRef<'a> {
        unwrap_type(self.try_array(element, len))
    }

    /// Literal struct with the given fields.
    pub fn try_struct_of<'a>(
        &'a self,
        fields: &[TypeRef<'a>],
        packed: bool,
    ) -> Result<TypeRef<'a>, TypeError> {
        let mut ids = SmallVec::with_capacity(fields.len());
        for &field in fields {
            self.check_owned(field);
            if !field.kind().is_valid_aggregate_element() {
                return Err(TypeError::InvalidElementType {
                    element: field.to_string(),
                    container: "struct",
                });
            }
            ids.push(field.id());
        }
        let id = self.try_intern(TypeKind::Struct {
            fields: ids,
            packed,
        })?;
        Ok(TypeRef::new(self, id))
    }

    pub fn struct_of<'a>(&'a self, fields: &[TypeRef<'a>], packed: bool) -> TypeRef<'a> {
        unwrap_type(self.try_struct_of(fields, packed))
    }

    /// `target("name")`.
    pub fn try_target_ext(&self, name: &str) -> Result<TypeRef<'_>, TypeError> {
        if name.is_empty() {
            return Err(TypeError::EmptyTargetExtName);
        }
        let id = self.try_intern(TypeKind::TargetExt { name: name.into() })?;
        Ok(TypeRef::new(self, id))
    }

    pub fn target_ext(&self, name: &str) -> TypeRef<'_> {
        unwrap_type(self.try_target_ext(name))
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeContext")
            .field("types", &self.len())
            .field("layout", &self.layout)
            .finish()
    }
}

#[track_caller]
fn unwrap_type<T>(result: Result<T, TypeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests;
