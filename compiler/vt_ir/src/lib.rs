//! Minimal structural type graph.
//!
//! The value-type layer classifies types it does not own: integers of any
//! width, vectors, matrices, aggregates and target extension types. This
//! crate is that type graph, reduced to what classification and layout need.
//!
//! - [`TypeContext`]: interns [`TypeKind`]s and hands out [`TypeRef`]s
//! - [`TypeRef`]: `Copy` handle with kind and size queries
//! - [`DataLayout`]: pointer widths and size/alignment rules

mod context;
mod error;
mod kind;
mod layout;
mod type_id;
mod type_ref;

pub use context::TypeContext;
pub use error::TypeError;
pub use kind::{FloatKind, TypeKind, MAX_INT_BITS};
pub use layout::{DataLayout, StructLayout};
pub use type_id::TypeId;
pub use type_ref::TypeRef;
