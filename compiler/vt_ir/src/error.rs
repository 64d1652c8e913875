//! Errors raised while constructing structural types.

use thiserror::Error;

use crate::kind::MAX_INT_BITS;

/// A malformed structural type request.
///
/// Returned by the `try_*` factories on [`TypeContext`](crate::TypeContext).
/// The plain factories panic with the same message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("integer width {bits} is outside 1..={MAX_INT_BITS}")]
    InvalidIntegerWidth { bits: u32 },

    #[error("vector types must have at least one element")]
    EmptyVector,

    #[error("matrix types must have at least one row and one column")]
    EmptyMatrix,

    #[error("a {rows} x {cols} matrix has more than u32::MAX elements")]
    MatrixTooLarge { rows: u32, cols: u32 },

    #[error("`{element}` is not a valid {container} element type")]
    InvalidElementType {
        element: String,
        container: &'static str,
    },

    #[error("target extension types need a non-empty name")]
    EmptyTargetExtName,

    #[error("type context exceeded u32::MAX types")]
    Overflow,
}
