//! Fixed-or-scalable sizes for code generation.
//!
//! Sizes and element counts of values on vector-length-agnostic targets are
//! only partially known at compile time: `<vscale x 4 x i32>` holds at least
//! four elements, exactly how many is decided by the hardware at run time.
//! This crate is the algebra over such quantities:
//!
//! - [`Scale`]: which runtime factor a quantity is tied to
//! - [`ScalableQuantity`]: magnitude plus scale, with conservative ordering
//! - [`ElementCount`], [`TypeSize`], [`ScalableOffset`]: its leaves
//! - [`StackOffset`]: a byte offset with one accumulator per scale class
//! - [`report_invalid_size_request`]: the diagnostic sink for code that asks
//!   a scalable quantity for a fixed value
//!
//! Contract violations (mixing scale classes, zero alignment) panic. They
//! are compiler bugs, not input errors.

mod diagnostic;
mod element_count;
mod quantity;
mod scalable_offset;
mod scale;
mod stack_offset;
mod type_size;

pub use diagnostic::{
    invalid_size_policy, report_invalid_size_request, set_invalid_size_policy,
    InvalidSizePolicy, InvalidSizeRequest, PolicyParseError,
};
pub use element_count::{ElementCount, Elements};
pub use quantity::{Leaf, ScalableQuantity, Scalar};
pub use scalable_offset::{OffsetBytes, ScalableOffset};
pub use scale::Scale;
pub use stack_offset::StackOffset;
pub use type_size::{align_to, Bits, TypeSize};

// Value types are passed by copy on hot paths; keep them small.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ElementCount, StackOffset, TypeSize};

    const _: () = assert!(std::mem::size_of::<ElementCount>() == 8);
    const _: () = assert!(std::mem::size_of::<TypeSize>() == 16);
    const _: () = assert!(std::mem::size_of::<StackOffset>() == 40);
}
