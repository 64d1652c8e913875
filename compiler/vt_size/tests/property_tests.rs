//! Property tests for the scalable quantity algebra.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::disallowed_types,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use vt_size::{align_to, ElementCount, Scale, StackOffset, TypeSize};

fn scale_strategy() -> impl Strategy<Value = Scale> {
    prop_oneof![
        Just(Scale::FIXED),
        Just(Scale::V),
        Just(Scale::M),
        Just(Scale::N),
        Just(Scale::MN),
    ]
}

fn scalable_scale_strategy() -> impl Strategy<Value = Scale> {
    prop_oneof![Just(Scale::V), Just(Scale::M), Just(Scale::N), Just(Scale::MN)]
}

fn stack_offset_strategy() -> impl Strategy<Value = StackOffset> {
    let component = -1_000_000i64..1_000_000;
    (
        component.clone(),
        component.clone(),
        component.clone(),
        component.clone(),
        component,
    )
        .prop_map(|(f, v, m, n, mn)| StackOffset::get(f, v, m, n, mn))
}

proptest! {
    #[test]
    fn addition_is_commutative(a in 0u64..1 << 40, b in 0u64..1 << 40, scale in scale_strategy()) {
        let a = TypeSize::with_scale(a, scale);
        let b = TypeSize::with_scale(b, scale);
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn subtraction_undoes_addition(a in 1u64..1 << 40, b in 0u64..1 << 40, scale in scale_strategy()) {
        let a = TypeSize::with_scale(a, scale);
        let b = TypeSize::with_scale(b, scale);
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn scalable_lhs_is_incomparable_with_other_class(
        n in 0u32..1 << 20,
        lhs_scale in scalable_scale_strategy(),
        rhs_scale in scale_strategy(),
    ) {
        prop_assume!(lhs_scale != rhs_scale);
        let a = ElementCount::with_scale(n, lhs_scale);
        let b = ElementCount::with_scale(n, rhs_scale);
        prop_assert!(!ElementCount::is_known_lt(a, b));
        prop_assert!(!ElementCount::is_known_gt(a, b));
        prop_assert!(!ElementCount::is_known_le(a, b));
        prop_assert!(!ElementCount::is_known_ge(a, b));
    }

    #[test]
    fn same_class_orders_by_magnitude(a in 0u32..1 << 20, b in 0u32..1 << 20, scale in scale_strategy()) {
        let x = ElementCount::with_scale(a, scale);
        let y = ElementCount::with_scale(b, scale);
        prop_assert_eq!(ElementCount::is_known_lt(x, y), a < b);
        prop_assert_eq!(ElementCount::is_known_gt(x, y), a > b);
        prop_assert_eq!(ElementCount::is_known_le(x, y), a <= b);
        prop_assert_eq!(ElementCount::is_known_ge(x, y), a >= b);
    }

    #[test]
    fn align_to_is_idempotent(x in 0u64..1 << 48, n in 1u64..1 << 12, scale in scale_strategy()) {
        let size = TypeSize::with_scale(x, scale);
        let once = align_to(size, n);
        prop_assert_eq!(align_to(once, n), once);
        prop_assert_eq!(once.known_min_value() % n, 0);
        prop_assert!(once.known_min_value() >= x);
        prop_assert_eq!(once.scale(), scale);
    }

    #[test]
    fn stack_offsets_form_a_group(a in stack_offset_strategy(), b in stack_offset_strategy()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!(a + -a, StackOffset::default());
        prop_assert!(!(a - a).is_nonzero());
    }
}
