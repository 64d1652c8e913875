use pretty_assertions::assert_eq;

use super::*;

#[test]
fn primitives_are_pre_interned() {
    let ctx = TypeContext::new();
    assert_eq!(ctx.len(), TypeId::PRIMITIVE_COUNT as usize);
    assert_eq!(ctx.int(32).id(), TypeId::I32);
    assert_eq!(ctx.int(1).id(), TypeId::I1);
    assert_eq!(ctx.float(FloatKind::Double).id(), TypeId::DOUBLE);
    assert_eq!(ctx.pointer(0).id(), TypeId::PTR);
    assert_eq!(ctx.len(), TypeId::PRIMITIVE_COUNT as usize);
}

#[test]
fn interning_deduplicates() {
    let ctx = TypeContext::new();
    let a = ctx.int(17);
    let b = ctx.int(17);
    assert_eq!(a, b);
    assert!(!a.id().is_primitive());

    let v1 = ctx.fixed_vector(a, 3);
    let v2 = ctx.vector(b, ElementCount::fixed(3));
    assert_eq!(v1, v2);
    assert_ne!(v1, ctx.scalable_vector(a, 3));
}

#[test]
fn integer_width_is_checked() {
    let ctx = TypeContext::new();
    assert_eq!(
        ctx.try_int(0),
        Err(TypeError::InvalidIntegerWidth { bits: 0 })
    );
    assert_eq!(
        ctx.try_int(MAX_INT_BITS + 1),
        Err(TypeError::InvalidIntegerWidth {
            bits: MAX_INT_BITS + 1
        })
    );
    assert!(ctx.try_int(MAX_INT_BITS).is_ok());
}

#[test]
#[should_panic(expected = "integer width 0")]
fn int_panics_on_zero_width() {
    let ctx = TypeContext::new();
    let _ = ctx.int(0);
}

#[test]
fn vector_construction_errors() {
    let ctx = TypeContext::new();
    assert_eq!(
        ctx.try_vector(ctx.int(8), ElementCount::fixed(0)),
        Err(TypeError::EmptyVector)
    );
    assert_eq!(
        ctx.try_vector(ctx.void(), ElementCount::fixed(2)),
        Err(TypeError::InvalidElementType {
            element: "void".to_owned(),
            container: "vector",
        })
    );
    assert!(ctx.try_vector(ctx.pointer(1), ElementCount::fixed(2)).is_ok());
}

#[test]
#[should_panic(expected = "vscale-scaled")]
fn vector_rejects_matrix_scales() {
    let ctx = TypeContext::new();
    let _ = ctx.vector(
        ctx.int(8),
        ElementCount::with_scale(4, vt_size::Scale::M),
    );
}

#[test]
fn matrix_construction_errors() {
    let ctx = TypeContext::new();
    assert_eq!(
        ctx.try_matrix(ctx.int(8), 0, 4, false),
        Err(TypeError::EmptyMatrix)
    );
    assert!(matches!(
        ctx.try_matrix(ctx.pointer(0), 1, 4, false),
        Err(TypeError::InvalidElementType { container: "matrix", .. })
    ));
    let m = ctx.matrix(ctx.float(FloatKind::Float), 1, 4, true);
    assert!(m.is_scalable_matrix());
}

#[test]
fn matrix_element_count_must_fit_u32() {
    let ctx = TypeContext::new();
    assert_eq!(
        ctx.try_matrix(ctx.int(8), 70_000, 70_000, false),
        Err(TypeError::MatrixTooLarge {
            rows: 70_000,
            cols: 70_000
        })
    );
    let widest = ctx.matrix(ctx.int(8), 65_536, 65_535, false);
    assert_eq!(widest.element_count(), ElementCount::fixed(65_536 * 65_535));
}

#[test]
#[should_panic(expected = "has more than u32::MAX elements")]
fn oversized_matrix_panics() {
    let ctx = TypeContext::new();
    let _ = ctx.matrix(ctx.int(8), u32::MAX, 2, true);
}

#[test]
fn aggregates_and_target_ext() {
    let ctx = TypeContext::new();
    let s = ctx.struct_of(&[ctx.int(32), ctx.int(8)], false);
    assert!(s.is_struct());
    assert!(matches!(
        ctx.try_struct_of(&[ctx.label()], false),
        Err(TypeError::InvalidElementType { container: "struct", .. })
    ));
    let a = ctx.array(s, 4);
    assert_eq!(a.element_type(), s);
    assert_eq!(ctx.try_target_ext(""), Err(TypeError::EmptyTargetExtName));
    assert_eq!(
        ctx.target_ext("aarch64.svcount").target_ext_name().as_deref(),
        Some("aarch64.svcount")
    );
}

#[test]
#[should_panic(expected = "different type context")]
fn foreign_elements_are_rejected() {
    let a = TypeContext::new();
    let b = TypeContext::new();
    let _ = a.fixed_vector(b.int(8), 4);
}

#[test]
fn shared_context_interns_across_threads() {
    let ctx = TypeContext::new();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for bits in 200..232 {
                    let _ = ctx.int(bits);
                }
            });
        }
    });
    assert_eq!(ctx.len(), TypeId::PRIMITIVE_COUNT as usize + 32);
}
