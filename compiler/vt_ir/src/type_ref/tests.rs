use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_uses_textual_syntax() {
    let ctx = TypeContext::new();
    let i32_ty = ctx.int(32);
    let cases = [
        (ctx.void(), "void"),
        (ctx.float(FloatKind::BFloat), "bfloat"),
        (ctx.int(17), "i17"),
        (ctx.pointer(0), "ptr"),
        (ctx.pointer(3), "ptr addrspace(3)"),
        (ctx.fixed_vector(i32_ty, 4), "<4 x i32>"),
        (ctx.scalable_vector(i32_ty, 4), "<vscale x 4 x i32>"),
        (ctx.matrix(i32_ty, 1, 8, false), "matrix(1 x 8 x i32)"),
        (
            ctx.matrix(i32_ty, 1, 8, true),
            "matrix(mscale x 1 x nscale x 8 x i32)",
        ),
        (ctx.array(ctx.int(8), 3), "[3 x i8]"),
        (ctx.struct_of(&[i32_ty, ctx.int(8)], false), "{ i32, i8 }"),
        (ctx.struct_of(&[i32_ty], true), "<{ i32 }>"),
        (ctx.struct_of(&[], false), "{}"),
        (ctx.target_ext("spirv.Image"), "target(\"spirv.Image\")"),
        (ctx.wasm_funcref(), "funcref"),
    ];
    for (ty, expected) in cases {
        assert_eq!(ty.to_string(), expected);
    }
}

#[test]
fn element_counts() {
    let ctx = TypeContext::new();
    let f = ctx.float(FloatKind::Float);
    assert_eq!(ctx.fixed_vector(f, 3).element_count(), ElementCount::fixed(3));
    assert_eq!(
        ctx.scalable_vector(f, 2).element_count(),
        ElementCount::scalable(2)
    );
    let m = ctx.matrix(f, 2, 3, true);
    assert_eq!(m.element_count(), ElementCount::with_scale(6, Scale::MN));
    assert_eq!(m.matrix_rows(), ElementCount::with_scale(2, Scale::M));
    assert_eq!(m.matrix_cols(), ElementCount::with_scale(3, Scale::N));
    let fixed = ctx.matrix(f, 2, 3, false);
    assert_eq!(fixed.element_count(), ElementCount::fixed(6));
}

#[test]
fn scalar_type_and_address_space() {
    let ctx = TypeContext::new();
    let p = ctx.pointer(5);
    let v = ctx.fixed_vector(p, 2);
    assert_eq!(v.scalar_type(), p);
    assert_eq!(v.address_space(), Some(5));
    assert_eq!(ctx.int(8).address_space(), None);
    assert_eq!(ctx.int(8).scalar_type(), ctx.int(8));
}

#[test]
fn sizedness() {
    let ctx = TypeContext::new();
    assert!(!ctx.void().is_sized());
    assert!(!ctx.target_ext("aarch64.svcount").is_sized());
    assert!(ctx.x86_amx().is_sized());
    let unsized_elem = ctx.target_ext("opaque");
    assert!(!ctx.struct_of(&[ctx.int(8), unsized_elem], false).is_sized());
    assert!(!ctx.array(unsized_elem, 2).is_sized());
}

#[test]
fn handles_from_different_contexts_differ() {
    let a = TypeContext::new();
    let b = TypeContext::new();
    assert_ne!(a.int(32), b.int(32));
    assert_eq!(a.int(32), a.get(TypeId::I32));
}

#[test]
#[should_panic(expected = "is not an integer type")]
fn integer_width_of_float_panics() {
    let ctx = TypeContext::new();
    let _ = ctx.float(FloatKind::Half).integer_bit_width();
}
