use pretty_assertions::assert_eq;
use vt_ir::FloatKind;
use vt_size::Scale;

use super::*;

#[test]
fn uncatalogued_integer_is_extended() {
    let ctx = TypeContext::new();
    let evt = Evt::get_evt(ctx.int(17), false);
    assert!(evt.is_extended());
    assert_eq!(evt.extended_size_in_bits(), TypeSize::fixed(17));
    assert_eq!(evt.size_in_bits(), TypeSize::fixed(17));
    assert!(evt.is_integer());
    assert!(evt.is_scalar_integer());
    assert_eq!(evt.evt_string(), "i17");
    assert_eq!(evt.type_for_evt(&ctx), ctx.int(17));
}

#[test]
fn catalogued_types_stay_simple() {
    let ctx = TypeContext::new();
    assert_eq!(Evt::get_evt(ctx.int(32), false), Evt::Simple(Mvt::I32));
    let v = ctx.scalable_vector(ctx.float(FloatKind::Float), 4);
    assert_eq!(Evt::get_evt(v, false), Evt::Simple(Mvt::Nxv4F32));
    assert_eq!(Evt::get_evt(ctx.pointer(3), false), Evt::Simple(Mvt::IPtr));
}

#[test]
fn uncatalogued_vectors_are_extended() {
    let ctx = TypeContext::new();
    let odd = ctx.fixed_vector(ctx.int(7), 3);
    let evt = Evt::get_evt(odd, false);
    assert_eq!(evt, Evt::Extended(odd));
    assert_eq!(evt.evt_string(), "v3i7");
    assert!(evt.is_extended_vector());
    assert!(evt.is_extended_fixed_length_vector());
    assert!(evt.is_extended_integer());
    assert!(!evt.is_extended_scalar_integer());
    assert_eq!(evt.vector_element_count(), ElementCount::fixed(3));
    assert_eq!(evt.vector_element_type(), Evt::Extended(ctx.int(7)));
    assert_eq!(evt.size_in_bits(), TypeSize::fixed(21));

    let wide = ctx.scalable_vector(ctx.int(32), 64);
    let evt = Evt::get_evt(wide, false);
    assert!(evt.is_extended_scalable_vector());
    assert_eq!(evt.evt_string(), "nxv64i32");
    assert_eq!(evt.vector_element_type(), Evt::Simple(Mvt::I32));
    assert_eq!(evt.extended_vector_num_elements(), 64);
}

#[test]
fn pointer_vectors_keep_their_type() {
    let ctx = TypeContext::new();
    let v = ctx.fixed_vector(ctx.pointer(5), 2);
    let evt = Evt::get_evt(v, false);
    assert_eq!(evt, Evt::Extended(v));
    assert_eq!(evt.type_for_evt(&ctx).address_space(), Some(5));
}

#[test]
fn extended_matrices() {
    let ctx = TypeContext::new();
    let fixed = ctx.matrix(ctx.int(8), 2, 3, false);
    let evt = Evt::get_evt(fixed, false);
    assert!(evt.is_extended_matrix());
    assert_eq!(evt.evt_string(), "m2x3xi8");
    assert_eq!(evt.size_in_bits(), TypeSize::fixed(48));

    let scalable = ctx.matrix(ctx.float(FloatKind::Half), 2, 128, true);
    let evt = Evt::get_evt(scalable, false);
    assert!(evt.is_extended_scalable_matrix());
    assert!(evt.is_scalable_vt());
    assert_eq!(evt.evt_string(), "mx2xnx128xf16");
    assert_eq!(evt.matrix_num_elements(), 2);
    assert_eq!(evt.matrix_num_elements2(), 128);
    assert_eq!(evt.size_in_bits(), TypeSize::with_scale(4096, Scale::MN));
}

#[test]
fn factories_prefer_the_catalogue() {
    let ctx = TypeContext::new();
    assert_eq!(Evt::integer_vt(&ctx, 64), Evt::Simple(Mvt::I64));
    assert_eq!(Evt::integer_vt(&ctx, 48), Evt::Extended(ctx.int(48)));
    assert_eq!(Evt::floating_point_vt(32), Evt::Simple(Mvt::F32));
    let i32_vt = Evt::Simple(Mvt::I32);
    assert_eq!(
        Evt::vector_vt(&ctx, i32_vt, ElementCount::fixed(8)),
        Evt::Simple(Mvt::V8I32)
    );
    assert_eq!(
        Evt::vector_vt(&ctx, i32_vt, ElementCount::fixed(13)),
        Evt::Extended(ctx.fixed_vector(ctx.int(32), 13))
    );
    let i48 = Evt::integer_vt(&ctx, 48);
    assert_eq!(
        Evt::vector_vt(&ctx, i48, ElementCount::scalable(2)),
        Evt::Extended(ctx.scalable_vector(ctx.int(48), 2))
    );
    assert_eq!(
        Evt::matrix_vt(&ctx, Evt::Simple(Mvt::F32), 1, 16, true),
        Evt::Simple(Mvt::Mx1xnx16xF32)
    );
    assert_eq!(
        Evt::matrix_vt(&ctx, Evt::Simple(Mvt::F32), 4, 4, false),
        Evt::Extended(ctx.matrix(ctx.float(FloatKind::Float), 4, 4, false))
    );
}

#[test]
fn canonical_types() {
    let ctx = TypeContext::new();
    let ty = |vt: Mvt| Evt::Simple(vt).type_for_evt(&ctx).to_string();
    assert_eq!(ty(Mvt::IsVoid), "void");
    assert_eq!(ty(Mvt::I2), "i2");
    assert_eq!(ty(Mvt::F80), "x86_fp80");
    assert_eq!(ty(Mvt::V2Bf16), "<2 x bfloat>");
    assert_eq!(ty(Mvt::Nxv16I8), "<vscale x 16 x i8>");
    assert_eq!(ty(Mvt::M1x8xI64), "matrix(1 x 8 x i64)");
    assert_eq!(ty(Mvt::Mx1xnx2xF64), "matrix(mscale x 1 x nscale x 2 x double)");
    assert_eq!(ty(Mvt::I64x8), "i512");
    assert_eq!(ty(Mvt::Aarch64Svcount), "target(\"aarch64.svcount\")");
    assert_eq!(ty(Mvt::IPtr), "ptr");
    assert_eq!(ty(Mvt::Metadata), "metadata");
    assert_eq!(ty(Mvt::Externref), "externref");
}

#[test]
#[should_panic(expected = "value type `glue` has no structural type")]
fn placeholders_have_no_structural_type() {
    let ctx = TypeContext::new();
    let _ = Evt::Simple(Mvt::Glue).type_for_evt(&ctx);
}

#[test]
#[should_panic(expected = "is not an extended type")]
fn extended_queries_require_extended() {
    let _ = Evt::Simple(Mvt::I32).extended_size_in_bits();
}

#[test]
fn integer_transforms() {
    let ctx = TypeContext::new();
    let i17 = Evt::integer_vt(&ctx, 17);
    assert_eq!(i17.round_integer_type(&ctx), Evt::Simple(Mvt::I32));
    assert_eq!(Evt::integer_vt(&ctx, 3).round_integer_type(&ctx), Evt::Simple(Mvt::I8));
    assert_eq!(Evt::integer_vt(&ctx, 100).round_integer_type(&ctx), Evt::Simple(Mvt::I128));
    assert_eq!(Evt::Simple(Mvt::I64).half_sized_integer_vt(&ctx), Evt::Simple(Mvt::I32));
    assert_eq!(i17.half_sized_integer_vt(&ctx), Evt::Simple(Mvt::I16));
    assert_eq!(
        Evt::integer_vt(&ctx, 1000).half_sized_integer_vt(&ctx),
        Evt::integer_vt(&ctx, 500)
    );
}

#[test]
fn vector_transforms() {
    let ctx = TypeContext::new();
    assert_eq!(
        Evt::Simple(Mvt::V3I32).pow2_vector_type(&ctx),
        Evt::Simple(Mvt::V4I32)
    );
    assert_eq!(
        Evt::Simple(Mvt::V8I32).half_num_vector_elements_vt(&ctx),
        Evt::Simple(Mvt::V4I32)
    );
    let odd = Evt::get_evt(ctx.fixed_vector(ctx.int(7), 6), false);
    assert_eq!(
        odd.half_num_vector_elements_vt(&ctx),
        Evt::Extended(ctx.fixed_vector(ctx.int(7), 3))
    );
    assert_eq!(
        Evt::Simple(Mvt::Nxv4F32).change_vector_element_type_to_integer(&ctx),
        Evt::Simple(Mvt::Nxv4I32)
    );
    assert_eq!(
        Evt::Simple(Mvt::V4I32).change_element_type(&ctx, Evt::integer_vt(&ctx, 7)),
        Evt::Extended(ctx.fixed_vector(ctx.int(7), 4))
    );
    assert_eq!(
        Evt::Simple(Mvt::I32).change_element_type(&ctx, Evt::Simple(Mvt::F32)),
        Evt::Simple(Mvt::F32)
    );
}

#[test]
fn size_comparisons() {
    let ctx = TypeContext::new();
    let i17 = Evt::integer_vt(&ctx, 17);
    assert!(i17.bits_gt(Evt::Simple(Mvt::I16)));
    assert!(i17.bits_lt(Evt::Simple(Mvt::I32)));
    assert!(i17.bits_eq(Evt::integer_vt(&ctx, 17)));
    assert!(Evt::Simple(Mvt::Nxv4I32).bits_ge(Evt::Simple(Mvt::Nxv2I64)));
    assert!(Evt::Simple(Mvt::Nxv4I32).bits_le(Evt::Simple(Mvt::Nxv8I32)));
}

#[test]
#[should_panic(expected = "comparison between scalable and fixed types")]
fn mixed_scalability_comparison_panics() {
    let _ = Evt::Simple(Mvt::Nxv4I32).bits_gt(Evt::Simple(Mvt::V4I32));
}

#[test]
fn strings_and_display() {
    let ctx = TypeContext::new();
    assert_eq!(Evt::Simple(Mvt::Nxv1I1).evt_string(), "nxv1i1");
    assert_eq!(Evt::Simple(Mvt::Other).evt_string(), "ch");
    assert_eq!(Evt::Simple(Mvt::Invalid).to_string(), "invalid");
    assert_eq!(Evt::integer_vt(&ctx, 3).to_string(), "i3");
}

#[test]
fn shape_predicates() {
    let ctx = TypeContext::new();
    assert!(Evt::Simple(Mvt::V4I32).is_128_bit_vector());
    assert!(!Evt::get_evt(ctx.fixed_vector(ctx.int(24), 2), false).is_extended_16_bit_vector());
    assert!(Evt::get_evt(ctx.fixed_vector(ctx.int(8), 32), false).is_extended_256_bit_vector());
    assert!(Evt::Simple(Mvt::I32).is_round());
    assert!(!Evt::integer_vt(&ctx, 24).is_round());
    assert!(!Evt::Simple(Mvt::Nxv4I32).is_round());
    assert!(Evt::Simple(Mvt::V4I32).is_pow2_vector_type());
    assert!(!Evt::Simple(Mvt::V3I32).is_pow2_vector_type());
}
