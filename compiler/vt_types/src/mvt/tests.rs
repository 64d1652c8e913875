use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn names_are_unique() {
    let mut seen = HashSet::new();
    for &vt in Mvt::ALL {
        assert!(seen.insert(vt.name()), "duplicate name {}", vt.name());
    }
    assert_eq!(seen.len(), Mvt::ALL.len());
}

#[test]
fn vector_names_match_their_shape() {
    for vt in Mvt::all().filter(|vt| vt.is_vector()) {
        let prefix = if vt.is_scalable_vector() { "nxv" } else { "v" };
        let expected = format!(
            "{prefix}{}{}",
            vt.vector_min_num_elements(),
            vt.vector_element_type().name()
        );
        assert_eq!(vt.name(), expected);
    }
}

#[test]
fn matrix_names_match_their_shape() {
    for vt in Mvt::matrix_value_types() {
        let (rows, cols) = (vt.matrix_num_elements(), vt.matrix_num_elements2());
        let elem = vt.matrix_element_type().name();
        let expected = if vt.is_scalable_matrix() {
            format!("mx{rows}xnx{cols}x{elem}")
        } else {
            format!("m{rows}x{cols}x{elem}")
        };
        assert_eq!(vt.name(), expected);
    }
}

#[test]
fn discriminants_follow_table_order() {
    for (idx, &vt) in Mvt::ALL.iter().enumerate() {
        assert_eq!(vt as usize, idx);
    }
    assert_eq!(Mvt::Invalid as u16, 0);
}

#[test]
fn scalar_factories() {
    assert_eq!(Mvt::integer_vt(32), Mvt::I32);
    assert_eq!(Mvt::integer_vt(2), Mvt::I2);
    assert_eq!(Mvt::integer_vt(17), Mvt::Invalid);
    assert_eq!(Mvt::floating_point_vt(80), Mvt::F80);
    assert_eq!(Mvt::float_vt(FloatKind::BFloat), Mvt::Bf16);
    assert_eq!(Mvt::float_vt(FloatKind::Hf8), Mvt::Hf8);
}

#[test]
#[should_panic(expected = "no floating-point value type of 24 bits")]
fn floating_point_vt_rejects_odd_widths() {
    let _ = Mvt::floating_point_vt(24);
}

#[test]
fn vector_and_matrix_factories() {
    assert_eq!(Mvt::vector_vt(Mvt::I32, ElementCount::fixed(4)), Mvt::V4I32);
    assert_eq!(Mvt::vector_vt(Mvt::I32, ElementCount::fixed(11)), Mvt::V11I32);
    assert_eq!(
        Mvt::vector_vt(Mvt::F32, ElementCount::scalable(4)),
        Mvt::Nxv4F32
    );
    assert_eq!(Mvt::vector_vt(Mvt::I32, ElementCount::fixed(13)), Mvt::Invalid);
    assert_eq!(
        Mvt::vector_vt(Mvt::I8, ElementCount::with_scale(4, Scale::M)),
        Mvt::Invalid
    );
    assert_eq!(Mvt::matrix_vt(Mvt::I8, 1, 4, false), Mvt::M1x4xI8);
    assert_eq!(Mvt::matrix_vt(Mvt::F16, 1, 8, true), Mvt::Mx1xnx8xF16);
    assert_eq!(Mvt::matrix_vt(Mvt::F16, 2, 8, true), Mvt::Invalid);
}

#[test]
fn classification() {
    assert!(Mvt::V4I32.is_integer());
    assert!(!Mvt::V4I32.is_scalar_integer());
    assert!(Mvt::I1.is_scalar_integer());
    assert!(Mvt::Nxv2Bf16.is_floating_point());
    assert!(Mvt::M1x4xF32.is_floating_point());
    assert!(Mvt::Nxv8I8.is_scalable_vector());
    assert!(!Mvt::Nxv8I8.is_fixed_length_vector());
    assert!(Mvt::Mx1xnx4xI32.is_scalable_matrix());
    assert!(!Mvt::M1x4xI32.is_scalable_vt());
    assert!(Mvt::Aarch64Svcount.is_scalable_target_ext_vt());
    assert!(Mvt::Aarch64Svcount.is_scalable_vt());
    assert!(!Mvt::Invalid.is_valid());
    assert!(!Mvt::X86Mmx.is_integer());
}

#[test]
fn sizes() {
    assert_eq!(Mvt::I1.size_in_bits(), TypeSize::fixed(1));
    assert_eq!(Mvt::F80.size_in_bits(), TypeSize::fixed(80));
    assert_eq!(Mvt::V4I32.size_in_bits(), TypeSize::fixed(128));
    assert_eq!(Mvt::Nxv4I32.size_in_bits(), TypeSize::scalable(128));
    assert_eq!(Mvt::M1x4xI8.size_in_bits(), TypeSize::fixed(32));
    assert_eq!(
        Mvt::Mx1xnx4xI8.size_in_bits(),
        TypeSize::with_scale(32, Scale::MN)
    );
    assert_eq!(Mvt::Aarch64Svcount.size_in_bits(), TypeSize::scalable(16));
    assert_eq!(Mvt::X86Amx.size_in_bits(), TypeSize::fixed(8192));
    assert_eq!(Mvt::Untyped.size_in_bits(), TypeSize::fixed(8));
    assert_eq!(Mvt::Other.size_in_bits(), TypeSize::fixed(0));
}

#[test]
fn store_sizes_round_up_to_bytes() {
    assert_eq!(Mvt::I1.store_size(), TypeSize::fixed(1));
    assert_eq!(Mvt::F80.store_size(), TypeSize::fixed(10));
    assert_eq!(Mvt::Nxv2I1.store_size(), TypeSize::scalable(1));
    assert_eq!(Mvt::I4.store_size_in_bits(), TypeSize::fixed(8));
    assert!(Mvt::I8.is_byte_sized());
    assert!(!Mvt::V2I1.is_byte_sized());
}

#[test]
#[should_panic(expected = "iPTR size is target-dependent")]
fn pointer_has_no_size() {
    let _ = Mvt::IPtr.size_in_bits();
}

#[test]
#[should_panic(expected = "metadata has no size")]
fn metadata_has_no_size() {
    let _ = Mvt::Metadata.size_in_bits();
}

#[test]
fn bit_vector_predicates() {
    assert!(Mvt::V2I8.is_16_bit_vector());
    assert!(Mvt::V4F32.is_128_bit_vector());
    assert!(Mvt::V64I32.is_2048_bit_vector());
    assert!(!Mvt::Nxv4I32.is_128_bit_vector());
    assert!(!Mvt::I64.is_64_bit_vector());
}

#[test]
fn structure_queries() {
    assert_eq!(Mvt::V3F16.scalar_type(), Mvt::F16);
    assert_eq!(Mvt::F16.scalar_type(), Mvt::F16);
    assert_eq!(Mvt::Nxv4I64.vector_element_count(), ElementCount::scalable(4));
    assert_eq!(Mvt::V12F32.vector_num_elements(), 12);
    assert_eq!(Mvt::Nxv4I64.vector_num_elements(), 4);
    assert_eq!(Mvt::M1x16xI32.matrix_element_type(), Mvt::I32);
    assert_eq!(Mvt::M1x16xI32.matrix_num_elements(), 1);
    assert_eq!(Mvt::M1x16xI32.matrix_num_elements2(), 16);
    assert_eq!(Mvt::V3I64.scalar_size_in_bits(), 64);
}

#[test]
fn transforms() {
    assert_eq!(Mvt::V4F32.change_vector_element_type_to_integer(), Mvt::V4I32);
    assert_eq!(Mvt::Nxv8F16.change_type_to_integer(), Mvt::Nxv8I16);
    assert_eq!(Mvt::F64.change_type_to_integer(), Mvt::I64);
    assert_eq!(Mvt::V8I16.half_num_vector_elements_vt(), Mvt::V4I16);
    assert_eq!(
        Mvt::V4I32.change_vector_element_type(Mvt::F32),
        Mvt::V4F32
    );
}

#[test]
#[should_panic(expected = "is not a simple value type")]
fn unrepresentable_transform_panics() {
    let _ = Mvt::V12F32.change_vector_element_type(Mvt::I8);
}

#[test]
fn size_comparisons() {
    assert!(Mvt::I64.bits_gt(Mvt::I32));
    assert!(Mvt::I32.bits_le(Mvt::F32));
    assert!(Mvt::I32.bits_eq(Mvt::F32));
    assert!(Mvt::Nxv4I32.bits_gt(Mvt::Nxv2I32));
    assert!(!Mvt::I32.bits_lt(Mvt::I32));
}

#[test]
#[should_panic(expected = "comparison between scalable and fixed types")]
fn mixed_scalability_comparison_panics() {
    let _ = Mvt::Nxv4I32.bits_gt(Mvt::V4I32);
}

#[test]
fn iteration_helpers() {
    let ints: Vec<_> = Mvt::integer_value_types().collect();
    assert_eq!(
        ints,
        vec![
            Mvt::I1,
            Mvt::I2,
            Mvt::I4,
            Mvt::I8,
            Mvt::I16,
            Mvt::I32,
            Mvt::I64,
            Mvt::I128
        ]
    );
    assert_eq!(Mvt::fp_value_types().count(), 9);
    assert!(Mvt::fixed_vector_value_types().all(Mvt::is_fixed_length_vector));
    assert!(Mvt::scalable_vector_value_types().all(Mvt::is_scalable_vector));
    assert_eq!(Mvt::matrix_value_types().count(), 114);
}

#[test]
fn display_is_the_short_name() {
    assert_eq!(Mvt::Invalid.to_string(), "invalid");
    assert_eq!(Mvt::Other.to_string(), "ch");
    assert_eq!(Mvt::Nxv2Bf8.to_string(), "nxv2bf8");
    assert_eq!(Mvt::IPtr.to_string(), "iPTR");
    assert_eq!(Mvt::default(), Mvt::Invalid);
}
