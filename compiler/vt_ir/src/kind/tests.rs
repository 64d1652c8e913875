use super::*;

#[test]
fn float_widths() {
    assert_eq!(FloatKind::Bf8.bits(), 8);
    assert_eq!(FloatKind::BFloat.bits(), 16);
    assert_eq!(FloatKind::X86Fp80.bits(), 80);
    assert_eq!(FloatKind::PpcFp128.bits(), 128);
}

#[test]
fn primitives_match_fixed_ids() {
    let prims = TypeKind::primitives();
    assert_eq!(prims[TypeId::VOID.index()], TypeKind::Void);
    assert_eq!(prims[TypeId::I32.index()], TypeKind::Integer { bits: 32 });
    assert_eq!(
        prims[TypeId::PTR.index()],
        TypeKind::Pointer { address_space: 0 }
    );
    for kind in [
        FloatKind::Bf8,
        FloatKind::Hf8,
        FloatKind::Half,
        FloatKind::BFloat,
        FloatKind::Float,
        FloatKind::Double,
        FloatKind::X86Fp80,
        FloatKind::Fp128,
        FloatKind::PpcFp128,
    ] {
        assert_eq!(prims[kind.type_id().index()], TypeKind::Float(kind));
    }
}

#[test]
fn element_validity() {
    assert!(TypeKind::Integer { bits: 7 }.is_valid_vector_element());
    assert!(TypeKind::Pointer { address_space: 3 }.is_valid_vector_element());
    assert!(!TypeKind::Pointer { address_space: 0 }.is_valid_matrix_element());
    assert!(!TypeKind::Void.is_valid_vector_element());
    assert!(!TypeKind::Token.is_valid_aggregate_element());
    assert!(TypeKind::X86Amx.is_valid_aggregate_element());
}
