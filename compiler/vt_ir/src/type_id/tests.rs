use super::*;

#[test]
fn primitive_range() {
    assert!(TypeId::VOID.is_primitive());
    assert!(TypeId::WASM_FUNCREF.is_primitive());
    assert!(!TypeId::from_raw(TypeId::PRIMITIVE_COUNT).is_primitive());
}

#[test]
fn raw_round_trip() {
    assert_eq!(TypeId::from_raw(42).raw(), 42);
    assert_eq!(TypeId::I32.index(), 18);
}

#[test]
fn debug_shows_index() {
    assert_eq!(format!("{:?}", TypeId::from_raw(7)), "TypeId(7)");
}
