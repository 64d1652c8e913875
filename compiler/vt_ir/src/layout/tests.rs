use pretty_assertions::assert_eq;
use vt_size::ElementCount;

use super::*;
use crate::{FloatKind, TypeContext};

#[test]
fn scalar_sizes() {
    let ctx = TypeContext::new();
    let dl = ctx.layout();
    assert_eq!(dl.type_size_in_bits(ctx.int(17)), TypeSize::fixed(17));
    assert_eq!(dl.type_store_size_in_bits(ctx.int(17)), TypeSize::fixed(24));
    assert_eq!(dl.type_alloc_size_in_bits(ctx.int(17)), TypeSize::fixed(32));
    assert_eq!(dl.abi_alignment(ctx.int(64)), 8);
    assert_eq!(dl.abi_alignment(ctx.int(1)), 1);
    let f80 = ctx.float(FloatKind::X86Fp80);
    assert_eq!(dl.type_size_in_bits(f80), TypeSize::fixed(80));
    assert_eq!(dl.type_alloc_size_in_bits(f80), TypeSize::fixed(128));
}

#[test]
fn pointer_widths_per_address_space() {
    let layout = DataLayout::new()
        .with_pointer_size(32)
        .with_address_space_pointer_size(7, 128);
    assert_eq!(layout.pointer_size_in_bits(0), 32);
    assert_eq!(layout.pointer_size_in_bits(7), 128);
    let ctx = TypeContext::with_layout(layout);
    assert_eq!(ctx.pointer(0).size_in_bits(), TypeSize::fixed(32));
    assert_eq!(ctx.pointer(7).size_in_bits(), TypeSize::fixed(128));
}

#[test]
fn vector_and_matrix_sizes() {
    let ctx = TypeContext::new();
    let i1 = ctx.int(1);
    assert_eq!(ctx.fixed_vector(i1, 8).size_in_bits(), TypeSize::fixed(8));
    assert_eq!(
        ctx.vector(ctx.int(32), ElementCount::scalable(4)).size_in_bits(),
        TypeSize::scalable(128)
    );
    let m = ctx.matrix(ctx.float(FloatKind::Half), 1, 4, true);
    assert_eq!(m.size_in_bits(), TypeSize::with_scale(64, Scale::MN));
    let fixed = ctx.matrix(ctx.int(8), 2, 2, false);
    assert_eq!(fixed.size_in_bits(), TypeSize::fixed(32));
}

#[test]
fn struct_layout_pads_fields() {
    let ctx = TypeContext::new();
    let s = ctx.struct_of(&[ctx.int(8), ctx.int(32), ctx.int(16)], false);
    let layout = ctx.layout().struct_layout(s);
    assert_eq!(layout.offsets.as_slice(), &[0, 4, 8]);
    assert_eq!(layout.alignment, 4);
    assert_eq!(layout.size_in_bits, TypeSize::fixed(96));
}

#[test]
fn packed_struct_has_no_padding() {
    let ctx = TypeContext::new();
    let s = ctx.struct_of(&[ctx.int(8), ctx.int(32)], true);
    let layout = ctx.layout().struct_layout(s);
    assert_eq!(layout.offsets.as_slice(), &[0, 1]);
    assert_eq!(layout.alignment, 1);
    assert_eq!(s.size_in_bits(), TypeSize::fixed(40));
}

#[test]
fn array_uses_alloc_size() {
    let ctx = TypeContext::new();
    let a = ctx.array(ctx.int(24), 3);
    assert_eq!(a.size_in_bits(), TypeSize::fixed(96));
}

#[test]
#[should_panic(expected = "has no layout size")]
fn unsized_type_panics() {
    let ctx = TypeContext::new();
    let _ = ctx.metadata().size_in_bits();
}
