use super::*;

#[test]
fn negation_keeps_scale() {
    let off = -ScalableOffset::scalable(16);
    assert_eq!(off.known_min_value(), -16);
    assert_eq!(off.scale(), Scale::V);
}

#[test]
fn subtraction_can_go_negative() {
    let off = ScalableOffset::fixed(4) - ScalableOffset::fixed(12);
    assert_eq!(off, ScalableOffset::fixed(-8));
}

#[test]
fn negative_offsets_print_signed() {
    assert_eq!(ScalableOffset::scalable(-2).to_string(), "vscale x -2");
}
