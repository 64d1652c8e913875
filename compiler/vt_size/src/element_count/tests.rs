use super::*;

#[test]
fn fixed_one_is_scalar() {
    assert!(ElementCount::fixed(1).is_scalar());
    assert!(!ElementCount::fixed(1).is_vector());
}

#[test]
fn scalable_one_is_vector() {
    let ec = ElementCount::scalable(1);
    assert!(ec.is_vector());
    assert!(!ec.is_scalar());
}

#[test]
fn zero_is_neither() {
    assert!(!ElementCount::fixed(0).is_scalar());
    assert!(!ElementCount::fixed(0).is_vector());
    assert!(!ElementCount::scalable(0).is_vector());
}

#[test]
fn matrix_scaled_single_element_is_not_vector() {
    // Only vscale-scaled counts of one element are vectors.
    let ec = ElementCount::with_scale(1, Scale::MN);
    assert!(!ec.is_vector());
    assert!(!ec.is_scalar());
}

#[test]
fn fixed_many_is_vector() {
    assert!(ElementCount::fixed(4).is_vector());
    assert!(ElementCount::scalable(4).is_vector());
}

#[test]
fn get_matches_factories() {
    assert_eq!(ElementCount::get(4, false), ElementCount::fixed(4));
    assert_eq!(ElementCount::get(4, true), ElementCount::scalable(4));
}

#[test]
fn display_and_debug() {
    assert_eq!(ElementCount::scalable(8).to_string(), "vscale x 8");
    assert_eq!(ElementCount::fixed(8).to_string(), "8");
    assert_eq!(
        format!("{:?}", ElementCount::scalable(2)),
        "ElementCount(vscale x 2)"
    );
}
