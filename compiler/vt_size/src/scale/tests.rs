use super::*;

#[test]
fn fixed_is_empty() {
    assert!(Scale::FIXED.is_empty());
    assert!(!Scale::FIXED.is_scalable());
    assert_eq!(Scale::default(), Scale::FIXED);
}

#[test]
fn mn_is_union_of_m_and_n() {
    assert_eq!(Scale::MN, Scale::M | Scale::N);
    assert!(Scale::MN.contains(Scale::M));
    assert!(Scale::MN.contains(Scale::N));
    assert!(!Scale::MN.contains(Scale::V));
}

#[test]
fn prefixes_are_distinct() {
    assert_eq!(Scale::V.prefix(), Some("vscale"));
    assert_eq!(Scale::M.prefix(), Some("mscale"));
    assert_eq!(Scale::N.prefix(), Some("nscale"));
    assert_eq!(Scale::MN.prefix(), Some("mnscale"));
    assert_eq!(Scale::FIXED.prefix(), None);
}

#[test]
fn debug_names_class() {
    assert_eq!(format!("{:?}", Scale::V), "Scale(vscale)");
    assert_eq!(format!("{:?}", Scale::FIXED), "Scale(fixed)");
}
