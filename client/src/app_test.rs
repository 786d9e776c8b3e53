use super::*;

#[test]
fn detail_paths_are_recognized() {
    assert!(is_detail_path("/mapping/7"));
    assert!(is_detail_path("/mapping/7/"));
}

#[test]
fn list_and_unknown_paths_are_not_detail() {
    assert!(!is_detail_path("/"));
    assert!(!is_detail_path("/mapping"));
    assert!(!is_detail_path("/mappings/7"));
}
