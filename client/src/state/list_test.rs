use super::*;

fn loaded(items: Vec<u32>) -> ListState<u32> {
    let mut state = ListState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(items));
    state
}

#[test]
fn default_state_is_loading_without_rows() {
    let state = ListState::<u32>::default();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.items.is_empty());
    assert!(!state.shows_table());
}

#[test]
fn successful_load_renders_one_row_per_item() {
    for len in [1_usize, 2, 17] {
        let mut state = ListState::default();
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, Ok((0..len).collect::<Vec<_>>())));
        assert!(state.shows_table());
        assert_eq!(state.rendered_row_count(), len);
        assert_eq!(state.table_rows(), TableRows::Rows(&state.items));
    }
}

#[test]
fn empty_load_renders_single_placeholder_row() {
    let state = loaded(Vec::new());
    assert!(state.shows_table());
    assert_eq!(state.table_rows(), TableRows::Placeholder);
    assert_eq!(state.rendered_row_count(), 1);
}

#[test]
fn failed_load_hides_table_and_keeps_rows() {
    let mut state = loaded(vec![1, 2]);
    let ticket = state.begin_load();
    state.finish_load(ticket, Err("GET /api/code-type-mappings failed: 404 Not Found".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("GET /api/code-type-mappings failed: 404 Not Found"));
    assert!(!state.shows_table());
    assert_eq!(state.items, vec![1, 2]);
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = ListState::<u32>::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Err("boom".to_owned()));
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn late_result_from_superseded_load_is_dropped() {
    let mut state = ListState::<&str>::default();
    let agency_a = state.begin_load();
    let agency_b = state.begin_load();

    assert!(state.finish_load(agency_b, Ok(vec!["B1", "B2"])));
    assert!(!state.finish_load(agency_a, Ok(vec!["A1"])));

    assert_eq!(state.items, vec!["B1", "B2"]);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn superseded_result_arriving_first_keeps_loading() {
    let mut state = ListState::<&str>::default();
    let agency_a = state.begin_load();
    let agency_b = state.begin_load();

    assert!(!state.finish_load(agency_a, Err("GET /api/term-mappings failed: 404 Not Found".to_owned())));
    assert!(state.loading);
    assert!(state.error.is_none());

    assert!(state.finish_load(agency_b, Ok(vec!["B1"])));
    assert!(state.shows_table());
    assert_eq!(state.items, vec!["B1"]);
}
