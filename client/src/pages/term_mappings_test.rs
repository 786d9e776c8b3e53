use super::*;
use std::cell::RefCell;

use futures::executor::block_on;

use crate::util::mapping_route::test_helpers::route_from_query;

fn term(id: i64) -> TermMapping {
    TermMapping {
        id,
        agency_name: "FDA".to_owned(),
        agency_abbreviation: "FDA".to_owned(),
        code_system_name: "SPL".to_owned(),
        ha_term: format!("HA {id}"),
        reg_app_term: format!("RA {id}"),
        vault_uuid: format!("vault-{id}"),
        vault_code_list_name: "Dosage Form".to_owned(),
        confidence_score: None,
        mapping_source: None,
        current_status: None,
        reviewer_comments: None,
        reviewed_by: None,
        review_date: None,
        is_active: true,
    }
}

#[test]
fn missing_agency_fails_without_fetching() {
    let calls = RefCell::new(Vec::new());
    let result = block_on(load_term_mappings("", Some(42), |agency, id| {
        calls.borrow_mut().push((agency, id));
        async { Ok(vec![term(1)]) }
    }));
    assert_eq!(result, Err(AGENCY_NAME_REQUIRED.to_owned()));
    assert!(calls.borrow().is_empty());
}

#[test]
fn blank_agency_fails_without_fetching() {
    let calls = RefCell::new(0_u32);
    let result = block_on(load_term_mappings("   ", None, |_, _| {
        *calls.borrow_mut() += 1;
        async { Ok(Vec::new()) }
    }));
    assert!(result.is_err());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn agency_and_code_list_id_are_forwarded() {
    let calls = RefCell::new(Vec::new());
    let result = block_on(load_term_mappings("FDA", Some(42), |agency, id| {
        calls.borrow_mut().push((agency, id));
        async { Ok(vec![term(1), term(2)]) }
    }));
    assert_eq!(result.unwrap().len(), 2);
    assert_eq!(*calls.borrow(), vec![("FDA".to_owned(), Some(42))]);
}

#[test]
fn fetch_failure_is_passed_through() {
    let result = block_on(load_term_mappings("FDA", None, |_, _| async {
        Err("GET /api/term-mappings failed: 404 Not Found".to_owned())
    }));
    assert_eq!(result, Err("GET /api/term-mappings failed: 404 Not Found".to_owned()));
}

#[test]
fn detail_route_without_agency_yields_required_error() {
    let route = route_from_query(Some("7".to_owned()), "haCodeList=HA1");
    let result = block_on(load_term_mappings(&route.agency_name, route.code_list_id, |_, _| async {
        Ok(Vec::new())
    }));
    assert_eq!(result.unwrap_err(), AGENCY_NAME_REQUIRED);
}
