use super::*;
use std::sync::Arc;

use crate::state::test_helpers::{Call, MockSource, dummy_term_mapping, test_app_state};

fn query(agency_name: Option<&str>, code_list_id: Option<&str>) -> TermMappingsQuery {
    TermMappingsQuery {
        agency_name: agency_name.map(str::to_owned),
        code_list_id: code_list_id.map(str::to_owned),
    }
}

// =============================================================================
// mapping_error_to_status
// =============================================================================

#[test]
fn upstream_status_is_preserved() {
    let err = MappingApiError::Status {
        method: "GET",
        path: "/code-type-mappings".into(),
        status: 404,
        status_text: "Not Found".into(),
        body: None,
    };
    assert_eq!(mapping_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn transport_failure_maps_to_bad_gateway() {
    let err = MappingApiError::Request { method: "GET", path: "/code-type-mappings".into(), message: "refused".into() };
    assert_eq!(mapping_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[test]
fn decode_failure_maps_to_bad_gateway() {
    let err = MappingApiError::Decode { method: "GET", path: "/term-mappings".into(), message: "eof".into() };
    assert_eq!(mapping_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// TermMappingsQuery::validate
// =============================================================================

#[test]
fn validate_requires_agency_name() {
    let err = query(None, Some("42")).validate().unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, AGENCY_NAME_REQUIRED);
}

#[test]
fn validate_rejects_blank_agency_name() {
    let err = query(Some("  "), None).validate().unwrap_err();
    assert_eq!(err.message, AGENCY_NAME_REQUIRED);
}

#[test]
fn validate_parses_code_list_id() {
    let filter = query(Some("FDA"), Some("42")).validate().unwrap();
    assert_eq!(filter, TermMappingsFilter { agency_name: "FDA".into(), code_list_id: Some(42) });
}

#[test]
fn validate_treats_blank_code_list_id_as_absent() {
    let filter = query(Some("FDA"), Some("")).validate().unwrap();
    assert_eq!(filter.code_list_id, None);
}

#[test]
fn validate_rejects_non_numeric_code_list_id() {
    let err = query(Some("FDA"), Some("abc")).validate().unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(err.message.contains("codeListId"));
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn list_term_mappings_without_agency_never_calls_upstream() {
    let source = Arc::new(MockSource::default());
    let state = test_app_state(source.clone());

    let err = list_term_mappings(State(state), Query(query(None, None)))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn list_term_mappings_forwards_filter() {
    let source = Arc::new(MockSource {
        term_mappings: vec![dummy_term_mapping(1), dummy_term_mapping(2)],
        ..Default::default()
    });
    let state = test_app_state(source.clone());

    let Json(rows) = list_term_mappings(State(state), Query(query(Some("FDA"), Some("42"))))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        source.calls(),
        vec![Call::TermMappings { agency_name: "FDA".into(), code_list_id: Some(42) }]
    );
}

#[tokio::test]
async fn list_code_type_mappings_propagates_upstream_404() {
    let source = Arc::new(MockSource { fail_status: Some(404), ..Default::default() });
    let state = test_app_state(source.clone());

    let err = list_code_type_mappings(State(state)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert!(err.message.contains("GET /code-type-mappings failed: 404"));
    assert_eq!(source.calls(), vec![Call::CodeTypeMappings]);
}

#[tokio::test]
async fn update_term_mapping_forwards_payload_once() {
    let source = Arc::new(MockSource::default());
    let state = test_app_state(source.clone());
    let payload = UpdateTermMapping {
        current_status: Some("Reviewed".into()),
        reviewer_comments: Some("ok".into()),
        reviewed_by: Some("alice".into()),
    };

    let Json(response) = update_term_mapping(State(state), Path(3), Json(payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.message, "Term mapping 3 updated");
    assert_eq!(source.calls(), vec![Call::Update { id: 3, payload }]);
}

#[tokio::test]
async fn update_term_mapping_propagates_upstream_500() {
    let source = Arc::new(MockSource { fail_status: Some(500), ..Default::default() });
    let state = test_app_state(source);

    let err = update_term_mapping(State(state), Path(3), Json(UpdateTermMapping::default()))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn api_error_renders_json_body() {
    let response = ApiError::bad_request(AGENCY_NAME_REQUIRED).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
