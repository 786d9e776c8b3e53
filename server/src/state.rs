//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds nothing mutable: the upstream mapping source is shared behind an
//! `Arc` and every request goes straight through to it.

use std::sync::Arc;

use crate::mapping_api::MappingSource;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub mappings: Arc<dyn MappingSource>,
}

impl AppState {
    #[must_use]
    pub fn new(mappings: Arc<dyn MappingSource>) -> Self {
        Self { mappings }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use records::{CodeTypeMapping, TermMapping, UpdateTermMapping, UpdateTermMappingResponse};

    use crate::mapping_api::MappingApiError;

    /// A call observed by [`MockSource`].
    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        CodeTypeMappings,
        TermMappings { agency_name: String, code_list_id: Option<i64> },
        Update { id: i64, payload: UpdateTermMapping },
    }

    /// In-memory mapping source that records calls and replays canned data.
    /// A `fail_status` makes every call fail with that upstream status.
    #[derive(Default)]
    pub struct MockSource {
        pub code_type_mappings: Vec<CodeTypeMapping>,
        pub term_mappings: Vec<TermMapping>,
        pub fail_status: Option<u16>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl MockSource {
        fn failure(&self, method: &'static str, path: &str) -> Option<MappingApiError> {
            self.fail_status.map(|status| MappingApiError::Status {
                method,
                path: path.to_owned(),
                status,
                status_text: String::new(),
                body: None,
            })
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl MappingSource for MockSource {
        async fn fetch_code_type_mappings(&self) -> Result<Vec<CodeTypeMapping>, MappingApiError> {
            self.calls.lock().unwrap().push(Call::CodeTypeMappings);
            match self.failure("GET", "/code-type-mappings") {
                Some(err) => Err(err),
                None => Ok(self.code_type_mappings.clone()),
            }
        }

        async fn fetch_term_mappings(
            &self,
            agency_name: &str,
            code_list_id: Option<i64>,
        ) -> Result<Vec<TermMapping>, MappingApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::TermMappings { agency_name: agency_name.to_owned(), code_list_id });
            match self.failure("GET", "/term-mappings") {
                Some(err) => Err(err),
                None => Ok(self.term_mappings.clone()),
            }
        }

        async fn update_term_mapping(
            &self,
            id: i64,
            payload: &UpdateTermMapping,
        ) -> Result<UpdateTermMappingResponse, MappingApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update { id, payload: payload.clone() });
            match self.failure("PUT", &format!("/term-mappings/{id}")) {
                Some(err) => Err(err),
                None => Ok(UpdateTermMappingResponse { message: format!("Term mapping {id} updated") }),
            }
        }
    }

    /// Create a test `AppState` over a mock source.
    #[must_use]
    pub fn test_app_state(source: Arc<MockSource>) -> AppState {
        AppState::new(source)
    }

    /// Create a dummy `TermMapping` for testing.
    #[must_use]
    pub fn dummy_term_mapping(id: i64) -> TermMapping {
        TermMapping {
            id,
            agency_name: "FDA".into(),
            agency_abbreviation: "FDA".into(),
            code_system_name: "SPL".into(),
            ha_term: format!("HA term {id}"),
            reg_app_term: format!("RA term {id}"),
            vault_uuid: format!("vault-{id}"),
            vault_code_list_name: "Dosage Form".into(),
            confidence_score: Some(0.9),
            mapping_source: Some("auto".into()),
            current_status: None,
            reviewer_comments: None,
            reviewed_by: None,
            review_date: None,
            is_active: true,
        }
    }
}
