//! Mapping proxy routes used by the browser.
//!
//! The browser never sees the upstream access token; it calls these
//! same-origin endpoints and the server forwards through `AppState::mappings`.
//! Upstream HTTP failures keep their status code, everything else becomes
//! `502 Bad Gateway`, and the body is always `{"error": message}`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use records::{ApiErrorBody, CodeTypeMapping, TermMapping, UpdateTermMapping, UpdateTermMappingResponse};

use crate::mapping_api::MappingApiError;
use crate::state::AppState;

pub const AGENCY_NAME_REQUIRED: &str = "agencyName is required in query parameters";

/// Error response carrying a status and a human-readable message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<MappingApiError> for ApiError {
    fn from(err: MappingApiError) -> Self {
        Self { status: mapping_error_to_status(&err), message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiErrorBody { error: self.message })).into_response()
    }
}

pub(crate) fn mapping_error_to_status(err: &MappingApiError) -> StatusCode {
    err.status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Query string accepted by `GET /api/term-mappings`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMappingsQuery {
    pub agency_name: Option<String>,
    pub code_list_id: Option<String>,
}

/// Validated filter for a term-mapping fetch.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TermMappingsFilter {
    pub agency_name: String,
    pub code_list_id: Option<i64>,
}

impl TermMappingsQuery {
    /// Reject a missing or blank agency name before any upstream call.
    /// A blank `codeListId` counts as absent.
    pub(crate) fn validate(self) -> Result<TermMappingsFilter, ApiError> {
        let agency_name = self
            .agency_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ApiError::bad_request(AGENCY_NAME_REQUIRED))?;
        let code_list_id = match self.code_list_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| ApiError::bad_request(format!("codeListId must be numeric, got {raw:?}")))?,
            ),
        };
        Ok(TermMappingsFilter { agency_name, code_list_id })
    }
}

/// `GET /api/code-type-mappings`: every code-type mapping.
pub async fn list_code_type_mappings(State(state): State<AppState>) -> Result<Json<Vec<CodeTypeMapping>>, ApiError> {
    let rows = state.mappings.fetch_code_type_mappings().await?;
    tracing::debug!(count = rows.len(), "code-type mappings fetched");
    Ok(Json(rows))
}

/// `GET /api/term-mappings?agencyName=&codeListId=`: term mappings for one agency.
pub async fn list_term_mappings(
    State(state): State<AppState>,
    Query(query): Query<TermMappingsQuery>,
) -> Result<Json<Vec<TermMapping>>, ApiError> {
    let filter = query.validate()?;
    let rows = state
        .mappings
        .fetch_term_mappings(&filter.agency_name, filter.code_list_id)
        .await?;
    tracing::debug!(agency = %filter.agency_name, count = rows.len(), "term mappings fetched");
    Ok(Json(rows))
}

/// `PUT /api/term-mappings/{id}`: update review fields on one term mapping.
pub async fn update_term_mapping(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTermMapping>,
) -> Result<Json<UpdateTermMappingResponse>, ApiError> {
    let response = state.mappings.update_term_mapping(id, &payload).await?;
    tracing::info!(term_mapping_id = id, "term mapping review updated");
    Ok(Json(response))
}

#[cfg(test)]
#[path = "mappings_test.rs"]
mod tests;
