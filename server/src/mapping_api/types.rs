//! Mapping API error type and the source trait used by routes.

use records::{CodeTypeMapping, TermMapping, UpdateTermMapping, UpdateTermMappingResponse};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by mapping API operations.
#[derive(Debug, thiserror::Error)]
pub enum MappingApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (bad URL, DNS, connect, timeout).
    #[error("{method} {path} request failed: {message}")]
    Request { method: &'static str, path: String, message: String },

    /// The upstream answered with a non-success status.
    #[error("{method} {path} failed: {status} {status_text}{}", body_suffix(.body))]
    Status { method: &'static str, path: String, status: u16, status_text: String, body: Option<String> },

    /// The upstream answered 2xx but the body was not the expected JSON.
    #[error("{method} {path} returned an unreadable body: {message}")]
    Decode { method: &'static str, path: String, message: String },
}

impl MappingApiError {
    /// Upstream HTTP status, when the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn body_suffix(body: &Option<String>) -> String {
    match body.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(" - {text}"),
        _ => String::new(),
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Read/update access to code-type and term mappings.
#[async_trait::async_trait]
pub trait MappingSource: Send + Sync {
    /// Fetch every code-type mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingApiError`] on transport failure, non-2xx status, or
    /// malformed JSON.
    async fn fetch_code_type_mappings(&self) -> Result<Vec<CodeTypeMapping>, MappingApiError>;

    /// Fetch term mappings for one agency, optionally narrowed to a code list.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MappingSource::fetch_code_type_mappings`].
    async fn fetch_term_mappings(
        &self,
        agency_name: &str,
        code_list_id: Option<i64>,
    ) -> Result<Vec<TermMapping>, MappingApiError>;

    /// Apply a partial review update to a term mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingApiError`]; HTTP failures include the response body.
    async fn update_term_mapping(
        &self,
        id: i64,
        payload: &UpdateTermMapping,
    ) -> Result<UpdateTermMappingResponse, MappingApiError>;
}
