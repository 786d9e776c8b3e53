//! REST helpers for the console's `/api` mapping endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since loads only start once
//! the page has hydrated in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`; the string is ready to show to the
//! reviewer. Non-2xx responses prefer the server's `{"error": ...}` message
//! and fall back to `"{METHOD} {path} failed: {status} {status_text}"`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{CodeTypeMapping, TermMapping, UpdateTermMapping, UpdateTermMappingResponse};

#[cfg(any(test, feature = "hydrate"))]
const CODE_TYPE_MAPPINGS_ENDPOINT: &str = "/api/code-type-mappings";

#[cfg(any(test, feature = "hydrate"))]
fn term_mappings_endpoint(agency_name: &str, code_list_id: Option<i64>) -> String {
    let mut url = format!("/api/term-mappings?agencyName={}", urlencoding::encode(agency_name));
    if let Some(id) = code_list_id {
        url.push_str(&format!("&codeListId={id}"));
    }
    url
}

#[cfg(any(test, feature = "hydrate"))]
fn term_mapping_endpoint(id: i64) -> String {
    format!("/api/term-mappings/{id}")
}

/// Strip the query string so failure messages name the path only.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint_path(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(method: &str, path: &str, status: u16, status_text: &str) -> String {
    format!("{method} {path} failed: {status} {status_text}").trim_end().to_owned()
}

/// Message for a non-2xx response: the server's `error` field when the body
/// carries one, otherwise the generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(method: &str, path: &str, status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<records::ApiErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(method, path, status, status_text))
}

#[cfg(feature = "hydrate")]
async fn read_failure(method: &str, url: &str, resp: gloo_net::http::Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    let message = failure_message(method, endpoint_path(url), resp.status(), &resp.status_text(), &body);
    log::warn!("{message}");
    message
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("GET {} failed: {e}", endpoint_path(url)))?;
    if !resp.ok() {
        return Err(read_failure("GET", url, resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch every code-type mapping.
///
/// # Errors
///
/// Returns a display-ready message if the request fails or the server
/// responds with a non-OK status.
pub async fn fetch_code_type_mappings() -> Result<Vec<CodeTypeMapping>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(CODE_TYPE_MAPPINGS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch term mappings for an agency, optionally narrowed to a code list.
///
/// # Errors
///
/// Returns a display-ready message if the request fails or the server
/// responds with a non-OK status.
pub async fn fetch_term_mappings(agency_name: &str, code_list_id: Option<i64>) -> Result<Vec<TermMapping>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&term_mappings_endpoint(agency_name, code_list_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (agency_name, code_list_id);
        Err("not available on server".to_owned())
    }
}

/// Send a partial review update via `PUT /api/term-mappings/{id}`.
///
/// # Errors
///
/// Returns a display-ready message, including the server's error text, if
/// the update is rejected.
pub async fn update_term_mapping(id: i64, payload: &UpdateTermMapping) -> Result<UpdateTermMappingResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = term_mapping_endpoint(id);
        let resp = gloo_net::http::Request::put(&url)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| format!("PUT {url} failed: {e}"))?;
        if !resp.ok() {
            return Err(read_failure("PUT", &url, resp).await);
        }
        resp.json::<UpdateTermMappingResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}
