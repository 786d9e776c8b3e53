//! reqwest-backed client for the upstream mapping service.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use records::{CodeTypeMapping, TermMapping, UpdateTermMapping, UpdateTermMappingResponse};

use super::types::{MappingApiError, MappingSource};
use crate::config::MappingApiConfig;

const CODE_TYPE_MAPPINGS_PATH: &str = "/code-type-mappings";
const TERM_MAPPINGS_PATH: &str = "/term-mappings";

pub struct MappingApiClient {
    http: reqwest::Client,
    base_url: String,
    code: String,
}

impl MappingApiClient {
    /// Build a client from parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`MappingApiError::HttpClientBuild`] if reqwest cannot build
    /// its connection pool (e.g. TLS backend initialization fails).
    pub fn new(config: &MappingApiConfig) -> Result<Self, MappingApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| MappingApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            code: config.code.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, MappingApiError> {
        tracing::debug!(%path, "upstream GET");
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .query(&[("code", self.code.as_str())])
            .send()
            .await
            .map_err(|e| request_error("GET", path, &e))?;

        let response = check_status("GET", path, response, false).await?;
        response.json::<T>().await.map_err(|e| MappingApiError::Decode {
            method: "GET",
            path: path.to_owned(),
            message: e.to_string(),
        })
    }

    async fn put_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T, MappingApiError> {
        tracing::debug!(%path, "upstream PUT");
        let response = self
            .http
            .put(self.url(path))
            .query(&[("code", self.code.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| request_error("PUT", path, &e))?;

        let response = check_status("PUT", path, response, true).await?;
        response.json::<T>().await.map_err(|e| MappingApiError::Decode {
            method: "PUT",
            path: path.to_owned(),
            message: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl MappingSource for MappingApiClient {
    async fn fetch_code_type_mappings(&self) -> Result<Vec<CodeTypeMapping>, MappingApiError> {
        self.get_json(CODE_TYPE_MAPPINGS_PATH, &[]).await
    }

    async fn fetch_term_mappings(
        &self,
        agency_name: &str,
        code_list_id: Option<i64>,
    ) -> Result<Vec<TermMapping>, MappingApiError> {
        self.get_json(TERM_MAPPINGS_PATH, &term_mappings_query(agency_name, code_list_id))
            .await
    }

    async fn update_term_mapping(
        &self,
        id: i64,
        payload: &UpdateTermMapping,
    ) -> Result<UpdateTermMappingResponse, MappingApiError> {
        self.put_json(&term_mapping_path(id), payload).await
    }
}

pub(crate) fn term_mapping_path(id: i64) -> String {
    format!("{TERM_MAPPINGS_PATH}/{id}")
}

pub(crate) fn term_mappings_query(agency_name: &str, code_list_id: Option<i64>) -> Vec<(&'static str, String)> {
    let mut query = vec![("agencyName", agency_name.to_owned())];
    if let Some(id) = code_list_id {
        query.push(("codeListId", id.to_string()));
    }
    query
}

fn request_error(method: &'static str, path: &str, err: &reqwest::Error) -> MappingApiError {
    tracing::warn!(%method, %path, error = %err, "upstream request failed");
    MappingApiError::Request { method, path: path.to_owned(), message: err.to_string() }
}

/// Pass 2xx responses through; turn anything else into [`MappingApiError::Status`].
async fn check_status(
    method: &'static str,
    path: &str,
    response: Response,
    with_body: bool,
) -> Result<Response, MappingApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = if with_body { Some(response.text().await.unwrap_or_default()) } else { None };
    tracing::warn!(%method, %path, status = status.as_u16(), "upstream returned error status");
    Err(MappingApiError::Status {
        method,
        path: path.to_owned(),
        status: status.as_u16(),
        status_text: status_text(status),
        body,
    })
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_owned()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
