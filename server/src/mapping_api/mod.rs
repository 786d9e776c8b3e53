//! Mapping API: client for the upstream code-mapping REST service.
//!
//! DESIGN
//! ======
//! Routes depend on the [`MappingSource`] trait rather than the concrete
//! reqwest client so they can be exercised against an in-memory source.
//! [`MappingApiClient`] is the only production implementation; it appends the
//! shared access token to every request and turns any non-2xx response into a
//! [`MappingApiError::Status`].

pub mod client;
pub mod types;

pub use client::MappingApiClient;
pub use types::{MappingApiError, MappingSource};
