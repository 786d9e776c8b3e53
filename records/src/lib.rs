//! Shared mapping records for the review console.
//!
//! This crate owns the JSON representation used by both `server` and `client`.
//! Field names on the wire follow the upstream data source exactly
//! (`CodeTypeMappingID`, `HA_Code_List`, ...), so every struct carries explicit
//! serde renames while the Rust side stays snake_case.

use serde::{Deserialize, Serialize};


/// Review statuses offered by the edit dialog, in display order.
pub const STATUS_OPTIONS: [&str; 4] = ["Pending", "In Review", "Reviewed", "Rejected"];

// =============================================================================
// RECORDS
// =============================================================================

/// Top-level association between an agency code list and an internal
/// registration-application code list. Read-only in the console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeTypeMapping {
    #[serde(rename = "CodeTypeMappingID")]
    pub id: i64,
    #[serde(rename = "AgencyName")]
    pub agency_name: String,
    #[serde(rename = "AgencyAbbreviation", default)]
    pub agency_abbreviation: String,
    /// Health-authority code list name.
    #[serde(rename = "HA_Code_List")]
    pub ha_code_list: String,
    /// Internal registration-application code list name.
    #[serde(rename = "Reg_App_Code_List")]
    pub reg_app_code_list: String,
    /// Numeric identifier of the health-authority code list.
    #[serde(rename = "HA_CodeListID", default, skip_serializing_if = "Option::is_none")]
    pub ha_code_list_id: Option<i64>,
    #[serde(rename = "MappingConfidenceScore", default)]
    pub confidence_score: Option<f64>,
    #[serde(rename = "MappingSource", default)]
    pub mapping_source: Option<String>,
    #[serde(rename = "CurrentStatus", default)]
    pub current_status: Option<String>,
    #[serde(rename = "ReviewerComments", default)]
    pub reviewer_comments: Option<String>,
}

/// A single term-level correspondence carrying review metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermMapping {
    #[serde(rename = "TermMappingID")]
    pub id: i64,
    #[serde(rename = "AgencyName")]
    pub agency_name: String,
    #[serde(rename = "AgencyAbbreviation", default)]
    pub agency_abbreviation: String,
    #[serde(rename = "CodeSystemName", default)]
    pub code_system_name: String,
    #[serde(rename = "HA_Term")]
    pub ha_term: String,
    #[serde(rename = "Reg_App_Term")]
    pub reg_app_term: String,
    /// Reference into the external content vault.
    #[serde(rename = "VaultUUID", default)]
    pub vault_uuid: String,
    #[serde(rename = "VeevaCodeListName", default)]
    pub vault_code_list_name: String,
    #[serde(rename = "MappingConfidenceScore", default)]
    pub confidence_score: Option<f64>,
    #[serde(rename = "MappingSource", default)]
    pub mapping_source: Option<String>,
    #[serde(rename = "CurrentStatus", default)]
    pub current_status: Option<String>,
    #[serde(rename = "ReviewerComments", default)]
    pub reviewer_comments: Option<String>,
    #[serde(rename = "ReviewedBy", default)]
    pub reviewed_by: Option<String>,
    #[serde(rename = "ReviewDate", default)]
    pub review_date: Option<String>,
    #[serde(rename = "IsActive", default)]
    pub is_active: bool,
}

/// Partial update of a term mapping's review fields.
///
/// `None` fields are omitted from the JSON body so the upstream leaves them
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTermMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

/// Confirmation returned by a successful update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTermMappingResponse {
    pub message: String,
}

/// Error body returned by the console's `/api` routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

// =============================================================================
// STATUS CLASSIFICATION
// =============================================================================

/// Badge styling for a review status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// `reviewed`, any case.
    Success,
    /// `pending`, any case.
    Warning,
    /// Any other non-empty status.
    Neutral,
    /// No status recorded.
    NotSet,
}

impl StatusTone {
    /// Classify a raw status value. Matching is case-insensitive on the value
    /// as stored; only `None` and `""` are [`StatusTone::NotSet`].
    #[must_use]
    pub fn classify(status: Option<&str>) -> Self {
        let Some(raw) = status.filter(|s| !s.is_empty()) else {
            return Self::NotSet;
        };
        if raw.eq_ignore_ascii_case("reviewed") {
            Self::Success
        } else if raw.eq_ignore_ascii_case("pending") {
            Self::Warning
        } else {
            Self::Neutral
        }
    }

    /// CSS modifier suffix for `status-badge--{suffix}`.
    #[must_use]
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
            Self::NotSet => "unset",
        }
    }
}

/// Text shown inside a status badge.
#[must_use]
pub fn status_label(status: Option<&str>) -> String {
    match StatusTone::classify(status) {
        StatusTone::NotSet => "Not set".to_owned(),
        _ => status.unwrap_or_default().to_owned(),
    }
}
