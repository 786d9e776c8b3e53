//! Detail-route codec for `/mapping/{id}?agencyName=&haCodeList=&internalCodeList=&codeListId=`.
//!
//! The query string is the only channel between the list and detail pages:
//! the detail page rebuilds its filter from the URL alone, so a reload or a
//! shared link shows the same rows.

#[cfg(test)]
#[path = "mapping_route_test.rs"]
mod mapping_route_test;

use records::CodeTypeMapping;

pub const AGENCY_NAME_PARAM: &str = "agencyName";
pub const HA_CODE_LIST_PARAM: &str = "haCodeList";
pub const INTERNAL_CODE_LIST_PARAM: &str = "internalCodeList";
pub const CODE_LIST_ID_PARAM: &str = "codeListId";

/// Filter context carried from a code-type row to the term-mapping page.
/// Missing string parameters decode as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingRoute {
    /// `:id` path segment. Display-only; never used to filter.
    pub mapping_id: String,
    pub agency_name: String,
    pub ha_code_list: String,
    pub internal_code_list: String,
    pub code_list_id: Option<i64>,
}

impl MappingRoute {
    #[must_use]
    pub fn from_row(row: &CodeTypeMapping) -> Self {
        Self {
            mapping_id: row.id.to_string(),
            agency_name: row.agency_name.clone(),
            ha_code_list: row.ha_code_list.clone(),
            internal_code_list: row.reg_app_code_list.clone(),
            code_list_id: row.ha_code_list_id,
        }
    }

    /// Encoded query string without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut pairs = vec![
            (AGENCY_NAME_PARAM, self.agency_name.clone()),
            (HA_CODE_LIST_PARAM, self.ha_code_list.clone()),
            (INTERNAL_CODE_LIST_PARAM, self.internal_code_list.clone()),
        ];
        if let Some(id) = self.code_list_id {
            pairs.push((CODE_LIST_ID_PARAM, id.to_string()));
        }
        pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Navigation target for the detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/mapping/{}?{}", urlencoding::encode(&self.mapping_id), self.query_string())
    }

    /// Rebuild from the `:id` segment and a decoded query lookup, such as the
    /// router's query map.
    pub fn from_lookup(mapping_id: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            mapping_id: mapping_id.unwrap_or_default(),
            agency_name: lookup(AGENCY_NAME_PARAM).unwrap_or_default(),
            ha_code_list: lookup(HA_CODE_LIST_PARAM).unwrap_or_default(),
            internal_code_list: lookup(INTERNAL_CODE_LIST_PARAM).unwrap_or_default(),
            code_list_id: lookup(CODE_LIST_ID_PARAM).and_then(|raw| raw.trim().parse().ok()),
        }
    }

    /// Page heading, e.g. `FDA – Dosage Form`.
    #[must_use]
    pub fn header_title(&self) -> String {
        let agency = if self.agency_name.is_empty() { "Agency" } else { &self.agency_name };
        let code_list = if self.ha_code_list.is_empty() { "Code list" } else { &self.ha_code_list };
        format!("{agency} – {code_list}")
    }
}
