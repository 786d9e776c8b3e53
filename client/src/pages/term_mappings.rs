//! Term-mapping page for one agency / code list, with the edit dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is a function of its URL: `:id` is shown for context only, while
//! `agencyName` and `codeListId` drive the fetch. Changing either re-runs the
//! load. A missing agency name fails locally without touching the network.

#[cfg(test)]
#[path = "term_mappings_test.rs"]
mod term_mappings_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use records::TermMapping;

use crate::components::edit_term_mapping_dialog::EditTermMappingDialog;
use crate::components::status_badge::StatusBadge;
use crate::state::edit::EditState;
use crate::state::list::{ListState, TableRows};
use crate::util::mapping_route::MappingRoute;

pub const AGENCY_NAME_REQUIRED: &str = "agencyName is required in query parameters";

/// Validate the filter, then fetch. `fetch` is never called without an agency.
///
/// # Errors
///
/// Returns [`AGENCY_NAME_REQUIRED`] for a blank agency, or whatever `fetch` fails with.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn load_term_mappings<F, Fut>(
    agency_name: &str,
    code_list_id: Option<i64>,
    fetch: F,
) -> Result<Vec<TermMapping>, String>
where
    F: FnOnce(String, Option<i64>) -> Fut,
    Fut: std::future::Future<Output = Result<Vec<TermMapping>, String>>,
{
    if agency_name.trim().is_empty() {
        return Err(AGENCY_NAME_REQUIRED.to_owned());
    }
    fetch(agency_name.to_owned(), code_list_id).await
}

#[component]
pub fn TermMappingsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let route = Memo::new(move |_| MappingRoute::from_lookup(params.read().get("id"), |key| query.read().get(key)));
    let filter = Memo::new(move |_| route.with(|r| (r.agency_name.clone(), r.code_list_id)));

    let terms = RwSignal::new(ListState::<TermMapping>::default());
    let edit = RwSignal::new(EditState::default());

    // Reload whenever the agency or code-list filter changes. A newer load
    // supersedes the ticket of any fetch still in flight.
    Effect::new(move || {
        let (agency_name, code_list_id) = filter.get();
        let Some(ticket) = terms.try_update(ListState::begin_load) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = load_term_mappings(&agency_name, code_list_id, |agency, id| async move {
                crate::net::api::fetch_term_mappings(&agency, id).await
            })
            .await;
            if let Err(e) = &result {
                log::warn!("term mappings load failed: {e}");
            }
            let applied = terms.try_update(|s| s.finish_load(ticket, result));
            if applied == Some(false) {
                log::debug!("dropped stale term mappings for {agency_name}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (agency_name, code_list_id, ticket);
        }
    });

    let header_title = move || route.with(MappingRoute::header_title);
    let internal_code_list = move || {
        route.with(|r| {
            if r.internal_code_list.is_empty() { "-".to_owned() } else { r.internal_code_list.clone() }
        })
    };
    let mapping_id = move || route.with(|r| r.mapping_id.clone());

    view! {
        <section class="page">
            <div class="page__header">
                <a class="icon-btn" href="/" title="Back to code types">"←"</a>
                <h1 class="page__title">{header_title}</h1>
            </div>
            <p class="page__subtitle">
                "Internal code list: " <strong>{internal_code_list}</strong>
                " | Mapping ID: " <strong>{mapping_id}</strong>
            </p>

            <Show when=move || terms.with(|s| s.loading)>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || terms.with(|s| s.error.is_some())>
                <p class="page__error">{move || terms.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show when=move || terms.with(ListState::shows_table)>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"HA Term"</th>
                            <th>"Reg App Term"</th>
                            <th>"Code System"</th>
                            <th>"Status"</th>
                            <th>"Reviewer Comments"</th>
                            <th class="table__action">"Edit"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            terms
                                .with(|s| match s.table_rows() {
                                    TableRows::Placeholder => {
                                        view! {
                                            <tr>
                                                <td colspan="6" class="table__empty">"No term mappings found."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                    TableRows::Rows(rows) => {
                                        rows.iter()
                                            .map(|row| term_row(row, edit))
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }
                                })
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || edit.with(EditState::is_open)>
                <EditTermMappingDialog edit=edit rows=terms/>
            </Show>
        </section>
    }
}

fn term_row(row: &TermMapping, edit: RwSignal<EditState>) -> impl IntoView + use<> {
    let comments = row
        .reviewer_comments
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "-".to_owned());
    let target = row.clone();
    view! {
        <tr class="table__row">
            <td>{row.ha_term.clone()}</td>
            <td>{row.reg_app_term.clone()}</td>
            <td>{row.code_system_name.clone()}</td>
            <td>
                <StatusBadge status=row.current_status.clone()/>
            </td>
            <td>{comments}</td>
            <td class="table__action">
                <button class="icon-btn" title="Edit mapping" on:click=move |_| edit.update(|e| e.open(&target))>
                    "✎"
                </button>
            </td>
        </tr>
    }
}
