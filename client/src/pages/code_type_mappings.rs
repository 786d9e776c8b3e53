//! Landing page listing every code-type mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full list once per mount. Each row links to the term-mapping
//! page with its agency and code-list context encoded in the query string;
//! that URL is the only state handed to the detail page.

use leptos::prelude::*;

use records::CodeTypeMapping;

use crate::components::status_badge::StatusBadge;
use crate::state::list::{ListState, TableRows};
use crate::util::mapping_route::MappingRoute;

#[component]
pub fn CodeTypeMappingsPage() -> impl IntoView {
    let mappings = RwSignal::new(ListState::<CodeTypeMapping>::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(ticket) = mappings.try_update(ListState::begin_load) else {
            return;
        };
        let result = crate::net::api::fetch_code_type_mappings().await;
        if let Err(e) = &result {
            log::warn!("code-type mappings load failed: {e}");
        }
        let _ = mappings.try_update(|s| s.finish_load(ticket, result));
    });

    view! {
        <section class="page">
            <h1 class="page__title">"Code Type Mappings"</h1>
            <p class="page__subtitle">
                "Select an Agency / Code List to view and update detailed term mappings."
            </p>

            <Show when=move || mappings.with(|s| s.loading)>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || mappings.with(|s| s.error.is_some())>
                <p class="page__error">{move || mappings.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show when=move || mappings.with(ListState::shows_table)>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Agency"</th>
                            <th>"HA Code List"</th>
                            <th>"Internal Code List"</th>
                            <th>"Status"</th>
                            <th class="table__action">"Details"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            mappings
                                .with(|s| match s.table_rows() {
                                    TableRows::Placeholder => {
                                        view! {
                                            <tr>
                                                <td colspan="5" class="table__empty">"No mappings found."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                    TableRows::Rows(rows) => {
                                        rows.iter().map(code_type_row).collect::<Vec<_>>().into_any()
                                    }
                                })
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

fn code_type_row(row: &CodeTypeMapping) -> impl IntoView + use<> {
    let href = MappingRoute::from_row(row).href();
    view! {
        <tr class="table__row">
            <td>
                <div>{row.agency_name.clone()}</div>
                <div class="table__caption">{row.agency_abbreviation.clone()}</div>
            </td>
            <td>{row.ha_code_list.clone()}</td>
            <td>{row.reg_app_code_list.clone()}</td>
            <td>
                <StatusBadge status=row.current_status.clone()/>
            </td>
            <td class="table__action">
                <a class="icon-btn" href=href title="View term mappings">"›"</a>
            </td>
        </tr>
    }
}
