//! Modal editor for a term mapping's review status, comments, and reviewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the term-mappings page while `EditState` has a target. Save
//! sends one `PUT` and, on success, patches the page's row list in place
//! instead of re-fetching. A failed save raises a browser alert and leaves
//! the dialog open.

use leptos::prelude::*;

use records::{STATUS_OPTIONS, TermMapping};

use crate::state::edit::EditState;
use crate::state::list::ListState;

#[component]
pub fn EditTermMappingDialog(edit: RwSignal<EditState>, rows: RwSignal<ListState<TermMapping>>) -> impl IntoView {
    let saving = move || edit.with(|e| e.saving);

    let on_cancel = move || {
        if !edit.with_untracked(|e| e.saving) {
            edit.update(EditState::cancel);
        }
    };

    let on_save = move || {
        let Some(request) = edit.try_update(EditState::begin_save).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_term_mapping(request.id, &request.payload)
                .await
                .map(|_| ());
            let Some(mut items) = rows.try_with_untracked(|list| list.items.clone()) else {
                return;
            };
            let alert = edit
                .try_update(|e| e.finish_save(&request, result, &mut items))
                .flatten();
            match alert {
                None => {
                    let _ = rows.try_update(|list| list.items = items);
                }
                Some(message) => {
                    log::warn!("term mapping {} update failed: {message}", request.id);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, rows);
        }
    };

    let summary = move || {
        edit.with(|e| {
            e.target
                .as_ref()
                .map(|row| format!("{} → {}", row.ha_term, row.reg_app_term))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Mapping"</h2>
                <p class="dialog__summary">{summary}</p>

                <label class="dialog__label">
                    "Current Status"
                    <select
                        class="dialog__input"
                        prop:value=move || edit.with(|e| e.draft.status.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            edit.update(|e| e.draft.status = value);
                        }
                    >
                        <option value="">"Not set"</option>
                        {STATUS_OPTIONS
                            .iter()
                            .map(|status| view! { <option value=*status>{*status}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "Reviewer Comments"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        rows="3"
                        prop:value=move || edit.with(|e| e.draft.comments.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit.update(|e| e.draft.comments = value);
                        }
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Reviewed By"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || edit.with(|e| e.draft.reviewer.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit.update(|e| e.draft.reviewer = value);
                        }
                    />
                </label>

                <Show when=move || edit.with(|e| e.error.is_some())>
                    <p class="dialog__error">{move || edit.with(|e| e.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" disabled=saving on:click=move |_| on_cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=saving on:click=move |_| on_save()>
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
