//! Review-status badge shared by both mapping tables.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use records::{StatusTone, status_label};

/// CSS classes for a badge showing `status`.
pub(crate) fn badge_class(status: Option<&str>) -> String {
    format!("status-badge status-badge--{}", StatusTone::classify(status).css_suffix())
}

/// Outlined badge: green for reviewed, amber for pending, grey otherwise, and
/// a dashed "Not set" badge when no status is recorded.
#[component]
pub fn StatusBadge(status: Option<String>) -> impl IntoView {
    let class = badge_class(status.as_deref());
    let label = status_label(status.as_deref());
    view! { <span class=class>{label}</span> }
}
