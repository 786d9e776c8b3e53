//! Root application component with routing and breadcrumb layout.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{code_type_mappings::CodeTypeMappingsPage, term_mappings::TermMappingsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Whether `pathname` is a term-mapping detail route.
pub(crate) fn is_detail_path(pathname: &str) -> bool {
    pathname.starts_with("/mapping/")
}

/// Root application component.
///
/// Pages own their state; nothing is shared through context beyond the
/// router itself, so the detail page depends only on its URL.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mapping-console.css"/>
        <Title text="Code Mapping Review"/>

        <Router>
            <main class="console">
                <Breadcrumbs/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CodeTypeMappingsPage/>
                    <Route path=(StaticSegment("mapping"), ParamSegment("id")) view=TermMappingsPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// "Code Types / Term Mapping" trail above every page.
#[component]
fn Breadcrumbs() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            <a href="/" class="breadcrumbs__link">
                "Code Types"
            </a>
            <Show when=move || is_detail_path(&location.pathname.get())>
                <span class="breadcrumbs__sep">"/"</span>
                <span class="breadcrumbs__current">"Term Mapping"</span>
            </Show>
        </nav>
    }
}
