use crate::domain::a001_log_entry::api::LogService;
use crate::domain::a001_log_entry::ui::details::LogDetails;
use crate::domain::a001_log_entry::ui::list::LogList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Log list page.
pub const LOGS_PATH: &str = "/logs";
/// Add-log form.
pub const ADD_LOG_PATH: &str = "/add-log";

#[component]
pub fn AppRoutes(service: LogService) -> impl IntoView {
    let list_service = service.clone();
    let form_service = service;

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="page__not-found">"Not found"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=LOGS_PATH /> } />
                    <Route
                        path=path!("/logs")
                        view=move || view! { <LogList service=list_service.clone() /> }
                    />
                    <Route
                        path=path!("/add-log")
                        view=move || view! { <LogDetails service=form_service.clone() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
