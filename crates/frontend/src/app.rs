use crate::domain::a001_log_entry::api::LogService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One service instance for the whole app, handed to the pages explicitly.
    let service = LogService::default();
    log::info!("Log API at {}", service.base_url());

    view! {
        <AppRoutes service=service />
    }
}
