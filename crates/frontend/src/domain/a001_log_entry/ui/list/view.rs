use super::view_model::LogListViewModel;
use crate::domain::a001_log_entry::api::LogService;
use crate::routes::routes::ADD_LOG_PATH;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn LogList(service: LogService) -> impl IntoView {
    let vm = LogListViewModel::new();
    vm.load_command(service.clone());

    let clear_service = service.clone();
    let row_service = StoredValue::new(service);

    view! {
        <PageFrame page_id="a001_log_entry--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Logs"</h1>
                    <Badge>
                        {move || vm.logs.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <A href=ADD_LOG_PATH attr:class="btn-primary">
                        {icon("plus")}
                        " Add log"
                    </A>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.clear_command(clear_service.clone())
                    >
                        {icon("delete")}
                        " Clear all"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <table class="log-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Time"</th>
                            <th>"Source"</th>
                            <th>"Message"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.logs.get()
                            key=|entry| entry.id
                            children=move |entry| {
                                let id = entry.id;
                                view! {
                                    <tr>
                                        <td>{id.map(|v| v.to_string()).unwrap_or_default()}</td>
                                        <td>{format_timestamp(entry.timestamp)}</td>
                                        <td>{entry.source}</td>
                                        <td class="log-table__message">{entry.log}</td>
                                        <td>
                                            {id.map(|id| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| vm.delete_command(row_service.get_value(), id)
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
