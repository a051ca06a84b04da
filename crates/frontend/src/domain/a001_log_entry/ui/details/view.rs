use super::view_model::LogDetailsViewModel;
use crate::domain::a001_log_entry::api::LogService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::routes::routes::LOGS_PATH;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LogDetails(service: LogService) -> impl IntoView {
    let vm = LogDetailsViewModel::new();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        vm.submit_command(service.clone(), move || {
            navigate(LOGS_PATH, Default::default());
        });
    };

    view! {
        <PageFrame page_id="a001_log_entry--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"New log"</h1>
                </div>
            </div>

            <div class="page__content">
                <form class="details-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="source">"Source"</label>
                        <input
                            type="text"
                            id="source"
                            prop:value=move || vm.form.get().source
                            on:input=move |ev| {
                                vm.form.update(|f| f.source = event_target_value(&ev));
                            }
                            placeholder="Component or class name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="log">"Message"</label>
                        <textarea
                            id="log"
                            rows="4"
                            prop:value=move || vm.form.get().log
                            on:input=move |ev| {
                                vm.form.update(|f| f.log = event_target_value(&ev));
                            }
                            placeholder="Log message"
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <A href=LOGS_PATH attr:class="btn-secondary">"Cancel"</A>
                        <button type="submit" class="btn-primary">"Submit"</button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
