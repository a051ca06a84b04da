use contracts::domain::a001_log_entry::aggregate::LogEntry;
use leptos::prelude::*;

use crate::domain::a001_log_entry::api::{ApiError, LogApi, LogService};

/// Result of a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `source` or `log` was empty; no request was made.
    Skipped,
    Created(LogEntry),
    Failed(ApiError),
}

/// ViewModel for the add-log form
#[derive(Clone, Copy)]
pub struct LogDetailsViewModel {
    pub form: RwSignal<LogEntry>,
}

impl LogDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(LogEntry::draft()),
        }
    }

    /// Send the draft once. `on_created` runs after the server accepted it.
    pub fn submit_command<F>(&self, service: LogService, on_created: F)
    where
        F: FnOnce() + 'static,
    {
        let draft = self.form.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            submit_log(&service, &draft, on_created).await;
        });
    }
}

impl Default for LogDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn submit_log<A, F>(api: &A, draft: &LogEntry, on_created: F) -> SubmitOutcome
where
    A: LogApi + ?Sized,
    F: FnOnce(),
{
    if !draft.has_required_fields() {
        return SubmitOutcome::Skipped;
    }

    match api.add_log(draft).await {
        Ok(created) => {
            log::debug!("Log created with id {:?}", created.id);
            on_created();
            SubmitOutcome::Created(created)
        }
        Err(e) => {
            log::error!("Error adding log: {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}
