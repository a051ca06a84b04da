use contracts::domain::a001_log_entry::aggregate::LogEntry;
use leptos::prelude::*;

use crate::domain::a001_log_entry::api::{LogApi, LogService};

/// ViewModel for the log list page
#[derive(Clone, Copy)]
pub struct LogListViewModel {
    pub logs: RwSignal<Vec<LogEntry>>,
}

impl LogListViewModel {
    pub fn new() -> Self {
        Self {
            logs: RwSignal::new(Vec::new()),
        }
    }

    /// Fetch the list once. On failure the current list is left as it is.
    pub fn load_command(&self, service: LogService) {
        let logs = self.logs;
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(items) = load_logs(&service).await {
                logs.set(items);
            }
        });
    }

    pub fn delete_command(&self, service: LogService, id: i64) {
        let logs = self.logs;
        wasm_bindgen_futures::spawn_local(async move {
            if delete_log(&service, id).await {
                logs.update(|items| remove_entry(items, id));
            }
        });
    }

    pub fn clear_command(&self, service: LogService) {
        let logs = self.logs;
        wasm_bindgen_futures::spawn_local(async move {
            if clear_logs(&service).await {
                logs.set(Vec::new());
            }
        });
    }
}

impl Default for LogListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Entries in server order, or `None` if the request failed.
pub async fn load_logs<A: LogApi + ?Sized>(api: &A) -> Option<Vec<LogEntry>> {
    match api.get_all_logs().await {
        Ok(items) => {
            log::debug!("Loaded {} log entries", items.len());
            Some(items)
        }
        Err(e) => {
            log::error!("Error loading logs: {}", e);
            None
        }
    }
}

pub async fn delete_log<A: LogApi + ?Sized>(api: &A, id: i64) -> bool {
    match api.delete_log(id).await {
        Ok(ack) => {
            log::debug!("{}", ack.detail);
            true
        }
        Err(e) => {
            log::error!("Error deleting log {}: {}", id, e);
            false
        }
    }
}

pub async fn clear_logs<A: LogApi + ?Sized>(api: &A) -> bool {
    match api.clear_all_logs().await {
        Ok(ack) => {
            log::debug!("{}", ack.detail);
            true
        }
        Err(e) => {
            log::error!("Error clearing logs: {}", e);
            false
        }
    }
}

pub fn remove_entry(items: &mut Vec<LogEntry>, id: i64) {
    items.retain(|entry| entry.id != Some(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_log_entry::api::testing::{Call, FakeLogApi};

    fn entry(id: i64, source: &str) -> LogEntry {
        let mut e = LogEntry::new(source, format!("message {}", id));
        e.id = Some(id);
        e
    }

    #[tokio::test]
    async fn load_keeps_server_order() {
        let api = FakeLogApi::with_entries(vec![
            entry(3, "OrderProcessor"),
            entry(1, "UserAuthenticator"),
            entry(2, "OrderProcessor"),
        ]);

        let items = load_logs(&api).await.expect("list should load");

        assert_eq!(items.len(), 3);
        let ids: Vec<_> = items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
        assert_eq!(api.calls(), vec![Call::GetAll]);
    }

    #[tokio::test]
    async fn load_failure_yields_nothing() {
        let api = FakeLogApi::failing(500);
        assert_eq!(load_logs(&api).await, None);
        assert_eq!(api.calls(), vec![Call::GetAll]);
    }

    #[tokio::test]
    async fn delete_targets_only_given_id() {
        let api = FakeLogApi::with_entries(vec![entry(5, "a"), entry(6, "b")]);
        assert!(delete_log(&api, 5).await);
        assert_eq!(api.calls(), vec![Call::Delete(5)]);
    }

    #[tokio::test]
    async fn clear_issues_single_request_for_any_list_size() {
        let many: Vec<_> = (1..=50).map(|i| entry(i, "bulk")).collect();
        let api = FakeLogApi::with_entries(many);
        assert!(clear_logs(&api).await);
        assert_eq!(api.calls(), vec![Call::ClearAll]);

        let empty = FakeLogApi::default();
        assert!(clear_logs(&empty).await);
        assert_eq!(empty.calls(), vec![Call::ClearAll]);
    }

    #[tokio::test]
    async fn failed_delete_reports_false() {
        let api = FakeLogApi::failing(404);
        assert!(!delete_log(&api, 9).await);
    }

    #[test]
    fn remove_entry_drops_matching_id_only() {
        let mut items = vec![entry(1, "a"), entry(2, "b"), entry(3, "c")];
        remove_entry(&mut items, 2);
        let ids: Vec<_> = items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }
}
