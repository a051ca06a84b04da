//! Log access service.
//!
//! One method per endpoint of the log API. Each call issues exactly one
//! request; failures are returned as-is, nothing is cached or retried.

use std::future::Future;

use async_trait::async_trait;
use contracts::domain::a001_log_entry::aggregate::{Acknowledgment, LogEntry};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::api_base;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, CORS, ...).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The server answered with a non-2xx status.
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    /// A 2xx response whose body is not the expected JSON.
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// The operations the views need from the log API.
#[async_trait(?Send)]
pub trait LogApi {
    async fn get_all_logs(&self) -> Result<Vec<LogEntry>, ApiError>;

    /// The caller is responsible for the presence check on `source` and `log`.
    async fn add_log(&self, entry: &LogEntry) -> Result<LogEntry, ApiError>;

    async fn update_log(&self, id: i64, entry: &LogEntry) -> Result<LogEntry, ApiError>;

    async fn delete_log(&self, id: i64) -> Result<Acknowledgment, ApiError>;

    async fn clear_all_logs(&self) -> Result<Acknowledgment, ApiError>;
}

/// HTTP implementation of [`LogApi`] on top of `gloo-net`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogService {
    base_url: String,
}

impl Default for LogService {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl LogService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/logs/", self.base_url)
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/logs/{}/", self.base_url, id)
    }

    pub fn clear_all_url(&self) -> String {
        format!("{}/logs/clear-all/", self.base_url)
    }
}

async fn dispatch<F>(url: &str, pending: F) -> Result<Response, ApiError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let response = pending.await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Delete responses are opaque: keep `detail` when the body has one, the raw text otherwise.
async fn acknowledge(url: &str, response: Response) -> Result<Acknowledgment, ApiError> {
    let text = response.text().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    Ok(serde_json::from_str::<Acknowledgment>(&text)
        .unwrap_or_else(|_| Acknowledgment::new(text)))
}

fn encode(
    url: &str,
    builder: gloo_net::http::RequestBuilder,
    entry: &LogEntry,
) -> Result<Request, ApiError> {
    builder.json(entry).map_err(|e| ApiError::Transport {
        url: url.to_string(),
        message: format!("failed to serialize request: {}", e),
    })
}

#[async_trait(?Send)]
impl LogApi for LogService {
    async fn get_all_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let response = dispatch(&url, Request::get(&url).send()).await?;
        decode(&url, response).await
    }

    async fn add_log(&self, entry: &LogEntry) -> Result<LogEntry, ApiError> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        let request = encode(&url, Request::post(&url), entry)?;
        let response = dispatch(&url, request.send()).await?;
        decode(&url, response).await
    }

    async fn update_log(&self, id: i64, entry: &LogEntry) -> Result<LogEntry, ApiError> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let request = encode(&url, Request::put(&url), entry)?;
        let response = dispatch(&url, request.send()).await?;
        decode(&url, response).await
    }

    async fn delete_log(&self, id: i64) -> Result<Acknowledgment, ApiError> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let response = dispatch(&url, Request::delete(&url).send()).await?;
        acknowledge(&url, response).await
    }

    async fn clear_all_logs(&self) -> Result<Acknowledgment, ApiError> {
        let url = self.clear_all_url();
        log::debug!("DELETE {}", url);
        let response = dispatch(&url, Request::delete(&url).send()).await?;
        acknowledge(&url, response).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_api_layout() {
        let service = LogService::new("http://localhost:8000");
        assert_eq!(service.collection_url(), "http://localhost:8000/logs/");
        assert_eq!(service.item_url(5), "http://localhost:8000/logs/5/");
        assert_eq!(service.clear_all_url(), "http://localhost:8000/logs/clear-all/");
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let service = LogService::new("http://example.com:9000/");
        assert_eq!(service.base_url(), "http://example.com:9000");
        assert_eq!(service.item_url(42), "http://example.com:9000/logs/42/");
    }

    #[test]
    fn default_service_uses_api_base() {
        assert_eq!(LogService::default().base_url(), api_base());
    }

    #[test]
    fn error_messages_name_the_url() {
        let err = ApiError::Status {
            url: "http://localhost:8000/logs/".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost:8000/logs/ responded with HTTP 500"
        );
    }
}
