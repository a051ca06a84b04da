use anyhow::Result;
use contracts::domain::a001_log_entry::aggregate::LogEntry;

/// HTTP-клиент для отправки записей в API логов
pub struct LogApiClient {
    client: reqwest::Client,
    logs_url: String,
}

impl LogApiClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            logs_url: format!("{}/logs/", api_url.trim_end_matches('/')),
        })
    }

    pub fn logs_url(&self) -> &str {
        &self.logs_url
    }

    /// Отправить одну запись, вернуть её с присвоенным id
    pub async fn send(&self, entry: &LogEntry) -> Result<LogEntry> {
        let response = self
            .client
            .post(&self.logs_url)
            .json(entry)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<LogEntry>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_url_has_single_slash() {
        let client = LogApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.logs_url(), "http://127.0.0.1:8000/logs/");
    }
}
