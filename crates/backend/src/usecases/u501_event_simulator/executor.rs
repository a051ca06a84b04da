use contracts::domain::a001_log_entry::aggregate::LogEntry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use super::events::{pause, AuthAttempt, OrderAttempt, FIRST_ORDER_ID};
use super::log_api_client::LogApiClient;

/// Counters for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub iterations: u64,
    pub sent: u64,
    pub failed: u64,
}

/// Runs authentication + order iterations against the log API.
pub struct Simulator {
    client: LogApiClient,
    rng: StdRng,
    realtime: bool,
    next_order_id: u64,
    summary: SimulationSummary,
}

impl Simulator {
    pub fn new(client: LogApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    pub fn with_rng(client: LogApiClient, rng: StdRng) -> Self {
        Self {
            client,
            rng,
            realtime: true,
            next_order_id: FIRST_ORDER_ID,
            summary: SimulationSummary::default(),
        }
    }

    /// Skip the simulated processing time and the pause between iterations.
    pub fn without_delays(mut self) -> Self {
        self.realtime = false;
        self
    }

    pub fn summary(&self) -> SimulationSummary {
        self.summary
    }

    /// Loop until `duration` has elapsed. Each iteration posts two entries.
    pub async fn run(&mut self, duration: Duration) -> SimulationSummary {
        tracing::info!(
            "Starting simulator for {} seconds against {}",
            duration.as_secs(),
            self.client.logs_url()
        );

        let started = Instant::now();
        while started.elapsed() < duration {
            self.step().await;
            let wait = pause(&mut self.rng);
            self.sleep(wait).await;
        }

        tracing::info!(
            iterations = self.summary.iterations,
            sent = self.summary.sent,
            failed = self.summary.failed,
            "Simulator finished"
        );
        self.summary
    }

    /// One authentication followed by one order.
    pub async fn step(&mut self) {
        let auth = AuthAttempt::simulate(&mut self.rng);
        self.sleep(auth.elapsed).await;
        self.post(auth.to_entry()).await;

        let order = OrderAttempt::simulate(&mut self.rng, self.next_order_id);
        self.next_order_id += 1;
        self.sleep(order.elapsed).await;
        self.post(order.to_entry()).await;

        self.summary.iterations += 1;
    }

    async fn post(&mut self, entry: LogEntry) {
        match self.client.send(&entry).await {
            Ok(created) => {
                self.summary.sent += 1;
                tracing::debug!(id = ?created.id, source = %created.source, "log sent");
            }
            Err(e) => {
                self.summary.failed += 1;
                tracing::error!("Failed to send log: {:#}", e);
            }
        }
    }

    async fn sleep(&self, duration: Duration) {
        if self.realtime {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_log_entry::service;
    use crate::routes::configure_routes;
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::state::AppState;
    use crate::usecases::u501_event_simulator::events::{AUTH_SOURCE, ORDER_SOURCE};

    #[tokio::test]
    async fn step_posts_auth_and_order_entries() {
        let db = connect_in_memory().await.unwrap();
        let app = configure_routes(AppState::new(db.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = LogApiClient::new(&format!("http://{}", addr)).unwrap();
        let mut simulator = Simulator::with_rng(client, StdRng::seed_from_u64(3)).without_delays();
        simulator.step().await;
        simulator.step().await;

        assert_eq!(
            simulator.summary(),
            SimulationSummary { iterations: 2, sent: 4, failed: 0 }
        );

        let logs = service::list_all(&db).await.unwrap();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs.iter().filter(|e| e.source == AUTH_SOURCE).count(), 2);
        assert_eq!(logs.iter().filter(|e| e.source == ORDER_SOURCE).count(), 2);
        assert!(logs.iter().any(|e| e.log.contains("1000")));
        assert!(logs.iter().any(|e| e.log.contains("1001")));
    }

    #[tokio::test]
    async fn unreachable_api_counts_failures() {
        // Nothing listens on the discard port.
        let client = LogApiClient::new("http://127.0.0.1:9").unwrap();
        let mut simulator = Simulator::with_rng(client, StdRng::seed_from_u64(5)).without_delays();
        simulator.step().await;

        assert_eq!(
            simulator.summary(),
            SimulationSummary { iterations: 1, sent: 0, failed: 2 }
        );
    }
}
