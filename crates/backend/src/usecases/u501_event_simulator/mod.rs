//! Генератор тестового трафика для API логов
//!
//! - events.rs: имитация аутентификации и обработки заказов (чистые функции над `Rng`)
//! - log_api_client.rs: HTTP-клиент, отправляющий записи в `/logs/`
//! - executor.rs: цикл симуляции

pub mod events;
pub mod executor;
pub mod log_api_client;

pub use executor::{SimulationSummary, Simulator};
pub use log_api_client::LogApiClient;
