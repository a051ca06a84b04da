use chrono::Utc;
use contracts::domain::a001_log_entry::aggregate::LogEntry;
use rand::Rng;
use std::time::Duration;

pub const AUTH_SOURCE: &str = "UserAuthenticator";
pub const ORDER_SOURCE: &str = "OrderProcessor";

/// First order id handed out by a simulation run.
pub const FIRST_ORDER_ID: u64 = 1000;

const AUTH_SUCCESS_RATE: f64 = 0.9;
const ORDER_FAILURE_RATE: f64 = 0.2;

/// One simulated login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthAttempt {
    pub user_id: String,
    pub elapsed: Duration,
    pub authenticated: bool,
}

impl AuthAttempt {
    pub fn simulate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            user_id: format!("user_{}", rng.gen_range(1..=100)),
            elapsed: Duration::from_secs_f64(rng.gen_range(0.1..0.5)),
            authenticated: rng.gen::<f64>() < AUTH_SUCCESS_RATE,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "User {} authentication {} (time: {:.2}s)",
            self.user_id,
            if self.authenticated { "successful" } else { "failed" },
            self.elapsed.as_secs_f64()
        )
    }

    pub fn to_entry(&self) -> LogEntry {
        stamped(AUTH_SOURCE, self.message())
    }
}

/// One simulated order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAttempt {
    pub order_id: u64,
    pub elapsed: Duration,
    pub payment_failed: bool,
}

impl OrderAttempt {
    pub fn simulate<R: Rng + ?Sized>(rng: &mut R, order_id: u64) -> Self {
        Self {
            order_id,
            elapsed: Duration::from_secs_f64(rng.gen_range(0.5..2.0)),
            payment_failed: rng.gen::<f64>() < ORDER_FAILURE_RATE,
        }
    }

    pub fn message(&self) -> String {
        if self.payment_failed {
            format!(
                "ERROR: Failed to process order {}: Payment processing failed",
                self.order_id
            )
        } else {
            format!(
                "Order {} processed successfully in {:.2}s",
                self.order_id,
                self.elapsed.as_secs_f64()
            )
        }
    }

    pub fn to_entry(&self) -> LogEntry {
        stamped(ORDER_SOURCE, self.message())
    }
}

/// Pause between two iterations of the simulation loop.
pub fn pause<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_secs_f64(rng.gen_range(0.5..2.0))
}

fn stamped(source: &str, message: String) -> LogEntry {
    let mut entry = LogEntry::new(source, message);
    entry.timestamp = Some(Utc::now());
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn auth_message_format() {
        let attempt = AuthAttempt {
            user_id: "user_42".into(),
            elapsed: Duration::from_millis(230),
            authenticated: true,
        };
        assert_eq!(
            attempt.message(),
            "User user_42 authentication successful (time: 0.23s)"
        );

        let failed = AuthAttempt {
            authenticated: false,
            ..attempt
        };
        assert!(failed.message().contains("authentication failed"));
    }

    #[test]
    fn order_message_format() {
        let ok = OrderAttempt {
            order_id: 1001,
            elapsed: Duration::from_millis(1500),
            payment_failed: false,
        };
        assert_eq!(ok.message(), "Order 1001 processed successfully in 1.50s");

        let failed = OrderAttempt {
            payment_failed: true,
            ..ok
        };
        assert_eq!(
            failed.message(),
            "ERROR: Failed to process order 1001: Payment processing failed"
        );
    }

    #[test]
    fn simulated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..200 {
            let auth = AuthAttempt::simulate(&mut rng);
            let n: u32 = auth.user_id.trim_start_matches("user_").parse().unwrap();
            assert!((1..=100).contains(&n));
            assert!(auth.elapsed >= Duration::from_millis(100));
            assert!(auth.elapsed < Duration::from_millis(500));

            let order = OrderAttempt::simulate(&mut rng, FIRST_ORDER_ID + i);
            assert_eq!(order.order_id, FIRST_ORDER_ID + i);
            assert!(order.elapsed >= Duration::from_millis(500));
            assert!(order.elapsed < Duration::from_secs(2));

            let p = pause(&mut rng);
            assert!(p >= Duration::from_millis(500) && p < Duration::from_secs(2));
        }
    }

    #[test]
    fn outcome_rates_follow_configuration() {
        let mut rng = StdRng::seed_from_u64(2024);
        let runs = 5_000;
        let auth_ok = (0..runs)
            .filter(|_| AuthAttempt::simulate(&mut rng).authenticated)
            .count() as f64
            / runs as f64;
        let order_failed = (0..runs)
            .filter(|_| OrderAttempt::simulate(&mut rng, 1).payment_failed)
            .count() as f64
            / runs as f64;

        assert!((auth_ok - AUTH_SUCCESS_RATE).abs() < 0.03, "auth rate {}", auth_ok);
        assert!((order_failed - ORDER_FAILURE_RATE).abs() < 0.03, "order rate {}", order_failed);
    }

    #[test]
    fn entries_carry_source_and_timestamp() {
        let mut rng = StdRng::seed_from_u64(1);
        let entry = OrderAttempt::simulate(&mut rng, 1000).to_entry();
        assert_eq!(entry.source, ORDER_SOURCE);
        assert!(entry.timestamp.is_some());
        assert!(entry.id.is_none());
        assert!(entry.has_required_fields());
    }
}
