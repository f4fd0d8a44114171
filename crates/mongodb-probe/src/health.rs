use std::time::{Duration, Instant};

use tracing::instrument;

use crate::{
    interface_types::{ConnectionAttempt, ProbeError},
    mongodb::DatabaseTrait,
    mongodb_connection::get_mongodb_client,
};

/// Liveness commands run against this database. Every deployment has one, and the connecting user
/// does not need any privileges on it to run `ping`.
pub const ADMIN_DATABASE: &str = "admin";

#[derive(Debug)]
pub enum Outcome {
    Success {
        /// Time from the start of the probe until the server answered the ping, including server
        /// selection and the connection handshake.
        round_trip: Duration,
    },
    Failure(ProbeError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The message describing why the probe failed, if it did.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(err) => Some(err.to_string()),
        }
    }
}

/// Check that a database answers a ping.
pub async fn check_health(db: &impl DatabaseTrait) -> Result<(), ProbeError> {
    db.ping().await?;
    Ok(())
}

/// Ping a database, and measure the time from `started` until the reply arrived.
pub async fn timed_check_health(
    db: &impl DatabaseTrait,
    started: Instant,
) -> Result<Duration, ProbeError> {
    check_health(db).await?;
    Ok(started.elapsed())
}

/// Connect to the deployment described by `attempt`, and ping it. Waits at most for the attempt's
/// server selection timeout, plus the time the driver needs to resolve an SRV record. Connections
/// opened by the probe are closed before it returns, whatever the outcome.
#[instrument(skip_all, fields(uri = %attempt.redacted_uri(), timeout_ms = attempt.timeout().as_millis() as u64))]
pub async fn probe(attempt: &ConnectionAttempt) -> Outcome {
    let started = Instant::now();
    tracing::info!("probing MongoDB deployment");

    let client = match get_mongodb_client(attempt).await {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "could not construct a MongoDB client");
            return Outcome::Failure(err);
        }
    };

    let status = timed_check_health(&client.database(ADMIN_DATABASE), started).await;
    client.shutdown().await;

    match status {
        Ok(round_trip) => {
            tracing::info!(round_trip_ms = round_trip.as_millis() as u64, "ping succeeded");
            Outcome::Success { round_trip }
        }
        Err(err) => {
            tracing::warn!(error = %err, elapsed_ms = started.elapsed().as_millis() as u64, "ping failed");
            Outcome::Failure(err)
        }
    }
}
