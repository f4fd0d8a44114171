//! Runs a single connectivity check and reports the result.

pub mod exit_codes;
pub mod logging;

#[cfg(test)]
mod tests;

use std::io::Write;

use mongodb_probe::{probe, state::try_init_attempt_from_config, Outcome};

use crate::exit_codes::ExitCode;

pub struct Context {
    pub connection_uri: Option<String>,
    /// Server selection timeout in milliseconds, unparsed so that a bad value is reported like
    /// any other configuration error.
    pub timeout: Option<String>,
}

/// Probe the configured deployment, and write the result line to `out`. Failures are reported,
/// not returned; the error case is reserved for failing to write output.
pub async fn run(context: &Context, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let attempt = try_init_attempt_from_config(
        context.connection_uri.as_ref(),
        context.timeout.as_ref(),
    );
    let outcome = match attempt {
        Ok(attempt) => probe(&attempt).await,
        Err(err) => Outcome::Failure(err),
    };
    report(&outcome, out)?;
    let exit_code = ExitCode::for_outcome(&outcome);
    tracing::debug!(exit_code = i32::from(exit_code), "probe finished");
    Ok(exit_code)
}

pub fn report(outcome: &Outcome, out: &mut impl Write) -> std::io::Result<()> {
    match outcome {
        Outcome::Success { round_trip } => writeln!(
            out,
            "✅ Connected successfully to MongoDB! (round trip: {} ms)",
            round_trip.as_millis()
        ),
        Outcome::Failure(err) => writeln!(out, "❌ Connection failed: {err}"),
    }
}

/// True if the connection string carries a password.
pub fn has_password(connection_uri: &str) -> bool {
    mongodb_probe::ConnectionAttempt::new(connection_uri, 1)
        .map(|attempt| attempt.redacted_uri() != attempt.uri())
        .unwrap_or(false)
}
