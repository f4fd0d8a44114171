//! Tests that need a running MongoDB deployment. Enable them with `--features integration`, and
//! point `MONGODB_DATABASE_URI` at the deployment.

use std::env;

use anyhow::anyhow;
use mongodb_probe::{state::DATABASE_URI_ENV_VAR, ConnectionAttempt};

#[cfg(all(test, feature = "integration"))]
mod tests;

pub const TIMEOUT_MILLIS: u64 = 5000;

pub fn get_database_uri() -> anyhow::Result<String> {
    env::var(DATABASE_URI_ENV_VAR).map_err(|_| {
        anyhow!("please set {DATABASE_URI_ENV_VAR} to the connection string of a running MongoDB deployment")
    })
}

pub fn live_attempt() -> anyhow::Result<ConnectionAttempt> {
    Ok(ConnectionAttempt::new(get_database_uri()?, TIMEOUT_MILLIS)?)
}
