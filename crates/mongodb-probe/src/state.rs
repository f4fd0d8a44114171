use std::env;

use crate::interface_types::{ConnectionAttempt, ProbeError};

pub const DATABASE_URI_ENV_VAR: &str = "MONGODB_DATABASE_URI";
pub const TIMEOUT_ENV_VAR: &str = "MONGODB_PROBE_TIMEOUT_MS";

/// Server selection timeout used when none is configured.
pub const DEFAULT_TIMEOUT_MILLIS: u64 = 5000;

/// Reads the connection URI and timeout from environment variables
pub fn try_init_attempt() -> Result<ConnectionAttempt, ProbeError> {
    let database_uri = env::var(DATABASE_URI_ENV_VAR).ok();
    let timeout = env::var(TIMEOUT_ENV_VAR).ok();
    try_init_attempt_from_config(database_uri.as_ref(), timeout.as_ref())
}

/// Builds an attempt from unparsed configuration values, wherever they came from. A missing
/// timeout falls back to [DEFAULT_TIMEOUT_MILLIS].
pub fn try_init_attempt_from_config(
    database_uri: Option<&impl AsRef<str>>,
    timeout: Option<&impl AsRef<str>>,
) -> Result<ConnectionAttempt, ProbeError> {
    let timeout_millis = match timeout {
        Some(value) => parse_timeout_millis(value.as_ref())?,
        None => DEFAULT_TIMEOUT_MILLIS,
    };
    try_init_attempt_from_uri(database_uri, timeout_millis)
}

pub fn try_init_attempt_from_uri(
    database_uri: Option<&impl AsRef<str>>,
    timeout_millis: u64,
) -> Result<ConnectionAttempt, ProbeError> {
    let database_uri = database_uri.ok_or_else(|| {
        ProbeError::InvalidConfiguration(format!(
            "missing connection string; set the {DATABASE_URI_ENV_VAR} environment variable"
        ))
    })?;
    ConnectionAttempt::new(database_uri.as_ref(), timeout_millis)
}

pub fn parse_timeout_millis(value: &str) -> Result<u64, ProbeError> {
    value.trim().parse().map_err(|_| {
        ProbeError::InvalidConfiguration(format!(
            "timeout must be a positive integer number of milliseconds, but got \"{value}\""
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::{
        parse_timeout_millis, try_init_attempt_from_config, try_init_attempt_from_uri,
        DATABASE_URI_ENV_VAR, DEFAULT_TIMEOUT_MILLIS,
    };
    use crate::interface_types::ProbeError;

    #[test]
    fn missing_uri_names_the_environment_variable() {
        let err = try_init_attempt_from_uri(None::<&String>, 5000).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidConfiguration(_)));
        assert!(err.to_string().contains(DATABASE_URI_ENV_VAR));
    }

    #[test]
    fn builds_attempt_from_uri() -> anyhow::Result<()> {
        let uri = "mongodb://localhost:27017".to_owned();
        let attempt = try_init_attempt_from_uri(Some(&uri), 2000)?;
        assert_eq!(attempt.uri(), uri);
        assert_eq!(attempt.timeout(), Duration::from_secs(2));
        Ok(())
    }

    #[test]
    fn parses_timeouts() -> anyhow::Result<()> {
        assert_eq!(parse_timeout_millis(" 750 ")?, 750);
        assert!(parse_timeout_millis("-5").is_err());
        assert!(parse_timeout_millis("5s").is_err());
        Ok(())
    }

    #[test]
    fn config_without_timeout_uses_default() -> anyhow::Result<()> {
        let uri = "mongodb://localhost:27017";
        let attempt = try_init_attempt_from_config(Some(&uri), None::<&String>)?;
        assert_eq!(
            attempt.timeout(),
            Duration::from_millis(DEFAULT_TIMEOUT_MILLIS)
        );
        Ok(())
    }

    #[test]
    fn config_with_malformed_timeout_is_invalid() {
        let uri = "mongodb://localhost:27017";
        let err = try_init_attempt_from_config(Some(&uri), Some(&"5s")).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("\"5s\""), "{err}");
    }

    #[test]
    fn config_with_zero_timeout_is_invalid() {
        let uri = "mongodb://localhost:27017";
        let err = try_init_attempt_from_config(Some(&uri), Some(&"0")).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidConfiguration(_)));
    }
}
