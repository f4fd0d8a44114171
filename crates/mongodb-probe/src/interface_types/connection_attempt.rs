use std::{fmt, time::Duration};

use super::ProbeError;

/// A single connectivity check to run: where to connect, and how long to wait for server
/// selection. Values are validated on construction and never change afterward.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionAttempt {
    uri: String,
    timeout: Duration,
}

impl ConnectionAttempt {
    pub fn new(uri: impl Into<String>, timeout_millis: u64) -> Result<Self, ProbeError> {
        let uri: String = uri.into();
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(ProbeError::InvalidConfiguration(
                "connection string must not be empty".to_owned(),
            ));
        }
        if timeout_millis == 0 {
            return Err(ProbeError::InvalidConfiguration(
                "timeout must be a positive number of milliseconds".to_owned(),
            ));
        }
        Ok(ConnectionAttempt {
            uri: uri.to_owned(),
            timeout: Duration::from_millis(timeout_millis),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The connection string with any password masked, for use in logs.
    pub fn redacted_uri(&self) -> String {
        redact_password(&self.uri)
    }
}

// Keep credentials out of debug output.
impl fmt::Debug for ConnectionAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionAttempt")
            .field("uri", &self.redacted_uri())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn redact_password(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://") else {
        return uri.to_owned();
    };
    let authority_start = scheme_end + 3;
    let rest = &uri[authority_start..];
    // Unencoded passwords may contain '@', '/' or '?', so the host starts after the last '@'. An
    // '@' in the query string makes this mask more than the password, never less.
    let Some(at) = rest.rfind('@') else {
        return uri.to_owned();
    };
    let user_info = &rest[..at];
    let Some(colon) = user_info.find(':') else {
        return uri.to_owned();
    };
    let user = &user_info[..colon];
    if user.contains(['/', '?']) {
        // The colon belongs to a path or query, so there is no user info.
        return uri.to_owned();
    }
    format!("{}{user}:***{}", &uri[..authority_start], &rest[at..])
}
