use mongodb::error::{Error, ErrorKind};
use thiserror::Error;

/// Every way a probe can fail. The driver reports many distinct failure causes (network, DNS,
/// authentication, TLS, server selection). Apart from a malformed connection string those are all
/// reported as [ProbeError::ConnectionUnavailable], with the driver's message as the diagnostic.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid connection string: {0}")]
    InvalidUri(#[source] Error),

    #[error("{0}")]
    ConnectionUnavailable(#[source] Error),
}

impl ProbeError {
    /// Sort a driver error raised while parsing a connection string. Only argument errors are
    /// syntax problems; SRV lookups happen during parsing too, and those are connectivity
    /// failures.
    pub fn from_parse_error(err: Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::InvalidArgument { .. } => ProbeError::InvalidUri(err),
            _ => ProbeError::ConnectionUnavailable(err),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ProbeError::InvalidConfiguration(_) | ProbeError::InvalidUri(_)
        )
    }
}

impl From<Error> for ProbeError {
    fn from(err: Error) -> Self {
        ProbeError::ConnectionUnavailable(err)
    }
}
