mod connection_attempt;
mod probe_error;

pub use self::connection_attempt::ConnectionAttempt;
pub use self::probe_error::ProbeError;
