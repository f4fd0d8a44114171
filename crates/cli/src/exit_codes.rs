use mongodb_probe::{Outcome, ProbeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    ConnectionUnavailable,
    InvalidConfiguration,
}

impl ExitCode {
    pub fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Success { .. } => ExitCode::Success,
            Outcome::Failure(err) => err.into(),
        }
    }
}

impl From<&ProbeError> for ExitCode {
    fn from(err: &ProbeError) -> Self {
        if err.is_invalid_input() {
            ExitCode::InvalidConfiguration
        } else {
            ExitCode::ConnectionUnavailable
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(value: ExitCode) -> Self {
        match value {
            ExitCode::Success => 0,
            ExitCode::ConnectionUnavailable => 1,
            ExitCode::InvalidConfiguration => 2,
        }
    }
}
