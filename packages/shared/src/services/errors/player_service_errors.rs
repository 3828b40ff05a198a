use std::fmt;

use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

/// Why a single handle could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureCause {
    /// The upstream has no profile for the handle.
    Absent,
    /// The upstream could not be read (timeout, network, status or body).
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupFailure {
    pub handle: String,
    pub cause: FailureCause,
}

impl LookupFailure {
    pub fn new(handle: &str, error: &PlayerRepositoryError) -> Self {
        let cause = match error {
            PlayerRepositoryError::NotFound => FailureCause::Absent,
            other => FailureCause::Unreachable(other.to_string()),
        };
        LookupFailure {
            handle: handle.to_string(),
            cause,
        }
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.cause {
            FailureCause::Absent => write!(f, "{} does not exist", self.handle),
            FailureCause::Unreachable(msg) => write!(f, "{} could not be retrieved ({})", self.handle, msg),
        }
    }
}

#[derive(Debug)]
pub enum PlayerServiceError {
    PlayerNotFound(LookupFailure),
    ComparisonFailed {
        first: Option<LookupFailure>,
        second: Option<LookupFailure>,
    },
    ValidationError(String),
}

impl fmt::Display for PlayerServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerServiceError::PlayerNotFound(failure) => {
                write!(f, "Player not found: {}", failure)
            }
            PlayerServiceError::ComparisonFailed { first, second } => {
                let failures: Vec<String> = first
                    .iter()
                    .chain(second.iter())
                    .map(|failure| failure.to_string())
                    .collect();
                write!(
                    f,
                    "One or both players could not be found: {}",
                    failures.join(", ")
                )
            }
            PlayerServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerServiceError {}
