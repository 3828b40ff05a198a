#[derive(Debug)]
pub enum PlayerRepositoryError {
    NotFound,
    Http(u16),
    Timeout,
    Transport(String),
    Deserialization(String),
}

impl std::fmt::Display for PlayerRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRepositoryError::NotFound => write!(f, "Resource not found"),
            PlayerRepositoryError::Http(status) => write!(f, "Unexpected HTTP status: {}", status),
            PlayerRepositoryError::Timeout => write!(f, "Request timed out"),
            PlayerRepositoryError::Transport(msg) => write!(f, "Transport error: {}", msg),
            PlayerRepositoryError::Deserialization(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PlayerRepositoryError {}

impl From<reqwest::Error> for PlayerRepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PlayerRepositoryError::Timeout
        } else if err.is_decode() {
            PlayerRepositoryError::Deserialization(err.to_string())
        } else if let Some(status) = err.status() {
            PlayerRepositoryError::Http(status.as_u16())
        } else {
            PlayerRepositoryError::Transport(err.to_string())
        }
    }
}
