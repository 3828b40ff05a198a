use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.chess.com/pub";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the upstream player-data client.
#[derive(Debug, Clone, PartialEq)]
pub struct ChessComConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ChessComConfig {
    fn default() -> Self {
        ChessComConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl ChessComConfig {
    /// Reads `CHESS_COM_API_URL`, `CHESS_COM_TIMEOUT_SECS` and
    /// `CHESS_COM_USER_AGENT`, falling back to the defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ChessComConfig::default();

        if let Some(base_url) = lookup("CHESS_COM_API_URL") {
            let trimmed = base_url.trim();
            if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    key: "CHESS_COM_API_URL",
                    value: base_url,
                });
            }
            config.base_url = trimmed.to_string();
        }

        if let Some(timeout) = lookup("CHESS_COM_TIMEOUT_SECS") {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "CHESS_COM_TIMEOUT_SECS",
                    value: timeout.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(user_agent) = lookup("CHESS_COM_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                config.user_agent = user_agent;
            }
        }

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("chess-stats/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ChessComConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, ChessComConfig::default());
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("chess-stats/"));
    }

    #[test]
    fn test_overrides() {
        let config = ChessComConfig::from_lookup(lookup_from(&[
            ("CHESS_COM_API_URL", "http://localhost:8080"),
            ("CHESS_COM_TIMEOUT_SECS", "3"),
            ("CHESS_COM_USER_AGENT", "tests"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let result = ChessComConfig::from_lookup(lookup_from(&[("CHESS_COM_TIMEOUT_SECS", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "CHESS_COM_TIMEOUT_SECS",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let result = ChessComConfig::from_lookup(lookup_from(&[("CHESS_COM_API_URL", "api.chess.com")]));
        assert!(result.is_err());
    }
}
