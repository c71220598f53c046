//! Client configuration.
//!
//! The game server endpoint comes from the environment. A missing or
//! unparseable endpoint is a non-fatal configuration error: `connect` logs
//! it and aborts without creating a session.

use url::Url;

/// Environment variable naming the game server WebSocket endpoint.
pub const GAME_WS_URL_ENV: &str = "CHAINARENA_GAME_WS_URL";

/// Connection manager configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Game server WebSocket endpoint, if configured.
    pub endpoint: Option<Url>,
}

impl ClientConfig {
    /// Build a config with a known-good endpoint.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint: Some(endpoint),
        }
    }

    /// Read the endpoint from `CHAINARENA_GAME_WS_URL`.
    pub fn from_env() -> Self {
        Self {
            endpoint: parse_endpoint(std::env::var(GAME_WS_URL_ENV).ok()),
        }
    }
}

/// Parse an optional endpoint string; bad input is logged and dropped.
fn parse_endpoint(raw: Option<String>) -> Option<Url> {
    let raw = raw?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::error!("Ignoring unparseable game server endpoint {:?}: {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_endpoint_stays_none() {
        assert!(parse_endpoint(None).is_none());
    }

    #[test]
    fn valid_endpoint_parses() {
        let endpoint = parse_endpoint(Some("ws://localhost:9000/ws".to_string()));
        assert_eq!(
            endpoint.map(|u| u.to_string()),
            Some("ws://localhost:9000/ws".to_string())
        );
    }

    #[test]
    fn unparseable_endpoint_is_dropped() {
        assert!(parse_endpoint(Some("not a url".to_string())).is_none());
    }
}
