//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at process start and kept immutable for
//! the process lifetime. Handlers receive it through shared state instead of
//! reading the environment mid-request.

use std::env;
use std::path::PathBuf;

use tracing::warn;
use url::Url;

/// Default file the event log is appended to.
pub const DEFAULT_LOG_FILE: &str = "webhook.log";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Destination Slack incoming-webhook URL for outbound notifications.
    ///
    /// Optional at startup: absence only fails the individual send, not the
    /// process.
    pub slack_webhook_url: Option<Url>,

    /// Whether to send a second, Block Kit formatted notification after the
    /// plain-text one
    pub use_slack_blocks: bool,

    /// Path of the append-only event log file
    pub log_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: parse_port("PORT", 3000),
            slack_webhook_url: parse_url("SLACK_WEBHOOK_URL"),
            use_slack_blocks: flag_enabled("USE_SLACK_BLOCKS"),
            log_path: env::var("WEBHOOK_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

/// Parse a port number, falling back to the default on a malformed value.
fn parse_port(name: &str, default: u16) -> u16 {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.parse() {
        Ok(port) => port,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid port, using default");
            default
        }
    }
}

/// Parse an optional URL. A present but unparsable value is treated as
/// unset so that the failure surfaces per send rather than at startup.
fn parse_url(name: &str) -> Option<Url> {
    let raw = env::var(name).ok()?;

    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(env_var = name, error = %e, "Invalid URL, treating as unset");
            None
        }
    }
}

/// A flag is enabled only by the exact string "true".
fn flag_enabled(name: &str) -> bool {
    env::var(name).map(|v| v == "true").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        env::set_var("TEST_PORT", "8081");
        assert_eq!(parse_port("TEST_PORT", 3000), 8081);
        env::remove_var("TEST_PORT");
    }

    #[test]
    fn test_parse_port_invalid_uses_default() {
        env::set_var("TEST_PORT_BAD", "not-a-port");
        assert_eq!(parse_port("TEST_PORT_BAD", 3000), 3000);
        env::remove_var("TEST_PORT_BAD");
    }

    #[test]
    fn test_parse_port_missing_uses_default() {
        assert_eq!(parse_port("NONEXISTENT_PORT_VAR", 3000), 3000);
    }

    #[test]
    fn test_parse_url_valid() {
        env::set_var("TEST_HOOK_URL", "https://hooks.slack.com/services/T0/B0/XX");
        let url = parse_url("TEST_HOOK_URL").unwrap();
        assert_eq!(url.host_str(), Some("hooks.slack.com"));
        env::remove_var("TEST_HOOK_URL");
    }

    #[test]
    fn test_parse_url_invalid_treated_as_unset() {
        env::set_var("TEST_HOOK_URL_BAD", "not a url");
        assert!(parse_url("TEST_HOOK_URL_BAD").is_none());
        env::remove_var("TEST_HOOK_URL_BAD");
    }

    #[test]
    fn test_flag_enabled_requires_exact_true() {
        env::set_var("TEST_FLAG", "true");
        assert!(flag_enabled("TEST_FLAG"));

        for value in ["TRUE", "1", "yes", ""] {
            env::set_var("TEST_FLAG", value);
            assert!(!flag_enabled("TEST_FLAG"));
        }
        env::remove_var("TEST_FLAG");

        assert!(!flag_enabled("NONEXISTENT_FLAG_VAR"));
    }
}
