//! Error types for notification delivery.

use thiserror::Error;

/// Result type alias for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Failure modes of a single notification send.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No destination webhook URL is configured. Checked per call so the
    /// service keeps running and later sends succeed once the URL is set.
    #[error("Missing SLACK_WEBHOOK_URL")]
    MissingWebhookUrl,

    /// The destination responded with a non-2xx status.
    #[error("Slack webhook returned HTTP {status}")]
    Upstream {
        /// HTTP status code from the destination
        status: u16,
        /// Response body, read best-effort
        body: String,
    },

    /// The POST never produced a response (connect failure, timeout, TLS).
    #[error("Slack webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_format() {
        assert_eq!(
            NotifyError::MissingWebhookUrl.to_string(),
            "Missing SLACK_WEBHOOK_URL"
        );

        let upstream = NotifyError::Upstream {
            status: 404,
            body: "channel_not_found".to_string(),
        };
        assert_eq!(upstream.to_string(), "Slack webhook returned HTTP 404");
    }
}
