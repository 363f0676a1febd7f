//! Slack webhook delivery.
//!
//! A thin reqwest wrapper that POSTs one notification payload per call.
//! Single attempt only: the relay promises best-effort delivery, so there
//! is no retry, backoff, or circuit breaking here.

use std::sync::Arc;

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use super::error::{NotifyError, Result};
use super::format::Block;
use crate::config::Config;

/// Outbound payload for a Slack incoming webhook.
#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<&'a [Block]>,
}

/// Notification sender bound to the process configuration.
///
/// The reqwest client is built once and reused; the destination URL is read
/// from configuration on every call so a missing URL fails the individual
/// send rather than the process.
#[derive(Debug, Clone)]
pub struct SlackSender {
    client: Client,
    config: Arc<Config>,
}

impl SlackSender {
    /// Create a sender sharing the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Deliver one notification to the configured webhook URL.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::MissingWebhookUrl`] when no URL is configured
    /// - [`NotifyError::Upstream`] on a non-2xx response, carrying the
    ///   upstream status and body
    /// - [`NotifyError::Transport`] when the request itself fails
    pub async fn send(&self, text: &str, blocks: Option<&[Block]>) -> Result<()> {
        let url = self
            .config
            .slack_webhook_url
            .as_ref()
            .ok_or(NotifyError::MissingWebhookUrl)?;

        let payload = SlackPayload { text, blocks };

        let response = self
            .client
            .post(url.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body_length = body.len(),
                "slack_post_rejected"
            );
            return Err(NotifyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            status = status.as_u16(),
            has_blocks = payload.blocks.is_some(),
            text_length = text.len(),
            "slack_post_ok"
        );

        Ok(())
    }
}
