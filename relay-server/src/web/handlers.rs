//! HTTP endpoint handlers.
//!
//! The webhook handler runs the whole relay pipeline inline:
//!
//! 1. Parse the body into an event (never rejects)
//! 2. Append to the event log (best-effort)
//! 3. Apply the filter gate
//! 4. Format and send the notification(s)
//! 5. Map the outcome to a JSON response

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::event::{self, Event};
use crate::eventlog::EventLog;
use crate::filter;
use crate::notify::{self, NotifyError, SlackSender};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub event_log: EventLog,
    pub sender: SlackSender,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let event_log = EventLog::new(config.log_path.clone());
        let sender = SlackSender::new(Arc::clone(&config));

        Self {
            config,
            event_log,
            sender,
        }
    }
}

// =============================================================================
// Liveness
// =============================================================================

/// Plain-text liveness endpoint.
pub async fn live() -> &'static str {
    "Relay is live 🚀"
}

// =============================================================================
// Webhook
// =============================================================================

/// Webhook response body.
#[derive(Serialize)]
pub struct WebhookResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookResponse {
    fn relayed() -> Self {
        Self {
            ok: true,
            skipped: None,
            error: None,
        }
    }

    fn skipped(reason: &'static str) -> Self {
        Self {
            ok: true,
            skipped: Some(reason),
            error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            ok: false,
            skipped: None,
            error: Some(message),
        }
    }
}

/// Webhook endpoint.
///
/// Every inbound payload is accepted; an unparsable body is handled as an
/// empty event rather than rejected.
pub async fn webhook(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let event = event::from_body(&body);

    info!(
        body_length = body.len(),
        event_keys = event.len(),
        "webhook_received"
    );

    // Intentionally non-fatal: a log-store hiccup must never change the
    // outcome of relaying the event itself.
    if let Err(e) = state.event_log.append(&event).await {
        warn!(error = %e, "event_log_append_failed");
    }

    if let Some(reason) = filter::skip_reason(&event) {
        info!(reason = reason, "webhook_skipped");
        return (StatusCode::OK, Json(WebhookResponse::skipped(reason)));
    }

    match relay_event(&state, &event).await {
        Ok(()) => {
            info!("webhook_relayed");
            (StatusCode::OK, Json(WebhookResponse::relayed()))
        }
        Err(e) => {
            // Upstream status and body stay in the log; the caller only
            // gets the error message.
            match &e {
                NotifyError::Upstream { status, body } => {
                    error!(status = status, upstream_body = %body, "slack_post_failed");
                }
                other => {
                    error!(error = %other, "slack_post_failed");
                }
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WebhookResponse::failed(e.to_string())),
            )
        }
    }
}

/// Send the plain-text notification, plus the Block Kit variant when
/// structured mode is enabled. Both go to the same destination; the first
/// failure aborts.
async fn relay_event(state: &AppState, event: &Event) -> Result<(), NotifyError> {
    let text = notify::plain_text(event);
    state.sender.send(&text, None).await?;

    if state.config.use_slack_blocks {
        let blocks = notify::blocks(event);
        state
            .sender
            .send(&notify::companion_text(event), Some(&blocks))
            .await?;
    }

    Ok(())
}
