//! Web server module.
//!
//! Exposes the relay's two-route HTTP surface:
//! - `GET /` plain-text liveness
//! - `POST /webhook` inbound event intake
//!
//! The pipeline runs inline in the webhook handler; there is no queue or
//! background processing between receipt and delivery.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{live, webhook, AppState, WebhookResponse};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(live))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
