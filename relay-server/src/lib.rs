//! Relay - webhook-to-Slack notification relay.
//!
//! Receives inbound webhook events over HTTP, appends each to a durable
//! JSONL log, filters out low-score submissions, and forwards the rest to
//! a Slack incoming webhook as a formatted notification.
//!
//! ## Pipeline
//!
//! ```text
//! POST /webhook → event log → filter → format → Slack webhook
//! ```
//!
//! Delivery is single-attempt best-effort; the event log is the only
//! durable record.

pub mod config;
pub mod event;
pub mod eventlog;
pub mod filter;
pub mod notify;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use event::Event;
pub use eventlog::EventLog;
pub use notify::{NotifyError, SlackSender};
pub use web::AppState;
