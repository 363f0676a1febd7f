//! Outbound notification module.
//!
//! Turns an inbound event into a Slack message and delivers it to the
//! configured incoming-webhook URL:
//!
//! ```text
//! Event → format (text / Block Kit) → SlackSender → Slack webhook
//! ```
//!
//! Delivery is single-attempt best-effort; failures surface as
//! [`NotifyError`] and are never retried here.

pub mod error;
pub mod format;
pub mod sender;

pub use error::NotifyError;
pub use format::{blocks, companion_text, plain_text, submitter_name, Block};
pub use sender::SlackSender;
