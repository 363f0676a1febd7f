//! Notification formatting.
//!
//! Builds the two message representations sent to Slack: a plain-text
//! message, and an optional Block Kit variant when structured mode is on.
//! Formatting is total over any event value and deterministic, so the same
//! event always renders to byte-identical output.

use serde::Serialize;
use serde_json::Value;

use crate::event::Event;

/// Fallback submitter when the event has no usable `name`.
const UNKNOWN_USER: &str = "Unknown User";

/// One Slack Block Kit block.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    /// Large title text
    #[serde(rename = "header")]
    Header { text: BlockText },
    /// Regular content section
    #[serde(rename = "section")]
    Section { text: BlockText },
}

/// Text object inside a block.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum BlockText {
    #[serde(rename = "plain_text")]
    Plain { text: String },
    #[serde(rename = "mrkdwn")]
    Mrkdwn { text: String },
}

/// Display name of the submitter.
///
/// String values are used verbatim; other present values render as their
/// JSON text; a missing or null `name` falls back to "Unknown User".
pub fn submitter_name(event: &Event) -> String {
    match event.get("name") {
        None | Some(Value::Null) => UNKNOWN_USER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The event serialized as indented, human-readable JSON.
fn pretty(event: &Event) -> String {
    // Serializing a Map<String, Value> cannot fail
    serde_json::to_string_pretty(event).unwrap_or_else(|_| "{}".to_string())
}

/// Plain-text notification body.
pub fn plain_text(event: &Event) -> String {
    format!(
        "🚀 New submission from {}\n\n{}",
        submitter_name(event),
        pretty(event)
    )
}

/// Fallback text accompanying the Block Kit variant.
pub fn companion_text(event: &Event) -> String {
    format!("New submission from {}", submitter_name(event))
}

/// Block Kit representation: header, submitter line, fenced payload dump.
pub fn blocks(event: &Event) -> Vec<Block> {
    let name = submitter_name(event);

    vec![
        Block::Header {
            text: BlockText::Plain {
                text: "New Submission 🚀".to_string(),
            },
        },
        Block::Section {
            text: BlockText::Mrkdwn {
                text: format!("*Name:* {name}"),
            },
        },
        Block::Section {
            text: BlockText::Mrkdwn {
                text: format!("```{}```", pretty(event)),
            },
        },
    ]
}
