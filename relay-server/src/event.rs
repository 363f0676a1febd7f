//! Inbound webhook event type.
//!
//! An event is an open-ended JSON object; no shape is enforced beyond the
//! optional `name` and `score` fields the filter and formatter look at.

use serde_json::{Map, Value};

/// One inbound webhook payload. Key order is preserved from the wire.
pub type Event = Map<String, Value>;

/// Parse a request body into an event.
///
/// A missing, unparsable, or non-object body yields an empty event rather
/// than a rejection; the relay never refuses an inbound payload.
pub fn from_body(bytes: &[u8]) -> Event {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
