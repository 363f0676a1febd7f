//! Event filter gate.
//!
//! A single hardcoded business rule decides whether an event is forwarded
//! or dropped before any notification work happens. There is no rule
//! registry; extending this means editing this module.

use serde_json::Value;

use crate::event::Event;

/// Skip reason for low-score submissions.
const SCORE_BELOW_THRESHOLD: &str = "score<50";

/// Decide whether an event should be skipped instead of forwarded.
///
/// Returns `Some(reason)` when the event carries a `score` whose numeric
/// value is strictly below 50. A missing or non-numeric `score` never skips.
pub fn skip_reason(event: &Event) -> Option<&'static str> {
    let score = numeric_score(event.get("score")?)?;

    if score < 50.0 {
        Some(SCORE_BELOW_THRESHOLD)
    } else {
        None
    }
}

/// Numeric value of a score field. Numeric strings coerce; anything else
/// has no numeric value.
fn numeric_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with_score(score: Value) -> Event {
        let mut event = Event::new();
        event.insert("score".to_string(), score);
        event
    }

    #[test]
    fn test_low_score_skips() {
        assert_eq!(
            skip_reason(&event_with_score(Value::from(10))),
            Some("score<50")
        );
        assert_eq!(
            skip_reason(&event_with_score(Value::from(49.9))),
            Some("score<50")
        );
        assert_eq!(
            skip_reason(&event_with_score(Value::from(0))),
            Some("score<50")
        );
    }

    #[test]
    fn test_threshold_and_above_proceed() {
        assert_eq!(skip_reason(&event_with_score(Value::from(50))), None);
        assert_eq!(skip_reason(&event_with_score(Value::from(80))), None);
    }

    #[test]
    fn test_numeric_string_coerces() {
        assert_eq!(
            skip_reason(&event_with_score(Value::from("10"))),
            Some("score<50")
        );
        assert_eq!(skip_reason(&event_with_score(Value::from("99"))), None);
    }

    #[test]
    fn test_non_numeric_score_never_skips() {
        assert_eq!(skip_reason(&event_with_score(Value::from("abc"))), None);
        assert_eq!(skip_reason(&event_with_score(Value::Null)), None);
        assert_eq!(skip_reason(&event_with_score(Value::from(true))), None);
        assert_eq!(
            skip_reason(&event_with_score(Value::Array(vec![]))),
            None
        );
    }

    #[test]
    fn test_missing_score_never_skips() {
        assert_eq!(skip_reason(&Event::new()), None);

        let mut event = Event::new();
        event.insert("name".to_string(), Value::from("Ada"));
        assert_eq!(skip_reason(&event), None);
    }
}
