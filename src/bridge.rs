//! Messages posted by page scripts across the embedding boundary
//!
//! Every message is a JSON object tagged by `name`. Anything that does not
//! decode is dropped by the caller; none of these errors reach the user.

use crate::unread::{parse_unread, UnreadCount};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors decoding a bridge message
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed bridge message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unread value is not a number: {0}")]
    NotANumber(String),

    #[error("unread payload has neither `unread` nor `title`")]
    Empty,
}

/// Decoded page message
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name")]
pub enum BridgeMessage {
    #[serde(rename = "unreadCount")]
    UnreadCount(UnreadPayload),

    #[serde(rename = "linkActivated")]
    LinkActivated { url: String },
}

impl BridgeMessage {
    pub fn parse(body: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Body of an `unreadCount` message
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnreadPayload {
    /// Integer, float or numeric string
    #[serde(default)]
    pub unread: Option<Value>,
    /// Raw page title, used when `unread` is absent
    #[serde(default)]
    pub title: Option<String>,
}

impl UnreadPayload {
    /// Interpret the payload as an unread count.
    ///
    /// Negative values clamp to zero; fractional values truncate.
    pub fn count(&self) -> Result<UnreadCount, BridgeError> {
        match &self.unread {
            Some(value) => count_from_value(value),
            None => self
                .title
                .as_deref()
                .map(parse_unread)
                .ok_or(BridgeError::Empty),
        }
    }
}

fn count_from_value(value: &Value) -> Result<UnreadCount, BridgeError> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(UnreadCount::from_signed(int))
            } else if number.as_u64().is_some() {
                // Only integers above i64::MAX land here
                Ok(UnreadCount::new(u32::MAX))
            } else {
                number
                    .as_f64()
                    .and_then(UnreadCount::from_float)
                    .ok_or_else(|| BridgeError::NotANumber(number.to_string()))
            }
        }
        Value::String(text) => count_from_str(text),
        other => Err(BridgeError::NotANumber(other.to_string())),
    }
}

fn count_from_str(text: &str) -> Result<UnreadCount, BridgeError> {
    let trimmed = text.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(UnreadCount::from_signed(int));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(UnreadCount::from_float)
        .ok_or_else(|| BridgeError::NotANumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unread(body: &str) -> Result<u32, BridgeError> {
        match BridgeMessage::parse(body)? {
            BridgeMessage::UnreadCount(payload) => payload.count().map(UnreadCount::get),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_integer_unread() {
        assert_eq!(unread(r#"{"name":"unreadCount","unread":3}"#).unwrap(), 3);
    }

    #[test]
    fn test_float_unread_truncates() {
        assert_eq!(unread(r#"{"name":"unreadCount","unread":3.7}"#).unwrap(), 3);
    }

    #[test]
    fn test_string_unread() {
        assert_eq!(unread(r#"{"name":"unreadCount","unread":"5"}"#).unwrap(), 5);
        assert_eq!(unread(r#"{"name":"unreadCount","unread":" 4 "}"#).unwrap(), 4);
        assert_eq!(unread(r#"{"name":"unreadCount","unread":"2.0"}"#).unwrap(), 2);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(unread(r#"{"name":"unreadCount","unread":-2}"#).unwrap(), 0);
        assert_eq!(unread(r#"{"name":"unreadCount","unread":"-9"}"#).unwrap(), 0);
        assert_eq!(unread(r#"{"name":"unreadCount","unread":-0.5}"#).unwrap(), 0);
    }

    #[test]
    fn test_missing_unread_falls_back_to_title() {
        assert_eq!(unread(r#"{"name":"unreadCount","title":"(6) Messenger"}"#).unwrap(), 6);
        assert_eq!(
            unread(r#"{"name":"unreadCount","unread":null,"title":"Messenger (2)"}"#).unwrap(),
            2
        );
        assert_eq!(unread(r#"{"name":"unreadCount","title":"Messenger"}"#).unwrap(), 0);
    }

    #[test]
    fn test_unread_takes_precedence_over_title() {
        assert_eq!(
            unread(r#"{"name":"unreadCount","unread":1,"title":"(8) Messenger"}"#).unwrap(),
            1
        );
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!(matches!(
            unread(r#"{"name":"unreadCount","unread":"abc"}"#),
            Err(BridgeError::NotANumber(_))
        ));
        assert!(matches!(
            unread(r#"{"name":"unreadCount","unread":true}"#),
            Err(BridgeError::NotANumber(_))
        ));
        assert!(matches!(
            unread(r#"{"name":"unreadCount","unread":[]}"#),
            Err(BridgeError::NotANumber(_))
        ));
        assert!(matches!(
            unread(r#"{"name":"unreadCount","unread":"NaN"}"#),
            Err(BridgeError::NotANumber(_))
        ));
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(matches!(unread(r#"{"name":"unreadCount"}"#), Err(BridgeError::Empty)));
    }

    #[test]
    fn test_malformed_messages() {
        assert!(matches!(BridgeMessage::parse("{"), Err(BridgeError::Malformed(_))));
        assert!(BridgeMessage::parse(r#"{"unread":3}"#).is_err());
        assert!(BridgeMessage::parse(r#"{"name":"somethingElse"}"#).is_err());
    }

    #[test]
    fn test_link_message() {
        let message =
            BridgeMessage::parse(r#"{"name":"linkActivated","url":"https://example.com/"}"#)
                .unwrap();
        assert_eq!(
            message,
            BridgeMessage::LinkActivated {
                url: "https://example.com/".to_string()
            }
        );
    }
}
