//! Page-side scripts injected into the embedded view

use crate::core::config::UnreadSource;

/// Bridge message name posted by the title observer
pub const UNREAD_MESSAGE: &str = "unreadCount";

/// Bridge message name posted by the link capture script
pub const LINK_MESSAGE: &str = "linkActivated";

/// Watches `<title>` (and its replacement) and pushes `{unread, title}`
pub const TITLE_OBSERVER_JS: &str = include_str!("title_observer.js");

/// Reports link clicks that leave the current origin or ask for a new window
/// (middle, modifier or `target=_blank` clicks)
pub const LINK_CAPTURE_JS: &str = include_str!("link_capture.js");

/// Expression evaluated on every poll tick
pub const TITLE_QUERY_JS: &str = "document.title";

/// Initialization scripts for the configured signal source.
///
/// Link capture is always installed; the title observer only when the page
/// pushes unread updates itself.
pub fn initialization_scripts(source: UnreadSource) -> Vec<&'static str> {
    match source {
        UnreadSource::Observer => vec![LINK_CAPTURE_JS, TITLE_OBSERVER_JS],
        UnreadSource::Poll => vec![LINK_CAPTURE_JS],
    }
}

/// Decode the result of evaluating [`TITLE_QUERY_JS`].
///
/// The web view hands results back JSON-encoded; anything that is not a JSON
/// string (`null` on a blank page, for instance) is treated as an empty title.
pub fn decode_title_result(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_default()
}
