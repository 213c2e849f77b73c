//! Local notifications
//!
//! Delivery is best-effort: errors are logged and swallowed, and a denied
//! permission simply means banners never show up.

mod desktop;

pub use desktop::DesktopNotifier;

use crate::core::config::NotificationConfig;
use crate::unread::UnreadCount;
use uuid::Uuid;

/// One banner, built per rising edge and discarded after submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Banner announcing `count` unread messages
    pub fn unread(count: UnreadCount, config: &NotificationConfig) -> Self {
        let body = config
            .body_template
            .replace("{count}", &count.to_string());
        Self::new(config.title.clone(), body)
    }
}

/// Notification backend
pub trait Notifier {
    /// Ask the OS for permission to post banners. Runs on the event loop
    /// thread before the first `submit`.
    fn request_permission(&self);

    /// Fire-and-forget delivery. Must not block.
    fn submit(&self, request: NotificationRequest);
}
