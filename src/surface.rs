//! OS surfaces showing the unread count: dock badge and status-bar label

use crate::tray::StatusItem;
use crate::unread::UnreadCount;

/// What the surfaces should show for a given count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceUpdate {
    /// Dock badge text; `None` clears the badge
    pub badge: Option<String>,
    /// Status-bar button title
    pub status_title: String,
}

impl SurfaceUpdate {
    pub fn for_count(base_icon: &str, count: UnreadCount) -> Self {
        if count.is_zero() {
            Self {
                badge: None,
                status_title: base_icon.to_string(),
            }
        } else {
            Self {
                badge: Some(count.to_string()),
                status_title: format!("{} {}", base_icon, count),
            }
        }
    }
}

/// Something that can render a [`SurfaceUpdate`]. Implementations touch UI
/// state and must only be driven from the event loop thread.
pub trait UnreadSurface {
    fn apply(&mut self, update: &SurfaceUpdate);
}

/// Dock tile plus (when created) the status item
pub struct OsSurface<'a> {
    status: Option<&'a StatusItem>,
}

impl<'a> OsSurface<'a> {
    pub fn new(status: Option<&'a StatusItem>) -> Self {
        Self { status }
    }
}

impl UnreadSurface for OsSurface<'_> {
    fn apply(&mut self, update: &SurfaceUpdate) {
        #[cfg(target_os = "macos")]
        crate::macos::set_badge_label(update.badge.as_deref());

        if let Some(status) = self.status {
            status.set_label(&update.status_title);
        }
    }
}
