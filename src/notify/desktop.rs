//! notify-rust backed notifier

use super::{NotificationRequest, Notifier};
use std::thread;
use tracing::{debug, warn};

/// Bundle identifier banners are attributed to on macOS
#[cfg(target_os = "macos")]
const BUNDLE_ID: &str = "com.messengerbar.MessengerBar";

/// Posts banners through the platform notification service
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    /// Registers the application identity on the calling thread, so it is in
    /// place before any delivery thread starts. The system prompt follows on
    /// first delivery.
    #[cfg(target_os = "macos")]
    fn request_permission(&self) {
        match notify_rust::set_application(BUNDLE_ID) {
            Ok(()) => debug!("Notification identity set to {}", BUNDLE_ID),
            Err(e) => warn!("Notification identity not set: {}", e),
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn request_permission(&self) {
        debug!("Notification permission implied on this platform");
    }

    fn submit(&self, request: NotificationRequest) {
        let spawned = thread::Builder::new()
            .name("notify-deliver".into())
            .spawn(move || {
                let result = notify_rust::Notification::new()
                    .summary(&request.title)
                    .body(&request.body)
                    .sound_name("default")
                    .show();
                match result {
                    Ok(_) => debug!("Notification {} delivered", request.id),
                    Err(e) => debug!("Notification {} not delivered: {}", request.id, e),
                }
            });
        if let Err(e) = spawned {
            warn!("Failed to spawn notification thread: {}", e);
        }
    }
}
