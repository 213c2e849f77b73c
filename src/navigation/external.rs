//! Hand-off to the default browser

use tracing::{info, warn};

/// Open `url` in the system browser without waiting for it
pub fn open_in_system_browser(url: &str) {
    info!("Opening in system browser: {}", url);
    if let Err(e) = open::that_detached(url) {
        warn!("Failed to open {}: {}", url, e);
    }
}
