//! Messenger Bar
//!
//! A menu-bar shell around the Messenger web app.
//!
//! # Features
//! - Embeds the site in a native window that hides instead of closing
//! - Reads the unread count from the page title (observer script or polling)
//! - Shows the count on the Dock badge and the status-bar item
//! - Posts a local notification whenever the count goes up
//! - Sends clicked links outside the allowed hosts to the default browser

pub mod bridge;
pub mod core;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod navigation;
pub mod notify;
pub mod surface;
pub mod tray;
pub mod unread;
pub mod window;

pub use bridge::{BridgeError, BridgeMessage};
pub use core::config::Config;
pub use core::events::{AppEvent, EventSender};
pub use core::state::{UnreadChange, UnreadTracker};
pub use navigation::{AllowedHostSet, NavigationDecision, NavigationPolicy, NavigationTrigger};
pub use unread::{parse_unread, UnreadCount, UnreadDispatcher};
