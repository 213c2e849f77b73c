//! Tray module - Status-bar item and its menu

mod icon;
mod menu;

pub use icon::status_icon;
pub use menu::{StatusAction, StatusItem};
