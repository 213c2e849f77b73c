//! macOS-specific functionality
//!
//! Native integrations winit and tray-icon do not cover:
//! - Dock tile badge
//! - Activation policy changes and activation when revealing the window

pub mod app;
pub mod dock;

pub use app::{activate_as_regular, order_front_any_window};
pub use dock::set_badge_label;
