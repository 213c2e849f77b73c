//! Application activation

#![allow(deprecated)] // cocoa crate deprecation warnings

use cocoa::appkit::NSApp;
use cocoa::base::{id, nil, YES};
use objc::{msg_send, sel, sel_impl};
use tracing::debug;

/// NSApplicationActivationPolicyRegular
const ACTIVATION_POLICY_REGULAR: isize = 0;

/// Promote the app to a regular (Dock, activatable) process and bring it to
/// the front. An accessory app cannot make its window key otherwise.
pub fn activate_as_regular() {
    unsafe {
        let app = NSApp();
        if app == nil {
            return;
        }
        let _: () = msg_send![app, setActivationPolicy: ACTIVATION_POLICY_REGULAR];
        let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    }
    debug!("Application activated");
}

/// Make the first application window key and visible.
///
/// Returns `false` when the application has no windows at all.
pub fn order_front_any_window() -> bool {
    unsafe {
        let app = NSApp();
        if app == nil {
            return false;
        }
        let windows: id = msg_send![app, windows];
        let window: id = msg_send![windows, firstObject];
        if window == nil {
            return false;
        }
        let _: () = msg_send![window, makeKeyAndOrderFront: nil];
    }
    debug!("Fell back to first application window");
    true
}
