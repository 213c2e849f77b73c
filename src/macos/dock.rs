//! Dock tile badge

#![allow(deprecated)] // cocoa crate deprecation warnings

use cocoa::appkit::NSApp;
use cocoa::base::{id, nil};
use cocoa::foundation::{NSAutoreleasePool, NSString};
use objc::{msg_send, sel, sel_impl};
use tracing::debug;

/// Set the Dock badge; `None` clears it. Call on the main thread only.
pub fn set_badge_label(label: Option<&str>) {
    unsafe {
        let _pool = NSAutoreleasePool::new(nil);

        let app = NSApp();
        if app == nil {
            return;
        }

        let dock_tile: id = msg_send![app, dockTile];
        let label: id = match label {
            Some(text) => NSString::alloc(nil).init_str(text).autorelease(),
            None => nil,
        };
        let _: () = msg_send![dock_tile, setBadgeLabel: label];
    }

    debug!("Dock badge set to {:?}", label);
}
