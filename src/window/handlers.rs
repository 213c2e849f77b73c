//! Web view callbacks
//!
//! These run on whatever context the web engine picks. They decode what they
//! receive, then hand it to the event loop; none of them touch UI state.

use super::lifetime::ViewLifetime;
use crate::bridge::BridgeMessage;
use crate::core::events::{AppEvent, EventSender};
use crate::navigation::{NavigationDecision, NavigationPolicy, NavigationTrigger};
use tracing::{debug, trace};

/// Dispatches events to the event loop while the view is alive
#[derive(Clone)]
pub struct ViewEvents {
    event_tx: EventSender,
    lifetime: ViewLifetime,
}

impl ViewEvents {
    pub fn new(event_tx: EventSender, lifetime: ViewLifetime) -> Self {
        Self { event_tx, lifetime }
    }

    /// Send unless the view has been torn down. Returns whether the event was
    /// queued.
    pub fn dispatch(&self, event: AppEvent) -> bool {
        if !self.lifetime.is_alive() {
            trace!("View gone, dropping {:?}", event);
            return false;
        }
        self.event_tx.send(event).is_ok()
    }

    /// Handle a raw `window.ipc.postMessage` body
    pub fn on_ipc(&self, body: &str) {
        let message = match BridgeMessage::parse(body) {
            Ok(message) => message,
            Err(e) => {
                debug!("Dropping bridge message: {}", e);
                return;
            }
        };

        match message {
            BridgeMessage::UnreadCount(payload) => match payload.count() {
                Ok(count) => {
                    self.dispatch(AppEvent::UnreadObserved(count));
                }
                Err(e) => debug!("Dropping unread payload: {}", e),
            },
            BridgeMessage::LinkActivated { url } => {
                self.dispatch(AppEvent::LinkActivated(url));
            }
        }
    }

    /// Result of evaluating `document.title`
    pub fn on_title(&self, title: String) {
        self.dispatch(AppEvent::TitleObserved(title));
    }
}

/// Navigation handler: anything reaching it was not a captured link click
pub fn allow_navigation(policy: &NavigationPolicy, url: &str) -> bool {
    let decision = policy.decide(url, NavigationTrigger::Other);
    trace!("Navigation to {} -> {:?}", url, decision);
    !decision.cancels_in_app()
}

/// Handler for navigations outside the main frame (iframes and popups).
/// Allowed ones load in the frame that asked for them and never touch the
/// main view; clicked links are routed by the capture script instead.
pub fn allow_frame_navigation(policy: &NavigationPolicy, url: &str) -> bool {
    let decision = policy.decide(url, NavigationTrigger::Other);
    if decision == NavigationDecision::RedirectToSystemBrowser {
        debug!("Blocking frame navigation to {}", url);
    }
    !decision.cancels_in_app()
}
