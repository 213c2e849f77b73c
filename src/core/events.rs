//! Application event definitions

use crate::tray::StatusAction;
use crate::unread::UnreadCount;
use tokio::sync::mpsc;
use winit::event_loop::EventLoopProxy;

/// Wrapper around `mpsc::UnboundedSender<AppEvent>` that also wakes the winit
/// event loop via `EventLoopProxy::send_event()` after every send. Every
/// background producer (tray thread, poller, web view callbacks) goes through
/// this, so all UI state is mutated on the event loop thread.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<AppEvent>,
    proxy: Option<EventLoopProxy<()>>,
}

impl EventSender {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, proxy: EventLoopProxy<()>) -> Self {
        Self {
            tx,
            proxy: Some(proxy),
        }
    }

    /// Sender without an event loop to wake; the receiver has to poll.
    pub fn detached(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx, proxy: None }
    }

    pub fn send(&self, event: AppEvent) -> Result<(), mpsc::error::SendError<AppEvent>> {
        let result = self.tx.send(event);
        if let Some(proxy) = &self.proxy {
            let _ = proxy.send_event(());
        }
        result
    }
}

/// Application-wide events for inter-module communication
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Status-bar menu action triggered
    StatusAction(StatusAction),

    /// Main frame started loading
    PageLoadStarted(String),

    /// Main frame finished loading
    PageLoaded(String),

    /// Unread count decoded from a page message
    UnreadObserved(UnreadCount),

    /// Poll tick: ask the page for its title
    PollTitle,

    /// Title read back from the page
    TitleObserved(String),

    /// User clicked a link leaving the current origin
    LinkActivated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_sender_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sender = EventSender::detached(tx);

        sender.send(AppEvent::PollTitle).unwrap();
        assert_eq!(rx.try_recv().unwrap(), AppEvent::PollTitle);
    }

    #[test]
    fn test_send_fails_once_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sender = EventSender::detached(tx);
        drop(rx);

        assert!(sender.send(AppEvent::PollTitle).is_err());
    }
}
