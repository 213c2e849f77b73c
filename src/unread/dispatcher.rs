//! Routes unread observations to the OS surfaces and the notifier

use super::{parse_unread, UnreadCount};
use crate::core::config::{NotificationConfig, StatusConfig};
use crate::core::state::{UnreadChange, UnreadTracker};
use crate::notify::{NotificationRequest, Notifier};
use crate::surface::{SurfaceUpdate, UnreadSurface};
use tracing::{debug, info};

/// Owns the unread tracker; lives on the event loop thread
pub struct UnreadDispatcher {
    tracker: UnreadTracker,
    base_icon: String,
    notifications: NotificationConfig,
    permission_requested: bool,
    // Latest rising edge seen before the first page load
    pending: Option<NotificationRequest>,
}

impl UnreadDispatcher {
    pub fn new(status: &StatusConfig, notifications: &NotificationConfig) -> Self {
        Self {
            tracker: UnreadTracker::new(),
            base_icon: status.base_icon.clone(),
            notifications: notifications.clone(),
            permission_requested: false,
            pending: None,
        }
    }

    /// Feed one accepted observation through the tracker
    pub fn observe<S, N>(&mut self, count: UnreadCount, surface: &mut S, notifier: &N) -> UnreadChange
    where
        S: UnreadSurface + ?Sized,
        N: Notifier + ?Sized,
    {
        let change = self.tracker.update(count);
        if !change.changed {
            return change;
        }

        info!("Unread count changed to {}", count);
        surface.apply(&SurfaceUpdate::for_count(&self.base_icon, count));

        if !self.notifications.enabled {
            return change;
        }

        if change.should_notify {
            let request = NotificationRequest::unread(count, &self.notifications);
            if self.permission_requested {
                notifier.submit(request);
            } else {
                debug!("Holding notification until the page has loaded");
                self.pending = Some(request);
            }
        } else if count.is_zero() {
            self.pending = None;
        }

        change
    }

    /// Parse a polled title and feed the result
    pub fn observe_title<S, N>(&mut self, title: &str, surface: &mut S, notifier: &N) -> UnreadChange
    where
        S: UnreadSurface + ?Sized,
        N: Notifier + ?Sized,
    {
        self.observe(parse_unread(title), surface, notifier)
    }

    /// Called on every completed page load; asks for notification permission
    /// the first time only, then delivers anything held back until now.
    pub fn page_loaded<N: Notifier + ?Sized>(&mut self, notifier: &N) {
        if self.permission_requested || !self.notifications.enabled {
            return;
        }
        self.permission_requested = true;
        debug!("Requesting notification permission");
        notifier.request_permission();

        if let Some(request) = self.pending.take() {
            notifier.submit(request);
        }
    }

    /// Render the current count, e.g. once the status item exists
    pub fn refresh<S: UnreadSurface + ?Sized>(&self, surface: &mut S) {
        surface.apply(&SurfaceUpdate::for_count(&self.base_icon, self.tracker.current()));
    }

    /// Clear the surfaces on shutdown
    pub fn clear<S: UnreadSurface + ?Sized>(&self, surface: &mut S) {
        surface.apply(&SurfaceUpdate::for_count(&self.base_icon, UnreadCount::ZERO));
    }

    pub fn current(&self) -> UnreadCount {
        self.tracker.current()
    }
}
