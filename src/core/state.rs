//! Unread state tracking

use crate::unread::UnreadCount;

/// Outcome of feeding one observation to the tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnreadChange {
    /// The tracked count differs from the previous observation
    pub changed: bool,
    /// The count went up (rising edge)
    pub should_notify: bool,
}

/// Last-known unread count and rising-edge detection.
///
/// Single-owner: it lives on the event loop thread and is only ever touched
/// through `&mut self`.
#[derive(Debug, Default)]
pub struct UnreadTracker {
    last: UnreadCount,
}

impl UnreadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation
    pub fn update(&mut self, count: UnreadCount) -> UnreadChange {
        if count == self.last {
            return UnreadChange::default();
        }

        let change = UnreadChange {
            changed: true,
            should_notify: count > self.last,
        };
        self.last = count;
        change
    }

    pub fn current(&self) -> UnreadCount {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u32) -> UnreadCount {
        UnreadCount::new(value)
    }

    #[test]
    fn test_starts_at_zero() {
        let mut tracker = UnreadTracker::new();
        assert_eq!(tracker.current(), UnreadCount::ZERO);
        assert_eq!(tracker.update(n(0)), UnreadChange::default());
    }

    #[test]
    fn test_repeat_is_noop() {
        let mut tracker = UnreadTracker::new();
        assert!(tracker.update(n(4)).changed);
        let second = tracker.update(n(4));
        assert!(!second.changed);
        assert!(!second.should_notify);
    }

    #[test]
    fn test_rising_edge_notifies() {
        let mut tracker = UnreadTracker::new();
        tracker.update(n(0));
        let change = tracker.update(n(1));
        assert!(change.changed);
        assert!(change.should_notify);
    }

    #[test]
    fn test_falling_edge_changes_without_notify() {
        let mut tracker = UnreadTracker::new();
        tracker.update(n(5));
        let change = tracker.update(n(3));
        assert!(change.changed);
        assert!(!change.should_notify);
        assert_eq!(tracker.current(), n(3));
    }
}
