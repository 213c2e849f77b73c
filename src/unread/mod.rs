//! Unread-count detection
//!
//! The count is scraped from the hosted page's title, either pushed by an
//! injected observer script or polled from the host side.

pub mod dispatcher;
pub mod poller;
pub mod script;
pub mod title;

pub use dispatcher::UnreadDispatcher;
pub use poller::TitlePoller;
pub use title::parse_unread;

use std::fmt;

/// Number of unread conversations shown by the hosted page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnreadCount(u32);

impl UnreadCount {
    pub const ZERO: UnreadCount = UnreadCount(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Clamp a signed value into range (negatives become zero)
    pub fn from_signed(value: i64) -> Self {
        Self(value.clamp(0, u32::MAX as i64) as u32)
    }

    /// Truncate a float toward zero and clamp it into range.
    /// Returns `None` for NaN and infinities.
    pub fn from_float(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value <= 0.0 {
            return Some(Self::ZERO);
        }
        if value >= u32::MAX as f64 {
            return Some(Self(u32::MAX));
        }
        Some(Self(value.trunc() as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for UnreadCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UnreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
