//! Liveness flag shared with web view callbacks

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cleared when the owning view is torn down. Callbacks the web engine may
/// still fire afterwards check it before dispatching anything.
#[derive(Debug, Clone)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn invalidate(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_is_shared() {
        let owner = ViewLifetime::new();
        let callback = owner.clone();
        assert!(callback.is_alive());

        owner.invalidate();
        assert!(!callback.is_alive());
    }
}
