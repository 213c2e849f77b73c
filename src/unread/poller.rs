//! Timed title polling
//!
//! Alternative to the injected observer: the host asks the page for its title
//! on a fixed interval. Ticks are produced on a dedicated thread; the callback
//! only queues work for the UI thread.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Periodic tick source, cancelled on drop
pub struct TitlePoller {
    cancelled: Arc<AtomicBool>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl TitlePoller {
    /// Start ticking every `interval`, beginning immediately.
    ///
    /// `on_tick` returns `false` when its receiver is gone, which stops the
    /// poller as well.
    pub fn start<F>(interval: Duration, on_tick: F) -> Result<Self>
    where
        F: Fn() -> bool + Send + 'static,
    {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("Failed to create poller runtime")?;

        let cancelled = Arc::new(AtomicBool::new(false));
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let thread_cancelled = Arc::clone(&cancelled);

        thread::Builder::new()
            .name("title-poller".into())
            .spawn(move || {
                rt.block_on(async {
                    let mut ticker = tokio::time::interval(interval);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

                    loop {
                        tokio::select! {
                            _ = &mut stop_rx => break,
                            _ = ticker.tick() => {
                                if thread_cancelled.load(Ordering::SeqCst) {
                                    break;
                                }
                                if !on_tick() {
                                    debug!("Poll receiver gone, stopping");
                                    break;
                                }
                            }
                        }
                    }
                });
                debug!("Title poller thread finished");
            })
            .context("Failed to spawn poller thread")?;

        info!("Title poller started ({:?} interval)", interval);

        Ok(Self {
            cancelled,
            stop_tx: Some(stop_tx),
        })
    }

    /// Stop ticking. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
            info!("Title poller cancelled");
        }
    }
}

impl Drop for TitlePoller {
    fn drop(&mut self) {
        self.cancel();
    }
}
