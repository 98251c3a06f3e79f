//! Tick source abstraction driving the countdown

use tokio::sync::watch;

/// Once-per-second scheduler the widget arms while running.
///
/// Implementations only schedule; the widget's `tick` does the counting.
pub trait TickSource {
    fn arm(&mut self);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
}

/// Tick source for tests: nothing fires on its own, callers invoke `tick` directly
#[derive(Debug, Default)]
pub struct ManualTickSource {
    armed: bool,
    pub arm_count: u32,
    pub disarm_count: u32,
}

impl ManualTickSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for ManualTickSource {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.disarm_count += 1;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Tick source backed by a watch flag observed by the ticker task
#[derive(Debug)]
pub struct WatchTickSource {
    armed_tx: watch::Sender<bool>,
}

impl WatchTickSource {
    /// Create the source and the receiver the ticker task listens on
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (armed_tx, armed_rx) = watch::channel(false);
        (Self { armed_tx }, armed_rx)
    }

    /// Another receiver for the same flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.armed_tx.subscribe()
    }
}

impl TickSource for WatchTickSource {
    fn arm(&mut self) {
        self.armed_tx.send_replace(true);
    }

    fn disarm(&mut self) {
        self.armed_tx.send_replace(false);
    }

    fn is_armed(&self) -> bool {
        *self.armed_tx.borrow()
    }
}
