//! Ticker background task driving the widget countdown

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that ticks the widget once per second while its tick source is armed
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut armed_rx = state.tick_armed_rx.clone();

    loop {
        // Wait until the widget arms the tick source
        while !*armed_rx.borrow_and_update() {
            if armed_rx.changed().await.is_err() {
                info!("Tick source dropped, stopping ticker task");
                return;
            }
        }

        debug!("Tick source armed, counting down");
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to tick widget: {}", e);
                    }
                }

                changed = armed_rx.changed() => {
                    if changed.is_err() {
                        info!("Tick source dropped, stopping ticker task");
                        return;
                    }
                    if !*armed_rx.borrow_and_update() {
                        debug!("Tick source disarmed");
                        break;
                    }
                    // Re-armed between ticks, start a fresh second
                    ticker.reset();
                }
            }
        }
    }
}
