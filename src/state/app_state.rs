//! Shared server state hosting one widget session

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{CycleCompleted, Display, SessionError, WatchTickSource, Widget, WidgetError};

/// Widget type hosted by the server
pub type SessionWidget = Widget<WatchTickSource>;

/// Main application state shared by the HTTP handlers and the ticker task
pub struct AppState {
    /// The widget session, serializing commands and ticks
    pub widget: Arc<Mutex<SessionWidget>>,
    /// Armed flag of the session's tick source
    pub tick_armed_rx: watch::Receiver<bool>,
    /// Latest display projection published by the widget
    pub display_rx: watch::Receiver<Display>,
    /// Most recent phase completion notice
    pub last_notification: Arc<Mutex<Option<CycleCompleted>>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with a fresh widget session
    pub fn new(port: u16, host: String) -> Self {
        let (tick_source, tick_armed_rx) = WatchTickSource::new();
        let (display_tx, display_rx) = watch::channel(Display::default());
        let last_notification = Arc::new(Mutex::new(None));

        let mut widget = Widget::new(tick_source);
        widget.on_display_changed(move |display| {
            display_tx.send_replace(display.clone());
        });

        let notifications = Arc::clone(&last_notification);
        widget.on_cycle_completed(move |event: &CycleCompleted| {
            info!("🔔 {}", event.message);
            if let Ok(mut last) = notifications.lock() {
                *last = Some(event.clone());
            }
        });

        Self {
            widget: Arc::new(Mutex::new(widget)),
            tick_armed_rx,
            display_rx,
            last_notification,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Run a user command against the widget and record it as the last action
    pub fn with_widget<F, R>(&self, action: &str, command: F) -> Result<R, SessionError>
    where
        F: FnOnce(&mut SessionWidget) -> Result<R, WidgetError>,
    {
        let mut widget = self.lock_widget()?;
        let result = command(&mut *widget);
        drop(widget); // Release the lock early

        match &result {
            Ok(_) => self.record_action(action),
            Err(e) => info!("Command {} rejected: {}", action, e),
        }

        result.map_err(SessionError::from)
    }

    /// Read from the widget without mutating it
    pub fn read_widget<F, R>(&self, reader: F) -> Result<R, SessionError>
    where
        F: FnOnce(&SessionWidget) -> R,
    {
        let widget = self.lock_widget()?;
        Ok(reader(&*widget))
    }

    /// Advance the session countdown by one second
    pub fn tick(&self) -> Result<(), SessionError> {
        self.lock_widget()?.tick();
        Ok(())
    }

    /// Latest published display projection
    pub fn get_display(&self) -> Display {
        self.display_rx.borrow().clone()
    }

    pub fn get_last_notification(&self) -> Option<CycleCompleted> {
        self.last_notification.lock().ok().and_then(|n| n.clone())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn lock_widget(&self) -> Result<std::sync::MutexGuard<'_, SessionWidget>, SessionError> {
        self.widget
            .lock()
            .map_err(|e| SessionError::StateUnavailable(e.to_string()))
    }

    fn record_action(&self, action: &str) {
        debug!("Recording last action: {}", action);
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
