//! Productivity Timer - A Pomodoro-style timer with an attached task list
//! 
//! The `state` module holds the timer state machine and task list as a plain
//! synchronous widget; the rest of the crate serves the widget page and a
//! session API over HTTP.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Widget, WidgetError};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
