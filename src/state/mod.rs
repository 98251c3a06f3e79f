//! State management module
//! 
//! This module contains the timer state machine, the task list, the widget
//! controller combining them, and the shared server state hosting one widget.

pub mod app_state;
pub mod display;
pub mod error;
pub mod task_list;
pub mod tick_source;
pub mod timer_state;
pub mod widget;

// Re-export main types
pub use app_state::AppState;
pub use display::Display;
pub use error::{SessionError, WidgetError};
pub use task_list::{Task, TaskId, TaskListState};
pub use tick_source::{ManualTickSource, TickSource, WatchTickSource};
pub use timer_state::{CycleCompleted, Mode, TimerState};
pub use widget::Widget;
