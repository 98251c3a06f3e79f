//! Display projection of the widget state

use serde::{Deserialize, Serialize};

use super::{timer_state::SESSIONS_PER_CYCLE, Mode, TaskListState, TimerState};

/// Text shown when no task is selected
pub const NO_TASK_SELECTED: &str = "No task selected";

/// Everything the rendering layer needs, derived from the widget state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Countdown as `MM:SS`
    pub clock: String,
    /// Liquid level of the cup visualization, 0 to 100
    pub fill_percent: f64,
    pub status: String,
    pub mode: Mode,
    pub running: bool,
    /// Session position as `index/4`
    pub session: String,
    pub completed: u32,
    pub current_task: String,
}

impl Display {
    /// Pure projection, no side effects
    pub fn project(timer: &TimerState, tasks: &TaskListState) -> Self {
        let current_task = match tasks.current_task_text() {
            Some(text) => format!("Working on: {}", text),
            None => NO_TASK_SELECTED.to_string(),
        };

        Self {
            clock: timer.clock_text(),
            fill_percent: timer.fill_percent(),
            status: timer.status_label().to_string(),
            mode: timer.mode,
            running: timer.running,
            session: format!("{}/{}", timer.session_index, SESSIONS_PER_CYCLE),
            completed: timer.completed_count,
            current_task,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::project(&TimerState::default(), &TaskListState::default())
    }
}
