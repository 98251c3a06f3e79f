//! Task list and the current selection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::WidgetError;

/// Opaque task identifier, never reused within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

/// Ordered tasks plus at most one selected task
#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    tasks: Vec<Task>,
    selected: Option<TaskId>,
    next_id: u64,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a task with the trimmed text
    pub fn add(&mut self, text: &str) -> Result<TaskId, WidgetError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WidgetError::EmptyTaskText);
        }

        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task {
            id,
            text: text.to_string(),
        });
        Ok(id)
    }

    /// Remove a task, clearing the selection if it pointed at it.
    ///
    /// Returns false when no task had that id.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let initial_count = self.tasks.len();
        self.tasks.retain(|task| task.id != id);

        if self.selected == Some(id) {
            self.selected = None;
        }

        self.tasks.len() != initial_count
    }

    pub fn select(&mut self, id: TaskId) -> Result<(), WidgetError> {
        if self.get(id).is_none() {
            return Err(WidgetError::UnknownTask(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Text of the selected task, `None` when nothing is selected
    pub fn current_task_text(&self) -> Option<&str> {
        self.selected
            .and_then(|id| self.get(id))
            .map(|task| task.text.as_str())
    }
}
