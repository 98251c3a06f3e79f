//! Widget controller owning the timer, the task list and the tick source

use tracing::{debug, info};

use super::{
    CycleCompleted, Display, Task, TaskId, TaskListState, TickSource, TimerState, WidgetError,
};

type DisplayListener = Box<dyn FnMut(&Display) + Send>;
type CycleListener = Box<dyn FnMut(&CycleCompleted) + Send>;

/// Single owner of all widget state. Every user command goes through here.
pub struct Widget<S: TickSource> {
    timer: TimerState,
    tasks: TaskListState,
    tick_source: S,
    display_listeners: Vec<DisplayListener>,
    cycle_listeners: Vec<CycleListener>,
}

impl<S: TickSource> Widget<S> {
    /// Create a widget with default timer state and an empty task list
    pub fn new(tick_source: S) -> Self {
        Self {
            timer: TimerState::new(),
            tasks: TaskListState::new(),
            tick_source,
            display_listeners: Vec::new(),
            cycle_listeners: Vec::new(),
        }
    }

    /// Register a callback run after every change to the display projection
    pub fn on_display_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&Display) + Send + 'static,
    {
        self.display_listeners.push(Box::new(listener));
    }

    /// Register a callback run once per phase completion
    pub fn on_cycle_completed<F>(&mut self, listener: F)
    where
        F: FnMut(&CycleCompleted) + Send + 'static,
    {
        self.cycle_listeners.push(Box::new(listener));
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.tasks.selected_id()
    }

    pub fn tick_source(&self) -> &S {
        &self.tick_source
    }

    pub fn current_task_text(&self) -> Option<&str> {
        self.tasks.current_task_text()
    }

    pub fn display(&self) -> Display {
        Display::project(&self.timer, &self.tasks)
    }

    /// Start the countdown. Requires a selected task.
    pub fn start(&mut self) -> Result<(), WidgetError> {
        if self.tasks.selected_id().is_none() {
            return Err(WidgetError::NoTaskSelected);
        }
        if self.timer.is_running() {
            debug!("Start ignored, timer already running");
            return Ok(());
        }

        self.timer.running = true;
        self.tick_source.arm();
        info!("Timer started in {:?} mode", self.timer.mode);
        self.emit_display();
        Ok(())
    }

    pub fn pause(&mut self) {
        if !self.timer.is_running() {
            debug!("Pause ignored, timer not running");
            return;
        }

        self.timer.running = false;
        self.tick_source.disarm();
        info!("Timer paused at {}", self.timer.clock_text());
        self.emit_display();
    }

    /// Stop the countdown and restore the timer defaults. Tasks are kept.
    pub fn reset(&mut self) {
        self.tick_source.disarm();
        self.timer = TimerState::new();
        info!("Timer reset");
        self.emit_display();
    }

    /// Advance the countdown by one second. Ignored while idle.
    pub fn tick(&mut self) {
        if !self.timer.is_running() {
            debug!("Tick ignored, timer not running");
            return;
        }

        if self.timer.count_down() {
            self.complete_phase();
        }
        self.emit_display();
    }

    fn complete_phase(&mut self) {
        self.tick_source.disarm();
        let event = self.timer.advance_phase();
        info!(
            "Phase {:?} complete, switching to {:?} ({} completed)",
            event.finished, event.next, self.timer.completed_count
        );

        for listener in self.cycle_listeners.iter_mut() {
            listener(&event);
        }
    }

    pub fn add_task(&mut self, text: &str) -> Result<TaskId, WidgetError> {
        let id = self.tasks.add(text)?;
        info!("Added task {}", id);
        self.emit_display();
        Ok(id)
    }

    /// Delete a task. Unknown ids are a no-op; returns whether a task was removed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let removed = self.tasks.delete(id);
        if removed {
            info!("Deleted task {}", id);
            self.emit_display();
        } else {
            debug!("Delete ignored, no task {}", id);
        }
        removed
    }

    pub fn select_task(&mut self, id: TaskId) -> Result<(), WidgetError> {
        self.tasks.select(id)?;
        info!("Selected task {}", id);
        self.emit_display();
        Ok(())
    }

    fn emit_display(&mut self) {
        if self.display_listeners.is_empty() {
            return;
        }

        let display = self.display();
        for listener in self.display_listeners.iter_mut() {
            listener(&display);
        }
    }
}
