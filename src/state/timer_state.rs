//! Timer state structure and phase transitions

use serde::{Deserialize, Serialize};

/// Number of focus sessions in one cycle before the long break
pub const SESSIONS_PER_CYCLE: u32 = 4;

/// Timer mode, each with a fixed phase duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Phase duration in seconds
    pub fn duration(&self) -> u32 {
        match self {
            Mode::Focus => 25 * 60,
            Mode::ShortBreak => 5 * 60,
            Mode::LongBreak => 15 * 60,
        }
    }

    /// Status label shown while this mode is ticking
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

/// Outcome of a completed phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleCompleted {
    /// Mode of the phase that just ended
    pub finished: Mode,
    /// Mode the timer switched to
    pub next: Mode,
    /// User-facing summary of the transition
    pub message: String,
}

impl CycleCompleted {
    fn new(finished: Mode, next: Mode) -> Self {
        let message = match (finished, next) {
            (Mode::Focus, Mode::LongBreak) => "cycle complete, long break",
            (Mode::Focus, _) => "session complete, short break",
            _ => "break over, back to focus",
        };

        Self {
            finished,
            next,
            message: message.to_string(),
        }
    }
}

/// Countdown state for the current phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub mode: Mode,
    pub running: bool,
    /// Position of the current focus session within the cycle, 1-based
    pub session_index: u32,
    pub completed_count: u32,
}

impl TimerState {
    /// Create a timer at the start of the first focus session
    pub fn new() -> Self {
        Self {
            remaining_seconds: Mode::Focus.duration(),
            mode: Mode::Focus,
            running: false,
            session_index: 1,
            completed_count: 0,
        }
    }

    /// Check if the countdown is ticking
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Decrement the countdown by one second.
    ///
    /// Returns true when the countdown reached zero and the phase must complete.
    pub fn count_down(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }

    /// Move to the next phase and reset the countdown for it.
    ///
    /// Stops the countdown. `completed_count` only moves when a focus phase ends.
    pub fn advance_phase(&mut self) -> CycleCompleted {
        let finished = self.mode;
        self.running = false;

        match finished {
            Mode::Focus => {
                self.completed_count += 1;
                if self.session_index >= SESSIONS_PER_CYCLE {
                    self.mode = Mode::LongBreak;
                    self.session_index = 1;
                } else {
                    self.mode = Mode::ShortBreak;
                    self.session_index += 1;
                }
            }
            Mode::ShortBreak | Mode::LongBreak => {
                self.mode = Mode::Focus;
            }
        }

        self.remaining_seconds = self.mode.duration();
        CycleCompleted::new(finished, self.mode)
    }

    /// Countdown formatted as `MM:SS`
    pub fn clock_text(&self) -> String {
        format!("{:02}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }

    /// Share of the phase still remaining, in percent
    pub fn fill_percent(&self) -> f64 {
        f64::from(self.remaining_seconds) / f64::from(self.mode.duration()) * 100.0
    }

    pub fn status_label(&self) -> &'static str {
        if self.running {
            self.mode.label()
        } else {
            "Ready"
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
