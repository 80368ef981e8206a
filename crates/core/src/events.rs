//! Engine events - what a command changed, for the presentation layer.
//!
//! Every engine command returns the events it produced, in order. Callers either
//! inspect them directly or forward them to a [`GameObserver`] with
//! [`GameEngine::dispatch`](crate::GameEngine::dispatch).

use arrayvec::ArrayVec;

use crate::snapshot::GameSnapshot;

/// Request to the external drop timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// (Re)start firing `tick()` every `interval_ms`.
    Arm { interval_ms: u32 },
    /// Stop firing until the next `Arm`.
    Disarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Board or active piece should be redrawn.
    StateChanged,
    /// Score changed to the given value.
    ScoreChanged(u32),
    /// The game just ended.
    GameOver { score: u32 },
    Timer(TimerSignal),
}

/// Upper bound on events from one command (reset: state, score, arm, and a
/// failed spawn's game over + disarm).
pub const MAX_EVENTS: usize = 6;

/// Events produced by one command. Never allocates.
pub type Events = ArrayVec<EngineEvent, MAX_EVENTS>;

/// Callback-style receiver for engine events. All methods default to no-ops.
pub trait GameObserver {
    fn on_state_changed(&mut self, _snapshot: &GameSnapshot) {}

    fn on_score_changed(&mut self, _score: u32) {}

    fn on_game_over(&mut self, _score: u32) {}

    fn on_timer(&mut self, _signal: TimerSignal) {}
}

/// Collects everything it is told. Handy for tests and scripted runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub redraws: usize,
    pub last_snapshot: Option<GameSnapshot>,
    pub scores: Vec<u32>,
    pub game_overs: Vec<u32>,
    pub timer: Vec<TimerSignal>,
}

impl GameObserver for RecordingObserver {
    fn on_state_changed(&mut self, snapshot: &GameSnapshot) {
        self.redraws += 1;
        self.last_snapshot = Some(*snapshot);
    }

    fn on_score_changed(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn on_game_over(&mut self, score: u32) {
        self.game_overs.push(score);
    }

    fn on_timer(&mut self, signal: TimerSignal) {
        self.timer.push(signal);
    }
}
