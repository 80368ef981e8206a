//! Game engine - owns the board, the falling piece and the score.
//!
//! The engine is synchronous and never touches a rendering surface or a clock.
//! An external timer calls [`GameEngine::tick`] every drop interval and the input
//! layer calls [`GameEngine::apply`]. Each call returns the [`Events`] it produced,
//! including requests to arm or disarm that timer.
//!
//! While the game is over every command except `Reset` is ignored.

use std::fmt;

use log::{debug, info};

use crate::board::Board;
use crate::events::{EngineEvent, Events, GameObserver, TimerSignal};
use crate::pieces::{spawn_shape, PieceShape};
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::line_clear_score;
use crate::snapshot::{fnv1a64_board, ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameStatus, PieceKind, BOARD_WIDTH, DROP_INTERVAL_MS};

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: PieceShape,
    /// Board column of the shape's top-left cell.
    pub x: i8,
    /// Board row of the shape's top-left cell.
    pub y: i8,
}

impl ActivePiece {
    /// A piece of `kind` in spawn orientation, centered horizontally on row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.x, self.y)
    }
}

pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    lines: u32,
    status: GameStatus,
    started: bool,
    drop_interval_ms: u32,
    pieces: Box<dyn PieceSource>,
}

impl GameEngine {
    /// Create an engine drawing uniformly random pieces from `seed`.
    ///
    /// Nothing is spawned until [`GameEngine::start`].
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformPieces::new(seed))
    }

    /// Create an engine with a custom piece source.
    pub fn with_source(source: impl PieceSource + 'static) -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
            started: false,
            drop_interval_ms: DROP_INTERVAL_MS,
            pieces: Box::new(source),
        }
    }

    /// Override the drop interval reported in timer `Arm` signals. Zero is ignored.
    pub fn with_drop_interval_ms(mut self, interval_ms: u32) -> Self {
        if interval_ms > 0 {
            self.drop_interval_ms = interval_ms;
        }
        self
    }

    /// Start the first game. Later calls do nothing; use `Reset` to restart.
    pub fn start(&mut self) -> Events {
        if self.started {
            return Events::new();
        }
        self.reset()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total lines cleared this game.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.board_hash = fnv1a64_board(&out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Whether `shape` fits on the current board with its top-left cell at (x, y).
    pub fn is_valid_placement(&self, shape: &PieceShape, x: i8, y: i8) -> bool {
        self.board.can_place(shape, x, y)
    }

    /// Apply an input command.
    pub fn apply(&mut self, command: Command) -> Events {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::Reset => self.reset(),
        }
    }

    /// Apply a command and forward its events to `observer`.
    pub fn apply_with(&mut self, command: Command, observer: &mut impl GameObserver) -> Events {
        let events = self.apply(command);
        self.dispatch(&events, observer);
        events
    }

    /// Forward `events` to `observer`, in order.
    ///
    /// `StateChanged` is delivered with a snapshot of the engine as it is now.
    pub fn dispatch(&self, events: &[EngineEvent], observer: &mut impl GameObserver) {
        for event in events {
            match *event {
                EngineEvent::StateChanged => observer.on_state_changed(&self.snapshot()),
                EngineEvent::ScoreChanged(score) => observer.on_score_changed(score),
                EngineEvent::GameOver { score } => observer.on_game_over(score),
                EngineEvent::Timer(signal) => observer.on_timer(signal),
            }
        }
    }

    pub fn move_left(&mut self) -> Events {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> Events {
        self.shift(1)
    }

    /// Move the piece down one row, locking it if it cannot move.
    pub fn soft_drop(&mut self) -> Events {
        self.drop_one()
    }

    /// Timer step. Same as a soft drop.
    pub fn tick(&mut self) -> Events {
        self.drop_one()
    }

    /// Rotate the piece 90° clockwise in place. Rejected if it does not fit.
    pub fn rotate(&mut self) -> Events {
        let mut events = Events::new();
        let Some(active) = self.playable_piece() else {
            return events;
        };

        let rotated = active.shape.rotated_cw();
        if self.board.can_place(&rotated, active.x, active.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..active
            });
        }
        events.push(EngineEvent::StateChanged);
        events
    }

    /// Empty the board, zero the score and spawn a fresh piece.
    pub fn reset(&mut self) -> Events {
        let mut events = Events::new();
        let first_game = !self.started;

        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
        self.started = true;

        if first_game {
            info!("game started (drop interval {}ms)", self.drop_interval_ms);
        } else {
            info!("game reset");
        }

        events.push(EngineEvent::ScoreChanged(0));
        events.push(EngineEvent::Timer(TimerSignal::Arm {
            interval_ms: self.drop_interval_ms,
        }));
        self.spawn_into(&mut events);
        events.push(EngineEvent::StateChanged);
        events
    }

    /// Spawn a new piece from the piece source.
    ///
    /// If it does not fit, the game is over: the board is left untouched and
    /// no piece is active. Ignored once the game is over.
    pub fn spawn_piece(&mut self) -> Events {
        let mut events = Events::new();
        if self.game_over() {
            return events;
        }
        self.spawn_into(&mut events);
        events.push(EngineEvent::StateChanged);
        events
    }

    fn spawn_into(&mut self, events: &mut Events) {
        let piece = ActivePiece::spawn(self.pieces.next_kind());

        if !piece.is_valid(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                "game over: {:?} cannot spawn at x={} (score {})",
                piece.kind, piece.x, self.score
            );
            events.push(EngineEvent::GameOver { score: self.score });
            events.push(EngineEvent::Timer(TimerSignal::Disarm));
            return;
        }

        debug!("spawned {:?} at x={}", piece.kind, piece.x);
        self.active = Some(piece);
    }

    fn playable_piece(&self) -> Option<ActivePiece> {
        if self.game_over() {
            return None;
        }
        self.active
    }

    fn shift(&mut self, dx: i8) -> Events {
        let mut events = Events::new();
        let Some(active) = self.playable_piece() else {
            return events;
        };

        let x = active.x + dx;
        if self.board.can_place(&active.shape, x, active.y) {
            self.active = Some(ActivePiece { x, ..active });
        }
        // Blocked moves still redraw.
        events.push(EngineEvent::StateChanged);
        events
    }

    fn drop_one(&mut self) -> Events {
        let mut events = Events::new();
        let Some(active) = self.playable_piece() else {
            return events;
        };

        let y = active.y + 1;
        if self.board.can_place(&active.shape, active.x, y) {
            self.active = Some(ActivePiece { y, ..active });
        } else {
            self.lock(active, &mut events);
        }
        events.push(EngineEvent::StateChanged);
        events
    }

    fn lock(&mut self, piece: ActivePiece, events: &mut Events) {
        self.board
            .lock_piece(&piece.shape, piece.x, piece.y, piece.kind);
        self.active = None;

        let cleared = self.board.clear_completed_lines();
        debug!(
            "locked {:?} at ({}, {}), cleared {} line(s)",
            piece.kind, piece.x, piece.y, cleared
        );

        if cleared > 0 {
            self.lines += cleared;
            self.score = self.score.saturating_add(line_clear_score(cleared));
            events.push(EngineEvent::ScoreChanged(self.score));
        }

        self.spawn_into(events);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("active", &self.active)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("status", &self.status)
            .field("started", &self.started)
            .field("drop_interval_ms", &self.drop_interval_ms)
            .finish_non_exhaustive()
    }
}
