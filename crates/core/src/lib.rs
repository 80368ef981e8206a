//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is free of UI, terminal and clock concerns:
//!
//! - **Deterministic**: the same seed (or fixed piece sequence) replays the same game
//! - **Synchronous**: every command runs to completion and reports what changed
//! - **Zero-allocation commands**: events come back in a fixed-capacity [`Events`] list
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, placement checks, locking and line clearing
//! - [`pieces`]: tetromino shape matrices and clockwise rotation
//! - [`engine`]: the [`GameEngine`] state machine (spawn, move, rotate, drop, lock, reset)
//! - [`events`]: [`EngineEvent`], [`TimerSignal`] and the [`GameObserver`] callback trait
//! - [`rng`]: seeded uniform piece selection and fixed sequences
//! - [`scoring`]: line-clear points
//! - [`snapshot`]: renderable copy of the game state
//!
//! # Rules
//!
//! - Pieces spawn centered on the top row and fall one row per timer tick
//! - A piece that cannot fall further locks; full rows are removed
//! - Clearing `n` rows with one lock scores `n² × 100`
//! - Rotation is 90° clockwise in place, with no wall kicks
//! - The game ends when a new piece does not fit; only a reset restarts it
//!
//! # Example
//!
//! ```
//! use fruit_blocks_core::{EngineEvent, GameEngine, TimerSignal};
//! use fruit_blocks_types::Command;
//!
//! let mut game = GameEngine::new(12345);
//! let events = game.start();
//! assert!(events.contains(&EngineEvent::Timer(TimerSignal::Arm { interval_ms: 700 })));
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.active().unwrap().y, 1);
//! ```

pub mod board;
pub mod engine;
pub mod events;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use fruit_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{ActivePiece, GameEngine};
pub use events::{EngineEvent, Events, GameObserver, RecordingObserver, TimerSignal};
pub use pieces::{spawn_shape, PieceShape};
pub use rng::{FixedPieces, PieceSource, SimpleRng, UniformPieces};
pub use scoring::line_clear_score;
pub use snapshot::{fnv1a64_board, ActiveSnapshot, GameSnapshot};
