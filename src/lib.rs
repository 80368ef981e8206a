//! Fruit Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under `fruit_blocks::{core,input,term,types}`
//! and holds the pieces shared by the terminal binary: environment
//! configuration, log setup and the drop timer.

pub mod config;
pub mod logging;
pub mod timer;

pub use fruit_blocks_core as core;
pub use fruit_blocks_input as input;
pub use fruit_blocks_term as term;
pub use fruit_blocks_types as types;

pub use config::GameConfig;
pub use timer::DropTimer;
