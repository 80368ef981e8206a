//! Terminal input module.
//!
//! Maps `crossterm` key events into engine [`crate::types::Command`]s. Every
//! key press produces one command; terminal auto-repeat is treated as further
//! presses, so holding an arrow keeps the piece moving.

pub mod map;

pub use fruit_blocks_types as types;

pub use map::{command_for_event, handle_key_event, should_quit};
