//! Terminal rendering for the game.
//!
//! A small game-oriented rendering layer: [`GameView`] paints a
//! [`fruit_blocks_core::GameSnapshot`] into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal, rewriting only
//! the cells that changed since the previous frame.
//!
//! Board cells are drawn 2 characters wide to compensate for the usual
//! terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fruit_blocks_core as core;
pub use fruit_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
