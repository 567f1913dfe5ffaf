//! Terminal rendering for the game.
//!
//! The game state is drawn into a plain framebuffer of styled characters
//! ([`GameView`]), which [`TerminalRenderer`] then flushes through crossterm.
//! Drawing is pure and testable; only the renderer touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, PREVIEW_GAP};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
