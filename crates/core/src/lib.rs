//! Core game logic - pure, deterministic and testable
//!
//! This crate holds every game rule and has no dependency on the terminal:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: boards and pieces can be built directly and stepped by hand
//! - **Allocation-free**: moves, ticks and line clears use fixed-size storage
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells and line clearing
//! - [`pieces`]: shape matrices, the seven-piece catalog and random spawning
//! - [`movement`]: validity check plus the move/rotate/place operations
//! - [`game_state`]: falling and next piece, gravity ticks, lock and game over
//!
//! # Rules
//!
//! - Shapes and colors are picked independently and uniformly at random
//! - Rotation turns the shape matrix clockwise about its own bounding box;
//!   a rotation that collides is simply undone (no wall kicks)
//! - The O piece does not rotate
//! - A piece locks on the first gravity tick that cannot move it down
//! - Every full row is cleared at lock time
//! - The game ends when a freshly promoted piece does not fit at spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // An empty board always has room for the first piece to fall.
//! assert_eq!(game.tick(), TickOutcome::Fell);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod movement;
pub mod pieces;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use game_state::{GameState, TickOutcome};
pub use movement::{is_valid, move_down, move_horizontal, place, rotate};
pub use pieces::{spawn, Piece, Shape, ShapeKind};
