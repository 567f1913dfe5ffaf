//! Shared types and constants for the Blockfall workspace.
//!
//! Everything in here is plain data with no dependencies, so it can be used
//! by the engine, the input mapping and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0), i.e. `BOARD_WIDTH / 2 - 2` on the top row
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BlockColor, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 3);
//!
//! assert_eq!(BlockColor::Orange.rgb(), (255, 165, 0));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for the top-left corner of a new piece's shape matrix.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn row for the top-left corner of a new piece's shape matrix.
pub const SPAWN_Y: i8 = 0;

/// Largest side of any shape matrix (the I piece, either orientation).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Frames (and gravity ticks) per second of the main loop.
pub const DEFAULT_FPS: u32 = 5;

/// Block colors. Color is chosen independently of shape when a piece spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Cyan,
    Purple,
}

impl BlockColor {
    /// The full palette, in palette order.
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Yellow,
        BlockColor::Orange,
        BlockColor::Cyan,
        BlockColor::Purple,
    ];

    /// 24-bit RGB components.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            BlockColor::Red => (255, 0, 0),
            BlockColor::Green => (0, 255, 0),
            BlockColor::Blue => (0, 0, 255),
            BlockColor::Yellow => (255, 255, 0),
            BlockColor::Orange => (255, 165, 0),
            BlockColor::Cyan => (0, 255, 255),
            BlockColor::Purple => (128, 0, 128),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Red => "red",
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Yellow => "yellow",
            BlockColor::Orange => "orange",
            BlockColor::Cyan => "cyan",
            BlockColor::Purple => "purple",
        }
    }
}

/// Player commands understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Cell on the board (None = empty, Some = filled with the color of the piece that landed there)
pub type Cell = Option<BlockColor>;
