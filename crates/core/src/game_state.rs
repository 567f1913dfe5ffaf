//! Game state module - the board, the falling piece and the next piece
//!
//! `GameState` owns everything the loop mutates. Player actions go through the
//! speculative moves in [`crate::movement`]; [`GameState::tick`] applies gravity
//! and, when the piece can no longer fall, runs the lock sequence:
//! commit, clear full rows, promote the next piece, check for game over.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, ClearedRows};
use crate::movement::{is_valid, move_down, move_horizontal, place, rotate};
use crate::pieces::{spawn, Piece};
use crate::types::GameAction;

/// What a single gravity tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The falling piece moved down one row.
    Fell,
    /// The piece locked and the next one took its place.
    Locked { cleared: ClearedRows },
    /// The piece locked and its replacement does not fit at the spawn position.
    GameOver { cleared: ClearedRows },
}

impl TickOutcome {
    pub fn cleared_rows(&self) -> &[usize] {
        match self {
            TickOutcome::Fell => &[],
            TickOutcome::Locked { cleared } | TickOutcome::GameOver { cleared } => {
                cleared.as_slice()
            }
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    falling: Piece,
    next: Piece,
    rng: StdRng,
    seed: u64,
    game_over: bool,
    /// Number of pieces that have locked so far.
    locked_pieces: u32,
}

impl GameState {
    /// Create a new game on an empty board with the given RNG seed.
    ///
    /// Both the falling and the next piece are drawn immediately.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let falling = spawn(&mut rng);
        let next = spawn(&mut rng);
        Self {
            board: Board::new(),
            falling,
            next,
            rng,
            seed,
            game_over: false,
            locked_pieces: 0,
        }
    }

    /// Start from an explicit board and pieces. Later pieces come from `seed`.
    pub fn from_parts(board: Board, falling: Piece, next: Piece, seed: u64) -> Self {
        let game_over = !is_valid(&board, &falling);
        Self {
            board,
            falling,
            next,
            rng: StdRng::seed_from_u64(seed),
            seed,
            game_over,
            locked_pieces: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn falling(&self) -> &Piece {
        &self.falling
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    /// Shift the falling piece one column; `direction` is -1 or +1.
    pub fn move_horizontal(&mut self, direction: i8) -> bool {
        if self.game_over {
            return false;
        }
        move_horizontal(&self.board, &mut self.falling, direction)
    }

    /// Move the falling piece down one row without locking it.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        move_down(&self.board, &mut self.falling)
    }

    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        rotate(&self.board, &mut self.falling)
    }

    /// Apply a player action. Returns whether the falling piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.move_down(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// One gravity step.
    ///
    /// After game over this does nothing and keeps reporting `GameOver` with no
    /// cleared rows.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver {
                cleared: ClearedRows::new(),
            };
        }

        if move_down(&self.board, &mut self.falling) {
            return TickOutcome::Fell;
        }

        self.lock()
    }

    fn lock(&mut self) -> TickOutcome {
        place(&mut self.board, &self.falling);
        self.locked_pieces += 1;
        log::debug!(
            "locked {} piece at ({}, {})",
            self.falling.color.as_str(),
            self.falling.x,
            self.falling.y
        );

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            log::debug!("cleared rows {:?}", cleared.as_slice());
        }

        let upcoming = spawn(&mut self.rng);
        self.falling = std::mem::replace(&mut self.next, upcoming);

        if !is_valid(&self.board, &self.falling) {
            self.game_over = true;
            log::info!("game over after {} pieces", self.locked_pieces);
            return TickOutcome::GameOver { cleared };
        }

        TickOutcome::Locked { cleared }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::ShapeKind;
    use crate::types::{BlockColor, SPAWN_X, SPAWN_Y};

    #[test]
    fn new_game_spawns_two_pieces_at_spawn() {
        let state = GameState::new(7);
        assert_eq!((state.falling().x, state.falling().y), (SPAWN_X, SPAWN_Y));
        assert_eq!((state.next().x, state.next().y), (SPAWN_X, SPAWN_Y));
        assert!(!state.game_over());
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn same_seed_same_pieces() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..200 {
            assert_eq!(a.falling(), b.falling());
            assert_eq!(a.next(), b.next());
            if a.game_over() {
                break;
            }
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn actions_are_ignored_after_game_over() {
        let mut board = Board::new();
        board.set(SPAWN_X, SPAWN_Y, Some(BlockColor::Red));
        let o = Piece::new(ShapeKind::O.shape(), BlockColor::Blue);
        let mut state = GameState::from_parts(board, o, o, 1);
        assert!(state.game_over());

        let before = *state.falling();
        assert!(!state.apply_action(GameAction::MoveRight));
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(*state.falling(), before);
        assert!(state.tick().cleared_rows().is_empty());
        assert_eq!(state.locked_pieces(), 0);
    }
}
