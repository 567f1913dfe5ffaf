//! Integration tests for the game loop: gravity, lock, line clears, game over

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockfall::core::{is_valid, Board, GameState, Piece, ShapeKind, TickOutcome};
use blockfall::types::{BlockColor, GameAction, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

fn tick_until_lock(state: &mut GameState) -> TickOutcome {
    for _ in 0..=BOARD_HEIGHT as usize + 4 {
        match state.tick() {
            TickOutcome::Fell => continue,
            outcome => return outcome,
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.game_over());
    assert!(is_valid(state.board(), state.falling()));

    let outcome = tick_until_lock(&mut state);
    assert!(matches!(outcome, TickOutcome::Locked { .. }));
    assert_eq!(state.locked_pieces(), 1);
    assert_eq!(state.board().occupied_count(), 4);
}

#[test]
fn test_end_to_end_i_piece_locks_on_bottom_row() {
    let i_piece = Piece::new(ShapeKind::I.shape(), BlockColor::Cyan);
    let next = Piece::new(ShapeKind::T.shape(), BlockColor::Purple);
    let mut state = GameState::from_parts(Board::new(), i_piece, next, 1);
    assert_eq!((state.falling().x, state.falling().y), (3, 0));

    let mut descents = 0;
    for _ in 0..20 {
        if !state.move_down() {
            break;
        }
        descents += 1;
    }
    assert_eq!(descents, 19);
    assert_eq!(state.falling().y, 19);

    let outcome = state.tick();
    assert_eq!(outcome.cleared_rows(), &[] as &[usize]);
    assert!(matches!(outcome, TickOutcome::Locked { .. }));

    for x in 0..BOARD_WIDTH as i8 {
        let expected = if (3..=6).contains(&x) {
            Some(BlockColor::Cyan)
        } else {
            None
        };
        assert_eq!(state.board().get(x, 19), Some(expected), "column {x}");
    }
    assert_eq!(state.board().occupied_count(), 4);

    // The pre-generated next piece is now falling, back at spawn.
    assert_eq!(*state.falling(), next);
    assert_eq!((state.falling().x, state.falling().y), (SPAWN_X, SPAWN_Y));
    assert!(!state.game_over());
}

#[test]
fn test_single_line_clear_on_lock() {
    let mut board = Board::new();
    for x in (0..3).chain(7..10) {
        board.set(x, 19, Some(BlockColor::Red));
    }
    board.set(0, 18, Some(BlockColor::Green));
    board.set(9, 17, Some(BlockColor::Blue));

    let i_piece = Piece::new(ShapeKind::I.shape(), BlockColor::Yellow);
    let next = Piece::new(ShapeKind::O.shape(), BlockColor::Orange);
    let mut state = GameState::from_parts(board, i_piece, next, 5);

    let outcome = tick_until_lock(&mut state);
    assert_eq!(outcome.cleared_rows(), &[19]);

    let board = state.board();
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
    assert_eq!(board.get(0, 19), Some(Some(BlockColor::Green)));
    assert_eq!(board.get(9, 18), Some(Some(BlockColor::Blue)));
    assert_eq!(board.occupied_count(), 2);
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_multi_line_clear_on_lock() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 18, Some(BlockColor::Red));
        board.set(x, 19, Some(BlockColor::Red));
    }
    board.set(0, 17, Some(BlockColor::Green));

    let vertical_i = Piece::new(ShapeKind::I.shape().rotated_cw(), BlockColor::Cyan).at(9, 0);
    let next = Piece::new(ShapeKind::T.shape(), BlockColor::Blue);
    let mut state = GameState::from_parts(board, vertical_i, next, 9);

    let outcome = tick_until_lock(&mut state);
    assert_eq!(outcome.cleared_rows(), &[18, 19]);

    let board = state.board();
    // The top half of the I and the marker each drop two rows.
    assert_eq!(board.get(9, 18), Some(Some(BlockColor::Cyan)));
    assert_eq!(board.get(9, 19), Some(Some(BlockColor::Cyan)));
    assert_eq!(board.get(0, 19), Some(Some(BlockColor::Green)));
    assert_eq!(board.occupied_count(), 3);
    let empty = |row: &[Option<BlockColor>]| row.iter().all(|c| c.is_none());
    assert!(board.rows().take(18).all(empty));
}

#[test]
fn test_game_over_when_next_piece_is_blocked() {
    let mut board = Board::new();
    board.set(5, 0, Some(BlockColor::Purple));

    // Already resting on the floor, so the first tick locks it.
    let o_piece = Piece::new(ShapeKind::O.shape(), BlockColor::Red).at(0, 18);
    let i_piece = Piece::new(ShapeKind::I.shape(), BlockColor::Cyan);
    let mut state = GameState::from_parts(board, o_piece, i_piece, 3);
    assert!(!state.game_over());

    let outcome = state.tick();
    assert!(matches!(outcome, TickOutcome::GameOver { .. }));
    assert!(state.game_over());
    assert_eq!(*state.falling(), i_piece);
    assert!(!is_valid(state.board(), state.falling()));

    // Nothing moves once the game is over.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(matches!(state.tick(), TickOutcome::GameOver { .. }));
    assert_eq!(state.locked_pieces(), 1);
}

#[test]
fn test_soft_drop_never_locks() {
    let o_piece = Piece::new(ShapeKind::O.shape(), BlockColor::Red).at(0, 18);
    let next = Piece::new(ShapeKind::T.shape(), BlockColor::Blue);
    let mut state = GameState::from_parts(Board::new(), o_piece, next, 3);

    assert!(!state.apply_action(GameAction::SoftDrop));
    assert_eq!(*state.falling(), o_piece);
    assert_eq!(state.board().occupied_count(), 0);
}

#[test]
fn test_actions_dispatch_to_moves() {
    let t = Piece::new(ShapeKind::T.shape(), BlockColor::Green);
    let mut state = GameState::from_parts(Board::new(), t, t, 0);

    assert!(state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.falling().x, SPAWN_X - 1);
    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.falling().x, SPAWN_X);
    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.falling().y, SPAWN_Y + 1);
    assert!(state.apply_action(GameAction::Rotate));
    assert_eq!(state.falling().shape, ShapeKind::T.shape().rotated_cw());
}

#[test]
fn test_falling_piece_stays_valid_under_random_play() {
    for seed in 0..8u64 {
        let mut state = GameState::new(seed);
        let mut rng = StdRng::seed_from_u64(seed ^ 0xdead_beef);
        let actions = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
        ];

        for _ in 0..2000 {
            for _ in 0..rng.gen_range(0..4) {
                let action = actions[rng.gen_range(0..actions.len())];
                state.apply_action(action);
                assert!(is_valid(state.board(), state.falling()));
            }

            let outcome = state.tick();
            if state.game_over() {
                assert!(matches!(outcome, TickOutcome::GameOver { .. }));
                break;
            }
            assert!(is_valid(state.board(), state.falling()));
            // Full rows never survive a tick.
            let board = state.board();
            assert!((0..BOARD_HEIGHT as usize).all(|y| !board.is_row_full(y)));
        }
    }
}

#[test]
fn test_reported_seed_replays_the_game() {
    let mut played = GameState::new(2024);
    while !played.game_over() {
        played.tick();
    }

    let mut replay = GameState::new(played.seed());
    while !replay.game_over() {
        replay.tick();
    }
    assert_eq!(replay.board(), played.board());
    assert_eq!(replay.locked_pieces(), played.locked_pieces());
}
