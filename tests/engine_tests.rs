//! Engine integration tests: rules, terminal detection, and the
//! move-application properties.

use connect4_core::{Cell, GameEngine, IllegalMove, Player, COLS, ROWS};
use proptest::prelude::*;

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_unopposed_horizontal_win_end_to_end() {
    let mut engine = GameEngine::new();

    engine.apply_move(Player::One, 0).unwrap();
    assert!(!engine.is_over());
    engine.apply_move(Player::One, 1).unwrap();
    assert!(!engine.is_over());
    engine.apply_move(Player::One, 2).unwrap();
    assert!(!engine.is_over());
    engine.apply_move(Player::One, 3).unwrap();

    assert_eq!(engine.winner(), Some(Player::One));
    assert!(engine.is_over());
    assert!(!engine.is_draw());
}

#[test]
fn test_draw_on_full_board_without_four() {
    // Tiling with (column + row / 2) parity: the longest same-player run
    // in any direction is 2.
    let mut engine = GameEngine::new();
    for row in (0..ROWS).rev() {
        for column in 0..COLS {
            let player = if (column + row / 2) % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            let landed = engine.apply_move(player, column).unwrap();
            assert_eq!(landed, row);
        }
    }

    assert!(engine.is_over());
    assert!(engine.is_draw());
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.board().token_count(), ROWS * COLS);
}

#[test]
fn test_near_edge_wins_detected() {
    // Left edge, bottom row
    let mut left = GameEngine::new();
    left.apply_move(Player::Two, 1).unwrap();
    left.apply_move(Player::Two, 2).unwrap();
    left.apply_move(Player::Two, 3).unwrap();
    left.apply_move(Player::Two, 0).unwrap();
    assert_eq!(left.winner(), Some(Player::Two));

    // Top of a column: vertical run in rows 0..=3
    let mut top = GameEngine::new();
    for turn in 0..2 {
        let filler = if turn % 2 == 0 { Player::One } else { Player::Two };
        top.apply_move(filler, 5).unwrap();
    }
    for _ in 0..4 {
        top.apply_move(Player::One, 5).unwrap();
    }
    assert_eq!(top.winner(), Some(Player::One));
}

#[test]
fn test_clone_is_independent_of_original() {
    let mut engine = GameEngine::new();
    engine.apply_move(Player::One, 0).unwrap();

    let mut clone = engine.clone();
    // Alternate owners so the column fills without a vertical four
    for turn in 0..5 {
        let player = if turn % 2 == 0 { Player::Two } else { Player::One };
        clone.apply_move(player, 0).unwrap();
    }

    assert!(!clone.is_over());
    assert_eq!(engine.legal_columns().len(), 7);
    assert!(clone.legal_columns().len() < 7);
    assert_eq!(engine.board().token_count(), 1);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every successfully applied move adds exactly one token.
    #[test]
    fn prop_cell_count_matches_applied_moves(
        columns in proptest::collection::vec(0usize..COLS, 0..80)
    ) {
        let mut engine = GameEngine::new();
        let mut player = Player::One;
        let mut applied = 0;

        for column in columns {
            if engine.is_over() {
                break;
            }
            if engine.apply_move(player, column).is_ok() {
                applied += 1;
                player = player.other();
            }
        }

        prop_assert_eq!(engine.board().token_count(), applied);
    }

    /// A rejected move leaves the engine byte-for-byte unchanged.
    #[test]
    fn prop_rejected_moves_leave_engine_unchanged(
        columns in proptest::collection::vec(0usize..COLS, 0..60),
        bad_column in COLS..COLS + 5
    ) {
        let mut engine = GameEngine::new();
        let mut player = Player::One;

        for column in columns {
            if engine.is_over() {
                break;
            }
            if engine.apply_move(player, column).is_ok() {
                player = player.other();
            }
        }

        let snapshot = engine.clone();
        // Terminal games reject with GameOver, live ones with OutOfRange;
        // either way nothing may change.
        prop_assert!(engine.apply_move(player, bad_column).is_err());
        prop_assert_eq!(&engine, &snapshot);
    }

    /// Filling one column six times makes the seventh drop fail with
    /// `ColumnFull`, again without mutation.
    #[test]
    fn prop_full_column_always_rejected(column in 0usize..COLS) {
        let mut engine = GameEngine::new();
        for turn in 0..ROWS {
            // Alternate owners so the column never hosts a win
            let player = if turn % 2 == 0 { Player::One } else { Player::Two };
            engine.apply_move(player, column).unwrap();
        }

        let snapshot = engine.clone();
        prop_assert_eq!(
            engine.apply_move(Player::One, column),
            Err(IllegalMove::ColumnFull(column))
        );
        prop_assert_eq!(&engine, &snapshot);
    }

    /// Gravity: every occupied cell sits on the bottom or on another token.
    #[test]
    fn prop_no_floating_tokens(
        columns in proptest::collection::vec(0usize..COLS, 0..80)
    ) {
        let mut engine = GameEngine::new();
        let mut player = Player::One;

        for column in columns {
            if engine.is_over() {
                break;
            }
            if engine.apply_move(player, column).is_ok() {
                player = player.other();
            }
        }

        for column in 0..COLS {
            prop_assert!(engine.board().column_is_grounded(column));
        }
    }
}

// =============================================================================
// Rendering Queries
// =============================================================================

#[test]
fn test_board_query_reflects_moves() {
    let mut engine = GameEngine::new();
    engine.apply_move(Player::One, 3).unwrap();
    engine.apply_move(Player::Two, 3).unwrap();

    assert_eq!(engine.board().get(5, 3), Cell::One);
    assert_eq!(engine.board().get(4, 3), Cell::Two);
    assert_eq!(engine.board().get(3, 3), Cell::Empty);
}
