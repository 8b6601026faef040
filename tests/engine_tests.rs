//! Engine behavior through the public `GameState` API: spawn, lock,
//! clear, scoring, and the two game-over paths.

use blockfall::config::{GameConfig, ScoringMode};
use blockfall::core::{spawn_x, GameState};
use blockfall::types::{Direction, GameAction, GameStatus, PieceKind};

fn tall_config() -> GameConfig {
    GameConfig {
        rows: 20,
        cols: 10,
        time_limit_secs: None,
        ..GameConfig::default()
    }
}

/// Scan seeds until the first spawned piece has the wanted kind.
fn game_with_first_kind(config: GameConfig, kind: PieceKind) -> GameState {
    for seed in 1..10_000 {
        let state = GameState::new(config, seed).expect("valid config");
        if state.active().map(|p| p.kind) == Some(kind) {
            return state;
        }
    }
    panic!("no seed under 10000 starts with {:?}", kind)
}

/// Force downward moves until the piece locks.
fn drop_active(state: &mut GameState) {
    while state.move_piece(Direction::Down) {}
}

#[test]
fn every_kind_spawns_centered_at_the_top() {
    for kind in PieceKind::ALL {
        let state = game_with_first_kind(tall_config(), kind);
        let piece = state.active().expect("active piece after spawn");
        assert_eq!(piece.kind, kind);
        assert_eq!(piece.y, 0, "{:?}", kind);
        assert_eq!(piece.x, spawn_x(10, piece.shape.width()), "{:?}", kind);
    }
}

#[test]
fn blocked_down_locks_the_piece_and_respawns_once() {
    let mut state = game_with_first_kind(tall_config(), PieceKind::O);
    drop_active(&mut state);

    // The square settles in the bottom two rows, centered.
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(state.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(
        state.board().cells().iter().filter(|c| c.is_some()).count(),
        4,
        "exactly one piece locked"
    );

    // No rows filled, so no points; the next piece is already falling.
    assert_eq!(state.score(), 0);
    assert_eq!(state.status(), GameStatus::Playing);
    let next = state.active().expect("respawned piece");
    assert_eq!(next.y, 0);
}

fn run_scoring_drop(scoring: ScoringMode, rows_to_fill: &[i16]) -> GameState {
    let config = GameConfig {
        scoring,
        points_per_line: 10,
        ..tall_config()
    };
    let mut state = game_with_first_kind(config, PieceKind::O);

    // Leave the square's landing columns open so the drop completes the rows.
    for &y in rows_to_fill {
        for x in 0..10 {
            if x != 4 && x != 5 {
                state.board_mut().set(x, y, Some(PieceKind::I));
            }
        }
    }
    drop_active(&mut state);
    state
}

#[test]
fn per_line_scoring_multiplies_by_lines_cleared() {
    let state = run_scoring_drop(ScoringMode::PerLineMultiplied, &[18, 19]);
    assert_eq!(state.score(), 20);
    assert!(
        state.board().cells().iter().all(|c| c.is_none()),
        "both rows cleared"
    );

    let state = run_scoring_drop(ScoringMode::PerLineMultiplied, &[19]);
    assert_eq!(state.score(), 10);
}

#[test]
fn flat_scoring_awards_the_same_for_any_clear() {
    let state = run_scoring_drop(ScoringMode::FlatPerClear, &[18, 19]);
    assert_eq!(state.score(), 10);

    let state = run_scoring_drop(ScoringMode::FlatPerClear, &[19]);
    assert_eq!(state.score(), 10);
}

/// Stack high enough that the piece locks at the very top and the next
/// spawn has nowhere to go.
fn blocked_out_game() -> GameState {
    let mut state = game_with_first_kind(tall_config(), PieceKind::O);
    for y in 2..20 {
        for x in 0..9 {
            state.board_mut().set(x, y, Some(PieceKind::I));
        }
    }
    drop_active(&mut state);
    state
}

#[test]
fn blocked_spawn_ends_the_game() {
    let state = blocked_out_game();
    assert_eq!(state.status(), GameStatus::GameOver);
    assert!(state.active().is_none(), "no piece after block-out");
    // The final piece still settled at the top before the spawn failed.
    assert_eq!(state.board().get(4, 0), Some(Some(PieceKind::O)));
    assert_eq!(state.board().get(5, 1), Some(Some(PieceKind::O)));
}

#[test]
fn operations_after_game_over_are_silent_noops() {
    let mut state = blocked_out_game();
    let cells_before = state.board().cells().to_vec();
    let score_before = state.score();

    assert!(!state.move_piece(Direction::Left));
    assert!(!state.move_piece(Direction::Down));
    assert!(!state.rotate());
    assert!(!state.tick());
    state.tick_second();
    state.spawn_piece();

    assert_eq!(state.board().cells(), &cells_before[..]);
    assert_eq!(state.score(), score_before);
    assert_eq!(state.status(), GameStatus::GameOver);
    assert!(state.active().is_none());
}

#[test]
fn block_out_ends_the_game_with_time_remaining() {
    let config = GameConfig {
        time_limit_secs: Some(30),
        ..tall_config()
    };
    let mut state = game_with_first_kind(config, PieceKind::O);
    for y in 2..20 {
        for x in 0..9 {
            state.board_mut().set(x, y, Some(PieceKind::I));
        }
    }
    drop_active(&mut state);

    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.time_left(), Some(30), "countdown untouched");
    // The expired game ignores further seconds either way.
    state.tick_second();
    assert_eq!(state.time_left(), Some(30));
}

#[test]
fn countdown_expiry_freezes_the_piece_in_place() {
    let config = GameConfig {
        time_limit_secs: Some(1),
        ..tall_config()
    };
    let mut state = GameState::new(config, 1).expect("valid config");
    state.tick();
    let (x, y) = {
        let piece = state.active().expect("falling piece");
        (piece.x, piece.y)
    };

    state.tick_second();
    assert_eq!(state.status(), GameStatus::GameOver);

    // The piece stays where the timer caught it.
    assert!(!state.tick());
    let piece = state.active().expect("piece remains after time-out");
    assert_eq!((piece.x, piece.y), (x, y));
}

#[test]
fn rotation_is_rejected_at_the_floor() {
    let mut state = game_with_first_kind(tall_config(), PieceKind::I);

    // Ride the flat I down to the bottom row.
    for _ in 0..19 {
        assert!(state.tick());
    }
    assert_eq!(state.active().map(|p| p.y), Some(19));

    // Upright would need three rows below the floor.
    assert!(!state.rotate());
    assert_eq!(state.active().map(|p| p.shape.width()), Some(4));
}

#[test]
fn restart_action_starts_a_fresh_game() {
    let mut state = blocked_out_game();
    assert_eq!(state.status(), GameStatus::GameOver);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert!(state.active().is_some());
    assert!(state.board().cells().iter().all(|c| c.is_none()));
}
