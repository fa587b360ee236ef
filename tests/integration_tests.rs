//! Integration tests for the session state machine and the tick driver

use pharaoh_blocks::core::{DropOutcome, GameState, Player};
use pharaoh_blocks::core::Board;
use pharaoh_blocks::engine::GameLoop;
use pharaoh_blocks::types::{Cell, GameAction, GameStatus, PieceKind, SPAWN_X, SPAWN_Y};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.status(), GameStatus::Menu);
    assert!(state.active().is_none());

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.status(), GameStatus::Playing);
    assert!(state.active().is_some());

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.status(), GameStatus::Paused);
    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.status(), GameStatus::Playing);
}

#[test]
fn test_start_from_pause_resets_game() {
    let mut state = GameState::new(77);
    state.start();
    for _ in 0..5 {
        state.soft_drop_tick();
    }
    state.toggle_pause();

    assert!(state.start());
    assert_eq!(state.status(), GameStatus::Playing);
    let active = state.active().unwrap();
    assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
}

#[test]
fn test_o_piece_walks_to_left_wall() {
    let board = Board::new();
    let mut o = Player::spawn(PieceKind::O);
    assert_eq!((o.x, o.y), (4, 0));

    for _ in 0..4 {
        assert!(o.move_lateral(&board, -1));
    }
    assert_eq!(o.x, 0);
    assert!(!o.move_lateral(&board, -1));
    assert_eq!(o.x, 0);
}

#[test]
fn test_lock_merges_footprint_and_promotes_lookahead() {
    let mut state = GameState::new(4096);
    state.start();

    loop {
        let before = state.active().unwrap();
        let lookahead = state.next_piece();
        state.soft_drop_tick();

        if let Some(event) = state.take_last_event() {
            assert_eq!(event.kind, before.kind);
            assert_eq!(event.rows_cleared, 0);
            for (x, y) in before.cells() {
                assert_eq!(state.board().get(x, y), Some(Cell::Merged(before.kind)));
            }
            let active = state.active().unwrap();
            assert_eq!(active.kind, lookahead);
            assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
            break;
        }
    }
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let mut state = GameState::new(99);
    state.start();

    while state.move_lateral(-1) {}
    let before = state.snapshot();
    assert!(!state.move_lateral(-1));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_stacking_at_spawn_ends_in_game_over() {
    let mut state = GameState::new(5);
    state.start();

    let mut ticks = 0;
    while state.status() == GameStatus::Playing {
        state.soft_drop_tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }
    assert_eq!(state.status(), GameStatus::GameOver);

    let before = state.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::FastDropEngage,
        GameAction::TogglePause,
    ] {
        assert!(!state.apply_action(action));
    }
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_player_drop_reports_landing() {
    let board = Board::new();
    let mut piece = Player::spawn(PieceKind::I);
    let mut moved = 0;
    while piece.soft_drop(&board) == DropOutcome::Moved {
        moved += 1;
    }
    // Vertical I is four tall: top row ends at 16.
    assert_eq!(moved, 16);
    assert!(piece.collided);
}

#[test]
fn test_game_loop_matches_manual_ticks() {
    let mut driven = GameLoop::new(31337);
    driven.handle(GameAction::Start);

    let mut manual = GameState::new(31337);
    manual.start();

    // Ten level-one intervals in uneven frames.
    let mut budget = 12_500u32;
    let mut frame = 7;
    while budget > 0 {
        let step = frame.min(budget);
        driven.advance(step);
        budget -= step;
        frame = frame % 40 + 9;
    }
    for _ in 0..10 {
        manual.soft_drop_tick();
    }

    assert_eq!(driven.ticks(), 10);
    assert_eq!(driven.snapshot(), manual.snapshot());
}

#[test]
fn test_game_loop_fast_drop_round_trip() {
    let mut game = GameLoop::new(8);
    game.handle(GameAction::Start);

    assert!(game.handle(GameAction::FastDropEngage));
    assert!(game.snapshot().fast_drop);
    assert!(!game.handle(GameAction::MoveLeft));

    assert!(game.handle(GameAction::FastDropRelease));
    assert!(!game.snapshot().fast_drop);
    assert!(game.handle(GameAction::MoveLeft));
}
