//! Game state tests - gravity, commands, settle/clear/spawn and game over

use rand::{rngs::StdRng, Rng, SeedableRng};

use blockfall::core::{catalog, Collision, GameConfig, GameState, Piece};
use blockfall::types::{GameAction, Phase, PieceKind, Position, BOARD_WIDTH, PIECE_KINDS};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state
}

fn with_piece(kind: PieceKind) -> GameState {
    let mut state = started(1);
    assert!(state.set_active(catalog::spawn(kind, BOARD_WIDTH)));
    state
}

fn vertical_i(col: i8, top: i8) -> Piece {
    Piece::new(
        PieceKind::I,
        [
            Position::new(col, top),
            Position::new(col, top + 1),
            Position::new(col, top + 2),
            Position::new(col, top + 3),
        ],
    )
}

#[test]
fn test_hard_dropped_i_settles_on_bottom_row() {
    let mut state = with_piece(PieceKind::I);
    let cols: Vec<i8> = state.active().unwrap().cells().iter().map(|p| p.col).collect();
    assert_eq!(cols, vec![3, 4, 5, 6]);

    assert!(state.hard_drop());
    // Dropped but not yet settled.
    assert!(state.active().unwrap().cells().iter().all(|p| p.row == 19));
    assert_eq!(state.grid().filled_count(), 0);
    assert_eq!(state.collision(), Some(Collision::Landed));

    // Next collision evaluation settles it.
    state.tick();

    for col in 3..=6 {
        assert_eq!(
            state.grid().get(Position::new(col, 19)),
            Some(Some(PieceKind::I))
        );
    }
    assert_eq!(state.grid().filled_count(), 4);
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.pieces_spawned(), 2);
}

#[test]
fn test_filling_gap_clears_bottom_row() {
    let mut state = started(1);
    for col in 0..BOARD_WIDTH as i8 {
        if col != 5 {
            state.grid_mut().set(Position::new(col, 19), Some(PieceKind::J));
        }
    }
    state.grid_mut().set(Position::new(0, 18), Some(PieceKind::S));
    assert!(state.set_active(vertical_i(5, 0)));

    assert!(state.hard_drop());
    assert_eq!(state.active().unwrap().bottom_row(), 19);
    state.tick();

    // Row 18 held the S at column 0 and the I cell at column 5 when row 19 was cleared.
    assert_eq!(state.grid().get(Position::new(0, 19)), Some(Some(PieceKind::S)));
    assert_eq!(state.grid().get(Position::new(5, 19)), Some(Some(PieceKind::I)));
    assert_eq!(state.grid().row(19).iter().filter(|c| c.is_some()).count(), 2);
    assert!(state.grid().row(0).iter().all(|c| c.is_none()));
    assert_eq!(state.grid().filled_count(), 4);
    assert_eq!(state.rows_cleared(), 1);

    let event = state.take_last_event().unwrap();
    assert_eq!(event.kind, PieceKind::I);
    assert_eq!(event.cleared_rows.as_slice(), &[19]);
}

#[test]
fn test_clearing_two_rows_at_once() {
    let mut state = started(1);
    for row in 18..=19 {
        for col in 0..BOARD_WIDTH as i8 {
            if col != 0 {
                state.grid_mut().set(Position::new(col, row), Some(PieceKind::L));
            }
        }
    }
    assert!(state.set_active(vertical_i(0, 0)));

    state.hard_drop();
    state.tick();

    assert_eq!(state.rows_cleared(), 2);
    // The top two I cells remain, now on the bottom rows.
    assert_eq!(state.grid().filled_count(), 2);
    assert_eq!(state.grid().get(Position::new(0, 19)), Some(Some(PieceKind::I)));
    assert_eq!(state.grid().get(Position::new(0, 18)), Some(Some(PieceKind::I)));
}

#[test]
fn test_landing_on_five_full_rows_clears_them_all() {
    let mut state = with_piece(PieceKind::T);
    for row in 14..=18 {
        for col in 0..BOARD_WIDTH as i8 {
            state.grid_mut().set(Position::new(col, row), Some(PieceKind::O));
        }
    }

    state.hard_drop();
    assert_eq!(state.active().unwrap().bottom_row(), 13);
    state.tick();

    assert_eq!(state.rows_cleared(), 5);
    let event = state.take_last_event().unwrap();
    assert_eq!(event.cleared_rows.as_slice(), &[14, 15, 16, 17, 18]);
    // The T shifts down five rows and the empty bottom row stays empty.
    for (col, row) in [(4, 18), (5, 18), (6, 18), (5, 17)] {
        assert_eq!(
            state.grid().get(Position::new(col, row)),
            Some(Some(PieceKind::T))
        );
    }
    assert_eq!(state.grid().filled_count(), 4);
    assert!(state.grid().row(19).iter().all(|c| c.is_none()));
}

#[test]
fn test_top_out_when_row_one_collides() {
    let mut state = with_piece(PieceKind::T);
    state.grid_mut().set(Position::new(4, 2), Some(PieceKind::Z));
    assert_eq!(state.collision(), Some(Collision::TopOut));

    assert!(state.tick());
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.game_over());
}

#[test]
fn test_flat_piece_on_row_zero_does_not_top_out() {
    let mut state = with_piece(PieceKind::I);
    state.grid_mut().set(Position::new(4, 1), Some(PieceKind::Z));
    assert_eq!(state.collision(), Some(Collision::Landed));

    state.tick();
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.grid().get(Position::new(4, 0)), Some(Some(PieceKind::I)));
}

#[test]
fn test_game_over_freezes_session() {
    let mut state = with_piece(PieceKind::T);
    state.grid_mut().set(Position::new(5, 2), Some(PieceKind::Z));
    state.tick();
    assert!(state.game_over());

    let grid = state.grid().clone();
    let active = state.active();
    let ticks = state.ticks();

    assert!(!state.move_left());
    assert!(!state.move_right());
    assert!(!state.rotate());
    assert!(!state.hard_drop());
    assert!(!state.step_down());
    for _ in 0..100 {
        assert!(!state.tick());
    }
    assert!(!state.set_active(catalog::spawn(PieceKind::O, BOARD_WIDTH)));

    assert_eq!(state.grid(), &grid);
    assert_eq!(state.active(), active);
    assert_eq!(state.ticks(), ticks);
}

#[test]
fn test_stacking_in_center_ends_in_game_over() {
    let mut state = started(2024);
    let mut drops = 0;
    while !state.game_over() {
        state.hard_drop();
        state.tick();
        drops += 1;
        assert!(drops < 500, "stack never topped out");
    }
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.rows_cleared(), 0);
}

#[test]
fn test_hard_drop_from_spawn_reaches_bottom() {
    for kind in PIECE_KINDS {
        let mut state = with_piece(kind);
        assert!(state.hard_drop());
        let piece = state.active().unwrap();
        assert!(
            piece.cells().iter().any(|p| p.row == 19),
            "{kind:?} stopped at {:?}",
            piece.cells()
        );
        assert_eq!(piece.kind(), kind);
    }
}

#[test]
fn test_hard_drop_stops_on_settled_cells() {
    let mut state = with_piece(PieceKind::O);
    state.grid_mut().set(Position::new(6, 12), Some(PieceKind::T));

    state.hard_drop();

    let piece = state.active().unwrap();
    assert_eq!(piece.bottom_row(), 11);
    assert!(piece.is_valid(state.grid()));
    assert_eq!(state.collision(), Some(Collision::Landed));
}

#[test]
fn test_left_then_right_restores_position() {
    for kind in PIECE_KINDS {
        let mut state = with_piece(kind);
        state.step_down();
        let original = state.active().unwrap();

        assert!(state.move_left());
        assert!(state.move_right());
        assert_eq!(state.active(), Some(original));

        assert!(state.move_right());
        assert!(state.move_left());
        assert_eq!(state.active(), Some(original));
    }
}

#[test]
fn test_move_blocked_by_settled_cell() {
    let mut state = with_piece(PieceKind::I);
    state.grid_mut().set(Position::new(7, 0), Some(PieceKind::S));
    let before = state.active();

    assert!(!state.move_right());
    assert_eq!(state.active(), before);
    assert!(state.move_left());
}

#[test]
fn test_rotation_rejected_at_wall() {
    let mut state = started(1);
    assert!(state.set_active(vertical_i(0, 5)));
    let before = state.active();

    assert!(!state.rotate());
    assert_eq!(state.active(), before);
}

#[test]
fn test_rotation_rejected_into_settled_cells() {
    let mut state = with_piece(PieceKind::T);
    state.step_down();
    // Rotating T puts a cell directly below the pivot.
    let pivot = state.active().unwrap().pivot();
    state.grid_mut().set(pivot.translated(0, 1), Some(PieceKind::L));
    let before = state.active();

    assert!(!state.rotate());
    assert_eq!(state.active(), before);
}

#[test]
fn test_rotation_applies_when_clear() {
    let mut state = with_piece(PieceKind::L);
    state.step_down();
    let before = state.active().unwrap();

    assert!(state.apply_action(GameAction::Rotate));
    assert_eq!(state.active(), Some(before.rotated()));
}

#[test]
fn test_gravity_carries_piece_to_floor() {
    let mut state = with_piece(PieceKind::T);

    // Bottom row 1 -> 19 is 18 gravity steps of 30 ticks each.
    for _ in 0..540 {
        state.tick();
    }
    assert_eq!(state.active().unwrap().bottom_row(), 19);
    assert_eq!(state.pieces_spawned(), 1);

    state.tick();
    assert_eq!(state.pieces_spawned(), 2);
    assert_eq!(state.grid().filled_count(), 4);
}

#[test]
fn test_commands_before_start_are_ignored() {
    let mut state = GameState::new(1);
    assert!(!state.tick());
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::Drop));
    assert_eq!(state.phase(), Phase::Spawning);
    assert_eq!(state.ticks(), 0);
}

#[test]
fn test_random_play_keeps_cells_valid() {
    let mut rng = StdRng::seed_from_u64(31);
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::Drop,
    ];

    for seed in 0..5 {
        let mut state = started(seed);
        for _ in 0..3000 {
            if rng.random_bool(0.2) {
                state.apply_action(actions[rng.random_range(0..actions.len())]);
            }
            state.tick();

            let snap = state.snapshot();
            assert!(snap.grid.iter().all(|&v| v <= 7));
            if let Some(piece) = state.active() {
                assert!(piece.cells().iter().all(|&p| state.grid().in_bounds(p)));
            }
            if state.game_over() {
                break;
            }
        }
    }
}

#[test]
fn test_snapshot_mirrors_state() {
    let mut state = with_piece(PieceKind::S);
    state.grid_mut().set(Position::new(2, 19), Some(PieceKind::Z));

    let snap = state.snapshot();

    assert_eq!((snap.rows, snap.cols), (20, 10));
    assert_eq!(snap.cell(2, 19), 7);
    assert_eq!(snap.cell(3, 19), 0);
    assert_eq!(snap.phase, Phase::Falling);
    let active = snap.active.unwrap();
    assert_eq!(active.kind, PieceKind::S);
    assert_eq!(&active.cells, state.active().unwrap().cells());
}

#[test]
fn test_small_grid_session() {
    let config = GameConfig::new(6, 4, 1).unwrap();
    let mut state = GameState::with_config(config, 9).unwrap();
    state.start();

    let mut ticks = 0;
    while !state.game_over() && ticks < 1000 {
        state.tick();
        ticks += 1;
    }
    assert!(state.game_over());
    assert!(state.grid().cells().len() == 24);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(GameState::with_config(
        GameConfig {
            rows: 2,
            cols: 10,
            gravity_ticks: 30
        },
        1
    )
    .is_err());
}
