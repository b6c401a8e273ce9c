//! Frame loop tests: ticker, gravity cadence and action dispatch, all headless

use std::time::{Duration, Instant};

use mini_tetris::core::{DropOutcome, GameState, PieceBag, Tetromino};
use mini_tetris::engine::{render_frame, RecordingSurface, Session, TickOutcome, Ticker};
use mini_tetris::types::{GameAction, ShapeKind, GRAVITY_TICKS};

fn seed_dealing(kind: ShapeKind) -> u32 {
    (1..)
        .find(|&seed| PieceBag::new(seed).next_shape() == kind)
        .unwrap()
}

#[test]
fn test_gravity_cadence_over_many_frames() {
    let mut session = Session::new(seed_dealing(ShapeKind::T));
    let start_row = session.game().active().unwrap().row;

    let mut gravity = 0;
    for _ in 0..GRAVITY_TICKS * 5 {
        if let TickOutcome::Gravity(outcome) = session.tick() {
            assert_eq!(outcome, DropOutcome::Moved);
            gravity += 1;
        }
    }
    assert_eq!(gravity, 5);
    assert_eq!(session.game().active().unwrap().row, start_row + 5);
}

#[test]
fn test_actions_map_to_controller() {
    let mut session = Session::new(seed_dealing(ShapeKind::J));
    assert!(session.apply(GameAction::MoveLeft));
    assert_eq!(session.game().active().unwrap().col, 2);
    assert!(session.apply(GameAction::MoveRight));
    assert_eq!(session.game().active().unwrap().col, 3);
    assert!(session.apply(GameAction::SoftDrop));
    assert_eq!(session.game().active().unwrap().row, -1);
    assert!(session.apply(GameAction::Rotate));
}

#[test]
fn test_game_over_halts_ticks_and_ignores_moves() {
    let mut game = GameState::new(3);
    game.start();
    assert!(game.set_active(Tetromino::spawn(ShapeKind::L)));
    game.lock();
    assert!(game.is_over());

    let mut session = Session::from_game(game);
    for _ in 0..GRAVITY_TICKS * 2 {
        assert_eq!(session.tick(), TickOutcome::Halted);
    }
    assert!(!session.apply(GameAction::MoveLeft));
    assert!(!session.apply(GameAction::Rotate));
    assert!(!session.apply(GameAction::SoftDrop));

    assert!(session.apply(GameAction::Restart));
    assert!(!session.is_over());
}

#[test]
fn test_full_game_runs_to_top_out_with_ticks_only() {
    let mut session = Session::new(2718).with_gravity_ticks(1);
    let mut frames = 0u32;
    while !session.is_over() {
        session.tick();
        frames += 1;
        assert!(frames < 10_000, "game never ended");
    }
    assert!(session.game().pieces_spawned() > 1);
}

#[test]
fn test_ticker_drives_session() {
    let frame = Duration::from_millis(16);
    let mut ticker = Ticker::new(frame);
    let mut session = Session::new(seed_dealing(ShapeKind::O));
    let t0 = Instant::now();
    ticker.start(t0);

    // One second of frames delivered in a single late poll
    let due = ticker.poll(t0 + Duration::from_millis(1000));
    assert_eq!(due, 62);
    for _ in 0..due {
        session.tick();
    }
    assert_eq!(session.game().active().unwrap().row, -2 + 1);
    assert_eq!(session.frames(), 62 - GRAVITY_TICKS);

    ticker.cancel();
    ticker.cancel();
    assert_eq!(ticker.poll(t0 + Duration::from_secs(10)), 0);
}

#[test]
fn test_every_frame_renders_even_without_gravity() {
    let mut session = Session::new(4);
    let mut surface = RecordingSurface::default();
    for _ in 0..3 {
        session.tick();
        render_frame(session.game(), &mut surface);
    }
    assert_eq!(surface.clears, 3);
}
