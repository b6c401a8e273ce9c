//! Session: the frame-driven game loop around a [`GameState`].
//!
//! Gravity runs on a frame counter rather than wall time: every
//! [`GRAVITY_TICKS`] frames the piece falls one row. Key actions apply
//! immediately and do not touch the counter.

use tracing::info;

use crate::core::{DropOutcome, GameState, SimpleRng};
use crate::types::{GameAction, GRAVITY_TICKS};

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Counted the frame, no gravity step yet
    Waiting,
    /// Gravity fired
    Gravity(DropOutcome),
    /// Game over (or not started); nothing advanced
    Halted,
}

/// One running game plus its loop bookkeeping
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    frames: u32,
    gravity_ticks: u32,
    seeds: SimpleRng,
}

impl Session {
    /// Create a session and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::from_game(GameState::new(seed))
    }

    /// Wrap an existing game, starting it if needed
    pub fn from_game(mut game: GameState) -> Self {
        game.start();
        let seeds = SimpleRng::new(game.seed());
        Self {
            game,
            frames: 0,
            gravity_ticks: GRAVITY_TICKS,
            seeds,
        }
    }

    /// Override the gravity cadence (frames per row, at least 1)
    pub fn with_gravity_ticks(mut self, ticks: u32) -> Self {
        self.gravity_ticks = ticks.max(1);
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Frames counted since the last gravity step
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game.active().is_none() {
            return TickOutcome::Halted;
        }

        self.frames += 1;
        if self.frames < self.gravity_ticks {
            return TickOutcome::Waiting;
        }
        self.frames = 0;
        TickOutcome::Gravity(self.game.soft_drop())
    }

    /// Apply a player action. Returns whether anything changed.
    ///
    /// Movement is ignored once the game is over; restart always works.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.game.move_left(),
            GameAction::MoveRight => self.game.move_right(),
            GameAction::Rotate => self.game.rotate(),
            GameAction::SoftDrop => self.game.soft_drop() != DropOutcome::Ignored,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Throw away the current game and start a new one with a fresh seed.
    pub fn restart(&mut self) {
        let seed = self.seeds.next_u32();
        info!(seed, previous = self.game.seed(), "restart");
        self.game.reset(seed);
        self.game.start();
        self.frames = 0;
    }
}
