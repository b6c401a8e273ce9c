//! Core game logic - pure, deterministic, and testable
//!
//! Holds the rules of the game and nothing else: no terminal, no clock, no
//! input. The same seed always produces the same game.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shape matrices and the clockwise rotation transform
//! - [`rng`]: seeded LCG and the 7-bag piece sequence
//! - [`board`]: 10x20 playfield with a 2-row buffer, placement checks and row clears
//! - [`game_state`]: the session object driving the falling piece
//!
//! # Rules
//!
//! - **7-Bag**: every run of seven pieces starting at a refill holds each shape once
//! - **Rotation**: clockwise only, no wall kicks; a rotation that does not fit is dropped
//! - **Gravity**: a piece that cannot move down locks immediately, no lock delay
//! - **Top-out**: locking with any cell above the visible board ends the game
//!
//! # Example
//!
//! ```
//! use mini_tetris_core::{DropOutcome, GameState, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.move_left();
//! game.rotate();
//! while let DropOutcome::Moved = game.soft_drop() {}
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use mini_tetris_types as types;

pub use board::Board;
pub use game_state::{DropOutcome, GameState, Phase, Tetromino};
pub use pieces::{rotate_cw, shape_matrix, Matrix};
pub use rng::{PieceBag, SimpleRng};
