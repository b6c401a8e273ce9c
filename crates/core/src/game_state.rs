//! Game state module - the active piece controller
//!
//! [`GameState`] owns everything a single game session mutates: the board,
//! the piece bag, the falling piece and the phase flag. Every operation is
//! synchronous and total. Rejected moves leave the state untouched and report
//! `false`; locking above the visible board ends the game.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::pieces::{rotate_cw, shape_matrix, spawn_col, spawn_row, Matrix};
use crate::types::{ShapeKind, BOARD_WIDTH};
use crate::{Board, PieceBag};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: ShapeKind,
    /// Current orientation; starts as the canonical shape matrix
    pub matrix: Matrix,
    pub row: i8,
    pub col: i8,
}

impl Tetromino {
    /// Create a piece at its spawn position
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            matrix: shape_matrix(kind),
            row: spawn_row(kind),
            col: spawn_col(kind, BOARD_WIDTH),
        }
    }

    /// Absolute (row, col) of every filled cell, including cells above the board
    pub fn cells(&self) -> ArrayVec<(i8, i8), 16> {
        self.matrix
            .filled_cells()
            .map(|(dr, dc)| (self.row + dr, self.col + dc))
            .collect()
    }
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created or reset, waiting for [`GameState::start`]
    NoPiece,
    /// A piece is falling
    Falling,
    /// Held only while [`GameState::lock`] runs
    Locking,
    /// Terminal; nothing changes until reset
    GameOver,
}

/// Result of a gravity step or an explicit lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece locked and the next one spawned
    Locked { rows_cleared: usize },
    /// The game ended
    ToppedOut,
    /// No piece is falling
    Ignored,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    bag: PieceBag,
    active: Option<Tetromino>,
    phase: Phase,
    seed: u32,
    pieces_spawned: u32,
    rows_cleared: u32,
}

impl GameState {
    /// Create a session with an empty board and an empty bag
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a session on a prepared board
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            bag: PieceBag::new(seed),
            active: None,
            phase: Phase::NoPiece,
            seed,
            pieces_spawned: 0,
            rows_cleared: 0,
        }
    }

    /// Spawn the first piece. Does nothing unless the phase is `NoPiece`.
    pub fn start(&mut self) {
        if self.phase == Phase::NoPiece {
            self.spawn();
        }
    }

    /// Discard the session and start over from an empty board.
    ///
    /// The phase returns to `NoPiece`; call [`GameState::start`] again.
    pub fn reset(&mut self, seed: u32) {
        info!(seed, "game reset");
        *self = Self::new(seed);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn bag(&self) -> &PieceBag {
        &self.bag
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Draw the next shape and place it at its spawn position.
    ///
    /// A spawn that overlaps locked cells ends the game.
    fn spawn(&mut self) {
        let kind = self.bag.next_shape();
        let piece = Tetromino::spawn(kind);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if !self.board.is_valid_move(&piece.matrix, piece.row, piece.col) {
            info!(?kind, pieces = self.pieces_spawned, "spawn blocked, game over");
            self.finish();
            return;
        }

        trace!(?kind, row = piece.row, col = piece.col, "spawned");
        self.active = Some(piece);
        self.phase = Phase::Falling;
    }

    fn finish(&mut self) {
        self.active = None;
        self.phase = Phase::GameOver;
    }

    fn falling(&self) -> Option<Tetromino> {
        match self.phase {
            Phase::Falling => self.active,
            _ => None,
        }
    }

    fn try_shift(&mut self, dcol: i8) -> bool {
        let Some(piece) = self.falling() else {
            return false;
        };

        let col = piece.col + dcol;
        if !self.board.is_valid_move(&piece.matrix, piece.row, col) {
            return false;
        }
        self.active = Some(Tetromino { col, ..piece });
        true
    }

    /// Move one column left; `false` if blocked
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Move one column right; `false` if blocked
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate clockwise in place. No kicks: a rotation that does not fit is dropped.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.falling() else {
            return false;
        };

        let matrix = rotate_cw(&piece.matrix);
        if !self.board.is_valid_move(&matrix, piece.row, piece.col) {
            return false;
        }
        self.active = Some(Tetromino { matrix, ..piece });
        true
    }

    /// One gravity step. A piece that cannot descend locks where it is.
    pub fn soft_drop(&mut self) -> DropOutcome {
        let Some(piece) = self.falling() else {
            return DropOutcome::Ignored;
        };

        let row = piece.row + 1;
        if self.board.is_valid_move(&piece.matrix, row, piece.col) {
            self.active = Some(Tetromino { row, ..piece });
            return DropOutcome::Moved;
        }
        self.lock()
    }

    /// Commit the falling piece at its current position.
    ///
    /// If any filled cell is still above the visible board nothing is written
    /// and the game ends. Otherwise the cells are written, full rows are
    /// cleared and the next piece spawns.
    pub fn lock(&mut self) -> DropOutcome {
        let Some(piece) = self.falling() else {
            return DropOutcome::Ignored;
        };
        self.phase = Phase::Locking;

        if piece.matrix.filled_cells().any(|(dr, _)| piece.row + dr < 0) {
            info!(kind = ?piece.kind, row = piece.row, col = piece.col, "topped out");
            self.finish();
            return DropOutcome::ToppedOut;
        }

        self.board
            .write_piece(&piece.matrix, piece.row, piece.col, piece.kind);
        let rows_cleared = self.board.clear_full_rows();
        self.rows_cleared = self.rows_cleared.wrapping_add(rows_cleared as u32);
        debug!(kind = ?piece.kind, row = piece.row, col = piece.col, rows_cleared, "locked");

        self.active = None;
        self.spawn();
        if self.is_over() {
            return DropOutcome::ToppedOut;
        }
        DropOutcome::Locked { rows_cleared }
    }

    /// Replace the falling piece if the placement fits.
    ///
    /// Used to set up scenarios; has no effect outside the `Falling` phase.
    pub fn set_active(&mut self, piece: Tetromino) -> bool {
        if self.phase != Phase::Falling
            || !self.board.is_valid_move(&piece.matrix, piece.row, piece.col)
        {
            return false;
        }
        self.active = Some(piece);
        true
    }
}
