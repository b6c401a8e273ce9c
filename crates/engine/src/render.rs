//! Drawing surface contract.
//!
//! A surface only knows how to clear itself, fill one board cell with a
//! color, and show the game-over overlay. [`render_frame`] decides what goes
//! where, so the loop stays testable without a terminal.

use crate::core::GameState;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Anything that can display a frame of the game
pub trait DrawSurface {
    /// Erase the previous frame
    fn clear(&mut self);

    /// Fill the visible board cell at (row, col)
    fn fill_cell(&mut self, row: i8, col: i8, color: Rgb);

    /// Darken a band across the middle and print the game-over message
    fn game_over_overlay(&mut self);
}

fn visible(row: i8, col: i8) -> bool {
    (0..BOARD_HEIGHT as i8).contains(&row) && (0..BOARD_WIDTH as i8).contains(&col)
}

/// Draw one complete frame: locked cells, the falling piece, then the overlay.
///
/// Cells of the falling piece that are still inside the buffer are skipped.
pub fn render_frame<S: DrawSurface + ?Sized>(game: &GameState, surface: &mut S) {
    surface.clear();

    for (row, col, kind) in game.board().occupied_cells() {
        surface.fill_cell(row, col, kind.color());
    }

    if let Some(piece) = game.active() {
        let color = piece.kind.color();
        for (row, col) in piece.cells() {
            if visible(row, col) {
                surface.fill_cell(row, col, color);
            }
        }
    }

    if game.is_over() {
        surface.game_over_overlay();
    }
}

/// Surface that records draw calls, for headless checks
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    pub cells: Vec<(i8, i8, Rgb)>,
    pub clears: usize,
    pub overlays: usize,
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.cells.clear();
        self.clears += 1;
    }

    fn fill_cell(&mut self, row: i8, col: i8, color: Rgb) {
        self.cells.push((row, col, color));
    }

    fn game_over_overlay(&mut self) {
        self.overlays += 1;
    }
}
