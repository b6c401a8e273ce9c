//! GameView: draws a game into a terminal framebuffer.
//!
//! Pure (no I/O). The board is laid out centered in the viewport with a
//! border; each board cell covers `cell_w x cell_h` terminal characters.

use crate::engine::{render_frame, DrawSurface};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::core::GameState;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const HINT_FG: Rgb = Rgb::new(120, 120, 130);

/// Share of the original color left under the game-over band
const OVERLAY_KEEP_PCT: u8 = 25;

const GAME_OVER_TEXT: &str = "GAME OVER!";
const HINT_TEXT: &str = "←→ move  ↑ rotate  ↓ drop  r restart  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board placement inside the framebuffer, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Top-left terminal position of board cell (row, col)
    pub fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            self.x + 1 + col * self.cell_w,
            self.y + 1 + row * self.cell_h,
        )
    }
}

/// Terminal renderer for the game board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        BoardLayout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h + 1) / 2,
            frame_w,
            frame_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Draw `game` into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let mut canvas = BoardCanvas {
            fb,
            layout: self.layout(viewport),
        };
        render_frame(game, &mut canvas);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }
}

/// [`DrawSurface`] over a framebuffer with a fixed board layout.
pub struct BoardCanvas<'a> {
    fb: &'a mut FrameBuffer,
    layout: BoardLayout,
}

impl<'a> BoardCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, layout: BoardLayout) -> Self {
        Self { fb, layout }
    }

    fn draw_border(&mut self) {
        let BoardLayout {
            x,
            y,
            frame_w: w,
            frame_h: h,
            ..
        } = self.layout;
        let style = CellStyle::new(BORDER_FG, Rgb::BLACK);

        self.fb.put_char(x, y, '┌', style);
        self.fb.put_char(x + w - 1, y, '┐', style);
        self.fb.put_char(x, y + h - 1, '└', style);
        self.fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            self.fb.put_char(x + dx, y, '─', style);
            self.fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.fb.put_char(x, y + dy, '│', style);
            self.fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_hint(&mut self) {
        let width = HINT_TEXT.chars().count() as u16;
        let y = self.layout.y + self.layout.frame_h;
        let x = (self.layout.x + self.layout.frame_w / 2).saturating_sub(width / 2);
        self.fb
            .put_str(x, y, HINT_TEXT, CellStyle::new(HINT_FG, Rgb::BLACK));
    }
}

/// Glyph for one character of a board cell. The right column and bottom row
/// use half blocks so neighbouring cells keep a gap between them.
fn inset_glyph(dx: u16, dy: u16, cell_w: u16, cell_h: u16) -> char {
    let right = cell_w > 1 && dx == cell_w - 1;
    let bottom = cell_h > 1 && dy == cell_h - 1;
    match (right, bottom) {
        (false, false) => '█',
        (true, false) => '▌',
        (false, true) => '▀',
        (true, true) => '▘',
    }
}

impl DrawSurface for BoardCanvas<'_> {
    fn clear(&mut self) {
        self.fb.clear(Cell::default());
        let BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
            ..
        } = self.layout;
        self.fb.fill_rect(
            x + 1,
            y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border();
        self.draw_hint();
    }

    fn fill_cell(&mut self, row: i8, col: i8, color: Rgb) {
        if row < 0 || col < 0 || row >= BOARD_HEIGHT as i8 || col >= BOARD_WIDTH as i8 {
            return;
        }
        let (px, py) = self.layout.cell_origin(row as u16, col as u16);
        let (cw, ch) = (self.layout.cell_w, self.layout.cell_h);
        let style = CellStyle::new(color, BOARD_BG);
        for dy in 0..ch {
            for dx in 0..cw {
                self.fb
                    .put_char(px + dx, py + dy, inset_glyph(dx, dy, cw, ch), style);
            }
        }
    }

    fn game_over_overlay(&mut self) {
        let BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
            ..
        } = self.layout;
        let mid_y = y + frame_h / 2;
        self.fb
            .shade_rect(x, mid_y.saturating_sub(1), frame_w, 3, OVERLAY_KEEP_PCT);

        let text_w = GAME_OVER_TEXT.chars().count() as u16;
        let text_x = x + frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::WHITE, BOARD_BG.darken(OVERLAY_KEEP_PCT)).bold();
        self.fb.put_str(text_x, mid_y, GAME_OVER_TEXT, style);
    }
}
