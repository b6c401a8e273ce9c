//! Terminal drawing surface.
//!
//! Renders a game into a framebuffer of styled characters, then flushes that
//! framebuffer to the terminal with crossterm, diffing against the last frame.
//! No ratatui widgets/layout: the board is the whole UI.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mini_tetris_core as core;
pub use mini_tetris_engine as engine;
pub use mini_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{BoardCanvas, BoardLayout, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
