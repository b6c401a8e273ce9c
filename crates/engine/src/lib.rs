//! Game loop and input adapter (headless).
//!
//! - [`Ticker`]: the frame clock, with explicit start and cancel
//! - [`Session`]: counts frames, fires gravity, dispatches [`GameAction`]s
//! - [`DrawSurface`] / [`render_frame`]: what a renderer must provide and
//!   what gets drawn each frame
//!
//! Nothing here touches a terminal; see the `term` and `input` crates for that.
//!
//! [`GameAction`]: crate::types::GameAction

pub mod render;
pub mod session;
pub mod ticker;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use render::{render_frame, DrawSurface, RecordingSurface};
pub use session::{Session, TickOutcome};
pub use ticker::Ticker;
