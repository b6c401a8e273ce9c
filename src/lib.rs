//! Mini Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths
//! (`mini_tetris::{core, engine, input, term, types}`) and hosts the
//! process-level pieces used by the binary: environment configuration and
//! log setup.

pub mod config;
pub mod logging;

pub use mini_tetris_core as core;
pub use mini_tetris_engine as engine;
pub use mini_tetris_input as input;
pub use mini_tetris_term as term;
pub use mini_tetris_types as types;

pub use config::AppConfig;
