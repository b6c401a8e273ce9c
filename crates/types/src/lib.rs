//! Shared types and constants.
//!
//! Pure data with no dependencies, used by the core rules, the game loop,
//! the terminal renderer and the input mapping alike.
//!
//! # Board Geometry
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Visible height**: 20 rows (indexed 0-19, top to bottom)
//! - **Buffer**: 2 hidden rows above the visible area (rows -2 and -1)
//!
//! Pieces spawn partially inside the buffer, so row coordinates are signed.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `GRAVITY_TICKS` | 36 | Frames between two gravity steps |
//!
//! # Examples
//!
//! ```
//! use mini_tetris_types::{ShapeKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Hidden rows above the visible area (negative row indices)
pub const BUFFER_ROWS: u8 = 2;

/// Default frame interval in milliseconds
pub const TICK_MS: u32 = 16;

/// Number of frames between gravity steps
pub const GRAVITY_TICKS: u32 = 36;

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// Every shape in canonical order. Bag refills start from this list.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Parse a shape from its letter (case-insensitive)
    ///
    /// ```
    /// use mini_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Upper-case letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
        }
    }

    /// Display color of the shape
    pub fn color(&self) -> Rgb {
        match self {
            ShapeKind::I => Rgb::CYAN,
            ShapeKind::O => Rgb::YELLOW,
            ShapeKind::T => Rgb::PURPLE,
            ShapeKind::S => Rgb::GREEN,
            ShapeKind::Z => Rgb::RED,
            ShapeKind::J => Rgb::BLUE,
            ShapeKind::L => Rgb::ORANGE,
        }
    }
}

/// A board cell: `None` is empty, `Some(kind)` holds a locked cell of that shape.
pub type Cell = Option<ShapeKind>;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward black, keeping `keep_pct` percent of each channel.
    ///
    /// ```
    /// use mini_tetris_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(200, 100, 40).darken(25), Rgb::new(50, 25, 10));
    /// assert_eq!(Rgb::WHITE.darken(100), Rgb::WHITE);
    /// ```
    pub const fn darken(self, keep_pct: u8) -> Self {
        let keep = if keep_pct > 100 { 100 } else { keep_pct } as u16;
        Self {
            r: (self.r as u16 * keep / 100) as u8,
            g: (self.g as u16 * keep / 100) as u8,
            b: (self.b as u16 * keep / 100) as u8,
        }
    }
}

/// Discrete player requests delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Immediate gravity step, independent of the frame counter
    SoftDrop,
    /// Start a new game session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use mini_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(GRAVITY_TICKS, 36);
    }

    #[test]
    fn all_shapes_are_distinct_and_parse_back() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(*kind));
            for other in &ShapeKind::ALL[i + 1..] {
                assert_ne!(kind, other);
                assert_ne!(kind.color(), other.color());
            }
        }
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
