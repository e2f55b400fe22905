//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless observation).
//!
//! # Board Dimensions
//!
//! The playfield is part of the public contract:
//!
//! - **Width**: 10 columns (indexed 0-9, x grows to the right)
//! - **Height**: 20 rows (indexed 0-19, y grows downward)
//! - **Origin**: top-left cell is (0, 0)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | Fixed gravity interval, never changes with score |
//! | `FAST_DROP_MS` | 50 | Repeat interval for a held soft-drop key |
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Soft drop | 1 per row |
//! | Hard drop | 2 per row |
//! | 1 / 2 / 3 / 4 lines | 100 / 300 / 500 / 800 |
//!
//! # Examples
//!
//! ```
//! use tetris_engine_types::{Color, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), Color::from_hex("#a000f0").unwrap());
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one row per second, no speed progression)
pub const GRAVITY_MS: u32 = 1000;

/// Repeat interval for a held soft-drop key in milliseconds
pub const FAST_DROP_MS: u32 = 50;

/// Points per row descended with a soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row of hard drop distance
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear bonus indexed by the number of rows cleared in one lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_and_timing_defaults() {
        assert_eq!(GRAVITY_MS, 1000);
        assert_eq!(FAST_DROP_MS, 50);
        assert_eq!(SOFT_DROP_POINTS, 1);
        assert_eq!(HARD_DROP_POINTS, 2);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn color_hex_roundtrip_is_lowercase() {
        let c = Color::from_hex("#A000F0").unwrap();
        assert_eq!(c, Color::new(0xa0, 0x00, 0xf0));
        assert_eq!(c.to_hex(), "#a000f0");
        assert_eq!(c.to_string(), "#a000f0");
    }

    #[test]
    fn color_hex_rejects_malformed_input() {
        assert_eq!(Color::from_hex("a000f0"), None);
        assert_eq!(Color::from_hex("#a000f"), None);
        assert_eq!(Color::from_hex("#zz00f0"), None);
        assert_eq!(Color::from_hex("#a000f0ff"), None);
        assert_eq!(Color::from_hex("#+1+2+3"), None);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
        }
    }

    #[test]
    fn command_names_roundtrip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("MOVELEFT"), Some(Command::MoveLeft));
        assert_eq!(Command::from_str("hold"), None);
    }
}

/// 24-bit RGB colour identifier stored in settled board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::Color;
    ///
    /// assert_eq!(Color::from_hex("#00f0f0"), Some(Color::new(0, 240, 240)));
    /// assert_eq!(Color::from_hex("cyan"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, 4x4 matrix, horizontal bar on the second row
/// - **J**: Blue, 3x3 matrix
/// - **L**: Orange, 3x3 matrix (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, 3x3 matrix
/// - **T**: Purple, 3x3 matrix
/// - **Z**: Red, 3x3 matrix (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in canonical order (the order random draws index into).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Display color fixed per kind
    pub const fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::new(0x00, 0xf0, 0xf0),
            PieceKind::J => Color::new(0x00, 0x00, 0xf0),
            PieceKind::L => Color::new(0xf0, 0xa0, 0x00),
            PieceKind::O => Color::new(0xf0, 0xf0, 0x00),
            PieceKind::S => Color::new(0x00, 0xf0, 0x00),
            PieceKind::T => Color::new(0xa0, 0x00, 0xf0),
            PieceKind::Z => Color::new(0xf0, 0x00, 0x00),
        }
    }
}

/// Commands accepted by a game session
///
/// These are produced by keyboard input, the headless line protocol, and the
/// gravity scheduler (`Tick`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Reset to a fresh playing session
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Move piece one cell down, +1 point, never locks
    SoftDrop,
    /// Drop piece to rest and lock it
    HardDrop,
    /// Gravity step: move down one row or lock
    Tick,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Start,
        Command::MoveLeft,
        Command::MoveRight,
        Command::Rotate,
        Command::SoftDrop,
        Command::HardDrop,
        Command::Tick,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("tick"), Some(Command::Tick));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Tick => "tick",
        }
    }
}

/// Record emitted every time a piece locks into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    /// Points awarded for the hard drop distance (0 for a gravity lock).
    pub drop_score: u32,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// The promoted piece collided at spawn and the session ended.
    pub game_over: bool,
}

impl LockEvent {
    /// Total points this lock added to the session score.
    pub fn total(&self) -> u32 {
        self.drop_score + self.line_clear_score
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell settled by a piece of that color
pub type Cell = Option<Color>;
