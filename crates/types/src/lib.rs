//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the engine,
//! the terminal view and the input layer alike.
//!
//! # Board Dimensions
//!
//! The board is an N×N square. N is fixed when a game is created and must be
//! at least [`MIN_BOARD_SIZE`]; the classic game uses [`DEFAULT_BOARD_SIZE`].
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_VALUE` | 2 | Tile placed most of the time |
//! | `SPAWN_HIGH_VALUE` | 4 | Tile placed otherwise |
//! | `SPAWN_LOW_PROBABILITY` | 0.9 | Chance of the low tile |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_BOARD_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! let action = GameAction::Move(Direction::Left);
//! assert_eq!(action.as_str(), "left");
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Board dimension used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest playable board dimension
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board dimension the terminal front-end accepts
pub const MAX_BOARD_SIZE: usize = 16;

/// Value of a spawned tile in the common case
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of a spawned tile in the rare case
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Probability that a spawn places [`SPAWN_LOW_VALUE`]
pub const SPAWN_LOW_PROBABILITY: f64 = 0.9;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Well-known file name of the persisted high score
pub const HIGHSCORE_FILE: &str = "highscore.txt";

/// Value stored in an empty cell
pub const EMPTY: u32 = 0;

/// The four move directions
///
/// `Left` is the canonical direction: the merge routine is written against a
/// line scanned left to right, and every other direction is expressed as a
/// different traversal of the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction symbol (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Left` and `Right`
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Actions the input layer can hand to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile towards one edge
    Move(Direction),
    /// Throw away the current board and start over
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// True if `value` may sit in a cell: zero or a power of two of at least 2
pub fn is_valid_tile(value: u32) -> bool {
    value == EMPTY || (value >= 2 && value.is_power_of_two())
}
