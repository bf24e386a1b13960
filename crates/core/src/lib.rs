//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine: grid state, the slide-and-merge
//! algorithm, spawn randomness, score accumulation and game-over detection.
//! It has **no dependencies** on the terminal or input layers, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness and persistence are injected
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N×N grid with line traversal and the merge routine
//! - [`game_state`]: Score, best score, spawning, moves and the game-over query
//! - [`rng`]: The [`TileRng`] interface and its sources
//! - [`store`]: High-score persistence behind [`HighScoreStore`]
//! - [`snapshot`]: Owned view of the state for rendering
//!
//! # Game Rules
//!
//! - A move slides every tile towards one edge. Equal neighbours meeting along
//!   the way merge into one tile of double value, and that value is added to
//!   the score. A tile produced by a merge does not merge again in the same move.
//! - A move that neither shifts nor merges anything is rejected: nothing spawns.
//! - After every accepted move a 2 (90%) or a 4 (10%) appears in a random
//!   empty cell.
//! - The game is over when the board is full and no row or column holds two
//!   equal neighbours.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState, MemoryStore, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows(&[[2u32, 2, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut game = GameState::from_board(board, SimpleRng::new(1), MemoryStore::new());
//!
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.high_score(), 4);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod store;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line, LineSlide};
pub use error::{CoreError, StoreError};
pub use game_state::GameState;
pub use rng::{RandSource, SimpleRng, TileRng};
pub use snapshot::{GameSnapshot, Spawn};
pub use store::{FileStore, HighScoreStore, MemoryStore};
