//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and turns mouse drags into swipe
//! directions, so the game loop only ever sees the four direction symbols.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{swipe_direction, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
