//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders into a simple framebuffer that is then
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Render from a [`core::GameSnapshot`] only, so the view owns no game logic
//! - Control tile aspect ratio directly (7 columns x 3 rows per tile by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
