//! Mouse-drag swipes.
//!
//! A swipe is the vector between a button press and its release. The
//! dominant axis decides the direction; drags shorter than the threshold on
//! that axis are ignored.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Minimum drag length in terminal cells.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 2;

/// Direction of a drag `(dx, dy)` in screen coordinates (y grows downward).
///
/// Horizontal wins only when strictly longer than the vertical component.
pub fn swipe_direction(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx >= threshold {
            Some(Direction::Right)
        } else if dx <= -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy >= threshold {
        Some(Direction::Down)
    } else if dy <= -threshold {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Remembers where the left button went down.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    /// Feed a mouse event; returns a direction when a swipe completes.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                let dx = event.column as i32 - x0 as i32;
                let dy = event.row as i32 - y0 as i32;
                swipe_direction(dx, dy, self.threshold)
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
