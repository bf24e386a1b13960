//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::hex(0x6e2b01);
const EMPTY_TILE: Rgb = Rgb::hex(0xcdc1b4);
const TILE_TEXT: Rgb = Rgb::hex(0x1e1e1e);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns, including a one-column gutter.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for six-digit tiles and roughly square cells.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for an N×N snapshot.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = n as u16;
        (n * self.cell_w + 2, n * self.cell_h + 2)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        if snap.size == 0 {
            return;
        }

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, board);

        for row in 0..snap.size {
            for col in 0..snap.size {
                let value = snap.tile(row, col);
                let fresh = snap
                    .last_spawn
                    .is_some_and(|s| s.row == row && s.col == col);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, fresh);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        fresh: bool,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let w = self.cell_w - 1;
        let style = CellStyle::new(TILE_TEXT, tile_color(value));
        fb.fill_rect(px, py, w, self.cell_h, ' ', style);

        let mid = py + self.cell_h / 2;
        if value == 0 {
            fb.put_centered(px, mid, w, "·", style.dim());
        } else {
            let text = value.to_string();
            let style = if fresh { style.bold() } else { style };
            fb.put_centered(px, mid, w, &text, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("BEST", snap.high_score),
            ("MOVES", snap.moves as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &number.to_string(), value);
            y = y.saturating_add(2);
        }

        for line in ["arrows/wasd", "drag: swipe", "r: restart", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_centered(start_x, mid_y, frame_w, text, style);
    }
}

/// Background colour of a tile.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 => EMPTY_TILE,
        2 => Rgb::hex(0xffffcc),
        4 => Rgb::hex(0xffff80),
        8 => Rgb::hex(0xffff00),
        16 => Rgb::hex(0xffb366),
        32 => Rgb::hex(0xff9933),
        64 => Rgb::hex(0xff6600),
        128 => Rgb::hex(0xff8080),
        256 => Rgb::hex(0xff5050),
        512 => Rgb::hex(0xff1a1a),
        1024 => Rgb::hex(0xff0000),
        2048 => Rgb::hex(0xa83252),
        4096 => Rgb::hex(0xff66a3),
        8192 => Rgb::hex(0xff0066),
        _ => Rgb::hex(0xff3399),
    }
}
