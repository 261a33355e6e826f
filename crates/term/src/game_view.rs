//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, GRID_SIZE, RESTART_HINT};

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

/// Screen-space placement of the board for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the board frame (border included).
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// Top-left terminal cell of tile (row, col).
    pub fn tile_origin(&self, view: &GameView, row: u16, col: u16) -> (u16, u16) {
        (
            self.frame_x + 1 + col * view.tile_w,
            self.frame_y + 1 + row * view.tile_h,
        )
    }
}

const BOARD_BG: Rgb = Rgb::from_hex(0xc1cdcd);
const EMPTY_TILE_BG: Rgb = Rgb::from_hex(0x838b8b);
const DARK_TEXT: Rgb = Rgb::from_hex(0x776e65);
const LIGHT_TEXT: Rgb = Rgb::from_hex(0xf9f6f2);

/// Rows taken by the score header above the board.
const HEADER_H: u16 = 1;

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for four digits plus padding with a centered row.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board lands inside `viewport`.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (GRID_SIZE as u16) * self.tile_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.tile_h + 2;
        let total_h = frame_h + HEADER_H;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame_x,
            frame_y: top + HEADER_H,
            frame_w,
            frame_h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);

        self.draw_header(fb, snap, &layout);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, &layout, border);

        for (r, row) in snap.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, &layout, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(message) = snap.status.message() {
            self.draw_overlay(fb, &layout, message, snap.status);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let Some(y) = layout.frame_y.checked_sub(HEADER_H) else {
            return;
        };
        let style = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
        let label = "Score: ";
        fb.put_str(layout.frame_x, y, label, style);
        fb.put_u32(layout.frame_x + label.len() as u16, y, snap.score, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
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

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, row: u16, col: u16, value: u32) {
        let (px, py) = layout.tile_origin(self, row, col);
        let style = tile_style(value);

        // One column of board color on the right keeps neighbours apart.
        let fill_w = if self.tile_w > 2 { self.tile_w - 1 } else { self.tile_w };
        fb.fill_rect(px, py, fill_w, self.tile_h, ' ', style);

        if value == 0 {
            return;
        }
        let mid_y = py + self.tile_h / 2;
        let digits = decimal_len(value);
        let x = px + fill_w.saturating_sub(digits) / 2;
        fb.put_u32(x, mid_y, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = CellStyle { dim: true, ..value };

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.highest_tile, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves, value);
        y += 2;

        fb.put_str(panel_x, y, "LAST", label);
        y += 1;
        match snap.last_outcome {
            Some(o) if o.changed => {
                fb.put_char(panel_x, y, '+', value);
                fb.put_u32(panel_x + 1, y, o.score_delta, value);
            }
            Some(_) => fb.put_str(panel_x, y, "no move", dim),
            None => fb.put_str(panel_x, y, "-", value),
        }
        y += 2;

        for help in ["arrows/wasd move", "enter restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, message: &str, status: GameStatus) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let accent = match status {
            GameStatus::Won => Rgb::from_hex(0xedc22e),
            _ => Rgb::new(255, 255, 255),
        };
        let style = CellStyle::new(accent, Rgb::new(0, 0, 0)).bold();
        let hint = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

        let inner_x = layout.frame_x + 1;
        let inner_w = layout.frame_w.saturating_sub(2);
        fb.put_str_centered(inner_x, mid_y.saturating_sub(1), inner_w, message, style);
        fb.put_str_centered(inner_x, mid_y, inner_w, RESTART_HINT, hint);
    }
}

/// Background/foreground for a tile value, following the classic palette.
pub fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        0 => EMPTY_TILE_BG,
        2 => Rgb::from_hex(0xeee4da),
        4 => Rgb::from_hex(0xede0c8),
        8 => Rgb::from_hex(0xf2b179),
        16 => Rgb::from_hex(0xf59563),
        32 => Rgb::from_hex(0xf67c5f),
        64 => Rgb::from_hex(0xf65e3b),
        128 => Rgb::from_hex(0xedcf72),
        256 => Rgb::from_hex(0xedcc61),
        512 => Rgb::from_hex(0xedc850),
        1024 => Rgb::from_hex(0xedc53f),
        2048 => Rgb::from_hex(0xedc22e),
        _ => Rgb::new(0, 0, 0),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}

fn decimal_len(mut value: u32) -> u16 {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_len_counts_digits() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(8), 1);
        assert_eq!(decimal_len(2048), 4);
        assert_eq!(decimal_len(131072), 6);
    }

    #[test]
    fn tile_palette_matches_classic_colors() {
        assert_eq!(tile_style(2).bg, Rgb::new(0xee, 0xe4, 0xda));
        assert_eq!(tile_style(2048).bg, Rgb::new(0xed, 0xc2, 0x2e));
        assert_eq!(tile_style(4096).bg, Rgb::new(0, 0, 0));
        assert_eq!(tile_style(2).fg, DARK_TEXT);
        assert_eq!(tile_style(8).fg, LIGHT_TEXT);
    }

    #[test]
    fn layout_centers_board_and_header() {
        let view = GameView::default();
        // frame 30x14, header 1 => block 30x15
        let layout = view.layout(Viewport::new(40, 25));
        assert_eq!(layout.frame_w, 30);
        assert_eq!(layout.frame_h, 14);
        assert_eq!(layout.frame_x, 5);
        assert_eq!(layout.frame_y, 5 + HEADER_H);
    }
}
