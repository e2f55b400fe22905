//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

const WELL_BG: Rgb = Rgb::new(30, 41, 59);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal view of one game session.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size the board frame occupies (without the side panel).
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and fully repainted, so one
    /// buffer can be reused across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: PANEL_BG,
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // The snapshot board already has the falling piece composited in.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        let style = CellStyle {
                            fg: (*color).into(),
                            bg: WELL_BG,
                            bold: true,
                            dim: false,
                        };
                        self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '█', style);
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        if let (Some(current), Some(ghost_y)) = (snap.current, snap.ghost_y) {
            self.draw_ghost(fb, snap, current, ghost_y, start_x, start_y);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.is_game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if !snap.is_playing {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER");
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(71, 85, 105),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    /// Landing preview, drawn only over empty cells.
    fn draw_ghost(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        current: Tetromino,
        ghost_y: i8,
        start_x: u16,
        start_y: u16,
    ) {
        let style = CellStyle {
            fg: current.color().into(),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        let landed = current.at_row(ghost_y);
        for (x, y) in landed.board_cells() {
            if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
                continue;
            }
            if snap.board[y as usize][x as usize].is_none() {
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '░', style);
            }
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
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

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(96, 165, 250),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            let style = CellStyle {
                fg: next.color().into(),
                bg: PANEL_BG,
                bold: true,
                dim: false,
            };
            // Preview uses the piece's own matrix, two columns per cell.
            for (dx, dy) in next.shape().cells() {
                let px = panel_x.saturating_add(dx as u16 * 2);
                let py = y.saturating_add(dy as u16);
                fb.fill_rect(px, py, 2, 1, '█', style);
            }
            y = y.saturating_add(next.shape().size() as u16);
        } else {
            fb.put_str(panel_x, y, "-", value);
            y = y.saturating_add(1);
        }

        let hint = CellStyle {
            fg: Rgb::new(148, 163, 184),
            bg: PANEL_BG,
            bold: false,
            dim: true,
        };
        y = y.saturating_add(1);
        for line in ["←→ move", "↑ rotate", "↓ soft drop", "space drop", "q quit"] {
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
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(248, 113, 113),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameState};
    use crate::types::PieceKind;

    fn find_text(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| fb.row_text(y).find(needle).map(|x| (x as u16, y)))
    }

    #[test]
    fn idle_snapshot_shows_start_prompt() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(60, 24));
        assert!(find_text(&fb, "PRESS ENTER").is_some());
        assert!(find_text(&fb, "GAME OVER").is_none());
        assert!(find_text(&fb, "SCORE").is_some());
    }

    #[test]
    fn top_anchor_puts_frame_on_first_row() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&GameSnapshot::default(), Viewport::new(60, 40));
        assert_eq!(view.frame_size(), (22, 22));
        assert_eq!(fb.get(19, 0).map(|c| c.ch), Some('┌'));
    }

    #[test]
    fn settled_cells_use_piece_color() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L.color()));
        let state = GameState::playing_with(
            board,
            Tetromino::new(PieceKind::T),
            Tetromino::new(PieceKind::I),
        );
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&state.snapshot(), Viewport::new(22, 22));

        // Frame origin (0, 0); cell (0, 19) starts at column 1, row 20.
        let cell = fb.get(1, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(0xf0, 0xa0, 0x00));
        assert_eq!(fb.get(2, 20).unwrap().style.fg, cell.style.fg);
        assert!(find_text(&fb, "PRESS ENTER").is_none());
    }

    #[test]
    fn ghost_drawn_below_falling_piece() {
        let state = GameState::playing_with(
            Board::new(),
            Tetromino::new(PieceKind::O),
            Tetromino::new(PieceKind::O),
        );
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&state.snapshot(), Viewport::new(22, 22));

        // O spawns at x = 4; ghost rests on rows 18-19.
        assert_eq!(fb.get(1 + 4 * 2, 1 + 19).unwrap().ch, '░');
        assert_eq!(fb.get(1 + 4 * 2, 1).unwrap().ch, '█');
    }

    #[test]
    fn ghost_drawn_for_piece_far_above_board() {
        let state = GameState::playing_with(
            Board::new(),
            Tetromino::new_at(PieceKind::O, 4, -120),
            Tetromino::new(PieceKind::O),
        );
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&state.snapshot(), Viewport::new(22, 22));

        assert_eq!(fb.get(1 + 4 * 2, 1 + 18).unwrap().ch, '░');
        assert_eq!(fb.get(1 + 5 * 2, 1 + 19).unwrap().ch, '░');
    }

    #[test]
    fn game_over_overlay() {
        let snap = GameSnapshot {
            is_game_over: true,
            score: 1234,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert!(find_text(&fb, "GAME OVER").is_some());
        assert!(find_text(&fb, "1234").is_some());
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
