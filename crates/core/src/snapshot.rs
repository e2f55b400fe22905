//! Read model handed to renderers and observers.

use crate::board::Grid;
use crate::pieces::Tetromino;
use crate::types::{LockEvent, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything a renderer needs from one session state.
///
/// `board` already has the current piece drawn on top of the settled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub current: Option<Tetromino>,
    pub next: Option<Tetromino>,
    /// Landing row of the current piece, for a drop preview
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub is_playing: bool,
    pub is_game_over: bool,
    pub last_event: Option<LockEvent>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            ghost_y: None,
            score: 0,
            is_playing: false,
            is_game_over: false,
            last_event: None,
        }
    }
}

/// Paint a piece's on-board cells into a grid; off-board cells are skipped.
pub fn overlay_piece(grid: &mut Grid, piece: &Tetromino) {
    let color = piece.color();
    for (x, y) in piece.board_cells() {
        if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
            grid[y as usize][x as usize] = Some(color);
        }
    }
}
