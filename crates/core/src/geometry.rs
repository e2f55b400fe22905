//! Geometry module - pure transformations over (board, piece)
//!
//! Nothing in here mutates its inputs: every function returns a new piece, a
//! new board, or a plain answer. The session decides which results to keep.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Rotate a piece a quarter turn clockwise in place (anchor unchanged).
///
/// O pieces come back unchanged. No bounds or collision checks happen here;
/// callers test the result with [`collides`].
pub fn rotate(piece: &Tetromino) -> Tetromino {
    if piece.kind == PieceKind::O {
        return *piece;
    }
    Tetromino {
        shape: piece.shape.rotated_cw(),
        ..*piece
    }
}

/// Would `piece` translated by (dx, dy) hit a wall, the floor or a settled cell?
///
/// Cells above the top edge (y < 0) only get the wall and floor checks, so a
/// piece may hang partly above the board without colliding.
pub fn collides(board: &Board, piece: &Tetromino, dx: i8, dy: i8) -> bool {
    collides_at(board, piece, dx as i16, dy as i16)
}

// Offsets are i16: a drop from far above the board can exceed i8.
fn collides_at(board: &Board, piece: &Tetromino, dx: i16, dy: i16) -> bool {
    piece.shape.cells().any(|(cx, cy)| {
        let x = piece.x as i16 + cx as i16 + dx;
        let y = piece.y as i16 + cy as i16 + dy;

        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }
        y >= 0 && board.is_occupied(x as i8, y as i8)
    })
}

/// Write the piece's color into every on-board cell it covers.
///
/// Cells above the board are dropped.
pub fn merge(board: &Board, piece: &Tetromino) -> Board {
    let mut merged = board.clone();
    let color = piece.color();
    for (x, y) in piece.board_cells() {
        if (0..BOARD_HEIGHT as i8).contains(&y) {
            merged.set(x, y, Some(color));
        }
    }
    merged
}

/// Remove every complete row and compact the rest toward the bottom.
///
/// Returns the new board and how many rows were removed.
pub fn clear_lines(board: &Board) -> (Board, usize) {
    let mut cleared = board.clone();
    let rows = cleared.clear_full_rows();
    (cleared, rows.len())
}

/// How many rows the piece can fall before it would collide.
///
/// The floor bounds the result: an anchor at `i8::MIN` falls at most 147 rows.
pub fn drop_distance(board: &Board, piece: &Tetromino) -> u8 {
    let mut distance: i16 = 0;
    while !collides_at(board, piece, 0, distance + 1) {
        distance += 1;
    }
    distance as u8
}

/// Anchor row the piece comes to rest on after a hard drop.
pub fn landing_y(board: &Board, piece: &Tetromino) -> i8 {
    (piece.y as i16 + drop_distance(board, piece) as i16) as i8
}
