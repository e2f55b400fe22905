//! Piece factory and geometry tests

use tetris_engine::core::{
    canonical_shape, collides, create_random_tetromino, drop_distance, merge, rotate, Board,
    PieceSequence, SimpleRng, Tetromino,
};
use tetris_engine::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_spawn_positions_are_centered() {
    let expected = [
        (PieceKind::I, 3),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
        (PieceKind::O, 4),
        (PieceKind::S, 4),
        (PieceKind::T, 4),
        (PieceKind::Z, 4),
    ];
    for (kind, x) in expected {
        let piece = Tetromino::new(kind);
        let width = canonical_shape(kind).size() as i8;
        assert_eq!(piece.x, BOARD_WIDTH as i8 / 2 - width / 2);
        assert_eq!(piece.x, x, "{:?}", kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.color(), kind.color());
    }
}

#[test]
fn test_random_tetromino_uses_source() {
    let mut seq = PieceSequence::new(vec![PieceKind::Z, PieceKind::I]).unwrap();
    assert_eq!(create_random_tetromino(&mut seq), Tetromino::new(PieceKind::Z));
    assert_eq!(create_random_tetromino(&mut seq), Tetromino::new(PieceKind::I));
    assert_eq!(create_random_tetromino(&mut seq), Tetromino::new(PieceKind::Z));
}

#[test]
fn test_random_tetromino_covers_every_kind() {
    let mut rng = SimpleRng::new(99);
    let mut seen = Vec::new();
    for _ in 0..500 {
        let kind = create_random_tetromino(&mut rng).kind;
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    assert_eq!(seen.len(), 7);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::new_at(kind, 3, 5);
        let turned = rotate(&rotate(&rotate(&rotate(&piece))));
        assert_eq!(turned, piece, "{:?}", kind);
    }
}

#[test]
fn test_o_piece_never_turns() {
    let piece = Tetromino::new(PieceKind::O);
    assert_eq!(rotate(&piece), piece);
}

#[test]
fn test_rotation_keeps_position() {
    let piece = Tetromino::new_at(PieceKind::L, 2, 7);
    let turned = rotate(&piece);
    assert_eq!((turned.x, turned.y), (2, 7));
    assert_ne!(turned.shape(), piece.shape());
}

#[test]
fn test_in_bounds_piece_on_empty_board_does_not_collide() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(!collides(&board, &Tetromino::new(kind), 0, 0), "{:?}", kind);
    }
}

#[test]
fn test_collides_walls_floor_and_cells() {
    let mut board = Board::new();
    let o = Tetromino::new_at(PieceKind::O, 0, 0);

    assert!(collides(&board, &o, -1, 0));
    assert!(collides(&board, &Tetromino::new_at(PieceKind::O, 8, 0), 1, 0));
    assert!(collides(&board, &Tetromino::new_at(PieceKind::O, 0, 18), 0, 1));

    board.set(1, 3, Some(PieceKind::T.color()));
    assert!(collides(&board, &o, 0, 2));
    assert!(!collides(&board, &o, 0, 1));
}

#[test]
fn test_cells_above_board_are_exempt() {
    let mut board = Board::new();
    board.fill_row_except(0, PieceKind::J.color(), &[4, 5]);
    // O half above the board, lower half in the gap.
    let o = Tetromino::new_at(PieceKind::O, 4, -1);
    assert!(!collides(&board, &o, 0, 0));
    // Outside the columns it is still a wall hit.
    assert!(collides(&board, &Tetromino::new_at(PieceKind::O, -1, -1), 0, 0));
}

#[test]
fn test_merge_drops_cells_above_board() {
    let board = Board::new();
    let merged = merge(&board, &Tetromino::new_at(PieceKind::T, 0, -1));
    // T occupies row 0 of its matrix (off-board) and row 1 (board row 0).
    assert_eq!(merged.filled_count(), 3);
    assert!(merged.is_occupied(0, 0));
    assert!(merged.is_occupied(2, 0));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_drop_distance_is_maximal() {
    let mut board = Board::new();
    board.set(4, 15, Some(PieceKind::Z.color()));
    board.fill_row_except(19, PieceKind::Z.color(), &[0]);

    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        let d = drop_distance(&board, &piece) as i8;
        assert!(!collides(&board, &piece, 0, d), "{:?}", kind);
        assert!(collides(&board, &piece, 0, d + 1), "{:?}", kind);
    }
}

#[test]
fn test_drop_distance_zero_when_resting() {
    let board = Board::new();
    let resting = Tetromino::new_at(PieceKind::O, 4, BOARD_HEIGHT as i8 - 2);
    assert_eq!(drop_distance(&board, &resting), 0);
}
