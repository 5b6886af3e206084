//! Tests for puzzle construction, lookup and moves.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use strictly_puzzle::{Grid, InvalidArgumentKind, Piece, Position};

fn assert_consistent(grid: &Grid) {
    let size = grid.size();
    let mut empties = 0;
    for y in 0..size {
        for x in 0..size {
            let here = Position::new(x, y);
            match grid.piece_at(here).unwrap() {
                Some(piece) => assert_eq!(piece.current_position(), here),
                None => {
                    empties += 1;
                    assert_eq!(grid.empty_position(), here);
                }
            }
        }
    }
    assert_eq!(empties, 1);
    assert!(grid.check_invariants().is_ok());
}

#[test]
fn test_solved_three_by_three() {
    let grid = Grid::solved(3).unwrap();
    assert_eq!(grid.size(), 3);
    assert_eq!(grid.empty_position(), Position::new(2, 2));

    for idx in 0..8 {
        let slot = Position::new(idx % 3, idx / 3);
        let piece = grid.piece_at(slot).unwrap().unwrap();
        assert_eq!(piece.home(), slot);
    }
    assert_eq!(grid.piece_at(Position::new(2, 2)).unwrap(), None);
    assert_consistent(&grid);
}

#[test]
fn test_size_one_rejected() {
    let err = Grid::solved(1).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::SizeTooSmall(1));
    assert!(err.to_string().contains("at least 2"));
}

#[test]
fn test_shuffled_keeps_piece_set_and_corner() {
    let solved: HashSet<Position> = Grid::solved(4).unwrap().pieces().map(|p| p.home()).collect();

    for seed in 0..20 {
        let grid = Grid::shuffled_with(4, &mut StdRng::seed_from_u64(seed)).unwrap();
        let homes: HashSet<Position> = grid.pieces().map(|p| p.home()).collect();
        assert_eq!(homes, solved);
        assert_eq!(grid.pieces().count(), 15);
        assert_eq!(grid.empty_position(), Position::new(3, 3));
        assert_consistent(&grid);
    }
}

#[test]
fn test_shuffled_with_thread_rng() {
    let grid = Grid::shuffled(3).unwrap();
    assert_eq!(grid.empty_position(), Position::new(2, 2));
    assert_consistent(&grid);
}

#[test]
fn test_shuffle_produces_more_than_one_arrangement() {
    let arrangements: HashSet<Vec<Position>> = (0..10)
        .map(|seed| {
            Grid::shuffled_with(3, &mut StdRng::seed_from_u64(seed))
                .unwrap()
                .pieces()
                .map(|p| p.home())
                .collect()
        })
        .collect();
    assert!(arrangements.len() > 1);
}

#[test]
fn test_move_adjacent_piece_into_empty() {
    let mut grid = Grid::solved(3).unwrap();
    let piece = grid.piece_at_coordinates(1, 2).unwrap().unwrap();

    assert!(grid.do_move_to_empty(&piece));
    assert_eq!(grid.empty_position(), Position::new(1, 2));

    let moved = grid.piece_at(Position::new(2, 2)).unwrap().unwrap();
    assert_eq!(moved.home(), Position::new(1, 2));
    assert_eq!(moved.current_position(), Position::new(2, 2));
    assert_consistent(&grid);
}

#[test]
fn test_move_distant_piece_fails_without_change() {
    let mut grid = Grid::solved(3).unwrap();
    let before = grid.clone();
    let piece = grid.piece_at_coordinates(0, 0).unwrap().unwrap();

    assert!(!grid.do_move_to_empty(&piece));
    assert_eq!(grid, before);
}

#[test]
fn test_move_to_explicit_destination() {
    let mut grid = Grid::solved(3).unwrap();
    let piece = grid.piece_at_coordinates(2, 1).unwrap().unwrap();

    // Adjacent, but not the empty cell
    assert!(!grid.do_move(&piece, Position::new(1, 1)));
    // Outside the grid
    assert!(!grid.do_move(&piece, Position::new(3, 1)));
    // The empty cell
    assert!(grid.do_move(&piece, Position::new(2, 2)));
    assert_eq!(grid.empty_position(), Position::new(2, 1));
    assert_consistent(&grid);
}

#[test]
fn test_diagonal_move_rejected() {
    let mut grid = Grid::solved(3).unwrap();
    let piece = grid.piece_at_coordinates(1, 1).unwrap().unwrap();
    assert!(!grid.do_move(&piece, Position::new(2, 2)));
    assert_eq!(grid.empty_position(), Position::new(2, 2));
}

#[test]
fn test_stale_copy_rejected() {
    let mut grid = Grid::solved(3).unwrap();
    let first = grid.piece_at_coordinates(2, 1).unwrap().unwrap();
    let second = grid.piece_at_coordinates(1, 2).unwrap().unwrap();

    assert!(grid.do_move_to_empty(&first));
    // `second` was adjacent to the old empty cell, not the new one
    assert!(!grid.do_move_to_empty(&second));

    // Moving the piece back with the pre-move copy is refused too
    assert!(!grid.do_move_to_empty(&first));
    let current = grid.piece_at_coordinates(2, 2).unwrap().unwrap();
    assert!(grid.do_move_to_empty(&current));
    assert_eq!(grid, Grid::solved(3).unwrap());
}

#[test]
fn test_mutating_a_copy_does_not_touch_the_grid() {
    let grid = Grid::solved(3).unwrap();
    let mut piece = grid.piece_at_coordinates(0, 0).unwrap().unwrap();
    piece.move_to(Position::new(2, 2));

    let held = grid.piece_at_coordinates(0, 0).unwrap().unwrap();
    assert_eq!(held.current_position(), Position::new(0, 0));
}

#[test]
fn test_movable_pieces_surround_empty() {
    let grid = Grid::solved(3).unwrap();
    let mut movable: Vec<Position> = grid
        .movable_pieces()
        .iter()
        .map(Piece::current_position)
        .collect();
    movable.sort();
    assert_eq!(movable, vec![Position::new(1, 2), Position::new(2, 1)]);
}

#[test]
fn test_lookup_out_of_bounds() {
    let grid = Grid::solved(3).unwrap();

    let err = grid.piece_at_coordinates(-1, 0).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::NegativeCoordinate(-1, 0));

    let err = grid.piece_at(Position::new(3, 0)).unwrap_err();
    assert!(matches!(err.kind(), InvalidArgumentKind::OutOfBounds { size: 3, .. }));

    assert!(grid.piece_at_coordinates(0, 3).is_err());
}

#[test]
fn test_from_pieces_rebuilds_moved_grid() {
    let mut grid = Grid::solved(3).unwrap();
    let piece = grid.piece_at_coordinates(1, 2).unwrap().unwrap();
    assert!(grid.do_move_to_empty(&piece));

    let rebuilt = Grid::from_pieces(grid.pieces().collect(), grid.empty_position()).unwrap();
    assert_eq!(rebuilt, grid);
}

#[test]
fn test_from_pieces_rejects_inconsistent_input() {
    let solved = Grid::solved(2).unwrap();
    let pieces: Vec<Piece> = solved.pieces().collect();

    // Wrong count
    let err = Grid::from_pieces(pieces[..2].to_vec(), Position::new(1, 1)).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::PieceCountNotSquare(2));

    // Empty cell outside the grid
    let err = Grid::from_pieces(pieces.clone(), Position::new(2, 0)).unwrap_err();
    assert!(matches!(err.kind(), InvalidArgumentKind::EmptyOutOfBounds { .. }));

    // Empty cell holds a piece
    let err = Grid::from_pieces(pieces.clone(), Position::new(0, 0)).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::EmptyCellOccupied(Position::new(0, 0)));

    // Two pieces in one cell
    let mut crowded = pieces.clone();
    crowded[1] = Piece::with_home(Position::new(1, 0), Position::new(0, 0));
    let err = Grid::from_pieces(crowded, Position::new(1, 1)).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::DuplicatePosition(Position::new(0, 0)));

    // A home that is not a tile slot
    let mut strange = pieces;
    strange[0] = Piece::with_home(Position::new(1, 1), Position::new(0, 0));
    let err = Grid::from_pieces(strange, Position::new(1, 1)).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::UnexpectedHome(Position::new(1, 1)));
}

#[test]
fn test_from_pieces_rejects_too_small() {
    let err = Grid::from_pieces(Vec::new(), Position::new(0, 0)).unwrap_err();
    assert_eq!(err.kind(), &InvalidArgumentKind::SizeTooSmall(1));
}
