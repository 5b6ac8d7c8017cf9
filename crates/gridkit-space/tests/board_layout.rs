use gridkit_core::{Board, Coord, Dir};
use gridkit_space::Grid;

#[test]
fn non_square_grid_rows_are_contiguous() {
    let board = Board::new(7, 3).unwrap();
    let mut g = Grid::with_board(0u32, board);
    for p in board.coords() {
        g[p] = (p.y * 100 + p.x) as u32;
    }
    for (row, chunk) in g.as_slice().chunks(7).enumerate() {
        let expected: Vec<u32> = (0..7).map(|x| row as u32 * 100 + x).collect();
        assert_eq!(chunk, expected.as_slice());
    }
}

#[test]
fn stepping_right_advances_flat_index_by_one_and_down_by_width() {
    let board = Board::new(9, 4).unwrap();
    let p = Coord::new(3, 1);
    let i = board.index_of(p).unwrap();
    assert_eq!(board.index_of(p + Dir::Right), Some(i + 1));
    assert_eq!(board.index_of(p + Dir::Down), Some(i + 9));
    assert_eq!(board.index_of(p + Dir::Left), Some(i - 1));
    assert_eq!(board.index_of(p + Dir::Up), Some(i - 9));
}

#[test]
fn get_rejects_cells_that_would_alias_the_next_row() {
    let board = Board::new(4, 4).unwrap();
    let g = Grid::from_fn(board, |p| p);
    assert_eq!(g.get(Coord::new(3, 0)), Some(&Coord::new(3, 0)));
    assert_eq!(g.get(Coord::new(4, 0)), None);
    assert_eq!(g.get(Coord::new(0, 4)), None);
}
