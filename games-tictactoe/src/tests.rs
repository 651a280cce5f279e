use super::*;

fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
    pairs.iter().map(|&(r, c)| Coord::new(r, c)).collect()
}

#[test]
fn test_initial_state() {
    let board = TicTacToe::new(3);
    assert_eq!(board.dim(), 3);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.empty_cells().len(), 9);
    for coord in board.empty_cells() {
        assert_eq!(board.cell(coord), None);
    }
}

#[test]
fn test_empty_cells_row_major_order() {
    let mut board = TicTacToe::new(3);
    board.apply(Coord::new(0, 1), Player::X).unwrap();
    board.apply(Coord::new(1, 1), Player::O).unwrap();

    let expected = coords(&[(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
    assert_eq!(board.empty_cells(), expected);
}

#[test]
fn test_apply_places_mark() {
    let mut board = TicTacToe::new(3);
    board.apply(Coord::new(1, 1), Player::X).unwrap();

    assert_eq!(board.cell(Coord::new(1, 1)), Some(Player::X));
    assert_eq!(board.empty_cells().len(), 8);
    assert_eq!(board.outcome(), None);
}

#[test]
fn test_apply_occupied_cell() {
    let mut board = TicTacToe::new(3);
    board.apply(Coord::new(1, 1), Player::X).unwrap();

    let err = board.apply(Coord::new(1, 1), Player::O).unwrap_err();
    assert_eq!(err, MoveError::Occupied { row: 1, col: 1 });
    // State is unchanged
    assert_eq!(board.cell(Coord::new(1, 1)), Some(Player::X));
}

#[test]
fn test_apply_out_of_bounds() {
    let mut board = TicTacToe::new(3);
    let err = board.apply(Coord::new(3, 0), Player::X).unwrap_err();
    assert_eq!(
        err,
        MoveError::OutOfBounds {
            row: 3,
            col: 0,
            dim: 3
        }
    );
}

#[test]
fn test_apply_after_game_over() {
    let mut board = TicTacToe::from_cells(
        3,
        vec![
            Some(Player::X),
            Some(Player::X),
            Some(Player::X),
            Some(Player::O),
            Some(Player::O),
            None,
            None,
            None,
            None,
        ],
    );
    assert_eq!(board.outcome(), Some(Outcome::Win(Player::X)));

    let err = board.apply(Coord::new(2, 2), Player::O).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
}

#[test]
fn test_winning_game_move_by_move() {
    let mut board = TicTacToe::new(3);

    // X wins with the top row
    board.apply(Coord::new(0, 0), Player::X).unwrap();
    board.apply(Coord::new(1, 0), Player::O).unwrap();
    board.apply(Coord::new(0, 1), Player::X).unwrap();
    board.apply(Coord::new(1, 1), Player::O).unwrap();
    assert_eq!(board.outcome(), None);

    board.apply(Coord::new(0, 2), Player::X).unwrap();
    assert_eq!(board.outcome(), Some(Outcome::Win(Player::X)));
}

/// Every row, column, and diagonal should be detected for both players
/// across several dimensions.
#[test]
fn test_all_winning_lines() {
    for dim in [3usize, 4, 5] {
        let mut lines: Vec<Vec<(usize, usize)>> = Vec::new();
        for row in 0..dim {
            lines.push((0..dim).map(|col| (row, col)).collect());
        }
        for col in 0..dim {
            lines.push((0..dim).map(|row| (row, col)).collect());
        }
        lines.push((0..dim).map(|k| (k, k)).collect());
        lines.push((0..dim).map(|k| (k, dim - 1 - k)).collect());

        assert_eq!(lines.len(), 2 * dim + 2);

        for (line_idx, line) in lines.iter().enumerate() {
            for player in [Player::X, Player::O] {
                let mut cells = vec![None; dim * dim];
                for &(row, col) in line {
                    cells[row * dim + col] = Some(player);
                }
                let board = TicTacToe::from_cells(dim, cells);
                assert_eq!(
                    board.outcome(),
                    Some(Outcome::Win(player)),
                    "{} should win line {} at dim {}",
                    player,
                    line_idx,
                    dim
                );
            }
        }
    }
}

#[test]
fn test_draw_detection() {
    // X O X / O X O / O X O
    let board = TicTacToe::from_cells(
        3,
        vec![
            Some(Player::X),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
        ],
    );
    assert_eq!(board.outcome(), Some(Outcome::Draw));
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_win_on_final_cell_is_not_a_draw() {
    // X fills the last cell and completes the main diagonal
    let mut board = TicTacToe::from_cells(
        3,
        vec![
            Some(Player::X),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
            Some(Player::O),
            Some(Player::X),
            None,
        ],
    );
    assert_eq!(board.outcome(), None);

    board.apply(Coord::new(2, 2), Player::X).unwrap();
    assert_eq!(board.outcome(), Some(Outcome::Win(Player::X)));
}

#[test]
fn test_empty_cells_survive_game_over() {
    // Terminal boards still report their unmarked cells; playout policies
    // rely on this when voting on a position that is already decided.
    let board = TicTacToe::from_cells(
        3,
        vec![
            Some(Player::X),
            Some(Player::X),
            Some(Player::X),
            Some(Player::O),
            Some(Player::O),
            None,
            None,
            None,
            None,
        ],
    );
    assert_eq!(board.outcome(), Some(Outcome::Win(Player::X)));
    assert_eq!(
        board.empty_cells(),
        coords(&[(1, 2), (2, 0), (2, 1), (2, 2)])
    );
}

#[test]
fn test_clone_is_independent() {
    let board = TicTacToe::new(3);
    let mut scratch = board.clone();
    scratch.apply(Coord::new(0, 0), Player::X).unwrap();

    assert_eq!(board.cell(Coord::new(0, 0)), None);
    assert_eq!(scratch.cell(Coord::new(0, 0)), Some(Player::X));
}

#[test]
fn test_one_by_one_board() {
    let mut board = TicTacToe::new(1);
    assert_eq!(board.empty_cells(), coords(&[(0, 0)]));

    board.apply(Coord::new(0, 0), Player::X).unwrap();
    assert_eq!(board.outcome(), Some(Outcome::Win(Player::X)));
}

#[test]
#[should_panic(expected = "board dimension must be at least 1")]
fn test_zero_dim_panics() {
    TicTacToe::new(0);
}

#[test]
#[should_panic(expected = "snapshot length must be dim * dim")]
fn test_bad_snapshot_length_panics() {
    TicTacToe::from_cells(3, vec![None; 8]);
}

#[test]
fn test_display() {
    let mut board = TicTacToe::new(3);
    board.apply(Coord::new(0, 0), Player::X).unwrap();
    board.apply(Coord::new(1, 1), Player::O).unwrap();

    assert_eq!(board.to_string(), "X . .\n. O .\n. . .\n");
}
