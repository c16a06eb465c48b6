//! Win detection - did the piece just placed complete a run of four?
//!
//! Stateless: [`check_winner`] is a pure function of `(grid, row, col,
//! owner)`. Each axis is scanned outward from the placed cell in both
//! directions; the placed cell itself contributes the `1` in the total.

use crate::grid::Grid;
use tui_connect_types::{Owner, WIN_RUN};

/// The four axes, as pairs of opposite unit steps `(d_row, d_col)`:
/// horizontal, vertical, ascending diagonal, descending diagonal.
const AXES: [[(i8, i8); 2]; 4] = [
    [(0, -1), (0, 1)],
    [(-1, 0), (1, 0)],
    [(1, -1), (-1, 1)],
    [(-1, -1), (1, 1)],
];

/// Whether the placement at `(row, col)` by `owner` wins the game.
///
/// Callers must guarantee `grid[(row, col)] == owner`; the session calls
/// this immediately after a successful drop at that cell, which makes the
/// precondition hold by construction. Evaluation short-circuits on the
/// first winning axis.
pub fn check_winner(grid: &Grid, row: u8, col: u8, owner: Owner) -> bool {
    AXES.iter().any(|&[back, fwd]| {
        let total =
            1 + run_length(grid, row, col, owner, back) + run_length(grid, row, col, owner, fwd);
        total >= WIN_RUN
    })
}

/// Count consecutive `owner` cells strictly beyond `(row, col)` along one
/// unit step, stopping at the first out-of-bounds, empty, or foreign-owned
/// cell. The starting cell is never counted.
fn run_length(grid: &Grid, row: u8, col: u8, owner: Owner, (dr, dc): (i8, i8)) -> usize {
    let mut count = 0;
    let mut r = row as i8 + dr;
    let mut c = col as i8 + dc;
    while grid.get(r, c) == Some(Some(owner)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Owner = Owner::new(0);
    const B: Owner = Owner::new(1);

    #[test]
    fn run_length_counts_strictly_beyond_the_start() {
        let mut grid = Grid::new(6, 7).unwrap();
        for column in 1..=3 {
            grid.drop_disc(column, A).unwrap();
        }

        // From (5, 0) rightward: two more discs.
        assert_eq!(run_length(&grid, 5, 0, A, (0, 1)), 2);
        // From (5, 2): two to the left, none to the right.
        assert_eq!(run_length(&grid, 5, 2, A, (0, -1)), 2);
        assert_eq!(run_length(&grid, 5, 2, A, (0, 1)), 0);
    }

    #[test]
    fn run_length_stops_at_a_foreign_disc() {
        let mut grid = Grid::new(6, 7).unwrap();
        grid.drop_disc(1, A).unwrap();
        grid.drop_disc(2, A).unwrap();
        grid.drop_disc(3, B).unwrap();

        assert_eq!(run_length(&grid, 5, 0, A, (0, 1)), 1);
    }

    #[test]
    fn run_length_stops_at_the_edge() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.drop_disc(1, A).unwrap();

        assert_eq!(run_length(&grid, 5, 0, A, (0, -1)), 0);
        assert_eq!(run_length(&grid, 5, 0, A, (1, 0)), 0);
    }
}
