//! Grid module - placement state and drop rules.
//!
//! Cells are addressed by `(row, col)` with row 0 at the top. Gravity fills
//! each column from the bottom row upward, so within any column the empty
//! cells form one contiguous block ending at row 0. Storage is a flat
//! row-major array for cache locality.
//!
//! Column numbers in the public API are 1-based (what players see);
//! `(row, col)` coordinates in results are 0-based.

use tui_connect_types::{Cell, GridError, Owner, MAX_DIM, MIN_DIM};

/// The game board. Created once per game; cells go empty -> occupied at
/// most once and are never reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Fails with [`GridError::InvalidDimensions`] unless both dimensions
    /// are within `[MIN_DIM, MAX_DIM]`.
    pub fn new(rows: u8, cols: u8) -> Result<Self, GridError> {
        let in_range = |d: u8| (MIN_DIM..=MAX_DIM).contains(&d);
        if !in_range(rows) || !in_range(cols) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Flat index for signed coordinates, `None` when out of bounds.
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= self.rows as i8 || col < 0 || col >= self.cols as i8 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    ///
    /// Coordinates are signed so directional scans can step past an edge
    /// and stop on `None`.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether a 1-based column number addresses a real column.
    pub fn is_column_valid(&self, column: u8) -> bool {
        (1..=self.cols).contains(&column)
    }

    /// Whether the column has no room left.
    ///
    /// By the gravity invariant a column is full exactly when its top cell
    /// is occupied. Out-of-range columns report as full: they can never
    /// accept a drop.
    pub fn is_column_full(&self, column: u8) -> bool {
        if !self.is_column_valid(column) {
            return true;
        }
        self.cells[(column - 1) as usize].is_some()
    }

    /// Drop a disc into a 1-based column.
    ///
    /// Returns the 0-based `(row, col)` the disc settled at, or `None` when
    /// the column is invalid or full. Rejection has no side effect; this is
    /// the only operation that mutates the grid.
    pub fn drop_disc(&mut self, column: u8, owner: Owner) -> Option<(u8, u8)> {
        if !self.is_column_valid(column) || self.is_column_full(column) {
            return None;
        }

        let col = column - 1;
        for row in (0..self.rows).rev() {
            let idx = row as usize * self.cols as usize + col as usize;
            if self.cells[idx].is_none() {
                self.cells[idx] = Some(owner);
                return Some((row, col));
            }
        }

        // The fullness check above rules out a column with no empty cell.
        unreachable!("non-full column has an empty cell")
    }

    /// Whether every column is full.
    pub fn is_board_full(&self) -> bool {
        (1..=self.cols).all(|column| self.is_column_full(column))
    }

    /// Enumerate every cell as `((row, col), cell)`, row-major.
    ///
    /// This is the read-only surface renderers consume; nothing else about
    /// the storage layout is public.
    pub fn iter(&self) -> impl Iterator<Item = ((u8, u8), Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let row = (i / self.cols as usize) as u8;
            let col = (i % self.cols as usize) as u8;
            ((row, col), cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        let grid = Grid::new(6, 7).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 6), Some(6));
        assert_eq!(grid.index(1, 0), Some(7));
        assert_eq!(grid.index(5, 6), Some(41));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(6, 0), None);
        assert_eq!(grid.index(0, 7), None);
    }

    #[test]
    fn get_is_none_out_of_bounds() {
        let grid = Grid::new(6, 7).unwrap();
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(6, 0), None);
        assert_eq!(grid.get(0, 7), None);
        assert_eq!(grid.get(0, 0), Some(None));
    }

    #[test]
    fn iter_yields_every_cell_once_in_row_major_order() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.drop_disc(3, Owner::new(2)).unwrap();

        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 36);
        assert_eq!(cells[0].0, (0, 0));
        assert_eq!(cells[35].0, (5, 5));

        let occupied: Vec<_> = cells.iter().filter(|(_, c)| c.is_some()).collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].0, (5, 2));
    }
}
