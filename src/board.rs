use std::fmt;

use crate::constants::{CELL_SEPARATOR, COORD_SEPARATOR};
use crate::error::{Axis, Error, Result};

/// A coordinate on a board: `(row, column)`.
pub type Point = (usize, usize);

/// A fixed-size rectangular grid addressed by `(x, y)`, where `x` is the row
/// and `y` the column.
///
/// The board only checks bounds. Whether a write is a legal move is decided by
/// the game that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T: Clone> Board<T> {
    /// Create a board with every cell set to `fill`.
    pub fn new(rows: usize, columns: usize, fill: T) -> Result<Self> {
        Self::from_fn(rows, columns, |_| fill.clone())
    }
}

impl<T> Board<T> {
    /// Create a board by calling `f` once per coordinate, in row-major order.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(Point) -> T) -> Result<Self> {
        check_dimension("rows", rows)?;
        check_dimension("columns", columns)?;
        let mut cells = Vec::with_capacity(rows * columns);
        for x in 0..rows {
            for y in 0..columns {
                cells.push(f((x, y)));
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check that `(x, y)` lies on the board, naming the failing axis.
    pub fn check_index(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.rows {
            return Err(Error::OutOfBounds {
                axis: Axis::X,
                index: x,
                limit: self.rows,
            });
        }
        if y >= self.columns {
            return Err(Error::OutOfBounds {
                axis: Axis::Y,
                index: y,
                limit: self.columns,
            });
        }
        Ok(())
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.rows && y < self.columns
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        x * self.columns + y
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        self.check_index(x, y)?;
        Ok(&self.cells[self.idx(x, y)])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T> {
        self.check_index(x, y)?;
        let i = self.idx(x, y);
        Ok(&mut self.cells[i])
    }

    /// Overwrite the value at `(x, y)`.
    pub fn set(&mut self, value: T, x: usize, y: usize) -> Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// All coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |x| (0..columns).map(move |y| (x, y)))
    }

    /// All values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// One row of values.
    pub fn row(&self, x: usize) -> Result<&[T]> {
        self.check_index(x, 0)?;
        let start = x * self.columns;
        Ok(&self.cells[start..start + self.columns])
    }

    /// All rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.columns)
    }

    /// Render the board lazily, drawing each cell with `f`.
    pub fn display_with<F, D>(&self, f: F) -> BoardDisplay<'_, T, F>
    where
        F: Fn(&T) -> D,
        D: fmt::Display,
    {
        BoardDisplay { board: self, f }
    }
}

/// Fail with `InvalidDimension` unless `value` is positive.
pub(crate) fn check_dimension(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidDimension { name, value });
    }
    Ok(())
}

/// Display adapter returned by [`Board::display_with`].
///
/// One line per row, cells separated by a single space, no trailing newline.
pub struct BoardDisplay<'a, T, F> {
    board: &'a Board<T>,
    f: F,
}

impl<T, F, D> fmt::Display for BoardDisplay<'_, T, F>
where
    F: Fn(&T) -> D,
    D: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(self.board, f, |f, cell| write!(f, "{}", (self.f)(cell)))
    }
}

impl<T: fmt::Display> fmt::Display for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(self, f, |f, cell| write!(f, "{cell}"))
    }
}

fn write_rows<T>(
    board: &Board<T>,
    f: &mut fmt::Formatter<'_>,
    mut write_cell: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (x, row) in board.rows_iter().enumerate() {
        if x > 0 {
            writeln!(f)?;
        }
        for (y, cell) in row.iter().enumerate() {
            if y > 0 {
                f.write_str(CELL_SEPARATOR)?;
            }
            write_cell(f, cell)?;
        }
    }
    Ok(())
}

/// Parse a typed coordinate such as `"1,2"` or `" 0 , 2 "`.
pub fn parse_point(s: &str) -> Result<Point> {
    let malformed = || Error::MalformedCoordinate {
        input: s.trim().to_string(),
    };
    let (x, y) = s.trim().split_once(COORD_SEPARATOR).ok_or_else(malformed)?;
    let x = x.trim().parse::<usize>().map_err(|_| malformed())?;
    let y = y.trim().parse::<usize>().map_err(|_| malformed())?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_filled() {
        let board = Board::new(2, 3, 0u8).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.columns(), 3);
        assert!(board.iter().all(|&c| c == 0));
        assert_eq!(board.points().count(), 6);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 3, 0u8),
            Err(Error::InvalidDimension {
                name: "rows",
                value: 0
            })
        );
        assert_eq!(
            Board::new(3, 0, 0u8),
            Err(Error::InvalidDimension {
                name: "columns",
                value: 0
            })
        );
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::new(3, 4, '.').unwrap();
        board.set('a', 2, 3).unwrap();
        assert_eq!(board.get(2, 3), Ok(&'a'));
        assert_eq!(board.get(0, 3), Ok(&'.'));
        // set overwrites unconditionally
        board.set('b', 2, 3).unwrap();
        assert_eq!(board.get(2, 3), Ok(&'b'));
    }

    #[test]
    fn test_bounds_name_axis() {
        let mut board = Board::new(2, 5, 0u8).unwrap();
        assert_eq!(
            board.get(2, 0),
            Err(Error::OutOfBounds {
                axis: Axis::X,
                index: 2,
                limit: 2
            })
        );
        assert_eq!(
            board.set(1, 1, 5),
            Err(Error::OutOfBounds {
                axis: Axis::Y,
                index: 5,
                limit: 5
            })
        );
        // x is reported first when both are out of range
        assert!(matches!(
            board.get(9, 9),
            Err(Error::OutOfBounds { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_row_bounds() {
        let board = Board::from_fn(2, 2, |(x, y)| x * 2 + y).unwrap();
        assert_eq!(board.row(1), Ok(&[2, 3][..]));
        assert_eq!(
            board.row(5),
            Err(Error::OutOfBounds {
                axis: Axis::X,
                index: 5,
                limit: 2
            })
        );
        assert_eq!(board.rows_iter().count(), 2);
    }

    #[test]
    fn test_points_row_major() {
        let board = Board::new(2, 2, ()).unwrap();
        let points: Vec<Point> = board.points().collect();
        assert_eq!(points, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_display() {
        let board = Board::from_fn(2, 3, |(x, y)| x * 3 + y).unwrap();
        assert_eq!(board.to_string(), "0 1 2\n3 4 5");
        let shown = board.display_with(|v| if v % 2 == 0 { 'e' } else { 'o' });
        assert_eq!(shown.to_string(), "e o e\no e o");
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2"), Ok((1, 2)));
        assert_eq!(parse_point("  0 , 2 \n"), Ok((0, 2)));
        for bad in ["", "1", "1,", ",2", "a,b", "-1,0", "1;2", "1,2,3"] {
            assert!(
                matches!(parse_point(bad), Err(Error::MalformedCoordinate { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }
}
