use log::trace;
use crate::text::normalize_cell;

/// Number of grid columns, enough for the weekly table including its date column
pub const GRID_COLUMNS: usize = 9;

/// Number of grid rows, i.e. date, weather, temperature, humidity, precipitation and wind
pub const GRID_ROWS: usize = 6;

/// Table cells re-buffered into fixed positions and addressed column first
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Grid {
    cells: [[String; GRID_ROWS]; GRID_COLUMNS],
}

impl Grid {
    /// Reassembles a stream of table rows into a grid.
    ///
    /// The first cell of every row marks a row boundary, its content (a row label) is
    /// discarded and the row cursor moves on. Every following cell of the row is
    /// normalized and written at the current column, after which the column cursor moves on.
    /// Cells that fall outside the grid are dropped, and grid cells not reached by any row
    /// keep their empty content.
    ///
    /// # Arguments
    ///
    /// * 'rows' - rows in document order, each being the inner markup of its cells
    pub fn reassemble<R, C, S>(rows: R) -> Grid
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Grid::default();
        let mut column: usize = 0;
        let mut row: Option<usize> = None;

        for cells in rows {
            for (i, cell) in cells.into_iter().enumerate() {
                if i == 0 {
                    column = 0;
                    row = Some(row.map_or(0, |r| r + 1));
                    continue;
                }

                match row {
                    Some(r) if r < GRID_ROWS && column < GRID_COLUMNS => {
                        grid.cells[column][r] = normalize_cell(cell.as_ref());
                    }
                    _ => trace!("dropping cell outside grid at column {} row {:?}", column, row),
                }
                column += 1;
            }
        }

        grid
    }

    /// Returns the normalized text at the given position, empty if out of range
    ///
    /// # Arguments
    ///
    /// * 'column' - grid column
    /// * 'row' - grid row
    pub fn get(&self, column: usize, row: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|c| c.get(row))
            .map_or("", |s| s.as_str())
    }
}
