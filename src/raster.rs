//! Geometry to row patterns.
//!
//! [`Raster`] owns no frame buffer. Every operation is translated straight into
//! [`RowSink::write_row`] calls, so the cost of a draw is its number of row writes.

use core::cmp::{max, min};

use crate::{
    BitMatrix, COL_COUNT_U8, Error, ROW_COUNT_U8, Result,
    grid::{Point, column_bit},
    max7219::Intensity,
    row_sink::RowSink,
};

/// Draws pixels, rows, bitmaps and lines on the 8x8 matrix through a [`RowSink`].
#[derive(Debug)]
pub struct Raster<S> {
    sink: S,
}

impl<S: RowSink> Raster<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Lights `(row, col)` by writing a row with only that column set. One transport write.
    ///
    /// The write replaces the whole row, so other cells of that row go dark.
    ///
    /// # Errors
    /// [`Error::PixelOutOfBounds`] if the cell is off the matrix, or a transport error.
    pub fn set_pixel(&mut self, row: u8, col: u8) -> Result<()> {
        let point = Point::new(row, col)?;
        self.sink.write_row(point.row, point.column_bit())
    }

    /// Writes `bits` verbatim to `row`. All other draws reduce to this.
    ///
    /// # Errors
    /// [`Error::RowOutOfBounds`] if the row is off the matrix, or a transport error.
    pub fn fill_row(&mut self, row: u8, bits: u8) -> Result<()> {
        if row >= ROW_COUNT_U8 {
            return Err(Error::RowOutOfBounds { row });
        }
        self.sink.write_row(row, bits)
    }

    /// Turns every row off, top to bottom.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn clear(&mut self) -> Result<()> {
        self.fill_all(0x00)
    }

    /// Turns every row fully on, top to bottom.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn fill(&mut self) -> Result<()> {
        self.fill_all(0xFF)
    }

    fn fill_all(&mut self, bits: u8) -> Result<()> {
        for row in 0..ROW_COUNT_U8 {
            self.fill_row(row, bits)?;
        }
        Ok(())
    }

    /// Writes `rows[r]` to row `r`, top to bottom.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn draw_bitmap(&mut self, rows: &[u8; crate::ROW_COUNT]) -> Result<()> {
        for (row, &bits) in (0..ROW_COUNT_U8).zip(rows) {
            self.fill_row(row, bits)?;
        }
        Ok(())
    }

    /// Writes a whole frame, top to bottom.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn draw_bit_matrix(&mut self, bit_matrix: &BitMatrix) -> Result<()> {
        self.draw_bitmap(bit_matrix.rows())
    }

    /// Draws a line between two `(row, col)` cells, both ends included.
    ///
    /// - Same row: the column span is OR-ed into one pattern and written once.
    /// - Same column: one [`set_pixel`](Self::set_pixel) per row of the span.
    /// - Otherwise: integer Bresenham with one write per plotted cell.
    ///
    /// Cells off the matrix are skipped silently; the rest of the line is still drawn.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn draw_line(&mut self, start: (u8, u8), end: (u8, u8)) -> Result<()> {
        let ((row0, col0), (row1, col1)) = (start, end);

        if row0 == row1 {
            if row0 >= ROW_COUNT_U8 {
                return Ok(());
            }
            let bits = (min(col0, col1)..=max(col0, col1))
                .take_while(|&col| col < COL_COUNT_U8)
                .fold(0u8, |bits, col| bits | column_bit(col));
            return self.fill_row(row0, bits);
        }

        if col0 == col1 {
            if col0 >= COL_COUNT_U8 {
                return Ok(());
            }
            for row in (min(row0, row1)..=max(row0, row1)).take_while(|&row| row < ROW_COUNT_U8) {
                self.set_pixel(row, col0)?;
            }
            return Ok(());
        }

        for (row, col) in Bresenham::new(start, end) {
            if row < ROW_COUNT_U8 && col < COL_COUNT_U8 {
                self.set_pixel(row, col)?;
            }
        }
        Ok(())
    }

    /// Change display brightness.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn set_intensity(&mut self, intensity: Intensity) -> Result<()> {
        self.sink.set_intensity(intensity)
    }
}

/// The cells of an integer Bresenham line from `start` to `end`, both included.
///
/// Steps in row and column may happen together, so 45° lines are exact diagonals.
#[derive(Debug, Clone)]
struct Bresenham {
    row: i32,
    col: i32,
    end_row: i32,
    end_col: i32,
    d_row: i32,
    d_col: i32,
    step_row: i32,
    step_col: i32,
    err: i32,
    done: bool,
}

impl Bresenham {
    fn new((row0, col0): (u8, u8), (row1, col1): (u8, u8)) -> Self {
        let (row, col) = (i32::from(row0), i32::from(col0));
        let (end_row, end_col) = (i32::from(row1), i32::from(col1));
        let d_row = (end_row - row).abs();
        let d_col = (end_col - col).abs();
        Self {
            row,
            col,
            end_row,
            end_col,
            d_row,
            d_col,
            step_row: if row < end_row { 1 } else { -1 },
            step_col: if col < end_col { 1 } else { -1 },
            err: d_row - d_col,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = (u8, u8);

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Coordinates come from u8 and move at most 255 steps in i32"
    )]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = (u8::try_from(self.row).ok()?, u8::try_from(self.col).ok()?);
        if self.row == self.end_row && self.col == self.end_col {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.d_col {
            self.err -= self.d_col;
            self.row += self.step_row;
        }
        if e2 < self.d_row {
            self.err += self.d_row;
            self.col += self.step_col;
        }
        Some(current)
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    fn line(start: (u8, u8), end: (u8, u8)) -> heapless::Vec<(u8, u8), 512> {
        Bresenham::new(start, end).collect()
    }

    #[test]
    fn diagonal_visits_each_cell_once() {
        let cells = line((0, 0), (7, 7));
        let expected: heapless::Vec<(u8, u8), 512> = (0..8).map(|index| (index, index)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn shallow_line_steps_columns_faster() {
        let cells = line((0, 0), (2, 6));
        assert_eq!(cells.len(), 7);
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(2, 6)));
        // every column is visited exactly once
        for (index, &(_, col)) in cells.iter().enumerate() {
            assert_eq!(usize::from(col), index);
        }
    }

    #[test]
    fn steep_line_steps_rows_faster() {
        let cells = line((7, 1), (0, 3));
        assert_eq!(cells.len(), 8);
        assert_eq!(cells.first(), Some(&(7, 1)));
        assert_eq!(cells.last(), Some(&(0, 3)));
        for pair in cells.windows(2) {
            let [(row_a, _), (row_b, _)] = [pair[0], pair[1]];
            assert_eq!(row_a, row_b + 1);
        }
    }

    #[test]
    fn single_cell_line() {
        assert_eq!(line((3, 3), (3, 3)).as_slice(), &[(3, 3)]);
    }
}
