//! Cells of the 8x8 matrix and the four directions the snake can move in.
//!
//! Coordinates are always `(row, col)`: row 0 is the top row (controller digit register 1) and
//! column `c` is bit `c` of a row pattern.

use crate::{COL_COUNT_U8, Error, ROW_COUNT_U8, Result};

/// One lit cell of the matrix.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    /// Creates a point, checking that it lies on the matrix.
    ///
    /// # Errors
    /// Returns [`Error::PixelOutOfBounds`] if `row` or `col` is 8 or more.
    pub const fn new(row: u8, col: u8) -> Result<Self> {
        if row < ROW_COUNT_U8 && col < COL_COUNT_U8 {
            Ok(Self { row, col })
        } else {
            Err(Error::PixelOutOfBounds { row, col })
        }
    }

    /// Creates a point without checking it. For constants known to be on the matrix.
    #[must_use]
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The neighboring cell in `direction`. Leaving one edge re-enters at the opposite edge,
    /// independently per axis.
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Self {
        let Self { row, col } = self;
        match direction {
            Direction::Up => Self::new_unchecked(wrapping_prev(row, ROW_COUNT_U8), col),
            Direction::Down => Self::new_unchecked(wrapping_next(row, ROW_COUNT_U8), col),
            Direction::Left => Self::new_unchecked(row, wrapping_prev(col, COL_COUNT_U8)),
            Direction::Right => Self::new_unchecked(row, wrapping_next(col, COL_COUNT_U8)),
        }
    }

    /// The row pattern with only this point's column lit.
    #[must_use]
    pub const fn column_bit(self) -> u8 {
        column_bit(self.col)
    }
}

/// The row pattern with only `col` lit. Columns 8 and above light nothing.
#[must_use]
pub const fn column_bit(col: u8) -> u8 {
    match 1u8.checked_shl(col as u32) {
        Some(bit) => bit,
        None => 0,
    }
}

const fn wrapping_prev(value: u8, len: u8) -> u8 {
    if value == 0 { len.saturating_sub(1) } else { value.saturating_sub(1) }
}

const fn wrapping_next(value: u8, len: u8) -> u8 {
    let next = value.saturating_add(1);
    if next >= len { 0 } else { next }
}

/// Direction of travel. Declared in clockwise order: Up, Right, Down, Left.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The direction that reverses this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Decodes a command byte from the serial controller: `U`, `D`, `L` or `R`.
    #[must_use]
    pub const fn from_command(byte: u8) -> Option<Self> {
        match byte {
            b'U' => Some(Self::Up),
            b'D' => Some(Self::Down),
            b'L' => Some(Self::Left),
            b'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// The command byte the serial controller sends for this direction.
    #[must_use]
    pub const fn command(self) -> u8 {
        match self {
            Self::Up => b'U',
            Self::Right => b'R',
            Self::Down => b'D',
            Self::Left => b'L',
        }
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn up_from_top_row_wraps_to_bottom() {
        let point = Point::new_unchecked(0, 3).stepped(Direction::Up);
        assert_eq!(point, Point::new_unchecked(7, 3));
    }

    #[test]
    fn down_from_bottom_row_wraps_to_top() {
        let point = Point::new_unchecked(7, 3).stepped(Direction::Down);
        assert_eq!(point, Point::new_unchecked(0, 3));
    }

    #[test]
    fn left_from_first_column_wraps_to_last() {
        let point = Point::new_unchecked(5, 0).stepped(Direction::Left);
        assert_eq!(point, Point::new_unchecked(5, 7));
    }

    #[test]
    fn right_from_last_column_wraps_to_first() {
        let point = Point::new_unchecked(5, 7).stepped(Direction::Right);
        assert_eq!(point, Point::new_unchecked(5, 0));
    }

    #[test]
    fn interior_steps_move_one_cell() {
        let center = Point::new_unchecked(4, 4);
        assert_eq!(center.stepped(Direction::Up), Point::new_unchecked(3, 4));
        assert_eq!(center.stepped(Direction::Down), Point::new_unchecked(5, 4));
        assert_eq!(center.stepped(Direction::Left), Point::new_unchecked(4, 3));
        assert_eq!(center.stepped(Direction::Right), Point::new_unchecked(4, 5));
    }

    #[test]
    fn new_rejects_cells_off_the_matrix() {
        assert!(Point::new(7, 7).is_ok());
        assert!(matches!(
            Point::new(8, 0),
            Err(Error::PixelOutOfBounds { row: 8, col: 0 })
        ));
        assert!(matches!(
            Point::new(0, 8),
            Err(Error::PixelOutOfBounds { row: 0, col: 8 })
        ));
    }

    #[test]
    fn opposites_pair_up() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn command_bytes_decode() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_command(direction.command()), Some(direction));
        }
        assert_eq!(Direction::from_command(b'x'), None);
        assert_eq!(Direction::from_command(b'u'), None);
        assert_eq!(Direction::from_command(b'\n'), None);
    }

    #[test]
    fn column_bits() {
        assert_eq!(column_bit(0), 0b_0000_0001);
        assert_eq!(column_bit(7), 0b_1000_0000);
        assert_eq!(column_bit(8), 0);
        assert_eq!(Point::new_unchecked(2, 5).column_bit(), 0b_0010_0000);
    }
}
