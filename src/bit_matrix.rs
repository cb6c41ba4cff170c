//! A whole 8x8 frame as eight row patterns.

use core::{array, convert::Infallible, ops::BitOrAssign, slice};

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};

use crate::{COL_COUNT, ROW_COUNT, grid::Point};

/// Eight row patterns; bit `c` of row `r` lights the cell at `(r, c)`.
///
/// `BitMatrix` is also an [`embedded_graphics`] draw target, so shapes and text can be composed
/// into a frame and pushed to the display with [`Raster::draw_bit_matrix`](crate::Raster::draw_bit_matrix).
/// `x` maps to the column and `y` to the row.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitMatrix([u8; ROW_COUNT]);

impl BitMatrix {
    #[must_use]
    pub const fn new(rows: [u8; ROW_COUNT]) -> Self {
        Self(rows)
    }

    /// A frame with every row set to `bits`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self([bits; ROW_COUNT])
    }

    /// A frame with exactly the given points lit.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut bit_matrix = Self::default();
        for &point in points {
            bit_matrix.set(point);
        }
        bit_matrix
    }

    #[must_use]
    pub const fn rows(&self) -> &[u8; ROW_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, u8> {
        self.0.iter_mut()
    }

    /// Lights `point`. Points off the matrix are ignored.
    pub fn set(&mut self, point: Point) {
        if let Some(bits) = self.0.get_mut(usize::from(point.row)) {
            *bits |= point.column_bit();
        }
    }

    /// Turns `point` off. Points off the matrix are ignored.
    pub fn unset(&mut self, point: Point) {
        if let Some(bits) = self.0.get_mut(usize::from(point.row)) {
            *bits &= !point.column_bit();
        }
    }

    #[must_use]
    pub fn is_lit(&self, point: Point) -> bool {
        self.0
            .get(usize::from(point.row))
            .is_some_and(|bits| bits & point.column_bit() != 0)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.iter().map(|bits| bits.count_ones()).sum()
    }

    /// The lit cells in row-major order.
    pub fn lit_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().zip(0u8..).flat_map(|(&bits, row)| {
            (0u8..)
                .take(COL_COUNT)
                .filter(move |&col| bits & (1 << col) != 0)
                .map(move |col| Point::new_unchecked(row, col))
        })
    }
}

impl BitOrAssign for BitMatrix {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(bits, rhs_bits)| *bits |= rhs_bits);
    }
}

impl From<[u8; ROW_COUNT]> for BitMatrix {
    fn from(rows: [u8; ROW_COUNT]) -> Self {
        Self(rows)
    }
}

impl IntoIterator for BitMatrix {
    type Item = u8;
    type IntoIter = array::IntoIter<u8, ROW_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BitMatrix {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::ops::Index<usize> for BitMatrix {
    type Output = u8;

    #[expect(
        clippy::indexing_slicing,
        reason = "Bounds checking is the caller's responsibility."
    )]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[expect(
    clippy::indexing_slicing,
    reason = "Bounds checking is the caller's responsibility."
)]
impl core::ops::IndexMut<usize> for BitMatrix {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl OriginDimensions for BitMatrix {
    #[expect(clippy::cast_possible_truncation, reason = "The matrix is 8x8")]
    fn size(&self) -> Size {
        Size::new(COL_COUNT as u32, ROW_COUNT as u32)
    }
}

impl DrawTarget for BitMatrix {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(col), Ok(row)) = (u8::try_from(coord.x), u8::try_from(coord.y)) else {
                continue;
            };
            let point = Point::new_unchecked(row, col);
            match color {
                BinaryColor::On => self.set(point),
                BinaryColor::Off => self.unset(point),
            }
        }
        Ok(())
    }
}
