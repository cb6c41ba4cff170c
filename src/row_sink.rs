//! The transport seam between rendering and the display controller.

use crate::{Result, max7219::Intensity};

/// Something that accepts whole-row bit patterns for the 8x8 matrix.
///
/// Each call replaces the row: bit `c` of `bits` lights column `c` of `row`. Rows are
/// independent; implementations keep no cross-row state. Writes are synchronous and the caller
/// owns the sink exclusively while writing.
pub trait RowSink {
    /// Write the pattern for one row (0..8).
    ///
    /// # Errors
    /// Returns an error if the row is off the matrix or the underlying bus fails.
    fn write_row(&mut self, row: u8, bits: u8) -> Result<()>;

    /// Change display brightness. Sinks without a brightness control ignore it.
    ///
    /// # Errors
    /// Returns an error if the underlying bus fails.
    fn set_intensity(&mut self, intensity: Intensity) -> Result<()> {
        let _ = intensity;
        Ok(())
    }
}

impl<T: RowSink + ?Sized> RowSink for &mut T {
    fn write_row(&mut self, row: u8, bits: u8) -> Result<()> {
        (**self).write_row(row, bits)
    }

    fn set_intensity(&mut self, intensity: Intensity) -> Result<()> {
        (**self).set_intensity(intensity)
    }
}
