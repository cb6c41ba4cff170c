//! An in-memory stand-in for the MAX7219.
//!
//! Mirrors what the controller would show, counts writes, and keeps the most recent writes in
//! order so callers can check exactly what a draw sent over the wire.

use heapless::Deque;

use crate::{BitMatrix, Error, ROW_COUNT_U8, Result, max7219::Intensity, row_sink::RowSink};

/// Number of recent row writes kept by [`VirtualMatrix`].
pub const WRITE_LOG_LEN: usize = 128;

/// One row write as it would appear on the wire.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWrite {
    pub row: u8,
    pub bits: u8,
}

#[derive(Debug, Default)]
pub struct VirtualMatrix {
    bit_matrix: BitMatrix,
    intensity: Option<Intensity>,
    write_count: usize,
    writes: Deque<RowWrite, WRITE_LOG_LEN>,
}

impl VirtualMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What the display shows now.
    #[must_use]
    pub const fn bit_matrix(&self) -> &BitMatrix {
        &self.bit_matrix
    }

    /// Last brightness set, if any.
    #[must_use]
    pub const fn intensity(&self) -> Option<Intensity> {
        self.intensity
    }

    /// Row writes since creation or the last [`clear_log`](Self::clear_log).
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.write_count
    }

    /// The most recent writes, oldest first (at most [`WRITE_LOG_LEN`]).
    pub fn writes(&self) -> impl Iterator<Item = &RowWrite> {
        self.writes.iter()
    }

    /// The most recent writes that targeted `row`, oldest first.
    pub fn writes_to(&self, row: u8) -> impl Iterator<Item = &RowWrite> {
        self.writes.iter().filter(move |write| write.row == row)
    }

    /// Forgets logged writes and resets the write count. The display contents stay.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.write_count = 0;
    }
}

impl RowSink for VirtualMatrix {
    fn write_row(&mut self, row: u8, bits: u8) -> Result<()> {
        if row >= ROW_COUNT_U8 {
            return Err(Error::RowOutOfBounds { row });
        }
        self.bit_matrix[usize::from(row)] = bits;
        self.write_count = self.write_count.saturating_add(1);
        let write = RowWrite { row, bits };
        if self.writes.is_full() {
            self.writes.pop_front();
        }
        // Room was just made, so this cannot fail.
        let _ = self.writes.push_back(write);
        Ok(())
    }

    fn set_intensity(&mut self, intensity: Intensity) -> Result<()> {
        self.intensity = Some(intensity);
        Ok(())
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn writes_replace_rows() {
        let mut virtual_matrix = VirtualMatrix::new();
        virtual_matrix.write_row(3, 0b_0000_1111).unwrap();
        virtual_matrix.write_row(3, 0b_1000_0000).unwrap();
        assert_eq!(virtual_matrix.bit_matrix()[3], 0b_1000_0000);
        assert_eq!(virtual_matrix.write_count(), 2);
        assert_eq!(virtual_matrix.writes_to(3).count(), 2);
        assert_eq!(virtual_matrix.writes_to(2).count(), 0);
    }

    #[test]
    fn off_matrix_rows_are_rejected() {
        let mut virtual_matrix = VirtualMatrix::new();
        assert!(matches!(
            virtual_matrix.write_row(8, 0xFF),
            Err(Error::RowOutOfBounds { row: 8 })
        ));
        assert_eq!(virtual_matrix.write_count(), 0);
    }

    #[test]
    fn log_keeps_most_recent_writes() {
        let mut virtual_matrix = VirtualMatrix::new();
        for index in 0..(WRITE_LOG_LEN + 10) {
            let bits = u8::try_from(index % 256).unwrap();
            virtual_matrix.write_row(0, bits).unwrap();
        }
        assert_eq!(virtual_matrix.write_count(), WRITE_LOG_LEN + 10);
        assert_eq!(virtual_matrix.writes().count(), WRITE_LOG_LEN);
        assert_eq!(virtual_matrix.writes().next().map(|write| write.bits), Some(10));

        virtual_matrix.clear_log();
        assert_eq!(virtual_matrix.write_count(), 0);
        assert_eq!(virtual_matrix.writes().count(), 0);
        assert_eq!(virtual_matrix.bit_matrix()[0], 137);
    }

    #[test]
    fn intensity_is_recorded() {
        let mut virtual_matrix = VirtualMatrix::new();
        assert_eq!(virtual_matrix.intensity(), None);
        virtual_matrix.set_intensity(Intensity::MAX).unwrap();
        assert_eq!(virtual_matrix.intensity(), Some(Intensity::MAX));
    }
}
