//! MAX7219 LED display controller wired as an 8x8 matrix.
//!
//! The controller is written with 16-bit frames: register address first, then the value. Its
//! eight "digit" registers (addresses 1 to 8) hold the eight row patterns.

use embedded_hal::spi::{Error as _, SpiDevice};

use crate::{Error, ROW_COUNT_U8, Result, row_sink::RowSink};

/// Register addresses from the MAX7219 datasheet.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    NoOp = 0x00,
    /// Row 0; rows 1 through 7 follow at consecutive addresses.
    Row0 = 0x01,
    DecodeMode = 0x09,
    Intensity = 0x0A,
    ScanLimit = 0x0B,
    Shutdown = 0x0C,
    DisplayTest = 0x0F,
}

/// Code-B decoding per digit. A matrix wants [`DecodeMode::NoDecode`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DecodeMode {
    #[default]
    NoDecode = 0x00,
    Digit0 = 0x01,
    Digits0To3 = 0x0F,
    AllDigits = 0xFF,
}

/// Display brightness, 16 steps of PWM duty cycle from 1/32 (level 0) to 31/32 (level 15).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Self = Self(0x00);
    /// About 34 % duty cycle; the brightness the game runs at.
    pub const GAME: Self = Self(0x05);
    pub const MAX: Self = Self(0x0F);

    /// # Errors
    /// [`Error::IntensityOutOfRange`] for levels above 15.
    pub const fn new(level: u8) -> Result<Self> {
        if level <= Self::MAX.0 {
            Ok(Self(level))
        } else {
            Err(Error::IntensityOutOfRange { level })
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Approximate duty cycle in percent, rounded down.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "Level is at most 15, so the result is at most 96"
    )]
    pub const fn duty_percent(self) -> u8 {
        // (2 * level + 1) / 32, in percent
        ((200 * self.0 as u16 + 100) / 32) as u8
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::GAME
    }
}

/// A MAX7219 behind an SPI device. Chip-select is handled by the [`SpiDevice`].
#[derive(Debug)]
pub struct Max7219<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Max7219<SPI> {
    /// Wraps the SPI device. Call [`init`](Self::init) before drawing.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Puts the controller into 8x8 matrix mode: leave shutdown, no decoding, the given
    /// brightness, all eight rows scanned, display test off, every row cleared.
    ///
    /// # Errors
    /// Returns [`Error::Spi`] if a transfer fails.
    pub fn init(&mut self, intensity: Intensity) -> Result<()> {
        self.set_shutdown(false)?;
        self.set_decode_mode(DecodeMode::NoDecode)?;
        self.set_intensity(intensity)?;
        self.set_scan_limit(ROW_COUNT_U8.saturating_sub(1))?;
        self.set_display_test(false)?;
        for row in 0..ROW_COUNT_U8 {
            RowSink::write_row(self, row, 0x00)?;
        }
        #[cfg(feature = "defmt")]
        defmt::info!("MAX7219 initialized, intensity {}", intensity.level());
        Ok(())
    }

    /// # Errors
    /// Returns [`Error::Spi`] if the transfer fails.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        self.spi
            .write(&[register, value])
            .map_err(|err| Error::Spi(err.kind()))
    }

    /// # Errors
    /// Returns [`Error::Spi`] if the transfer fails.
    pub fn set_decode_mode(&mut self, decode_mode: DecodeMode) -> Result<()> {
        self.write_register(Register::DecodeMode as u8, decode_mode as u8)
    }

    /// # Errors
    /// Returns [`Error::Spi`] if the transfer fails.
    pub fn set_intensity(&mut self, intensity: Intensity) -> Result<()> {
        self.write_register(Register::Intensity as u8, intensity.level())
    }

    /// Scan rows `0..=last_row`. Values above 7 are clamped.
    ///
    /// # Errors
    /// Returns [`Error::Spi`] if the transfer fails.
    pub fn set_scan_limit(&mut self, last_row: u8) -> Result<()> {
        self.write_register(Register::ScanLimit as u8, last_row.min(ROW_COUNT_U8 - 1))
    }

    /// `true` blanks the display (register contents are kept).
    ///
    /// # Errors
    /// Returns [`Error::Spi`] if the transfer fails.
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<()> {
        self.write_register(Register::Shutdown as u8, u8::from(!shutdown))
    }

    /// `true` lights every LED at full brightness regardless of the row registers.
    ///
    /// # Errors
    /// Returns [`Error::Spi`] if the transfer fails.
    pub fn set_display_test(&mut self, on: bool) -> Result<()> {
        self.write_register(Register::DisplayTest as u8, u8::from(on))
    }

    /// Gives back the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> RowSink for Max7219<SPI> {
    fn write_row(&mut self, row: u8, bits: u8) -> Result<()> {
        if row >= ROW_COUNT_U8 {
            return Err(Error::RowOutOfBounds { row });
        }
        self.write_register((Register::Row0 as u8).saturating_add(row), bits)
    }

    fn set_intensity(&mut self, intensity: Intensity) -> Result<()> {
        Self::set_intensity(self, intensity)
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn intensity_range_is_checked() {
        assert_eq!(Intensity::new(0).map(Intensity::level).ok(), Some(0));
        assert_eq!(Intensity::new(15).map(Intensity::level).ok(), Some(15));
        assert!(matches!(
            Intensity::new(16),
            Err(Error::IntensityOutOfRange { level: 16 })
        ));
    }

    #[test]
    fn duty_cycle_matches_datasheet() {
        assert_eq!(Intensity::MIN.duty_percent(), 3);
        assert_eq!(Intensity::GAME.duty_percent(), 34);
        assert_eq!(Intensity::MAX.duty_percent(), 96);
    }
}
