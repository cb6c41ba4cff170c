use core::convert::Infallible;

use derive_more::derive::{Display, Error};
use embedded_hal::spi::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    #[cfg(any(feature = "pico1", feature = "pico2"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[display("Pixel ({row}, {col}) is outside the 8x8 matrix")]
    PixelOutOfBounds { row: u8, col: u8 },

    #[display("Row {row} is outside the 8x8 matrix")]
    RowOutOfBounds { row: u8 },

    #[display("Intensity level {level} is above 15")]
    IntensityOutOfRange { level: u8 },

    #[display("SPI transfer to the display controller failed: {_0:?}")]
    Spi(#[error(not(source))] ErrorKind),

    #[display("Error setting chip-select state")]
    ChipSelect,

    #[display("Snake body is at capacity")]
    SnakeFull,

    #[display("Snake segments must be 1 to 64 distinct cells")]
    InvalidSnake,

    #[display("Invalid configuration value for {name}")]
    InvalidConfig { name: &'static str },
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::ChipSelect
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
