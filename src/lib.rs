//! Snake on an 8x8 LED matrix driven by a MAX7219 display controller.
//!
//! The crate is layered:
//! - [`Raster`] turns pixels, rows, bitmaps and lines into per-row bit patterns and hands them to
//!   a [`RowSink`].
//! - [`SnakeGame`] owns the game state, advances it once per tick and renders it through a
//!   [`Raster`].
//! - [`Max7219`] is the hardware [`RowSink`]; [`VirtualMatrix`] is an in-memory one.
//!
//! With the `pico1`/`pico2` features the crate also provides an embassy device task
//! ([`snake_device`]) and a serial direction input ([`serial_input`]).
#![cfg_attr(not(test), no_std)]

pub mod bit_matrix;
pub mod config;
mod error;
pub mod grid;
pub mod input;
pub mod max7219;
mod never;
pub mod raster;
pub mod row_sink;
mod shared_constants;
pub mod snake_game;
pub mod virtual_matrix;

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod serial_input;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod snake_device;

// Re-export commonly used items
pub use bit_matrix::BitMatrix;
pub use config::{GameConfig, RenderMode};
pub use error::{Error, Result};
pub use grid::{Direction, Point};
pub use input::DirectionNotifier;
pub use max7219::{Intensity, Max7219};
pub use never::Never;
pub use raster::Raster;
pub use row_sink::RowSink;
pub use shared_constants::*;
pub use snake_game::{GameState, SnakeGame, Tick};
pub use virtual_matrix::{RowWrite, VirtualMatrix};
