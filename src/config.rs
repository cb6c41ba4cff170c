//! Game settings.
//!
//! `build.rs` exports `SNAKE_TICK_MS`, `SNAKE_INTENSITY` and `SNAKE_RENDER` (from the
//! environment or a `.env` file, with defaults) as compile-time strings;
//! [`GameConfig::from_build_env`] parses them.

use crate::{DEFAULT_TICK_MS, Error, MAX_TICK_MS, MIN_TICK_MS, Result, max7219::Intensity};

/// How [`SnakeGame`](crate::SnakeGame) frames are pushed to the display.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear, then food and snake row by row, batching runs of segments that share a row.
    #[default]
    RowBatched,
    /// The composed frame as eight row writes, without a clear in between.
    Framed,
}

impl RenderMode {
    /// Parses `rows` or `frame`.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for anything else.
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim() {
            "rows" => Ok(Self::RowBatched),
            "frame" => Ok(Self::Framed),
            _ => Err(Error::InvalidConfig {
                name: "SNAKE_RENDER",
            }),
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Milliseconds between snake moves.
    pub tick_ms: u32,
    /// Brightness set by every [`SnakeGame::begin`](crate::SnakeGame::begin).
    pub intensity: Intensity,
    pub render_mode: RenderMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            intensity: Intensity::GAME,
            render_mode: RenderMode::RowBatched,
        }
    }
}

impl GameConfig {
    /// The configuration baked in by `build.rs`.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] if a value does not parse or is out of range.
    pub fn from_build_env() -> Result<Self> {
        Self::parse(
            env!("SNAKE_TICK_MS"),
            env!("SNAKE_INTENSITY"),
            env!("SNAKE_RENDER"),
        )
    }

    /// Parses the three settings. Tick must be within 10..=10000 ms and intensity within 0..=15.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] naming the first bad setting.
    pub fn parse(tick_ms: &str, intensity: &str, render_mode: &str) -> Result<Self> {
        let tick_ms = tick_ms
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|tick_ms| (MIN_TICK_MS..=MAX_TICK_MS).contains(tick_ms))
            .ok_or(Error::InvalidConfig {
                name: "SNAKE_TICK_MS",
            })?;
        let intensity = intensity
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|level| Intensity::new(level).ok())
            .ok_or(Error::InvalidConfig {
                name: "SNAKE_INTENSITY",
            })?;
        let render_mode = RenderMode::parse(render_mode)?;
        Ok(Self {
            tick_ms,
            intensity,
            render_mode,
        })
    }
}
