//! The snake game as an embassy task driving a MAX7219 on SPI0.
//!
//! The task moves the snake once per tick and applies direction requests from a
//! [`DirectionNotifier`] as they arrive.

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::{
    Peri,
    clocks::RoscRng,
    gpio::{Level, Output, Pin},
    peripherals::SPI0,
    spi::{self, ClkPin, Config as SpiConfig, MosiPin, Phase, Polarity, Spi},
};
use embassy_time::{Duration, Ticker};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};

use crate::{
    Direction, GameConfig, Max7219, Never, Raster, Result, SPI_FREQUENCY_HZ, SnakeGame,
    input::{self, DirectionNotifier},
};

type MatrixSpi = ExclusiveDevice<Spi<'static, SPI0, spi::Blocking>, Output<'static>, NoDelay>;
type MatrixGame = SnakeGame<Max7219<MatrixSpi>, RoscRng>;

/// Handle to the running snake task.
pub struct SnakeDevice<'a>(&'a DirectionNotifier);

impl SnakeDevice<'_> {
    /// Creates the notifier the device and its input sources share.
    #[must_use]
    pub const fn notifier() -> DirectionNotifier {
        input::direction_notifier()
    }

    /// Brings up the MAX7219 on SPI0 and spawns the game task.
    ///
    /// # Errors
    /// Returns an error if the controller cannot be initialized or the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        spi: Peri<'static, SPI0>,
        clk: Peri<'static, impl ClkPin<SPI0>>,
        mosi: Peri<'static, impl MosiPin<SPI0>>,
        cs: Peri<'static, impl Pin>,
        config: GameConfig,
        notifier: &'static DirectionNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        let mut spi_config = SpiConfig::default();
        spi_config.frequency = SPI_FREQUENCY_HZ;
        spi_config.polarity = Polarity::IdleLow;
        spi_config.phase = Phase::CaptureOnFirstTransition;

        let spi = Spi::new_blocking_txonly(spi, clk, mosi, spi_config);
        let cs = Output::new(cs, Level::High);
        let spi_device = ExclusiveDevice::new_no_delay(spi, cs)?;

        let mut max7219 = Max7219::new(spi_device);
        max7219.init(config.intensity)?;

        let snake_game = SnakeGame::new(Raster::new(max7219), RoscRng, config)?;
        let token = snake_task(snake_game, notifier)?;
        spawner.spawn(token);
        Ok(Self(notifier))
    }

    /// Requests a turn before the next move. Reversals are ignored by the game.
    pub fn change_direction(&self, direction: Direction) {
        self.0.signal(direction);
    }
}

#[embassy_executor::task]
async fn snake_task(snake_game: MatrixGame, notifier: &'static DirectionNotifier) -> ! {
    // should never return
    let err = inner_snake_loop(snake_game, notifier).await;
    panic!("{:?}", err);
}

async fn inner_snake_loop(
    mut snake_game: MatrixGame,
    notifier: &'static DirectionNotifier,
) -> Result<Never> {
    let tick_ms = snake_game.config().tick_ms;
    info!("snake task started, tick {} ms", tick_ms);
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(tick_ms)));
    snake_game.render()?;

    loop {
        match select(ticker.next(), notifier.wait()).await {
            Either::First(()) => {
                let tick = snake_game.update()?;
                debug!("{} head {}", tick, snake_game.state().head());
                snake_game.render()?;
            }
            Either::Second(direction) => {
                snake_game.change_direction(direction);
            }
        }
    }
}
