//! Snake on an 8x8 MAX7219 matrix, steered over UART0.
//!
//! Wiring: MAX7219 DIN on GP19, CLK on GP18, CS on GP17. Serial RX on GP1 at 9600 baud;
//! send `U`, `D`, `L` or `R` to turn.
//!
//! Run with: cargo xtask uf2 snake --board pico1

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::{bind_interrupts, peripherals::UART0, uart};
use matrix_snake::{
    DirectionNotifier, GameConfig, Never, Result, serial_input::SerialInput,
    snake_device::SnakeDevice,
};
use panic_probe as _;

bind_interrupts!(struct Irqs {
    UART0_IRQ => uart::InterruptHandler<UART0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await;
    panic!("{:?}", err);
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let p = embassy_rp::init(Default::default());

    let config = GameConfig::from_build_env()?;
    info!("snake: {}", config);

    static DIRECTION_NOTIFIER: DirectionNotifier = SnakeDevice::notifier();

    let _snake_device = SnakeDevice::new(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        p.PIN_17,
        config,
        &DIRECTION_NOTIFIER,
        spawner,
    )?;
    let _serial_input = SerialInput::new(
        p.UART0,
        p.PIN_1,
        Irqs,
        p.DMA_CH0,
        &DIRECTION_NOTIFIER,
        spawner,
    )?;

    info!("snake running");
    core::future::pending().await
}
