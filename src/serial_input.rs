//! Direction commands over UART0: `U`, `D`, `L` and `R` at 9600 baud, 8N1.
//!
//! Every other byte, including line endings, is ignored.

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::{
    Peri,
    dma::Channel,
    interrupt::typelevel::{Binding, UART0_IRQ},
    peripherals::UART0,
    uart::{self, Config as UartConfig, InterruptHandler, RxPin, UartRx},
};

use crate::{
    Result, SERIAL_BAUD_RATE,
    input::{DirectionNotifier, signal_commands},
};

/// Handle to the running serial reader.
pub struct SerialInput<'a>(&'a DirectionNotifier);

impl SerialInput<'_> {
    /// Starts reading UART0 and forwarding commands to `notifier`.
    ///
    /// # Errors
    /// Returns an error if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        uart: Peri<'static, UART0>,
        rx: Peri<'static, impl RxPin<UART0>>,
        irqs: impl Binding<UART0_IRQ, InterruptHandler<UART0>>,
        rx_dma: Peri<'static, impl Channel>,
        notifier: &'static DirectionNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        let mut uart_config = UartConfig::default();
        uart_config.baudrate = SERIAL_BAUD_RATE;
        let uart_rx = UartRx::new(uart, rx, irqs, rx_dma, uart_config);
        let token = serial_input_task(uart_rx, notifier)?;
        spawner.spawn(token);
        Ok(Self(notifier))
    }

    #[must_use]
    pub const fn notifier(&self) -> &DirectionNotifier {
        self.0
    }
}

#[embassy_executor::task]
async fn serial_input_task(
    mut uart_rx: UartRx<'static, uart::Async>,
    notifier: &'static DirectionNotifier,
) -> ! {
    info!("serial input on UART0 at {} baud", SERIAL_BAUD_RATE);
    let mut byte = [0u8; 1];
    loop {
        match uart_rx.read(&mut byte).await {
            Ok(()) => {
                signal_commands(notifier, &byte);
            }
            // Framing, parity, break and overrun errors drop the byte.
            Err(err) => warn!("serial read error: {}", err),
        }
    }
}
