//! Direction requests from input sources to the game.
//!
//! Producers (the serial task, a button task, an interrupt handler) call
//! [`Signal::signal`](embassy_sync::signal::Signal::signal); the game task takes the latest
//! request before its next move. A newer request replaces an unconsumed older one, so the game
//! only ever sees whole [`Direction`] values.

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

use crate::grid::Direction;

pub type DirectionNotifier = Signal<CriticalSectionRawMutex, Direction>;

/// A notifier suitable for a `static`.
#[must_use]
pub const fn direction_notifier() -> DirectionNotifier {
    Signal::new()
}

/// Signals every recognized command byte in `bytes`; returns how many were recognized.
pub fn signal_commands(notifier: &DirectionNotifier, bytes: &[u8]) -> usize {
    let mut recognized = 0usize;
    for &byte in bytes {
        if let Some(direction) = Direction::from_command(byte) {
            notifier.signal(direction);
            recognized = recognized.saturating_add(1);
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("ignoring serial byte {=u8:#x}", byte);
        }
    }
    recognized
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn latest_request_wins() {
        let notifier = direction_notifier();
        notifier.signal(Direction::Up);
        notifier.signal(Direction::Left);
        assert_eq!(notifier.try_take(), Some(Direction::Left));
        assert_eq!(notifier.try_take(), None);
    }

    #[test]
    fn command_bytes_are_decoded() {
        let notifier = direction_notifier();
        assert_eq!(signal_commands(&notifier, b"x\r\nD"), 1);
        assert_eq!(notifier.try_take(), Some(Direction::Down));

        assert_eq!(signal_commands(&notifier, b"URL?"), 3);
        assert_eq!(notifier.try_take(), Some(Direction::Left));

        assert_eq!(signal_commands(&notifier, b"\0\0"), 0);
        assert!(!notifier.signaled());
    }
}
