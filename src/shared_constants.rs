use crate::grid::Point;

// The matrix is a single MAX7219 driving 8 rows of 8 columns
pub const ROW_COUNT_U8: u8 = 8;
pub const ROW_COUNT: usize = ROW_COUNT_U8 as usize;
pub const COL_COUNT_U8: u8 = 8;
pub const COL_COUNT: usize = COL_COUNT_U8 as usize;
pub const CELL_COUNT: usize = ROW_COUNT * COL_COUNT;

/// The snake can grow until it covers every cell.
pub const SNAKE_CAPACITY: usize = CELL_COUNT;

/// Starting snake, head first.
pub const START_SNAKE: [Point; 3] = [
    Point::new_unchecked(4, 4),
    Point::new_unchecked(4, 3),
    Point::new_unchecked(4, 2),
];

pub const DEFAULT_TICK_MS: u32 = 250;
pub const MIN_TICK_MS: u32 = 10;
pub const MAX_TICK_MS: u32 = 10_000;

/// Serial link used by the direction controller.
pub const SERIAL_BAUD_RATE: u32 = 9600;

/// SPI clock for the MAX7219 (datasheet maximum is 10 MHz).
pub const SPI_FREQUENCY_HZ: u32 = 8_000_000;
