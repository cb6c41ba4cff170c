//! The snake game: state, one-tick updates, and rendering through a [`Raster`].

use heapless::Vec;
use rand_core::RngCore;

use crate::{
    BitMatrix, COL_COUNT_U8, Error, ROW_COUNT_U8, Result, SNAKE_CAPACITY, START_SNAKE,
    config::{GameConfig, RenderMode},
    grid::{Direction, Point},
    raster::Raster,
    row_sink::RowSink,
};

/// Snake body, head first.
pub type Segments = Vec<Point, SNAKE_CAPACITY>;

/// What one [`SnakeGame::update`] did.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto the food, grew by one, and new food was placed.
    Ate,
    /// The head would have hit the body; the game was restarted instead.
    GameOver,
    /// The snake grew to cover every cell; the game was restarted.
    BoardFilled,
}

/// Snake, food and direction.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    snake: Segments,
    food: Point,
    direction: Direction,
}

impl GameState {
    /// Builds a state from explicit parts, head first.
    ///
    /// # Errors
    /// [`Error::InvalidSnake`] unless there are 1 to 64 segments, all distinct and on the
    /// matrix; [`Error::PixelOutOfBounds`] if the food is off the matrix.
    pub fn new(segments: &[Point], direction: Direction, food: Point) -> Result<Self> {
        let snake = Segments::from_slice(segments).map_err(|()| Error::InvalidSnake)?;
        let on_matrix = |point: &Point| point.row < ROW_COUNT_U8 && point.col < COL_COUNT_U8;
        let distinct = snake
            .iter()
            .enumerate()
            .all(|(index, point)| !snake.iter().skip(index.saturating_add(1)).any(|other| other == point));
        if snake.is_empty() || !snake.iter().all(on_matrix) || !distinct {
            return Err(Error::InvalidSnake);
        }
        let food = Point::new(food.row, food.col)?;
        Ok(Self {
            snake,
            food,
            direction,
        })
    }

    fn initial() -> Self {
        let mut snake = Segments::new();
        // Three segments always fit.
        let _ = snake.extend_from_slice(&START_SNAKE);
        Self {
            snake,
            food: Point::default(),
            direction: Direction::Right,
        }
    }

    /// Segments, head first.
    #[must_use]
    pub fn snake(&self) -> &[Point] {
        &self.snake
    }

    #[must_use]
    pub fn head(&self) -> Point {
        // The snake is never empty.
        self.snake.first().copied().unwrap_or_default()
    }

    #[must_use]
    pub const fn food(&self) -> Point {
        self.food
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }
}

/// Snake on the 8x8 matrix.
///
/// The host calls [`update`](Self::update) and then [`draw`](Self::draw) once per tick, and
/// [`change_direction`](Self::change_direction) whenever input arrives. Game over is not a
/// separate state: the colliding move is dropped and the game restarts on the spot.
#[derive(Debug)]
pub struct SnakeGame<S, R> {
    raster: Raster<S>,
    rng: R,
    config: GameConfig,
    state: GameState,
}

impl<S: RowSink, R: RngCore> SnakeGame<S, R> {
    /// Creates a game and runs [`begin`](Self::begin).
    ///
    /// # Errors
    /// Returns a transport error from clearing the display.
    pub fn new(raster: Raster<S>, rng: R, config: GameConfig) -> Result<Self> {
        let mut snake_game = Self::with_state(raster, rng, config, GameState::initial());
        snake_game.begin()?;
        Ok(snake_game)
    }

    /// Creates a game from an existing state without touching the display.
    pub const fn with_state(raster: Raster<S>, rng: R, config: GameConfig, state: GameState) -> Self {
        Self {
            raster,
            rng,
            config,
            state,
        }
    }

    /// Restarts: three-segment snake at the middle heading right, fresh food, cleared display at
    /// the configured brightness.
    ///
    /// # Errors
    /// Returns a transport error. The game state is reset even then.
    pub fn begin(&mut self) -> Result<()> {
        self.state = GameState::initial();
        self.spawn_food();
        #[cfg(feature = "defmt")]
        defmt::info!("snake: new game, food at {}", self.state.food);
        self.raster.clear()?;
        self.raster.set_intensity(self.config.intensity)
    }

    /// Advances the game by one tick.
    ///
    /// # Errors
    /// Returns a transport error if a restart could not clear the display.
    pub fn update(&mut self) -> Result<Tick> {
        let head = self.state.head().stepped(self.state.direction);

        if self.check_collision(head) {
            #[cfg(feature = "defmt")]
            defmt::info!("snake: game over at {}, length {}", head, self.state.len());
            self.begin()?;
            return Ok(Tick::GameOver);
        }

        self.state
            .snake
            .insert(0, head)
            .map_err(|_| Error::SnakeFull)?;

        if head != self.state.food {
            self.state.snake.pop();
            return Ok(Tick::Moved);
        }

        if self.state.snake.is_full() {
            #[cfg(feature = "defmt")]
            defmt::info!("snake: board filled");
            self.begin()?;
            return Ok(Tick::BoardFilled);
        }
        self.spawn_food();
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "snake: ate, length {}, food at {}",
            self.state.len(),
            self.state.food
        );
        Ok(Tick::Ate)
    }

    /// Renders the current state: clear, food, then the snake row by row.
    ///
    /// Consecutive segments on the same row share one row write, which also carries the food
    /// bit when the food is on that row. A lone segment is a single pixel write, unless the food
    /// shares its row, in which case both go out in one row write. The food is therefore never
    /// erased by a later write to its row, and each segment is written exactly once.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn draw(&mut self) -> Result<()> {
        let Self { raster, state, .. } = self;
        let food = state.food;

        raster.clear()?;
        raster.set_pixel(food.row, food.col)?;

        for run in state.snake.chunk_by(|left, right| left.row == right.row) {
            let Some(&first) = run.first() else {
                continue;
            };
            let food_bits = if food.row == first.row {
                food.column_bit()
            } else {
                0
            };
            match run {
                [segment] if food_bits == 0 => raster.set_pixel(segment.row, segment.col)?,
                _ => {
                    let bits = run
                        .iter()
                        .fold(food_bits, |bits, segment| bits | segment.column_bit());
                    raster.fill_row(first.row, bits)?;
                }
            }
        }
        Ok(())
    }

    /// The whole picture (snake and food) as one frame.
    #[must_use]
    pub fn frame(&self) -> BitMatrix {
        let mut bit_matrix = BitMatrix::from_points(&self.state.snake);
        bit_matrix.set(self.state.food);
        bit_matrix
    }

    /// Renders [`frame`](Self::frame) as eight row writes, without clearing first.
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn draw_frame(&mut self) -> Result<()> {
        let frame = self.frame();
        self.raster.draw_bit_matrix(&frame)
    }

    /// Renders with the configured [`RenderMode`].
    ///
    /// # Errors
    /// Returns a transport error.
    pub fn render(&mut self) -> Result<()> {
        match self.config.render_mode {
            RenderMode::RowBatched => self.draw(),
            RenderMode::Framed => self.draw_frame(),
        }
    }

    /// Turns the snake for the next move. Reversing straight into the body is ignored;
    /// every other request, including the current direction, is applied.
    ///
    /// Returns whether the request was applied.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction == self.state.direction.opposite() {
            return false;
        }
        #[cfg(feature = "defmt")]
        if direction != self.state.direction {
            defmt::debug!("snake: turning {}", direction);
        }
        self.state.direction = direction;
        true
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snake(&self) -> &[Point] {
        self.state.snake()
    }

    #[must_use]
    pub const fn food(&self) -> Point {
        self.state.food
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.state.direction
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn raster(&self) -> &Raster<S> {
        &self.raster
    }

    pub const fn raster_mut(&mut self) -> &mut Raster<S> {
        &mut self.raster
    }

    /// Places food on a uniformly random free cell and returns it.
    ///
    /// Returns `None`, leaving the food where it was, when the snake covers every cell.
    fn spawn_food(&mut self) -> Option<Point> {
        if self.state.snake.is_full() {
            return None;
        }
        loop {
            let food = Point::new_unchecked(
                random_below(&mut self.rng, ROW_COUNT_U8),
                random_below(&mut self.rng, COL_COUNT_U8),
            );
            if !self.check_collision(food) {
                self.state.food = food;
                return Some(food);
            }
        }
    }

    /// Whether `point` is covered by any segment.
    fn check_collision(&self, point: Point) -> bool {
        self.state.snake.iter().any(|&segment| segment == point)
    }
}

/// Uniform in `0..bound` for power-of-two `bound` (8 here).
#[expect(
    clippy::integer_division_remainder_used,
    clippy::cast_possible_truncation,
    reason = "The remainder is below `bound`, which fits in u8"
)]
fn random_below(rng: &mut impl RngCore, bound: u8) -> u8 {
    (rng.next_u32() % u32::from(bound)) as u8
}
