use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    GridSize, DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, SNAKE_ORIGIN,
    TICK_INTERVAL_DECREMENT_MS,
};
use crate::food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `GameOver` is absorbing: only `reset()` leaves it. `Paused` blocks both
/// `step()` and `set_direction()`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Discrete events emitted by a step, consumed by collaborators.
///
/// The step function mutates only its own state; sound, persistence, and
/// timer rescheduling all hang off these events in the driver loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    /// The head landed on food this tick; the snake grew and sped up.
    Ate,
    /// The game reached its terminal state this tick.
    GameOver,
}

/// Complete mutable game state for one session.
///
/// All mutation goes through `step`, `set_direction`, `toggle_pause`, and
/// `reset`, invoked strictly sequentially by the driver.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    direction: Option<Direction>,
    tick_interval_ms: u64,
    base_tick_interval_ms: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, rng: StdRng) -> Self {
        let (x, y) = SNAKE_ORIGIN;
        let mut state = Self {
            snake: Snake::new(Position { x, y }),
            food: Position { x, y },
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            direction: None,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            base_tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            bounds,
            rng,
        };
        state.place_food();
        state
    }

    /// Overrides the starting tick interval, clamped to the ramp floor.
    /// Applies immediately and on every subsequent `reset()`.
    pub fn set_base_tick_interval_ms(&mut self, interval_ms: u64) {
        self.base_tick_interval_ms = interval_ms.max(MIN_TICK_INTERVAL_MS);
        self.tick_interval_ms = self.base_tick_interval_ms;
    }

    /// Reinitializes the session in place: snake back at the origin, no
    /// direction, zero score, default speed, running, fresh food.
    ///
    /// The RNG is carried over so a seeded session stays reproducible
    /// across restarts.
    pub fn reset(&mut self) {
        let (x, y) = SNAKE_ORIGIN;
        self.snake = Snake::new(Position { x, y });
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.direction = None;
        self.tick_interval_ms = self.base_tick_interval_ms;
        self.place_food();
    }

    /// Advances simulation by one gameplay tick and returns the events it
    /// produced. No-op unless the game is running.
    ///
    /// Movement happens first, then the eat branch, then the boundary and
    /// self-collision checks. The two checks run unconditionally after
    /// growth or translation; they are independent of the eat branch, not
    /// short-circuited by it.
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Running {
            return events;
        }

        self.tick_count += 1;

        // Before the first direction input the delta is (0, 0): the head is
        // re-pushed onto its own cell and popped right back off, leaving the
        // snake parked at the origin.
        let delta = self.direction.map_or((0, 0), Direction::delta);
        let head = self.snake.head().translated(delta);
        self.snake.push_head(head);

        let mut terminated = false;

        if head == self.food {
            self.score += 1;
            self.shorten_tick_interval();
            events.push(GameEvent::Ate);
            // Growth: the tail stays. A board with no free cell left means
            // the snake has won the grid; there is nothing left to place, so
            // the session terminates.
            if !self.place_food() {
                terminated = true;
            }
        } else {
            self.snake.pop_tail();
        }

        if !head.is_within_bounds(self.bounds) || self.snake.head_overlaps_body() {
            terminated = true;
        }

        if terminated {
            self.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver);
        }

        events
    }

    /// Applies a requested direction change, to take effect on the next
    /// `step()`.
    ///
    /// Rejected as a no-op when the game is not running, or when the
    /// candidate is the exact opposite of the current direction (the snake
    /// cannot reverse into its own neck). Any cardinal is accepted while the
    /// snake is still parked at the start.
    pub fn set_direction(&mut self, candidate: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if self.direction == Some(candidate.opposite()) {
            return;
        }
        self.direction = Some(candidate);
    }

    /// Flips between running and paused. No effect on a terminated game.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the current movement direction, `None` before the first input.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the tick interval the driver should schedule with.
    ///
    /// Shrinks after every meal; the driver re-reads it each loop iteration
    /// so speed-ups take effect on the next scheduling decision.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Returns true while waiting for the first direction input of a session.
    #[must_use]
    pub fn awaiting_first_move(&self) -> bool {
        self.direction.is_none() && self.score == 0
    }

    /// Places food on a random free cell. Returns false when no free cell
    /// exists.
    fn place_food(&mut self) -> bool {
        match food::place(&mut self.rng, self.bounds, &self.snake) {
            Some(cell) => {
                self.food = cell;
                true
            }
            None => false,
        }
    }

    fn shorten_tick_interval(&mut self) {
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(TICK_INTERVAL_DECREMENT_MS)
            .max(MIN_TICK_INTERVAL_MS);
    }
}
