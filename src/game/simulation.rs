use crate::defaults::{FOOD_SCORE, INITIAL_SNAKE_LENGTH};
use crate::log;
use crate::session_rng::SessionRng;

use super::error::SimulationError;
use super::settings::SimulationSettings;
use super::snake::Snake;
use super::state::GameState;
use super::types::{Direction, DirectionPolicy, GridSize, Point, WallMode};

/// Fixed-tick snake simulation on a rectangular grid.
///
/// The simulation has no notion of wall-clock time: an external scheduler
/// calls [`tick`](Self::tick) at whatever interval it likes, an input
/// collaborator calls [`set_direction`](Self::set_direction) in between,
/// and a renderer reads [`state`](Self::state) snapshots. Calls must not
/// overlap; drive everything from one task or thread.
pub struct GridSimulation {
    grid: GridSize,
    wall_mode: WallMode,
    direction_policy: DirectionPolicy,
    snake: Snake,
    food: Option<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    is_game_over: bool,
    is_paused: bool,
    rng: SessionRng,
    snapshot: GameState,
}

impl GridSimulation {
    /// Validates the grid and performs the initial reset, so a freshly
    /// constructed simulation is already running.
    pub fn new(settings: &SimulationSettings, rng: SessionRng) -> Result<Self, SimulationError> {
        let grid = settings.grid_size();
        if grid.width < INITIAL_SNAKE_LENGTH || grid.height < 1 {
            return Err(SimulationError::InvalidGridSize {
                width: grid.width,
                height: grid.height,
            });
        }

        let mut simulation = Self {
            grid,
            wall_mode: settings.wall_mode,
            direction_policy: settings.direction_policy,
            snake: Snake::spawn(&grid, INITIAL_SNAKE_LENGTH),
            food: None,
            direction: Direction::Right,
            pending_direction: None,
            score: 0,
            is_game_over: false,
            is_paused: false,
            rng,
            snapshot: GameState {
                snake: Vec::new(),
                food: None,
                score: 0,
                is_game_over: false,
                is_paused: false,
                grid_width: grid.width,
                grid_height: grid.height,
            },
        };
        simulation.reset();
        Ok(simulation)
    }

    /// Restarts the session on the same grid: fresh snake, direction right,
    /// score zero, new food. Grid dimensions were validated at construction,
    /// so this cannot fail.
    pub fn reset(&mut self) {
        self.snake = Snake::spawn(&self.grid, INITIAL_SNAKE_LENGTH);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.score = 0;
        self.is_game_over = false;
        self.is_paused = false;
        self.food = self.place_food();
        self.rebuild_snapshot();
        log!(
            "Game reset on {}x{} grid, food at {:?}",
            self.grid.width,
            self.grid.height,
            self.food
        );
    }

    /// Requests a direction change for the next tick. Reversing into the
    /// neck is rejected, as is any input after game over. Whether a second
    /// request before the next tick replaces the first depends on the
    /// configured [`DirectionPolicy`].
    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_game_over {
            return;
        }
        if direction.is_opposite(&self.direction) {
            return;
        }
        if self.direction_policy == DirectionPolicy::FirstWins && self.pending_direction.is_some() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances the simulation by one cell. No-op while paused or after
    /// game over.
    pub fn tick(&mut self) {
        if self.is_game_over || self.is_paused {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = match self.next_head_position() {
            Some(pos) => pos,
            None => {
                self.is_game_over = true;
                log!("Hit the wall at {:?}. Final score: {}", self.snake.head(), self.score);
                self.rebuild_snapshot();
                return;
            }
        };

        if self.snake.contains(&next_head) {
            self.is_game_over = true;
            log!(
                "Ran into itself at ({}, {}). Final score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.rebuild_snapshot();
            return;
        }

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += FOOD_SCORE;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = self.place_food();
        } else {
            self.snake.pop_tail();
        }

        self.rebuild_snapshot();
    }

    /// Flips the paused flag. Has no effect on game over.
    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        self.rebuild_snapshot();
    }

    pub fn state(&self) -> GameState {
        self.snapshot.clone()
    }

    pub fn grid_width(&self) -> usize {
        self.grid.width
    }

    pub fn grid_height(&self) -> usize {
        self.grid.height
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Where the head would land this tick, or `None` on a wall collision
    /// in bounded mode.
    fn next_head_position(&self) -> Option<Point> {
        let head = self.snake.head();

        match self.wall_mode {
            WallMode::Bounded => match self.direction {
                Direction::Up => {
                    if head.y == 0 {
                        return None;
                    }
                    Some(Point::new(head.x, head.y - 1))
                }
                Direction::Down => {
                    if head.y + 1 >= self.grid.height {
                        return None;
                    }
                    Some(Point::new(head.x, head.y + 1))
                }
                Direction::Left => {
                    if head.x == 0 {
                        return None;
                    }
                    Some(Point::new(head.x - 1, head.y))
                }
                Direction::Right => {
                    if head.x + 1 >= self.grid.width {
                        return None;
                    }
                    Some(Point::new(head.x + 1, head.y))
                }
            },
            WallMode::Wrap => match self.direction {
                Direction::Up => Some(Point::new(head.x, wrapping_dec(head.y, self.grid.height))),
                Direction::Down => Some(Point::new(head.x, wrapping_inc(head.y, self.grid.height))),
                Direction::Left => Some(Point::new(wrapping_dec(head.x, self.grid.width), head.y)),
                Direction::Right => Some(Point::new(wrapping_inc(head.x, self.grid.width), head.y)),
            },
        }
    }

    /// Uniform pick over the cells the snake does not occupy. `None` when
    /// the snake fills the whole grid; the game then simply has nothing
    /// left to eat.
    fn place_food(&mut self) -> Option<Point> {
        let cells = self.grid.width * self.grid.height;
        let mut free = Vec::with_capacity(cells - self.snake.len());
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let pos = Point::new(x, y);
                if !self.snake.contains(&pos) {
                    free.push(pos);
                }
            }
        }

        if free.is_empty() {
            log!("No free cell left for food");
            return None;
        }

        let pos = free[self.rng.random_range(0..free.len())];
        log!("Food spawned at ({}, {})", pos.x, pos.y);
        Some(pos)
    }

    fn rebuild_snapshot(&mut self) {
        self.snapshot = GameState {
            snake: self.snake.to_vec(),
            food: self.food,
            score: self.score,
            is_game_over: self.is_game_over,
            is_paused: self.is_paused,
            grid_width: self.grid.width,
            grid_height: self.grid.height,
        };
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: Vec<Point>) {
        self.snake = Snake::from_segments(segments);
        self.rebuild_snapshot();
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
        self.rebuild_snapshot();
    }
}

fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}
