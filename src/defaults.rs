pub const DEFAULT_GRID_WIDTH: usize = 20;
pub const DEFAULT_GRID_HEIGHT: usize = 20;

pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const FOOD_SCORE: u32 = 10;

pub const BASE_TICK_INTERVAL_MS: u64 = 150;
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
/// How much faster each eaten food makes the recommended tick interval.
pub const SPEEDUP_PER_FOOD_MS: u64 = 10;
