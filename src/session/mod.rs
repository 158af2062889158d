mod runner;

pub use runner::{SessionCommand, SessionHandle, run_session, spawn_session};

use crate::defaults::{BASE_TICK_INTERVAL_MS, FOOD_SCORE, MIN_TICK_INTERVAL_MS, SPEEDUP_PER_FOOD_MS};

/// Recommended tick interval for a given score: starts at 150ms and speeds
/// up by 10ms per eaten food, never dropping below 50ms. Pure policy; the
/// simulation itself never reads a clock.
pub fn recommended_interval_ms(score: u32) -> u64 {
    interval_after(BASE_TICK_INTERVAL_MS, score)
}

pub(crate) fn interval_after(base_ms: u64, score: u32) -> u64 {
    let foods_eaten = (score / FOOD_SCORE) as u64;
    base_ms
        .saturating_sub(foods_eaten * SPEEDUP_PER_FOOD_MS)
        .max(MIN_TICK_INTERVAL_MS)
}
