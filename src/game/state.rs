use super::types::Point;

/// Point-in-time snapshot of a game session. The simulation replaces the
/// whole snapshot after every mutation, so a renderer holding an older
/// copy is never affected by later ticks.
///
/// `food` is `None` only when the snake covers every cell of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
    pub grid_width: usize,
    pub grid_height: usize,
}
