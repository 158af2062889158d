pub mod game;
pub mod highscore;
pub mod logger;
pub mod session;
pub mod session_rng;

mod defaults;

pub use game::{
    Direction, DirectionPolicy, GameState, GridSimulation, GridSize, Point, SimulationError,
    SimulationSettings, Snake, WallMode,
};
pub use highscore::{HighScoreStore, InMemoryHighScoreStore};
pub use session::{SessionCommand, SessionHandle, recommended_interval_ms, spawn_session};
pub use session_rng::SessionRng;
