mod error;
mod settings;
mod simulation;
mod snake;
mod state;
mod types;

pub use error::SimulationError;
pub use settings::SimulationSettings;
pub use simulation::GridSimulation;
pub use snake::Snake;
pub use state::GameState;
pub use types::{Direction, DirectionPolicy, GridSize, Point, WallMode};
