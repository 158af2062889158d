use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::game::{Direction, GameState, GridSimulation, SimulationError, SimulationSettings};
use crate::highscore::HighScoreStore;
use crate::log;
use crate::session_rng::SessionRng;
use super::interval_after;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    SetDirection(Direction),
    TogglePause,
    Reset,
    Stop,
}

/// Caller-side handle for a spawned session: commands in, state
/// snapshots out.
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    state: watch::Receiver<GameState>,
}

impl SessionHandle {
    pub async fn set_direction(&self, direction: Direction) {
        let _ = self
            .commands
            .send(SessionCommand::SetDirection(direction))
            .await;
    }

    pub async fn toggle_pause(&self) {
        let _ = self.commands.send(SessionCommand::TogglePause).await;
    }

    pub async fn reset(&self) {
        let _ = self.commands.send(SessionCommand::Reset).await;
    }

    pub async fn stop(&self) {
        let _ = self.commands.send(SessionCommand::Stop).await;
    }

    pub fn state(&self) -> GameState {
        self.state.borrow().clone()
    }

    /// Subscription for renderers: resolves after every tick with the
    /// fresh snapshot.
    pub fn state_updates(&self) -> watch::Receiver<GameState> {
        self.state.clone()
    }
}

/// Spawns a session on the current tokio runtime. The returned task
/// resolves to the final [`GameState`] once the game ends or the handle
/// sends [`SessionCommand::Stop`].
pub fn spawn_session(
    settings: &SimulationSettings,
    rng: SessionRng,
    high_scores: Option<Arc<dyn HighScoreStore>>,
) -> Result<(SessionHandle, JoinHandle<GameState>), SimulationError> {
    let simulation = GridSimulation::new(settings, rng)?;
    let (command_tx, command_rx) = mpsc::channel(16);
    let (state_tx, state_rx) = watch::channel(simulation.state());

    let base_interval_ms = settings.tick_interval_ms;
    let task = tokio::spawn(run_session(
        simulation,
        base_interval_ms,
        command_rx,
        state_tx,
        high_scores,
    ));

    Ok((
        SessionHandle {
            commands: command_tx,
            state: state_rx,
        },
        task,
    ))
}

/// Drives the simulation: ticks on a timer that follows the speed curve,
/// applies queued input between ticks, and publishes a snapshot after
/// every mutation. Owning the simulation here is what guarantees the
/// at-most-one-in-flight-call contract of [`GridSimulation`].
pub async fn run_session(
    mut simulation: GridSimulation,
    base_interval_ms: u64,
    mut commands: mpsc::Receiver<SessionCommand>,
    state_tx: watch::Sender<GameState>,
    high_scores: Option<Arc<dyn HighScoreStore>>,
) -> GameState {
    let mut interval_ms = interval_after(base_interval_ms, simulation.score());
    let mut timer = tick_timer(interval_ms);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                simulation.tick();
                let state = simulation.state();
                let game_over = state.is_game_over;
                let _ = state_tx.send(state);

                if game_over {
                    if let Some(store) = &high_scores
                        && store.submit(simulation.score())
                    {
                        log!("New high score: {}", simulation.score());
                    }
                    break;
                }

                let next_interval_ms = interval_after(base_interval_ms, simulation.score());
                if next_interval_ms != interval_ms {
                    interval_ms = next_interval_ms;
                    timer = tick_timer(interval_ms);
                }
            }
            command = commands.recv() => match command {
                Some(SessionCommand::SetDirection(direction)) => {
                    simulation.set_direction(direction);
                }
                Some(SessionCommand::TogglePause) => {
                    simulation.toggle_pause();
                    let _ = state_tx.send(simulation.state());
                }
                Some(SessionCommand::Reset) => {
                    simulation.reset();
                    interval_ms = interval_after(base_interval_ms, 0);
                    timer = tick_timer(interval_ms);
                    let _ = state_tx.send(simulation.state());
                }
                Some(SessionCommand::Stop) | None => break,
            }
        }
    }

    simulation.state()
}

fn tick_timer(interval_ms: u64) -> tokio::time::Interval {
    let period = Duration::from_millis(interval_ms);
    // First tick a full period from now, not immediately.
    tokio::time::interval_at(tokio::time::Instant::now() + period, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::InMemoryHighScoreStore;

    fn fast_settings(width: usize, height: usize) -> SimulationSettings {
        SimulationSettings {
            grid_width: width,
            grid_height: height,
            tick_interval_ms: 50,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_session_publishes_snapshots_and_stops_on_command() {
        let (handle, task) =
            spawn_session(&fast_settings(20, 20), SessionRng::new(42), None).unwrap();

        let mut updates = handle.state_updates();
        updates.changed().await.unwrap();
        let state = handle.state();
        assert_eq!(state.snake.len(), 3);
        assert!(!state.is_game_over);

        handle.stop().await;
        let final_state = task.await.unwrap();
        assert!(!final_state.is_game_over);
    }

    #[tokio::test]
    async fn test_session_ends_on_game_over_and_records_score() {
        let store = Arc::new(InMemoryHighScoreStore::new());
        // Heading right on a 5-wide bounded grid: the wall ends the game
        // after a couple of ticks without any input.
        let (_handle, task) = spawn_session(
            &fast_settings(5, 5),
            SessionRng::new(42),
            Some(store.clone()),
        )
        .unwrap();

        let final_state = task.await.unwrap();
        assert!(final_state.is_game_over);
        assert_eq!(store.high_score(), final_state.score);
    }

    #[tokio::test]
    async fn test_pause_command_freezes_ticks() {
        let (handle, task) =
            spawn_session(&fast_settings(20, 20), SessionRng::new(42), None).unwrap();

        let mut updates = handle.state_updates();
        handle.toggle_pause().await;
        // A tick snapshot may race the pause acknowledgement.
        loop {
            updates.changed().await.unwrap();
            if updates.borrow().is_paused {
                break;
            }
        }
        let paused = handle.state();

        tokio::time::sleep(Duration::from_millis(120)).await;
        let later = handle.state();
        assert_eq!(later.snake, paused.snake);

        handle.stop().await;
        task.await.unwrap();
    }
}
