use serde::{Deserialize, Serialize};

use crate::defaults::{
    BASE_TICK_INTERVAL_MS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, INITIAL_SNAKE_LENGTH,
};
use super::types::{DirectionPolicy, GridSize, WallMode};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub grid_width: usize,
    pub grid_height: usize,
    pub wall_mode: WallMode,
    pub direction_policy: DirectionPolicy,
    pub tick_interval_ms: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            wall_mode: WallMode::default(),
            direction_policy: DirectionPolicy::default(),
            tick_interval_ms: BASE_TICK_INTERVAL_MS,
        }
    }
}

impl SimulationSettings {
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width < INITIAL_SNAKE_LENGTH || self.grid_width > 100 {
            return Err("Grid width must be between 3 and 100".to_string());
        }
        if self.grid_height < 1 || self.grid_height > 100 {
            return Err("Grid height must be between 1 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SimulationSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_grid_too_narrow_for_snake() {
        let settings = SimulationSettings {
            grid_width: 2,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_tick_interval_out_of_range() {
        let settings = SimulationSettings {
            tick_interval_ms: 10,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = SimulationSettings {
            grid_width: 12,
            grid_height: 9,
            wall_mode: WallMode::Wrap,
            direction_policy: DirectionPolicy::FirstWins,
            tick_interval_ms: 200,
        };
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(SimulationSettings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_from_yaml_applies_defaults_for_missing_fields() {
        let settings = SimulationSettings::from_yaml("grid_width: 30\n").unwrap();
        assert_eq!(settings.grid_width, 30);
        assert_eq!(settings.grid_height, DEFAULT_GRID_HEIGHT);
        assert_eq!(settings.wall_mode, WallMode::Bounded);
    }

    #[test]
    fn test_from_yaml_rejects_invalid_settings() {
        assert!(SimulationSettings::from_yaml("grid_width: 500\n").is_err());
    }
}
