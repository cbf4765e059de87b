//! Runtime settings for the simulation window.

use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

/// Invalid configuration value
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number of pixels, got {0}")]
    CellSize(f32),
    #[error("tick interval must be at least 1 ms")]
    TickInterval,
    #[error("maximum grid width must be at least one cell wide, got {0}")]
    MaxWidth(f32),
    #[error("soup density must be within 0.0..=1.0, got {0}")]
    SoupDensity(f64),
    #[error("environment variable {name} has invalid value `{value}`")]
    Env { name: &'static str, value: String },
}

pub const ENV_CELL_SIZE: &str = "LIFE_CELL_SIZE";
pub const ENV_TICK_MS: &str = "LIFE_TICK_MS";
pub const ENV_MAX_WIDTH: &str = "LIFE_MAX_WIDTH";
pub const ENV_SOUP_DENSITY: &str = "LIFE_SOUP_DENSITY";

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Side of one cell in screen pixels at zoom 1.0
    pub cell_size: f32,
    /// Time between generations while running
    pub tick_interval: Duration,
    /// Widest the grid area may grow when the window is resized
    pub max_grid_width: f32,
    /// Chance that a cell starts alive in a random soup
    pub soup_density: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            tick_interval: Duration::from_millis(60),
            max_grid_width: 600.0,
            soup_density: 0.3,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.tick_interval < Duration::from_millis(1) {
            return Err(ConfigError::TickInterval);
        }
        if !self.max_grid_width.is_finite() || self.max_grid_width < self.cell_size {
            return Err(ConfigError::MaxWidth(self.max_grid_width));
        }
        if !(0.0..=1.0).contains(&self.soup_density) {
            return Err(ConfigError::SoupDensity(self.soup_density));
        }
        Ok(())
    }

    /// Defaults overridden by `LIFE_*` environment variables, then validated
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SimConfig::from_env`] with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CELL_SIZE) {
            config.cell_size = parse_var(ENV_CELL_SIZE, value)?;
        }
        if let Some(value) = lookup(ENV_TICK_MS) {
            config.tick_interval = Duration::from_millis(parse_var(ENV_TICK_MS, value)?);
        }
        if let Some(value) = lookup(ENV_MAX_WIDTH) {
            config.max_grid_width = parse_var(ENV_MAX_WIDTH, value)?;
        }
        if let Some(value) = lookup(ENV_SOUP_DENSITY) {
            config.soup_density = parse_var(ENV_SOUP_DENSITY, value)?;
        }

        config.validate()?;
        info!(
            "config: cell_size={} tick={}ms max_width={} density={}",
            config.cell_size,
            config.tick_interval.as_millis(),
            config.max_grid_width,
            config.soup_density
        );
        Ok(config)
    }

    /// Grid area width for a window of `window_width` pixels
    pub fn grid_width_for(&self, window_width: f32, margin: f32) -> f32 {
        if window_width >= self.max_grid_width {
            self.max_grid_width
        } else {
            (window_width - margin).max(self.cell_size)
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => {
            warn!("unparsable {name}={value:?}");
            Err(ConfigError::Env { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval, Duration::from_millis(60));
        assert_eq!(config.cell_size, 15.0);
    }

    #[test]
    fn test_env_overrides() {
        let config = SimConfig::from_lookup(lookup(&[(ENV_TICK_MS, "100"), (ENV_CELL_SIZE, " 8 ")])).unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.cell_size, 8.0);
        assert_eq!(config.max_grid_width, 600.0);
    }

    #[test]
    fn test_env_unparsable() {
        let err = SimConfig::from_lookup(lookup(&[(ENV_TICK_MS, "fast")])).unwrap_err();
        assert_eq!(err, ConfigError::Env { name: ENV_TICK_MS, value: "fast".to_string() });
    }

    #[test]
    fn test_rejects_zero_values() {
        assert_eq!(
            SimConfig::from_lookup(lookup(&[(ENV_TICK_MS, "0")])),
            Err(ConfigError::TickInterval)
        );
        assert_eq!(
            SimConfig::from_lookup(lookup(&[(ENV_CELL_SIZE, "0")])),
            Err(ConfigError::CellSize(0.0))
        );
    }

    #[test]
    fn test_rejects_density_out_of_range() {
        let config = SimConfig { soup_density: 1.5, ..SimConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::SoupDensity(1.5)));
    }

    #[test]
    fn test_grid_width_for_window() {
        let config = SimConfig::default();
        assert_eq!(config.grid_width_for(1000.0, 24.0), 600.0);
        assert_eq!(config.grid_width_for(400.0, 24.0), 376.0);
    }
}
