use crate::game::constants::{
  APPLE_SIZE, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, PICKUP_RADIUS, TICK_MS,
  TRAIL_BASE_LENGTH, TRAIL_GROWTH_PER_POINT, TURN_STEP,
};
use crate::game::state::GameSettings;
use crate::game::trail::TrailPolicy;
use crate::game::types::Bounds;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8787;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub port: u16,
  pub game: GameConfig,
}

/// Per-session tuning shared by every game the server hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
  pub tick_interval: Duration,
  pub turn_step: f64,
  pub settings: GameSettings,
  pub initial_bounds: Bounds,
  pub seed: Option<u64>,
}

impl Default for GameConfig {
  fn default() -> Self {
    Self {
      tick_interval: Duration::from_millis(TICK_MS),
      turn_step: TURN_STEP,
      settings: GameSettings {
        pickup_radius: PICKUP_RADIUS,
        apple_size: APPLE_SIZE,
        trail: TrailPolicy {
          base_length: TRAIL_BASE_LENGTH,
          growth_per_point: TRAIL_GROWTH_PER_POINT,
        },
      },
      initial_bounds: Bounds {
        width: DEFAULT_CANVAS_WIDTH,
        height: DEFAULT_CANVAS_HEIGHT,
      },
      seed: None,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = GameConfig::default();
    let port = parsed(&lookup, "PORT").unwrap_or(DEFAULT_PORT);
    let tick_ms = parsed::<u64>(&lookup, "TICK_MS")
      .filter(|value| *value > 0)
      .unwrap_or(TICK_MS);

    let game = GameConfig {
      tick_interval: Duration::from_millis(tick_ms),
      turn_step: positive(&lookup, "TURN_STEP", defaults.turn_step),
      settings: GameSettings {
        pickup_radius: positive(&lookup, "PICKUP_RADIUS", defaults.settings.pickup_radius),
        apple_size: positive(&lookup, "APPLE_SIZE", defaults.settings.apple_size),
        trail: TrailPolicy {
          base_length: positive(
            &lookup,
            "TRAIL_BASE_LENGTH",
            defaults.settings.trail.base_length,
          ),
          growth_per_point: parsed(&lookup, "TRAIL_GROWTH_PER_POINT")
            .unwrap_or(defaults.settings.trail.growth_per_point),
        },
      },
      initial_bounds: Bounds {
        width: positive(&lookup, "CANVAS_WIDTH", defaults.initial_bounds.width),
        height: positive(&lookup, "CANVAS_HEIGHT", defaults.initial_bounds.height),
      },
      seed: parsed(&lookup, "GAME_SEED"),
    };

    Self { port, game }
  }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
  let raw = lookup(key)?;
  let trimmed = raw.trim();
  match trimmed.parse::<T>() {
    Ok(value) => Some(value),
    Err(_) => {
      tracing::warn!(key, value = trimmed, "ignoring unparsable setting");
      None
    }
  }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
  match parsed::<f64>(lookup, key) {
    Some(value) if value.is_finite() && value > 0.0 => value,
    Some(value) => {
      tracing::warn!(key, value, default, "setting must be positive and finite");
      default
    }
    None => default,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let values: HashMap<String, String> = pairs
      .iter()
      .map(|(key, value)| (key.to_string(), value.to_string()))
      .collect();
    AppConfig::from_lookup(|key| values.get(key).cloned())
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = config_from(&[]);
    assert_eq!(config.port, 8787);
    assert_eq!(config.game, GameConfig::default());
    assert_eq!(config.game.tick_interval, Duration::from_millis(16));
    assert_eq!(config.game.settings.trail.base_length, 40.0);
  }

  #[test]
  fn overrides_are_applied() {
    let config = config_from(&[
      ("PORT", "9000"),
      ("TICK_MS", "33"),
      ("PICKUP_RADIUS", "6.5"),
      ("TRAIL_GROWTH_PER_POINT", "10"),
      ("CANVAS_WIDTH", "300"),
      ("GAME_SEED", " 12 "),
    ]);
    assert_eq!(config.port, 9000);
    assert_eq!(config.game.tick_interval, Duration::from_millis(33));
    assert_eq!(config.game.settings.pickup_radius, 6.5);
    assert_eq!(config.game.settings.trail.growth_per_point, 10);
    assert_eq!(config.game.initial_bounds.width, 300.0);
    assert_eq!(config.game.seed, Some(12));
  }

  #[test]
  fn invalid_values_fall_back_to_defaults() {
    let config = config_from(&[
      ("PORT", "not-a-port"),
      ("TICK_MS", "0"),
      ("PICKUP_RADIUS", "-1"),
      ("APPLE_SIZE", "NaN"),
      ("TURN_STEP", "inf"),
    ]);
    assert_eq!(config.port, 8787);
    assert_eq!(config.game.tick_interval, Duration::from_millis(16));
    assert_eq!(config.game.settings.pickup_radius, 4.0);
    assert_eq!(config.game.settings.apple_size, 10.0);
    assert_eq!(config.game.turn_step, 0.07);
  }
}
