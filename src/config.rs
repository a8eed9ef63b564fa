//! Startup configuration
//!
//! Read once when the game is created. The browser build derives it from the
//! page query string (`?debug`, `?easy`), the native runner from its arguments.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration errors (all detected before the first tick)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gate gap height must be positive, got {0}")]
    NonPositiveGap(f32),
    #[error("gate padding must not be negative, got {0}")]
    NegativePadding(f32),
    #[error(
        "gate gap {gap} with padding {padding} does not fit a fly area of height {fly_area_height}"
    )]
    GapDoesNotFit {
        gap: f32,
        padding: f32,
        fly_area_height: f32,
    },
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("gate spawn x {spawn_x} must be right of retire x {retire_x}")]
    SpawnBehindRetire { spawn_x: f32, retire_x: f32 },
}

/// All tunables of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Expose collision boxes to the presentation
    pub debug: bool,

    // === Player ===
    pub gravity: f32,
    pub jump_impulse: f32,
    pub start_position: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub hitbox_shrink: f32,

    // === World ===
    pub fly_area_height: f32,
    pub pipe_width: f32,
    /// Vertical clearance of every gate
    pub gate_gap: f32,
    pub gate_padding: f32,
    pub pipe_spawn_x: f32,
    pub pipe_retire_x: f32,
    /// Pixels per second
    pub scroll_speed: f32,

    // === Timing ===
    pub tick_rate_hz: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,

    pub high_score_ttl_days: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            debug: false,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            start_position: START_POSITION,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            hitbox_shrink: HITBOX_SHRINK,

            fly_area_height: FLY_AREA_HEIGHT,
            pipe_width: PIPE_WIDTH,
            gate_gap: GATE_GAP,
            gate_padding: GATE_PADDING,
            pipe_spawn_x: PIPE_SPAWN_X,
            pipe_retire_x: PIPE_RETIRE_X,
            scroll_speed: SCROLL_SPEED,

            tick_rate_hz: TICK_RATE_HZ,
            spawn_interval: SPAWN_INTERVAL,

            high_score_ttl_days: HIGH_SCORE_TTL_DAYS,
        }
    }
}

impl GameConfig {
    /// Easy mode: wider gates, same rules
    pub fn easy() -> Self {
        Self {
            gate_gap: EASY_GATE_GAP,
            ..Self::default()
        }
    }

    /// Build a validated config from a query string such as `?debug&easy`
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for flag in query
            .trim_start_matches('?')
            .split('&')
            .map(str::trim)
            .filter(|f| !f.is_empty())
        {
            match flag.to_lowercase().as_str() {
                "debug" => config.debug = true,
                "easy" => config.gate_gap = EASY_GATE_GAP,
                other => log::warn!("Ignoring unknown config flag '{}'", other),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Simulation timestep in seconds
    pub fn tick_period(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Largest top-segment height a gate may be spawned with
    pub fn max_top_height(&self) -> f32 {
        self.fly_area_height - self.gate_gap - self.gate_padding
    }

    /// Reject configurations that could never spawn a valid gate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gate_gap.is_finite() || self.gate_gap <= 0.0 {
            return Err(ConfigError::NonPositiveGap(self.gate_gap));
        }
        if !self.gate_padding.is_finite() || self.gate_padding < 0.0 {
            return Err(ConfigError::NegativePadding(self.gate_padding));
        }

        for (name, value) in [
            ("fly_area_height", self.fly_area_height),
            ("pipe_width", self.pipe_width),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("scroll_speed", self.scroll_speed),
            ("tick_rate_hz", self.tick_rate_hz),
            ("spawn_interval", self.spawn_interval),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("start_position", self.start_position),
            ("player_x", self.player_x),
            ("hitbox_shrink", self.hitbox_shrink),
            ("pipe_spawn_x", self.pipe_spawn_x),
            ("pipe_retire_x", self.pipe_retire_x),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        // A gate has to live on screen for at least an instant
        if self.pipe_spawn_x <= self.pipe_retire_x {
            return Err(ConfigError::SpawnBehindRetire {
                spawn_x: self.pipe_spawn_x,
                retire_x: self.pipe_retire_x,
            });
        }

        if self.gate_padding * 2.0 + self.gate_gap > self.fly_area_height {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.gate_gap,
                padding: self.gate_padding,
                fly_area_height: self.fly_area_height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::easy().validate(), Ok(()));
    }

    #[test]
    fn test_query_flags() {
        let config = GameConfig::from_query("").unwrap();
        assert!(!config.debug);
        assert_eq!(config.gate_gap, GATE_GAP);

        let config = GameConfig::from_query("?debug").unwrap();
        assert!(config.debug);
        assert_eq!(config.gate_gap, GATE_GAP);

        let config = GameConfig::from_query("?easy").unwrap();
        assert!(!config.debug);
        assert_eq!(config.gate_gap, EASY_GATE_GAP);

        let config = GameConfig::from_query("?debug&easy&bogus").unwrap();
        assert!(config.debug);
        assert_eq!(config.gate_gap, EASY_GATE_GAP);
    }

    #[test]
    fn test_rejects_bad_gap() {
        let config = GameConfig {
            gate_gap: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveGap(0.0)));

        let config = GameConfig {
            gate_gap: -5.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveGap(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_padding() {
        let config = GameConfig {
            gate_padding: 220.0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::GapDoesNotFit { .. }));
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_rejects_zero_rates() {
        let config = GameConfig {
            spawn_interval: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "spawn_interval",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_physics() {
        let config = GameConfig {
            gravity: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "gravity",
                ..
            })
        ));

        for config in [
            GameConfig {
                jump_impulse: f32::NEG_INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                start_position: f32::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                hitbox_shrink: f32::INFINITY,
                ..GameConfig::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NotFinite { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_spawn_left_of_retire() {
        let config = GameConfig {
            pipe_spawn_x: PIPE_RETIRE_X,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnBehindRetire {
                spawn_x: PIPE_RETIRE_X,
                retire_x: PIPE_RETIRE_X
            })
        );
    }

    #[test]
    fn test_max_top_height() {
        let config = GameConfig::default();
        // 420 - 90 - 80
        assert_eq!(config.max_top_height(), 250.0);
    }
}
