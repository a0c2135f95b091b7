//! Combat tuning values.
//!
//! Every constant the gameplay systems consume lives in [`CombatConfig`] so
//! drivers and tests can override them. Defaults match the shipped balance.
//! Configs deserialize from JSON; missing fields fall back to defaults.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse combat config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning values for the arena and the combat systems.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Arena extents in world units.
    pub arena_width: f32,
    pub arena_height: f32,
    /// Inset from every arena edge that movement clamps to.
    pub arena_padding: f32,

    /// Units moved per frame while a movement key is held.
    pub move_speed: f32,

    /// Minimum interval between attack triggers, per entity.
    pub attack_cooldown_ms: f32,
    /// Safety-valve timer that force-ends a swing if the animation stalls.
    pub swing_timeout_ms: f32,

    /// Side length of the square attack hitbox.
    pub hitbox_size: f32,
    /// Distance from attacker center to hitbox center.
    pub hitbox_offset: f32,
    /// Extra vertical correction applied to upward attacks.
    pub hitbox_up_adjust: f32,
    /// Attack hitbox lifetime.
    pub attack_ttl_ms: f32,
    pub attack_damage: i32,

    /// Time between animation frames.
    pub frame_duration_ms: f32,
    /// Frames in every attack animation set.
    pub attack_frame_count: usize,

    pub raider_health: i32,
    pub keep_health: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            arena_padding: 30.0,
            move_speed: 3.0,
            attack_cooldown_ms: 600.0,
            swing_timeout_ms: 500.0,
            hitbox_size: 64.0,
            hitbox_offset: 50.0,
            hitbox_up_adjust: 15.0,
            attack_ttl_ms: 500.0,
            attack_damage: 20,
            frame_duration_ms: 100.0,
            attack_frame_count: 6,
            raider_health: 100,
            keep_health: 1000,
        }
    }
}

impl CombatConfig {
    /// Parse a config from JSON. Unspecified fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        let config = CombatConfig::default();
        // The swing timeout must fire before the cooldown reopens, or a held
        // key could start a swing that overlaps its own teardown.
        assert!(config.swing_timeout_ms < config.attack_cooldown_ms);
        assert!(config.attack_ttl_ms > 0.0);
        assert!(config.arena_padding * 2.0 < config.arena_width.min(config.arena_height));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CombatConfig::from_json(r#"{"attack_damage": 35, "move_speed": 5.0}"#).unwrap();
        assert_eq!(config.attack_damage, 35);
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.attack_cooldown_ms, 600.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(CombatConfig::from_json("{not json").is_err());
    }
}
