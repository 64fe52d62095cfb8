//! Tunables for the dot/wall scenario.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides:
//!
//! ```json
//! { "world_lifetime_ms": 5000.0, "dot": { "push": { "x": 40.0, "y": 0.0 } } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::vec2::Vec2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub view: ViewConfig,
    /// The world ends once this much time has passed.
    pub world_lifetime_ms: f64,
    pub dot: DotConfig,
    pub wall: WallConfig,
}

/// Size of the drawing area; also the background rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
    /// Initial acceleration and how long it lasts.
    pub push: Vec2,
    pub push_duration_ms: f64,
    /// Acceleration that starts after `free_fall_delay_ms`.
    pub free_fall: Vec2,
    pub free_fall_delay_ms: f64,
    /// Clicks are ignored until this much time has passed.
    pub jump_delay_ms: f64,
    pub jump: Vec2,
    pub jump_duration_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            world_lifetime_ms: 10_000.0,
            dot: DotConfig::default(),
            wall: WallConfig::default(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            position: Vec2::new(100.0, 100.0),
            width: 10.0,
            height: 10.0,
            push: Vec2::new(20.0, 0.0),
            push_duration_ms: 3000.0,
            free_fall: Vec2::new(0.0, 30.0),
            free_fall_delay_ms: 3000.0,
            jump_delay_ms: 3000.0,
            jump: Vec2::new(0.0, -1000.0),
            jump_duration_ms: 100.0,
        }
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            position: Vec2::new(600.0, 200.0),
            width: 10.0,
            height: 100.0,
        }
    }
}
