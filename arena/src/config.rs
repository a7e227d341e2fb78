use crate::error::{ArenaError, ArenaResult};
use common::shapes::Rectangle;
use quadtree::quadtree::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session-wide settings. Every field has a default, so a JSON file only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Margin kept free of spawns along every world edge.
    pub padding: f64,
    pub player_radius: f64,
    pub food_radius: f64,
    pub vision_distance: f64,
    pub player_detection: usize,
    pub food_detection: usize,
    pub num_food: usize,
    /// How much bigger (as a fraction) a player must be to eat another.
    pub eat_player_threshold: f64,
    /// Distance reported for sensor slots with nothing in them.
    pub sensor_empty_distance: f64,
    pub node_capacity: usize,
    pub max_depth: usize,
    pub frame_limit: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let tree = Config::default();
        ArenaConfig {
            world_width: 1280.0,
            world_height: 720.0,
            padding: 50.0,
            player_radius: 5.0,
            food_radius: 2.0,
            vision_distance: 200.0,
            player_detection: 3,
            food_detection: 3,
            num_food: 450,
            eat_player_threshold: 0.10,
            sensor_empty_distance: 9999.0,
            node_capacity: tree.node_capacity,
            max_depth: tree.max_depth,
            frame_limit: 2000,
        }
    }
}

impl ArenaConfig {
    pub fn from_json_str(json: &str) -> ArenaResult<Self> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ArenaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ArenaResult<()> {
        let non_negative = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("padding", self.padding),
            ("player_radius", self.player_radius),
            ("food_radius", self.food_radius),
            ("vision_distance", self.vision_distance),
            ("eat_player_threshold", self.eat_player_threshold),
            ("sensor_empty_distance", self.sensor_empty_distance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ArenaError::InvalidConfig(format!(
                    "{} must be finite and non-negative (got {})",
                    name, value
                )));
            }
        }
        if self.node_capacity == 0 {
            return Err(ArenaError::InvalidConfig(
                "node_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The playable bounds, which double as the root boundary of every
    /// tick's tree.
    pub fn world(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.world_width, self.world_height)
    }

    /// The region particles are spawned into.
    pub fn spawn_area(&self) -> Rectangle {
        self.world().inset(self.padding)
    }

    pub fn quadtree_config(&self) -> Config {
        Config {
            node_capacity: self.node_capacity,
            max_depth: self.max_depth,
        }
    }
}
