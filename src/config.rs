//! Scene descriptions
//!
//! Loaded from JSON, e.g.
//!
//! ```json
//! {
//!   "seed": 7,
//!   "emitters": [
//!     {
//!       "name": "smoke",
//!       "anchor": [320.0, 80.0],
//!       "spawn_interval": 0.0167,
//!       "characteristics": {
//!         "opacity": [51, 153], "rotation": [0, 0], "scale": [0.5, 1.5],
//!         "speed": [50, 100], "direction": [80, 140], "lifespan": [20, 20]
//!       }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{Cadence, Characteristics, DeathPolicy, EmitterPool, Scene};

/// One emitter of a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub name: String,
    pub anchor: Vec2,
    pub characteristics: Characteristics,
    #[serde(default)]
    pub death: DeathPolicy,
    /// Seconds between automatic spawns, `None` for burst-only emitters
    #[serde(default)]
    pub spawn_interval: Option<f32>,
}

/// A whole scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub seed: u64,
    pub emitters: Vec<EmitterConfig>,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded {} emitters from {}", config.emitters.len(), path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every emitter and build the scene. Bad templates are
    /// reported here rather than on the first spawn.
    pub fn build(&self) -> Result<Scene> {
        let mut scene = Scene::new(self.seed);
        for emitter in &self.emitters {
            if let Err(err) = emitter.characteristics.validate() {
                log::debug!("Emitter '{}' rejected: {}", emitter.name, err);
                return Err(err);
            }
            let cadence = emitter.spawn_interval.map(Cadence::new).transpose()?;
            let pool = EmitterPool::new(
                emitter.anchor,
                emitter.characteristics.clone(),
                emitter.death,
                scene.next_emitter_seed(),
            );
            scene.add_emitter(emitter.name.clone(), pool, cadence);
        }
        Ok(scene)
    }
}
