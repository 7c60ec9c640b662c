//! Ember FX - headless emitter pools for short-lived visual entities
//!
//! Core modules:
//! - `sim`: Entities, emitter pools, spawn cadence and the scene tick
//! - `presets`: Ready-made characteristics (smoke, stream, score bursts)
//! - `config`: JSON scene descriptions
//! - `error`: Crate-wide error type
//!
//! Nothing here draws. Renderers read [`sim::Snapshot`]s after each tick.

pub mod config;
pub mod error;
pub mod presets;
pub mod sim;

pub use config::{EmitterConfig, SceneConfig};
pub use error::{Error, Result};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Most spawns a single cadence may release in one step
    pub const MAX_SPAWNS_PER_STEP: u32 = 65_536;

    /// Floating labels die once their opacity drops below this
    pub const LABEL_FADE_FLOOR: f32 = 1.0;
    /// Fully opaque, in the 0-255 opacity scale used by snapshots
    pub const OPAQUE: f32 = 255.0;
}

/// Velocity vector for a speed and a heading in degrees (0° = +x, 90° = +y)
#[inline]
pub fn heading_to_velocity(speed: f32, degrees: f32) -> Vec2 {
    let rads = degrees.to_radians();
    Vec2::new(speed * rads.cos(), speed * rads.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_axes() {
        let east = heading_to_velocity(100.0, 0.0);
        assert!((east - Vec2::new(100.0, 0.0)).length() < 1e-4);

        let north = heading_to_velocity(50.0, 90.0);
        assert!((north - Vec2::new(0.0, 50.0)).length() < 1e-4);

        let west = heading_to_velocity(10.0, 180.0);
        assert!((west - Vec2::new(-10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_heading_zero_speed() {
        assert_eq!(heading_to_velocity(0.0, 137.0), Vec2::ZERO);
    }
}
