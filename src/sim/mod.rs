//! Deterministic entity simulation
//!
//! This module must stay headless and deterministic:
//! - Seeded RNG only
//! - Caller-supplied timesteps, no clocks
//! - No rendering or platform dependencies

pub mod attr;
pub mod cadence;
pub mod entity;
pub mod pool;
pub mod scene;
pub mod template;
pub mod tick;

pub use attr::{Attr, Attributes, Interpolated};
pub use cadence::Cadence;
pub use entity::{DeathPolicy, Entity, EntityState, Snapshot};
pub use pool::EmitterPool;
pub use scene::{Emitter, Scene};
pub use template::{Characteristics, ColorSpec, SampleRange};
pub use tick::{TickReport, tick};
