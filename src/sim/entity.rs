//! A single ephemeral entity: particle or floating label
//!
//! Entities are plain data. They know nothing about the pool that owns them
//! or the renderer that draws them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::attr::{Attr, Attributes, Interpolated};
use crate::error::{Result, check_dt};

/// Lifecycle state. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityState {
    Alive,
    Dead,
}

/// When an entity dies.
///
/// Lifespan always bounds an entity. `Threshold` additionally kills it as
/// soon as one attribute decays below a minimum (labels that have faded out
/// before their time is up).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DeathPolicy {
    /// Dead once `age > lifespan`
    #[default]
    Age,
    /// Dead once `age > lifespan` or `attr < min`
    Threshold { attr: Attr, min: f32 },
}

impl DeathPolicy {
    /// Point-burst rule: gone once opacity drops below 1
    pub fn fade_out() -> Self {
        DeathPolicy::Threshold {
            attr: Attr::Opacity,
            min: crate::consts::LABEL_FADE_FLOOR,
        }
    }

    pub fn is_met(&self, age: f32, lifespan: f32, attrs: &Attributes) -> bool {
        if age > lifespan {
            return true;
        }
        match *self {
            DeathPolicy::Age => false,
            DeathPolicy::Threshold { attr, min } => attrs.value(attr) < min,
        }
    }
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub position: Vec2,
    pub color: [u8; 3],
    /// 0-255
    pub opacity: f32,
    pub scale: f32,
    /// Degrees
    pub rotation: f32,
    pub label: Option<&'a str>,
}

/// One simulated visual object
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub pos: Vec2,
    /// Fixed at creation from speed and heading
    pub vel: Vec2,
    pub color: [u8; 3],
    /// Text for floating labels, `None` for sprites
    pub label: Option<String>,
    pub attrs: Attributes,
    /// Seconds since spawn
    age: f32,
    /// Seconds
    lifespan: f32,
    death: DeathPolicy,
    state: EntityState,
}

impl Entity {
    /// Only pools create entities; `lifespan` comes from a validated template
    pub(crate) fn new(pos: Vec2, vel: Vec2, lifespan: f32, death: DeathPolicy) -> Self {
        Self {
            pos,
            vel,
            color: [255, 255, 255],
            label: None,
            attrs: Attributes::default(),
            age: 0.0,
            lifespan,
            death,
            state: EntityState::Alive,
        }
    }

    pub(crate) fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub(crate) fn with_attr(mut self, attr: Attr, interp: Interpolated) -> Self {
        self.attrs.set(attr, interp);
        self
    }

    #[inline]
    pub fn age(&self) -> f32 {
        self.age
    }

    #[inline]
    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    #[inline]
    pub fn state(&self) -> EntityState {
        self.state
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == EntityState::Alive
    }

    pub fn death_policy(&self) -> DeathPolicy {
        self.death
    }

    /// Advance by `dt` seconds. Returns `true` if this call killed the entity.
    ///
    /// Dead entities and zero timesteps are left untouched.
    pub fn advance(&mut self, dt: f32) -> Result<bool> {
        check_dt(dt)?;
        if self.state == EntityState::Dead || dt == 0.0 {
            return Ok(false);
        }

        self.attrs.step(dt);
        self.age += dt;
        self.pos += self.vel * dt;

        if self.death.is_met(self.age, self.lifespan, &self.attrs) {
            self.die();
            return Ok(true);
        }
        Ok(false)
    }

    fn die(&mut self) {
        self.state = EntityState::Dead;
        for attr in Attr::ALL {
            if attr.has_zero_floor() && self.attrs.value(attr) < 0.0 {
                self.attrs.set_value(attr, 0.0);
            }
        }
        if let DeathPolicy::Threshold { attr, .. } = self.death {
            self.attrs.set_value(attr, 0.0);
        }
    }

    /// Renderable state, `None` once dead
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        if !self.is_alive() {
            return None;
        }
        Some(Snapshot {
            position: self.pos,
            color: self.color,
            opacity: self.attrs.value(Attr::Opacity),
            scale: self.attrs.value(Attr::Scale),
            rotation: self.attrs.value(Attr::Rotation),
            label: self.label.as_deref(),
        })
    }
}
