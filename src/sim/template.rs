//! Characteristics templates
//!
//! A template holds `[min, max]` ranges sampled uniformly for every new
//! entity, plus how its attributes change over its life.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::attr::{Attr, Interpolated};
use super::entity::{DeathPolicy, Entity};
use crate::error::{Error, Result};
use crate::heading_to_velocity;

/// Inclusive `[min, max]` range. `min == max` is a fixed value.
///
/// Serialized as a two-element array, e.g. `[50, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct SampleRange {
    pub min: f32,
    pub max: f32,
}

impl From<[f32; 2]> for SampleRange {
    fn from([min, max]: [f32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<SampleRange> for [f32; 2] {
    fn from(range: SampleRange) -> Self {
        [range.min, range.max]
    }
}

impl SampleRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn validate(&self, field: &'static str) -> Result<()> {
        // A finite width keeps uniform sampling from overflowing
        if self.min <= self.max && (self.max - self.min).is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform sample. Assumes the range has been validated.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

/// Tint applied to every entity of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpec {
    Fixed([u8; 3]),
    /// A fresh random RGB per entity
    Random,
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Fixed([255, 255, 255])
    }
}

/// Randomization template for an emitter's entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    #[serde(default)]
    pub color: ColorSpec,
    /// Initial opacity, 0-255
    pub opacity: SampleRange,
    /// Initial rotation, degrees
    pub rotation: SampleRange,
    /// Initial scale
    pub scale: SampleRange,
    /// Pixels per second
    pub speed: SampleRange,
    /// Heading in degrees, 0 = +x, 90 = +y
    pub direction: SampleRange,
    /// Seconds
    pub lifespan: SampleRange,
    /// Fade opacity linearly to 0 over the lifespan
    #[serde(default)]
    pub fade: bool,
    /// Scale reached at the end of the lifespan; `None` keeps scale fixed
    #[serde(default)]
    pub end_scale: Option<SampleRange>,
    /// Degrees per second
    #[serde(default)]
    pub spin: SampleRange,
}

impl Default for Characteristics {
    fn default() -> Self {
        Self {
            color: ColorSpec::default(),
            opacity: SampleRange::fixed(crate::consts::OPAQUE),
            rotation: SampleRange::fixed(0.0),
            scale: SampleRange::fixed(1.0),
            speed: SampleRange::fixed(50.0),
            direction: SampleRange::fixed(0.0),
            lifespan: SampleRange::fixed(1.0),
            fade: false,
            end_scale: None,
            spin: SampleRange::fixed(0.0),
        }
    }
}

impl Characteristics {
    /// Check every range before anything is sampled
    pub fn validate(&self) -> Result<()> {
        self.opacity.validate("opacity")?;
        self.rotation.validate("rotation")?;
        self.scale.validate("scale")?;
        self.speed.validate("speed")?;
        self.direction.validate("direction")?;
        self.lifespan.validate("lifespan")?;
        self.spin.validate("spin")?;
        if let Some(end) = &self.end_scale {
            end.validate("end_scale")?;
        }
        if self.lifespan.min <= 0.0 {
            return Err(Error::NonPositiveLifespan {
                min: self.lifespan.min,
            });
        }
        Ok(())
    }

    /// Sample a new entity at `pos`. Sampling order is fixed so a seeded
    /// RNG always produces the same entity.
    pub fn instantiate<R: Rng + ?Sized>(&self, rng: &mut R, pos: Vec2, death: DeathPolicy) -> Entity {
        let color = match self.color {
            ColorSpec::Fixed(rgb) => rgb,
            ColorSpec::Random => [rng.random(), rng.random(), rng.random()],
        };
        let opacity = self.opacity.sample(rng);
        let rotation = self.rotation.sample(rng);
        let scale = self.scale.sample(rng);
        let speed = self.speed.sample(rng);
        let direction = self.direction.sample(rng);
        let lifespan = self.lifespan.sample(rng);
        let spin = self.spin.sample(rng);
        let end_scale = self.end_scale.map(|r| r.sample(rng));

        let opacity_rate = if self.fade { -opacity / lifespan } else { 0.0 };
        let scale_rate = end_scale.map_or(0.0, |end| (end - scale) / lifespan);

        Entity::new(pos, heading_to_velocity(speed, direction), lifespan, death)
            .with_color(color)
            .with_attr(Attr::Opacity, Interpolated::new(opacity, opacity_rate))
            .with_attr(Attr::Scale, Interpolated::new(scale, scale_rate))
            .with_attr(Attr::Rotation, Interpolated::new(rotation, spin))
    }
}
