//! Linearly interpolated entity attributes
//!
//! Every visual attribute is a value plus a constant rate of change per
//! second. A fading particle has a negative opacity rate, a growing label a
//! positive scale rate, a spinning sprite a rotation rate.

use serde::{Deserialize, Serialize};

/// The interpolated attributes an entity carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attr {
    /// 0 (invisible) to 255 (opaque)
    Opacity,
    /// Display size multiplier (sprite scale or font size)
    Scale,
    /// Degrees, counter-clockwise
    Rotation,
}

impl Attr {
    pub const COUNT: usize = 3;
    pub const ALL: [Attr; Attr::COUNT] = [Attr::Opacity, Attr::Scale, Attr::Rotation];

    #[inline]
    fn index(self) -> usize {
        match self {
            Attr::Opacity => 0,
            Attr::Scale => 1,
            Attr::Rotation => 2,
        }
    }

    /// Whether the attribute cannot go below zero once an entity dies.
    /// Rotation wraps freely and has no floor.
    pub fn has_zero_floor(self) -> bool {
        matches!(self, Attr::Opacity | Attr::Scale)
    }
}

/// Current value and its rate of change per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Interpolated {
    pub value: f32,
    pub rate: f32,
}

impl Interpolated {
    pub fn new(value: f32, rate: f32) -> Self {
        Self { value, rate }
    }

    /// A value that never changes
    pub fn fixed(value: f32) -> Self {
        Self { value, rate: 0.0 }
    }

    #[inline]
    pub fn step(&mut self, dt: f32) {
        self.value += self.rate * dt;
    }
}

/// Attribute name to interpolated value mapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    slots: [Interpolated; Attr::COUNT],
}

impl Default for Attributes {
    /// Opaque, unit scale, unrotated, nothing changing
    fn default() -> Self {
        let mut attrs = Self {
            slots: [Interpolated::default(); Attr::COUNT],
        };
        attrs.set(Attr::Opacity, Interpolated::fixed(crate::consts::OPAQUE));
        attrs.set(Attr::Scale, Interpolated::fixed(1.0));
        attrs
    }
}

impl Attributes {
    #[inline]
    pub fn get(&self, attr: Attr) -> Interpolated {
        self.slots[attr.index()]
    }

    #[inline]
    pub fn value(&self, attr: Attr) -> f32 {
        self.slots[attr.index()].value
    }

    pub fn set(&mut self, attr: Attr, interp: Interpolated) {
        self.slots[attr.index()] = interp;
    }

    pub fn set_value(&mut self, attr: Attr, value: f32) {
        self.slots[attr.index()].value = value;
    }

    /// Apply every rate for `dt` seconds
    pub fn step(&mut self, dt: f32) {
        for slot in &mut self.slots {
            slot.step(dt);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attr, Interpolated)> + '_ {
        Attr::ALL.iter().map(move |&attr| (attr, self.get(attr)))
    }
}
