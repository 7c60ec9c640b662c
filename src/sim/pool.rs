//! Emitter pools
//!
//! A pool owns every live entity it spawned. Each frame it advances all of
//! them, then drops the dead in a second pass so no entity is skipped or
//! visited twice.
//!
//! Pools have no capacity ceiling. Callers control spawn cadence; spawning
//! faster than entities die grows the pool without bound.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{DeathPolicy, Entity, Snapshot};
use super::template::Characteristics;
use crate::error::{Result, check_dt};

/// Spawns entities from a template at an anchor point and retires them
#[derive(Debug, Clone)]
pub struct EmitterPool {
    anchor: Vec2,
    characteristics: Characteristics,
    death: DeathPolicy,
    rng: Pcg32,
    entities: Vec<Entity>,
}

impl EmitterPool {
    pub fn new(anchor: Vec2, characteristics: Characteristics, death: DeathPolicy, seed: u64) -> Self {
        Self {
            anchor,
            characteristics,
            death,
            rng: Pcg32::seed_from_u64(seed),
            entities: Vec::new(),
        }
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    /// Applies to entities spawned from now on
    pub fn set_characteristics(&mut self, characteristics: Characteristics) {
        self.characteristics = characteristics;
    }

    pub fn death_policy(&self) -> DeathPolicy {
        self.death
    }

    /// Spawn one entity at the anchor
    pub fn spawn(&mut self) -> Result<&Entity> {
        self.spawn_at(self.anchor)
    }

    /// Spawn one entity at an explicit position
    pub fn spawn_at(&mut self, pos: Vec2) -> Result<&Entity> {
        let entity = self.sample(pos)?;
        Ok(self.push(entity))
    }

    /// Spawn a floating label at `pos`
    pub fn spawn_labeled_at(&mut self, pos: Vec2, label: impl Into<String>) -> Result<&Entity> {
        let entity = self.sample(pos)?.with_label(label);
        Ok(self.push(entity))
    }

    fn sample(&mut self, pos: Vec2) -> Result<Entity> {
        if let Err(err) = self.characteristics.validate() {
            log::debug!("Rejected spawn: {}", err);
            return Err(err);
        }
        Ok(self.characteristics.instantiate(&mut self.rng, pos, self.death))
    }

    fn push(&mut self, entity: Entity) -> &Entity {
        let idx = self.entities.len();
        self.entities.push(entity);
        &self.entities[idx]
    }

    /// Advance every live entity by `dt`, then drop the ones that died.
    /// Returns how many were removed.
    pub fn advance(&mut self, dt: f32) -> Result<usize> {
        check_dt(dt)?;
        if dt == 0.0 {
            return Ok(0);
        }

        for entity in &mut self.entities {
            entity.advance(dt)?;
        }

        let before = self.entities.len();
        self.entities.retain(Entity::is_alive);
        let removed = before - self.entities.len();
        if removed > 0 {
            log::trace!("Retired {} entities, {} live", removed, self.entities.len());
        }
        Ok(removed)
    }

    /// Live entities, in no particular order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Renderable state of every live entity
    pub fn snapshots(&self) -> impl Iterator<Item = Snapshot<'_>> + '_ {
        self.entities.iter().filter_map(Entity::snapshot)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Release every live entity
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}
