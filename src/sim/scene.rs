//! A set of named emitters driven by one frame loop

use glam::Vec2;

use super::cadence::Cadence;
use super::entity::Snapshot;
use super::pool::EmitterPool;
use crate::error::{Error, Result};

/// A pool plus the cadence it spawns on. Emitters without a cadence only
/// spawn through [`Scene::burst`].
#[derive(Debug, Clone)]
pub struct Emitter {
    pub name: String,
    pub pool: EmitterPool,
    pub cadence: Option<Cadence>,
}

/// Every emitter of a running demo
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Run seed, per-emitter seeds derive from it
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    emitters: Vec<Emitter>,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            emitters: Vec::new(),
        }
    }

    /// Seed for the next emitter added, so each pool gets its own stream
    pub fn next_emitter_seed(&self) -> u64 {
        self.seed.wrapping_add(self.emitters.len() as u64)
    }

    pub fn add_emitter(&mut self, name: impl Into<String>, pool: EmitterPool, cadence: Option<Cadence>) {
        let name = name.into();
        log::debug!("Added emitter '{}' at {:?}", name, pool.anchor());
        self.emitters.push(Emitter { name, pool, cadence });
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub(crate) fn emitters_mut(&mut self) -> &mut [Emitter] {
        &mut self.emitters
    }

    pub fn emitter(&self, name: &str) -> Option<&Emitter> {
        self.emitters.iter().find(|e| e.name == name)
    }

    pub fn emitter_mut(&mut self, name: &str) -> Option<&mut Emitter> {
        self.emitters.iter_mut().find(|e| e.name == name)
    }

    /// Spawn one floating label from the named emitter at `pos`
    pub fn burst(&mut self, name: &str, pos: Vec2, label: impl Into<String>) -> Result<()> {
        let emitter = self
            .emitter_mut(name)
            .ok_or_else(|| Error::UnknownEmitter(name.to_string()))?;
        emitter.pool.spawn_labeled_at(pos, label)?;
        Ok(())
    }

    /// Live entities across all emitters
    pub fn live_count(&self) -> usize {
        self.emitters.iter().map(|e| e.pool.len()).sum()
    }

    /// Everything to draw this frame, emitter by emitter
    pub fn snapshots(&self) -> impl Iterator<Item = Snapshot<'_>> + '_ {
        self.emitters.iter().flat_map(|e| e.pool.snapshots())
    }

    pub fn clear(&mut self) {
        for emitter in &mut self.emitters {
            emitter.pool.clear();
            if let Some(cadence) = &mut emitter.cadence {
                cadence.reset();
            }
        }
    }
}
