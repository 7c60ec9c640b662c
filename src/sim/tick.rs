//! Frame step for a whole scene

use super::scene::Scene;
use crate::error::{Result, check_dt};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub spawned: usize,
    pub expired: usize,
    /// Live entities after the tick
    pub live: usize,
}

/// Advance the scene by `dt`: spawn whatever each cadence makes due, then
/// advance and compact every pool.
///
/// All-or-nothing: cadences and templates are checked for every emitter
/// before any of them is touched, so an error leaves the scene unchanged.
pub fn tick(scene: &mut Scene, dt: f32) -> Result<TickReport> {
    check_dt(dt)?;

    // (spawns due, cadence after this step) per emitter
    let mut plan = Vec::with_capacity(scene.emitters().len());
    for emitter in scene.emitters() {
        match emitter.cadence {
            Some(mut cadence) => {
                let due = cadence.due(dt)?;
                if due > 0 {
                    emitter.pool.characteristics().validate()?;
                }
                plan.push((due, Some(cadence)));
            }
            None => plan.push((0, None)),
        }
    }

    let mut report = TickReport::default();
    for (emitter, (due, cadence)) in scene.emitters_mut().iter_mut().zip(plan) {
        emitter.cadence = cadence;
        for _ in 0..due {
            emitter.pool.spawn()?;
        }
        report.spawned += due as usize;
        report.expired += emitter.pool.advance(dt)?;
    }

    scene.time_ticks += 1;
    report.live = scene.live_count();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::error::Error;
    use crate::sim::{Cadence, Characteristics, DeathPolicy, EmitterPool, SampleRange};
    use glam::Vec2;

    fn stream_scene(interval: f32, lifespan: f32) -> Scene {
        let chars = Characteristics {
            lifespan: SampleRange::fixed(lifespan),
            ..Default::default()
        };
        let mut scene = Scene::new(7);
        let pool = EmitterPool::new(Vec2::ZERO, chars, DeathPolicy::Age, scene.next_emitter_seed());
        scene.add_emitter("stream", pool, Some(Cadence::new(interval).unwrap()));
        scene
    }

    #[test]
    fn test_cadence_spawns() {
        let mut scene = stream_scene(0.5, 10.0);
        let report = tick(&mut scene, 1.0).unwrap();
        assert_eq!(report.spawned, 2);
        assert_eq!(report.expired, 0);
        assert_eq!(report.live, 2);
        assert_eq!(scene.time_ticks, 1);
    }

    #[test]
    fn test_steady_state() {
        // One spawn every 0.1s, each living 0.35s: never more than four alive
        let mut scene = stream_scene(0.1, 0.35);
        let mut total_spawned = 0;
        let mut total_expired = 0;
        for _ in 0..240 {
            let report = tick(&mut scene, SIM_DT).unwrap();
            total_spawned += report.spawned;
            total_expired += report.expired;
            assert!(report.live <= 4);
        }
        assert_eq!(total_spawned - total_expired, scene.live_count());
        assert!(total_expired > 0);
    }

    #[test]
    fn test_determinism() {
        let mut a = stream_scene(0.05, 1.0);
        let mut b = stream_scene(0.05, 1.0);
        for _ in 0..60 {
            tick(&mut a, SIM_DT).unwrap();
            tick(&mut b, SIM_DT).unwrap();
        }
        let pa: Vec<_> = a.snapshots().map(|s| s.position).collect();
        let pb: Vec<_> = b.snapshots().map(|s| s.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_bad_template_leaves_scene_untouched() {
        let mut scene = stream_scene(0.5, 10.0);
        let broken = Characteristics {
            speed: SampleRange::new(10.0, 1.0),
            ..Default::default()
        };
        let pool = EmitterPool::new(Vec2::ZERO, broken, DeathPolicy::Age, scene.next_emitter_seed());
        scene.add_emitter("broken", pool, Some(Cadence::new(0.5).unwrap()));
        let cadence_before = scene.emitter("stream").unwrap().cadence;

        let err = tick(&mut scene, 0.6).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { field: "speed", .. }));
        assert_eq!(scene.live_count(), 0);
        assert_eq!(scene.time_ticks, 0);
        assert_eq!(scene.emitter("stream").unwrap().cadence, cadence_before);

        // Once repaired the same step spawns exactly one from each emitter
        let fixed = Characteristics {
            speed: SampleRange::new(1.0, 10.0),
            ..Default::default()
        };
        scene.emitter_mut("broken").unwrap().pool.set_characteristics(fixed);
        let report = tick(&mut scene, 0.6).unwrap();
        assert_eq!(report.spawned, 2);
        assert_eq!(scene.emitter("stream").unwrap().pool.entities()[0].age(), 0.6);
    }

    #[test]
    fn test_backlog_leaves_scene_untouched() {
        let mut scene = stream_scene(0.5, 10.0);
        let pool = EmitterPool::new(Vec2::ZERO, Characteristics::default(), DeathPolicy::Age, 1);
        scene.add_emitter("flood", pool, Some(Cadence::new(1.0e-10).unwrap()));

        assert!(matches!(tick(&mut scene, 1.0), Err(Error::SpawnBacklog { .. })));
        assert_eq!(scene.live_count(), 0);
        assert_eq!(scene.time_ticks, 0);
    }

    #[test]
    fn test_bad_dt() {
        let mut scene = stream_scene(0.1, 1.0);
        assert!(matches!(tick(&mut scene, f32::NAN), Err(Error::InvalidTimestep(_))));
        assert_eq!(scene.time_ticks, 0);
    }
}
