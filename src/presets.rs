//! Ready-made characteristics and the demo scene
//!
//! Three looks: a slow grey smoke column, a fast horizontal stream and
//! click-spawned score bursts.

use glam::Vec2;

use crate::error::Result;
use crate::sim::{Cadence, Characteristics, ColorSpec, DeathPolicy, EmitterPool, SampleRange, Scene};

/// Emitter names used by [`demo_scene`]
pub const SMOKE: &str = "smoke";
pub const STREAM: &str = "stream";
pub const SCORE: &str = "score";

/// Grey puffs drifting up and to the left
pub fn smoke() -> Characteristics {
    Characteristics {
        color: ColorSpec::Fixed([102, 102, 102]),
        opacity: SampleRange::new(51.0, 153.0),
        rotation: SampleRange::fixed(0.0),
        scale: SampleRange::new(0.5, 1.5),
        speed: SampleRange::new(50.0, 100.0),
        direction: SampleRange::new(80.0, 140.0),
        lifespan: SampleRange::fixed(20.0),
        ..Default::default()
    }
}

/// Opaque white dots shooting right in a straight line
pub fn stream() -> Characteristics {
    Characteristics {
        color: ColorSpec::Fixed([255, 255, 255]),
        speed: SampleRange::fixed(300.0),
        direction: SampleRange::fixed(0.0),
        lifespan: SampleRange::fixed(4.0),
        ..Default::default()
    }
}

/// Floating score label: rises `distance` pixels over `life` seconds while
/// growing from `start_size` to `end_size` and fading out
pub fn score_burst(distance: f32, start_size: f32, end_size: f32, life: f32) -> Characteristics {
    Characteristics {
        color: ColorSpec::Random,
        scale: SampleRange::fixed(start_size),
        end_scale: Some(SampleRange::fixed(end_size)),
        speed: SampleRange::fixed(distance / life),
        direction: SampleRange::fixed(90.0),
        lifespan: SampleRange::fixed(life),
        fade: true,
        ..Default::default()
    }
}

/// The three demo emitters laid out for a `width` x `height` window
pub fn demo_scene(width: f32, height: f32, seed: u64) -> Result<Scene> {
    let mut scene = Scene::new(seed);

    let smoke_pool = EmitterPool::new(
        Vec2::new(width / 2.0, height / 6.0),
        smoke(),
        DeathPolicy::Age,
        scene.next_emitter_seed(),
    );
    scene.add_emitter(SMOKE, smoke_pool, Some(Cadence::per_second(60.0)?));

    let stream_pool = EmitterPool::new(
        Vec2::new(width / 6.0, height / 2.0),
        stream(),
        DeathPolicy::Age,
        scene.next_emitter_seed(),
    );
    scene.add_emitter(STREAM, stream_pool, Some(Cadence::per_second(6.0)?));

    let score_pool = EmitterPool::new(
        Vec2::new(width / 2.0, height / 2.0),
        score_burst(50.0, 15.0, 30.0, 1.0),
        DeathPolicy::fade_out(),
        scene.next_emitter_seed(),
    );
    scene.add_emitter(SCORE, score_pool, None);

    Ok(scene)
}
