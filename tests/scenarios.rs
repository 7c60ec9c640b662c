//! End-to-end pool behaviour through the public API

use glam::Vec2;

use ember_fx::SceneConfig;
use ember_fx::sim::{
    Attr, Characteristics, DeathPolicy, EmitterPool, Interpolated, SampleRange, tick,
};

fn fixed_life(lifespan: f32) -> Characteristics {
    Characteristics {
        lifespan: SampleRange::fixed(lifespan),
        ..Default::default()
    }
}

#[test]
fn lifespan_two_seconds_expires_just_after() {
    let mut pool = EmitterPool::new(Vec2::ZERO, fixed_life(2.0), DeathPolicy::Age, 1);
    pool.spawn().unwrap();

    pool.advance(1.0).unwrap();
    pool.advance(1.0).unwrap();
    assert_eq!(pool.len(), 1);
    pool.advance(0.001).unwrap();
    assert!(pool.is_empty());
}

#[test]
fn straight_line_motion() {
    let chars = Characteristics {
        speed: SampleRange::fixed(100.0),
        direction: SampleRange::fixed(0.0),
        ..fixed_life(5.0)
    };
    let mut pool = EmitterPool::new(Vec2::ZERO, chars, DeathPolicy::Age, 2);
    pool.spawn().unwrap();
    pool.advance(1.0).unwrap();

    let snap = pool.snapshots().next().unwrap();
    assert!((snap.position - Vec2::new(100.0, 0.0)).length() < 1e-3);
}

#[test]
fn opacity_fades_over_lifespan() {
    let chars = Characteristics {
        opacity: SampleRange::fixed(255.0),
        fade: true,
        ..fixed_life(2.0)
    };
    let mut pool = EmitterPool::new(Vec2::ZERO, chars, DeathPolicy::fade_out(), 5);
    let mut e = pool.spawn().unwrap().clone();
    assert_eq!(e.attrs.get(Attr::Opacity), Interpolated::new(255.0, -127.5));

    e.advance(1.0).unwrap();
    assert!((e.snapshot().unwrap().opacity - 127.5).abs() < 1e-3);

    e.advance(1.0).unwrap();
    assert!(!e.is_alive());
    assert!(e.attrs.value(Attr::Opacity) <= 0.0);

    pool.advance(2.0).unwrap();
    assert!(pool.is_empty());
}

#[test]
fn non_positive_lifespan_never_spawns() {
    let mut pool = EmitterPool::new(Vec2::ZERO, fixed_life(0.0), DeathPolicy::Age, 6);
    assert!(pool.spawn().is_err());
    assert!(pool.is_empty());
}

#[test]
fn only_the_shortest_lived_is_removed() {
    let mut pool = EmitterPool::new(Vec2::ZERO, fixed_life(1.0), DeathPolicy::Age, 3);
    for life in [1.0, 2.0, 3.0] {
        pool.set_characteristics(fixed_life(life));
        pool.spawn().unwrap();
    }

    assert_eq!(pool.advance(1.5).unwrap(), 1);
    let mut lifespans: Vec<f32> = pool.entities().iter().map(|e| e.lifespan()).collect();
    lifespans.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(lifespans, vec![2.0, 3.0]);
    assert!(pool.entities().iter().all(|e| e.age() == 1.5));
}

#[test]
fn fixed_ranges_sample_exactly() {
    let chars = Characteristics {
        opacity: SampleRange::fixed(77.0),
        scale: SampleRange::fixed(0.25),
        ..fixed_life(1.0)
    };
    let mut pool = EmitterPool::new(Vec2::ZERO, chars, DeathPolicy::Age, 4);
    for _ in 0..10_000 {
        let e = pool.spawn().unwrap();
        assert_eq!(e.attrs.value(Attr::Opacity), 77.0);
        assert_eq!(e.attrs.value(Attr::Scale), 0.25);
        assert_eq!(e.lifespan(), 1.0);
    }
}

#[test]
fn scene_from_json_runs() {
    let json = r#"{
        "seed": 9,
        "emitters": [
            {
                "name": "stream",
                "anchor": [0.0, 0.0],
                "spawn_interval": 0.25,
                "characteristics": {
                    "color": { "Fixed": [255, 255, 255] },
                    "opacity": [255, 255], "rotation": [0, 0], "scale": [1, 1],
                    "speed": [300, 300], "direction": [0, 0], "lifespan": [0.6, 0.6]
                }
            },
            {
                "name": "score",
                "anchor": [0.0, 0.0],
                "death": { "Threshold": { "attr": "Opacity", "min": 1.0 } },
                "characteristics": {
                    "color": "Random",
                    "opacity": [255, 255], "rotation": [0, 0], "scale": [15, 15],
                    "speed": [50, 50], "direction": [90, 90], "lifespan": [1, 1],
                    "fade": true, "end_scale": [30, 30]
                }
            }
        ]
    }"#;
    let config = SceneConfig::from_json(json).unwrap();
    let mut scene = config.build().unwrap();
    scene.burst("score", Vec2::new(50.0, 50.0), "+60").unwrap();

    let mut spawned = 0;
    for _ in 0..120 {
        spawned += tick(&mut scene, 1.0 / 120.0).unwrap().spawned;
    }
    assert!((3..=4).contains(&spawned));
    // Streams live 0.6s, so at most three remain
    assert!(scene.emitter("stream").unwrap().pool.len() <= 3);
    assert!(scene.emitter("score").unwrap().pool.is_empty());

    let round_trip = SceneConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(round_trip, config);
}

#[test]
fn inverted_range_rejected_by_build() {
    let json = r#"{
        "emitters": [{
            "name": "bad",
            "anchor": [0.0, 0.0],
            "characteristics": {
                "opacity": [200, 100], "rotation": [0, 0], "scale": [1, 1],
                "speed": [1, 1], "direction": [0, 0], "lifespan": [1, 1]
            }
        }]
    }"#;
    let config = SceneConfig::from_json(json).unwrap();
    assert!(config.build().is_err());
}
