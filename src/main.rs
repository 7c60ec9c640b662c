//! Ember FX headless demo
//!
//! Runs a scene through a fixed-timestep accumulator and logs what the
//! pools are doing. Usage: `ember-fx [scene.json] [seconds]`.
//! Set `RUST_LOG=debug` (or `trace`) for more detail.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ember_fx::consts::*;
use ember_fx::presets;
use ember_fx::sim::{Scene, tick};
use ember_fx::{Result, SceneConfig};

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;
/// Simulated render frame, deliberately not a multiple of `SIM_DT`
const FRAME_DT: f32 = 1.0 / 59.0;

/// Driver state: the scene plus the frame accumulator
struct Demo {
    scene: Scene,
    accumulator: f32,
    /// Fake clicks for the score emitter
    clicks: Pcg32,
    elapsed: f32,
    next_click: f32,
}

impl Demo {
    fn new(scene: Scene) -> Self {
        let clicks = Pcg32::seed_from_u64(scene.seed ^ 0x5eed);
        Self {
            scene,
            accumulator: 0.0,
            clicks,
            elapsed: 0.0,
            next_click: 0.0,
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) -> Result<()> {
        let dt = dt.min(0.1);
        self.accumulator += dt;
        self.elapsed += dt;

        if self.elapsed >= self.next_click && self.scene.emitter(presets::SCORE).is_some() {
            let pos = Vec2::new(
                self.clicks.random_range(0.0..WIDTH),
                self.clicks.random_range(0.0..HEIGHT),
            );
            let points = self.clicks.random_range(5..=10) * 10;
            self.scene.burst(presets::SCORE, pos, points.to_string())?;
            self.next_click += 0.5;
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let report = tick(&mut self.scene, SIM_DT)?;
            if report.expired > 0 {
                log::debug!("tick {}: {:?}", self.scene.time_ticks, report);
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        Ok(())
    }

    /// What a renderer would receive this frame
    fn log_frame(&self) {
        for emitter in self.scene.emitters() {
            let pool = &emitter.pool;
            let mean_opacity = if pool.is_empty() {
                0.0
            } else {
                pool.snapshots().map(|s| s.opacity).sum::<f32>() / pool.len() as f32
            };
            log::info!(
                "t={:5.2}s {:>8}: {:4} live, mean opacity {:6.1}",
                self.elapsed,
                emitter.name,
                pool.len(),
                mean_opacity
            );
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(path) => SceneConfig::load(path)?.build()?,
        None => presets::demo_scene(WIDTH, HEIGHT, 12345)?,
    };
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.0);

    let mut demo = Demo::new(scene);
    let frames = (seconds / FRAME_DT).ceil() as u32;
    for frame in 0..frames {
        demo.update(FRAME_DT)?;
        if frame % 59 == 58 {
            demo.log_frame();
        }
    }
    log::info!("Done: {} ticks, {} live", demo.scene.time_ticks, demo.scene.live_count());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ember FX (headless) starting...");

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
