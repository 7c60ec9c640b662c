//! Fixed-interval spawn scheduling

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SPAWNS_PER_STEP;
use crate::error::{Error, Result, check_dt};

/// Turns elapsed time into a number of spawns, one per `interval` seconds.
/// Leftover time carries into the next call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cadence {
    interval: f32,
    accumulator: f32,
}

impl Cadence {
    pub fn new(interval: f32) -> Result<Self> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(Error::InvalidInterval(interval));
        }
        Ok(Self {
            interval,
            accumulator: 0.0,
        })
    }

    /// `rate` spawns per second
    pub fn per_second(rate: f32) -> Result<Self> {
        Self::new(1.0 / rate)
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Number of spawns due after `dt` more seconds.
    ///
    /// Fails without consuming any time if more than
    /// `MAX_SPAWNS_PER_STEP` would be released at once.
    pub fn due(&mut self, dt: f32) -> Result<u32> {
        check_dt(dt)?;
        let mut acc = self.accumulator + dt;
        let mut count = (acc / self.interval).floor();
        if count > MAX_SPAWNS_PER_STEP as f32 {
            return Err(Error::SpawnBacklog {
                due: count,
                limit: MAX_SPAWNS_PER_STEP,
            });
        }

        // Division rounding can land one interval off either way
        acc -= count * self.interval;
        if acc < 0.0 {
            count -= 1.0;
            acc += self.interval;
        } else if acc >= self.interval {
            count += 1.0;
            acc -= self.interval;
        }

        self.accumulator = acc;
        Ok(count as u32)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
