//! Cosmetic level-up flourishes: expanding flashes and flying sparks.
//!
//! Effects are anchored at a normalized position and animate in pixel space,
//! so they look the same regardless of viewport size.

use rand::Rng;
use serde::{Deserialize, Serialize};

const LIFE_STEP: f32 = 0.05;
const BURST_GROWTH: f32 = 20.0;

/// A radially expanding, fading flash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUpBurst {
    /// Center in the unit square.
    pub origin: [f32; 2],
    /// Radius in pixels.
    pub radius: f32,
    /// Remaining life in `[0, 1]`.
    pub life: f32,
}

/// A spark flying outward from a level-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spark {
    /// Launch point in the unit square.
    pub origin: [f32; 2],
    /// Pixel offset from the launch point.
    pub offset: [f32; 2],
    /// Pixel velocity per frame.
    pub vel: [f32; 2],
    /// Remaining life in `[0, 1]`.
    pub life: f32,
}

/// All live level-up effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    /// Expanding flashes.
    pub bursts: Vec<LevelUpBurst>,
    /// Flying sparks.
    pub sparks: Vec<Spark>,
}

impl Effects {
    /// Emits one flash and `spark_count` sparks at `origin`.
    pub fn level_up(&mut self, origin: [f32; 2], spark_count: usize) {
        self.bursts.push(LevelUpBurst {
            origin,
            radius: 0.0,
            life: 1.0,
        });

        let mut rng = rand::rng();
        for _ in 0..spark_count {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(2.0..5.0);
            self.sparks.push(Spark {
                origin,
                offset: [0.0, 0.0],
                vel: [angle.cos() * speed, angle.sin() * speed],
                life: 1.0,
            });
        }
    }

    /// Advances every effect by one frame and drops the expired ones.
    pub fn tick(&mut self) {
        for burst in &mut self.bursts {
            burst.radius += BURST_GROWTH;
            burst.life -= LIFE_STEP;
        }
        for spark in &mut self.sparks {
            spark.offset[0] += spark.vel[0];
            spark.offset[1] += spark.vel[1];
            spark.life -= LIFE_STEP;
        }
        self.bursts.retain(|b| b.life > 0.0);
        self.sparks.retain(|s| s.life > 0.0);
    }

    /// Whether nothing is left to draw.
    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty() && self.sparks.is_empty()
    }
}
