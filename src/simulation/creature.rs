//! The Rift Wraith: a creature that hunts particles and grows.
//!
//! The creature scans for the nearest particle on a throttle, walks toward it
//! at a fixed speed and eats it once inside a hitbox proportional to its
//! drawn size. Growth is capped and only ever increases; the visual tier is a
//! step function of size.

use std::collections::VecDeque;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::field::{ParticleField, ParticleId};
use super::geometric_utils::approach_angle;
use super::params::Params;
use super::viewport::Viewport;

const TRAIL_DECAY: f32 = 0.04;
const PULSE_DECAY: f32 = 0.04;

/// A fading sample of where the creature has been.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    /// Position in the unit square.
    pub pos: [f32; 2],
    /// Remaining life in `[0, 1]`.
    pub life: f32,
}

/// Outcome of eating one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meal {
    /// The particle that was consumed.
    pub particle: ParticleId,
    /// Size after the meal.
    pub size: f32,
    /// Tier after the meal.
    pub tier: usize,
    /// Whether the meal crossed a tier threshold.
    pub tier_up: bool,
}

/// Per-frame inputs shared by the creature and the wraith state machine.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Scene time in seconds.
    pub now: f32,
    /// Whether the creature may move.
    pub motion_enabled: bool,
    /// Current viewport, for the on-screen hitbox.
    pub viewport: Viewport,
}

/// The roaming creature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Position in the unit square.
    pub pos: Array1<f32>,
    /// Drawn half-size in pixels.
    pub size: f32,
    /// Visual tier, zero based.
    pub tier: usize,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Level-up pulse, decays to 0.
    pub pulse: f32,
    /// Smoothed facing angle in radians.
    pub facing: f32,
    /// Particle currently hunted.
    pub target: Option<ParticleId>,
    /// Scene time of the next nearest-target scan.
    pub next_seek_at: f32,
    /// Recent positions, oldest first.
    pub trail: VecDeque<TrailPoint>,
}

/// Tier reached at `size`: the number of thresholds at or below it, capped
/// at the last available tier.
pub fn tier_for_size(size: f32, thresholds: &[f32], tier_count: usize) -> usize {
    let reached = thresholds.iter().filter(|&&t| size >= t).count();
    reached.min(tier_count.saturating_sub(1))
}

impl Creature {
    /// Creates a fresh, invisible creature at `(x, y)` with the minimum size.
    pub fn spawn(x: f32, y: f32, params: &Params) -> Self {
        Self {
            pos: Array1::from_vec(vec![x, y]),
            size: params.min_size,
            tier: 0,
            opacity: 0.0,
            pulse: 0.0,
            facing: 0.0,
            target: None,
            next_seek_at: 0.0,
            trail: VecDeque::with_capacity(params.trail_len),
        }
    }

    /// Hitbox radius in unit-square distance, scaled with the drawn size.
    pub fn eat_radius(&self, viewport: &Viewport, params: &Params) -> f32 {
        self.size * params.eat_radius_factor / viewport.min_dim()
    }

    /// Grows by one meal and recomputes the tier.
    ///
    /// Returns `true` when the tier increased.
    pub fn eat(&mut self, params: &Params) -> bool {
        let previous = self.tier;
        self.size = (self.size + params.growth_per_eat).min(params.max_size);
        self.tier = tier_for_size(self.size, &params.tier_thresholds, params.tier_count).max(previous);
        if self.tier > previous {
            self.pulse = 1.0;
            true
        } else {
            false
        }
    }

    /// Hunts the nearest particle for one frame.
    ///
    /// Does nothing on an empty field. Movement is suppressed when motion is
    /// disabled, but a target already inside the hitbox is still eaten.
    pub fn forage(
        &mut self,
        field: &mut ParticleField,
        ctx: &FrameContext,
        params: &Params,
    ) -> Option<Meal> {
        if field.is_empty() {
            self.target = None;
            return None;
        }

        let mut index = self.target.and_then(|id| field.index_of(id));
        if index.is_none() || ctx.now >= self.next_seek_at {
            index = field.nearest(&self.pos).map(|(i, _)| i);
            self.target = index.and_then(|i| field.get(i)).map(|p| p.id);
            self.next_seek_at = ctx.now + params.seek_interval;
        }

        let index = index?;
        let target = field.get(index)?;
        let dx = target.pos[0] - self.pos[0];
        let dy = target.pos[1] - self.pos[1];
        let len = dx.hypot(dy);

        if len <= self.eat_radius(&ctx.viewport, params) {
            let eaten = field.remove_at(index)?;
            self.target = None;
            self.next_seek_at = ctx.now;
            let tier_up = self.eat(params);
            tracing::debug!(particle = eaten.id, size = self.size, tier = self.tier, "creature ate");
            return Some(Meal {
                particle: eaten.id,
                size: self.size,
                tier: self.tier,
                tier_up,
            });
        }

        if ctx.motion_enabled && len > 0.0 {
            self.step_toward(dx, dy, len, params);
        }
        None
    }

    fn step_toward(&mut self, dx: f32, dy: f32, len: f32, params: &Params) {
        let step = params.creature_speed.min(len);
        let previous = [self.pos[0], self.pos[1]];
        self.pos[0] += dx / len * step;
        self.pos[1] += dy / len * step;

        self.trail.push_back(TrailPoint {
            pos: previous,
            life: 1.0,
        });
        while self.trail.len() > params.trail_len {
            self.trail.pop_front();
        }

        self.facing = approach_angle(self.facing, dy.atan2(dx), params.turn_rate);
    }

    /// Raises opacity by `step`, saturating at 1.
    pub fn fade_in(&mut self, step: f32) {
        self.opacity = (self.opacity + step).min(1.0);
    }

    /// Lowers opacity by `step`. Returns `true` once fully transparent.
    pub fn fade_out(&mut self, step: f32) -> bool {
        self.opacity = (self.opacity - step).max(0.0);
        self.opacity <= 0.0
    }

    /// Wiggle rotation superimposed on the facing angle at scene time `time`.
    pub fn wiggle(time: f32) -> f32 {
        (time * 6.0).sin() * 0.15
    }

    /// Drawn rotation: the smoothed facing plus the idle wiggle.
    pub fn heading(&self, time: f32) -> f32 {
        self.facing + Self::wiggle(time)
    }

    /// Per-frame cosmetic decay of the pulse and trail.
    pub fn decay(&mut self) {
        self.pulse = (self.pulse - PULSE_DECAY).max(0.0);
        for point in &mut self.trail {
            point.life -= TRAIL_DECAY;
        }
        self.trail.retain(|p| p.life > 0.0);
    }
}
