//! The ambient particle field and the creature's food supply.
//!
//! Particles drift in normalized viewport coordinates, bounce off the edges of
//! the unit square and are drawn with a depth-dependent size, opacity and
//! parallax. The pool is kept at a target population: eaten particles are
//! replaced a few per frame, click-spawned ones evict a random slot.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometric_utils::{distance_sq, reflect_unit_mut};
use super::spatial;

/// Stable identifier of a particle, unaffected by removals from the pool.
pub type ParticleId = u64;

/// A single drifting point in the background field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Stable identifier.
    pub id: ParticleId,
    /// Position in the unit square.
    pub pos: Array1<f32>,
    /// Velocity in viewport fractions per second.
    pub vel: Array1<f32>,
    /// Depth in `[0, 1]`; nearer particles are larger, faster and brighter.
    pub z: f32,
    /// Radius in pixels.
    pub radius: f32,
    /// Base opacity.
    pub alpha: f32,
    /// Size emphasis after a click spawn, decays to 0.
    pub pulse: f32,
    /// Link-line emphasis after a click spawn, decays to 0.
    pub burst: f32,
    /// Particles this one draws burst lines to while `burst > 0`.
    pub links: Vec<ParticleId>,
}

impl Particle {
    /// Creates a particle at a random position with random depth.
    pub fn new_random(id: ParticleId, base_speed: f32) -> Self {
        let pos = Array1::random(2, Uniform::new(0., 1.));
        Self::with_depth(id, pos, rand::random::<f32>().powi(2), base_speed)
    }

    /// Creates a particle at `pos` with depth `z` and randomized motion and look.
    pub fn with_depth(id: ParticleId, pos: Array1<f32>, z: f32, base_speed: f32) -> Self {
        let mut rng = rand::rng();
        let depth_speed = base_speed * (0.5 + z);
        let vel = Array1::from_vec(vec![
            (rng.random::<f32>() - 0.5) * depth_speed,
            (rng.random::<f32>() - 0.5) * depth_speed,
        ]);

        Self {
            id,
            pos,
            vel,
            z,
            radius: (0.9 + rng.random::<f32>() * 1.3) * (0.3 + z),
            alpha: 0.35 + rng.random::<f32>() * 0.45 * (0.3 + z),
            pulse: 0.0,
            burst: 0.0,
            links: Vec::new(),
        }
    }

    /// Integrates the velocity over `dt` and bounces off the unit square.
    pub fn advance(&mut self, dt: f32) {
        let displacement = &self.vel * dt;
        self.pos += &displacement;
        reflect_unit_mut(&mut self.pos, &mut self.vel);
    }

    /// Fades the click-spawn emphasis. Deeper particles settle faster.
    pub fn decay(&mut self, dt: f32) {
        let rate = 0.5 + self.z;
        self.pulse = (self.pulse - 1.5 * rate * dt).max(0.0);
        self.burst = (self.burst - rate * dt).max(0.0);
        if self.burst <= 0.0 && !self.links.is_empty() {
            self.links.clear();
        }
    }
}


/// A particle mapped to pixel coordinates for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedParticle {
    /// Identifier of the source particle.
    pub id: ParticleId,
    /// Horizontal pixel position.
    pub px: f32,
    /// Vertical pixel position.
    pub py: f32,
    /// Drawn radius in pixels, including pulse emphasis.
    pub radius: f32,
    /// Drawn opacity.
    pub alpha: f32,
    /// Depth of the source particle.
    pub z: f32,
    /// Burst emphasis of the source particle.
    pub burst: f32,
}

/// Fixed-target pool of particles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
    target_count: usize,
    base_speed: f32,
    next_id: ParticleId,
}

impl ParticleField {
    /// Creates a full field of `target_count` random particles.
    pub fn new(target_count: usize, base_speed: f32) -> Self {
        let mut field = Self::empty(target_count, base_speed);
        field.replenish(target_count);
        field
    }

    /// Creates a field with a target but no particles yet.
    pub fn empty(target_count: usize, base_speed: f32) -> Self {
        Self {
            particles: Vec::with_capacity(target_count),
            target_count,
            base_speed,
            next_id: 0,
        }
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no live particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Population the field replenishes toward.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Iterates over live particles.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Particle at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Current storage index of the particle with `id`.
    pub fn index_of(&self, id: ParticleId) -> Option<usize> {
        self.particles.iter().position(|p| p.id == id)
    }

    /// Changes the target population, dropping any surplus immediately.
    pub fn set_target_count(&mut self, target_count: usize) {
        self.target_count = target_count;
        self.particles.truncate(target_count);
    }

    /// Moves every particle when `motion_enabled` and fades click emphasis always.
    pub fn advance(&mut self, dt: f32, motion_enabled: bool) {
        for particle in &mut self.particles {
            if motion_enabled {
                particle.advance(dt);
            }
            particle.decay(dt);
        }
    }

    /// Maps particles to pixel space.
    ///
    /// `parallax` is the smoothed pointer position in the unit square; each
    /// particle is displaced by `(pointer - 0.5) * z * strength`.
    pub fn project(
        &self,
        width: f32,
        height: f32,
        parallax: Option<([f32; 2], f32)>,
    ) -> Vec<ProjectedParticle> {
        self.particles
            .iter()
            .map(|p| {
                let (ox, oy) = match parallax {
                    Some(([mx, my], strength)) => {
                        ((mx - 0.5) * p.z * strength, (my - 0.5) * p.z * strength)
                    }
                    None => (0.0, 0.0),
                };
                ProjectedParticle {
                    id: p.id,
                    px: (p.pos[0] + ox) * width,
                    py: (p.pos[1] + oy) * height,
                    radius: p.radius * (1.0 + p.pulse * 0.8),
                    alpha: (0.75 * p.alpha + 0.25 + p.pulse * 0.3).min(1.0),
                    z: p.z,
                    burst: p.burst,
                }
            })
            .collect()
    }

    /// Index of the particle nearest to `point` and its squared distance.
    pub fn nearest(&self, point: &Array1<f32>) -> Option<(usize, f32)> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| (i, distance_sq(&p.pos, point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Removes the particle at `index` in constant time.
    ///
    /// The last particle takes over the freed slot.
    pub fn remove_at(&mut self, index: usize) -> Option<Particle> {
        if index < self.particles.len() {
            Some(self.particles.swap_remove(index))
        } else {
            None
        }
    }

    /// Adds at most `batch` random particles without exceeding the target.
    ///
    /// Returns the number of particles added.
    pub fn replenish(&mut self, batch: usize) -> usize {
        let missing = self.target_count.saturating_sub(self.particles.len());
        let count = missing.min(batch);
        for _ in 0..count {
            let id = self.allocate_id();
            self.particles.push(Particle::new_random(id, self.base_speed));
        }
        count
    }

    /// Inserts a highlighted particle at `(x, y)`, evicting a random one when
    /// the pool is at its target.
    ///
    /// The newcomer links to its `link_count` nearest neighbours for a short
    /// burst-line flourish.
    pub fn spawn_at(&mut self, x: f32, y: f32, link_count: usize) -> ParticleId {
        if !self.particles.is_empty() && self.particles.len() >= self.target_count {
            let evicted = rand::rng().random_range(0..self.particles.len());
            self.particles.swap_remove(evicted);
        }

        let pos = Array1::from_vec(vec![x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)]);
        let links = spatial::nearest_indices(
            &self.particles,
            |p| [p.pos[0], p.pos[1]],
            [pos[0], pos[1]],
            link_count,
        )
        .into_iter()
        .map(|i| self.particles[i].id)
        .collect();

        let id = self.allocate_id();
        let mut particle = Particle::with_depth(id, pos, rand::random::<f32>().powi(2), self.base_speed);
        particle.radius *= 1.6;
        particle.alpha = 0.8;
        particle.pulse = 1.0;
        particle.burst = 1.0;
        particle.links = links;
        self.particles.push(particle);
        id
    }

    fn allocate_id(&mut self) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
