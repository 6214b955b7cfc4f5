use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RiftError, RiftResult};

/// Tunable constants for the particle field, portal, creature and idle monitor.
///
/// Per-frame quantities (fade steps, spin, creature speed) are applied once per
/// rendered frame. Durations are in seconds of scene time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Target particle population on desktop viewports.
    pub n_particles: usize,
    /// Target particle population on compact (touch or narrow) viewports.
    pub n_particles_compact: usize,
    /// Maximum pixel distance for drawing a proximity line on desktop.
    pub connection_range: f32,
    /// Maximum pixel distance for drawing a proximity line on compact viewports.
    pub connection_range_compact: f32,
    /// Base particle speed in viewport fractions per second, before depth scaling.
    pub particle_speed: f32,
    /// Particles added per frame while the population is below target.
    pub replenish_batch: usize,
    /// Number of nearest neighbours a click-spawned particle links to.
    pub click_link_count: usize,
    /// Parallax displacement at full depth for a pointer at the viewport edge.
    pub parallax_strength: f32,
    /// Fraction of the pointer error closed per frame by the parallax easing.
    pub pointer_smoothing: f32,
    /// Viewport width in pixels below which the viewport counts as compact.
    pub compact_breakpoint: f32,

    /// Portal radius in pixels once fully open.
    pub portal_radius: f32,
    /// Opacity change per frame while the portal opens or closes.
    pub portal_fade_step: f32,
    /// Rotation per frame in radians.
    pub portal_spin: f32,

    /// Creature size on spawn, in pixels.
    pub min_size: f32,
    /// Creature size cap, in pixels.
    pub max_size: f32,
    /// Size gained per eaten particle.
    pub growth_per_eat: f32,
    /// Ascending sizes at which the creature advances one tier.
    pub tier_thresholds: Vec<f32>,
    /// Number of visual tiers (sprites) available.
    pub tier_count: usize,
    /// Creature step per frame in viewport fractions.
    pub creature_speed: f32,
    /// Eat radius as a fraction of the creature's on-screen size.
    pub eat_radius_factor: f32,
    /// Seconds between nearest-target scans.
    pub seek_interval: f32,
    /// Opacity change per frame while the creature fades in or out.
    pub creature_fade_step: f32,
    /// Fraction of the angular error closed per frame when turning.
    pub turn_rate: f32,
    /// Number of trail samples kept behind the creature.
    pub trail_len: usize,
    /// Sparks emitted on a tier increase.
    pub spark_count: usize,

    /// Seconds without activity before the creature is summoned.
    pub idle_timeout: f32,
    /// Seconds after a spawn begins during which the idle timer cannot re-arm.
    pub spawn_cooldown: f32,
    /// Seconds the portal stays open before the creature steps out.
    pub spawn_open_delay: f32,
    /// Seconds after the creature appears before the spawn portal closes.
    pub portal_close_delay: f32,

    /// Directory holding `creature_<n>.png` and `portal.png`.
    pub asset_dir: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n_particles: 160,
            n_particles_compact: 70,
            connection_range: 130.0,
            connection_range_compact: 100.0,
            particle_speed: 0.021,
            replenish_batch: 2,
            click_link_count: 3,
            parallax_strength: 0.12,
            pointer_smoothing: 0.05,
            compact_breakpoint: 768.0,

            portal_radius: 82.0,
            portal_fade_step: 0.05,
            portal_spin: 0.01,

            min_size: 28.0,
            max_size: 160.0,
            growth_per_eat: 2.2,
            tier_thresholds: vec![36.0, 52.0, 70.0, 92.0, 118.0],
            tier_count: 6,
            creature_speed: 0.0025,
            eat_radius_factor: 0.6,
            seek_interval: 0.08,
            creature_fade_step: 0.05,
            turn_rate: 0.08,
            trail_len: 28,
            spark_count: 16,

            idle_timeout: 60.0,
            spawn_cooldown: 5.0,
            spawn_open_delay: 0.4,
            portal_close_delay: 1.2,

            asset_dir: "assets/creature".to_string(),
        }
    }
}

impl Params {
    /// Checks that the parameters describe a consistent simulation.
    pub fn validate(&self) -> RiftResult<()> {
        if self.n_particles == 0 || self.n_particles_compact == 0 {
            return Err(RiftError::invalid_params("particle targets must be positive"));
        }
        if self.min_size <= 0.0 || self.min_size > self.max_size {
            return Err(RiftError::invalid_params(format!(
                "min_size {} must be positive and not above max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.tier_count == 0 {
            return Err(RiftError::invalid_params("tier_count must be at least 1"));
        }
        if self.tier_thresholds.is_empty() {
            return Err(RiftError::invalid_params("tier_thresholds must not be empty"));
        }
        if self.tier_thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RiftError::invalid_params(
                "tier_thresholds must be strictly ascending",
            ));
        }
        let timers = [
            ("idle_timeout", self.idle_timeout),
            ("seek_interval", self.seek_interval),
            ("portal_fade_step", self.portal_fade_step),
            ("creature_fade_step", self.creature_fade_step),
        ];
        if let Some((name, value)) = timers.iter().find(|(_, v)| *v <= 0.0) {
            return Err(RiftError::invalid_params(format!(
                "{name} must be positive, got {value}"
            )));
        }
        let rates = [
            ("eat_radius_factor", self.eat_radius_factor),
            ("creature_speed", self.creature_speed),
            ("growth_per_eat", self.growth_per_eat),
        ];
        if let Some((name, value)) = rates.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(RiftError::invalid_params(format!(
                "{name} must be non-negative, got {value}"
            )));
        }
        Ok(())
    }

    /// Population target for a viewport class.
    pub fn target_particles(&self, compact: bool) -> usize {
        if compact {
            self.n_particles_compact
        } else {
            self.n_particles
        }
    }

    /// Proximity-line range in pixels for a viewport class.
    pub fn link_range(&self, compact: bool) -> f32 {
        if compact {
            self.connection_range_compact
        } else {
            self.connection_range
        }
    }

    /// Path of the sprite for `tier` (zero based).
    pub fn creature_sprite_path(&self, tier: usize) -> String {
        format!("{}/creature_{}.png", self.asset_dir, tier + 1)
    }

    /// Path of the portal sprite.
    pub fn portal_sprite_path(&self) -> String {
        format!("{}/portal.png", self.asset_dir)
    }

    /// Saves the parameters as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> RiftResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> RiftResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from `path`, falling back to defaults when the file is
    /// missing or unusable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(params) => {
                tracing::info!(path = %path.display(), "loaded params");
                params
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring params file");
                Self::default()
            }
        }
    }
}
