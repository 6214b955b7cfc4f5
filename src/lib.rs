//! # Rift - animated particle field with a roaming creature
//!
//! A decorative background simulation: a drifting particle network, and a
//! "Rift Wraith" that appears through a portal once the user has been idle
//! for a while, eats particles, grows through visual tiers, and retreats
//! through the portal as soon as the user is active again.
//!
//! ## Features
//!
//! - Depth-scaled particle field with edge reflection and pointer parallax
//! - Proximity network lines via k-d tree queries
//! - Click-spawned particles with burst links to their neighbours
//! - Explicit spawn/roam/exit state machine driven by the scene clock
//! - Idle detection with post-spawn cooldown
//! - Observable, persisted reduced-motion preference
//!
//! ## Core Modules
//!
//! - [`simulation::scene`] - Per-frame orchestration
//! - [`simulation::field`] - Particle pool
//! - [`simulation::wraith`] - Creature lifecycle state machine
//! - [`simulation::creature`] - Seek, eat and grow behaviour
//! - [`simulation::portal`] - Portal animation
//! - [`simulation::idle`] - Idle and activity monitor

/// Error types for configuration and asset I/O.
pub mod error;

/// Core simulation logic and data structures.
pub mod simulation {
    /// Seek-and-eat behaviour, growth and tiers.
    pub mod creature;
    /// Level-up flashes and sparks.
    pub mod effects;
    /// Rolling log of recent events.
    pub mod event_log;
    /// Events collected during a step and applied afterwards.
    pub mod events;
    /// The particle pool.
    pub mod field;
    /// Geometric helpers for the unit square.
    pub mod geometric_utils;
    /// Idle and activity monitor.
    pub mod idle;
    /// Observable reduced-motion preference.
    pub mod motion;
    /// Simulation parameters.
    pub mod params;
    /// Portal animation.
    pub mod portal;
    /// Per-frame orchestration of the whole background.
    pub mod scene;
    /// k-d tree proximity queries.
    pub mod spatial;
    /// Viewport geometry and device classification.
    pub mod viewport;
    /// Creature lifecycle state machine.
    pub mod wraith;
}
