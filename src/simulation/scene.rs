//! The whole animated background: particles, creature, idle monitor.
//!
//! A [`Scene`] is stepped once per displayed frame. Within a step the order
//! is fixed: pending resize, clock, idle deadline, particle motion, wraith,
//! replenishment, pointer easing, then event bookkeeping. Drawing reads the
//! scene afterwards, so it always sees the state of the current frame.

use super::creature::FrameContext;
use super::event_log::EventLog;
use super::events::{self, EventQueue, SceneEvent};
use super::field::ParticleField;
use super::idle::{ActivityKind, ActivityResponse, IdleMonitor};
use super::params::Params;
use super::viewport::Viewport;
use super::wraith::{self, Trigger, Wraith};

/// Smoothed pointer position used for the parallax offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Where the pointer is.
    pub target: [f32; 2],
    /// Where the parallax currently looks.
    pub smoothed: [f32; 2],
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            target: [0.5, 0.5],
            smoothed: [0.5, 0.5],
        }
    }
}

impl Parallax {
    /// Closes `rate` of the gap between the smoothed and target positions.
    pub fn ease(&mut self, rate: f32) {
        for axis in 0..2 {
            self.smoothed[axis] += (self.target[axis] - self.smoothed[axis]) * rate;
        }
    }
}

/// The animated background.
#[derive(Debug)]
pub struct Scene {
    /// Ambient particles.
    pub field: ParticleField,
    /// Creature, portal and effects.
    pub wraith: Wraith,
    /// Idle and activity tracking.
    pub idle: IdleMonitor,
    /// Pointer parallax.
    pub parallax: Parallax,
    /// Recent events for the overlay.
    pub event_log: EventLog,
    /// Events applied during the last step.
    pub last_events: Vec<SceneEvent>,
    /// Current viewport.
    pub viewport: Viewport,
    /// Scene time in seconds.
    pub time: f32,
    motion_enabled: bool,
    compact: bool,
    pending_resize: Option<Viewport>,
}

impl Scene {
    /// Creates a scene with a full particle field for `viewport`.
    ///
    /// The idle monitor starts armed unless motion is off or the viewport is
    /// compact.
    pub fn new(params: &Params, viewport: Viewport, motion_enabled: bool) -> Self {
        let compact = viewport.is_compact(params.compact_breakpoint);
        let mut scene = Self {
            field: ParticleField::new(params.target_particles(compact), params.particle_speed),
            wraith: Wraith::new(params),
            idle: IdleMonitor::new(params.idle_timeout, params.spawn_cooldown),
            parallax: Parallax::default(),
            event_log: EventLog::default(),
            last_events: Vec::new(),
            viewport,
            time: 0.0,
            motion_enabled,
            compact,
            pending_resize: None,
        };
        scene.sync_idle_monitor();
        scene
    }

    /// Whether the animation runs.
    pub fn motion_enabled(&self) -> bool {
        self.motion_enabled
    }

    /// Whether the viewport counts as a touch or narrow device.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Turns animation on or off.
    ///
    /// Off freezes particles and creature in place and cancels the idle
    /// deadline; on resumes both and arms a fresh deadline.
    pub fn set_motion_enabled(&mut self, enabled: bool) {
        if self.motion_enabled == enabled {
            return;
        }
        self.motion_enabled = enabled;
        self.sync_idle_monitor();
        if !enabled {
            self.parallax = Parallax::default();
        }
    }

    /// Records a new viewport, applied at the start of the next step.
    ///
    /// Repeated requests within one frame collapse into the last one.
    pub fn request_resize(&mut self, viewport: Viewport) {
        self.pending_resize = (viewport != self.viewport).then_some(viewport);
    }

    /// Advances the scene by one frame of `dt` seconds.
    pub fn step(&mut self, params: &Params, dt: f32) {
        self.last_events.clear();
        let mut queue = EventQueue::new();
        if let Some(viewport) = self.pending_resize.take() {
            self.apply_resize(params, viewport, &mut queue);
        }
        self.time += dt;

        if !self.motion_enabled {
            self.field.advance(dt, false);
            events::apply_events(self, queue);
            return;
        }

        if self.idle.poll(self.time) {
            let [x, y] = wraith::random_spawn_point();
            self.wraith
                .transition(Trigger::Spawn { x, y }, self.time, params, &mut queue);
        }

        self.field.advance(dt, true);

        let ctx = FrameContext {
            now: self.time,
            motion_enabled: true,
            viewport: self.viewport,
        };
        self.wraith.step(&mut self.field, &ctx, params, &mut queue);
        self.field.replenish(params.replenish_batch);

        if !self.is_compact() {
            self.parallax.ease(params.pointer_smoothing);
        }

        events::apply_events(self, queue);
    }

    /// Handles one user activity signal.
    ///
    /// A roaming creature is sent away within this call; otherwise the idle
    /// deadline restarts.
    pub fn on_activity(&mut self, params: &Params, kind: ActivityKind) -> ActivityResponse {
        let response = self.idle.on_activity(self.time, self.wraith.is_roaming());
        if response == ActivityResponse::RequestExit {
            tracing::debug!(?kind, "activity while roaming");
            let mut queue = EventQueue::new();
            self.wraith
                .transition(Trigger::Exit, self.time, params, &mut queue);
            events::apply_events(self, queue);
        }
        response
    }

    /// Moves the parallax target to a pixel position (desktop only).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if self.motion_enabled && !self.is_compact() {
            self.parallax.target = self.viewport.to_unit(x, y);
        }
    }

    /// Places a highlighted particle at a clicked pixel position (desktop only).
    pub fn on_click(&mut self, params: &Params, x: f32, y: f32) {
        if self.is_compact() {
            return;
        }
        let [ux, uy] = self.viewport.to_unit(x, y);
        let particle = self.field.spawn_at(ux, uy, params.click_link_count);
        let mut queue = EventQueue::new();
        queue.push(SceneEvent::ParticleSpawned { particle });
        events::apply_events(self, queue);
    }

    /// Parallax input for projection, or `None` when parallax is off.
    pub fn parallax_offset(&self, params: &Params) -> Option<([f32; 2], f32)> {
        if self.motion_enabled && !self.is_compact() {
            Some((self.parallax.smoothed, params.parallax_strength))
        } else {
            None
        }
    }

    /// Palette hue in degrees, drifting slowly over time.
    pub fn hue(&self) -> f32 {
        (200.0 + (self.time * 0.01).sin() * 60.0).rem_euclid(360.0)
    }

    fn apply_resize(&mut self, params: &Params, viewport: Viewport, queue: &mut EventQueue) {
        self.viewport = viewport;
        let compact = viewport.is_compact(params.compact_breakpoint);
        if compact != self.compact {
            self.compact = compact;
            tracing::debug!(compact, "viewport class changed");
            self.field.set_target_count(params.target_particles(compact));
            self.sync_idle_monitor();
            // compact devices never host the creature, and activity can no
            // longer reach it once the monitor is off
            if compact {
                self.wraith.transition(Trigger::Exit, self.time, params, queue);
            }
        }
    }

    fn sync_idle_monitor(&mut self) {
        let enabled = self.motion_enabled && !self.compact;
        if enabled != self.idle.is_enabled() {
            self.idle.set_enabled(enabled, self.time);
        }
    }
}
