//! Scene events emitted during a step and applied once it completes.
//!
//! The wraith and the field only record what happened; bookkeeping that
//! spans subsystems (re-arming the idle timer, the event log) runs afterwards
//! in [`apply_events`].

use super::event_log::EventColor;
use super::field::ParticleId;
use super::scene::Scene;

/// Something noteworthy that happened during a step.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The spawn portal started opening.
    SpawnStarted {
        /// Portal position in the unit square.
        pos: [f32; 2],
    },
    /// The creature stepped out of the portal.
    CreatureAppeared {
        /// Creature position in the unit square.
        pos: [f32; 2],
    },
    /// The creature consumed a particle.
    ParticleEaten {
        /// The eaten particle.
        particle: ParticleId,
        /// Creature size after the meal.
        size: f32,
    },
    /// The creature advanced a tier.
    TierUp {
        /// New tier.
        tier: usize,
    },
    /// The exit portal opened around the creature.
    ExitStarted {
        /// Creature position in the unit square.
        pos: [f32; 2],
    },
    /// The creature faded out completely.
    CreatureVanished,
    /// A particle was placed by a click.
    ParticleSpawned {
        /// The new particle.
        particle: ParticleId,
    },
}

impl SceneEvent {
    /// Human-readable description for the event log.
    pub fn describe(&self) -> String {
        match self {
            Self::SpawnStarted { pos } => {
                format!("Portal opening at ({:.2}, {:.2})", pos[0], pos[1])
            }
            Self::CreatureAppeared { .. } => "Wraith emerged".to_string(),
            Self::ParticleEaten { particle, size } => {
                format!("Ate particle {} (size {:.1})", particle, size)
            }
            Self::TierUp { tier } => format!("Reached tier {}", tier),
            Self::ExitStarted { .. } => "Wraith retreating".to_string(),
            Self::CreatureVanished => "Wraith vanished".to_string(),
            Self::ParticleSpawned { particle } => format!("Spawned particle {}", particle),
        }
    }

    /// Log category for the event.
    pub fn color(&self) -> EventColor {
        match self {
            Self::SpawnStarted { .. } | Self::CreatureAppeared { .. } => EventColor::Spawn,
            Self::ParticleEaten { .. } => EventColor::Meal,
            Self::TierUp { .. } => EventColor::TierUp,
            Self::ExitStarted { .. } | Self::CreatureVanished => EventColor::Exit,
            Self::ParticleSpawned { .. } => EventColor::Field,
        }
    }
}

/// Queue for collecting scene events during a step.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SceneEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Queued events in arrival order.
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SceneEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the scene.
pub fn apply_events(scene: &mut Scene, mut queue: EventQueue) {
    for event in queue.drain() {
        if event == SceneEvent::CreatureVanished {
            // back to idle: the next quiet period may summon it again
            scene.idle.rearm(scene.time);
        }
        scene.event_log.record(scene.time, &event);
        scene.last_events.push(event);
    }
}
