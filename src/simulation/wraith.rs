//! Spawn and despawn choreography of the creature and its portal.
//!
//! ```text
//! Idle ──Spawn──▶ SpawnOpen ──delay──▶ Roaming ──Exit──▶ ExitOpen ──portal open──▶ ExitFade ──faded──▶ Idle
//! ```
//!
//! The creature only exists inside the states where it is visible, and every
//! state change goes through [`Wraith::transition`]. Timed edges are plain
//! comparisons against the scene clock made on [`Trigger::Tick`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::creature::{Creature, FrameContext};
use super::effects::Effects;
use super::events::{EventQueue, SceneEvent};
use super::field::ParticleField;
use super::params::Params;
use super::portal::Portal;

/// Horizontal range for random spawn points.
pub const SPAWN_X: (f32, f32) = (0.15, 0.85);
/// Vertical range for random spawn points.
pub const SPAWN_Y: (f32, f32) = (0.2, 0.8);

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Summon the creature through a portal at `(x, y)`.
    Spawn {
        /// Portal x in the unit square.
        x: f32,
        /// Portal y in the unit square.
        y: f32,
    },
    /// Send the roaming creature away.
    Exit,
    /// Evaluate timed transitions.
    Tick,
}

/// Lifecycle of the creature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WraithState {
    /// Nothing on screen.
    Idle,
    /// The spawn portal is opening.
    SpawnOpen {
        /// Scene time the portal started opening.
        opened_at: f32,
    },
    /// The creature hunts particles.
    Roaming {
        /// The creature.
        creature: Creature,
        /// Scene time at which the spawn portal closes, while still pending.
        portal_close_at: Option<f32>,
    },
    /// The exit portal is opening around the creature.
    ExitOpen {
        /// The creature, holding still.
        creature: Creature,
    },
    /// The creature fades out inside the open portal.
    ExitFade {
        /// The fading creature.
        creature: Creature,
    },
}

/// The creature, its portal and its level-up effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wraith {
    state: WraithState,
    /// Spawn and exit portal.
    pub portal: Portal,
    /// Level-up flashes and sparks.
    pub effects: Effects,
}

/// Draws a random spawn point away from the viewport edges.
pub fn random_spawn_point() -> [f32; 2] {
    let mut rng = rand::rng();
    [
        rng.random_range(SPAWN_X.0..SPAWN_X.1),
        rng.random_range(SPAWN_Y.0..SPAWN_Y.1),
    ]
}

impl Wraith {
    /// Creates an idle wraith.
    pub fn new(params: &Params) -> Self {
        Self {
            state: WraithState::Idle,
            portal: Portal::new(params.portal_radius),
            effects: Effects::default(),
        }
    }

    /// Short name of the current state.
    pub fn state_name(&self) -> &'static str {
        match self.state {
            WraithState::Idle => "idle",
            WraithState::SpawnOpen { .. } => "spawn_open",
            WraithState::Roaming { .. } => "roaming",
            WraithState::ExitOpen { .. } => "exit_open",
            WraithState::ExitFade { .. } => "exit_fade",
        }
    }

    /// The creature, while one exists.
    pub fn creature(&self) -> Option<&Creature> {
        match &self.state {
            WraithState::Roaming { creature, .. }
            | WraithState::ExitOpen { creature }
            | WraithState::ExitFade { creature } => Some(creature),
            WraithState::Idle | WraithState::SpawnOpen { .. } => None,
        }
    }

    /// Mutable access to the creature, while one exists.
    pub fn creature_mut(&mut self) -> Option<&mut Creature> {
        match &mut self.state {
            WraithState::Roaming { creature, .. }
            | WraithState::ExitOpen { creature }
            | WraithState::ExitFade { creature } => Some(creature),
            WraithState::Idle | WraithState::SpawnOpen { .. } => None,
        }
    }

    /// Whether a creature is on screen.
    pub fn is_active(&self) -> bool {
        self.creature().is_some()
    }

    /// Whether the creature is leaving.
    pub fn is_exiting(&self) -> bool {
        matches!(
            self.state,
            WraithState::ExitOpen { .. } | WraithState::ExitFade { .. }
        )
    }

    /// Whether the creature is hunting.
    pub fn is_roaming(&self) -> bool {
        matches!(self.state, WraithState::Roaming { .. })
    }

    /// Whether nothing is on screen and a spawn would be accepted.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, WraithState::Idle)
    }

    /// Applies `trigger` at scene time `now`.
    ///
    /// Returns `false` and leaves the state untouched when the trigger has no
    /// edge from the current state.
    pub fn transition(
        &mut self,
        trigger: Trigger,
        now: f32,
        params: &Params,
        events: &mut EventQueue,
    ) -> bool {
        let state = std::mem::replace(&mut self.state, WraithState::Idle);

        let (next, accepted) = match (state, trigger) {
            (WraithState::Idle, Trigger::Spawn { x, y }) => {
                self.portal.open(x, y);
                tracing::info!(x, y, "opening spawn portal");
                events.push(SceneEvent::SpawnStarted { pos: [x, y] });
                (WraithState::SpawnOpen { opened_at: now }, true)
            }
            (WraithState::SpawnOpen { opened_at }, Trigger::Tick)
                if now - opened_at >= params.spawn_open_delay =>
            {
                let creature = Creature::spawn(self.portal.pos[0], self.portal.pos[1], params);
                tracing::info!("wraith emerged");
                events.push(SceneEvent::CreatureAppeared {
                    pos: [creature.pos[0], creature.pos[1]],
                });
                (
                    WraithState::Roaming {
                        creature,
                        portal_close_at: Some(now + params.portal_close_delay),
                    },
                    true,
                )
            }
            (
                WraithState::Roaming {
                    creature,
                    portal_close_at: Some(close_at),
                },
                Trigger::Tick,
            ) if now >= close_at => {
                self.portal.close();
                (
                    WraithState::Roaming {
                        creature,
                        portal_close_at: None,
                    },
                    true,
                )
            }
            (WraithState::Roaming { creature, .. }, Trigger::Exit) => {
                let pos = [creature.pos[0], creature.pos[1]];
                self.portal.open(pos[0], pos[1]);
                tracing::info!(size = creature.size, tier = creature.tier, "wraith retreating");
                events.push(SceneEvent::ExitStarted { pos });
                (WraithState::ExitOpen { creature }, true)
            }
            (WraithState::ExitOpen { creature }, Trigger::Tick) if self.portal.is_open() => {
                (WraithState::ExitFade { creature }, true)
            }
            (WraithState::ExitFade { creature }, Trigger::Tick) if creature.opacity <= 0.0 => {
                self.portal.close();
                tracing::info!("wraith vanished");
                events.push(SceneEvent::CreatureVanished);
                (WraithState::Idle, true)
            }
            (state, _) => (state, false),
        };

        self.state = next;
        accepted
    }

    /// Advances the portal, timed transitions, the creature and its effects by one frame.
    pub fn step(
        &mut self,
        field: &mut ParticleField,
        ctx: &FrameContext,
        params: &Params,
        events: &mut EventQueue,
    ) {
        self.portal.tick(params.portal_fade_step, params.portal_spin);
        self.transition(Trigger::Tick, ctx.now, params, events);
        self.effects.tick();

        match &mut self.state {
            WraithState::Roaming { creature, .. } => {
                creature.fade_in(params.creature_fade_step);
                creature.decay();
                if let Some(meal) = creature.forage(field, ctx, params) {
                    events.push(SceneEvent::ParticleEaten {
                        particle: meal.particle,
                        size: meal.size,
                    });
                    if meal.tier_up {
                        tracing::debug!(tier = meal.tier, "wraith tier up");
                        self.effects
                            .level_up([creature.pos[0], creature.pos[1]], params.spark_count);
                        events.push(SceneEvent::TierUp { tier: meal.tier });
                    }
                }
            }
            WraithState::ExitOpen { creature } => creature.decay(),
            WraithState::ExitFade { creature } => {
                creature.fade_out(params.creature_fade_step);
                creature.decay();
            }
            WraithState::Idle | WraithState::SpawnOpen { .. } => {}
        }
    }
}
