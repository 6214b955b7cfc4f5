#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rift::simulation::creature::FrameContext;
use rift::simulation::events::{EventQueue, SceneEvent};
use rift::simulation::field::ParticleField;
use rift::simulation::params::Params;
use rift::simulation::viewport::Viewport;
use rift::simulation::wraith::{SPAWN_X, SPAWN_Y, Trigger, Wraith, random_spawn_point};

fn create_test_params() -> Params {
    Params::default()
}

fn ctx(now: f32) -> FrameContext {
    FrameContext {
        now,
        motion_enabled: true,
        viewport: Viewport::default(),
    }
}

/// Drives a fresh wraith through the spawn sequence to roaming.
fn roaming_wraith(params: &Params, events: &mut EventQueue) -> Wraith {
    let mut wraith = Wraith::new(params);
    assert!(wraith.transition(Trigger::Spawn { x: 0.3, y: 0.4 }, 0.0, params, events));
    assert!(wraith.transition(Trigger::Tick, 0.5, params, events));
    assert!(wraith.is_roaming());
    wraith
}

#[test]
fn test_spawn_sequence() {
    let params = create_test_params();
    let mut events = EventQueue::new();
    let mut wraith = Wraith::new(&params);
    assert!(wraith.is_idle());

    assert!(wraith.transition(Trigger::Spawn { x: 0.3, y: 0.4 }, 0.0, &params, &mut events));
    assert_eq!(wraith.state_name(), "spawn_open");
    assert!(wraith.portal.is_opening());
    assert_eq!(wraith.portal.pos[0], 0.3);
    assert_eq!(wraith.portal.pos[1], 0.4);
    assert!(wraith.creature().is_none());

    // the creature only appears after the open delay
    assert!(!wraith.transition(Trigger::Tick, 0.2, &params, &mut events));
    assert_eq!(wraith.state_name(), "spawn_open");

    assert!(wraith.transition(Trigger::Tick, 0.4, &params, &mut events));
    assert!(wraith.is_roaming());
    let creature = wraith.creature().unwrap();
    assert_eq!(creature.pos[0], 0.3);
    assert_eq!(creature.pos[1], 0.4);
    assert_eq!(creature.size, params.min_size);
    assert_eq!(creature.tier, 0);

    assert_eq!(
        events.events(),
        &[
            SceneEvent::SpawnStarted { pos: [0.3, 0.4] },
            SceneEvent::CreatureAppeared { pos: [0.3, 0.4] },
        ]
    );
}

#[test]
fn test_spawn_portal_closes_after_delay() {
    let params = create_test_params();
    let mut events = EventQueue::new();
    let mut wraith = roaming_wraith(&params, &mut events);

    assert!(!wraith.transition(Trigger::Tick, 1.0, &params, &mut events));
    assert!(!wraith.portal.is_closing());

    assert!(wraith.transition(Trigger::Tick, 1.7, &params, &mut events));
    assert!(wraith.portal.is_closing());
    assert!(wraith.is_roaming());

    // closing is scheduled only once
    assert!(!wraith.transition(Trigger::Tick, 5.0, &params, &mut events));
}

#[test]
fn test_rejected_triggers_leave_state_untouched() {
    let params = create_test_params();
    let mut events = EventQueue::new();
    let mut wraith = Wraith::new(&params);

    assert!(!wraith.transition(Trigger::Exit, 0.0, &params, &mut events));
    assert!(!wraith.transition(Trigger::Tick, 10.0, &params, &mut events));
    assert!(wraith.is_idle());

    wraith.transition(Trigger::Spawn { x: 0.5, y: 0.5 }, 0.0, &params, &mut events);
    assert!(!wraith.transition(Trigger::Exit, 0.1, &params, &mut events));
    assert!(!wraith.transition(Trigger::Spawn { x: 0.2, y: 0.2 }, 0.1, &params, &mut events));
    assert_eq!(wraith.state_name(), "spawn_open");
    assert_eq!(wraith.portal.pos[0], 0.5);

    wraith.transition(Trigger::Tick, 1.0, &params, &mut events);
    assert!(!wraith.transition(Trigger::Spawn { x: 0.2, y: 0.2 }, 1.1, &params, &mut events));
    assert!(wraith.is_roaming());
    assert_eq!(events.events().len(), 2);
}

#[test]
fn test_exit_cycle_returns_to_idle() {
    let params = create_test_params();
    let mut events = EventQueue::new();
    let mut wraith = roaming_wraith(&params, &mut events);
    let mut field = ParticleField::empty(0, 0.0);

    let at = [wraith.creature().unwrap().pos[0], wraith.creature().unwrap().pos[1]];
    assert!(wraith.transition(Trigger::Exit, 1.0, &params, &mut events));
    assert!(wraith.is_exiting());
    assert!(wraith.portal.is_opening());
    assert_eq!(wraith.portal.pos[0], at[0]);
    assert_eq!(wraith.portal.pos[1], at[1]);
    assert!(!wraith.transition(Trigger::Exit, 1.0, &params, &mut events));

    let mut now = 1.0;
    let mut seen_fade = false;
    for _ in 0..200 {
        now += 0.016;
        wraith.step(&mut field, &ctx(now), &params, &mut events);
        assert!(!wraith.is_roaming());
        seen_fade |= wraith.state_name() == "exit_fade";
        if wraith.is_idle() {
            break;
        }
    }

    assert!(seen_fade);
    assert!(wraith.is_idle());
    assert!(wraith.creature().is_none());
    assert!(wraith.portal.is_closing());
    assert_eq!(events.events().last(), Some(&SceneEvent::CreatureVanished));
    assert!(events.events().contains(&SceneEvent::ExitStarted { pos: at }));
}

#[test]
fn test_tier_up_fires_effects() {
    let params = create_test_params();
    let mut events = EventQueue::new();
    let mut wraith = Wraith::new(&params);
    wraith.transition(Trigger::Spawn { x: 0.5, y: 0.5 }, 0.0, &params, &mut events);
    wraith.transition(Trigger::Tick, 0.5, &params, &mut events);
    wraith.creature_mut().unwrap().size = 35.0;

    let mut field = ParticleField::empty(10, 0.0);
    let particle = field.spawn_at(0.5, 0.5, 0);
    let mut step_events = EventQueue::new();

    wraith.step(&mut field, &ctx(0.6), &params, &mut step_events);

    let creature = wraith.creature().unwrap();
    assert_eq!(creature.tier, 1);
    assert!((creature.size - 37.2).abs() < 1e-4);
    assert!(field.is_empty());
    assert_eq!(wraith.effects.bursts.len(), 1);
    assert_eq!(wraith.effects.sparks.len(), params.spark_count);
    assert_eq!(
        step_events.events(),
        &[
            SceneEvent::ParticleEaten {
                particle,
                size: creature.size,
            },
            SceneEvent::TierUp { tier: 1 },
        ]
    );

    for _ in 0..40 {
        wraith.effects.tick();
    }
    assert!(wraith.effects.is_empty());
}

#[test]
fn test_random_spawn_point_in_bounds() {
    for _ in 0..1000 {
        let [x, y] = random_spawn_point();
        assert!(x >= SPAWN_X.0 && x <= SPAWN_X.1);
        assert!(y >= SPAWN_Y.0 && y <= SPAWN_Y.1);
    }
}
