#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rift::simulation::creature::{Creature, FrameContext, tier_for_size};
use rift::simulation::field::ParticleField;
use rift::simulation::params::Params;
use rift::simulation::viewport::Viewport;

fn create_test_params() -> Params {
    Params::default()
}

fn ctx(now: f32, motion_enabled: bool) -> FrameContext {
    FrameContext {
        now,
        motion_enabled,
        viewport: Viewport::default(),
    }
}

#[test]
fn test_tier_for_size() {
    let thresholds = [36.0, 52.0, 70.0, 92.0, 118.0];

    assert_eq!(tier_for_size(28.0, &thresholds, 6), 0);
    assert_eq!(tier_for_size(35.9, &thresholds, 6), 0);
    assert_eq!(tier_for_size(36.0, &thresholds, 6), 1);
    assert_eq!(tier_for_size(71.0, &thresholds, 6), 3);
    assert_eq!(tier_for_size(160.0, &thresholds, 6), 5);
    // fewer sprites than thresholds caps at the last sprite
    assert_eq!(tier_for_size(160.0, &thresholds, 3), 2);
}

#[test]
fn test_spawn_starts_small_and_invisible() {
    let params = create_test_params();
    let creature = Creature::spawn(0.3, 0.7, &params);

    assert_eq!(creature.pos[0], 0.3);
    assert_eq!(creature.pos[1], 0.7);
    assert_eq!(creature.size, params.min_size);
    assert_eq!(creature.tier, 0);
    assert_eq!(creature.opacity, 0.0);
    assert!(creature.target.is_none());
}

#[test]
fn test_growth_is_monotonic_and_capped() {
    let params = create_test_params();
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    let mut last_size = creature.size;
    let mut last_tier = creature.tier;
    for _ in 0..200 {
        creature.eat(&params);
        assert!(creature.size >= last_size);
        assert!(creature.tier >= last_tier);
        assert!(creature.size <= params.max_size);
        assert!(creature.tier < params.tier_count);
        last_size = creature.size;
        last_tier = creature.tier;
    }

    assert_eq!(creature.size, params.max_size);
    assert_eq!(creature.tier, params.tier_count - 1);
}

#[test]
fn test_tier_up_sets_pulse() {
    let params = create_test_params();
    let mut creature = Creature::spawn(0.5, 0.5, &params);
    creature.size = 35.0;

    assert!(creature.eat(&params));
    assert_eq!(creature.tier, 1);
    assert_eq!(creature.pulse, 1.0);

    assert!(!creature.eat(&params));
    creature.decay();
    assert!(creature.pulse < 1.0);
}

#[test]
fn test_eat_radius_scales_with_size() {
    let params = create_test_params();
    let viewport = Viewport::default();
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    let small = creature.eat_radius(&viewport, &params);
    creature.size = params.max_size;
    let large = creature.eat_radius(&viewport, &params);

    assert!((small - 28.0 * 0.6 / 800.0).abs() < 1e-6);
    assert!(large > small);
}

#[test]
fn test_forage_eats_particle_in_reach() {
    let params = create_test_params();
    let mut field = ParticleField::empty(10, 0.0);
    let id = field.spawn_at(0.505, 0.5, 0);
    let mut creature = Creature::spawn(0.5, 0.5, &params);
    creature.size = 35.0;

    let meal = creature.forage(&mut field, &ctx(1.0, true), &params).unwrap();

    assert_eq!(meal.particle, id);
    assert!(meal.tier_up);
    assert_eq!(meal.tier, 1);
    assert!((meal.size - 37.2).abs() < 1e-4);
    assert!(field.is_empty());
    assert!(creature.target.is_none());
}

#[test]
fn test_forage_walks_toward_distant_target() {
    let params = create_test_params();
    let mut field = ParticleField::empty(10, 0.0);
    let id = field.spawn_at(0.9, 0.5, 0);
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    let meal = creature.forage(&mut field, &ctx(0.0, true), &params);

    assert!(meal.is_none());
    assert_eq!(creature.target, Some(id));
    assert!((creature.pos[0] - (0.5 + params.creature_speed)).abs() < 1e-6);
    assert_eq!(creature.pos[1], 0.5);
    assert_eq!(creature.trail.len(), 1);
    assert_eq!(field.len(), 1);
}

#[test]
fn test_forage_holds_still_without_motion() {
    let params = create_test_params();
    let mut field = ParticleField::empty(10, 0.0);
    field.spawn_at(0.9, 0.5, 0);
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    for i in 0..10 {
        creature.forage(&mut field, &ctx(i as f32, false), &params);
    }

    assert_eq!(creature.pos[0], 0.5);
    assert!(creature.trail.is_empty());
}

#[test]
fn test_forage_on_empty_field_is_noop() {
    let params = create_test_params();
    let mut field = ParticleField::empty(10, 0.0);
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    assert!(creature.forage(&mut field, &ctx(0.0, true), &params).is_none());
    assert_eq!(creature.pos[0], 0.5);
    assert_eq!(creature.pos[1], 0.5);
    assert_eq!(creature.size, params.min_size);
}

#[test]
fn test_retarget_only_after_seek_interval() {
    let params = create_test_params();
    let mut field = ParticleField::empty(10, 0.0);
    let far = field.spawn_at(0.9, 0.5, 0);
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    creature.forage(&mut field, &ctx(0.0, true), &params);
    assert_eq!(creature.target, Some(far));

    let near = field.spawn_at(0.45, 0.5, 0);
    creature.forage(&mut field, &ctx(0.01, true), &params);
    assert_eq!(creature.target, Some(far));

    creature.forage(&mut field, &ctx(0.5, true), &params);
    assert_eq!(creature.target, Some(near));
}

#[test]
fn test_trail_is_bounded() {
    let params = Params {
        trail_len: 5,
        ..create_test_params()
    };
    let mut field = ParticleField::empty(10, 0.0);
    field.spawn_at(0.95, 0.5, 0);
    let mut creature = Creature::spawn(0.05, 0.5, &params);

    for i in 0..50 {
        creature.forage(&mut field, &ctx(i as f32 * 0.016, true), &params);
        assert!(creature.trail.len() <= 5);
    }
}

#[test]
fn test_fades_saturate() {
    let params = create_test_params();
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    for _ in 0..30 {
        creature.fade_in(0.05);
        assert!((0.0..=1.0).contains(&creature.opacity));
    }
    assert_eq!(creature.opacity, 1.0);

    let mut gone = false;
    for _ in 0..30 {
        gone = creature.fade_out(0.05);
        assert!((0.0..=1.0).contains(&creature.opacity));
    }
    assert!(gone);
    assert_eq!(creature.opacity, 0.0);
}

#[test]
fn test_no_step_onto_own_position() {
    // a negative hitbox never eats, even a particle sitting exactly underneath
    let params = Params {
        eat_radius_factor: -1.0,
        ..create_test_params()
    };
    let mut field = ParticleField::empty(10, 0.0);
    field.spawn_at(0.5, 0.5, 0);
    let mut creature = Creature::spawn(0.5, 0.5, &params);

    assert!(creature.forage(&mut field, &ctx(0.0, true), &params).is_none());

    assert_eq!(field.len(), 1);
    assert!(creature.pos.iter().all(|v| v.is_finite()));
    assert!(creature.facing.is_finite());
}
