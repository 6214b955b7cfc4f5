#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rift::simulation::effects::Effects;
use rift::simulation::portal::{Portal, PortalPhase};

#[test]
fn test_inactive_portal_does_not_tick() {
    let mut portal = Portal::new(82.0);

    portal.tick(0.05, 0.01);

    assert!(!portal.is_active());
    assert_eq!(portal.opacity, 0.0);
    assert_eq!(portal.rotation, 0.0);
}

#[test]
fn test_open_hold_close() {
    let mut portal = Portal::new(82.0);
    portal.open(0.2, 0.6);

    assert_eq!(portal.phase, PortalPhase::Opening);
    assert_eq!(portal.opacity, 0.0);
    assert!(portal.radius < portal.target_radius);

    for _ in 0..25 {
        portal.tick(0.05, 0.01);
    }
    assert!(portal.is_open());
    assert_eq!(portal.opacity, 1.0);
    assert!(portal.rotation > 0.0);
    assert!((portal.radius - portal.target_radius).abs() < 2.0);

    portal.close();
    assert!(portal.is_closing());
    for _ in 0..25 {
        portal.tick(0.05, 0.01);
    }
    assert!(!portal.is_active());
    assert_eq!(portal.opacity, 0.0);
}

#[test]
fn test_opacity_bounded_and_phases_exclusive() {
    let mut portal = Portal::new(82.0);
    portal.open(0.5, 0.5);

    for i in 0..200 {
        if i % 37 == 0 {
            portal.close();
        }
        if i % 53 == 0 {
            portal.open(0.5, 0.5);
        }
        portal.tick(0.07, 0.01);
        assert!((0.0..=1.0).contains(&portal.opacity));
        assert!(!(portal.is_opening() && portal.is_closing()));
    }
}

#[test]
fn test_close_on_inactive_portal_is_noop() {
    let mut portal = Portal::new(82.0);

    portal.close();

    assert_eq!(portal.phase, PortalPhase::Inactive);
}

#[test]
fn test_effects_expire() {
    let mut effects = Effects::default();
    effects.level_up([0.5, 0.5], 16);

    assert_eq!(effects.bursts.len(), 1);
    assert_eq!(effects.sparks.len(), 16);
    for spark in &effects.sparks {
        let speed = spark.vel[0].hypot(spark.vel[1]);
        assert!((1.99..=5.01).contains(&speed));
    }

    effects.tick();
    assert!(effects.bursts[0].radius > 0.0);

    for _ in 0..30 {
        effects.tick();
    }
    assert!(effects.is_empty());
}
