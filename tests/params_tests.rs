#![allow(missing_docs)]

use std::path::PathBuf;

use rift::error::RiftError;
use rift::simulation::motion::{MotionPreference, MotionSettings};
use rift::simulation::params::Params;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rift-test-{}-{name}", std::process::id()))
}

#[test]
fn test_default_params_are_valid() {
    assert!(Params::default().validate().is_ok());
}

#[test]
fn test_invalid_params_are_rejected() {
    let cases = [
        Params {
            n_particles: 0,
            ..Params::default()
        },
        Params {
            min_size: 200.0,
            ..Params::default()
        },
        Params {
            tier_count: 0,
            ..Params::default()
        },
        Params {
            tier_thresholds: vec![36.0, 30.0],
            ..Params::default()
        },
        Params {
            tier_thresholds: Vec::new(),
            ..Params::default()
        },
        Params {
            idle_timeout: 0.0,
            ..Params::default()
        },
        Params {
            eat_radius_factor: -0.5,
            ..Params::default()
        },
        Params {
            creature_speed: -0.01,
            ..Params::default()
        },
        Params {
            growth_per_eat: f32::NAN,
            ..Params::default()
        },
    ];

    for params in cases {
        assert!(matches!(
            params.validate(),
            Err(RiftError::InvalidParams(_))
        ));
    }
}

#[test]
fn test_viewport_class_selectors() {
    let params = Params::default();

    assert_eq!(params.target_particles(false), 160);
    assert_eq!(params.target_particles(true), 70);
    assert_eq!(params.link_range(false), 130.0);
    assert_eq!(params.link_range(true), 100.0);
    assert_eq!(params.creature_sprite_path(0), "assets/creature/creature_1.png");
    assert_eq!(params.portal_sprite_path(), "assets/creature/portal.png");
}

#[test]
fn test_save_and_load_params() {
    let path = temp_path("params.json");
    let params = Params {
        n_particles: 42,
        idle_timeout: 12.5,
        ..Params::default()
    };

    params.save_to_file(&path).unwrap();
    let loaded = Params::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, params);
}

#[test]
fn test_partial_params_file_fills_defaults() {
    let path = temp_path("partial.json");
    std::fs::write(&path, r#"{ "n_particles": 90 }"#).unwrap();

    let loaded = Params::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.n_particles, 90);
    assert_eq!(loaded.idle_timeout, Params::default().idle_timeout);
}

#[test]
fn test_load_or_default_falls_back() {
    let missing = temp_path("missing.json");
    assert_eq!(Params::load_or_default(&missing), Params::default());

    let malformed = temp_path("malformed.json");
    std::fs::write(&malformed, "{ not json").unwrap();
    assert!(matches!(
        Params::load_from_file(&malformed),
        Err(RiftError::Json(_))
    ));
    assert_eq!(Params::load_or_default(&malformed), Params::default());
    std::fs::remove_file(&malformed).ok();

    let invalid = temp_path("invalid.json");
    std::fs::write(&invalid, r#"{ "tier_count": 0 }"#).unwrap();
    assert_eq!(Params::load_or_default(&invalid), Params::default());
    std::fs::remove_file(&invalid).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        Params::load_from_file(temp_path("nope.json")),
        Err(RiftError::Io(_))
    ));
}

#[test]
fn test_motion_preference_notifies_changes_only() {
    let pref = MotionPreference::new(true);
    let mut watcher = pref.subscribe();

    assert_eq!(watcher.poll(), None);

    pref.set(true);
    assert_eq!(watcher.poll(), None);

    pref.set(false);
    assert_eq!(watcher.poll(), Some(false));
    assert_eq!(watcher.poll(), None);

    let shared = pref.clone();
    assert!(shared.toggle());
    assert!(pref.get());
    assert_eq!(watcher.poll(), Some(true));
}

#[test]
fn test_motion_settings_round_trip() {
    let path = temp_path("motion.json");
    assert_eq!(MotionSettings::load_or_default(&path), MotionSettings::default());
    assert!(MotionSettings::default().preference().get());

    let pref = MotionPreference::new(false);
    MotionSettings::from_preference(&pref)
        .save_to_file(&path)
        .unwrap();
    let loaded = MotionSettings::load_or_default(&path);
    std::fs::remove_file(&path).ok();

    assert!(loaded.reduce_motion);
    assert!(!loaded.preference().get());
}
