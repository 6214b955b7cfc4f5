//! The reduced-motion preference as an injected observable.
//!
//! One [`MotionPreference`] is shared by everything that cares about motion;
//! cloning it shares the same value. Consumers that need to react to changes
//! hold a [`MotionWatcher`] and poll it once per frame. [`MotionFade`] hides
//! the switch behind a short fade of the background.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::RiftResult;

#[derive(Debug, Clone, Copy)]
struct Shared {
    enabled: bool,
    version: u64,
}

/// Shared, observable "motion enabled" flag.
#[derive(Debug, Clone)]
pub struct MotionPreference {
    shared: Rc<Cell<Shared>>,
}

/// Subscription to a [`MotionPreference`].
#[derive(Debug)]
pub struct MotionWatcher {
    shared: Rc<Cell<Shared>>,
    seen: u64,
}

impl MotionPreference {
    /// Creates a preference with an initial value.
    pub fn new(enabled: bool) -> Self {
        Self {
            shared: Rc::new(Cell::new(Shared {
                enabled,
                version: 0,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.shared.get().enabled
    }

    /// Sets the value, notifying watchers only when it changes.
    pub fn set(&self, enabled: bool) {
        let current = self.shared.get();
        if current.enabled != enabled {
            self.shared.set(Shared {
                enabled,
                version: current.version + 1,
            });
            tracing::info!(enabled, "motion preference changed");
        }
    }

    /// Flips the value and returns the new one.
    pub fn toggle(&self) -> bool {
        let enabled = !self.get();
        self.set(enabled);
        enabled
    }

    /// Subscribes to future changes. The current value is not reported.
    pub fn subscribe(&self) -> MotionWatcher {
        MotionWatcher {
            shared: Rc::clone(&self.shared),
            seen: self.shared.get().version,
        }
    }
}

impl MotionWatcher {
    /// Returns the new value if it changed since the last poll.
    pub fn poll(&mut self) -> Option<bool> {
        let current = self.shared.get();
        if current.version == self.seen {
            return None;
        }
        self.seen = current.version;
        Some(current.enabled)
    }
}

/// Seconds the background takes to fade out before a motion change applies,
/// and to fade back in afterwards.
pub const TOGGLE_FADE: f32 = 0.4;

/// Cross-fade around a motion toggle.
///
/// A requested change is held back while the background fades out, handed
/// over once it is fully hidden, and the background then fades back in.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionFade {
    pending: Option<bool>,
    remaining: f32,
    opacity: f32,
}

impl Default for MotionFade {
    fn default() -> Self {
        Self {
            pending: None,
            remaining: 0.0,
            opacity: 1.0,
        }
    }
}

impl MotionFade {
    /// Starts fading out toward `enabled`. A newer request replaces an older one.
    pub fn request(&mut self, enabled: bool) {
        self.pending = Some(enabled);
        self.remaining = TOGGLE_FADE;
    }

    /// Advances the fade by `dt` seconds, returning the value to apply once
    /// the background is hidden.
    pub fn advance(&mut self, dt: f32) -> Option<bool> {
        let step = dt / TOGGLE_FADE;
        let Some(enabled) = self.pending else {
            self.opacity = (self.opacity + step).min(1.0);
            return None;
        };
        self.opacity = (self.opacity - step).max(0.0);
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return None;
        }
        self.pending = None;
        self.opacity = 0.0;
        Some(enabled)
    }

    /// Background opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether a change is waiting for the fade-out to finish.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Persisted form of the preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionSettings {
    /// Whether the user asked for reduced motion.
    pub reduce_motion: bool,
}

impl MotionSettings {
    /// Loads settings, defaulting to full motion when the file is absent or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(json) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&json).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring motion settings");
            Self::default()
        })
    }

    /// Saves settings as JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> RiftResult<()> {
        std::fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// Builds the runtime preference from the persisted one.
    pub fn preference(&self) -> MotionPreference {
        MotionPreference::new(!self.reduce_motion)
    }

    /// Captures the current value of a preference.
    pub fn from_preference(pref: &MotionPreference) -> Self {
        Self {
            reduce_motion: !pref.get(),
        }
    }
}
