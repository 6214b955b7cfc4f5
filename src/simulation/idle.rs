//! Idle detection: summons the creature after a quiet period and sends it
//! away as soon as the user is active again.
//!
//! Timers are deadlines on the scene clock, checked once per frame, so
//! dropping or disabling the monitor cancels everything at once.

use serde::{Deserialize, Serialize};

/// User input that counts as activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    /// The pointer moved.
    PointerMove,
    /// The page or wheel scrolled.
    Scroll,
    /// A key was pressed.
    KeyPress,
    /// A touch began.
    TouchStart,
}

/// What the monitor decided in response to activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityResponse {
    /// The creature is roaming and should leave now.
    RequestExit,
    /// The idle deadline was (re)armed.
    Rearmed,
    /// The cooldown after a spawn prevented arming.
    Suppressed,
    /// The monitor is disabled (reduced motion or touch device).
    Disabled,
}

/// Tracks the single pending idle deadline and the post-spawn cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdleMonitor {
    timeout: f32,
    cooldown: f32,
    deadline: Option<f32>,
    cooldown_until: f32,
    enabled: bool,
}

impl IdleMonitor {
    /// Creates a disabled monitor with the given idle timeout and cooldown, in seconds.
    pub fn new(timeout: f32, cooldown: f32) -> Self {
        Self {
            timeout,
            cooldown,
            deadline: None,
            cooldown_until: f32::NEG_INFINITY,
            enabled: false,
        }
    }

    /// Whether activity and timeouts are being tracked.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<f32> {
        self.deadline
    }

    /// Whether the post-spawn cooldown is still running at `now`.
    pub fn in_cooldown(&self, now: f32) -> bool {
        now < self.cooldown_until
    }

    /// Enables or disables the monitor. Disabling cancels the pending
    /// deadline; enabling arms a fresh one.
    pub fn set_enabled(&mut self, enabled: bool, now: f32) {
        self.enabled = enabled;
        if enabled {
            self.rearm(now);
        } else {
            self.deadline = None;
        }
    }

    /// Replaces any pending deadline with one `timeout` from `now`, unless
    /// disabled or cooling down.
    pub fn rearm(&mut self, now: f32) -> ActivityResponse {
        self.deadline = None;
        if !self.enabled {
            return ActivityResponse::Disabled;
        }
        if self.in_cooldown(now) {
            return ActivityResponse::Suppressed;
        }
        self.deadline = Some(now + self.timeout);
        ActivityResponse::Rearmed
    }

    /// Handles one activity signal.
    ///
    /// While the creature roams the answer is always an exit request and no
    /// deadline is armed; the idle timer restarts once it has vanished.
    pub fn on_activity(&mut self, now: f32, roaming: bool) -> ActivityResponse {
        if !self.enabled {
            return ActivityResponse::Disabled;
        }
        if roaming {
            self.deadline = None;
            return ActivityResponse::RequestExit;
        }
        self.rearm(now)
    }

    /// Returns `true` exactly once when the deadline has passed, starting the
    /// cooldown window.
    pub fn poll(&mut self, now: f32) -> bool {
        match self.deadline {
            Some(deadline) if self.enabled && now >= deadline => {
                self.deadline = None;
                self.cooldown_until = now + self.cooldown;
                true
            }
            _ => false,
        }
    }
}
