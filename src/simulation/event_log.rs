//! Rolling log of recent scene events for the overlay panel.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::events::SceneEvent;

/// A logged event for display in the overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Scene time when the event occurred.
    pub time: f32,
    /// Human-readable description.
    pub description: String,
    /// Category, used for coloring.
    pub color: EventColor,
}

/// Color categories for events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventColor {
    /// Portal and arrival events (cyan)
    Spawn,
    /// Particles eaten (yellow)
    Meal,
    /// Tier increases (magenta)
    TierUp,
    /// Retreat and disappearance (gray)
    Exit,
    /// Click-spawned particles (blue)
    Field,
}

/// Bounded log of recent events, newest first, plus lifetime totals per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<LoggedEvent>,
    max_events: usize,
    meals: u64,
    tier_ups: u64,
    visits: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a log keeping at most `max_events` entries.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
            meals: 0,
            tier_ups: 0,
            visits: 0,
        }
    }

    /// Records a scene event at `time`.
    pub fn record(&mut self, time: f32, event: &SceneEvent) {
        match event {
            SceneEvent::ParticleEaten { .. } => self.meals += 1,
            SceneEvent::TierUp { .. } => self.tier_ups += 1,
            SceneEvent::CreatureAppeared { .. } => self.visits += 1,
            _ => {}
        }
        self.push(time, event.describe(), event.color());
    }

    /// Adds a free-form entry.
    pub fn push(&mut self, time: f32, description: String, color: EventColor) {
        self.events.push_front(LoggedEvent {
            time,
            description,
            color,
        });
        self.events.truncate(self.max_events);
    }

    /// Returns all retained events, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Particles eaten since the log was created.
    pub fn meals(&self) -> u64 {
        self.meals
    }

    /// Tier increases since the log was created.
    pub fn tier_ups(&self) -> u64 {
        self.tier_ups
    }

    /// Number of times the creature has appeared.
    pub fn visits(&self) -> u64 {
        self.visits
    }
}
