//! Portal effect marking where the creature arrives and leaves.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Animation phase of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalPhase {
    /// Not drawn.
    Inactive,
    /// Fading in.
    Opening,
    /// Fully visible.
    Open,
    /// Fading out; becomes inactive at zero opacity.
    Closing,
}

/// A spinning radial portal anchored at a point in the unit square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    /// Anchor position in the unit square.
    pub pos: Array1<f32>,
    /// Current radius in pixels.
    pub radius: f32,
    /// Radius the portal grows toward while active.
    pub target_radius: f32,
    /// Spin angle in radians.
    pub rotation: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Animation phase.
    pub phase: PortalPhase,
}

impl Portal {
    /// Creates an inactive portal with the given full radius.
    pub fn new(target_radius: f32) -> Self {
        Self {
            pos: Array1::from_vec(vec![0.5, 0.5]),
            radius: 0.0,
            target_radius,
            rotation: 0.0,
            opacity: 0.0,
            phase: PortalPhase::Inactive,
        }
    }

    /// Starts opening the portal at `(x, y)` from zero opacity.
    pub fn open(&mut self, x: f32, y: f32) {
        self.pos[0] = x;
        self.pos[1] = y;
        self.opacity = 0.0;
        self.radius = self.target_radius * 0.4;
        self.phase = PortalPhase::Opening;
    }

    /// Starts fading the portal out where it stands.
    pub fn close(&mut self) {
        if self.phase != PortalPhase::Inactive {
            self.phase = PortalPhase::Closing;
        }
    }

    /// Advances the fade by `fade_step` and the spin by `spin`.
    pub fn tick(&mut self, fade_step: f32, spin: f32) {
        match self.phase {
            PortalPhase::Inactive => return,
            PortalPhase::Opening => {
                self.opacity = (self.opacity + fade_step).min(1.0);
                if self.opacity >= 1.0 {
                    self.phase = PortalPhase::Open;
                }
            }
            PortalPhase::Open => {}
            PortalPhase::Closing => {
                self.opacity = (self.opacity - fade_step).max(0.0);
                if self.opacity <= 0.0 {
                    self.phase = PortalPhase::Inactive;
                }
            }
        }
        self.radius += (self.target_radius - self.radius) * 0.15;
        self.rotation += spin;
    }

    /// Whether the portal is drawn at all.
    pub fn is_active(&self) -> bool {
        self.phase != PortalPhase::Inactive
    }

    /// Whether the portal is fading in.
    pub fn is_opening(&self) -> bool {
        self.phase == PortalPhase::Opening
    }

    /// Whether the portal is fading out.
    pub fn is_closing(&self) -> bool {
        self.phase == PortalPhase::Closing
    }

    /// Whether the portal has finished opening and is holding.
    pub fn is_open(&self) -> bool {
        self.phase == PortalPhase::Open
    }
}
