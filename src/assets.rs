//! Best-effort sprite loading.
//!
//! Sprites are loaded one per frame so the first frames are never held up.
//! Any sprite that fails stays empty and the renderer draws a glowing
//! placeholder in its place.

use std::collections::VecDeque;

use macroquad::prelude::*;
use rift::error::RiftError;
use rift::simulation::params::Params;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Creature(usize),
    Portal,
}

pub struct SpriteSet {
    creature: Vec<Option<Texture2D>>,
    portal: Option<Texture2D>,
    pending: VecDeque<(Slot, String)>,
}

impl SpriteSet {
    pub fn new(params: &Params) -> Self {
        let mut pending: VecDeque<(Slot, String)> = (0..params.tier_count)
            .map(|tier| (Slot::Creature(tier), params.creature_sprite_path(tier)))
            .collect();
        pending.push_back((Slot::Portal, params.portal_sprite_path()));

        Self {
            creature: vec![None; params.tier_count],
            portal: None,
            pending,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Loads the next queued sprite, if any.
    pub async fn load_next(&mut self) {
        let Some((slot, path)) = self.pending.pop_front() else {
            return;
        };

        let texture = match load_texture(&path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Linear);
                tracing::debug!(%path, "sprite loaded");
                Some(texture)
            }
            Err(err) => {
                let err = RiftError::asset(&path, format!("{err:?}"));
                tracing::warn!(%err, "drawing placeholder instead");
                None
            }
        };

        match slot {
            Slot::Creature(tier) => self.creature[tier] = texture,
            Slot::Portal => self.portal = texture,
        }
    }

    /// Sprite for `tier`, falling back to the closest lower tier that loaded.
    pub fn creature(&self, tier: usize) -> Option<&Texture2D> {
        let last = self.creature.len().checked_sub(1)?;
        self.creature[..=tier.min(last)]
            .iter()
            .rev()
            .find_map(Option::as_ref)
    }

    pub fn portal(&self) -> Option<&Texture2D> {
        self.portal.as_ref()
    }
}
