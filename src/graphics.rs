use std::collections::HashMap;

use macroquad::color::hsl_to_rgb;
use macroquad::prelude::*;
use rift::simulation::field::{ParticleField, ProjectedParticle};
use rift::simulation::params::Params;
use rift::simulation::portal::Portal;
use rift::simulation::scene::Scene;
use rift::simulation::spatial;
use rift::simulation::wraith::Wraith;

use crate::assets::SpriteSet;

const GLOW_RINGS: usize = 14;

/// Draws one frame: background, particles, links, portal, creature, bloom.
///
/// `opacity` below one veils the frame in the background colour.
pub fn draw_scene(scene: &Scene, params: &Params, sprites: &SpriteSet, opacity: f32) {
    let w = scene.viewport.width;
    let h = scene.viewport.height;
    let hue = scene.hue() / 360.0;

    draw_background(w, h);

    let projected = scene.field.project(w, h, scene.parallax_offset(params));
    draw_particles(&projected, hue);
    draw_links(&projected, params.link_range(scene.is_compact()), hue, scene.viewport.dpr);
    draw_burst_links(&scene.field, &projected, hue);

    draw_portal(&scene.wraith.portal, sprites, w, h);
    draw_wraith(&scene.wraith, sprites, scene.time, w, h);

    draw_bloom(w, h);

    if opacity < 1.0 {
        let mut veil = background_color();
        veil.a = 1.0 - opacity.max(0.0);
        draw_rectangle(0.0, 0.0, w, h, veil);
    }
}

/// Approximates a radial gradient with concentric translucent discs.
///
/// `color` is the colour at the centre; it fades to transparent at `radius`.
fn draw_radial_glow(x: f32, y: f32, radius: f32, color: Color) {
    if radius <= 0.0 || color.a <= 0.0 {
        return;
    }
    let ring_alpha = color.a / GLOW_RINGS as f32;
    for i in 0..GLOW_RINGS {
        let r = radius * (1.0 - i as f32 / GLOW_RINGS as f32);
        draw_circle(x, y, r, Color::new(color.r, color.g, color.b, ring_alpha));
    }
}

fn background_color() -> Color {
    Color::from_rgba(3, 6, 12, 255)
}

fn draw_background(w: f32, h: f32) {
    clear_background(background_color());
    draw_radial_glow(w / 2.0, h / 2.0, w.max(h), Color::from_rgba(8, 14, 24, 255));
}

fn draw_particles(projected: &[ProjectedParticle], hue: f32) {
    for p in projected {
        let lightness = (72.0 + p.z * 18.0) / 100.0;
        let mut color = hsl_to_rgb(hue, 1.0, lightness);
        color.a = p.alpha;
        draw_circle(p.px, p.py, p.radius, color);
    }
}

fn draw_links(projected: &[ProjectedParticle], range: f32, hue: f32, dpr: f32) {
    let thickness = 1.0 / dpr;
    for link in spatial::proximity_links(projected, |p| [p.px, p.py], range) {
        let (a, b) = (&projected[link.a], &projected[link.b]);
        let mut color = hsl_to_rgb(hue, 1.0, 0.72);
        color.a = link.alpha;
        draw_line(a.px, a.py, b.px, b.py, thickness, color);
    }
}

fn draw_burst_links(field: &ParticleField, projected: &[ProjectedParticle], hue: f32) {
    if projected.iter().all(|p| p.burst <= 0.0) {
        return;
    }
    let by_id: HashMap<_, _> = projected.iter().map(|p| (p.id, p)).collect();

    for particle in field.iter().filter(|p| p.burst > 0.0) {
        let Some(from) = by_id.get(&particle.id) else {
            continue;
        };
        let mut color = hsl_to_rgb(hue, 1.0, 0.8);
        color.a = particle.burst * 0.5;
        for to in particle.links.iter().filter_map(|id| by_id.get(id)) {
            draw_line(from.px, from.py, to.px, to.py, 1.5, color);
        }
    }
}

fn draw_portal(portal: &Portal, sprites: &SpriteSet, w: f32, h: f32) {
    if !portal.is_active() {
        return;
    }
    let x = portal.pos[0] * w;
    let y = portal.pos[1] * h;
    let r = portal.radius;

    match sprites.portal() {
        Some(texture) => draw_texture_ex(
            texture,
            x - r,
            y - r,
            Color::new(1.0, 1.0, 1.0, 0.6 * portal.opacity),
            DrawTextureParams {
                dest_size: Some(vec2(r * 2.0, r * 2.0)),
                rotation: portal.rotation,
                ..Default::default()
            },
        ),
        None => {
            draw_radial_glow(x, y, r, Color::new(0.47, 0.47, 1.0, 0.18 * portal.opacity));
            draw_radial_glow(x, y, r * 0.7, Color::new(0.0, 1.0, 1.0, 0.25 * portal.opacity));
        }
    }
}

fn draw_wraith(wraith: &Wraith, sprites: &SpriteSet, time: f32, w: f32, h: f32) {
    for burst in &wraith.effects.bursts {
        let (x, y) = (burst.origin[0] * w, burst.origin[1] * h);
        draw_radial_glow(x, y, burst.radius, Color::new(0.47, 1.0, 1.0, 0.35 * burst.life));
    }
    for spark in &wraith.effects.sparks {
        let x = spark.origin[0] * w + spark.offset[0];
        let y = spark.origin[1] * h + spark.offset[1];
        draw_circle(x, y, 2.0, Color::new(0.7, 1.0, 1.0, 0.8 * spark.life));
    }

    let Some(creature) = wraith.creature() else {
        return;
    };

    for point in &creature.trail {
        let (x, y) = (point.pos[0] * w, point.pos[1] * h);
        draw_radial_glow(x, y, 30.0, Color::new(0.39, 0.78, 1.0, 0.18 * point.life));
    }

    let x = creature.pos[0] * w;
    let y = creature.pos[1] * h;
    let s = creature.size * (1.0 + creature.pulse * 0.4);

    match sprites.creature(creature.tier) {
        Some(texture) => draw_texture_ex(
            texture,
            x - s,
            y - s,
            Color::new(1.0, 1.0, 1.0, 0.9 * creature.opacity),
            DrawTextureParams {
                dest_size: Some(vec2(s * 2.0, s * 2.0)),
                rotation: creature.heading(time),
                ..Default::default()
            },
        ),
        None => draw_radial_glow(x, y, s, Color::new(0.63, 0.86, 1.0, 0.7 * creature.opacity)),
    }
}

fn draw_bloom(w: f32, h: f32) {
    let radius = w.max(h) * 0.8;
    draw_radial_glow(w / 2.0, h / 2.0, radius, Color::new(0.59, 0.39, 1.0, 0.03));
    draw_radial_glow(w / 2.0, h / 2.0, radius * 0.5, Color::new(0.0, 1.0, 1.0, 0.06));
}
