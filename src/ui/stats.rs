use egui_macroquad::egui;
use rift::simulation::scene::Scene;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, scene: &Scene) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Rift");
            ui.separator();

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
                ui.separator();
            }

            ui.label(format!("Time: {:.1}s", scene.time));
            ui.label(format!("Motion: {}", if scene.motion_enabled() { "on" } else { "off" }));
            ui.label(format!(
                "Viewport: {:.0}x{:.0}{}",
                scene.viewport.width,
                scene.viewport.height,
                if scene.is_compact() { " (compact)" } else { "" }
            ));
            if state.sprites_loading {
                ui.label("Sprites: loading");
            }

            ui.separator();
            ui.label(format!(
                "Particles: {} / {}",
                scene.field.len(),
                scene.field.target_count()
            ));

            ui.separator();
            ui.label(format!("Wraith: {}", scene.wraith.state_name()));
            if let Some(creature) = scene.wraith.creature() {
                ui.label(format!("Size: {:.1}", creature.size));
                ui.label(format!("Tier: {}", creature.tier));
                ui.add(egui::ProgressBar::new(creature.opacity).text("Opacity"));
            }
            match scene.idle.deadline() {
                Some(deadline) => {
                    ui.label(format!("Summon in: {:.0}s", (deadline - scene.time).max(0.0)));
                }
                None if !scene.idle.is_enabled() => {
                    ui.label("Idle monitor: off");
                }
                None => {}
            }

            ui.separator();
            ui.label(format!("Visits: {}", scene.event_log.visits()));
            ui.label(format!("Particles eaten: {}", scene.event_log.meals()));
            ui.label(format!("Tier ups: {}", scene.event_log.tier_ups()));
        });
}
