use egui_macroquad::egui;
use rift::simulation::event_log::EventColor;
use rift::simulation::scene::Scene;

/// Draws a transparent panel showing recent events
pub fn draw_events_panel(egui_ctx: &egui::Context, scene: &Scene) {
    let screen_height = egui_ctx.screen_rect().height();
    let panel_height = 260.0;

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, screen_height - panel_height - 10.0))
        .fixed_size(egui::vec2(300.0, panel_height))
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(egui::Color32::from_rgba_premultiplied(10, 16, 28, 200))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(80, 110, 140))),
        )
        .show(egui_ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;

            let events = scene.event_log.events();
            if events.is_empty() {
                ui.label(
                    egui::RichText::new("Nothing yet...")
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .size(12.0),
                );
                return;
            }

            for event in events {
                let color = match event.color {
                    EventColor::Spawn => egui::Color32::from_rgb(100, 230, 255),
                    EventColor::Meal => egui::Color32::from_rgb(255, 210, 110),
                    EventColor::TierUp => egui::Color32::from_rgb(240, 120, 255),
                    EventColor::Exit => egui::Color32::from_rgb(150, 150, 160),
                    EventColor::Field => egui::Color32::from_rgb(120, 160, 255),
                };

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("[{:.1}s]", event.time))
                            .color(egui::Color32::from_rgb(180, 180, 200))
                            .size(11.0)
                            .monospace(),
                    );
                    ui.label(egui::RichText::new(&event.description).color(color).size(11.0));
                });
            }
        });
}
