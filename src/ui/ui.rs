use egui_macroquad::egui;
use rift::simulation::motion::MotionPreference;
use rift::simulation::scene::Scene;

pub struct UIState {
    pub show_stats: bool,
    pub pointer_over_ui: bool,
    pub stats_panel_width: f32,
    pub status_message: Option<String>,
    pub sprites_loading: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            show_stats: false,
            pointer_over_ui: false,
            stats_panel_width: 260.0,
            status_message: None,
            sprites_loading: true,
        }
    }
}

/// Draws the motion toggle and, when enabled, the stats and events panels.
///
/// The toggle writes straight to the shared preference; the scene learns
/// about it through its watcher on the next frame. Only builds the egui pass,
/// [`process_egui`] paints it, so this runs before the frame's clicks are
/// routed.
pub fn draw_ui(state: &mut UIState, scene: &Scene, motion: &MotionPreference) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(230, 240, 250));
        visuals.window_fill = egui::Color32::from_rgba_premultiplied(10, 16, 28, 210);
        egui_ctx.set_visuals(visuals);

        draw_motion_toggle(egui_ctx, motion);

        if state.show_stats {
            super::stats::draw_stats_panel(egui_ctx, state, scene);
            super::events::draw_events_panel(egui_ctx, scene);
        }

        state.pointer_over_ui =
            egui_ctx.wants_pointer_input() || egui_ctx.is_pointer_over_area();
    });
}

fn draw_motion_toggle(egui_ctx: &egui::Context, motion: &MotionPreference) {
    egui::Area::new(egui::Id::new("motion_toggle"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(egui_ctx, |ui| {
            let label = if motion.get() {
                "Motion: On"
            } else {
                "Motion: Off"
            };
            if ui
                .button(label)
                .on_hover_text("Toggle motion effects (M)")
                .clicked()
            {
                motion.toggle();
            }
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
