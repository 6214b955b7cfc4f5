use macroquad::prelude::*;
use rift::simulation::motion::{MotionFade, MotionSettings};
use rift::simulation::params::Params;
use rift::simulation::scene::Scene;

mod assets;
mod graphics;
mod input;
mod ui;

const PARAMS_PATH: &str = "rift.json";
const MOTION_PATH: &str = "rift-motion.json";
// long stalls (window drag, suspend) must not fast-forward the idle timer
const MAX_FRAME_TIME: f32 = 0.1;

fn window_conf() -> Conf {
    Conf {
        window_title: "Rift".to_string(),
        window_width: 1280,
        window_height: 800,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt().init();

    let params = Params::load_or_default(PARAMS_PATH);
    let motion = MotionSettings::load_or_default(MOTION_PATH).preference();
    let mut motion_watcher = motion.subscribe();
    let mut motion_fade = MotionFade::default();

    let mut input = input::InputTracker::new();
    let mut scene = Scene::new(&params, input.viewport(), motion.get());
    let mut sprites = assets::SpriteSet::new(&params);
    let mut ui_state = ui::UIState::new();

    tracing::info!(
        particles = scene.field.len(),
        motion = motion.get(),
        "starting rift"
    );

    loop {
        sprites.load_next().await;
        ui_state.sprites_loading = sprites.is_loading();

        let frame = input.poll();
        if frame.toggle_motion {
            motion.toggle();
        }
        if frame.toggle_stats {
            ui_state.show_stats = !ui_state.show_stats;
        }

        if let Some(enabled) = motion_watcher.poll() {
            motion_fade.request(enabled);
            ui_state.status_message = MotionSettings::from_preference(&motion)
                .save_to_file(MOTION_PATH)
                .err()
                .map(|err| {
                    tracing::warn!(%err, "could not persist motion preference");
                    format!("Motion preference not saved: {err}")
                });
        }

        let dt = get_frame_time().min(MAX_FRAME_TIME);
        if let Some(enabled) = motion_fade.advance(dt) {
            scene.set_motion_enabled(enabled);
        }

        scene.request_resize(input.viewport());

        // egui has to see this frame's pointer before clicks reach the scene
        ui::draw_ui(&mut ui_state, &scene, &motion);

        for kind in &frame.activity {
            scene.on_activity(&params, *kind);
        }
        if let Some((x, y)) = frame.pointer {
            scene.set_pointer(x, y);
        }
        if let Some((x, y)) = frame.scene_click(ui_state.pointer_over_ui) {
            scene.on_click(&params, x, y);
        }

        scene.step(&params, dt);

        graphics::draw_scene(&scene, &params, &sprites, motion_fade.opacity());
        ui::process_egui();

        next_frame().await
    }
}
