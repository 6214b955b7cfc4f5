use macroquad::prelude::*;
use rift::simulation::idle::ActivityKind;
use rift::simulation::viewport::Viewport;

/// Input gathered for one frame.
#[derive(Default)]
pub struct FrameInput {
    pub activity: Vec<ActivityKind>,
    pub pointer: Option<(f32, f32)>,
    pub click: Option<(f32, f32)>,
    pub toggle_motion: bool,
    pub toggle_stats: bool,
}

impl FrameInput {
    /// The click meant for the scene, if it did not land on the overlay.
    pub fn scene_click(&self, over_ui: bool) -> Option<(f32, f32)> {
        self.click.filter(|_| !over_ui)
    }
}

/// Turns raw macroquad input into activity signals and tracks the device class.
pub struct InputTracker {
    last_mouse: (f32, f32),
    touch_seen: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            last_mouse: mouse_position(),
            touch_seen: false,
        }
    }

    pub fn poll(&mut self) -> FrameInput {
        let mut frame = FrameInput::default();

        let mouse = mouse_position();
        if mouse != self.last_mouse {
            self.last_mouse = mouse;
            frame.activity.push(ActivityKind::PointerMove);
            frame.pointer = Some(mouse);
        }

        let (wheel_x, wheel_y) = mouse_wheel();
        if wheel_x != 0.0 || wheel_y != 0.0 {
            frame.activity.push(ActivityKind::Scroll);
        }

        if let Some(key) = get_last_key_pressed() {
            frame.activity.push(ActivityKind::KeyPress);
            frame.toggle_motion = key == KeyCode::M;
            frame.toggle_stats = key == KeyCode::Tab;
        }

        let touches = touches();
        if touches.iter().any(|t| t.phase == TouchPhase::Started) {
            self.touch_seen = true;
            frame.activity.push(ActivityKind::TouchStart);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            frame.click = Some(mouse);
        }

        frame
    }

    /// Current window as a viewport; touch-primary once any touch was seen.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            screen_width(),
            screen_height(),
            screen_dpi_scale(),
            self.touch_seen,
        )
    }
}
