// UI module - egui overlay on top of the background

mod events;
mod stats;
mod ui;

pub use ui::{UIState, draw_ui, process_egui};
