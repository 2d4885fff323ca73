use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use quadratic_rocket::core::controls::{INITIAL_HEIGHT, INITIAL_VELOCITY, TIME};

use crate::constants::{PANEL_POS, PANEL_SIZE};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) toggle_animate: bool,
    pub(crate) snapshot: bool,
    pub(crate) toggle_answer: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            toggle_animate: self.toggle_animate || other.toggle_animate,
            snapshot: self.snapshot || other.snapshot,
            toggle_answer: self.toggle_answer || other.toggle_answer,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        toggle_animate: is_key_pressed(KeyCode::Space),
        snapshot: is_key_pressed(KeyCode::S),
        toggle_answer: is_key_pressed(KeyCode::H),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let [height_range, velocity_range, time_range] = AppRuntime::slider_ranges();

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_POS.0, PANEL_POS.1),
        vec2(PANEL_SIZE.0, PANEL_SIZE.1),
    )
    .label("Launch Controls")
    .ui(&mut *root_ui(), |ui| {
        ui.slider(
            hash!(),
            INITIAL_HEIGHT.label,
            height_range.0..height_range.1,
            &mut state.sliders.initial_height,
        );
        ui.slider(
            hash!(),
            INITIAL_VELOCITY.label,
            velocity_range.0..velocity_range.1,
            &mut state.sliders.initial_velocity,
        );
        ui.label(None, "a = -5 (gravity, fixed)");
        ui.separator();
        ui.checkbox(hash!(), "Animate Rocket (Space)", &mut state.animate);
        ui.slider(
            hash!(),
            TIME.label,
            time_range.0..time_range.1,
            &mut state.sliders.time_s,
        );
        ui.separator();
        if ui.button(None, "Save Snapshot (S)") {
            actions.snapshot = true;
        }
        if ui.button(None, "Show/Hide Answer (H)") {
            actions.toggle_answer = true;
        }
        ui.label(
            None,
            if state.animator.is_playing() {
                "Animation: Playing"
            } else {
                "Animation: Idle"
            },
        );
    });

    actions
}
