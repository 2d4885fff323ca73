use macroquad::prelude::*;

use quadratic_rocket::core::explain::{DIRECTION_NOTES, EXTENSION_QUESTIONS, Explanation};
use quadratic_rocket::core::motion::MotionState;

use crate::constants::{HEADER_COLOR, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

const LINE_H: f32 = 22.0;

pub(crate) fn draw_header(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "Secondary 3 Maths - Application of Quadratic Equations",
        left,
        TITLE_Y,
        30,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        "Visualising quadratic equations using projectile motion",
        left,
        TITLE_Y + 30.0,
        20,
        DARKGRAY,
        font,
    );
}

/// Three columns under the chart: the equation, direction of motion, and
/// the vertex readout with the extension questions.
pub(crate) fn draw_explanation(
    state: &AppRuntime,
    motion: MotionState,
    left: f32,
    right: f32,
    top: f32,
    font: Option<&Font>,
) {
    let text = Explanation::new(*state.scene.params(), motion);
    let column_w = (right - left) / 3.0;

    let mut y = top;
    draw_ui_text("Quadratic Equation", left, y, 22, HEADER_COLOR, font);
    y += LINE_H + 4.0;
    draw_ui_text(&text.equation(), left, y, 22, BLUE, font);
    for note in text.coefficient_notes() {
        y += LINE_H;
        draw_ui_text(&note, left, y, 16, DARKGRAY, font);
    }

    let x = left + column_w;
    let mut y = top;
    draw_ui_text("Direction of Motion", x, y, 22, HEADER_COLOR, font);
    y += LINE_H + 4.0;
    draw_ui_text(&text.velocity_formula(), x, y, 20, BLUE, font);
    for note in DIRECTION_NOTES {
        y += LINE_H;
        draw_ui_text(note, x, y, 16, DARKGRAY, font);
    }
    y += LINE_H;
    draw_ui_text(&text.current_motion(), x, y, 16, HEADER_COLOR, font);

    let x = left + column_w * 2.0;
    let mut y = top;
    draw_ui_text(&text.maximum_height(), x, y, 20, HEADER_COLOR, font);
    y += LINE_H;
    draw_ui_text(&text.time_of_maximum(), x, y, 20, HEADER_COLOR, font);
    y += LINE_H + 8.0;
    draw_ui_text("Extension Question", x, y, 20, HEADER_COLOR, font);
    for line in EXTENSION_QUESTIONS {
        y += LINE_H;
        draw_ui_text(line, x, y, 16, DARKGRAY, font);
    }
    if state.show_answer {
        y += LINE_H;
        draw_ui_text(&text.landing_answer(), x, y, 16, DARKGREEN, font);
    }
}

pub(crate) fn draw_status(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    draw_ui_text(
        &format!(
            "c = {:.0} m | b = {:.0} | t = {:.1} s | {}",
            state.controls.initial_height,
            state.controls.initial_velocity,
            state.controls.time_s,
            state.status_line
        ),
        left,
        screen_h - 14.0,
        18,
        DARKGRAY,
        font,
    );
}
