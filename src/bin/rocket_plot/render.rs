use macroquad::prelude::*;

use quadratic_rocket::core::frame::{CURVE_LABEL, Frame, SpritePlacement, VERTEX_LABEL};
use quadratic_rocket::core::window::PlotWindow;

use crate::constants::{
    CURVE_COLOR, GRID_COLOR, LABEL_COLOR, SPRITE_HEIGHT_PX, VERTEX_COLOR, VERTEX_MARKER_RADIUS,
    X_GRID_LINES, Y_GRID_LINES,
};

/// Screen rectangle the chart's data area occupies.
#[derive(Clone, Copy)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotRect {
    fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }

    pub(crate) fn project(&self, point: (f64, f64), window: PlotWindow) -> Vec2 {
        let x = self.left + (point.0 / window.x_max) as f32 * self.width();
        let y = self.bottom - (point.1 / window.y_max) as f32 * self.height();
        vec2(x, y)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(plot: PlotRect) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = plot.left + t * plot.width();
        draw_line(x, plot.top, x, plot.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = plot.bottom - t * plot.height();
        draw_line(plot.left, y, plot.right, y, 1.0, GRID_COLOR);
    }
}

pub(crate) fn draw_axes(plot: PlotRect) {
    draw_line(plot.left, plot.bottom, plot.right, plot.bottom, 2.0, DARKGRAY);
    draw_line(plot.left, plot.top, plot.left, plot.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_labels(frame: &Frame<'_>, plot: PlotRect, font: Option<&Font>) {
    let tick_font_size: u16 = 16;
    let window = frame.window;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = plot.left + t * plot.width();
        let label = format_axis_value(t as f64 * window.x_max, window.x_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            plot.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = plot.bottom - t * plot.height();
        let label = format_axis_value(t as f64 * window.y_max, window.y_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (plot.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    let x_size = measure_text(frame.x_label, font, 18, 1.0);
    draw_ui_text(
        frame.x_label,
        plot.left + (plot.width() - x_size.width) * 0.5,
        plot.bottom + 48.0,
        18,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(frame.y_label, plot.left, plot.top - 10.0, 18, LABEL_COLOR, font);

    let title_size = measure_text(frame.title, font, 24, 1.0);
    draw_ui_text(
        frame.title,
        plot.left + (plot.width() - title_size.width) * 0.5,
        plot.top - 36.0,
        24,
        BLACK,
        font,
    );
}

/// Draws each visible run separately so masked samples leave a gap.
pub(crate) fn draw_curve(frame: &Frame<'_>, plot: PlotRect) {
    for segment in frame.trajectory.segments() {
        let mut points = segment
            .into_iter()
            .map(|point| plot.project(point, frame.window));
        let Some(mut prev) = points.next() else {
            continue;
        };
        for cur in points {
            draw_line(prev.x, prev.y, cur.x, cur.y, 3.0, CURVE_COLOR);
            prev = cur;
        }
    }
}

pub(crate) fn draw_vertex(frame: &Frame<'_>, plot: PlotRect) {
    let p = plot.project((frame.vertex.time_s, frame.vertex.height_m), frame.window);
    draw_circle(p.x, p.y, VERTEX_MARKER_RADIUS, VERTEX_COLOR);
}

fn sprite_size(texture: &Texture2D) -> Vec2 {
    let aspect = texture.width() / texture.height().max(1.0);
    vec2(SPRITE_HEIGHT_PX * aspect, SPRITE_HEIGHT_PX)
}

pub(crate) fn draw_rocket(
    texture: &Texture2D,
    sprite: SpritePlacement,
    window: PlotWindow,
    plot: PlotRect,
    font: Option<&Font>,
) {
    let center = plot.project(sprite.center, window);
    let size = sprite_size(texture);

    // macroquad turns clockwise for positive angles in screen space.
    draw_texture_ex(
        texture,
        center.x - size.x * 0.5,
        center.y - size.y * 0.5,
        WHITE,
        DrawTextureParams {
            dest_size: Some(size),
            rotation: -(sprite.rotation_deg.to_radians() as f32),
            ..Default::default()
        },
    );

    let (_, box_h) = sprite.expanded_size(size.x as f64, size.y as f64);
    let tag = format!("t = {:.1} s", sprite.center.0);
    let tag_size = measure_text(&tag, font, 16, 1.0);
    draw_ui_text(
        &tag,
        center.x - tag_size.width * 0.5,
        center.y - (box_h as f32 * 0.5) - 6.0,
        16,
        DARKGRAY,
        font,
    );
}

pub(crate) fn draw_legend(plot: PlotRect, font: Option<&Font>) {
    let width = 190.0;
    let x = plot.right - width - 12.0;
    let y = plot.top + 12.0;
    draw_rectangle(x, y, width, 62.0, Color::new(1.0, 1.0, 1.0, 0.85));
    draw_rectangle_lines(x, y, width, 62.0, 1.0, LABEL_COLOR);

    draw_line(x + 12.0, y + 20.0, x + 40.0, y + 20.0, 3.0, CURVE_COLOR);
    draw_ui_text(CURVE_LABEL, x + 50.0, y + 26.0, 18, BLACK, font);
    draw_circle(x + 26.0, y + 44.0, VERTEX_MARKER_RADIUS, VERTEX_COLOR);
    draw_ui_text(VERTEX_LABEL, x + 50.0, y + 50.0, 18, BLACK, font);
}

pub(crate) fn draw_frame(
    frame: &Frame<'_>,
    plot: PlotRect,
    texture: &Texture2D,
    font: Option<&Font>,
) {
    if frame.show_grid {
        draw_grid(plot);
    }
    draw_axes(plot);
    draw_axis_labels(frame, plot, font);
    draw_curve(frame, plot);
    draw_vertex(frame, plot);
    if let Some(sprite) = frame.sprite {
        draw_rocket(texture, sprite, frame.window, plot, font);
    }
    if frame.show_legend {
        draw_legend(plot, font);
    }
}
