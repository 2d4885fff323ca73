use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1000;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const SNAPSHOT_DIR: &str = "snapshots";

pub const LEFT_MARGIN: f32 = 470.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 150.0;
pub const BOTTOM_MARGIN: f32 = 330.0;

pub const TITLE_Y: f32 = 46.0;
pub const PANEL_POS: (f32, f32) = (18.0, 120.0);
pub const PANEL_SIZE: (f32, f32) = (380.0, 330.0);
pub const SPRITE_HEIGHT_PX: f32 = 56.0;
pub const VERTEX_MARKER_RADIUS: f32 = 7.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 7;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const CURVE_COLOR: Color = Color::new(0.12, 0.47, 0.71, 1.0);
pub const VERTEX_COLOR: Color = Color::new(1.0, 0.50, 0.05, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
