use macroquad::prelude::*;
use tracing::{info, warn};

use quadratic_rocket::core::error::{Result, RocketError};
use quadratic_rocket::core::export;
use quadratic_rocket::core::sprite::{RocketSprite, sprite_path};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::{draw_explanation, draw_header, draw_status};
use crate::playback::{advance, apply_actions};
use crate::render::{PlotRect, draw_frame};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Quadratic Rocket".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

async fn load_sprite() -> Result<Texture2D> {
    let path = sprite_path();
    let texture = load_texture(&path)
        .await
        .map_err(|err| RocketError::SpriteLoad {
            path: path.clone(),
            reason: err.to_string(),
        })?;
    texture.set_filter(FilterMode::Linear);
    info!(
        %path,
        width = texture.width(),
        height = texture.height(),
        "rocket texture loaded"
    );
    Ok(texture)
}

pub(crate) async fn run() -> Result<()> {
    let rocket = load_sprite().await?;
    let snapshot_sprite =
        RocketSprite::load(sprite_path())?.scaled_to_height(export::SPRITE_HEIGHT_PX);
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(snapshot_sprite);
    let mut last_shown_s = state.controls.time_s;

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let plot = PlotRect {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions, last_shown_s);

        let time_s = advance(&mut state, frame_dt);
        last_shown_s = time_s;
        let frame = state.scene.render_frame(time_s);

        clear_background(BACKGROUND);
        draw_header(LEFT_MARGIN, ui_font.as_ref());
        draw_frame(&frame, plot, &rocket, ui_font.as_ref());
        draw_explanation(
            &state,
            frame.motion,
            LEFT_MARGIN,
            plot.right,
            plot.bottom + 90.0,
            ui_font.as_ref(),
        );
        draw_status(&state, LEFT_MARGIN, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
