use std::path::Path;

use chrono::Local;
use tracing::{info, warn};

use quadratic_rocket::core::error::Result;
use quadratic_rocket::core::export::{self, ChartText, ImageFormat};

use crate::constants::SNAPSHOT_DIR;
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions, shown_time_s: f64) {
    if actions.toggle_animate {
        state.animate = !state.animate;
    }
    if actions.toggle_answer {
        state.show_answer = !state.show_answer;
    }
    if actions.snapshot {
        state.status_line = match save_snapshot(state, shown_time_s) {
            Ok(path) => format!("Saved {path}"),
            Err(err) => {
                warn!(%err, "snapshot failed");
                format!("Snapshot failed: {err}")
            }
        };
    }
}

/// Folds this frame's widget state into the scene and picks the time to
/// draw. New launch values restart a running animation from t = 0.
pub(crate) fn advance(state: &mut AppRuntime, frame_dt: f32) -> f64 {
    if state.sync_controls() && state.animator.is_playing() {
        info!("launch changed, restarting animation");
        state.animator.stop();
    }

    let tick = state
        .animator
        .tick(state.animate, state.controls.time_s, frame_dt as f64);
    if tick.finished {
        state.animate = false;
        state.status_line = "Animation finished".to_string();
    }
    tick.time_s
}

fn save_snapshot(state: &AppRuntime, time_s: f64) -> Result<String> {
    let dir = Path::new(SNAPSHOT_DIR);
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export::snapshot_name(Local::now(), ImageFormat::Png));
    export::save(
        &path,
        &state.scene.render_frame(time_s),
        &state.snapshot_sprite,
        ImageFormat::Png,
        ChartText::Full,
    )?;
    Ok(path.display().to_string())
}
