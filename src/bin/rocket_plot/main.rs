use macroquad::prelude::Conf;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;
mod constants;
mod controls;
mod hud;
mod playback;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = app::run().await {
        error!("{err}");
        std::process::exit(1);
    }
}
