use quadratic_rocket::core::animator::Animator;
use quadratic_rocket::core::controls::{ControlValues, INITIAL_HEIGHT, INITIAL_VELOCITY, TIME};
use quadratic_rocket::core::frame::Scene;
use quadratic_rocket::core::sprite::RocketSprite;

/// Raw widget positions. Sliders are continuous, so these are snapped to
/// each control's step before they reach the scene.
pub(crate) struct SliderValues {
    pub(crate) initial_height: f32,
    pub(crate) initial_velocity: f32,
    pub(crate) time_s: f32,
}

pub(crate) struct AppRuntime {
    pub(crate) sliders: SliderValues,
    pub(crate) animate: bool,
    pub(crate) controls: ControlValues,
    pub(crate) scene: Scene,
    pub(crate) animator: Animator,
    pub(crate) show_answer: bool,
    pub(crate) status_line: String,
    /// Raster copy of the rocket for PNG snapshots.
    pub(crate) snapshot_sprite: RocketSprite,
}

impl AppRuntime {
    pub(crate) fn new(snapshot_sprite: RocketSprite) -> Self {
        let controls = ControlValues::default();
        Self {
            sliders: SliderValues {
                initial_height: controls.initial_height as f32,
                initial_velocity: controls.initial_velocity as f32,
                time_s: controls.time_s as f32,
            },
            animate: controls.animate,
            controls,
            scene: Scene::new(controls.scene_params()),
            animator: Animator::new(),
            show_answer: false,
            status_line: "Ready".to_string(),
            snapshot_sprite,
        }
    }

    /// Snaps the widgets and, when c or b moved, rebuilds the scene.
    /// Returns whether the scene was replaced.
    pub(crate) fn sync_controls(&mut self) -> bool {
        self.controls = ControlValues {
            initial_height: self.sliders.initial_height as f64,
            initial_velocity: self.sliders.initial_velocity as f64,
            animate: self.animate,
            time_s: self.sliders.time_s as f64,
        }
        .snapped();

        self.sliders.initial_height = self.controls.initial_height as f32;
        self.sliders.initial_velocity = self.controls.initial_velocity as f32;
        self.sliders.time_s = self.controls.time_s as f32;

        self.scene.set_params(self.controls.scene_params())
    }

    pub(crate) fn slider_ranges() -> [(f32, f32); 3] {
        [INITIAL_HEIGHT, INITIAL_VELOCITY, TIME].map(|c| (c.min as f32, c.max as f32))
    }
}
