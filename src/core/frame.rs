//! Frame composition.
//!
//! A [`Scene`] owns everything derived from one set of [`SceneParameters`]:
//! the sampled curve, the vertex and the plot extents. Rendering a time value
//! against it yields a [`Frame`], a complete description of one chart that a
//! [`FrameSink`] turns into pixels.

use tracing::debug;

use crate::core::motion::{MotionState, SceneParameters, VertexPoint};
use crate::core::trajectory::Trajectory;
use crate::core::window::PlotWindow;

pub const CHART_TITLE: &str = "Height–Time Graph (Quadratic)";
pub const X_LABEL: &str = "Time (seconds)";
pub const Y_LABEL: &str = "Height (meters)";
pub const CURVE_LABEL: &str = "Rocket Path";
pub const VERTEX_LABEL: &str = "Maximum Height";

/// Where and how to draw the rocket sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpritePlacement {
    pub center: (f64, f64),
    /// Counterclockwise rotation applied to the upright artwork.
    pub rotation_deg: f64,
}

impl SpritePlacement {
    /// Size of the box that holds the rotated artwork without clipping it.
    pub fn expanded_size(&self, width: f64, height: f64) -> (f64, f64) {
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        ((width * cos) + (height * sin), (width * sin) + (height * cos))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub motion: MotionState,
    pub window: PlotWindow,
    pub trajectory: &'a Trajectory,
    pub vertex: VertexPoint,
    /// `None` once the rocket is below ground.
    pub sprite: Option<SpritePlacement>,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub show_legend: bool,
    pub show_grid: bool,
}

/// Display surface. Accepts one composed frame at a time.
pub trait FrameSink {
    type Error;

    fn show(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    params: SceneParameters,
    trajectory: Trajectory,
    vertex: VertexPoint,
    window: PlotWindow,
}

impl Scene {
    pub fn new(params: SceneParameters) -> Self {
        let vertex = params.vertex();
        Self {
            params,
            trajectory: Trajectory::compute(&params),
            vertex,
            window: PlotWindow::for_vertex(vertex),
        }
    }

    pub fn params(&self) -> &SceneParameters {
        &self.params
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn vertex(&self) -> VertexPoint {
        self.vertex
    }

    pub fn window(&self) -> PlotWindow {
        self.window
    }

    /// Replaces the scene when the parameters differ. Returns whether a
    /// recompute happened.
    pub fn set_params(&mut self, params: SceneParameters) -> bool {
        if params == self.params {
            return false;
        }
        debug!(
            initial_height = params.initial_height,
            initial_velocity = params.initial_velocity,
            "recomputing scene"
        );
        *self = Self::new(params);
        true
    }

    pub fn render_frame(&self, time_s: f64) -> Frame<'_> {
        let motion = self.params.motion_state(time_s);
        let sprite = motion.is_above_ground().then_some(SpritePlacement {
            center: (time_s, motion.height_m),
            rotation_deg: motion.sprite_rotation_deg,
        });

        Frame {
            motion,
            window: self.window,
            trajectory: &self.trajectory,
            vertex: self.vertex,
            sprite,
            title: CHART_TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            show_legend: true,
            show_grid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Scene, SpritePlacement};
    use crate::core::motion::SceneParameters;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn frame_carries_sprite_at_current_position() {
        let scene = Scene::new(SceneParameters::new(10.0, 20.0));
        let frame = scene.render_frame(0.0);
        let sprite = frame.sprite.expect("rocket is on the pad");
        assert_eq!(sprite.center, (0.0, 10.0));
        assert_eq!(frame.window.y_max, 70.0);
        assert_eq!(frame.vertex.time_s, 2.0);
    }

    #[test]
    fn sprite_drawn_exactly_at_ground() {
        let scene = Scene::new(SceneParameters::new(0.0, 5.0));
        let frame = scene.render_frame(1.0);
        assert!(frame.sprite.is_some());
    }

    #[test]
    fn sprite_omitted_after_landing() {
        let scene = Scene::new(SceneParameters::new(10.0, 20.0));
        let frame = scene.render_frame(9.0);
        assert!(frame.motion.height_m < 0.0);
        assert!(frame.sprite.is_none());
        // Explanation values still come through for a landed rocket.
        assert_close(frame.motion.velocity, -70.0, 1e-12);
    }

    #[test]
    fn unchanged_params_keep_scene() {
        let mut scene = Scene::new(SceneParameters::new(10.0, 20.0));
        assert!(!scene.set_params(SceneParameters::new(10.0, 20.0)));
        assert!(scene.set_params(SceneParameters::new(30.0, 20.0)));
        assert_eq!(scene.vertex().height_m, 50.0);
        assert_eq!(scene.trajectory().points()[0].1, Some(30.0));
    }

    #[test]
    fn rotated_box_grows() {
        let upright = SpritePlacement {
            center: (0.0, 0.0),
            rotation_deg: 0.0,
        };
        let (w, h) = upright.expanded_size(20.0, 40.0);
        assert_close(w, 20.0, 1e-9);
        assert_close(h, 40.0, 1e-9);

        let sideways = SpritePlacement {
            rotation_deg: -90.0,
            ..upright
        };
        let (w, h) = sideways.expanded_size(20.0, 40.0);
        assert_close(w, 40.0, 1e-9);
        assert_close(h, 20.0, 1e-9);

        let diagonal = SpritePlacement {
            rotation_deg: -45.0,
            ..upright
        };
        let (w, h) = diagonal.expanded_size(20.0, 40.0);
        assert!(w > 20.0 && h > 20.0);
        assert_close(w, h, 1e-9);
    }
}
