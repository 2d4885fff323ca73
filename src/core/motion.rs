/// Coefficient `a` of the height polynomial. Negative, so the curve opens downward.
pub const GRAVITY: f64 = -5.0;

/// Right edge of the time domain shown on the chart.
pub const T_MAX: f64 = 10.0;

/// Coefficients of `h(t) = a*t^2 + b*t + c`.
///
/// Values are replaced wholesale when an input changes; nothing mutates a
/// parameter set while a frame is being rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParameters {
    pub gravity: f64,
    pub initial_velocity: f64,
    pub initial_height: f64,
}

impl SceneParameters {
    pub fn new(initial_height: f64, initial_velocity: f64) -> Self {
        Self {
            gravity: GRAVITY,
            initial_velocity,
            initial_height,
        }
    }

    /// Same launch with a different `a`. Only tests reach for this; no input
    /// surface exposes gravity.
    pub fn with_gravity(self, gravity: f64) -> Self {
        Self { gravity, ..self }
    }

    pub fn height(&self, time_s: f64) -> f64 {
        (self.gravity * time_s * time_s) + (self.initial_velocity * time_s) + self.initial_height
    }

    /// First derivative of [`Self::height`].
    pub fn velocity(&self, time_s: f64) -> f64 {
        (2.0 * self.gravity * time_s) + self.initial_velocity
    }

    /// Direction of travel measured from the horizontal, in degrees.
    pub fn heading_degrees(&self, time_s: f64) -> f64 {
        self.velocity(time_s).atan().to_degrees()
    }

    /// Rotation for sprite artwork that points up at rest: level flight is a
    /// quarter turn away from the artwork's own axis.
    ///
    /// Drawing surfaces apply this counterclockwise, so the nose follows the
    /// direction of travel (up-right while climbing, right at the vertex).
    /// Turning it clockwise instead would point the nose up-left on the way up.
    pub fn sprite_rotation_degrees(&self, time_s: f64) -> f64 {
        self.heading_degrees(time_s) - 90.0
    }

    pub fn motion_state(&self, time_s: f64) -> MotionState {
        MotionState {
            time_s,
            height_m: self.height(time_s),
            velocity: self.velocity(time_s),
            heading_deg: self.heading_degrees(time_s),
            sprite_rotation_deg: self.sprite_rotation_degrees(time_s),
        }
    }

    /// Maximum of the parabola, solved analytically.
    pub fn vertex(&self) -> VertexPoint {
        let time_s = -self.initial_velocity / (2.0 * self.gravity);
        VertexPoint {
            time_s,
            height_m: self.height(time_s),
        }
    }

    /// Positive root of `h(t) = 0`, i.e. when the rocket reaches the ground.
    /// `None` when the curve never touches zero, which cannot happen while
    /// `a < 0` and `c >= 0`.
    pub fn landing_time(&self) -> Option<f64> {
        let (a, b, c) = (self.gravity, self.initial_velocity, self.initial_height);
        let disc = (b * b) - (4.0 * a * c);
        if disc < 0.0 {
            return None;
        }
        let root = (-b - disc.sqrt()) / (2.0 * a);
        (root >= 0.0).then_some(root)
    }
}

impl Default for SceneParameters {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

/// Derived per frame and dropped afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub time_s: f64,
    pub height_m: f64,
    pub velocity: f64,
    pub heading_deg: f64,
    pub sprite_rotation_deg: f64,
}

impl MotionState {
    /// Heights below zero mean the rocket has already landed.
    pub fn is_above_ground(&self) -> bool {
        self.height_m >= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexPoint {
    pub time_s: f64,
    pub height_m: f64,
}

#[cfg(test)]
mod tests {
    use super::{GRAVITY, SceneParameters, T_MAX};
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn vertex_of_default_launch() {
        let params = SceneParameters::new(10.0, 20.0);
        assert_eq!(params.gravity, GRAVITY);

        let vertex = params.vertex();
        assert_close(vertex.time_s, 2.0, 1e-12);
        assert_close(vertex.height_m, 30.0, 1e-12);
    }

    #[test]
    fn launch_instant_matches_coefficients() {
        let state = SceneParameters::new(10.0, 20.0).motion_state(0.0);
        assert_close(state.height_m, 10.0, 1e-12);
        assert_close(state.velocity, 20.0, 1e-12);
    }

    #[test]
    fn touching_the_ground_still_counts_as_above_it() {
        let state = SceneParameters::new(0.0, 5.0).motion_state(1.0);
        assert_close(state.height_m, 0.0, 1e-12);
        assert!(state.is_above_ground());
    }

    #[test]
    fn level_flight_turns_sprite_a_quarter() {
        let params = SceneParameters::new(10.0, 20.0);
        let at_vertex = params.motion_state(params.vertex().time_s);
        assert_close(at_vertex.heading_deg, 0.0, 1e-9);
        assert_close(at_vertex.sprite_rotation_deg, -90.0, 1e-9);

        // Slope of 1 is a 45 degree climb.
        let climbing = SceneParameters::new(0.0, 1.0).motion_state(0.0);
        assert_close(climbing.heading_deg, 45.0, 1e-9);
        assert_close(climbing.sprite_rotation_deg, -45.0, 1e-9);
    }

    #[test]
    fn landing_time_is_positive_root() {
        let params = SceneParameters::new(10.0, 20.0);
        let landing = params.landing_time().expect("downward parabola lands");
        assert_close(params.height(landing), 0.0, 1e-9);
        assert_close(landing, 2.0 + 6.0f64.sqrt(), 1e-9);

        let from_ground = SceneParameters::new(0.0, 5.0).landing_time();
        assert_close(from_ground.expect("lands"), 1.0, 1e-12);
    }

    proptest! {
        #[test]
        fn vertex_is_maximum_over_domain(c in 0.0f64..=50.0, b in 5.0f64..=40.0, t in 0.0f64..=T_MAX) {
            let params = SceneParameters::new(c, b);
            let vertex = params.vertex();
            prop_assert!(vertex.height_m + 1e-9 >= params.height(t));
        }

        #[test]
        fn velocity_vanishes_at_vertex(c in 0.0f64..=50.0, b in 5.0f64..=40.0) {
            let params = SceneParameters::new(c, b);
            prop_assert!(params.velocity(params.vertex().time_s).abs() < 1e-9);
        }

        #[test]
        fn launch_height_is_c(c in 0.0f64..=50.0, b in 5.0f64..=40.0) {
            prop_assert_eq!(SceneParameters::new(c, b).height(0.0), c);
        }

        #[test]
        fn velocity_strictly_decreases(
            b in 5.0f64..=40.0,
            t in 0.0f64..T_MAX,
            dt in 0.001f64..1.0,
        ) {
            let params = SceneParameters::new(10.0, b);
            prop_assert!(params.velocity(t + dt) < params.velocity(t));
        }
    }
}
