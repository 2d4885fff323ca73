//! Explanation text shown beside the chart.
//!
//! Velocity and direction readouts are produced for every time value,
//! including after the rocket has landed; only the chart hides a landed
//! rocket.

use crate::core::motion::{MotionState, SceneParameters, VertexPoint};

pub const DIRECTION_NOTES: [&str; 4] = [
    "The rocket points in the direction of velocity.",
    "v > 0 -> rocket rises",
    "v = 0 -> maximum height",
    "v < 0 -> rocket falls",
];

pub const EXTENSION_QUESTIONS: [&str; 3] = [
    "Using your values from the graph:",
    "a) Calculate the maximum height that the rocket can go.",
    "b) Calculate the time taken for the rocket to fall on the ground.",
];

pub struct Explanation {
    params: SceneParameters,
    vertex: VertexPoint,
    motion: MotionState,
}

impl Explanation {
    pub fn new(params: SceneParameters, motion: MotionState) -> Self {
        Self {
            params,
            vertex: params.vertex(),
            motion,
        }
    }

    /// `h(t) = -5t² + 20t + 10` for the default launch.
    pub fn equation(&self) -> String {
        format!(
            "h(t) = {}t² + {}t + {}",
            self.params.gravity, self.params.initial_velocity, self.params.initial_height
        )
    }

    pub fn coefficient_notes(&self) -> [String; 3] {
        [
            format!(
                "a = {} -> gravity (negative, so the curve opens downward)",
                self.params.gravity
            ),
            format!(
                "b = {} -> initial upward velocity (larger b, higher peak)",
                self.params.initial_velocity
            ),
            format!(
                "c = {} -> initial height (launch from a building or the ground)",
                self.params.initial_height
            ),
        ]
    }

    pub fn velocity_formula(&self) -> String {
        format!(
            "v(t) = 2at + b = {}t + {}",
            2.0 * self.params.gravity,
            self.params.initial_velocity
        )
    }

    pub fn current_motion(&self) -> String {
        format!(
            "t = {:.1} s: v = {:.2}, direction {:.1}° from horizontal",
            self.motion.time_s, self.motion.velocity, self.motion.heading_deg
        )
    }

    pub fn maximum_height(&self) -> String {
        format!("Maximum height: {:.2} m", self.vertex.height_m)
    }

    pub fn time_of_maximum(&self) -> String {
        format!("Time of maximum height: {:.2} s", self.vertex.time_s)
    }

    /// Answer to the second extension question.
    pub fn landing_answer(&self) -> String {
        match self.params.landing_time() {
            Some(t) => format!("Lands after {t:.2} s"),
            None => "Never reaches the ground".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Explanation;
    use crate::core::motion::SceneParameters;

    #[test]
    fn default_launch_text() {
        let params = SceneParameters::new(10.0, 20.0);
        let text = Explanation::new(params, params.motion_state(0.0));
        assert_eq!(text.equation(), "h(t) = -5t² + 20t + 10");
        assert_eq!(text.velocity_formula(), "v(t) = 2at + b = -10t + 20");
        assert_eq!(text.maximum_height(), "Maximum height: 30.00 m");
        assert_eq!(text.time_of_maximum(), "Time of maximum height: 2.00 s");
        assert_eq!(text.landing_answer(), "Lands after 4.45 s");
        assert!(text.coefficient_notes()[0].starts_with("a = -5"));
    }

    #[test]
    fn motion_readout_continues_after_landing() {
        let params = SceneParameters::new(10.0, 20.0);
        let text = Explanation::new(params, params.motion_state(8.0));
        assert_eq!(
            text.current_motion(),
            "t = 8.0 s: v = -60.00, direction -89.0° from horizontal"
        );
    }
}
