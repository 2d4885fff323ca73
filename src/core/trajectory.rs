use crate::core::motion::{SceneParameters, T_MAX};

pub const TRAJECTORY_SAMPLES: usize = 400;

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i + 1 == count {
                        end
                    } else {
                        start + ((end - start) * i as f64 / last)
                    }
                })
                .collect()
        }
    }
}

/// Background curve of the chart, sampled once per parameter change.
///
/// A height of `None` marks a sample below ground. Those samples are not
/// drawn, which leaves a gap in the curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<(f64, Option<f64>)>,
}

impl Trajectory {
    pub fn compute(params: &SceneParameters) -> Self {
        Self::sampled(params, TRAJECTORY_SAMPLES)
    }

    pub fn sampled(params: &SceneParameters, samples: usize) -> Self {
        let points = linspace(0.0, T_MAX, samples)
            .into_iter()
            .map(|t| {
                let h = params.height(t);
                (t, (h >= 0.0).then_some(h))
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[(f64, Option<f64>)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Runs of consecutive visible samples, each drawn as its own polyline.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for &(t, h) in &self.points {
            match h {
                Some(h) => current.push((t, h)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::{TRAJECTORY_SAMPLES, Trajectory, linspace};
    use crate::core::motion::{SceneParameters, T_MAX};

    #[test]
    fn linspace_includes_both_ends() {
        let values = linspace(0.0, T_MAX, 5);
        assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn grid_spans_full_domain() {
        let trajectory = Trajectory::compute(&SceneParameters::default());
        assert_eq!(trajectory.len(), TRAJECTORY_SAMPLES);
        assert_eq!(trajectory.points()[0].0, 0.0);
        assert_eq!(trajectory.points()[TRAJECTORY_SAMPLES - 1].0, T_MAX);
    }

    #[test]
    fn samples_below_ground_are_masked() {
        let params = SceneParameters::new(10.0, 20.0);
        let trajectory = Trajectory::compute(&params);
        for &(t, h) in trajectory.points() {
            if params.height(t) < 0.0 {
                assert_eq!(h, None, "t={t} should be masked");
            } else {
                assert_eq!(h, Some(params.height(t)));
            }
        }
        // Lands near t=4.45, so the tail of the domain is hidden.
        assert_eq!(trajectory.points().last().map(|p| p.1), Some(None));
    }

    #[test]
    fn masked_tail_leaves_one_visible_segment() {
        let trajectory = Trajectory::compute(&SceneParameters::new(10.0, 20.0));
        let segments = trajectory.segments();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].iter().all(|&(_, h)| h >= 0.0));
    }

    #[test]
    fn weak_gravity_stays_visible_throughout() {
        let params = SceneParameters::new(10.0, 20.0).with_gravity(-1.0);
        let trajectory = Trajectory::compute(&params);
        assert!(trajectory.points().iter().all(|p| p.1.is_some()));
        assert_eq!(trajectory.segments()[0].len(), TRAJECTORY_SAMPLES);
    }
}
