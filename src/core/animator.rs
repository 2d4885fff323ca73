//! Play/idle state machine for the rocket animation.
//!
//! While playing, the animator walks a fixed schedule of sample times and
//! holds each one for at least [`FRAME_DELAY`]. Whether to keep going is
//! checked before every frame, so clearing the animate flag stops output at
//! the next frame boundary.

use std::time::Duration;

use tracing::info;

use crate::core::frame::{FrameSink, Scene};
use crate::core::motion::T_MAX;
use crate::core::trajectory::linspace;

pub const ANIMATION_SAMPLES: usize = 100;
pub const FRAME_DELAY: Duration = Duration::from_millis(40);

pub fn animation_schedule() -> Vec<f64> {
    linspace(0.0, T_MAX, ANIMATION_SAMPLES)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    Idle,
    Playing { index: usize, held_s: f64 },
}

/// Time value to render this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub time_s: f64,
    /// Set on the tick that completes the schedule. The host should clear
    /// its animate flag, otherwise the next tick starts a new run.
    pub finished: bool,
}

pub struct Animator {
    schedule: Vec<f64>,
    frame_delay: Duration,
    state: AnimationState,
}

impl Animator {
    pub fn new() -> Self {
        Self::with_frame_delay(FRAME_DELAY)
    }

    pub fn with_frame_delay(frame_delay: Duration) -> Self {
        Self {
            schedule: animation_schedule(),
            frame_delay,
            state: AnimationState::Idle,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, AnimationState::Playing { .. })
    }

    pub fn schedule(&self) -> &[f64] {
        &self.schedule
    }

    /// Drops back to idle. With the animate flag still set, the next tick
    /// starts over from the first sample.
    pub fn stop(&mut self) {
        if self.is_playing() {
            info!("animation stopped");
        }
        self.state = AnimationState::Idle;
    }

    /// Advances by `elapsed_s` of wall time and picks the time to show.
    ///
    /// Idle renders `selected_t`. Playing moves to the next sample once the
    /// current one has been held for the frame delay; samples are never
    /// skipped, so a slow host stretches the run rather than dropping frames.
    pub fn tick(&mut self, animate: bool, selected_t: f64, elapsed_s: f64) -> Tick {
        if !animate {
            self.stop();
            return Tick {
                time_s: selected_t,
                finished: false,
            };
        }

        let (index, held_s) = match self.state {
            AnimationState::Idle => {
                info!(samples = self.schedule.len(), "animation started");
                (0, 0.0)
            }
            AnimationState::Playing { index, held_s } => {
                let held_s = held_s + elapsed_s;
                if held_s >= self.frame_delay.as_secs_f64() {
                    (index + 1, 0.0)
                } else {
                    (index, held_s)
                }
            }
        };

        match self.schedule.get(index) {
            Some(&time_s) => {
                self.state = AnimationState::Playing { index, held_s };
                Tick {
                    time_s,
                    finished: false,
                }
            }
            None => {
                info!("animation finished");
                self.state = AnimationState::Idle;
                Tick {
                    time_s: self.schedule.last().copied().unwrap_or(selected_t),
                    finished: true,
                }
            }
        }
    }

    /// Blocking run of the whole schedule into `sink`.
    ///
    /// `keep_playing` is polled before each frame and `pause` is called with
    /// the frame delay after each one. Returns how many frames were shown.
    pub fn play<S, K, P>(
        &mut self,
        scene: &Scene,
        sink: &mut S,
        mut keep_playing: K,
        mut pause: P,
    ) -> Result<usize, S::Error>
    where
        S: FrameSink,
        K: FnMut() -> bool,
        P: FnMut(Duration),
    {
        info!(samples = self.schedule.len(), "animation started");
        let mut shown = 0;
        for (index, &time_s) in self.schedule.iter().enumerate() {
            if !keep_playing() {
                info!(shown, "animation stopped");
                self.state = AnimationState::Idle;
                return Ok(shown);
            }
            self.state = AnimationState::Playing { index, held_s: 0.0 };
            let shown_frame = sink.show(&scene.render_frame(time_s));
            if let Err(err) = shown_frame {
                self.state = AnimationState::Idle;
                return Err(err);
            }
            shown += 1;
            pause(self.frame_delay);
        }
        info!(shown, "animation finished");
        self.state = AnimationState::Idle;
        Ok(shown)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::time::Duration;

    use super::{ANIMATION_SAMPLES, AnimationState, Animator, FRAME_DELAY, animation_schedule};
    use crate::core::frame::{Frame, FrameSink, Scene};
    use crate::core::motion::{SceneParameters, T_MAX};

    #[derive(Default)]
    struct Recorder {
        times: Vec<f64>,
        sprites: usize,
    }

    impl FrameSink for Recorder {
        type Error = Infallible;

        fn show(&mut self, frame: &Frame<'_>) -> Result<(), Infallible> {
            self.times.push(frame.motion.time_s);
            if frame.sprite.is_some() {
                self.sprites += 1;
            }
            Ok(())
        }
    }

    struct Broken;

    impl FrameSink for Broken {
        type Error = &'static str;

        fn show(&mut self, _frame: &Frame<'_>) -> Result<(), &'static str> {
            Err("display gone")
        }
    }

    #[test]
    fn schedule_is_hundred_even_samples() {
        let schedule = animation_schedule();
        assert_eq!(schedule.len(), ANIMATION_SAMPLES);
        assert_eq!(schedule[0], 0.0);
        assert_eq!(schedule[ANIMATION_SAMPLES - 1], T_MAX);
        let step = T_MAX / (ANIMATION_SAMPLES - 1) as f64;
        for pair in schedule.windows(2) {
            assert!(((pair[1] - pair[0]) - step).abs() < 1e-9);
        }
    }

    #[test]
    fn idle_renders_selected_time() {
        let mut animator = Animator::new();
        let tick = animator.tick(false, 3.4, 0.016);
        assert_eq!(tick.time_s, 3.4);
        assert!(!tick.finished);
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn playing_holds_each_sample_for_frame_delay() {
        let mut animator = Animator::new();
        let delay = FRAME_DELAY.as_secs_f64();

        let first = animator.tick(true, 5.0, 0.0);
        assert_eq!(first.time_s, 0.0);
        assert!(animator.is_playing());

        let held = animator.tick(true, 5.0, delay * 0.5);
        assert_eq!(held.time_s, 0.0);

        let next = animator.tick(true, 5.0, delay * 0.6);
        assert_eq!(next.time_s, animator.schedule()[1]);

        // A long stall still only moves one sample.
        let after_stall = animator.tick(true, 5.0, 10.0);
        assert_eq!(after_stall.time_s, animator.schedule()[2]);
    }

    #[test]
    fn clearing_flag_stops_between_frames() {
        let mut animator = Animator::with_frame_delay(Duration::ZERO);
        for _ in 0..10 {
            animator.tick(true, 0.0, 0.0);
        }
        assert!(matches!(
            animator.state(),
            AnimationState::Playing { index: 9, .. }
        ));

        let tick = animator.tick(false, 7.5, 0.0);
        assert_eq!(tick.time_s, 7.5);
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn stop_restarts_from_first_sample() {
        let mut animator = Animator::with_frame_delay(Duration::ZERO);
        for _ in 0..5 {
            animator.tick(true, 0.0, 0.0);
        }
        animator.stop();
        assert_eq!(animator.state(), AnimationState::Idle);
        assert_eq!(animator.tick(true, 0.0, 0.0).time_s, 0.0);
        assert!(matches!(
            animator.state(),
            AnimationState::Playing { index: 0, .. }
        ));
    }

    #[test]
    fn completing_schedule_returns_to_idle() {
        let mut animator = Animator::with_frame_delay(Duration::ZERO);
        let mut shown = Vec::new();
        loop {
            let tick = animator.tick(true, 0.0, 0.0);
            if tick.finished {
                assert_eq!(tick.time_s, T_MAX);
                break;
            }
            shown.push(tick.time_s);
        }
        assert_eq!(shown, animation_schedule());
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn blocking_play_shows_every_sample_regardless_of_launch() {
        for (c, b) in [(0.0, 5.0), (10.0, 20.0), (50.0, 40.0)] {
            let scene = Scene::new(SceneParameters::new(c, b));
            let mut animator = Animator::new();
            let mut recorder = Recorder::default();
            let mut pauses = Vec::new();

            let shown = animator
                .play(&scene, &mut recorder, || true, |d| pauses.push(d))
                .expect("recorder never fails");

            assert_eq!(shown, ANIMATION_SAMPLES);
            assert_eq!(recorder.times, animation_schedule());
            assert_eq!(pauses.len(), ANIMATION_SAMPLES);
            assert!(pauses.iter().all(|&d| d == FRAME_DELAY));
            assert!(recorder.sprites < ANIMATION_SAMPLES, "rocket lands before t=10");
            assert_eq!(animator.state(), AnimationState::Idle);
        }
    }

    #[test]
    fn blocking_play_honours_cancellation() {
        let scene = Scene::new(SceneParameters::default());
        let mut animator = Animator::new();
        let mut recorder = Recorder::default();
        let mut budget = 25;

        let shown = animator
            .play(
                &scene,
                &mut recorder,
                || {
                    budget -= 1;
                    budget >= 0
                },
                |_| {},
            )
            .expect("recorder never fails");

        assert_eq!(shown, 25);
        assert_eq!(recorder.times.len(), 25);
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn sink_failure_aborts_play() {
        let scene = Scene::new(SceneParameters::default());
        let mut animator = Animator::new();
        let err = animator
            .play(&scene, &mut Broken, || true, |_| {})
            .expect_err("sink fails");
        assert_eq!(err, "display gone");
        assert!(!animator.is_playing());
    }
}
