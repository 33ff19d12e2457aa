use cubeprefs::AnimationPreferences;
use cubepuzzle_core::Move;
use web_time::Duration;

/// If at least this much of a twist is animated in one frame, just skip the
/// animation to reduce unnecessary flashing.
const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Higher number means faster exponential increase in twist speed.
const EXP_TWIST_FACTOR: f32 = 0.5;

/// Animation state for the move in flight.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Move being animated.
    current: Option<Move>,
    /// Maximum number of moves waiting behind the current one, plus one
    /// (reset when the queue is empty).
    queue_max: usize,
    /// Progress of the current move, from 0.0 to 1.0.
    progress: f32,
}
impl TwistAnimation {
    /// Starts animating `m`, with `queued` more moves waiting after it.
    pub(crate) fn start(&mut self, m: Move, queued: usize) {
        self.current = Some(m);
        self.progress = 0.0;
        self.queue_max = std::cmp::max(self.queue_max, queued + 1);
    }

    /// Steps the animation forward. Returns whether the current move reached
    /// the end of its animation.
    pub(crate) fn proceed(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        if self.current.is_none() {
            self.queue_max = 0;
            return false;
        }

        // `twist_duration` is in seconds (per one twist); `base_speed` is
        // fraction of twist per frame.
        let base_speed = delta.as_secs_f32() / prefs.twist_duration;

        // Twist exponentially faster if there are/were more twists in the
        // queue.
        let speed_mod = match prefs.dynamic_twist_speed {
            true => (self.queue_max.saturating_sub(1) as f32 * EXP_TWIST_FACTOR).exp(),
            false => 1.0,
        };
        let mut twist_delta = base_speed * speed_mod;
        // Cap the twist delta at 1.0, and also handle the case where
        // something went wrong with the calculation (e.g., division by zero).
        if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0; // Instantly complete the twist.
        }

        self.progress = (self.progress + twist_delta).min(1.0);
        self.progress >= 1.0
    }

    /// Ends the current animation and returns its move. `queued` is the
    /// number of moves still waiting.
    pub(crate) fn finish(&mut self, queued: usize) -> Option<Move> {
        self.progress = 0.0;
        if queued == 0 {
            self.queue_max = 0;
        }
        self.current.take()
    }

    /// Returns the move being animated and its raw progress from 0.0 to 1.0.
    pub fn current(&self) -> Option<(Move, f32)> {
        Some((self.current?, self.progress))
    }
    /// Returns whether a move is being animated.
    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use cubepuzzle_core::cubemath::Axis;

    use super::*;

    fn prefs(dynamic_twist_speed: bool) -> AnimationPreferences {
        AnimationPreferences {
            dynamic_twist_speed,
            twist_duration: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_twist_progress() {
        let mut anim = TwistAnimation::default();
        assert!(!anim.proceed(Duration::from_millis(100), &prefs(false)));

        let m = Move::new(Axis::X, 1, 1);
        anim.start(m, 0);
        assert!(!anim.proceed(Duration::from_millis(250), &prefs(false)));
        assert_eq!(anim.current(), Some((m, 0.25)));
        assert!(!anim.proceed(Duration::from_millis(250), &prefs(false)));
        assert!(!anim.proceed(Duration::from_millis(250), &prefs(false)));
        assert!(anim.proceed(Duration::from_millis(250), &prefs(false)));
        assert_eq!(anim.finish(0), Some(m));
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_long_frame_completes_twist() {
        let mut anim = TwistAnimation::default();
        anim.start(Move::new(Axis::Y, -1, 1), 0);
        assert!(anim.proceed(Duration::from_secs(2), &prefs(false)));

        let zero_duration = AnimationPreferences {
            twist_duration: 0.0,
            ..Default::default()
        };
        anim.start(Move::new(Axis::Y, -1, 1), 0);
        assert!(anim.proceed(Duration::from_millis(1), &zero_duration));
    }

    #[test]
    fn test_dynamic_twist_speed() {
        let mut slow = TwistAnimation::default();
        let mut fast = TwistAnimation::default();
        let m = Move::new(Axis::Z, 1, -1);
        slow.start(m, 0);
        fast.start(m, 5);
        let delta = Duration::from_millis(100);
        slow.proceed(delta, &prefs(true));
        fast.proceed(delta, &prefs(true));
        let (_, slow_t) = slow.current().unwrap();
        let (_, fast_t) = fast.current().unwrap();
        assert!(fast_t > slow_t);
    }
}
