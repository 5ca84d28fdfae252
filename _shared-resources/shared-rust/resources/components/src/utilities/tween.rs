// Highlight tween
// Slides the shared active-tab indicator between button frames over time

use std::time::{Duration, Instant};

use crate::core::TabBounds;

/// Cubic ease-out: fast start, settles without overshoot
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolation of the highlight rectangle from one frame to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightTween {
    from: TabBounds,
    to: TabBounds,
    started_at: Instant,
    duration: Duration,
}

impl HighlightTween {
    /// A tween that is already at rest on `bounds`
    pub fn settled(bounds: TabBounds, now: Instant) -> Self {
        Self {
            from: bounds,
            to: bounds,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Start moving from wherever the highlight is at `now` towards `to`
    /// Retargeting mid-flight starts from the current interpolated position, so there is no jump
    pub fn retarget(&self, to: TabBounds, now: Instant, duration: Duration) -> Self {
        Self {
            from: self.current(now),
            to,
            started_at: now,
            duration,
        }
    }

    /// Destination of the tween
    pub fn target(&self) -> TabBounds {
        self.to
    }

    /// Eased progress in 0.0..=1.0
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        ease_out_cubic(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Highlight rectangle at `now`
    pub fn current(&self, now: Instant) -> TabBounds {
        self.from.lerp(&self.to, self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        // Ahead of linear in the first half, never above 1
        assert!(ease_out_cubic(0.25) > 0.25);
        assert!(ease_out_cubic(0.99) <= 1.0);
    }

    #[test]
    fn test_settled_tween_is_finished() {
        let now = Instant::now();
        let bounds = TabBounds::new(4, -1, 5, 3);
        let tween = HighlightTween::settled(bounds, now);
        assert!(tween.is_finished(now));
        assert_eq!(tween.current(now), bounds);
    }

    #[test]
    fn test_tween_reaches_target() {
        let start = Instant::now();
        let a = TabBounds::new(4, -1, 5, 3);
        let b = TabBounds::new(24, -1, 5, 3);
        let tween = HighlightTween::settled(a, start).retarget(b, start, Duration::from_millis(250));

        assert_eq!(tween.current(start), a);
        assert!(!tween.is_finished(start + Duration::from_millis(100)));
        let mid = tween.current(start + Duration::from_millis(125));
        assert!(mid.x > 4 && mid.x < 24);

        let end = start + Duration::from_millis(250);
        assert!(tween.is_finished(end));
        assert_eq!(tween.current(end), b);
        assert_eq!(tween.current(end + Duration::from_secs(1)), b);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current_position() {
        let start = Instant::now();
        let a = TabBounds::new(0, 0, 5, 3);
        let b = TabBounds::new(40, 0, 5, 3);
        let c = TabBounds::new(20, 0, 5, 3);
        let tween = HighlightTween::settled(a, start).retarget(b, start, Duration::from_millis(500));

        let halfway = start + Duration::from_millis(250);
        let position = tween.current(halfway);
        let redirected = tween.retarget(c, halfway, Duration::from_millis(250));
        assert_eq!(redirected.current(halfway), position);
        assert_eq!(redirected.target(), c);
    }
}
