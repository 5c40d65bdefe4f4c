use super::host::{FrameHandle, Scheduler};
use crate::easing::{ease_in_out_quad, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    started_at: f64,
    frame: FrameHandle,
}

/// Eases a pixel offset from one position to another over a fixed duration.
///
/// At most one tween is in flight: starting a new one cancels the pending
/// frame of the previous one, so two tweens never write the same offset.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionAnimator {
    duration_ms: f64,
    active: Option<Tween>,
}

impl PositionAnimator {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms as f64,
            active: None,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The offset a tween started at `started_at` shows at `now`, and whether
    /// it has finished.
    pub fn sample(&self, from: f64, to: f64, started_at: f64, now: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (to, true);
        }
        let t = ((now - started_at) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            (to, true)
        } else {
            (lerp(from, to, ease_in_out_quad(t)), false)
        }
    }

    /// Starts easing from `from` to `to`.
    ///
    /// Returns `Some(to)` when there is nothing to animate (zero duration) so
    /// the caller can render the target right away.
    pub fn start<S: Scheduler>(&mut self, from: f64, to: f64, scheduler: &mut S) -> Option<f64> {
        self.cancel(scheduler);
        if self.duration_ms <= 0.0 {
            return Some(to);
        }
        self.active = Some(Tween {
            from,
            to,
            started_at: scheduler.now_ms(),
            frame: scheduler.schedule_frame(),
        });
        None
    }

    /// Advances the tween owning `handle`. Returns the offset to render, or
    /// `None` if the frame belongs to a cancelled tween.
    pub fn on_frame<S: Scheduler>(
        &mut self,
        handle: FrameHandle,
        now: f64,
        scheduler: &mut S,
    ) -> Option<f64> {
        let tween = self.active?;
        if tween.frame != handle {
            return None;
        }
        let (value, finished) = self.sample(tween.from, tween.to, tween.started_at, now);
        if finished {
            self.active = None;
        } else {
            self.active = Some(Tween {
                frame: scheduler.schedule_frame(),
                ..tween
            });
        }
        Some(value)
    }

    pub fn cancel<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(tween) = self.active.take() {
            scheduler.cancel_frame(tween.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::ManualScheduler;

    #[test]
    fn test_runs_to_target() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PositionAnimator::new(600);
        assert_eq!(animator.start(0.0, -300.0, &mut scheduler), None);

        let mut last = 0.0;
        while let Some(frame) = scheduler.advance_frame(16.0) {
            let value = animator
                .on_frame(frame, scheduler.now_ms(), &mut scheduler)
                .expect("frame belongs to the tween");
            assert!(value <= last);
            last = value;
        }
        assert_eq!(last, -300.0);
        assert!(!animator.is_active());
    }

    #[test]
    fn test_midpoint_is_half_way() {
        let animator = PositionAnimator::new(500);
        let (value, finished) = animator.sample(0.0, 100.0, 1000.0, 1250.0);
        assert_eq!(value, 50.0);
        assert!(!finished);
    }

    #[test]
    fn test_restart_cancels_previous_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PositionAnimator::new(600);
        animator.start(0.0, -300.0, &mut scheduler);
        let stale = scheduler.pending_frame().expect("first frame");
        animator.start(-10.0, -600.0, &mut scheduler);

        assert_eq!(scheduler.pending_frame_count(), 1);
        assert_eq!(animator.on_frame(stale, 16.0, &mut scheduler), None);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PositionAnimator::new(0);
        assert_eq!(animator.start(0.0, -300.0, &mut scheduler), Some(-300.0));
        assert_eq!(scheduler.pending_frame_count(), 0);
    }
}
