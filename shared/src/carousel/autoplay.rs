use super::host::{Scheduler, TimerHandle};

/// Why autoplay is temporarily held back. Each reason is released on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suspension {
    Drag,
    Hover,
}

/// Periodic advance timer for a carousel.
///
/// Runs only when it was requested, the config enables it, there is more
/// than one slide, reduced motion is off and nothing suspends it.
#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    enabled: bool,
    interval_ms: u32,
    multiple_slides: bool,
    requested: bool,
    reduced_motion: bool,
    dragging: bool,
    hovering: bool,
    timer: Option<TimerHandle>,
}

impl Autoplay {
    pub fn new(enabled: bool, interval_ms: u32, slide_count: usize) -> Self {
        Self {
            enabled: enabled && interval_ms > 0,
            interval_ms,
            multiple_slides: slide_count > 1,
            requested: false,
            reduced_motion: false,
            dragging: false,
            hovering: false,
            timer: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the user asked for autoplay, regardless of what holds it back.
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    fn should_run(&self) -> bool {
        self.enabled
            && self.multiple_slides
            && self.requested
            && !self.reduced_motion
            && !self.dragging
            && !self.hovering
    }

    /// Starts or stops the timer so it matches the current conditions.
    fn sync<S: Scheduler>(&mut self, scheduler: &mut S) {
        match (self.should_run(), self.timer) {
            (true, None) => {
                self.timer = Some(scheduler.schedule_interval(self.interval_ms));
            }
            (false, Some(handle)) => {
                scheduler.cancel_interval(handle);
                self.timer = None;
            }
            _ => {}
        }
    }

    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.requested = true;
        self.sync(scheduler);
    }

    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.requested = false;
        self.sync(scheduler);
    }

    /// Cancels and reschedules a running timer so the next tick is a full
    /// interval away. Does nothing while stopped or suspended.
    pub fn restart<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel_interval(handle);
            self.sync(scheduler);
        }
    }

    pub fn suspend<S: Scheduler>(&mut self, reason: Suspension, scheduler: &mut S) {
        match reason {
            Suspension::Drag => self.dragging = true,
            Suspension::Hover => self.hovering = true,
        }
        self.sync(scheduler);
    }

    pub fn resume<S: Scheduler>(&mut self, reason: Suspension, scheduler: &mut S) {
        match reason {
            Suspension::Drag => self.dragging = false,
            Suspension::Hover => self.hovering = false,
        }
        self.sync(scheduler);
    }

    pub fn set_reduced_motion<S: Scheduler>(&mut self, reduced: bool, scheduler: &mut S) {
        self.reduced_motion = reduced;
        self.sync(scheduler);
    }

    /// Cancels the timer and forgets the start request.
    pub fn shutdown<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.requested = false;
        if let Some(handle) = self.timer.take() {
            scheduler.cancel_interval(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::ManualScheduler;

    #[test]
    fn test_start_schedules_one_interval() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 3);
        autoplay.start(&mut scheduler);
        autoplay.start(&mut scheduler);
        assert!(autoplay.is_running());
        assert_eq!(scheduler.interval_count(), 1);
    }

    #[test]
    fn test_single_slide_never_runs() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 1);
        autoplay.start(&mut scheduler);
        assert!(!autoplay.is_running());
        assert_eq!(scheduler.interval_count(), 0);
    }

    #[test]
    fn test_reduced_motion_blocks_and_releases() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 3);
        autoplay.set_reduced_motion(true, &mut scheduler);
        autoplay.start(&mut scheduler);
        assert!(!autoplay.is_running());

        autoplay.set_reduced_motion(false, &mut scheduler);
        assert!(autoplay.is_running());
    }

    #[test]
    fn test_suspensions_release_independently() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 3);
        autoplay.start(&mut scheduler);
        autoplay.suspend(Suspension::Hover, &mut scheduler);
        autoplay.suspend(Suspension::Drag, &mut scheduler);
        assert_eq!(scheduler.interval_count(), 0);

        autoplay.resume(Suspension::Drag, &mut scheduler);
        assert!(!autoplay.is_running());
        autoplay.resume(Suspension::Hover, &mut scheduler);
        assert!(autoplay.is_running());
    }

    #[test]
    fn test_request_survives_suspension_and_reduced_motion() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 3);
        autoplay.start(&mut scheduler);
        autoplay.suspend(Suspension::Hover, &mut scheduler);
        autoplay.set_reduced_motion(true, &mut scheduler);
        assert!(autoplay.is_requested());
        assert!(!autoplay.is_running());

        autoplay.stop(&mut scheduler);
        assert!(!autoplay.is_requested());
    }

    #[test]
    fn test_restart_pushes_next_tick_out() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 3);
        autoplay.start(&mut scheduler);
        scheduler.advance(3000.0);
        autoplay.restart(&mut scheduler);
        assert_eq!(scheduler.next_tick_at(), Some(8000.0));
    }

    #[test]
    fn test_restart_while_stopped_stays_stopped() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(true, 5000, 3);
        autoplay.restart(&mut scheduler);
        assert!(!autoplay.is_running());
    }
}
