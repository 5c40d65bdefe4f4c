use super::host::{FrameHandle, RenderSink, Scheduler, TimerHandle};
use super::CarouselController;

pub const FRAME_MS: f64 = 16.0;

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub width: f64,
    pub offset: f64,
    pub transition_enabled: bool,
    pub writes: usize,
}

impl RecordingSink {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            transition_enabled: true,
            ..Default::default()
        }
    }
}

impl RenderSink for RecordingSink {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn set_offset(&mut self, px: f64) {
        self.offset = px;
        self.writes += 1;
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition_enabled = enabled;
    }
}

#[derive(Debug)]
struct ManualInterval {
    handle: TimerHandle,
    period: f64,
    due: f64,
}

/// A scheduler whose clock only moves when told to.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: f64,
    next_id: u64,
    frames: Vec<FrameHandle>,
    intervals: Vec<ManualInterval>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.first().copied()
    }

    pub fn pending_frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Due time of the single running interval, if any.
    pub fn next_tick_at(&self) -> Option<f64> {
        self.intervals.iter().map(|i| i.due).reduce(f64::min)
    }

    /// Moves the clock by `dt` and fires the oldest pending frame.
    pub fn advance_frame(&mut self, dt: f64) -> Option<FrameHandle> {
        if self.frames.is_empty() {
            return None;
        }
        self.now += dt;
        Some(self.frames.remove(0))
    }

    /// Moves the clock by `dt`, returning the frames and interval ticks that
    /// fired in that window.
    pub fn advance(&mut self, dt: f64) -> (Vec<FrameHandle>, Vec<TimerHandle>) {
        self.now += dt;
        let frames = std::mem::take(&mut self.frames);
        let mut ticks = Vec::new();
        for interval in &mut self.intervals {
            while interval.due <= self.now {
                ticks.push(interval.handle);
                interval.due += interval.period;
            }
        }
        (frames, ticks)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now
    }

    fn schedule_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|f| *f != handle);
    }

    fn schedule_interval(&mut self, period_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        self.intervals.push(ManualInterval {
            handle,
            period: period_ms as f64,
            due: self.now + period_ms as f64,
        });
        handle
    }

    fn cancel_interval(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }
}

pub type TestCarousel = CarouselController<RecordingSink, ManualScheduler>;

/// Runs the host loop for `ms`, delivering frames and ticks in 16 ms steps.
pub fn run_for(carousel: &mut TestCarousel, ms: f64) {
    let end = carousel.scheduler().now_ms() + ms;
    while carousel.scheduler().now_ms() < end {
        let step = (end - carousel.scheduler().now_ms()).min(FRAME_MS);
        let (frames, ticks) = carousel.scheduler_mut().advance(step);
        let now = carousel.scheduler().now_ms();
        for frame in frames {
            carousel.on_frame(frame, now);
        }
        for tick in ticks {
            carousel.on_autoplay_tick(tick);
        }
    }
}

/// Lets any in-flight slide animation finish.
pub fn settle(carousel: &mut TestCarousel) {
    run_for(carousel, 1000.0);
}
