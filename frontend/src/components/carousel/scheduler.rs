use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use log::debug;
use vitrine_shared::carousel::{FrameHandle, Scheduler, TimerHandle};
use web_sys::window;
use yew::Callback;

/// A frame or interval firing, routed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerEvent {
    Frame(FrameHandle, f64),
    Tick(TimerHandle),
}

/// `requestAnimationFrame` and `setInterval` behind handles.
///
/// At most one frame and one interval are outstanding, matching how the
/// controller uses them. Fired events go out through `dispatch`.
pub struct BrowserScheduler {
    dispatch: Callback<SchedulerEvent>,
    next_id: u64,
    frame: Option<(FrameHandle, AnimationFrame)>,
    interval: Option<(TimerHandle, Interval)>,
}

impl BrowserScheduler {
    pub fn new(dispatch: Callback<SchedulerEvent>) -> Self {
        Self {
            dispatch,
            next_id: 0,
            frame: None,
            interval: None,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }

    fn schedule_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        let dispatch = self.dispatch.clone();
        let frame = request_animation_frame(move |timestamp| {
            dispatch.emit(SchedulerEvent::Frame(handle, timestamp));
        });
        self.frame = Some((handle, frame));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(&self.frame, Some((current, _)) if *current == handle) {
            self.frame = None;
        }
    }

    fn schedule_interval(&mut self, period_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        let dispatch = self.dispatch.clone();
        let interval = Interval::new(period_ms, move || {
            dispatch.emit(SchedulerEvent::Tick(handle));
        });
        if self.interval.replace((handle, interval)).is_some() {
            debug!("Replaced a running carousel interval");
        }
        handle
    }

    fn cancel_interval(&mut self, handle: TimerHandle) {
        if matches!(&self.interval, Some((current, _)) if *current == handle) {
            self.interval = None;
        }
    }
}
