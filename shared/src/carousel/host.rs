//! Capabilities a carousel needs from whatever hosts it.
//!
//! The controller never touches the DOM or real timers. A browser host
//! implements these with element styles, `requestAnimationFrame` and
//! `setInterval`; tests implement them with plain fields.

/// Identifies one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Identifies one running interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Where the carousel track gets drawn.
pub trait RenderSink {
    /// Width of the visible viewport in pixels. May be zero before layout.
    fn viewport_width(&self) -> f64;

    /// Moves the track to a horizontal offset in pixels.
    fn set_offset(&mut self, px: f64);

    /// `false` while the track must follow the pointer 1:1.
    fn set_transition_enabled(&mut self, enabled: bool);
}

/// Frame and interval scheduling.
///
/// Scheduling only returns a handle. When the frame or interval fires the
/// host reports the handle back to the controller, which ignores handles it
/// no longer owns.
pub trait Scheduler {
    /// Monotonic milliseconds, same clock as the frame timestamps.
    fn now_ms(&self) -> f64;

    fn schedule_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);

    fn schedule_interval(&mut self, period_ms: u32) -> TimerHandle;

    fn cancel_interval(&mut self, handle: TimerHandle);
}
