//! Slide carousel: index, drag tracking, eased snapping and autoplay.
//!
//! The controller is headless. A host supplies a [`RenderSink`] for the
//! track and a [`Scheduler`] for frames and intervals, forwards input events
//! to the public operations and reports fired frames and ticks back through
//! [`CarouselController::on_frame`] and
//! [`CarouselController::on_autoplay_tick`].

pub mod animator;
pub mod autoplay;
pub mod host;

#[cfg(test)]
pub(crate) mod testing;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{AUTOPLAY_INTERVAL_MS, DRAG_THRESHOLD_RATIO, SLIDE_TRANSITION_MS};
pub use animator::PositionAnimator;
pub use autoplay::{Autoplay, Suspension};
pub use host::{FrameHandle, RenderSink, Scheduler, TimerHandle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub interval_ms: u32,
    pub transition_ms: u32,
    /// Fraction of the viewport width a drag must exceed to change slides.
    pub drag_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: AUTOPLAY_INTERVAL_MS,
            transition_ms: SLIDE_TRANSITION_MS,
            drag_threshold: DRAG_THRESHOLD_RATIO,
        }
    }
}

/// Read-only snapshot of a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub drag_offset: f64,
    pub is_dragging: bool,
    /// Autoplay was started and not paused by the user.
    pub autoplay_requested: bool,
    /// The interval is scheduled right now.
    pub is_autoplaying: bool,
}

/// Keys the carousel viewport reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f64,
    offset: f64,
}

type IndexListener = Box<dyn FnMut(usize)>;

/// Widths that are not positive and finite read as one pixel until a real
/// width is observed.
fn usable_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        1.0
    }
}

/// ARIA label for slide `index` out of `count`.
pub fn slide_label(index: usize, count: usize) -> String {
    format!("{} of {}", index + 1, count)
}

pub struct CarouselController<R: RenderSink, S: Scheduler> {
    slide_count: usize,
    index: usize,
    width: f64,
    offset: f64,
    drag_threshold: f64,
    drag: Option<Drag>,
    animator: PositionAnimator,
    autoplay: Autoplay,
    listeners: Vec<(SubscriptionId, IndexListener)>,
    next_subscription: u64,
    torn_down: bool,
    sink: R,
    scheduler: S,
}

impl<R: RenderSink, S: Scheduler> CarouselController<R, S> {
    /// Builds a controller showing the first slide. Autoplay stays off until
    /// [`start_autoplay`](Self::start_autoplay).
    pub fn new(slide_count: usize, config: &CarouselConfig, sink: R, scheduler: S) -> Self {
        let width = usable_width(sink.viewport_width());
        let mut controller = Self {
            slide_count,
            index: 0,
            width,
            offset: 0.0,
            drag_threshold: config.drag_threshold,
            drag: None,
            animator: PositionAnimator::new(config.transition_ms),
            autoplay: Autoplay::new(config.autoplay, config.interval_ms, slide_count),
            listeners: Vec::new(),
            next_subscription: 0,
            torn_down: false,
            sink,
            scheduler,
        };
        if controller.is_live() {
            controller.render(0.0);
        }
        controller
    }

    fn is_live(&self) -> bool {
        self.slide_count > 0 && !self.torn_down
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            drag_offset: self.drag.map_or(0.0, |d| d.offset),
            is_dragging: self.drag.is_some(),
            autoplay_requested: self.autoplay.is_requested(),
            is_autoplaying: self.autoplay.is_running(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn target_offset(&self) -> f64 {
        -(self.index as f64) * self.width
    }

    fn render(&mut self, px: f64) {
        self.offset = px;
        self.sink.set_offset(px);
    }

    fn animate_to(&mut self, target: f64) {
        if let Some(px) = self.animator.start(self.offset, target, &mut self.scheduler) {
            self.render(px);
        }
    }

    fn notify(&mut self) {
        let index = self.index;
        for (_, listener) in self.listeners.iter_mut() {
            listener(index);
        }
    }

    /// Shows the current index: tells observers and eases the track there.
    fn update(&mut self) {
        self.notify();
        self.animate_to(self.target_offset());
    }

    /// A programmatic move wins over an unfinished drag.
    fn abandon_drag(&mut self) {
        if self.drag.take().is_some() {
            self.sink.set_transition_enabled(true);
            self.autoplay.resume(Suspension::Drag, &mut self.scheduler);
        }
    }

    fn step(&mut self, forward: bool) -> bool {
        if !self.is_live() || self.slide_count <= 1 {
            return false;
        }
        let count = self.slide_count;
        self.index = if forward {
            (self.index + 1) % count
        } else {
            (self.index + count - 1) % count
        };
        self.update();
        true
    }

    pub fn next(&mut self) {
        self.abandon_drag();
        if self.step(true) {
            self.autoplay.restart(&mut self.scheduler);
        }
    }

    pub fn prev(&mut self) {
        self.abandon_drag();
        if self.step(false) {
            self.autoplay.restart(&mut self.scheduler);
        }
    }

    /// Jumps to `index`. Indices outside `0..slide_count` are ignored.
    pub fn go_to(&mut self, index: usize) {
        if !self.is_live() {
            return;
        }
        if index >= self.slide_count {
            warn!(
                "carousel: ignoring go_to({}) with {} slides",
                index, self.slide_count
            );
            return;
        }
        self.abandon_drag();
        self.index = index;
        self.update();
        self.autoplay.restart(&mut self.scheduler);
    }

    /// Maps a `KeyboardEvent.key` to navigation. Returns whether it was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match NavKey::from_key(key) {
            Some(NavKey::Next) => {
                self.next();
                true
            }
            Some(NavKey::Prev) => {
                self.prev();
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        if !self.is_live() {
            return;
        }
        self.animator.cancel(&mut self.scheduler);
        self.drag = Some(Drag {
            start_x: x,
            offset: 0.0,
        });
        self.autoplay.suspend(Suspension::Drag, &mut self.scheduler);
        self.sink.set_transition_enabled(false);
    }

    pub fn pointer_move(&mut self, x: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.offset = x - drag.start_x;
        let offset = drag.offset;
        self.render(self.target_offset() + offset);
    }

    /// Ends a drag: changes slide past the threshold, otherwise snaps back.
    /// Pointer cancel and leave end a drag the same way.
    pub fn pointer_up(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.sink.set_transition_enabled(true);
        let threshold = self.width * self.drag_threshold;
        let moved = if drag.offset > threshold {
            self.step(false)
        } else if drag.offset < -threshold {
            self.step(true)
        } else {
            false
        };
        if !moved {
            debug!("carousel: drag of {}px snapped back", drag.offset);
            self.animate_to(self.target_offset());
        }
        self.autoplay.resume(Suspension::Drag, &mut self.scheduler);
    }

    pub fn pointer_enter(&mut self) {
        if self.is_live() {
            self.autoplay.suspend(Suspension::Hover, &mut self.scheduler);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_up();
        if self.is_live() {
            self.autoplay.resume(Suspension::Hover, &mut self.scheduler);
        }
    }

    /// Stores the new viewport width and jumps to the current slide without
    /// easing.
    pub fn resize(&mut self, width: f64) {
        self.width = usable_width(width);
        if !self.is_live() {
            return;
        }
        self.animator.cancel(&mut self.scheduler);
        let drag_offset = self.drag.map_or(0.0, |d| d.offset);
        self.render(self.target_offset() + drag_offset);
    }

    pub fn start_autoplay(&mut self) {
        if self.is_live() {
            self.autoplay.start(&mut self.scheduler);
        }
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay.stop(&mut self.scheduler);
    }

    pub fn autoplay_requested(&self) -> bool {
        self.autoplay.is_requested()
    }

    /// Play/pause control. Follows the user's request, not whether a hover
    /// or drag is holding the timer back. Returns the new request.
    pub fn toggle_autoplay(&mut self) -> bool {
        if self.autoplay.is_requested() {
            self.pause_autoplay();
        } else {
            self.start_autoplay();
        }
        self.autoplay.is_requested()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.is_live() {
            self.autoplay.set_reduced_motion(reduced, &mut self.scheduler);
        }
    }

    /// Host callback for a fired animation frame.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) {
        if self.torn_down {
            return;
        }
        if let Some(px) = self.animator.on_frame(handle, now_ms, &mut self.scheduler) {
            self.render(px);
        }
    }

    /// Host callback for a fired autoplay interval.
    pub fn on_autoplay_tick(&mut self, handle: TimerHandle) {
        if self.torn_down || !self.autoplay.owns(handle) {
            return;
        }
        self.step(true);
    }

    /// Registers an observer called with the new index on every navigation.
    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    /// Cancels the pending frame and the autoplay interval. The controller
    /// ignores every later call.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.drag = None;
        self.animator.cancel(&mut self.scheduler);
        self.autoplay.shutdown(&mut self.scheduler);
        self.listeners.clear();
    }
}

impl<R: RenderSink, S: Scheduler> Drop for CarouselController<R, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{run_for, settle, ManualScheduler, RecordingSink, TestCarousel};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn still_config() -> CarouselConfig {
        CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        }
    }

    fn carousel(slides: usize, width: f64, config: &CarouselConfig) -> TestCarousel {
        CarouselController::new(
            slides,
            config,
            RecordingSink::new(width),
            ManualScheduler::new(),
        )
    }

    fn drag(carousel: &mut TestCarousel, from: f64, to: f64) {
        carousel.pointer_down(from);
        carousel.pointer_move(to);
        carousel.pointer_up();
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        for slides in 2..6 {
            for start in 0..slides {
                let mut c = carousel(slides, 300.0, &still_config());
                c.go_to(start);
                c.next();
                c.prev();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for slides in 2..6 {
            for start in 0..slides {
                let mut c = carousel(slides, 300.0, &still_config());
                c.go_to(start);
                for _ in 0..slides {
                    c.next();
                }
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn test_prev_wraps_from_first_slide() {
        let mut c = carousel(4, 300.0, &still_config());
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_single_slide_navigation_is_noop() {
        let mut c = carousel(1, 300.0, &CarouselConfig::default());
        c.next();
        c.prev();
        c.start_autoplay();
        assert_eq!(c.index(), 0);
        assert!(!c.state().is_autoplaying);
        assert_eq!(c.scheduler().pending_frame_count(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0, 300.0, &CarouselConfig::default());
        c.next();
        c.go_to(0);
        drag(&mut c, 100.0, 0.0);
        c.start_autoplay();
        assert_eq!(c.index(), 0);
        assert_eq!(c.sink().writes, 0);
        assert_eq!(c.scheduler().interval_count(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut c = carousel(3, 300.0, &still_config());
        c.go_to(1);
        c.go_to(3);
        c.go_to(usize::MAX);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_next_eases_to_target() {
        let mut c = carousel(3, 300.0, &still_config());
        c.next();
        assert!(c.is_animating());
        run_for(&mut c, 300.0);
        let midway = c.sink().offset;
        assert!(midway < 0.0 && midway > -300.0);
        settle(&mut c);
        assert_eq!(c.sink().offset, -300.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_small_positive_drag_snaps_back() {
        let mut c = carousel(3, 300.0, &still_config());
        c.pointer_down(100.0);
        c.pointer_move(140.0);
        assert_eq!(c.state().drag_offset, 40.0);
        assert_eq!(c.sink().offset, 40.0);
        c.pointer_up();
        assert_eq!(c.index(), 0);
        settle(&mut c);
        assert_eq!(c.sink().offset, 0.0);
        assert_eq!(c.state().drag_offset, 0.0);
    }

    #[test]
    fn test_large_positive_drag_wraps_to_last() {
        let mut c = carousel(3, 300.0, &still_config());
        drag(&mut c, 100.0, 160.0);
        assert_eq!(c.index(), 2);
        settle(&mut c);
        assert_eq!(c.sink().offset, -600.0);
    }

    #[test]
    fn test_drag_thresholds_from_every_slide() {
        let slides = 4;
        for start in 0..slides {
            let mut c = carousel(slides, 400.0, &still_config());
            c.go_to(start);
            drag(&mut c, 200.0, 270.0);
            assert_eq!(c.index(), (start + slides - 1) % slides);

            let mut c = carousel(slides, 400.0, &still_config());
            c.go_to(start);
            drag(&mut c, 200.0, 130.0);
            assert_eq!(c.index(), (start + 1) % slides);

            let mut c = carousel(slides, 400.0, &still_config());
            c.go_to(start);
            drag(&mut c, 200.0, 150.0);
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn test_drag_disables_transition_and_follows_pointer() {
        let mut c = carousel(3, 300.0, &still_config());
        c.go_to(1);
        settle(&mut c);
        c.pointer_down(50.0);
        assert!(!c.sink().transition_enabled);
        assert!(c.state().is_dragging);
        c.pointer_move(20.0);
        assert_eq!(c.sink().offset, -330.0);
        assert_eq!(c.scheduler().pending_frame_count(), 0);
        c.pointer_up();
        assert!(c.sink().transition_enabled);
        assert!(!c.state().is_dragging);
    }

    #[test]
    fn test_pointer_down_cancels_running_animation() {
        let mut c = carousel(3, 300.0, &still_config());
        c.next();
        run_for(&mut c, 100.0);
        c.pointer_down(0.0);
        assert!(!c.is_animating());
        assert_eq!(c.scheduler().pending_frame_count(), 0);
    }

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut c = carousel(3, 300.0, &still_config());
        let writes = c.sink().writes;
        c.pointer_move(500.0);
        c.pointer_up();
        assert_eq!(c.sink().writes, writes);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_resize_rerenders_without_animation() {
        let mut c = carousel(3, 300.0, &still_config());
        c.go_to(2);
        run_for(&mut c, 100.0);
        c.resize(500.0);
        assert_eq!(c.sink().offset, -1000.0);
        assert!(!c.is_animating());
        assert_eq!(c.scheduler().pending_frame_count(), 0);
    }

    #[test]
    fn test_zero_width_is_treated_as_one_pixel() {
        let mut c = carousel(3, 0.0, &still_config());
        c.go_to(2);
        settle(&mut c);
        assert_eq!(c.sink().offset, -2.0);
        c.resize(f64::NAN);
        assert_eq!(c.sink().offset, -2.0);
    }

    #[test]
    fn test_autoplay_advances_on_interval() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        assert!(c.state().is_autoplaying);
        run_for(&mut c, 4990.0);
        assert_eq!(c.index(), 0);
        run_for(&mut c, 20.0);
        assert_eq!(c.index(), 1);
        run_for(&mut c, 5000.0);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_manual_next_resets_autoplay_countdown() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        run_for(&mut c, 4000.0);
        c.next();
        assert_eq!(c.index(), 1);
        assert_eq!(c.scheduler().next_tick_at(), Some(9000.0));

        run_for(&mut c, 4990.0);
        assert_eq!(c.index(), 1);
        run_for(&mut c, 20.0);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_drag_suspends_and_resumes_autoplay() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        c.pointer_down(100.0);
        assert!(!c.state().is_autoplaying);
        run_for(&mut c, 12_000.0);
        assert_eq!(c.index(), 0);
        c.pointer_up();
        assert!(c.state().is_autoplaying);
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        c.pointer_enter();
        run_for(&mut c, 12_000.0);
        assert_eq!(c.index(), 0);
        c.pointer_leave();
        run_for(&mut c, 5000.0);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_mouse_drag_inside_viewport_stays_paused_until_leave() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        c.pointer_enter();
        drag(&mut c, 100.0, 0.0);
        assert_eq!(c.index(), 1);
        assert!(!c.state().is_autoplaying);
        c.pointer_leave();
        assert!(c.state().is_autoplaying);
    }

    #[test]
    fn test_pause_while_hovered_stays_paused_after_leave() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        c.pointer_enter();
        assert!(!c.state().is_autoplaying);
        assert!(c.autoplay_requested());

        assert!(!c.toggle_autoplay());
        c.pointer_leave();
        run_for(&mut c, 5100.0);
        assert_eq!(c.index(), 0);
        assert!(!c.state().autoplay_requested);

        assert!(c.toggle_autoplay());
        run_for(&mut c, 5000.0);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_rebuilt_with_fewer_slides_starts_on_first() {
        let mut c = carousel(5, 300.0, &still_config());
        c.go_to(4);
        drop(c);
        let c = carousel(2, 300.0, &still_config());
        assert_eq!(c.state().index, 0);
        assert_eq!(c.sink().offset, 0.0);
    }

    #[test]
    fn test_reduced_motion_keeps_the_request() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.set_reduced_motion(true);
        c.start_autoplay();
        let state = c.state();
        assert!(state.autoplay_requested);
        assert!(!state.is_autoplaying);
    }

    #[test]
    fn test_reduced_motion_disables_autoplay() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.set_reduced_motion(true);
        c.start_autoplay();
        run_for(&mut c, 12_000.0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.scheduler().interval_count(), 0);

        c.set_reduced_motion(false);
        assert!(c.state().is_autoplaying);
    }

    #[test]
    fn test_keyboard_contract() {
        let mut c = carousel(3, 300.0, &still_config());
        assert!(c.handle_key("ArrowRight"));
        assert_eq!(c.index(), 1);
        assert!(c.handle_key("ArrowLeft"));
        assert!(c.handle_key("ArrowLeft"));
        assert_eq!(c.index(), 2);
        assert!(!c.handle_key("Enter"));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_subscribers_see_every_index_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut c = carousel(3, 300.0, &still_config());
        let id = {
            let seen = seen.clone();
            c.subscribe(move |index| seen.borrow_mut().push(index))
        };
        c.next();
        c.go_to(0);
        drag(&mut c, 100.0, 200.0);
        c.unsubscribe(id);
        c.next();
        assert_eq!(*seen.borrow(), vec![1, 0, 2]);
    }

    #[test]
    fn test_teardown_cancels_everything() {
        let mut c = carousel(3, 300.0, &CarouselConfig::default());
        c.start_autoplay();
        c.next();
        c.teardown();
        assert_eq!(c.scheduler().pending_frame_count(), 0);
        assert_eq!(c.scheduler().interval_count(), 0);

        let offset = c.sink().offset;
        c.next();
        run_for(&mut c, 10_000.0);
        assert_eq!(c.index(), 1);
        assert_eq!(c.sink().offset, offset);
    }

    #[test]
    fn test_slide_label() {
        assert_eq!(slide_label(0, 3), "1 of 3");
        assert_eq!(slide_label(2, 3), "3 of 3");
    }

    #[test]
    fn test_config_reads_camel_case_with_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"intervalMs": 4000, "autoplay": false}"#).unwrap();
        assert_eq!(config.interval_ms, 4000);
        assert!(!config.autoplay);
        assert_eq!(config.transition_ms, SLIDE_TRANSITION_MS);
        assert_eq!(config.drag_threshold, DRAG_THRESHOLD_RATIO);
    }
}
