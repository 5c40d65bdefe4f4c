use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use vitrine_shared::constants::COUNTER_THRESHOLD;
use vitrine_shared::counter::CountUp;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::prefers_reduced_motion;
use crate::hooks::intersection::Observer;
use crate::models::Stat;
use crate::styles;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn now_ms() -> f64 {
    window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
}

fn count_frame(count: CountUp, started: f64, value: UseStateHandle<u64>, slot: FrameSlot) {
    let next = slot.clone();
    let frame = request_animation_frame(move |now| {
        let elapsed = now - started;
        value.set(count.value_at(elapsed));
        if !count.is_done(elapsed) {
            count_frame(count, started, value, next);
        }
    });
    *slot.borrow_mut() = Some(frame);
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: Stat,
}

/// Counts up from zero the first time most of the card is visible.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let value = use_state_eq(|| 0u64);
    let target = props.stat.value;

    {
        let node = node.clone();
        let value = value.clone();
        use_effect_with(target, move |target| {
            let count = CountUp::new(*target);
            let slot: FrameSlot = Rc::default();
            let started = Rc::new(RefCell::new(false));

            let observer = if prefers_reduced_motion() {
                value.set(count.target());
                None
            } else {
                let slot = slot.clone();
                let observer = Observer::new(COUNTER_THRESHOLD, None, move |entry, observer| {
                    if !entry.is_intersecting() || started.replace(true) {
                        return;
                    }
                    observer.unobserve(&entry.target());
                    count_frame(count, now_ms(), value.clone(), slot.clone());
                });
                if let (Some(observer), Some(element)) = (&observer, node.cast::<Element>()) {
                    observer.observe(&element);
                }
                observer
            };

            move || {
                drop(observer);
                slot.borrow_mut().take();
            }
        });
    }

    html! {
        <div ref={node} class={classes!(styles::CARD, "text-center")}>
            <p class="text-4xl font-bold text-blue-600 dark:text-blue-400">
                {format!("{}{}", *value, props.stat.suffix)}
            </p>
            <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{props.stat.label.clone()}</p>
        </div>
    }
}
