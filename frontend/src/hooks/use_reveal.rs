use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use vitrine_shared::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use vitrine_shared::reveal::{parse_delay, RevealTracker};
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use super::intersection::Observer;
use crate::config::prefers_reduced_motion;

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
const VISIBLE_CLASS: &str = "is-visible";

fn reveal_elements() -> Vec<Element> {
    let Some(nodes) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(REVEAL_SELECTOR).ok())
    else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn show(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

/// Fades in every `[data-reveal]` element the first time it scrolls into
/// view, after its `data-reveal-delay`.
#[hook]
pub fn use_reveal() {
    use_effect_with((), |_| {
        let elements = reveal_elements();
        let timers: Rc<RefCell<Vec<Timeout>>> = Rc::default();

        let observer = if prefers_reduced_motion() {
            elements.iter().for_each(show);
            None
        } else {
            let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new()));
            let observed = elements.clone();
            let pending = timers.clone();
            let observer = Observer::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move |entry, observer| {
                let target = entry.target();
                let Some(key) = observed.iter().position(|el| *el == target) else {
                    return;
                };
                let delay = parse_delay(&target.get_attribute(REVEAL_DELAY_ATTR).unwrap_or_default());
                let Some(delay) = tracker.borrow_mut().on_intersect(key, entry.is_intersecting(), delay) else {
                    return;
                };
                observer.unobserve(&target);
                if delay == 0 {
                    show(&target);
                } else {
                    pending.borrow_mut().push(Timeout::new(delay, move || show(&target)));
                }
            });
            if let Some(observer) = &observer {
                elements.iter().for_each(|el| observer.observe(el));
            }
            observer
        };

        move || {
            drop(observer);
            timers.borrow_mut().clear();
        }
    });
}
