use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use vitrine_shared::navigation::{in_viewport, parallax_offset};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config::prefers_reduced_motion;

const PARALLAX_SELECTOR: &str = "[data-parallax]";

fn apply_parallax() {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(layers) = document.query_selector_all(PARALLAX_SELECTOR) else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    for i in 0..layers.length() {
        let Some(layer) = layers.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let rect = layer.get_bounding_client_rect();
        if !in_viewport(rect.top(), rect.bottom(), viewport_height) {
            continue;
        }
        let y = parallax_offset(scroll_y, i as usize);
        let _ = layer
            .style()
            .set_property("transform", &format!("translateY({}px)", y));
    }
}

/// Shifts `[data-parallax]` layers on scroll, at most once per frame.
/// Off under reduced motion.
#[hook]
pub fn use_parallax() {
    use_effect_with((), |_| {
        let frame = Rc::new(RefCell::new(None::<AnimationFrame>));
        let ticking = Rc::new(Cell::new(false));

        let listener = if prefers_reduced_motion() {
            None
        } else {
            window().map(|w| {
                let frame = frame.clone();
                EventListener::new(&w, "scroll", move |_| {
                    if ticking.replace(true) {
                        return;
                    }
                    let ticking = ticking.clone();
                    *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                        apply_parallax();
                        ticking.set(false);
                    }));
                })
            })
        };

        move || {
            drop(listener);
            frame.borrow_mut().take();
        }
    });
}
