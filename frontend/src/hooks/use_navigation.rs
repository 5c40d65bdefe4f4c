use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use vitrine_shared::constants::SECTION_THRESHOLD;
use vitrine_shared::navigation::{HeaderScroll, HeaderState, MenuState, SectionTracker};
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use super::intersection::Observer;

#[hook]
pub fn use_header_scroll() -> HeaderState {
    let state = use_state_eq(HeaderState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let header = Rc::new(RefCell::new(HeaderScroll::default()));
            let listener = window().map(|w| {
                let source = w.clone();
                EventListener::new(&w, "scroll", move |_| {
                    let y = source.scroll_y().unwrap_or(0.0);
                    state.set(header.borrow_mut().update(y));
                })
            });
            move || drop(listener)
        });
    }

    *state
}

/// Id of the section currently filling the viewport.
#[hook]
pub fn use_active_section(section_ids: &'static [&'static str]) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let tracker = Rc::new(RefCell::new(SectionTracker::new()));
            let observer = Observer::new(SECTION_THRESHOLD, None, move |entry, _| {
                let id = entry.target().id();
                let mut tracker = tracker.borrow_mut();
                if tracker.observe(&id, entry.is_intersecting()) {
                    active.set(tracker.active().map(str::to_string));
                }
            });

            if let (Some(observer), Some(document)) = (&observer, window().and_then(|w| w.document())) {
                for id in section_ids {
                    if let Some(section) = document.get_element_by_id(id) {
                        observer.observe(&section);
                    }
                }
            }
            move || drop(observer)
        });
    }

    (*active).clone()
}

#[derive(Clone, PartialEq)]
pub struct MenuHandle {
    pub menu: MenuState,
    pub toggle: Callback<MouseEvent>,
    pub close: Callback<()>,
}

/// Mobile menu. Escape and widening the viewport past the breakpoint close it.
#[hook]
pub fn use_menu() -> MenuHandle {
    let menu = use_mut_ref(MenuState::default);
    let snapshot = use_state_eq(MenuState::default);

    {
        let menu = menu.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(w) = window() {
                if let Some(document) = w.document() {
                    let menu = menu.clone();
                    let snapshot = snapshot.clone();
                    listeners.push(EventListener::new(&document, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let mut menu = menu.borrow_mut();
                        if menu.handle_key(&event.key()) {
                            snapshot.set(*menu);
                        }
                    }));
                }
                let source = w.clone();
                listeners.push(EventListener::new(&w, "resize", move |_| {
                    let width = source
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let mut menu = menu.borrow_mut();
                    menu.viewport_resized(width);
                    snapshot.set(*menu);
                }));
            }
            move || drop(listeners)
        });
    }

    let toggle = {
        let menu = menu.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: MouseEvent| {
            let mut menu = menu.borrow_mut();
            menu.toggle();
            snapshot.set(*menu);
        })
    };

    let close = {
        let snapshot = snapshot.clone();
        Callback::from(move |_| {
            let mut menu = menu.borrow_mut();
            menu.close();
            snapshot.set(*menu);
        })
    };

    MenuHandle {
        menu: *snapshot,
        toggle,
        close,
    }
}
