mod dom;
mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::warn;
use vitrine_shared::carousel::slide_label;
use vitrine_shared::constants::RESIZE_DEBOUNCE_MS;
use vitrine_shared::{CarouselConfig, CarouselController};
use web_sys::{window, HtmlElement};
use yew::prelude::*;

pub use dom::DomRenderSink;
pub use scheduler::{BrowserScheduler, SchedulerEvent};

use crate::config::{media_query, REDUCED_MOTION_QUERY};
use crate::models::Testimonial;
use crate::styles;

type DomCarousel = CarouselController<DomRenderSink, BrowserScheduler>;
type ControllerSlot = Rc<RefCell<Option<DomCarousel>>>;

/// Runs `action` against the live controller, if any.
fn drive(slot: &ControllerSlot, action: impl FnOnce(&mut DomCarousel)) {
    match slot.try_borrow_mut() {
        Ok(mut controller) => {
            if let Some(controller) = controller.as_mut() {
                action(controller);
            }
        }
        Err(_) => warn!("Carousel busy, dropped an event"),
    }
}

/// What the play/pause control shows, and whether the timer is live.
#[derive(Clone, Copy, Default, PartialEq)]
struct PlayState {
    requested: bool,
    running: bool,
}

impl PlayState {
    fn of(carousel: &DomCarousel) -> Self {
        let state = carousel.state();
        Self {
            requested: state.autoplay_requested,
            running: state.is_autoplaying,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Testimonial>,
    #[prop_or_default]
    pub config: CarouselConfig,
    #[prop_or(AttrValue::from("Testimonials"))]
    pub label: AttrValue,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let viewport_ref = use_node_ref();
    let track_ref = use_node_ref();
    let active = use_state_eq(|| 0usize);
    let play = use_state_eq(PlayState::default);
    let controller: ControllerSlot = use_mut_ref(|| None);
    let count = props.slides.len();

    {
        let controller = controller.clone();
        let viewport_ref = viewport_ref.clone();
        let track_ref = track_ref.clone();
        let active = active.clone();
        let play = play.clone();
        use_effect_with((count, props.config.clone()), move |(count, config)| {
            // A rebuilt controller starts on the first slide.
            active.set(0);
            let weak = Rc::downgrade(&controller);
            let dispatch = Callback::from(move |event: SchedulerEvent| {
                let Some(slot) = weak.upgrade() else {
                    return;
                };
                drive(&slot, |c| match event {
                    SchedulerEvent::Frame(handle, now) => c.on_frame(handle, now),
                    SchedulerEvent::Tick(handle) => c.on_autoplay_tick(handle),
                });
            });

            let mut listeners = Vec::new();
            let resize_timer = Rc::new(RefCell::new(None::<Timeout>));

            if let (Some(viewport), Some(track)) = (
                viewport_ref.cast::<HtmlElement>(),
                track_ref.cast::<HtmlElement>(),
            ) {
                let mut carousel = CarouselController::new(
                    *count,
                    config,
                    DomRenderSink::new(viewport, track),
                    BrowserScheduler::new(dispatch),
                );
                let reduced_motion = media_query(REDUCED_MOTION_QUERY);
                carousel.set_reduced_motion(reduced_motion.as_ref().map_or(false, |m| m.matches()));
                carousel.subscribe(move |index| active.set(index));
                carousel.start_autoplay();
                play.set(PlayState::of(&carousel));
                *controller.borrow_mut() = Some(carousel);

                if let Some(w) = window() {
                    let slot = controller.clone();
                    let timer = resize_timer.clone();
                    listeners.push(EventListener::new(&w, "resize", move |_| {
                        let slot = slot.clone();
                        *timer.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                            drive(&slot, |c| {
                                let width = c.sink().measure();
                                c.resize(width);
                            });
                        }));
                    }));
                }

                if let Some(mql) = reduced_motion {
                    let slot = controller.clone();
                    let source = mql.clone();
                    listeners.push(EventListener::new(&mql, "change", move |_| {
                        drive(&slot, |c| {
                            c.set_reduced_motion(source.matches());
                            play.set(PlayState::of(c));
                        });
                    }));
                }
            }

            move || {
                drop(listeners);
                resize_timer.borrow_mut().take();
                let retired = controller.borrow_mut().take();
                drop(retired);
            }
        });
    }

    let on_prev = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| drive(&controller, |c| c.prev()))
    };
    let on_next = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| drive(&controller, |c| c.next()))
    };
    let on_dot = {
        let controller = controller.clone();
        Callback::from(move |index: usize| drive(&controller, |c| c.go_to(index)))
    };
    let on_toggle_play = {
        let controller = controller.clone();
        let play = play.clone();
        Callback::from(move |_: MouseEvent| {
            drive(&controller, |c| {
                c.toggle_autoplay();
                play.set(PlayState::of(c));
            })
        })
    };

    let on_pointer_down = {
        let controller = controller.clone();
        let play = play.clone();
        Callback::from(move |e: PointerEvent| {
            drive(&controller, |c| {
                c.pointer_down(e.client_x() as f64);
                play.set(PlayState::of(c));
            })
        })
    };
    let on_pointer_move = {
        let controller = controller.clone();
        Callback::from(move |e: PointerEvent| {
            drive(&controller, |c| c.pointer_move(e.client_x() as f64))
        })
    };
    let on_pointer_up = {
        let controller = controller.clone();
        let play = play.clone();
        Callback::from(move |_: PointerEvent| {
            drive(&controller, |c| {
                c.pointer_up();
                play.set(PlayState::of(c));
            })
        })
    };
    let on_pointer_enter = {
        let controller = controller.clone();
        let play = play.clone();
        Callback::from(move |_: PointerEvent| {
            drive(&controller, |c| {
                c.pointer_enter();
                play.set(PlayState::of(c));
            })
        })
    };
    let on_pointer_leave = {
        let controller = controller.clone();
        let play = play.clone();
        Callback::from(move |_: PointerEvent| {
            drive(&controller, |c| {
                c.pointer_leave();
                play.set(PlayState::of(c));
            })
        })
    };
    let on_key_down = {
        let controller = controller.clone();
        Callback::from(move |e: KeyboardEvent| {
            drive(&controller, |c| {
                if c.handle_key(&e.key()) {
                    e.prevent_default();
                }
            })
        })
    };

    if count == 0 {
        return html! {};
    }

    html! {
        <div class={styles::CAROUSEL} role="region" aria-roledescription="carousel" aria-label={props.label.clone()}>
            <div
                ref={viewport_ref}
                class={styles::CAROUSEL_VIEWPORT}
                tabindex="0"
                aria-live={if play.running { "off" } else { "polite" }}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up.clone()}
                onpointercancel={on_pointer_up}
                onpointerenter={on_pointer_enter}
                onpointerleave={on_pointer_leave}
                onkeydown={on_key_down}
            >
                <div ref={track_ref} class={styles::CAROUSEL_TRACK}>
                    { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                        <figure
                            id={format!("slide-{}", i)}
                            class={styles::CAROUSEL_SLIDE}
                            role="group"
                            aria-roledescription="slide"
                            aria-label={slide_label(i, count)}
                            aria-hidden={(i != *active).to_string()}
                        >
                            <blockquote class={classes!(styles::TEXT_BODY, "text-lg", "italic")}>
                                {format!("“{}”", slide.quote)}
                            </blockquote>
                            <figcaption class="mt-4">
                                <span class="font-semibold text-gray-900 dark:text-white">{slide.author.clone()}</span>
                                if !slide.role.is_empty() {
                                    <span class={styles::TEXT_SMALL}>{format!(", {}", slide.role)}</span>
                                }
                            </figcaption>
                        </figure>
                    })}
                </div>
            </div>
            <div class="flex items-center justify-center gap-4 mt-4">
                <button type="button" class={styles::BUTTON_SECONDARY} aria-label="Previous slide" onclick={on_prev}>{"‹"}</button>
                <div class="flex gap-2" role="tablist">
                    { for (0..count).map(|i| html! {
                        <button
                            type="button"
                            role="tab"
                            class={if i == *active { styles::CAROUSEL_DOT_ACTIVE } else { styles::CAROUSEL_DOT }}
                            aria-controls={format!("slide-{}", i)}
                            aria-label={slide_label(i, count)}
                            aria-selected={(i == *active).to_string()}
                            onclick={on_dot.reform(move |_: MouseEvent| i)}
                        />
                    })}
                </div>
                <button type="button" class={styles::BUTTON_SECONDARY} aria-label="Next slide" onclick={on_next}>{"›"}</button>
                <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_toggle_play}>
                    {if play.requested { "Pause" } else { "Play" }}
                </button>
            </div>
        </div>
    }
}
