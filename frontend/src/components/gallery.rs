use std::rc::Rc;

use gloo::events::EventListener;
use vitrine_shared::lightbox::{GalleryImage, Lightbox};
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::models::Service;
use crate::styles;

pub enum GalleryAction {
    Open(Vec<GalleryImage>),
    Close,
    Next,
    Prev,
    Select(usize),
    Key(String),
}

#[derive(Clone, Default, PartialEq)]
pub struct GalleryState(pub Lightbox<GalleryImage>);

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut lightbox = self.0.clone();
        match action {
            GalleryAction::Open(images) => lightbox.open(images),
            GalleryAction::Close => lightbox.close(),
            GalleryAction::Next => lightbox.next(),
            GalleryAction::Prev => lightbox.prev(),
            GalleryAction::Select(index) => lightbox.select(index),
            GalleryAction::Key(key) => {
                if !lightbox.handle_key(&key) {
                    return self;
                }
            }
        }
        Rc::new(Self(lightbox))
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceGalleryProps {
    pub services: Vec<Service>,
}

/// Service cards, each opening its photos in a lightbox.
#[function_component(ServiceGallery)]
pub fn service_gallery(props: &ServiceGalleryProps) -> Html {
    let gallery = use_reducer(GalleryState::default);
    let is_open = gallery.0.is_open();

    {
        let dispatcher = gallery.dispatcher();
        use_effect_with(is_open, move |open| {
            let listener = (*open)
                .then(|| window().and_then(|w| w.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            dispatcher.dispatch(GalleryAction::Key(event.key()));
                        }
                    })
                });
            move || drop(listener)
        });
    }

    let close = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Close))
    };
    let prev = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Prev))
    };
    let next = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Next))
    };

    let lightbox = &gallery.0;

    html! {
        <>
            <div class={styles::SECTION_GRID}>
                { for props.services.iter().enumerate().map(|(i, service)| {
                    let open = {
                        let gallery = gallery.clone();
                        let images = service.gallery.clone();
                        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Open(images.clone())))
                    };
                    html! {
                        <div class={classes!(styles::CARD_HOVER, styles::REVEAL)} data-reveal="" data-reveal-delay={format!("{}ms", i * 100)}>
                            <h3 class={styles::TEXT_H3}>{service.title.clone()}</h3>
                            <p class={classes!(styles::TEXT_BODY, "mt-2")}>{service.summary.clone()}</p>
                            if !service.gallery.is_empty() {
                                <button type="button" class={classes!(styles::BUTTON_SECONDARY, "mt-4")} onclick={open}>
                                    {"View gallery"}
                                </button>
                            }
                        </div>
                    }
                })}
            </div>
            if lightbox.is_open() {
                <div class={styles::MODAL_BACKDROP} onclick={close.clone()} />
                <div class={styles::MODAL} role="dialog" aria-modal="true" aria-label="Gallery">
                    <div class={styles::MODAL_PANEL}>
                        <button type="button" class={classes!(styles::BUTTON_ICON, "absolute", "top-2", "right-2")} aria-label="Close" onclick={close}>
                            {"✕"}
                        </button>
                        if let Some(image) = lightbox.current() {
                            <img src={image.src.clone()} alt={image.alt.clone()} width="1600" height="900" loading="lazy" class="w-full rounded-lg" />
                        }
                        <div class="flex items-center justify-between mt-4">
                            <button type="button" class={styles::BUTTON_SECONDARY} aria-label="Previous image" onclick={prev}>{"‹"}</button>
                            <div class="flex gap-2">
                                { for (0..lightbox.items().len()).map(|i| {
                                    let gallery = gallery.clone();
                                    html! {
                                        <button
                                            type="button"
                                            class={if i == lightbox.index() { styles::CAROUSEL_DOT_ACTIVE } else { styles::CAROUSEL_DOT }}
                                            aria-selected={(i == lightbox.index()).to_string()}
                                            onclick={Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Select(i)))}
                                        />
                                    }
                                })}
                            </div>
                            <button type="button" class={styles::BUTTON_SECONDARY} aria-label="Next image" onclick={next}>{"›"}</button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
