use gloo::events::EventListener;
use vitrine_shared::lightbox::{Filter, ProjectDetails};
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<ProjectDetails>,
    pub categories: Vec<String>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let filter = use_state(Filter::default);
    let selected = use_state(|| None::<ProjectDetails>);

    {
        let selected = selected.clone();
        let is_open = selected.is_some();
        use_effect_with(is_open, move |open| {
            let listener = (*open)
                .then(|| window().and_then(|w| w.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .map_or(false, |e| e.key() == "Escape");
                        if escape {
                            selected.set(None);
                        }
                    })
                });
            move || drop(listener)
        });
    }

    let filter_button = |label: String, value: Filter| {
        let active = *filter == value;
        let filter = filter.clone();
        html! {
            <button
                type="button"
                class={if active { styles::BUTTON_FILTER_ACTIVE } else { styles::BUTTON_FILTER }}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_: MouseEvent| filter.set(value.clone()))}
            >
                {label}
            </button>
        }
    };

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <>
            <div class="flex flex-wrap gap-2">
                {filter_button("All".to_string(), Filter::All)}
                { for props.categories.iter().map(|c| filter_button(c.clone(), Filter::Category(c.clone()))) }
            </div>
            <div class={styles::SECTION_GRID}>
                { for props.projects.iter().filter(|p| filter.shows(&p.category)).map(|project| {
                    let open = {
                        let selected = selected.clone();
                        let project = project.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(project.clone())))
                    };
                    html! {
                        <button type="button" class={classes!(styles::CARD_HOVER, "text-left")} onclick={open}>
                            <h3 class={styles::TEXT_H3}>{project.title.clone()}</h3>
                            <p class={styles::TEXT_SMALL}>{project.category.clone()}</p>
                        </button>
                    }
                })}
            </div>
            if let Some(project) = &*selected {
                <div class={styles::MODAL_BACKDROP} onclick={close.clone()} />
                <div class={styles::MODAL} role="dialog" aria-modal="true" aria-label={project.title.clone()}>
                    <div class={styles::MODAL_PANEL}>
                        <button type="button" class={classes!(styles::BUTTON_ICON, "absolute", "top-2", "right-2")} aria-label="Close" onclick={close}>
                            {"✕"}
                        </button>
                        <h3 class={styles::TEXT_H3}>{project.title.clone()}</h3>
                        <p class={classes!(styles::TEXT_BODY, "mt-2")}>{project.description.clone()}</p>
                        <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{project.tags_label()}</p>
                        <a href={project.link.clone()} class={classes!(styles::BUTTON_PRIMARY, "mt-4")}>{"View project"}</a>
                    </div>
                </div>
            }
        </>
    }
}
