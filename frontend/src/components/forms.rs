use gloo_timers::callback::Timeout;
use vitrine_shared::constants::{
    CALLBACK_SUCCESS, CONTACT_SUCCESS, NEWSLETTER_SUCCESS,
};
use vitrine_shared::forms::{CallbackRequest, ContactForm, NewsletterSignup, ServiceEnquiry};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::form_state::{use_form_state, EditableForm, FormState};
use crate::models::Service;
use crate::styles;

const CALLBACK_CLOSE_DELAY_MS: u32 = 1200;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    /// Prefix keeping element ids unique across forms on one page.
    pub form: &'static str,
    pub name: &'static str,
    pub label: AttrValue,
    pub value: String,
    pub error: Option<String>,
    pub on_input: Callback<(&'static str, String)>,
    pub on_blur: Callback<&'static str>,
    #[prop_or("text")]
    pub kind: &'static str,
    #[prop_or(false)]
    pub multiline: bool,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let id = format!("{}-{}", props.form, props.name);
    let error_id = format!("error-{}-{}", props.form, props.name);
    let name = props.name;
    let class = if props.error.is_some() { styles::INPUT_ERROR } else { styles::INPUT };
    let invalid = props.error.as_ref().map(|_| "true");
    let onblur = props.on_blur.reform(move |_: FocusEvent| name);

    let control = if props.multiline {
        let oninput = props.on_input.reform(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            (name, input.value())
        });
        html! {
            <textarea id={id.clone()} {name} rows="4" {class} value={props.value.clone()}
                aria-invalid={invalid} aria-describedby={error_id.clone()} {oninput} {onblur} />
        }
    } else {
        let oninput = props.on_input.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (name, input.value())
        });
        html! {
            <input id={id.clone()} {name} type={props.kind} {class} value={props.value.clone()}
                aria-invalid={invalid} aria-describedby={error_id.clone()} {oninput} {onblur} />
        }
    };

    html! {
        <div>
            <label for={id} class={styles::TEXT_LABEL}>{props.label.clone()}</label>
            {control}
            <small id={error_id} class={styles::TEXT_ERROR} aria-live="polite">
                {props.error.clone().unwrap_or_default()}
            </small>
        </div>
    }
}

fn text_field<T: EditableForm>(
    state: &FormState<T>,
    form: &'static str,
    name: &'static str,
    label: &'static str,
    value: &str,
    kind: &'static str,
) -> Html {
    html! {
        <Field
            {form}
            {name}
            label={label}
            value={value.to_string()}
            error={state.error(name).map(str::to_string)}
            on_input={state.on_input.clone()}
            on_blur={state.on_blur.clone()}
            {kind}
        />
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let state = use_form_state::<ContactForm>(CONTACT_SUCCESS, None);
    let form = state.value.clone();

    html! {
        <form class={styles::FORM} novalidate=true onsubmit={state.on_submit.clone()}>
            {text_field(&state, "contact", "name", "Name", &form.name, "text")}
            {text_field(&state, "contact", "email", "Email", &form.email, "email")}
            <Field
                form="contact"
                name="message"
                label="Message"
                value={form.message.clone()}
                error={state.error("message").map(str::to_string)}
                on_input={state.on_input.clone()}
                on_blur={state.on_blur.clone()}
                multiline=true
            />
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={state.is_sending()}>
                {state.button_label("Send message")}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceEnquiryProps {
    pub services: Vec<Service>,
}

#[function_component(ServiceEnquiryForm)]
pub fn service_enquiry_form(props: &ServiceEnquiryProps) -> Html {
    let state = use_form_state::<ServiceEnquiry>(CONTACT_SUCCESS, None);
    let form = state.value.clone();

    let on_service = state.on_input.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        ("service", select.value())
    });
    let on_service_blur = state.on_blur.reform(|_: FocusEvent| "service");
    let service_error = state.error("service").map(str::to_string);

    html! {
        <form class={styles::FORM} novalidate=true onsubmit={state.on_submit.clone()}>
            {text_field(&state, "enquiry", "name", "Name", &form.name, "text")}
            {text_field(&state, "enquiry", "email", "Email", &form.email, "email")}
            {text_field(&state, "enquiry", "phone", "Phone", &form.phone, "tel")}
            <div>
                <label for="enquiry-service" class={styles::TEXT_LABEL}>{"Service"}</label>
                <select
                    id="enquiry-service"
                    name="service"
                    class={if service_error.is_some() { styles::INPUT_ERROR } else { styles::INPUT }}
                    aria-invalid={service_error.as_ref().map(|_| "true")}
                    onchange={on_service}
                    onblur={on_service_blur}
                >
                    <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                    { for props.services.iter().map(|s| html! {
                        <option value={s.id.clone()} selected={form.service == s.id}>{s.title.clone()}</option>
                    })}
                </select>
                <small id="error-enquiry-service" class={styles::TEXT_ERROR}>{service_error.clone().unwrap_or_default()}</small>
            </div>
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={state.is_sending()}>
                {state.button_label("Request a quote")}
            </button>
        </form>
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let state = use_form_state::<NewsletterSignup>(NEWSLETTER_SUCCESS, None);
    let email = state.value.email.clone();

    html! {
        <form class="flex flex-col sm:flex-row gap-2 items-start" novalidate=true onsubmit={state.on_submit.clone()}>
            {text_field(&state, "newsletter", "email", "Newsletter", &email, "email")}
            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "sm:mt-7")} disabled={state.is_sending()}>
                {state.button_label("Subscribe")}
            </button>
        </form>
    }
}

/// Floating "call me back" button with its modal form.
#[function_component(CallbackModal)]
pub fn callback_modal() -> Html {
    let open = use_state_eq(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    let on_sent = {
        let open = open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_| {
            let open = open.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(CALLBACK_CLOSE_DELAY_MS, move || open.set(false)));
        })
    };
    let state = use_form_state::<CallbackRequest>(CALLBACK_SUCCESS, Some(on_sent));
    let form = state.value.clone();

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let on_key_down = {
        let open = open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                open.set(false);
            }
        })
    };

    html! {
        <>
            <button type="button" class={classes!(styles::BUTTON_PRIMARY, "fixed", "bottom-6", "right-6", "z-30", "md:hidden")} onclick={show}>
                {"Request a callback"}
            </button>
            if *open {
                <div class={styles::MODAL_BACKDROP} onclick={hide.clone()} />
                <div class={styles::MODAL} role="dialog" aria-modal="true" aria-label="Request a callback" onkeydown={on_key_down}>
                    <div class={styles::MODAL_PANEL}>
                        <button type="button" class={classes!(styles::BUTTON_ICON, "absolute", "top-2", "right-2")} aria-label="Close" onclick={hide}>
                            {"✕"}
                        </button>
                        <h3 class={styles::TEXT_H3}>{"Request a callback"}</h3>
                        <form class={styles::FORM} novalidate=true onsubmit={state.on_submit.clone()}>
                            {text_field(&state, "callback", "name", "Name", &form.name, "text")}
                            {text_field(&state, "callback", "phone", "Phone", &form.phone, "tel")}
                            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={state.is_sending()}>
                                {state.button_label("Call me back")}
                            </button>
                        </form>
                    </div>
                </div>
            }
        </>
    }
}
