use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use validator::Validate;
use vitrine_shared::constants::SUBMIT_DELAY_MS;
use vitrine_shared::forms::{
    field_error, field_errors, CallbackRequest, ContactForm, NewsletterSignup, ServiceEnquiry,
    SubmitError, Submission,
};
use vitrine_shared::notification::Notification;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::dispatch_notification;

/// A form whose fields can be written by name from input events.
pub trait EditableForm: Validate + Clone + Default + PartialEq + 'static {
    fn set_field(&mut self, field: &str, value: String);
}

impl EditableForm for ContactForm {
    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "message" => self.message = value,
            _ => debug!("Unknown contact field {}", field),
        }
    }
}

impl EditableForm for CallbackRequest {
    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "phone" => self.phone = value,
            _ => debug!("Unknown callback field {}", field),
        }
    }
}

impl EditableForm for ServiceEnquiry {
    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "service" => self.service = value,
            _ => debug!("Unknown enquiry field {}", field),
        }
    }
}

impl EditableForm for NewsletterSignup {
    fn set_field(&mut self, field: &str, value: String) {
        if field == "email" {
            self.email = value;
        }
    }
}

#[derive(Clone)]
pub struct FormState<T: EditableForm> {
    pub value: T,
    pub errors: BTreeMap<String, String>,
    pub submission: Submission,
    pub on_input: Callback<(&'static str, String)>,
    pub on_blur: Callback<&'static str>,
    pub on_submit: Callback<SubmitEvent>,
}

impl<T: EditableForm> FormState<T> {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_sending(&self) -> bool {
        self.submission.is_sending()
    }

    pub fn button_label<'a>(&self, idle: &'a str) -> &'a str {
        self.submission.button_label(idle)
    }
}

/// Validated form with a simulated send.
///
/// Fields with an error are re-checked on every keystroke so the message
/// clears as soon as the input becomes valid. A successful submit waits
/// `SUBMIT_DELAY_MS`, clears the form and posts `success_message`.
#[hook]
pub fn use_form_state<T: EditableForm>(
    success_message: &'static str,
    on_sent: Option<Callback<()>>,
) -> FormState<T> {
    let value = use_state(T::default);
    let errors = use_state(BTreeMap::<String, String>::new);
    let submission = use_mut_ref(Submission::new);
    let snapshot = use_state_eq(Submission::new);

    let on_input = {
        let value = value.clone();
        let errors = errors.clone();
        Callback::from(move |(field, text): (&'static str, String)| {
            let mut next = (*value).clone();
            next.set_field(field, text);
            if errors.contains_key(field) {
                let mut updated = (*errors).clone();
                match field_error(&next, field) {
                    Some(message) => updated.insert(field.to_string(), message),
                    None => updated.remove(field),
                };
                errors.set(updated);
            }
            value.set(next);
        })
    };

    let on_blur = {
        let value = value.clone();
        let errors = errors.clone();
        Callback::from(move |field: &'static str| {
            let mut updated = (*errors).clone();
            match field_error(&*value, field) {
                Some(message) => updated.insert(field.to_string(), message),
                None => updated.remove(field),
            };
            errors.set(updated);
        })
    };

    let on_submit = {
        let value = value.clone();
        let errors = errors.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*value).clone();
            let started = submission.borrow_mut().begin(&form);
            match started {
                Err(SubmitError::Invalid(invalid)) => errors.set(field_errors(&invalid)),
                Err(SubmitError::AlreadySending) => debug!("Submit ignored, already sending"),
                Ok(()) => {
                    errors.set(BTreeMap::new());
                    snapshot.set(submission.borrow().clone());
                    let submission = submission.clone();
                    let value = value.clone();
                    let snapshot = snapshot.clone();
                    let on_sent = on_sent.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                        submission.borrow_mut().finish();
                        info!("Form sent");
                        submission.borrow_mut().reset();
                        value.set(T::default());
                        snapshot.set(submission.borrow().clone());
                        dispatch_notification(&Notification::success(success_message));
                        if let Some(on_sent) = on_sent {
                            on_sent.emit(());
                        }
                    });
                }
            }
        })
    };

    FormState {
        value: (*value).clone(),
        errors: (*errors).clone(),
        submission: (*snapshot).clone(),
        on_input,
        on_blur,
        on_submit,
    }
}
