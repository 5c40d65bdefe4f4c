use chrono::{Datelike, Local};
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_utils::format::JsValueSerdeExt;
use log::error;
use vitrine_shared::constants::NOTIFICATION_TIMEOUT_MS;
use vitrine_shared::navigation::scroll_target;
use vitrine_shared::notification::{Notification, NotificationCenter, NotificationKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, CustomEvent, CustomEventInit, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::config::prefers_reduced_motion;
use crate::hooks::{use_active_section, use_header_scroll, use_menu, use_parallax, use_theme};
use crate::styles;

const NOTIFICATION_EVENT: &str = "notification";
const HEADER_SELECTOR: &str = "[data-header]";

pub const SECTION_IDS: &[&str] = &["home", "about", "services", "portfolio", "testimonials", "contact"];

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

/// Shows `notification` in the page toast, replacing any visible one.
pub fn dispatch_notification(notification: &Notification) {
    let Some(window) = window() else {
        return;
    };
    let detail = match JsValue::from_serde(notification) {
        Ok(detail) => detail,
        Err(e) => {
            error!("Failed to encode notification: {}", e);
            return;
        }
    };
    let event_init = CustomEventInit::new();
    event_init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &event_init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => error!("Failed to create notification event: {:?}", e),
    }
}

/// Smooth unless the user prefers reduced motion.
fn scroll_window_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scrolls so the section named by `href` sits just below the fixed header.
/// Returns `false` when `href` is not an in-page section link.
fn scroll_to_section(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#') else {
        return false;
    };
    let Some(window) = window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(section) = document.get_element_by_id(id) else {
        return false;
    };

    let header_height = document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |h| h.offset_height() as f64);
    let top = section.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);

    scroll_window_to(&window, scroll_target(top, header_height));

    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
    }
    true
}

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => styles::ALERT_SUCCESS,
        NotificationKind::Error => styles::ALERT_ERROR,
        NotificationKind::Info => styles::ALERT_INFO,
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub brand: AttrValue,
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let (theme, toggle_theme) = use_theme();
    let header = use_header_scroll();
    use_parallax();
    let active_section = use_active_section(SECTION_IDS);
    let menu = use_menu();

    let center = use_mut_ref(NotificationCenter::new);
    let notification = use_state(|| None::<Notification>);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    {
        let center = center.clone();
        let notification = notification.clone();
        let dismiss_timer = dismiss_timer.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    let Some(event) = event.dyn_ref::<CustomEvent>() else {
                        return;
                    };
                    let shown = match event.detail().into_serde::<Notification>() {
                        Ok(shown) => shown,
                        Err(e) => {
                            error!("Malformed notification: {}", e);
                            return;
                        }
                    };
                    let id = center.borrow_mut().show(shown.clone());
                    notification.set(Some(shown));

                    let center = center.clone();
                    let notification = notification.clone();
                    *dismiss_timer.borrow_mut() = Some(Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                        if center.borrow_mut().dismiss(id) {
                            notification.set(None);
                        }
                    }));
                })
            });
            move || drop(listener)
        });
    }

    let dismiss = {
        let notification = notification.clone();
        Callback::from(move |_: MouseEvent| {
            let current = center.borrow().current_id();
            if let Some(id) = current {
                center.borrow_mut().dismiss(id);
            }
            dismiss_timer.borrow_mut().take();
            notification.set(None);
        })
    };

    let on_nav_click = {
        let close = menu.close.clone();
        Callback::from(move |e: MouseEvent| {
            let href = e
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.get_attribute("href"))
                .unwrap_or_default();
            if scroll_to_section(&href) {
                e.prevent_default();
            }
            close.emit(());
        })
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            scroll_window_to(&window, 0.0);
        }
    });

    let header_class = classes!(
        styles::HEADER,
        header.scrolled.then_some(styles::HEADER_SCROLLED),
        header.hidden.then_some(styles::HEADER_HIDDEN),
    );
    let theme_icon = if theme.is_dark() { "☀️" } else { "🌙" };
    let theme_label = if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" };
    let year = Local::now().year();

    html! {
        <div class="min-h-full bg-gray-50 dark:bg-gray-900">
            <header class={header_class} data-header="">
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between relative">
                        <a href="#home" class={styles::NAV_BRAND} onclick={on_nav_click.clone()}>{props.brand.clone()}</a>
                        <nav id="primary-nav" aria-label="Primary" class={if menu.menu.is_open() { styles::NAV_ITEMS_OPEN } else { styles::NAV_ITEMS }}>
                            { for NAV_LINKS.iter().map(|(href, label)| {
                                let current = active_section.as_deref().map_or(false, |id| {
                                    vitrine_shared::navigation::link_targets(href, id)
                                });
                                html! {
                                    <a
                                        href={*href}
                                        class={if current { styles::NAV_LINK_ACTIVE } else { styles::NAV_LINK }}
                                        aria-current={current.then_some("true")}
                                        onclick={on_nav_click.clone()}
                                    >
                                        {*label}
                                    </a>
                                }
                            })}
                        </nav>
                        <div class="flex items-center gap-2">
                            <button type="button" onclick={toggle_theme} class={styles::BUTTON_ICON} aria-label={theme_label}>{theme_icon}</button>
                            <button
                                type="button"
                                class={classes!(styles::BUTTON_ICON, "md:hidden")}
                                aria-controls="primary-nav"
                                aria-expanded={menu.menu.aria_expanded()}
                                aria-label={menu.menu.toggle_label()}
                                onclick={menu.toggle.clone()}
                            >
                                {"☰"}
                            </button>
                        </div>
                    </div>
                </div>
            </header>
            if let Some(shown) = &*notification {
                <div class={toast_class(shown.kind)} role="status" aria-live="polite">
                    <span>{shown.message.clone()}</span>
                    <button type="button" class="ml-4" aria-label="Dismiss" onclick={dismiss}>{"✕"}</button>
                </div>
            }
            <main class="pt-16">{props.children.clone()}</main>
            <button
                type="button"
                class={classes!(styles::SCROLL_TOP, (!header.scroll_top).then_some(styles::SCROLL_TOP_HIDDEN))}
                aria-label="Scroll to top"
                aria-hidden={(!header.scroll_top).to_string()}
                tabindex={if header.scroll_top { "0" } else { "-1" }}
                onclick={on_scroll_top}
            >
                {"↑"}
            </button>
            <footer class={styles::FOOTER}>
                <div class="h-16 flex items-center justify-center gap-2">
                    <span class={styles::TEXT_SMALL}>{format!("© {} {}", year, props.brand)}</span>
                    <a href="#home" class={styles::FOOTER_LINK} onclick={on_nav_click}>{"Back to top"}</a>
                </div>
            </footer>
        </div>
    }
}
