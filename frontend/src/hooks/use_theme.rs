use gloo::events::EventListener;
use vitrine_shared::constants::THEME_STORAGE_KEY;
use vitrine_shared::theme::{Theme, ThemePreference};
use web_sys::window;
use yew::prelude::*;

use crate::config::{media_query, prefers_dark_scheme, DARK_SCHEME_QUERY};

fn stored_theme() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn store_theme(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme(theme: Theme) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = html.class_list().toggle_with_force("dark", theme.is_dark());
    let _ = html.set_attribute("data-theme", theme.as_str());
}

/// Current theme and a click handler that flips it.
///
/// Until the visitor toggles, the theme tracks the system color scheme.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let preference = use_mut_ref(|| {
        ThemePreference::resolve(stored_theme().as_deref(), prefers_dark_scheme())
    });
    let theme = use_state_eq(|| preference.borrow().current());

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    {
        let preference = preference.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = media_query(DARK_SCHEME_QUERY).map(|mql| {
                let source = mql.clone();
                EventListener::new(&mql, "change", move |_| {
                    let changed = preference.borrow_mut().system_changed(source.matches());
                    if let Some(next) = changed {
                        theme.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = preference.borrow_mut().toggle();
            store_theme(next);
            theme.set(next);
        })
    };

    (*theme, toggle)
}
