use js_sys::Array;
use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Observer {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(e) => {
                error!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
