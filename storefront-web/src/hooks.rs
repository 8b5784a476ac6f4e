use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::{Callback, hook, use_effect_with};

use crate::browser;

/// Call `on_escape` whenever Escape is pressed anywhere in the document.
#[hook]
pub fn use_escape_key(on_escape: Callback<()>) {
    use_effect_with(on_escape, |on_escape| {
        let on_escape = on_escape.clone();
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_escape.emit(());
            }
        });
        let document = browser::document();
        if let Some(document) = &document
            && let Err(err) = document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for Escape: {err:?}");
        }

        move || {
            if let Some(document) = document {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    });
}

/// Keep `<body>` overflow in sync with `overflow`, restoring it on unmount.
#[hook]
pub fn use_body_overflow(overflow: &'static str) {
    use_effect_with(overflow, |overflow| {
        browser::set_body_overflow(overflow);
        || browser::set_body_overflow("")
    });
}
