use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

/// Emits `on_escape` whenever Escape is pressed while the caller is mounted.
#[hook]
pub fn use_escape_key(on_escape: Callback<()>) {
    use_effect_with(on_escape, |on_escape| {
        let on_escape = on_escape.clone();
        let listener = window().map(|window| {
            EventListener::new(&window, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .map(|e| e.key() == "Escape")
                    .unwrap_or(false);
                if is_escape {
                    on_escape.emit(());
                }
            })
        });

        move || drop(listener)
    });
}
