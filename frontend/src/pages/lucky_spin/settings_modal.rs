use shared::wheel_settings::{MoveDirection, Settings};
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_escape_key;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub settings: Settings,
    pub on_close: Callback<()>,
    pub on_add: Callback<String>,
    pub on_edit: Callback<(String, String)>,
    pub on_delete: Callback<String>,
    pub on_move: Callback<(usize, MoveDirection)>,
    pub on_toggle_sound: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let new_text = use_state(String::new);

    use_escape_key(props.on_close.clone());

    let submit_new = {
        let new_text = new_text.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: ()| {
            if new_text.trim().is_empty() {
                return;
            }
            on_add.emit((*new_text).clone());
            new_text.set(String::new());
        })
    };

    let on_new_input = {
        let new_text = new_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_text.set(input.value());
        })
    };

    let on_new_keydown = {
        let submit_new = submit_new.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit_new.emit(());
            }
        })
    };

    let sound_enabled = props.settings.sound_enabled;
    let count = props.settings.segments.len();

    html! {
        <div class={styles::MODAL_SHELL}>
            <div class={styles::MODAL_BACKDROP} onclick={props.on_close.reform(|_: MouseEvent| ())}></div>

            <div class={styles::MODAL_PANEL}>
                <div class="p-6 border-b border-white/10 flex justify-between items-center">
                    <h2 class="text-2xl font-bold">{"Wheel Settings"}</h2>
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="p-2 hover:bg-white/10 rounded-full"
                    >
                        {"×"}
                    </button>
                </div>

                <div class="flex-1 overflow-y-auto p-6 space-y-6">
                    <div class={classes!("flex", "items-center", "justify-between", "p-4", "rounded-xl", styles::GLASS_CARD)}>
                        <span class="font-semibold">{"Sound Effects"}</span>
                        <button
                            onclick={props.on_toggle_sound.reform(|_: MouseEvent| ())}
                            class={classes!(
                                "w-12", "h-6", "rounded-full", "transition-colors", "relative",
                                if sound_enabled { "bg-cyan-500" } else { "bg-gray-700" }
                            )}
                        >
                            <div class={classes!(
                                "absolute", "top-1", "w-4", "h-4", "bg-white", "rounded-full", "transition-transform",
                                if sound_enabled { "left-7" } else { "left-1" }
                            )}></div>
                        </button>
                    </div>

                    <div class="space-y-2">
                        <label class={styles::TEXT_LABEL}>{"Add New Item"}</label>
                        <div class="flex gap-2">
                            <input
                                type="text"
                                value={(*new_text).clone()}
                                placeholder="Enter prize name..."
                                class={styles::INPUT}
                                oninput={on_new_input}
                                onkeydown={on_new_keydown}
                            />
                            <button onclick={submit_new.reform(|_: MouseEvent| ())} class={styles::BUTTON_ADD}>
                                {"Add"}
                            </button>
                        </div>
                    </div>

                    <div class="space-y-2">
                        <label class={styles::TEXT_LABEL}>{format!("Manage Items ({})", count)}</label>
                        <div class="space-y-2">
                            {for props.settings.segments.iter().enumerate().map(|(index, segment)| {
                                let id = segment.id.clone();
                                let on_edit = {
                                    let id = id.clone();
                                    let on_edit = props.on_edit.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        on_edit.emit((id.clone(), input.value()));
                                    }
                                };
                                let on_up = props.on_move.reform(move |_: MouseEvent| (index, MoveDirection::Up));
                                let on_down = props.on_move.reform(move |_: MouseEvent| (index, MoveDirection::Down));
                                let on_delete = {
                                    let id = id.clone();
                                    props.on_delete.reform(move |_: MouseEvent| id.clone())
                                };

                                html! {
                                    <div key={id} class={classes!("flex", "items-center", "gap-2", "p-2", "rounded-lg", styles::GLASS_CARD)}>
                                        <div
                                            class="w-4 h-4 rounded-full flex-shrink-0"
                                            style={format!("background-color: {};", segment.color)}
                                        ></div>
                                        <input
                                            type="text"
                                            value={segment.text.clone()}
                                            oninput={on_edit}
                                            class={styles::INPUT_INLINE}
                                        />
                                        <div class="flex items-center gap-1">
                                            <button onclick={on_up} disabled={index == 0} class={styles::BUTTON_ROW}>
                                                {"↑"}
                                            </button>
                                            <button onclick={on_down} disabled={index + 1 == count} class={styles::BUTTON_ROW}>
                                                {"↓"}
                                            </button>
                                            <button onclick={on_delete} class={styles::BUTTON_DELETE}>
                                                {"Delete"}
                                            </button>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>

                <div class="p-6 border-t border-white/10 flex justify-between gap-4">
                    <button onclick={props.on_reset.reform(|_: MouseEvent| ())} class={styles::BUTTON_LINK}>
                        {"Reset to Default"}
                    </button>
                    <button onclick={props.on_close.reform(|_: MouseEvent| ())} class={styles::BUTTON_PRIMARY}>
                        {"Save & Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
