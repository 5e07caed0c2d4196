mod result_modal;
mod settings_modal;
mod spin_timers;
mod wheel_canvas;
mod wheel_utils;

use gloo::dialogs::{alert, confirm};
use shared::constants::RESET_CONFIRM_PROMPT;
use shared::shared_wheel_game::SpinState;
use shared::tones::Cue;
use shared::wheel_settings::{MoveDirection, SegmentError, Settings};
use yew::prelude::*;

use crate::audio::AudioCues;
use crate::components::icons::SettingsIcon;
use crate::hooks::{use_wheel_settings, WheelSettingsHandle};
use crate::styles;

use result_modal::ResultModal;
use settings_modal::SettingsModal;
use spin_timers::SpinTimers;
use wheel_canvas::WheelCanvas;
use wheel_utils::{Pointer, RewardList, SpinButton};

/// Surfaces a rejected settings edit. Only the minimum-count rule is worth
/// interrupting the user for.
fn report(result: Result<(), SegmentError>) {
    match result {
        Ok(()) => {}
        Err(e @ SegmentError::BelowMinimum { .. }) => {
            log::warn!("Segment removal rejected: {}", e);
            alert(&e.to_string());
        }
        Err(e) => log::debug!("Settings edit ignored: {}", e),
    }
}

fn settings_callback<T: 'static>(
    settings: &WheelSettingsHandle,
    is_spinning: bool,
    edit: impl Fn(&mut Settings, T) -> Result<(), SegmentError> + 'static,
) -> Callback<T> {
    let settings = settings.clone();
    Callback::from(move |arg: T| report(settings.apply(is_spinning, |s| edit(s, arg))))
}

#[function_component(LuckySpin)]
pub fn lucky_spin() -> Html {
    let settings = use_wheel_settings();
    let spin_state = use_state(SpinState::new);
    // Angle currently painted; trails `spin_state.rotation` during a spin.
    let display_rotation = use_state(|| 0.0_f64);
    let show_settings = use_state(|| false);

    let timers = use_mut_ref(|| None::<SpinTimers>);
    let audio = use_mut_ref(AudioCues::new);

    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                timers.borrow_mut().take();
            }
        });
    }

    let is_spinning = spin_state.is_spinning;

    let start_spin = {
        let settings = settings.clone();
        let spin_state = spin_state.clone();
        let display_rotation = display_rotation.clone();
        let timers = timers.clone();
        let audio = audio.clone();

        Callback::from(move |_: MouseEvent| {
            let segments = settings.current().segments.clone();
            let sound_enabled = settings.current().sound_enabled;

            let mut started = (*spin_state).clone();
            let Some(plan) = started.begin(segments.len(), &mut rand::thread_rng()) else {
                return;
            };

            audio.borrow_mut().arm();
            log::info!(
                "Spin started: {:.0}° -> {:.0}° over {} segments",
                plan.start_rotation,
                plan.target_rotation,
                plan.segment_count
            );
            spin_state.set(started.clone());

            let on_frame = {
                let display_rotation = display_rotation.clone();
                Callback::from(move |angle: f64| display_rotation.set(angle))
            };

            let on_tick = {
                let audio = audio.clone();
                Callback::from(move |_: ()| {
                    log::debug!("Tick");
                    audio.borrow().play(Cue::Tick, sound_enabled);
                })
            };

            let on_reveal = {
                let spin_state = spin_state.clone();
                let display_rotation = display_rotation.clone();
                let timers = timers.clone();
                let audio = audio.clone();
                Callback::from(move |_: ()| {
                    if let Some(running) = timers.borrow_mut().as_mut() {
                        running.stop_animation();
                    }
                    display_rotation.set(plan.target_rotation);

                    let mut finished = started.clone();
                    if let Some(winner) = finished.finish(&plan, &segments) {
                        log::info!("Winner: {} ({})", winner.text, winner.id);
                    }
                    spin_state.set(finished);
                    audio.borrow().play(Cue::Win, sound_enabled);
                })
            };

            *timers.borrow_mut() = Some(SpinTimers::start(plan, on_frame, on_tick, on_reveal));
        })
    };

    let dismiss_result = {
        let spin_state = spin_state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*spin_state).clone();
            next.dismiss_result();
            spin_state.set(next);
        })
    };

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(true))
    };

    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(false))
    };

    let on_add = settings_callback(&settings, is_spinning, |s, text: String| {
        s.add_segment(&text).map(|_| ())
    });
    let on_edit = settings_callback(&settings, is_spinning, |s, (id, text): (String, String)| {
        s.edit_segment(&id, &text)
    });
    let on_delete = settings_callback(&settings, is_spinning, |s, id: String| {
        s.remove_segment(&id).map(|_| ())
    });
    let on_move = settings_callback(&settings, is_spinning, |s, (index, direction): (usize, MoveDirection)| {
        s.move_segment(index, direction);
        Ok(())
    });
    let on_toggle_sound = settings_callback(&settings, is_spinning, |s, _: ()| {
        s.toggle_sound();
        Ok(())
    });

    let on_reset = {
        let settings = settings.clone();
        let spin_state = spin_state.clone();
        let display_rotation = display_rotation.clone();
        let timers = timers.clone();
        Callback::from(move |_: ()| {
            if !confirm(RESET_CONFIRM_PROMPT) {
                return;
            }
            timers.borrow_mut().take();

            let mut defaults = settings.current().clone();
            defaults.reset_to_default();
            settings.replace(defaults);

            let mut cleared = (*spin_state).clone();
            cleared.reset();
            spin_state.set(cleared);
            display_rotation.set(0.0);
            log::info!("Wheel reset to defaults");
        })
    };

    let current = settings.current();

    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <div>
                    <h1 class={styles::TITLE}>{"LUCKY SPIN"}</h1>
                    <p class={styles::SUBTITLE}>{"Powered by BizConnect Event"}</p>
                </div>
                <button
                    onclick={open_settings}
                    disabled={is_spinning}
                    class={styles::BUTTON_ICON}
                    title="Settings"
                >
                    <SettingsIcon />
                </button>
            </header>

            <main class={styles::MAIN}>
                <div class="relative">
                    <Pointer is_spinning={is_spinning} />
                    <WheelCanvas
                        segments={current.segments.clone()}
                        rotation={*display_rotation}
                        is_spinning={is_spinning}
                    />
                </div>

                <div class="mt-16 flex flex-col items-center gap-4">
                    <SpinButton is_spinning={is_spinning} onclick={start_spin} />
                    <p class={styles::TEXT_HINT}>{"Click to try your luck!"}</p>
                </div>

                <RewardList segments={current.segments.clone()} />
            </main>

            if *show_settings {
                <SettingsModal
                    settings={current.clone()}
                    on_close={close_settings}
                    {on_add}
                    {on_edit}
                    {on_delete}
                    {on_move}
                    {on_toggle_sound}
                    {on_reset}
                />
            }

            if spin_state.show_result {
                if let Some(winner) = spin_state.winner.clone() {
                    <ResultModal {winner} on_close={dismiss_result} />
                }
            }
        </div>
    }
}
