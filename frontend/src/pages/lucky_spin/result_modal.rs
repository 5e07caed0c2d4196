use gloo_timers::callback::Timeout;
use rand::Rng;
use shared::constants::RESULT_REVEAL_DELAY_MS;
use shared::wheel_settings::Segment;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::TrophyIcon;
use crate::hooks::use_escape_key;
use crate::styles;

const PARTICLE_COUNT: usize = 20;

#[derive(Clone, PartialEq)]
struct Particle {
    left_pct: f64,
    top_pct: f64,
    duration_secs: f64,
}

fn scatter_particles() -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_secs: rng.gen_range(1.0..3.0),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub winner: Segment,
    pub on_close: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let visible = use_state(|| false);
    let particles = use_memo((), |_| scatter_particles());

    use_escape_key(props.on_close.clone());

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(RESULT_REVEAL_DELAY_MS, move || visible.set(true));
            move || drop(timeout)
        });
    }

    let backdrop_fade = if *visible { "opacity-100" } else { "opacity-0" };
    let card_pop = if *visible {
        "scale-100 translate-y-0"
    } else {
        "scale-90 translate-y-10"
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class={classes!("absolute", "inset-0", "bg-black/90", "backdrop-blur-md", "transition-opacity", "duration-500", backdrop_fade)}
                onclick={props.on_close.reform(|_: MouseEvent| ())}
            ></div>

            <div class="absolute inset-0 pointer-events-none overflow-hidden">
                {for particles.iter().map(|p| html! {
                    <div
                        class="absolute w-2 h-2 rounded-full animate-ping"
                        style={format!(
                            "left: {:.2}%; top: {:.2}%; background-color: {}; animation-duration: {:.2}s;",
                            p.left_pct, p.top_pct, props.winner.color, p.duration_secs
                        )}
                    ></div>
                })}
            </div>

            <div class={classes!(
                "relative", "w-full", "max-w-md", "bg-slate-900", "border", "border-white/10",
                "rounded-[2.5rem]", "p-1", "shadow-2xl", "transition-all", "duration-700", "transform",
                card_pop, backdrop_fade
            )}>
                <div class="bg-gradient-to-b from-white/5 to-transparent rounded-[2.3rem] p-10 text-center">
                    <div class="relative w-32 h-32 mx-auto mb-8">
                        <div
                            class="absolute inset-0 rounded-full blur-2xl opacity-40 animate-pulse"
                            style={format!("background-color: {};", props.winner.color)}
                        ></div>
                        <div
                            class="relative w-full h-full rounded-full flex items-center justify-center border-4 border-white/20 shadow-2xl"
                            style={format!("background-color: {};", props.winner.color)}
                        >
                            <TrophyIcon />
                        </div>
                    </div>

                    <h2 class="text-5xl font-black mb-2 tracking-tighter bg-gradient-to-b from-white to-gray-400 bg-clip-text text-transparent">
                        {"Congratulations!"}
                    </h2>
                    <p class="text-gray-400 font-medium mb-8 uppercase tracking-[0.2em] text-xs">{"You won"}</p>

                    <div class="bg-white/5 border border-white/10 rounded-3xl p-8 mb-10">
                        <p class="text-4xl font-black tracking-tight" style={format!("color: {};", props.winner.color)}>
                            {props.winner.text.clone()}
                        </p>
                    </div>

                    <button onclick={props.on_close.reform(|_: MouseEvent| ())} class={classes!(styles::BUTTON_PRIMARY, "w-full", "py-5")}>
                        {"CLAIM REWARD"}
                    </button>
                </div>
            </div>
        </div>
    }
}
