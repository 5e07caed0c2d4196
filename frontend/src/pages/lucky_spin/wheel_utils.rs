use shared::wheel_settings::Segment;
use yew::prelude::*;

use crate::styles;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "SPINNING..." } else { "SPIN NOW" };
    let state_class = if props.is_spinning {
        styles::BUTTON_SPIN_DISABLED
    } else {
        styles::BUTTON_SPIN_ACTIVE
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(
                "group",
                "relative",
                "px-16",
                "py-5",
                "rounded-3xl",
                "text-2xl",
                "font-black",
                "tracking-widest",
                "shadow-2xl",
                "transition-all",
                "transform",
                "hover:-translate-y-1",
                "active:scale-95",
                "overflow-hidden",
                state_class
            )}
        >
            if !props.is_spinning {
                <div class="absolute inset-0 bg-gradient-to-r from-cyan-500 via-blue-600 to-purple-600 opacity-0 group-hover:opacity-10 transition-opacity"></div>
            }
            <span class="relative z-10">{button_text}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct PointerProps {
    pub is_spinning: bool,
}

/// Fixed marker at 12 o'clock. The segment under it wins.
#[function_component(Pointer)]
pub fn pointer(props: &PointerProps) -> Html {
    html! {
        <div class="absolute -top-6 left-1/2 -translate-x-1/2 z-30 pointer-events-none">
            <div class={classes!("transition-transform", "duration-100", props.is_spinning.then_some("animate-bounce"))}>
                <div class="w-10 h-12 bg-gradient-to-b from-yellow-300 to-yellow-500 rounded-t-full shadow-[0_0_20px_rgba(234,179,8,0.5)] border-2 border-white/30 relative">
                    <div class="absolute top-full left-[-3px] w-0 h-0 border-l-[21px] border-l-transparent border-r-[21px] border-r-transparent border-t-[24px] border-t-yellow-500"></div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RewardListProps {
    pub segments: Vec<Segment>,
}

#[function_component(RewardList)]
pub fn reward_list(props: &RewardListProps) -> Html {
    html! {
        <div class={classes!("mt-16", "w-full", "p-6", "rounded-3xl", styles::GLASS_CARD)}>
            <h3 class={styles::TEXT_SECTION}>{"Available Rewards"}</h3>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                {for props.segments.iter().map(|segment| html! {
                    <div key={segment.id.clone()} class="text-xs flex items-center gap-3 bg-white/5 p-3 rounded-2xl border border-white/5 transition-colors hover:bg-white/10">
                        <div
                            class="w-3 h-3 rounded-full shadow-[0_0_8px_currentColor]"
                            style={format!("background-color: {0}; color: {0};", segment.color)}
                        ></div>
                        <span class="truncate font-semibold">{segment.text.clone()}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
