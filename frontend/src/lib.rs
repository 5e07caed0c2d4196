pub mod audio;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;

use crate::components::GradientBackground;
use crate::pages::lucky_spin::LuckySpin;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <GradientBackground>
                <LuckySpin />
            </GradientBackground>
        </div>
    }
}
