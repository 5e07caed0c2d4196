use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use shared::constants::{SPIN_DURATION_MS, TICK_CHECK_INTERVAL_MS};
use shared::shared_wheel_game::SpinPlan;
use yew::Callback;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Timer handles for one spin. Dropping this cancels everything still
/// pending, so a reset never leaves a timer behind.
pub struct SpinTimers {
    tick: Option<Interval>,
    frame: FrameSlot,
    _reveal: Timeout,
}

impl SpinTimers {
    /// Starts the three clocks of a spin together: an animation frame loop
    /// reporting the displayed angle, the 50 ms tick check, and the one-shot
    /// reveal after the fixed spin duration.
    pub fn start(
        plan: SpinPlan,
        on_frame: Callback<f64>,
        on_tick: Callback<()>,
        on_reveal: Callback<()>,
    ) -> Self {
        let started_at = js_sys::Date::now();

        let frame: FrameSlot = Rc::new(RefCell::new(None));
        request_frame(frame.clone(), plan, started_at, on_frame);

        let mut tracker = plan.tick_tracker();
        let tick = Interval::new(TICK_CHECK_INTERVAL_MS, move || {
            if tracker.sample(js_sys::Date::now() - started_at) {
                on_tick.emit(());
            }
        });

        let reveal = Timeout::new(SPIN_DURATION_MS, move || on_reveal.emit(()));

        Self {
            tick: Some(tick),
            frame,
            _reveal: reveal,
        }
    }

    /// Cancels the tick check and the frame loop. Safe to call from inside
    /// the reveal callback since the reveal timeout itself is left alone.
    pub fn stop_animation(&mut self) {
        self.tick.take();
        self.frame.borrow_mut().take();
    }
}

impl Drop for SpinTimers {
    fn drop(&mut self) {
        self.stop_animation();
    }
}

fn request_frame(slot: FrameSlot, plan: SpinPlan, started_at: f64, on_frame: Callback<f64>) {
    let next = slot.clone();
    let handle = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - started_at;
        on_frame.emit(plan.rotation_at(elapsed));
        if elapsed < plan.duration_ms() {
            request_frame(next, plan, started_at, on_frame);
        }
    });
    *slot.borrow_mut() = Some(handle);
}
