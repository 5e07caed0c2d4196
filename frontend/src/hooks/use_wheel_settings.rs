use shared::wheel_settings::{SegmentError, Settings};
use yew::prelude::*;

use crate::storage::{load_settings, save_settings};

/// Settings state whose every change is written straight back to storage.
#[derive(Clone, PartialEq)]
pub struct WheelSettingsHandle {
    state: UseStateHandle<Settings>,
}

impl WheelSettingsHandle {
    pub fn current(&self) -> &Settings {
        &self.state
    }

    /// Runs `edit` on a copy of the settings and commits it on success.
    /// Edits are refused while the wheel is spinning.
    pub fn apply<T>(
        &self,
        is_spinning: bool,
        edit: impl FnOnce(&mut Settings) -> Result<T, SegmentError>,
    ) -> Result<T, SegmentError> {
        let mut next = (*self.state).clone();
        let out = next.guarded(is_spinning, edit)?;
        self.state.set(next);
        Ok(out)
    }

    pub fn replace(&self, settings: Settings) {
        self.state.set(settings);
    }
}

#[hook]
pub fn use_wheel_settings() -> WheelSettingsHandle {
    let state = use_state(load_settings);

    use_effect_with((*state).clone(), |settings| {
        if let Err(e) = save_settings(settings) {
            log::warn!("Settings not persisted: {}", e);
        }
        || ()
    });

    WheelSettingsHandle { state }
}
