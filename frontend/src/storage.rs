use std::fmt;

use shared::constants::STORAGE_KEY;
use shared::wheel_settings::Settings;
use web_sys::{window, Storage};

#[derive(Debug)]
pub enum StorageError {
    Unavailable,
    Serialize(serde_json::Error),
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Local storage is not available"),
            Self::Serialize(e) => write!(f, "Failed to serialize settings: {}", e),
            Self::Write(e) => write!(f, "Failed to write settings: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err)
    }
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Reads the persisted wheel, falling back to the defaults when nothing
/// usable is stored.
pub fn load_settings() -> Settings {
    let raw = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Settings::load_or_default(raw.as_deref())
}

/// Overwrites the persisted copy with `settings`.
pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    let storage = local_storage().ok_or(StorageError::Unavailable)?;
    let json = settings.to_json()?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| StorageError::Write(format!("{:?}", e)))
}
