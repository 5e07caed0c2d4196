pub mod use_escape_key;
pub mod use_wheel_settings;

pub use use_escape_key::use_escape_key;
pub use use_wheel_settings::*;
