pub mod constants;
pub mod shared_wheel_game;
pub mod tones;
pub mod wheel_geometry;
pub mod wheel_settings;
