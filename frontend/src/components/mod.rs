pub mod gradient_background;
pub mod icons;

pub use gradient_background::GradientBackground;
