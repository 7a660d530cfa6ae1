//! Controls used by the bottom strip and the gallery panel.

pub mod button;
pub mod checkbox;
pub mod palette;
pub mod slider;
pub mod stepper;

pub use button::Button;
pub use checkbox::Checkbox;
pub use palette::Palette;
pub use slider::Slider;
pub use stepper::Stepper;
