pub mod resize;
pub mod tilt;

pub use resize::wire_viewport_resize;
pub use tilt::wire_tilt_cards;
