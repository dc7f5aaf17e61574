pub mod color;
pub mod constants;
pub mod error;
pub mod field;
pub mod frame;
pub mod glass;
pub mod node;
pub mod params;
pub mod surface;
pub mod tilt;

pub use color::*;
pub use constants::*;
pub use error::ConfigError;
pub use field::*;
pub use frame::PendingFrame;
pub use node::Node;
pub use params::FieldParams;
pub use surface::*;
pub use tilt::*;
