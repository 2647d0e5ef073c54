pub mod color;
pub mod math;

pub use color::{hex_to_rgba255_tuple, rgba255_tuple_to_hex};
pub use math::clamp;
