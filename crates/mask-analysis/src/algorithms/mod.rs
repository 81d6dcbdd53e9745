pub mod extraction;
pub mod geometry;
pub mod preprocessing;

pub use extraction::*;
pub use geometry::{Circle, smallest_enclosing_circle};
pub use preprocessing::*;
