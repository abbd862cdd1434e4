#![warn(clippy::pedantic)]

pub use orrery_geometry as geometry;
pub use orrery_math as math;
