#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bound;
pub mod error;
pub mod line;
pub mod plane;
pub mod ray;

pub use bound::{Bound2, Bound3};
pub use error::{GeometryError, Result};
pub use line::Line;
pub use plane::Plane;
pub use ray::{Ray2, Ray3};
