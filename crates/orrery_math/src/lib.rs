#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;
