//! Contains some utility functions and structures

mod cubic_hermite;
mod curve_data;

pub use cubic_hermite::*;
pub use curve_data::*;
