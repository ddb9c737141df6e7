//! Defines the fluid-state collaborator consumed by the material laws

mod fluid_state;
pub use crate::fluid::fluid_state::*;
