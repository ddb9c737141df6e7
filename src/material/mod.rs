//! Implements the capillary pressure and relative permeability laws

mod brooks_corey;
mod eff_to_abs;
mod effective_law;
mod mp_brooks_corey;
mod regularized_brooks_corey;
mod two_phase_law;
mod vertical_equilibrium;
pub use crate::material::brooks_corey::*;
pub use crate::material::eff_to_abs::*;
pub use crate::material::effective_law::*;
pub use crate::material::mp_brooks_corey::*;
pub use crate::material::regularized_brooks_corey::*;
pub use crate::material::two_phase_law::*;
pub use crate::material::vertical_equilibrium::*;
