//! Implements the base structures for the material laws

mod config;
mod constants;
mod error;
mod parameter_set;
mod parameters;
mod phase;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::error::*;
pub use crate::base::parameter_set::*;
pub use crate::base::parameters::*;
pub use crate::base::phase::*;
pub use crate::base::sample_params::*;

#[cfg(test)]
mod testing;
#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use crate::base::testing::*;
