//! Makes available common structures needed to evaluate the material laws
//!
//! You may write `use pmlaw::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{LawError, LawKind, LawResult, MaterialConfig, MaterialParams, ParameterSet, Phase, PhaseArray};
pub use crate::base::{ParamBrooksCorey, ParamRegularization, ParamVerticalEquilibrium, DEFAULT_OUT_DIR};
pub use crate::fluid::{FluidState, SimpleFluidState};
pub use crate::material::{BrooksCorey, BrooksCoreyVe, EffToAbs, EffectiveLaw, ModelTwoPhaseLaw};
pub use crate::material::{MpBrooksCorey, RegularizedBrooksCorey, TwoPhaseLaw};
pub use crate::StrError;
