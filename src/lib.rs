//! Pmlaw - Porous media material laws
//!
//! This crate implements closed-form capillary pressure and relative permeability laws
//! for two-phase flow in porous media. The Brooks-Corey relations are provided in their
//! raw form, in a regularized form with bounded slopes near the saturation endpoints,
//! wrapped by an adapter that converts absolute saturations into effective saturations,
//! and as a vertical-equilibrium (VE) upscaled variant driven by a sub-grid interface height.
//!
//! All evaluations are pure functions of an immutable [base::MaterialParams] snapshot and
//! of the state supplied by a [fluid::FluidState] implementation.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fluid;
pub mod material;
pub mod prelude;
pub mod util;
