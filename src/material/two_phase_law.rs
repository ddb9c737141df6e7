use super::{BrooksCorey, BrooksCoreyVe, EffToAbs, EffectiveLaw, RegularizedBrooksCorey};
use crate::base::{LawKind, LawResult, MaterialParams, Phase, PhaseArray};
use crate::fluid::{capillary_pressure_of, FluidState};
use rayon::prelude::*;
use std::sync::Arc;

/// Specifies the essential functions for two-phase material laws
///
/// The wetting phase is the pressure reference; thus its capillary pressure is zero.
/// Relative permeabilities are not guaranteed to lie in [0, 1].
pub trait TwoPhaseLaw: Send + Sync {
    /// Calculates the capillary pressures of both phases
    fn capillary_pressures(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()>;

    /// Calculates the saturations from the phase pressures (inverse mapping)
    fn saturations(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()>;

    /// Calculates the relative permeabilities of both phases
    fn relative_permeabilities(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()>;
}

/// Holds the actual two-phase law implementation
pub struct ModelTwoPhaseLaw {
    /// Holds the actual law implementation
    pub actual: Box<dyn TwoPhaseLaw>,
}

impl ModelTwoPhaseLaw {
    /// Allocates a new instance
    pub fn new(kind: LawKind, params: Arc<MaterialParams>) -> LawResult<Self> {
        let actual: Box<dyn TwoPhaseLaw> = match kind {
            // Brooks-Corey law without regularization
            LawKind::Raw => Box::new(BrooksCorey::new(params)),

            // Regularized Brooks-Corey law
            LawKind::Regularized => Box::new(RegularizedBrooksCorey::new(params)?),

            // Regularized law in terms of absolute saturations
            LawKind::EffToAbs => {
                let law = RegularizedBrooksCorey::new(params.clone())?;
                Box::new(EffToAbs::new(params, law))
            }

            // Vertical-equilibrium law
            LawKind::VerticalEquilibrium => Box::new(BrooksCoreyVe::new(params)?),
        };
        log::debug!("two-phase law allocated: {:?}", kind);
        Ok(ModelTwoPhaseLaw { actual })
    }
}

/// Evaluates the relative permeabilities of many fluid states in parallel
pub fn evaluate_relative_permeabilities_par<S>(law: &dyn TwoPhaseLaw, states: &[S]) -> LawResult<Vec<PhaseArray>>
where
    S: FluidState,
{
    states
        .par_iter()
        .map(|fs| {
            let mut values = PhaseArray::new();
            law.relative_permeabilities(&mut values, fs)?;
            Ok(values)
        })
        .collect()
}

/// Evaluates the capillary pressures of many fluid states in parallel
pub fn evaluate_capillary_pressures_par<S>(law: &dyn TwoPhaseLaw, states: &[S]) -> LawResult<Vec<PhaseArray>>
where
    S: FluidState,
{
    states
        .par_iter()
        .map(|fs| {
            let mut values = PhaseArray::new();
            law.capillary_pressures(&mut values, fs)?;
            Ok(values)
        })
        .collect()
}

// The effective laws read the wetting saturation as the effective saturation

fn effective_capillary_pressures<L: EffectiveLaw>(
    law: &L,
    values: &mut PhaseArray,
    fs: &dyn FluidState,
) -> LawResult<()> {
    values[Phase::Wetting] = 0.0;
    values[Phase::NonWetting] = law.capillary_pressure(fs.saturation(Phase::Wetting))?;
    Ok(())
}

fn effective_saturations<L: EffectiveLaw>(law: &L, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
    let sw = law.saturation(capillary_pressure_of(fs))?;
    values[Phase::Wetting] = sw;
    values[Phase::NonWetting] = 1.0 - sw;
    Ok(())
}

fn effective_relative_permeabilities<L: EffectiveLaw>(
    law: &L,
    values: &mut PhaseArray,
    fs: &dyn FluidState,
) -> LawResult<()> {
    let se = fs.saturation(Phase::Wetting);
    values[Phase::Wetting] = law.krw(se)?;
    values[Phase::NonWetting] = law.krn(se)?;
    Ok(())
}

impl TwoPhaseLaw for BrooksCorey {
    fn capillary_pressures(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        effective_capillary_pressures(self, values, fs)
    }
    fn saturations(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        effective_saturations(self, values, fs)
    }
    fn relative_permeabilities(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        effective_relative_permeabilities(self, values, fs)
    }
}

impl TwoPhaseLaw for RegularizedBrooksCorey {
    fn capillary_pressures(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        effective_capillary_pressures(self, values, fs)
    }
    fn saturations(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        effective_saturations(self, values, fs)
    }
    fn relative_permeabilities(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        effective_relative_permeabilities(self, values, fs)
    }
}

impl<L: EffectiveLaw> TwoPhaseLaw for EffToAbs<L> {
    fn capillary_pressures(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        values[Phase::Wetting] = 0.0;
        values[Phase::NonWetting] = self.capillary_pressure(fs.saturation(Phase::Wetting))?;
        Ok(())
    }
    fn saturations(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        let sw = self.saturation(capillary_pressure_of(fs))?;
        values[Phase::Wetting] = sw;
        values[Phase::NonWetting] = 1.0 - sw;
        Ok(())
    }
    fn relative_permeabilities(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        let sw = fs.saturation(Phase::Wetting);
        values[Phase::Wetting] = self.krw(sw)?;
        values[Phase::NonWetting] = self.krn(sw)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
