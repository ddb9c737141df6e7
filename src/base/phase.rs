use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Defines the number of fluid phases of the two-phase laws
pub const NUM_PHASES: usize = 2;

/// Defines the fluid phases
///
/// Note: The fixed numbering scheme gives the position in a [PhaseArray].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Phase {
    /// Wetting phase (e.g., water); also the pressure reference
    Wetting = 0,

    /// Non-wetting phase (e.g., CO₂ or oil)
    NonWetting = 1,
}

impl Phase {
    /// Holds all phases in index order
    pub const ALL: [Phase; NUM_PHASES] = [Phase::Wetting, Phase::NonWetting];

    /// Returns the position of the phase in a [PhaseArray]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Holds one scalar per phase (e.g., capillary pressures or relative permeabilities)
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PhaseArray {
    values: [f64; NUM_PHASES],
}

impl PhaseArray {
    /// Allocates a new instance with zero values
    pub fn new() -> Self {
        PhaseArray {
            values: [0.0; NUM_PHASES],
        }
    }

    /// Allocates a new instance given the wetting and non-wetting values
    pub fn from_pair(wetting: f64, non_wetting: f64) -> Self {
        PhaseArray {
            values: [wetting, non_wetting],
        }
    }

    /// Returns the wetting-phase value
    pub fn wetting(&self) -> f64 {
        self.values[Phase::Wetting.index()]
    }

    /// Returns the non-wetting-phase value
    pub fn non_wetting(&self) -> f64 {
        self.values[Phase::NonWetting.index()]
    }
}

impl Index<Phase> for PhaseArray {
    type Output = f64;
    fn index(&self, phase: Phase) -> &Self::Output {
        &self.values[phase.index()]
    }
}

impl IndexMut<Phase> for PhaseArray {
    fn index_mut(&mut self, phase: Phase) -> &mut Self::Output {
        &mut self.values[phase.index()]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
