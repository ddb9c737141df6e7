use super::{LawResult, MaterialParams, ParamBrooksCorey, ParamRegularization, ParamVerticalEquilibrium};
use crate::material::ModelTwoPhaseLaw;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Defines the variant of the two-phase law used by a material region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum LawKind {
    /// Raw Brooks-Corey law (Sw taken as the effective saturation)
    Raw,

    /// Regularized Brooks-Corey law (Sw taken as the effective saturation)
    Regularized,

    /// Regularized Brooks-Corey law with effective-to-absolute saturation conversion
    EffToAbs,

    /// Vertical-equilibrium upscaled law
    VerticalEquilibrium,
}

/// Holds the configuration of a material region
///
/// # Example of JSON input
///
/// ```json
/// {
///   "kind": "EffToAbs",
///   "brooks_corey": { "entry_pressure": 1000.0, "lambda": 2.0, "swr": 0.2, "snr": 0.1 },
///   "regularization": { "se_low": 0.01, "se_high": 0.99 }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct MaterialConfig {
    /// Variant of the law
    pub kind: LawKind,

    /// Brooks-Corey parameters
    pub brooks_corey: ParamBrooksCorey,

    /// Regularization thresholds (default thresholds if None)
    #[serde(default)]
    pub regularization: Option<ParamRegularization>,

    /// Vertical-equilibrium parameters (required by LawKind::VerticalEquilibrium)
    #[serde(default)]
    pub vertical_equilibrium: Option<ParamVerticalEquilibrium>,
}

impl MaterialConfig {
    /// Allocates a new instance with default regularization and no VE parameters
    pub fn new(kind: LawKind, brooks_corey: ParamBrooksCorey) -> Self {
        MaterialConfig {
            kind,
            brooks_corey,
            regularization: None,
            vertical_equilibrium: None,
        }
    }

    /// Parses a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|e| {
            log::error!("{}", e);
            "cannot parse material configuration"
        })
    }

    /// Reads a JSON file containing the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let data = serde_json::from_reader(reader).map_err(|e| {
            log::error!("{}: {}", path.display(), e);
            "cannot parse material configuration"
        })?;
        Ok(data)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Returns the validated parameters
    pub fn params(&self) -> LawResult<Arc<MaterialParams>> {
        let regularization = self.regularization.unwrap_or_default();
        let params = MaterialParams::new(
            &self.brooks_corey,
            &regularization,
            self.vertical_equilibrium.as_ref(),
        )?;
        Ok(Arc::new(params))
    }

    /// Builds the validated parameters and the selected law
    pub fn build(&self) -> LawResult<(Arc<MaterialParams>, ModelTwoPhaseLaw)> {
        let params = self.params()?;
        let model = ModelTwoPhaseLaw::new(self.kind, params.clone())?;
        Ok((params, model))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
