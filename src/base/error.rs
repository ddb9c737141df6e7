use crate::StrError;
use thiserror::Error;

/// Defines the result type of the material laws
pub type LawResult<T> = Result<T, LawError>;

/// Defines the errors returned by the parameter sets and material laws
///
/// Each variant carries a static message such as
/// "lambda parameter for the Brooks-Corey model is invalid".
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LawError {
    /// A parameter set was read before being finalized
    #[error("parameters are not finalized: {0}")]
    NotFinalized(StrError),

    /// A coefficient lies outside its valid domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(StrError),

    /// The requested branch is not modeled for the given phase or state
    #[error("domain error: {0}")]
    Domain(StrError),

    /// An evaluation reached an unregularized boundary of the raw law
    #[error("numerical singularity: {0}")]
    NumericalSingularity(StrError),
}

impl LawError {
    /// Returns the static message carried by the error
    pub fn message(&self) -> StrError {
        match *self {
            LawError::NotFinalized(msg) => msg,
            LawError::InvalidParameter(msg) => msg,
            LawError::Domain(msg) => msg,
            LawError::NumericalSingularity(msg) => msg,
        }
    }
}

impl From<LawError> for StrError {
    fn from(error: LawError) -> Self {
        error.message()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LawError;
    use crate::StrError;

    #[test]
    fn display_and_message_work() {
        let err = LawError::InvalidParameter("lambda parameter for the Brooks-Corey model is invalid");
        assert_eq!(
            format!("{}", err),
            "invalid parameter: lambda parameter for the Brooks-Corey model is invalid"
        );
        assert_eq!(err.message(), "lambda parameter for the Brooks-Corey model is invalid");
        let err = LawError::NotFinalized("krn_end_point");
        assert_eq!(format!("{}", err), "parameters are not finalized: krn_end_point");
    }

    #[test]
    fn conversion_to_str_error_works() {
        fn inner() -> Result<f64, LawError> {
            Err(LawError::Domain("no fluid"))
        }
        fn fails() -> Result<(), StrError> {
            inner()?;
            Ok(())
        }
        assert_eq!(fails().err(), Some("no fluid"));
    }
}
