use thiserror::Error;

/// Feil fra fabrikk, konstruktører og innlesing av sensorpakker.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Aktivitetskoden finnes ikke i oppslagstabellen.
    #[error("unknown activity code '{code}' (expected one of RUN, WLK, SWM)")]
    UnknownActivity { code: String },

    /// Feil antall posisjonelle parametre for varianten.
    #[error("activity '{code}' takes {expected} parameters, got {actual}")]
    ParameterCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Verdien har feil type (f.eks. desimaltall for et heltall) eller er utenfor gyldig område.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Inndata er endelige, men regnestykket flyter over (f.eks. subnormal varighet).
    #[error("{activity} {metric} is not finite ({value}): inputs are out of range")]
    NonFiniteMetric {
        activity: &'static str,
        metric: &'static str,
        value: f64,
    },

    /// Ugyldig JSON for sensorpakker (melding inkluderer sti til feltet).
    #[error("malformed sensor package input: {0}")]
    PackageFormat(String),
}

impl WorkoutError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        WorkoutError::InvalidParameter { name, value, reason }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
