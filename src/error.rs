//! Error types

/// Error raised by weighted draws, samplers, and parameter validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    #[error("sampler {sampler} is not ready")]
    NotReady { sampler: String },
    #[error("total weight is zero")]
    ZeroTotalWeight,
    #[error("invalid weight: {0}")]
    InvalidWeight(f64),
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl SamplingError {
    pub fn not_ready(sampler: impl Into<String>) -> Self {
        SamplingError::NotReady {
            sampler: sampler.into(),
        }
    }
}

/// Error raised while loading or validating a sampling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] SamplingError),
    #[error("goal badness is required for this training session")]
    MissingGoalBadness,
}

pub type SamplingResult<T> = Result<T, SamplingError>;
