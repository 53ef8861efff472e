use crate::fp::streaming::ProcessingPhase;

/// Errors raised when the caller breaks the mining contract.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must not be negative, got {0}")]
    NegativeMinSupport(i64),

    #[error(
        "transaction {index} has invalid weight {weight} for item `{item}`: \
         weights must be finite and positive"
    )]
    InvalidWeight { index: usize, item: String, weight: f64 },

    #[error("cannot {operation} in phase {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: ProcessingPhase,
    },

    #[error("invalid miner configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type MiningResult<T> = Result<T, MiningError>;
