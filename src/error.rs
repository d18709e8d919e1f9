use thiserror::Error;

/// Errors produced while building, feeding or training a network.
#[derive(Error, Debug)]
pub enum NnError {
    /// Construction or training arguments that can never work.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vector whose length disagrees with the layer it is meant for.
    /// Raised before anything is mutated.
    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Training produced a non-finite loss. Only raised by callers that
    /// opt in through `DivergenceGuard`.
    #[error("training diverged at epoch {epoch} (loss = {loss})")]
    NumericDivergence { epoch: usize, loss: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn config(reason: impl Into<String>) -> NnError {
        NnError::Configuration(reason.into())
    }

    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), NnError> {
        if expected == actual {
            Ok(())
        } else {
            Err(NnError::ShapeMismatch { what, expected, actual })
        }
    }
}

pub type Result<T, E = NnError> = std::result::Result<T, E>;
