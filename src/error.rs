use thiserror::Error;

/// Everything that can go wrong while training or evaluating a network.
///
/// Shape and hyperparameter problems are reported before any weights are
/// touched. `NumericOverflow` is the only error raised mid-run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid hyperparameter `{name}`: {reason}")]
    InvalidHyperparameter {
        name: &'static str,
        reason: String,
    },

    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    /// A pre-activation or an updated weight left the finite range.
    #[error("numeric overflow in {stage}")]
    NumericOverflow { stage: &'static str },

    /// Input values that cannot be interpreted, e.g. a non-integer category.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Helper for the common "lengths must agree" check.
pub(crate) fn ensure_len(context: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::ShapeMismatch { context, expected, got });
    }
    Ok(())
}
