// Error taxonomy for the neighbour collection pipeline.
//
// Every failure here is fatal — there is no retryable mode. The binary
// surfaces these through anyhow with a non-zero exit code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeighboursError {
    /// The model file could not be read or parsed: bad path, malformed
    /// header, truncated vectors, or an unsupported format combination.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The vocabulary handed to the extractor is unusable: empty, or
    /// vectors of mismatched dimensionality.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// A caller-supplied parameter is out of range (e.g. n = 0).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O failure on the output sink (disk full, permission denied, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NeighboursError>;
