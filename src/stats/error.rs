use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// A test partition has zero observations. The data loaded from disk
    /// never hits this, but synthetic or filtered inputs can.
    #[error("group '{group}' has no observations")]
    EmptyGroup { group: String },

    #[error("not enough observations: needed {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("sample lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("degenerate test input: {0}")]
    Degenerate(String),
}
