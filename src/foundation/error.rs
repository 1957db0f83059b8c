/// Convenience result type used across textmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the outer surfaces (job loading, validation, export).
///
/// Evaluation itself never fails; degenerate animation input degrades to a defined
/// fallback instead of producing one of these.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided job, spec, or path data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised while baking a timeline.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`MotionError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
