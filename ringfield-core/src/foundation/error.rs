/// Convenience result type used across ringfield.
pub type FieldResult<T> = Result<T, FieldError>;

/// Top-level error taxonomy used by the core APIs.
///
/// Rendering itself never fails: every precondition of the field pipeline is
/// checked when shapes, keyframes and scenes are built.
#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    /// Invalid user-provided shape, canvas or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Keyframes that cannot be interpolated into a sequence.
    #[error("interpolation error: {0}")]
    Interpolation(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldError {
    /// Build a [`FieldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FieldError::Interpolation`] value.
    pub fn interpolation(msg: impl Into<String>) -> Self {
        Self::Interpolation(msg.into())
    }

    /// Build a [`FieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
