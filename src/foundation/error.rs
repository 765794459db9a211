/// Convenience result type used across letterfield.
pub type FieldResult<T> = Result<T, FieldError>;

/// Top-level error taxonomy used by field APIs.
///
/// The numeric core (color, geometry, easing, letter lookup) is total and never produces one of
/// these; errors only surface at contract boundaries.
#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    /// Invalid user-provided configuration or shape pairing.
    #[error("validation error: {0}")]
    Validation(String),

    /// An instance descriptor violates the attribute/uniform contract.
    #[error("descriptor error: {0}")]
    Descriptor(String),

    /// The renderer boundary rejected an operation.
    #[error("renderer error: {0}")]
    Renderer(String),

    /// Errors when serializing or deserializing configuration or descriptors.
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

    /// Build a [`FieldError::Descriptor`] value.
    pub fn descriptor(msg: impl Into<String>) -> Self {
        Self::Descriptor(msg.into())
    }

    /// Build a [`FieldError::Renderer`] value.
    pub fn renderer(msg: impl Into<String>) -> Self {
        Self::Renderer(msg.into())
    }

    /// Build a [`FieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
