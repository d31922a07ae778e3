/// Convenience result type used across texconv.
pub type TexconvResult<T> = Result<T, TexconvError>;

/// Error taxonomy for the buffer-facing APIs.
///
/// Format resolution itself never fails: an unsupported source format resolves to
/// [`TargetFormat::Invalid`](crate::TargetFormat::Invalid). These errors come from
/// the layers that touch actual buffers or configuration.
#[derive(thiserror::Error, Debug)]
pub enum TexconvError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel format with no upload path.
    #[error("unsupported format: {0}")]
    Unsupported(String),

    /// Buffer too small or not a whole number of elements.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TexconvError {
    /// Build a [`TexconvError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TexconvError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`TexconvError::Buffer`] value.
    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }

    /// Build a [`TexconvError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
