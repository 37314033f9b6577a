/// Convenience result type used across wavegrad.
pub type WavegradResult<T> = Result<T, WavegradError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum WavegradError {
    /// Invalid user-provided configuration or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a drawing surface while resizing, presenting or revealing.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavegradError {
    /// Build a [`WavegradError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavegradError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`WavegradError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
