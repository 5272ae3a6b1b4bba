/// Convenience result type used across the title planner.
pub type TitleResult<T> = Result<T, TitleError>;

/// Top-level error taxonomy used by title planning APIs.
#[derive(thiserror::Error, Debug)]
pub enum TitleError {
    /// Invalid user-provided title configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by text measurement or layer submission.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing title configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TitleError {
    /// Build a [`TitleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TitleError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`TitleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TitleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
