/// Convenience result type used across pixmotion.
pub type PixmotionResult<T> = Result<T, PixmotionError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Out-of-range frame indices are never errors: every widget defines a frozen state for
/// frames at or beyond its frame count.
#[derive(thiserror::Error, Debug)]
pub enum PixmotionError {
    /// Invalid curve, percentage, number, color or enum string.
    #[error("parse error: {0}")]
    Parse(String),

    /// Structurally invalid widget definition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while creating surfaces or rendering frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixmotionError {
    /// Build a [`PixmotionError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`PixmotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixmotionError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PixmotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PixmotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
