use thiserror::Error;

/// Failures while turning raw front-end input into [`crate::RangeOptions`].
///
/// The engines themselves never fail; these only surface at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("unknown construction style `{0}`")]
    UnknownStyle(String),
    #[error("unknown top material `{0}`")]
    UnknownTop(String),
    #[error("unknown burner kind `{0}`")]
    UnknownKind(String),
    #[error("unsupported burner diameter {0}\" (expected one of 13, 15, 17, 19, 21)")]
    UnsupportedDiameter(String),
    #[error("burner slot {index} out of range (have {count})")]
    SlotOutOfRange { index: usize, count: usize },
    #[error("invalid options JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for OptionsError {
    fn from(e: serde_json::Error) -> Self {
        OptionsError::Json(e.to_string())
    }
}
