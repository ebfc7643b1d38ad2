//! Error taxonomy for scene mutations, document loading and image decoding.

/// Errors surfaced by the scene model and its boundaries.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// An element index did not refer to an element of the scene.
    #[error("element index {index} out of range (scene has {len} elements)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A patch field was applied to an element kind it does not belong to.
    #[error("field `{field}` does not apply to {kind} elements")]
    TypeMismatch {
        kind: &'static str,
        field: &'static str,
    },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The saved document could not be parsed or serialized.
    #[error("malformed document: {0}")]
    Document(String),

    #[error("invalid data URL: {0}")]
    DataUrl(String),

    /// Image bytes could not be decoded into a bitmap.
    #[error("image decode failed: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::Document(err.to_string())
    }
}
