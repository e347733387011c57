//! Error types for style serialization.

use thiserror::Error;

/// Error during style value encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Value kind with no literal representation (e.g. a function reference).
    ///
    /// This is fatal for the whole encode call: a malformed literal cannot
    /// be safely embedded in generated code, so there is no partial output.
    #[error("un-serializable value: {0}")]
    Unserializable(&'static str),

    /// JSON boundary was handed something other than an object.
    #[error("expected JSON object, got {0}")]
    NotObject(&'static str),
}
