//! Errors raised while decoding or encoding stored values.

/// Error returned by [`crate::parse_json`] and the serialization step of
/// [`crate::persist`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The stored string is not valid JSON for the expected shape.
    #[error("malformed stored value: {0}")]
    MalformedStoredValue(#[source] serde_json::Error),
    /// The value could not be encoded as JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
}
