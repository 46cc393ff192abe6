use serde::{Deserialize, Serialize};

/// The uniform `{error, msg, data}` envelope.
///
/// The facts service answers every call in this shape, and the backend uses
/// the same shape for its own successful responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub error: bool,
    pub msg: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Build a successful envelope.
    pub fn success(msg: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            msg: msg.into(),
            data,
        }
    }
}

/// Envelope as received, before `data` is checked against the expected shape.
///
/// On failure the facts service sends `data: []` or omits it entirely, so
/// the payload is kept untyped until `error` has been inspected.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
