//! Common JSON response envelope.

use serde::Serialize;
use serde_json::Value;

/// Shape of every JSON response body.
///
/// ```json
/// { "success": true, "message": "Link created", "payload": { "slug": "abc", "link": "https://..." } }
/// ```
///
/// `message` and `payload` are omitted when absent.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Envelope {
    /// Successful body carrying `payload`.
    ///
    /// A payload that fails to serialize is logged and left out.
    pub fn with_payload(payload: impl Serialize) -> Self {
        let payload = match serde_json::to_value(payload) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response payload");
                None
            }
        };

        Self {
            success: true,
            message: None,
            payload,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            payload: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
