use serde::{Deserialize, Serialize};

/// Discriminated result of a server action, rendered into a toast by the UI.
///
/// `ok == false` is a business-level failure (validation, duplicates); the
/// HTTP layer still answers 200 so the message reaches the notification
/// surface instead of an error boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    pub ok: bool,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}
