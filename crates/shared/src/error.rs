use serde::{Deserialize, Serialize};

/// Body returned by the backend alongside a non-success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Returns the server message, or `fallback` when the body carried none.
    pub fn message_or(self, fallback: &str) -> String {
        self.error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
