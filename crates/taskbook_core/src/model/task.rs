use serde::{Deserialize, Serialize};

/// A single to-do entry as it appears in the store file.
///
/// `completed_at` is present exactly when `done` is true; the store
/// operations maintain that pairing and `load` rejects records that
/// break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    pub done: bool,
    #[serde(rename = "created_date")]
    pub created_at: String,
    #[serde(rename = "completed_date", default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}
