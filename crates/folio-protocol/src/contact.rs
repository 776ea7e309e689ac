use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact form as posted by the site. Every field is optional on the wire so
/// that missing fields surface as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated submission, echoed back to the sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Body of a successful `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReply {
    pub success: bool,
    pub message: String,
    pub data: ContactSubmission,
}
