use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai/process`: an action name and an opaque payload that
/// are handed to the external AI service script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Successful bridge reply. `result` is the parsed JSON stdout of the script,
/// or its raw text when stdout was not JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReply {
    pub success: bool,
    pub result: serde_json::Value,
}
