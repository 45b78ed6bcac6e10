use serde::{Deserialize, Serialize};

/// Body of `POST /ask_gemini/`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

/// Successful generation response.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}
