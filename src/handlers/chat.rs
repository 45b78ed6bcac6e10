use axum::{Json, extract::State};

use crate::{
    error::AppError,
    models::{AskRequest, AskResponse},
    services::prompt,
    services::providers::TextProvider,
    startup::AppState,
};

/// Send a structured prompt to Gemini and return the generated text.
///
/// The prompt is trimmed of outer whitespace, rendered verbatim into the
/// guideline template, and forwarded to the provider as sole input. The
/// generated text is returned untransformed.
#[axum::debug_handler]
pub async fn ask_gemini(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let user_query = req.prompt.trim();
    if user_query.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Prompt cannot be empty."
        )));
    }

    let structured_prompt = prompt::render(user_query);

    let text = state.text_provider.generate(&structured_prompt).await?;

    Ok(Json(AskResponse { response: text }))
}
