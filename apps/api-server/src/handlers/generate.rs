//! Text generation proxy.

use actix_web::{HttpResponse, web};

use quill_shared::dto::{GenerateTextRequest, GenerateTextResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /generate-text
///
/// The prompt comes from `?prompt=` or a JSON body `{"prompt": ...}`; a non-blank
/// query string wins when both are present. Provider failures surface as 502/503.
pub async fn generate_text(
    state: web::Data<AppState>,
    request_id: RequestId,
    query: web::Query<GenerateTextRequest>,
    body: Option<web::Json<GenerateTextRequest>>,
) -> AppResult<HttpResponse> {
    let prompt = non_blank(query.into_inner().prompt)
        .or_else(|| body.and_then(|b| non_blank(b.into_inner().prompt)))
        .ok_or_else(|| AppError::BadRequest("prompt is required".to_string()))?;

    tracing::info!(request_id = %request_id.as_str(), prompt_len = prompt.len(), "POST /generate-text");

    let generated_text = state.completion.generate_text(&prompt).await?;

    Ok(HttpResponse::Ok().json(GenerateTextResponse { generated_text }))
}

fn non_blank(prompt: Option<String>) -> Option<String> {
    prompt.filter(|p| !p.trim().is_empty())
}
