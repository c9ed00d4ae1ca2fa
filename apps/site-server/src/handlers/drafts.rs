//! AI draft generation.

use actix_web::{HttpResponse, web};

use fourrap_core::domain::{Category, GeneratorParams};
use fourrap_infra::ingest::{draft_file_name, render_document};
use fourrap_shared::ApiResponse;
use fourrap_shared::dto::{DraftResponse, GenerateDraftRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/drafts
pub async fn generate(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<GenerateDraftRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let topic = req.topic.trim();
    if topic.is_empty() {
        return Err(AppError::BadRequest("Topic must not be empty".to_string()));
    }
    let category = req
        .category
        .parse::<Category>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let params = GeneratorParams {
        topic: topic.to_string(),
        category,
        tone: req.tone.trim().to_string(),
    };

    tracing::info!(
        request_id = %request_id.as_str(),
        topic = %params.topic,
        category = %params.category,
        "Generating draft"
    );

    let draft = state.generator.generate(&params).await?;
    let markdown =
        render_document(&draft).map_err(|e| AppError::Internal(format!("draft render: {}", e)))?;
    let file_name = draft_file_name(&draft);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        DraftResponse {
            draft,
            file_name,
            markdown,
        },
        "Draft generated. Save it into the content directory to publish.",
    )))
}
