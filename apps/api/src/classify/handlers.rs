use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::classify::classifier::classify_description;
use crate::classify::models::GroupedResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub detected_languages: Vec<String>,
    pub group_to_keyword_dict: GroupedResult,
    pub salary: Vec<String>,
}

/// POST /api/v1/classify
///
/// The extractor rejection is folded into our own 400 so a missing or
/// unreadable body never surfaces as a framework 422.
pub async fn handle_classify(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation("No data provided".to_string()))?;

    let description = request.description.unwrap_or_default();
    if description.is_empty() {
        return Err(AppError::Validation(
            "No job description provided".to_string(),
        ));
    }

    let classification =
        classify_description(&description, &state.lexicon, state.identifier.as_ref()).await?;

    Ok(Json(ClassifyResponse {
        detected_languages: classification.detected_languages,
        group_to_keyword_dict: classification.group_to_keyword_dict,
        salary: classification.salary,
    }))
}
