use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::validation::extract_request;
use crate::errors::{AppError, TEXT_REQUIRED};
use crate::state::AppState;

/// POST /api/analyze
///
/// A body that is not a JSON object, or lacks a truthy `text`, is a 400 and never reaches
/// the classifier. A body that cannot be read at all (over the size limit, broken stream)
/// keeps axum's rejection status. The classifier's success body is returned unchanged.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection @ JsonRejection::BytesRejection(_)) => {
            warn!("Failed to read analyze body: {rejection}");
            return Err(AppError::Body(rejection));
        }
        Err(rejection) => {
            warn!("Unreadable analyze body: {rejection}");
            Value::Null
        }
    };

    let request = extract_request(&body).ok_or_else(|| {
        warn!("Analyze request without usable text field");
        AppError::Validation(TEXT_REQUIRED.to_string())
    })?;

    let upstream = state
        .classifier
        .analyze(&request)
        .await
        .inspect_err(|e| error!("Error calling classification service: {e}"))?;
    info!("Relaying classification ({} bytes)", upstream.len());

    Ok(([(header::CONTENT_TYPE, "application/json")], upstream).into_response())
}
