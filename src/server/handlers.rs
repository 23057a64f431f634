use super::types::{GenerateRequest, GenerateResponse, HealthResponse};
use crate::{Error, relay::PromptRelay};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<PromptRelay>,
}

type GenerateResult = Result<Json<GenerateResponse>, (StatusCode, Json<GenerateResponse>)>;

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> GenerateResult {
    let Json(request) = payload.map_err(rejection_response)?;
    let task_type = request.task_type.unwrap_or_default();
    let text = request.text.unwrap_or_default();
    info!(
        "Received generate request of type '{}' ({} bytes)",
        task_type,
        text.len()
    );

    match state.relay.relay(&task_type, &text).await {
        Ok(result) => Ok(Json(GenerateResponse::ok(result))),
        Err(e) => {
            let status = status_for(&e);
            warn!("Generate request failed with {}: {}", status, e);
            Err((status, Json(GenerateResponse::failed(e.to_string()))))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Bodies the extractor refuses still get the `{success, error}` shape.
/// Unparseable or mistyped JSON is a bad request; content-type and body
/// read failures keep the framework's status.
fn rejection_response(rejection: JsonRejection) -> (StatusCode, Json<GenerateResponse>) {
    let status = match &rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            StatusCode::BAD_REQUEST
        }
        other => other.status(),
    };
    warn!("Rejected generate request with {}: {}", status, rejection);
    (status, Json(GenerateResponse::failed(rejection.body_text())))
}

fn status_for(error: &Error) -> StatusCode {
    if error.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
