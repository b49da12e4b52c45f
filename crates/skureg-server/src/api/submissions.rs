use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use skureg_core::{SubmissionError, SubmissionPayload};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SubmissionRequest {
    pub category_path: Option<String>,
    pub product_name: Option<String>,
    pub sale_price: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct SubmissionReceipt {
    accepted: bool,
    payload: SubmissionPayload,
}

pub(super) async fn submit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SubmissionRequest>,
) -> Result<Json<ApiResponse<SubmissionReceipt>>, ApiError> {
    let payload = SubmissionPayload::new(
        body.category_path.as_deref(),
        body.product_name.as_deref(),
        body.sale_price,
    )
    .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    state.sink.submit(&payload).map_err(|e| {
        tracing::error!(error = %e, "submission sink failed");
        let code = match e {
            SubmissionError::Sink(_) => "sink_error",
            SubmissionError::Empty => "validation_error",
        };
        ApiError::new(req_id.0.clone(), code, e.to_string())
    })?;

    Ok(Json(ApiResponse::new(
        SubmissionReceipt {
            accepted: true,
            payload,
        },
        req_id.0,
    )))
}
