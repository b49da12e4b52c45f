use axum::{
    extract::{Path, State},
    Extension, Json,
};
use skureg_core::ProductRecord;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, SharedStore};

fn require_store(state: &AppState, request_id: &str) -> Result<SharedStore, ApiError> {
    state.store.clone().ok_or_else(|| {
        ApiError::new(
            request_id,
            "unavailable",
            "description record folder is not configured",
        )
    })
}

pub(super) async fn list_records(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let store = require_store(&state, &req_id.0)?;
    let codes = store
        .list_codes()
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;
    Ok(Json(ApiResponse::new(codes, req_id.0)))
}

pub(super) async fn get_record(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ProductRecord>>, ApiError> {
    let store = require_store(&state, &req_id.0)?;
    let record = store
        .fetch(&code)
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("no description record for {code}"),
            )
        })?;
    Ok(Json(ApiResponse::new(record, req_id.0)))
}
