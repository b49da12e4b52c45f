mod drafts;
mod records;
mod sku;
mod submissions;

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use skureg_core::{RecordStore, SubmissionSink};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

pub type SharedStore = Arc<dyn RecordStore + Send + Sync>;
pub type SharedSink = Arc<dyn SubmissionSink + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no collector output folder was found at startup.
    pub store: Option<SharedStore>,
    pub sink: SharedSink,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    records: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            "sink_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_store_error(request_id: String, error: &skureg_core::StoreError) -> ApiError {
    match error {
        skureg_core::StoreError::EmptyCode => {
            ApiError::new(request_id, "bad_request", error.to_string())
        }
        _ => {
            tracing::error!(error = %error, "description record lookup failed");
            ApiError::new(request_id, "internal_error", "description record lookup failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/sku/parse", post(sku::parse))
        .route("/api/v1/sku/split", post(sku::split))
        .route("/api/v1/categories/{item}", get(sku::category))
        .route("/api/v1/drafts", post(drafts::create_draft))
        .route("/api/v1/records", get(records::list_records))
        .route("/api/v1/records/{code}", get(records::get_record))
        .route("/api/v1/submissions", post(submissions::submit))
}

pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = api_router();
    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let records = if state.store.is_some() {
        "ok"
    } else {
        "unconfigured"
    };
    Json(ApiResponse::new(
        HealthData {
            status: "ok",
            records,
        },
        req_id.0,
    ))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
