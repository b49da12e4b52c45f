use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use skureg_core::{ProductRecord, RegistrationDraft, SkuIdentity, Sleeve};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct DraftRequest {
    pub code: Option<String>,
    pub color: Option<String>,
    /// Folder name; when present it replaces `code`/`color` and locks them.
    pub folder_token: Option<String>,
    pub sleeve: Option<Sleeve>,
    /// Overrides the description record's title.
    pub title: Option<String>,
}

impl DraftRequest {
    fn identity(&self) -> SkuIdentity {
        match self.folder_token.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(token) => SkuIdentity::from_folder_token(token),
            None => SkuIdentity::new(
                self.code.as_deref().unwrap_or_default(),
                self.color.as_deref().unwrap_or_default(),
            ),
        }
    }
}

/// Loads the record for `code`, degrading to `None` on any store problem.
fn load_record(state: &AppState, code: &str) -> Option<ProductRecord> {
    let store = state.store.as_ref()?;
    if code.is_empty() {
        return None;
    }
    match store.fetch(code) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(code, error = %e, "ignoring unreadable description record");
            None
        }
    }
}

pub(super) async fn create_draft(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<DraftRequest>,
) -> Json<ApiResponse<RegistrationDraft>> {
    let identity = body.identity();
    let mut record = load_record(&state, identity.code());

    if let Some(title) = body.title.as_deref().filter(|t| !t.trim().is_empty()) {
        record.get_or_insert_with(ProductRecord::default).title = Some(title.to_string());
    }

    let draft = RegistrationDraft::prepare(
        &identity,
        record.as_ref(),
        body.sleeve.unwrap_or_default(),
    );
    if let Some(message) = &draft.validation_error {
        tracing::debug!(code = %draft.code, error = %message, "draft has an invalid code");
    }
    Json(ApiResponse::new(draft, req_id.0))
}
