use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use skureg_core::{
    category_path, parse_sku, product_group, split_folder_token, FolderToken, ParsedSku,
    ProductGroup, Sleeve,
};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse};

#[derive(Debug, Deserialize)]
pub(super) struct ParseRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct SplitRequest {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryQuery {
    pub sleeve: Option<Sleeve>,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoryItem {
    item: String,
    sleeve: Sleeve,
    /// Empty when the item code has no known category.
    category_path: String,
    product_group: ProductGroup,
}

pub(super) async fn parse(
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ParseRequest>,
) -> Result<Json<ApiResponse<ParsedSku>>, ApiError> {
    let parsed = parse_sku(&body.code)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;
    Ok(Json(ApiResponse::new(parsed, req_id.0)))
}

pub(super) async fn split(
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SplitRequest>,
) -> Json<ApiResponse<FolderToken>> {
    Json(ApiResponse::new(split_folder_token(&body.token), req_id.0))
}

pub(super) async fn category(
    Extension(req_id): Extension<RequestId>,
    Path(item): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Json<ApiResponse<CategoryItem>> {
    let sleeve = query.sleeve.unwrap_or_default();
    let data = CategoryItem {
        category_path: category_path(&item, sleeve).unwrap_or_default().to_string(),
        product_group: product_group(&item),
        item,
        sleeve,
    };
    Json(ApiResponse::new(data, req_id.0))
}
