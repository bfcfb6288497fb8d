use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use lakbay_core::currency::{to_target_currency, validate_rate};

#[derive(Debug, Deserialize)]
pub(super) struct CategoriesQuery {
    /// Exchange rate to convert PHP amounts with; falls back to the
    /// configured default.
    pub rate: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoryItem {
    pub label: String,
    pub keyword: String,
    pub cost_min_php: u32,
    pub cost_max_php: u32,
    pub cost_min_converted: f64,
    pub cost_max_converted: f64,
    pub cost_note: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoriesData {
    pub exchange_rate: f64,
    pub categories: Vec<CategoryItem>,
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CategoriesQuery>,
) -> Result<Json<ApiResponse<CategoriesData>>, ApiError> {
    let rate = params.rate.unwrap_or(state.config.default_exchange_rate);
    let rate = validate_rate(rate)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let categories = state
        .venues
        .categories
        .iter()
        .map(|c| CategoryItem {
            label: c.label.clone(),
            keyword: c.keyword.clone(),
            cost_min_php: c.cost_min,
            cost_max_php: c.cost_max,
            cost_min_converted: to_target_currency(f64::from(c.cost_min), rate),
            cost_max_converted: to_target_currency(f64::from(c.cost_max), rate),
            cost_note: c.cost_note.clone(),
        })
        .collect();

    Ok(Json(ApiResponse {
        data: CategoriesData {
            exchange_rate: rate,
            categories,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
