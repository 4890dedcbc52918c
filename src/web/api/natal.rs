use axum::{body::Bytes, extract::State, Json};
use utoipa::ToSchema;

use crate::chart::{self, ChartResponse};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

/// Request body accepted by `POST /natal`.
///
/// Numeric fields also accept numeric strings; fractional values are
/// truncated for the integer fields.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct NatalRequest {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    #[schema(default = 12)]
    pub hour: Option<i64>,
    #[schema(default = 0)]
    pub minute: Option<i64>,
    #[schema(default = 0)]
    pub second: Option<i64>,
    /// IANA zone name.
    #[schema(default = "Europe/Belgrade")]
    pub timezone: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Only the first character is used, case-insensitively.
    #[schema(default = "P")]
    pub house_system: Option<String>,
}

#[utoipa::path(
    post,
    path = "/natal",
    tag = "natal",
    request_body = NatalRequest,
    responses(
        (status = 200, description = "Computed natal chart", body = ChartResponse),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 422, description = "Unsupported house system", body = ErrorResponse),
        (status = 500, description = "Chart computation failed", body = ErrorResponse)
    )
)]
pub async fn natal(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ChartResponse>> {
    let chart = chart::chart_from_json(&body, state.ephemeris.as_ref())?;
    Ok(Json(chart))
}
