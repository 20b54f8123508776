use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::{middleware::ApiResult, AppState},
    models::{CreateHolidayRequest, Holiday, HolidayListResponse, UpdateHolidayRequest},
};

#[derive(Debug, Deserialize)]
pub struct ListHolidaysQuery {
    pub year: i32,
    pub country: Option<String>,
}

// POST /api/organizations/:id/holidays - Create a holiday
pub async fn create_holiday(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Json(req): Json<CreateHolidayRequest>,
) -> ApiResult<(StatusCode, Json<Holiday>)> {
    let holiday = state
        .holiday_service
        .create_holiday(&organization_id, req.name, req.date, req.country_code)
        .await?;

    Ok((StatusCode::CREATED, Json(holiday)))
}

// GET /api/organizations/:id/holidays?year=&country= - Holidays for a year and country
pub async fn list_holidays(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Query(query): Query<ListHolidaysQuery>,
) -> ApiResult<Json<HolidayListResponse>> {
    let holidays = state
        .holiday_service
        .list_holidays(&organization_id, query.year, query.country.as_deref())
        .await?;

    let count = holidays.len() as i64;
    Ok(Json(HolidayListResponse { holidays, count }))
}

// GET /api/holidays/:id - Get holiday by ID
pub async fn get_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<String>,
) -> ApiResult<Json<Holiday>> {
    let holiday = state.holiday_service.get_holiday(&holiday_id).await?;

    Ok(Json(holiday))
}

// PATCH /api/holidays/:id - Update a holiday
pub async fn update_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<String>,
    Json(req): Json<UpdateHolidayRequest>,
) -> ApiResult<Json<Holiday>> {
    let holiday = state
        .holiday_service
        .update_holiday(
            &holiday_id,
            req.name.as_deref(),
            req.date.as_deref(),
            req.country_code.as_deref(),
        )
        .await?;

    Ok(Json(holiday))
}

// DELETE /api/holidays/:id - Delete a holiday
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.holiday_service.delete_holiday(&holiday_id).await?;

    tracing::info!("Holiday deleted: id={}", holiday_id);
    Ok(StatusCode::NO_CONTENT)
}
