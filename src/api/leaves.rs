use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::{middleware::{ApiError, ApiResult}, AppState},
    models::{
        CreateLeaveRequest, LeaveListResponse, LeaveRequest, LeaveStatus, MonthCalendarResponse,
        UpdateLeaveStatusRequest,
    },
};

#[derive(Debug, Deserialize)]
pub struct ListLeavesQuery {
    pub status: Option<String>,
    pub employee_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

// POST /api/leaves - Submit a leave request
pub async fn create_leave(
    State(state): State<AppState>,
    Json(req): Json<CreateLeaveRequest>,
) -> ApiResult<(StatusCode, Json<LeaveRequest>)> {
    let leave = state.leave_service.create_request(req).await?;

    Ok((StatusCode::CREATED, Json(leave)))
}

// GET /api/organizations/:id/leaves - List leave requests, newest first
pub async fn list_leaves(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Query(query): Query<ListLeavesQuery>,
) -> ApiResult<Json<LeaveListResponse>> {
    let status_filter = match query.status.as_deref() {
        Some(value) => Some(
            value
                .parse::<LeaveStatus>()
                .map_err(ApiError::BadRequest)?,
        ),
        None => None,
    };
    let limit = query.limit.unwrap_or(50).clamp(1, 200);
    let offset = query.offset.unwrap_or(0).max(0);

    let (leaves, count) = state
        .leave_service
        .list_requests(
            &organization_id,
            status_filter,
            query.employee_id.as_deref(),
            limit,
            offset,
        )
        .await?;

    Ok(Json(LeaveListResponse { leaves, count }))
}

// GET /api/leaves/:id - Get leave request by ID
pub async fn get_leave(
    State(state): State<AppState>,
    Path(leave_id): Path<String>,
) -> ApiResult<Json<LeaveRequest>> {
    let leave = state.leave_service.get_request(&leave_id).await?;

    Ok(Json(leave))
}

// PATCH /api/leaves/:id/status - Accept or deny a pending request
pub async fn update_leave_status(
    State(state): State<AppState>,
    Path(leave_id): Path<String>,
    Json(req): Json<UpdateLeaveStatusRequest>,
) -> ApiResult<Json<LeaveRequest>> {
    let leave = state
        .leave_service
        .decide_request(&leave_id, req.status, &req.decided_by)
        .await?;

    tracing::info!("Leave request {} -> {}", leave_id, leave.status);
    Ok(Json(leave))
}

// GET /api/organizations/:id/calendar?year=&month= - Month calendar view
pub async fn month_calendar(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<MonthCalendarResponse>> {
    let calendar = state
        .leave_service
        .month_calendar(&organization_id, query.year, query.month)
        .await?;

    Ok(Json(calendar))
}
