use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{middleware::ApiResult, AppState},
    models::{CreateLeaveTypeRequest, LeaveType, UpdateLeaveTypeRequest},
};

// POST /api/organizations/:id/leave-types - Create a leave type
pub async fn create_leave_type(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Json(req): Json<CreateLeaveTypeRequest>,
) -> ApiResult<(StatusCode, Json<LeaveType>)> {
    let leave_type = state
        .leave_type_service
        .create_leave_type(&organization_id, req.name, req.cycle, req.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(leave_type)))
}

// GET /api/organizations/:id/leave-types - List leave types
pub async fn list_leave_types(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> ApiResult<Json<Vec<LeaveType>>> {
    let leave_types = state
        .leave_type_service
        .list_leave_types(&organization_id)
        .await?;

    Ok(Json(leave_types))
}

// GET /api/leave-types/:id - Get leave type by ID
pub async fn get_leave_type(
    State(state): State<AppState>,
    Path(leave_type_id): Path<String>,
) -> ApiResult<Json<LeaveType>> {
    let leave_type = state
        .leave_type_service
        .get_leave_type(&leave_type_id)
        .await?;

    Ok(Json(leave_type))
}

// PATCH /api/leave-types/:id - Update a leave type
pub async fn update_leave_type(
    State(state): State<AppState>,
    Path(leave_type_id): Path<String>,
    Json(req): Json<UpdateLeaveTypeRequest>,
) -> ApiResult<Json<LeaveType>> {
    let leave_type = state
        .leave_type_service
        .update_leave_type(&leave_type_id, req.name.as_deref(), req.cycle, req.amount)
        .await?;

    Ok(Json(leave_type))
}

// DELETE /api/leave-types/:id - Delete a leave type
pub async fn delete_leave_type(
    State(state): State<AppState>,
    Path(leave_type_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .leave_type_service
        .delete_leave_type(&leave_type_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
