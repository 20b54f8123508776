use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::{middleware::ApiResult, AppState},
    models::{BalanceResponse, Employee, EmployeeListResponse, UpdateEmployeeRequest},
    utils::validation::parse_date,
};

#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub as_of: Option<String>, // YYYY-MM-DD, defaults to today
}

// GET /api/organizations/:id/employees - List employees of an organization
pub async fn list_employees(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Query(query): Query<ListEmployeesQuery>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let limit = query.limit.unwrap_or(50).clamp(1, 200);
    let offset = query.offset.unwrap_or(0).max(0);

    let (employees, count) = state
        .employee_service
        .list_employees(&organization_id, limit, offset)
        .await?;

    Ok(Json(EmployeeListResponse { employees, count }))
}

// GET /api/employees/:id - Get employee by ID
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let employee = state.employee_service.get_employee(&employee_id).await?;

    Ok(Json(employee))
}

// PATCH /api/employees/:id - Update employee profile
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<Employee>> {
    let employee = state
        .employee_service
        .update_profile(&employee_id, req)
        .await?;

    tracing::info!("Employee profile updated: id={}", employee_id);
    Ok(Json(employee))
}

// GET /api/employees/:id/balance - Leave balance per leave type
pub async fn get_balance(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<BalanceQuery>,
) -> ApiResult<Json<BalanceResponse>> {
    let as_of = match query.as_of.as_deref() {
        Some(value) => parse_date("as_of", value)?,
        None => chrono::Utc::now().date_naive(),
    };

    let balance = state.leave_service.balance(&employee_id, as_of).await?;

    Ok(Json(balance))
}
