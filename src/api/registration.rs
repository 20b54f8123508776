use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::{middleware::ApiResult, AppState},
    models::{RegistrationRequest, RegistrationResponse},
};

// POST /api/registration - Create an organization with its first employee
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegistrationRequest>,
) -> ApiResult<(StatusCode, Json<RegistrationResponse>)> {
    let (organization, employee) = state.registration_service.register(req).await?;

    tracing::info!(
        "Registration completed: organization={}, employee={}",
        organization.id,
        employee.id
    );
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            organization,
            employee,
        }),
    ))
}
