use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{middleware::ApiResult, AppState},
    models::{Organization, UpdateOrganizationRequest},
};

// GET /api/organizations/:id - Get organization settings
pub async fn get_organization(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> ApiResult<Json<Organization>> {
    let organization = state
        .organization_service
        .get_organization(&organization_id)
        .await?;

    Ok(Json(organization))
}

// PATCH /api/organizations/:id - Update organization settings
pub async fn update_organization(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Json(req): Json<UpdateOrganizationRequest>,
) -> ApiResult<Json<Organization>> {
    let organization = state
        .organization_service
        .update_organization(
            &organization_id,
            req.name.as_deref(),
            req.country_code.as_deref(),
            req.timezone.as_deref(),
            req.weekend_days.as_deref(),
        )
        .await?;

    tracing::info!("Organization updated: id={}", organization_id);
    Ok(Json(organization))
}
