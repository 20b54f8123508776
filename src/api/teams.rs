use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{middleware::ApiResult, AppState},
    models::{AddTeamMemberRequest, CreateTeamRequest, Employee, Team, UpdateTeamRequest},
};

// POST /api/organizations/:id/teams - Create a new team
pub async fn create_team(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let team = Team::new(organization_id, req.name, req.description);
    let created_team = state.team_service.create_team(team).await?;

    tracing::info!("Team created: id={}", created_team.id);
    Ok((StatusCode::CREATED, Json(created_team)))
}

// GET /api/organizations/:id/teams - List teams of an organization
pub async fn list_teams(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> ApiResult<Json<Vec<Team>>> {
    let teams = state.team_service.list_teams(&organization_id).await?;

    Ok(Json(teams))
}

// GET /api/teams/:id - Get team by ID
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<Team>> {
    let team = state.team_service.get_team(&team_id).await?;

    Ok(Json(team))
}

// PATCH /api/teams/:id - Rename a team
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(req): Json<UpdateTeamRequest>,
) -> ApiResult<Json<Team>> {
    let team = state
        .team_service
        .update_team(&team_id, req.name.as_deref(), req.description.as_deref())
        .await?;

    Ok(Json(team))
}

// DELETE /api/teams/:id - Delete a team
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.team_service.delete_team(&team_id).await?;

    tracing::info!("Team deleted: id={}", team_id);
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/teams/:id/members - Add member to team
pub async fn add_team_member(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(req): Json<AddTeamMemberRequest>,
) -> ApiResult<StatusCode> {
    state
        .team_service
        .add_member(&team_id, &req.employee_id)
        .await?;

    tracing::info!("Employee {} added to team {}", req.employee_id, team_id);
    Ok(StatusCode::CREATED)
}

// DELETE /api/teams/:id/members/:employee_id - Remove member from team
pub async fn remove_team_member(
    State(state): State<AppState>,
    Path((team_id, employee_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state
        .team_service
        .remove_member(&team_id, &employee_id)
        .await?;

    tracing::info!("Employee {} removed from team {}", employee_id, team_id);
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/teams/:id/members - Get team members
pub async fn get_team_members(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<Vec<Employee>>> {
    let members = state.team_service.get_members(&team_id).await?;

    Ok(Json(members))
}
