use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Employee, Team, TeamMembership},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct TeamService {
    db: Arc<Database>,
}

impl TeamService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create_team(&self, team: Team) -> ApiResult<Team> {
        if team.name.trim().is_empty() {
            return Err(ApiError::BadRequest("Team name must not be empty".to_string()));
        }
        self.db.create_team(&team).await?;
        Ok(team)
    }

    pub async fn get_team(&self, team_id: &str) -> ApiResult<Team> {
        self.db
            .get_team_by_id(team_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Team {} not found", team_id)))
    }

    pub async fn list_teams(&self, organization_id: &str) -> ApiResult<Vec<Team>> {
        self.db.list_teams(organization_id).await
    }

    pub async fn update_team(
        &self,
        team_id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ApiResult<Team> {
        self.db.update_team(team_id, name, description).await?;
        info!("Updated team {}", team_id);
        self.get_team(team_id).await
    }

    pub async fn delete_team(&self, team_id: &str) -> ApiResult<()> {
        self.db.delete_team(team_id).await?;
        info!("Deleted team {}", team_id);
        Ok(())
    }

    pub async fn add_member(&self, team_id: &str, employee_id: &str) -> ApiResult<()> {
        // Verify both sides exist before inserting the link
        let team = self.get_team(team_id).await?;
        let employee = self
            .db
            .get_employee_by_id(employee_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", employee_id)))?;

        if employee.organization_id != team.organization_id {
            return Err(ApiError::BadRequest(
                "Employee and team belong to different organizations".to_string(),
            ));
        }

        let membership = TeamMembership::new(team_id.to_string(), employee_id.to_string());
        self.db.add_team_member(&membership).await?;

        info!("Employee {} added to team {}", employee_id, team_id);
        Ok(())
    }

    pub async fn remove_member(&self, team_id: &str, employee_id: &str) -> ApiResult<()> {
        self.db.remove_team_member(team_id, employee_id).await?;
        info!("Employee {} removed from team {}", employee_id, team_id);
        Ok(())
    }

    pub async fn get_members(&self, team_id: &str) -> ApiResult<Vec<Employee>> {
        self.get_team(team_id).await?;
        self.db.get_team_members(team_id).await
    }

    pub async fn is_member(&self, team_id: &str, employee_id: &str) -> ApiResult<bool> {
        self.db.is_team_member(team_id, employee_id).await
    }
}
