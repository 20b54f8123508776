use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{Employee, Team, TeamMembership};
use sqlx::Row;

impl Database {
    // ========== Team Operations ==========

    pub async fn create_team(&self, team: &Team) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO teams (id, organization_id, name, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&team.id)
        .bind(&team.organization_id)
        .bind(&team.name)
        .bind(&team.description)
        .bind(&team.created_at)
        .bind(&team.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::Conflict(format!("Team with name '{}' already exists", team.name))
            } else {
                ApiError::Internal(e.to_string())
            }
        })?;

        tracing::info!("Team created: id={}, name={}", team.id, team.name);
        Ok(())
    }

    pub async fn get_team_by_id(&self, id: &str) -> ApiResult<Option<Team>> {
        let row = sqlx::query(
            "SELECT id, organization_id, name, description, created_at, updated_at
             FROM teams WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Team {
                id: row.try_get("id")?,
                organization_id: row.try_get("organization_id")?,
                name: row.try_get("name")?,
                description: row.try_get("description").ok(),
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    pub async fn list_teams(&self, organization_id: &str) -> ApiResult<Vec<Team>> {
        let rows = sqlx::query(
            "SELECT id, organization_id, name, description, created_at, updated_at
             FROM teams WHERE organization_id = ? ORDER BY name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(Team {
                id: row.try_get("id")?,
                organization_id: row.try_get("organization_id")?,
                name: row.try_get("name")?,
                description: row.try_get("description").ok(),
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            });
        }

        Ok(teams)
    }

    pub async fn update_team(
        &self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ApiResult<()> {
        let current = self
            .get_team_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Team {} not found", id)))?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query("UPDATE teams SET name = ?, description = ?, updated_at = ? WHERE id = ?")
            .bind(name.unwrap_or(&current.name))
            .bind(description.or(current.description.as_deref()))
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_team(&self, id: &str) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Team {} not found", id)));
        }

        Ok(())
    }

    // ========== Team Membership Operations ==========

    pub async fn add_team_member(&self, membership: &TeamMembership) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO team_members (id, team_id, employee_id, joined_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&membership.id)
        .bind(&membership.team_id)
        .bind(&membership.employee_id)
        .bind(&membership.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::Conflict("Employee is already a member of this team".to_string())
            } else {
                ApiError::Internal(e.to_string())
            }
        })?;

        Ok(())
    }

    pub async fn remove_team_member(&self, team_id: &str, employee_id: &str) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_id = ? AND employee_id = ?")
            .bind(team_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Employee {} is not a member of team {}",
                employee_id, team_id
            )));
        }

        Ok(())
    }

    pub async fn get_team_members(&self, team_id: &str) -> ApiResult<Vec<Employee>> {
        let rows = sqlx::query(
            "SELECT e.id, e.organization_id, e.email, e.password_hash, e.first_name, e.last_name,
                    e.phone, e.country_code, e.timezone, e.avatar_url, e.created_at, e.updated_at
             FROM employees e
             INNER JOIN team_members tm ON tm.employee_id = e.id
             WHERE tm.team_id = ?
             ORDER BY tm.joined_at ASC",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        let mut members = Vec::new();
        for row in rows {
            members.push(Self::employee_from_row(&row)?);
        }

        Ok(members)
    }

    pub async fn is_team_member(&self, team_id: &str, employee_id: &str) -> ApiResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM team_members WHERE team_id = ? AND employee_id = ?",
        )
        .bind(team_id)
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
