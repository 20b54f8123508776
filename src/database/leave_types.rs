use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{LeaveCycle, LeaveType};
use sqlx::Row;

impl Database {
    pub async fn create_leave_type(&self, leave_type: &LeaveType) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO leave_types (id, organization_id, name, cycle, amount, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&leave_type.id)
        .bind(&leave_type.organization_id)
        .bind(&leave_type.name)
        .bind(leave_type.cycle.to_string())
        .bind(leave_type.amount)
        .bind(&leave_type.created_at)
        .bind(&leave_type.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::Conflict(format!(
                    "Leave type with name '{}' already exists",
                    leave_type.name
                ))
            } else {
                ApiError::Internal(e.to_string())
            }
        })?;

        Ok(())
    }

    pub async fn get_leave_type_by_id(&self, id: &str) -> ApiResult<Option<LeaveType>> {
        let row = sqlx::query(
            "SELECT id, organization_id, name, cycle, amount, created_at, updated_at
             FROM leave_types WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Self::leave_type_from_row(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_leave_types(&self, organization_id: &str) -> ApiResult<Vec<LeaveType>> {
        let rows = sqlx::query(
            "SELECT id, organization_id, name, cycle, amount, created_at, updated_at
             FROM leave_types WHERE organization_id = ? ORDER BY name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        let mut leave_types = Vec::new();
        for row in rows {
            leave_types.push(Self::leave_type_from_row(&row)?);
        }

        Ok(leave_types)
    }

    pub async fn update_leave_type(
        &self,
        id: &str,
        name: Option<&str>,
        cycle: Option<LeaveCycle>,
        amount: Option<i64>,
    ) -> ApiResult<()> {
        let current = self
            .get_leave_type_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Leave type {} not found", id)))?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE leave_types SET name = ?, cycle = ?, amount = ?, updated_at = ? WHERE id = ?",
        )
        .bind(name.unwrap_or(&current.name))
        .bind(cycle.unwrap_or(current.cycle).to_string())
        .bind(amount.unwrap_or(current.amount))
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_leave_type(&self, id: &str) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM leave_types WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Leave type {} not found", id)));
        }

        Ok(())
    }

    /// Count of leave requests referencing a leave type; used to guard deletion
    pub async fn count_leaves_for_type(&self, leave_type_id: &str) -> ApiResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM leave_requests WHERE leave_type_id = ?",
        )
        .bind(leave_type_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    fn leave_type_from_row(row: &sqlx::any::AnyRow) -> ApiResult<LeaveType> {
        let cycle: String = row.try_get("cycle")?;
        Ok(LeaveType {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            name: row.try_get("name")?,
            cycle: cycle
                .parse()
                .map_err(|e: String| ApiError::Internal(e))?,
            amount: row.try_get("amount")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
