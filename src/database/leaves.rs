use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{LeaveRequest, LeaveStatus};
use sqlx::Row;

impl Database {
    pub async fn create_leave_request(&self, leave: &LeaveRequest) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO leave_requests (id, organization_id, employee_id, leave_type_id,
                                         start_date, end_date, duration, reason, status,
                                         decided_by, decided_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&leave.id)
        .bind(&leave.organization_id)
        .bind(&leave.employee_id)
        .bind(&leave.leave_type_id)
        .bind(&leave.start_date)
        .bind(&leave.end_date)
        .bind(leave.duration)
        .bind(&leave.reason)
        .bind(leave.status.to_string())
        .bind(&leave.decided_by)
        .bind(&leave.decided_at)
        .bind(&leave.created_at)
        .bind(&leave.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_leave_request_by_id(&self, id: &str) -> ApiResult<Option<LeaveRequest>> {
        let row = sqlx::query(
            "SELECT id, organization_id, employee_id, leave_type_id, start_date, end_date,
                    duration, reason, status, decided_by, decided_at, created_at, updated_at
             FROM leave_requests WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Self::leave_from_row(&row)?))
        } else {
            Ok(None)
        }
    }

    /// List requests for an organization, newest first, optionally filtered by
    /// status and/or employee
    pub async fn list_leave_requests(
        &self,
        organization_id: &str,
        status_filter: Option<LeaveStatus>,
        employee_filter: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<LeaveRequest>, i64)> {
        let status = status_filter.map(|s| s.to_string());

        let rows = sqlx::query(
            "SELECT id, organization_id, employee_id, leave_type_id, start_date, end_date,
                    duration, reason, status, decided_by, decided_at, created_at, updated_at
             FROM leave_requests
             WHERE organization_id = ?
               AND (? IS NULL OR status = ?)
               AND (? IS NULL OR employee_id = ?)
             ORDER BY created_at DESC
             LIMIT ? OFFSET ?",
        )
        .bind(organization_id)
        .bind(&status)
        .bind(&status)
        .bind(employee_filter)
        .bind(employee_filter)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut leaves = Vec::new();
        for row in rows {
            leaves.push(Self::leave_from_row(&row)?);
        }

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM leave_requests
             WHERE organization_id = ?
               AND (? IS NULL OR status = ?)
               AND (? IS NULL OR employee_id = ?)",
        )
        .bind(organization_id)
        .bind(&status)
        .bind(&status)
        .bind(employee_filter)
        .bind(employee_filter)
        .fetch_one(&self.pool)
        .await?;

        Ok((leaves, count))
    }

    pub async fn update_leave_status(
        &self,
        id: &str,
        status: LeaveStatus,
        decided_by: &str,
        decided_at: &str,
    ) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE leave_requests SET status = ?, decided_by = ?, decided_at = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(status.to_string())
        .bind(decided_by)
        .bind(decided_at)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Requests of an employee with the given statuses whose start date falls
    /// inside `[window_start, window_end]` (TEXT dates compare correctly in
    /// YYYY-MM-DD form)
    pub async fn list_leaves_in_window(
        &self,
        employee_id: &str,
        leave_type_id: &str,
        status: LeaveStatus,
        window_start: &str,
        window_end: &str,
    ) -> ApiResult<Vec<LeaveRequest>> {
        let rows = sqlx::query(
            "SELECT id, organization_id, employee_id, leave_type_id, start_date, end_date,
                    duration, reason, status, decided_by, decided_at, created_at, updated_at
             FROM leave_requests
             WHERE employee_id = ? AND leave_type_id = ? AND status = ?
               AND start_date >= ? AND start_date <= ?
             ORDER BY start_date ASC",
        )
        .bind(employee_id)
        .bind(leave_type_id)
        .bind(status.to_string())
        .bind(window_start)
        .bind(window_end)
        .fetch_all(&self.pool)
        .await?;

        let mut leaves = Vec::new();
        for row in rows {
            leaves.push(Self::leave_from_row(&row)?);
        }

        Ok(leaves)
    }

    /// Pending and accepted requests overlapping `[month_start, month_end]`,
    /// the data behind the month calendar
    pub async fn list_leaves_overlapping(
        &self,
        organization_id: &str,
        month_start: &str,
        month_end: &str,
    ) -> ApiResult<Vec<LeaveRequest>> {
        let rows = sqlx::query(
            "SELECT id, organization_id, employee_id, leave_type_id, start_date, end_date,
                    duration, reason, status, decided_by, decided_at, created_at, updated_at
             FROM leave_requests
             WHERE organization_id = ? AND status IN ('pending', 'accepted')
               AND start_date <= ? AND end_date >= ?
             ORDER BY start_date ASC",
        )
        .bind(organization_id)
        .bind(month_end)
        .bind(month_start)
        .fetch_all(&self.pool)
        .await?;

        let mut leaves = Vec::new();
        for row in rows {
            leaves.push(Self::leave_from_row(&row)?);
        }

        Ok(leaves)
    }

    fn leave_from_row(row: &sqlx::any::AnyRow) -> ApiResult<LeaveRequest> {
        let status: String = row.try_get("status")?;
        Ok(LeaveRequest {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            employee_id: row.try_get("employee_id")?,
            leave_type_id: row.try_get("leave_type_id")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            duration: row.try_get("duration")?,
            reason: row.try_get("reason").ok(),
            status: status
                .parse()
                .map_err(|e: String| ApiError::Internal(e))?,
            decided_by: row.try_get("decided_by").ok(),
            decided_at: row.try_get("decided_at").ok(),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
