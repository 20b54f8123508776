use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::Holiday;

impl Database {
    /// Create a new holiday
    pub async fn create_holiday(&self, holiday: &Holiday) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO holidays (id, organization_id, name, date, country_code, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&holiday.id)
        .bind(&holiday.organization_id)
        .bind(&holiday.name)
        .bind(&holiday.date)
        .bind(&holiday.country_code)
        .bind(&holiday.created_at)
        .bind(&holiday.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::Conflict(format!(
                    "Holiday on {} already exists for country {}",
                    holiday.date, holiday.country_code
                ))
            } else {
                ApiError::Internal(e.to_string())
            }
        })?;

        Ok(())
    }

    /// Get a holiday by ID
    pub async fn get_holiday(&self, id: &str) -> ApiResult<Option<Holiday>> {
        let holiday = sqlx::query_as::<_, Holiday>("SELECT * FROM holidays WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(holiday)
    }

    /// Holidays of one organization for a given year and country, the set the
    /// working-day calendar is built from
    pub async fn list_holidays(
        &self,
        organization_id: &str,
        year: i32,
        country_code: &str,
    ) -> ApiResult<Vec<Holiday>> {
        let holidays = sqlx::query_as::<_, Holiday>(
            "SELECT * FROM holidays
             WHERE organization_id = ? AND substr(date, 1, 4) = ? AND country_code = ?
             ORDER BY date ASC",
        )
        .bind(organization_id)
        .bind(format!("{:04}", year))
        .bind(country_code)
        .fetch_all(&self.pool)
        .await?;

        Ok(holidays)
    }

    /// Holidays falling inside `[range_start, range_end]` for a country
    pub async fn list_holidays_in_range(
        &self,
        organization_id: &str,
        country_code: &str,
        range_start: &str,
        range_end: &str,
    ) -> ApiResult<Vec<Holiday>> {
        let holidays = sqlx::query_as::<_, Holiday>(
            "SELECT * FROM holidays
             WHERE organization_id = ? AND country_code = ? AND date >= ? AND date <= ?
             ORDER BY date ASC",
        )
        .bind(organization_id)
        .bind(country_code)
        .bind(range_start)
        .bind(range_end)
        .fetch_all(&self.pool)
        .await?;

        Ok(holidays)
    }

    /// Update a holiday
    pub async fn update_holiday(
        &self,
        id: &str,
        name: Option<&str>,
        date: Option<&str>,
        country_code: Option<&str>,
    ) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        // Get current holiday to preserve unchanged fields
        let current = self
            .get_holiday(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", id)))?;

        sqlx::query(
            "UPDATE holidays SET name = ?, date = ?, country_code = ?, updated_at = ? WHERE id = ?",
        )
        .bind(name.unwrap_or(&current.name))
        .bind(date.unwrap_or(&current.date))
        .bind(country_code.unwrap_or(&current.country_code))
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a holiday
    pub async fn delete_holiday(&self, id: &str) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Holiday {} not found", id)));
        }

        Ok(())
    }
}
