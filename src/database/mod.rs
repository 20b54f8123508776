use sqlx::{any::AnyPoolOptions, AnyPool, Row};

use crate::{
    api::middleware::error::{ApiError, ApiResult},
    models::*,
};

mod holidays;
mod leave_types;
mod leaves;
mod teams;

#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .connect(database_url)
            .await?;

        // Enable foreign keys for SQLite
        if database_url.starts_with("sqlite") {
            sqlx::query("PRAGMA foreign_keys = ON")
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    // Organization operations

    pub async fn create_organization(&self, organization: &Organization) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO organizations (id, name, country_code, timezone, weekend_days, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&organization.id)
        .bind(&organization.name)
        .bind(&organization.country_code)
        .bind(&organization.timezone)
        .bind(&organization.weekend_days)
        .bind(&organization.created_at)
        .bind(&organization.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_organization_by_id(&self, id: &str) -> ApiResult<Option<Organization>> {
        let row = sqlx::query(
            "SELECT id, name, country_code, timezone, weekend_days, created_at, updated_at
             FROM organizations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Organization {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                country_code: row.try_get("country_code")?,
                timezone: row.try_get("timezone")?,
                weekend_days: row.try_get("weekend_days")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    pub async fn update_organization(
        &self,
        id: &str,
        name: Option<&str>,
        country_code: Option<&str>,
        timezone: Option<&str>,
        weekend_days: Option<&str>,
    ) -> ApiResult<()> {
        let current = self
            .get_organization_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Organization {} not found", id)))?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE organizations SET name = ?, country_code = ?, timezone = ?, weekend_days = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(name.unwrap_or(&current.name))
        .bind(country_code.unwrap_or(&current.country_code))
        .bind(timezone.unwrap_or(&current.timezone))
        .bind(weekend_days.unwrap_or(&current.weekend_days))
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // Employee operations

    pub async fn create_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO employees (id, organization_id, email, password_hash, first_name, last_name,
                                    phone, country_code, timezone, avatar_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&employee.id)
        .bind(&employee.organization_id)
        .bind(&employee.email)
        .bind(&employee.password_hash)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.phone)
        .bind(&employee.country_code)
        .bind(&employee.timezone)
        .bind(&employee.avatar_url)
        .bind(&employee.created_at)
        .bind(&employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::Conflict(format!("Employee with email '{}' already exists", employee.email))
            } else {
                ApiError::Internal(e.to_string())
            }
        })?;

        Ok(())
    }

    pub async fn get_employee_by_id(&self, id: &str) -> ApiResult<Option<Employee>> {
        let row = sqlx::query(
            "SELECT id, organization_id, email, password_hash, first_name, last_name,
                    phone, country_code, timezone, avatar_url, created_at, updated_at
             FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Self::employee_from_row(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn get_employee_by_email(
        &self,
        organization_id: &str,
        email: &str,
    ) -> ApiResult<Option<Employee>> {
        let row = sqlx::query(
            "SELECT id, organization_id, email, password_hash, first_name, last_name,
                    phone, country_code, timezone, avatar_url, created_at, updated_at
             FROM employees WHERE organization_id = ? AND email = ?",
        )
        .bind(organization_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Self::employee_from_row(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_employees(
        &self,
        organization_id: &str,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Employee>, i64)> {
        let rows = sqlx::query(
            "SELECT id, organization_id, email, password_hash, first_name, last_name,
                    phone, country_code, timezone, avatar_url, created_at, updated_at
             FROM employees WHERE organization_id = ?
             ORDER BY last_name ASC, first_name ASC
             LIMIT ? OFFSET ?",
        )
        .bind(organization_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut employees = Vec::new();
        for row in rows {
            employees.push(Self::employee_from_row(&row)?);
        }

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE organization_id = ?",
        )
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((employees, count))
    }

    pub async fn update_employee(
        &self,
        id: &str,
        update: &UpdateEmployeeRequest,
    ) -> ApiResult<()> {
        let current = self
            .get_employee_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE employees SET first_name = ?, last_name = ?, phone = ?, country_code = ?,
                                  timezone = ?, avatar_url = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(update.first_name.as_deref().unwrap_or(&current.first_name))
        .bind(update.last_name.as_deref().unwrap_or(&current.last_name))
        .bind(update.phone.as_deref().or(current.phone.as_deref()))
        .bind(update.country_code.as_deref().or(current.country_code.as_deref()))
        .bind(update.timezone.as_deref().unwrap_or(&current.timezone))
        .bind(update.avatar_url.as_deref().or(current.avatar_url.as_deref()))
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn employee_from_row(row: &sqlx::any::AnyRow) -> ApiResult<Employee> {
        Ok(Employee {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            phone: row.try_get("phone").ok(),
            country_code: row.try_get("country_code").ok(),
            timezone: row.try_get("timezone")?,
            avatar_url: row.try_get("avatar_url").ok(),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
