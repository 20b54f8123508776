use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Employee, UpdateEmployeeRequest},
    utils::validation::{validate_and_normalize_country, validate_timezone},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct EmployeeService {
    db: Arc<Database>,
}

impl EmployeeService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn get_employee(&self, employee_id: &str) -> ApiResult<Employee> {
        self.db
            .get_employee_by_id(employee_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", employee_id)))
    }

    pub async fn list_employees(
        &self,
        organization_id: &str,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Employee>, i64)> {
        self.db.list_employees(organization_id, limit, offset).await
    }

    /// Profile update; unset fields keep their stored values
    pub async fn update_profile(
        &self,
        employee_id: &str,
        mut update: UpdateEmployeeRequest,
    ) -> ApiResult<Employee> {
        if let Some(ref country) = update.country_code {
            update.country_code = Some(validate_and_normalize_country(country)?);
        }
        if let Some(ref timezone) = update.timezone {
            update.timezone = Some(validate_timezone(timezone)?);
        }
        if let Some(ref first_name) = update.first_name {
            if first_name.trim().len() < 2 {
                return Err(ApiError::BadRequest(
                    "First name must be at least 2 characters".to_string(),
                ));
            }
        }
        if let Some(ref last_name) = update.last_name {
            if last_name.trim().len() < 2 {
                return Err(ApiError::BadRequest(
                    "Last name must be at least 2 characters".to_string(),
                ));
            }
        }

        self.db.update_employee(employee_id, &update).await?;

        info!("Updated profile for employee {}", employee_id);
        self.get_employee(employee_id).await
    }
}
