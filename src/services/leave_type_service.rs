use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{LeaveCycle, LeaveType},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct LeaveTypeService {
    db: Arc<Database>,
}

impl LeaveTypeService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create_leave_type(
        &self,
        organization_id: &str,
        name: String,
        cycle: LeaveCycle,
        amount: i64,
    ) -> ApiResult<LeaveType> {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Leave type name must not be empty".to_string(),
            ));
        }
        if amount <= 0 {
            return Err(ApiError::BadRequest(
                "Leave type amount must be a positive number of days".to_string(),
            ));
        }

        let leave_type = LeaveType::new(organization_id.to_string(), name, cycle, amount);
        self.db.create_leave_type(&leave_type).await?;

        info!(
            "Created leave type: {} ({}, {} days per {})",
            leave_type.name, leave_type.id, leave_type.amount, leave_type.cycle
        );
        Ok(leave_type)
    }

    pub async fn get_leave_type(&self, leave_type_id: &str) -> ApiResult<LeaveType> {
        self.db
            .get_leave_type_by_id(leave_type_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Leave type {} not found", leave_type_id)))
    }

    pub async fn list_leave_types(&self, organization_id: &str) -> ApiResult<Vec<LeaveType>> {
        self.db.list_leave_types(organization_id).await
    }

    pub async fn update_leave_type(
        &self,
        leave_type_id: &str,
        name: Option<&str>,
        cycle: Option<LeaveCycle>,
        amount: Option<i64>,
    ) -> ApiResult<LeaveType> {
        if let Some(amount) = amount {
            if amount <= 0 {
                return Err(ApiError::BadRequest(
                    "Leave type amount must be a positive number of days".to_string(),
                ));
            }
        }

        self.db
            .update_leave_type(leave_type_id, name, cycle, amount)
            .await?;

        info!("Updated leave type {}", leave_type_id);
        self.get_leave_type(leave_type_id).await
    }

    /// Deletion is refused while leave requests still reference the type
    pub async fn delete_leave_type(&self, leave_type_id: &str) -> ApiResult<()> {
        let in_use = self.db.count_leaves_for_type(leave_type_id).await?;
        if in_use > 0 {
            return Err(ApiError::Conflict(format!(
                "Leave type {} is referenced by {} leave request(s)",
                leave_type_id, in_use
            )));
        }

        self.db.delete_leave_type(leave_type_id).await?;
        info!("Deleted leave type {}", leave_type_id);
        Ok(())
    }
}
