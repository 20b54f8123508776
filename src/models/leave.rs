use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub organization_id: String,
    pub employee_id: String,
    pub leave_type_id: String,
    pub start_date: String, // YYYY-MM-DD
    pub end_date: String,   // YYYY-MM-DD
    pub duration: i64,      // day count derived from the dates at creation
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub decided_by: Option<String>,
    pub decided_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl LeaveRequest {
    pub fn new(
        organization_id: String,
        employee_id: String,
        leave_type_id: String,
        start_date: String,
        end_date: String,
        duration: i64,
        reason: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            organization_id,
            employee_id,
            leave_type_id,
            start_date,
            end_date,
            duration,
            reason,
            status: LeaveStatus::Pending,
            decided_by: None,
            decided_at: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Accepted,
    Denied,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Accepted => write!(f, "accepted"),
            LeaveStatus::Denied => write!(f, "denied"),
        }
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "accepted" => Ok(LeaveStatus::Accepted),
            "denied" => Ok(LeaveStatus::Denied),
            _ => Err(format!("Invalid leave status: {}", s)),
        }
    }
}

/// DTO for submitting a leave request
#[derive(Debug, Deserialize)]
pub struct CreateLeaveRequest {
    pub employee_id: String,
    pub leave_type_id: String,
    pub start_date: String, // YYYY-MM-DD
    pub end_date: String,   // YYYY-MM-DD
    pub reason: Option<String>,
}

/// DTO for accepting or denying a pending request
#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveStatus,
    pub decided_by: String,
}

#[derive(Debug, Serialize)]
pub struct LeaveListResponse {
    pub leaves: Vec<LeaveRequest>,
    pub count: i64,
}

/// Remaining entitlement for one leave type over the cycle window containing
/// the `as_of` date
#[derive(Debug, Serialize)]
pub struct LeaveBalance {
    pub leave_type: super::LeaveType,
    pub entitlement: i64,
    pub used: i64,
    pub pending: i64,
    pub remaining: i64,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub employee_id: String,
    pub as_of: String, // YYYY-MM-DD
    pub balances: Vec<LeaveBalance>,
}

/// Month view: every request overlapping the month plus its holidays
#[derive(Debug, Serialize)]
pub struct MonthCalendarResponse {
    pub year: i32,
    pub month: u32,
    pub leaves: Vec<LeaveRequest>,
    pub holidays: Vec<super::Holiday>,
}
