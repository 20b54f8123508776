use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub cycle: LeaveCycle,
    pub amount: i64, // entitlement in days per cycle
    pub created_at: String,
    pub updated_at: String,
}

impl LeaveType {
    pub fn new(organization_id: String, name: String, cycle: LeaveCycle, amount: i64) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            organization_id,
            name,
            cycle,
            amount,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Entitlement renewal cycle for a leave type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveCycle {
    Monthly,
    Yearly,
}

impl std::fmt::Display for LeaveCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveCycle::Monthly => write!(f, "monthly"),
            LeaveCycle::Yearly => write!(f, "yearly"),
        }
    }
}

impl std::str::FromStr for LeaveCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(LeaveCycle::Monthly),
            "yearly" => Ok(LeaveCycle::Yearly),
            _ => Err(format!("Invalid leave cycle: {}", s)),
        }
    }
}

/// DTO for creating a leave type
#[derive(Debug, Deserialize)]
pub struct CreateLeaveTypeRequest {
    pub name: String,
    pub cycle: LeaveCycle,
    pub amount: i64,
}

/// DTO for updating a leave type
#[derive(Debug, Deserialize)]
pub struct UpdateLeaveTypeRequest {
    pub name: Option<String>,
    pub cycle: Option<LeaveCycle>,
    pub amount: Option<i64>,
}
