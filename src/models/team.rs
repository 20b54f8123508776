use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Team {
    pub fn new(organization_id: String, name: String, description: Option<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            organization_id,
            name,
            description,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMembership {
    pub id: String,
    pub team_id: String,
    pub employee_id: String,
    pub joined_at: String,
}

impl TeamMembership {
    pub fn new(team_id: String, employee_id: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            team_id,
            employee_id,
            joined_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// DTO for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for renaming a team; omitted fields are preserved
#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddTeamMemberRequest {
    pub employee_id: String,
}
