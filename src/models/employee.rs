use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub organization_id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub timezone: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Employee {
    pub fn new(
        organization_id: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        timezone: String,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            organization_id,
            email,
            password_hash,
            first_name,
            last_name,
            phone: None,
            country_code: None,
            timezone,
            avatar_url: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// DTO for organization + first account registration
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub organization_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub country_code: String,
    pub timezone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub organization: super::Organization,
    pub employee: Employee,
}

/// DTO for profile updates; omitted fields are preserved
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    pub count: i64,
}
