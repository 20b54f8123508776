use serde::{Deserialize, Serialize};

/// Holiday calendar entry, scoped to a country so multi-country organizations
/// can hold separate sets
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Holiday {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub date: String, // Date in YYYY-MM-DD format
    pub country_code: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Holiday {
    pub fn new(organization_id: String, name: String, date: String, country_code: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            organization_id,
            name,
            date,
            country_code,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// DTO for creating a holiday
#[derive(Debug, Deserialize)]
pub struct CreateHolidayRequest {
    pub name: String,
    pub date: String, // YYYY-MM-DD
    pub country_code: String,
}

/// DTO for updating a holiday
#[derive(Debug, Deserialize)]
pub struct UpdateHolidayRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub country_code: Option<String>,
}

/// DTO for holiday list response
#[derive(Debug, Serialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<Holiday>,
    pub count: i64,
}
